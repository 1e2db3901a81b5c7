// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Kartoteka-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Kartoteka and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Lazy hydration for multi-panel detail views.
//!
//! Each panel is fetched at most once per bound data set. Rebinding the view
//! to new underlying data resets every panel and bumps a generation counter,
//! so a fetch that was still in flight across the rebind can never apply its
//! stale result: its [`LoadTicket`] carries the old generation and is dropped
//! on completion.

use std::collections::HashMap;
use std::hash::Hash;

/// Per-panel hydration state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PanelState {
    #[default]
    NotLoaded,
    Loading,
    Loaded,
}

/// Who caused a panel selection. User selections create a history entry;
/// programmatic selections (a route being replayed by `back`/`forward` or an
/// initial render) must not re-enter the navigator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionSource {
    User,
    Programmatic,
}

/// Proof that a load was started, stamped with the generation it belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket<P> {
    panel: P,
    generation: u64,
}

impl<P: Copy> LoadTicket<P> {
    pub fn panel(&self) -> P {
        self.panel
    }
}

#[derive(Debug, Clone)]
pub struct PanelHydration<P> {
    states: HashMap<P, PanelState>,
    generation: u64,
}

impl<P: Copy + Eq + Hash> PanelHydration<P> {
    pub fn new() -> Self {
        Self { states: HashMap::new(), generation: 0 }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// A panel that was never touched reports `NotLoaded`.
    pub fn state(&self, panel: P) -> PanelState {
        self.states.get(&panel).copied().unwrap_or_default()
    }

    pub fn is_loaded(&self, panel: P) -> bool {
        self.state(panel) == PanelState::Loaded
    }

    /// Resets every panel to `NotLoaded`. Call whenever the view is rebound
    /// to new underlying data; tickets issued before the rebind become stale.
    pub fn rebind(&mut self) {
        self.states.clear();
        self.generation = self.generation.wrapping_add(1);
    }

    /// Forgets one panel so the next selection fetches it again. Other
    /// panels and the generation are untouched; callers invalidate only
    /// settled panels, never one with a fetch still in flight.
    pub fn invalidate(&mut self, panel: P) {
        self.states.remove(&panel);
    }

    /// Starts a load if, and only if, the panel is `NotLoaded`. Re-selecting
    /// a `Loading` or `Loaded` panel is a no-op fetch-wise.
    pub fn begin_load(&mut self, panel: P) -> Option<LoadTicket<P>> {
        match self.state(panel) {
            PanelState::NotLoaded => {
                self.states.insert(panel, PanelState::Loading);
                Some(LoadTicket { panel, generation: self.generation })
            }
            PanelState::Loading | PanelState::Loaded => None,
        }
    }

    /// Marks the ticket's panel `Loaded`. Returns `false` and changes nothing
    /// when the ticket is stale; the caller must then discard the fetched
    /// data as well.
    pub fn complete_load(&mut self, ticket: LoadTicket<P>) -> bool {
        if ticket.generation != self.generation {
            return false;
        }
        self.states.insert(ticket.panel, PanelState::Loaded);
        true
    }

    /// Returns a failed load's panel to `NotLoaded` so the next selection
    /// retries. Stale tickets are ignored.
    pub fn abort_load(&mut self, ticket: LoadTicket<P>) {
        if ticket.generation != self.generation {
            return;
        }
        if self.state(ticket.panel) == PanelState::Loading {
            self.states.insert(ticket.panel, PanelState::NotLoaded);
        }
    }
}

impl<P: Copy + Eq + Hash> Default for PanelHydration<P> {
    fn default() -> Self {
        Self::new()
    }
}
