// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Kartoteka-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Kartoteka and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Browser-style navigation with bounded history.
//!
//! [`HistoryNavigator`] owns the current [`Route`] plus back/forward stacks
//! and dispatches every place change through a single render callback. All
//! operations are total: navigation is a best-effort UI concern, so empty
//! stacks and missing renderers are silent no-ops rather than errors.

use std::collections::VecDeque;
use std::fmt;

use crate::model::Route;

pub mod panels;


pub const DEFAULT_HISTORY_DEPTH: usize = 10;

/// Single active render callback; replacing it discards the previous one.
pub type Renderer = Box<dyn FnMut(&Route)>;

pub struct HistoryNavigator {
    max_depth: usize,
    back_stack: VecDeque<Route>,
    forward_stack: VecDeque<Route>,
    current: Option<Route>,
    renderer: Option<Renderer>,
}

impl Default for HistoryNavigator {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for HistoryNavigator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HistoryNavigator")
            .field("max_depth", &self.max_depth)
            .field("back_stack", &self.back_stack)
            .field("forward_stack", &self.forward_stack)
            .field("current", &self.current)
            .field("renderer", &self.renderer.as_ref().map(|_| "FnMut(&Route)"))
            .finish()
    }
}

impl HistoryNavigator {
    pub fn new() -> Self {
        Self::with_max_depth(DEFAULT_HISTORY_DEPTH)
    }

    /// `max_depth` is clamped to a minimum of 1. It bounds both stacks; when
    /// a push exceeds it, the oldest entry is discarded (sliding window).
    pub fn with_max_depth(max_depth: usize) -> Self {
        Self {
            max_depth: max_depth.max(1),
            back_stack: VecDeque::new(),
            forward_stack: VecDeque::new(),
            current: None,
            renderer: None,
        }
    }

    pub fn set_renderer(&mut self, renderer: impl FnMut(&Route) + 'static) {
        self.renderer = Some(Box::new(renderer));
    }

    pub fn current(&self) -> Option<&Route> {
        self.current.as_ref()
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    pub fn back_len(&self) -> usize {
        self.back_stack.len()
    }

    pub fn forward_len(&self) -> usize {
        self.forward_stack.len()
    }

    pub fn can_go_back(&self) -> bool {
        !self.back_stack.is_empty()
    }

    pub fn can_go_forward(&self) -> bool {
        !self.forward_stack.is_empty()
    }

    /// Clears both stacks, makes `route` current and renders it. Used once
    /// per fresh view context (app start, rebinding to brand-new data).
    pub fn set_initial(&mut self, route: Route) {
        self.back_stack.clear();
        self.forward_stack.clear();
        self.current = Some(route);
        self.render_current();
    }

    /// Pushes the current route onto the back stack, clears the forward
    /// stack, makes `next` current and renders it.
    pub fn navigate(&mut self, next: Route) {
        if let Some(current) = self.current.take() {
            Self::push_bounded(&mut self.back_stack, current, self.max_depth);
        }
        self.forward_stack.clear();
        self.current = Some(next);
        self.render_current();
    }

    /// Replaces the current route without touching either stack and without
    /// rendering. Persists transient in-place edits (typed search text, the
    /// selected tab) so a later `back()` restores the edited value.
    pub fn update_current(&mut self, updated: Route) {
        self.current = Some(updated);
    }

    pub fn back(&mut self) {
        let Some(previous) = self.back_stack.pop_back() else {
            return;
        };
        if let Some(current) = self.current.take() {
            Self::push_bounded(&mut self.forward_stack, current, self.max_depth);
        }
        self.current = Some(previous);
        self.render_current();
    }

    pub fn forward(&mut self) {
        let Some(next) = self.forward_stack.pop_back() else {
            return;
        };
        if let Some(current) = self.current.take() {
            Self::push_bounded(&mut self.back_stack, current, self.max_depth);
        }
        self.current = Some(next);
        self.render_current();
    }

    fn render_current(&mut self) {
        if let (Some(renderer), Some(route)) = (self.renderer.as_mut(), self.current.as_ref()) {
            renderer(route);
        }
    }

    fn push_bounded(stack: &mut VecDeque<Route>, route: Route, max_depth: usize) {
        stack.push_back(route);
        while stack.len() > max_depth {
            stack.pop_front();
        }
    }
}
