// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Kartoteka-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Kartoteka and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Kartoteka — terminal student-records client.
//!
//! The crate is split into the navigation core (`model` + `nav`), the API
//! collaborator boundary (`api`), and the interactive shell (`tui`). The
//! navigation core is deliberately free of terminal concerns so it can be
//! exercised headless.

pub mod api;
pub mod model;
pub mod nav;
pub mod tui;

#[cfg(test)]
mod tests {
    #[test]
    fn sanity() {
        assert_eq!(2 + 2, 4);
    }
}
