// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Kartoteka-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Kartoteka and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! End-to-end navigation scenario over the public API: a session that
//! searches, opens a profile, hops through tabs and lists, and walks the
//! history back and forth.

use std::cell::RefCell;
use std::rc::Rc;

use kartoteka::api::{DemoDirectory, StudentApi};
use kartoteka::model::{canonical_index, Route, StudentTab};
use kartoteka::nav::HistoryNavigator;

#[test]
fn desktop_session_round_trip() {
    let directory = DemoDirectory::from_embedded().expect("embedded demo data parses");
    let mut nav = HistoryNavigator::with_max_depth(10);

    let rendered = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&rendered);
    nav.set_renderer(move |route: &Route| sink.borrow_mut().push(route.clone()));

    // App start: empty search place.
    nav.set_initial(Route::search_by_index(""));

    // The user types an index; every keystroke persists in place.
    for prefix in ["r", "rn", "rn 1", "rn 19/23"] {
        let updated = nav.current().expect("current route").with_search_text(prefix);
        nav.update_current(updated);
    }
    assert_eq!(rendered.borrow().len(), 1, "typing must not render");

    // Submit: canonicalize, resolve, open the profile.
    let canonical = canonical_index("rn 19/23");
    assert_eq!(canonical, "RN1923");
    let (index, profile) = directory
        .find_student(&canonical)
        .expect("lookup succeeds")
        .expect("demo student exists");
    nav.navigate(Route::student_profile(index.clone(), profile.clone(), StudentTab::Personal));

    // Tab hop (user-driven), then off to the exam periods.
    let with_tab = nav.current().expect("current route").with_student_tab(StudentTab::Passed);
    nav.navigate(with_tab);
    nav.navigate(Route::exam_periods());

    let periods = directory.exam_periods().expect("periods load");
    nav.navigate(Route::exams_by_period(periods[0].clone()));

    assert_eq!(nav.back_len(), 4);
    assert_eq!(nav.forward_len(), 0);

    // Walk back to the profile tab that was open before the exam detour.
    nav.back();
    nav.back();
    match nav.current() {
        Some(Route::StudentProfile { tab, index: current_index, .. }) => {
            assert_eq!(*tab, StudentTab::Passed);
            assert_eq!(current_index, &index);
        }
        other => panic!("expected profile route, got {other:?}"),
    }
    assert_eq!(nav.forward_len(), 2);

    // All the way back: the typed text survived.
    nav.back();
    nav.back();
    assert_eq!(nav.current(), Some(&Route::search_by_index("rn 19/23")));
    assert!(!nav.can_go_back());

    // A new navigation discards the forward branch.
    nav.navigate(Route::study_programs());
    assert_eq!(nav.forward_len(), 0);

    // Every place change was rendered exactly once.
    let renders = rendered.borrow();
    assert_eq!(renders.len(), 10);
    assert_eq!(renders.last(), Some(&Route::StudyPrograms));
}

#[test]
fn deep_sessions_keep_a_sliding_window() {
    let mut nav = HistoryNavigator::with_max_depth(3);
    nav.set_initial(Route::search_by_index("start"));
    for n in 0..8 {
        nav.navigate(Route::search_by_index(format!("step-{n}")));
    }

    assert_eq!(nav.back_len(), 3);
    while nav.can_go_back() {
        nav.back();
    }
    // The initial route fell out of the window long ago.
    assert_eq!(nav.current(), Some(&Route::search_by_index("step-4")));
}
