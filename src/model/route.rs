// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Kartoteka-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Kartoteka and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::records::{
    ExamPeriodRecord, StudentIndexRecord, StudentProfileRecord, StudyProgramRecord,
};

/// Profile sub-panel identifier. Doubles as the navigable sub-place inside a
/// [`Route::StudentProfile`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum StudentTab {
    #[default]
    Personal,
    Unpassed,
    Passed,
    Payments,
    Progress,
}

impl StudentTab {
    pub const ALL: [StudentTab; 5] = [
        StudentTab::Personal,
        StudentTab::Unpassed,
        StudentTab::Passed,
        StudentTab::Payments,
        StudentTab::Progress,
    ];

    pub fn title(self) -> &'static str {
        match self {
            StudentTab::Personal => "Lični podaci",
            StudentTab::Unpassed => "Nepoloženi",
            StudentTab::Passed => "Položeni",
            StudentTab::Payments => "Uplate",
            StudentTab::Progress => "Tok studija",
        }
    }
}

/// Immutable description of a navigable place and its view payload.
///
/// Equality and hashing are structural: two routes with the same variant and
/// payload are interchangeable, which the history engine relies on when it
/// compares and replays entries. Construct routes through the factory
/// functions; each variant carries exactly the fields meaningful to it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Route {
    SearchByIndex {
        search_text: String,
    },
    StudentProfile {
        index: StudentIndexRecord,
        profile: StudentProfileRecord,
        tab: StudentTab,
    },
    ExamPeriods,
    ExamsByPeriod {
        period: ExamPeriodRecord,
    },
    StudyPrograms,
    ProgramDetails {
        program: StudyProgramRecord,
    },
}

impl Route {
    pub fn search_by_index(search_text: impl Into<String>) -> Self {
        Route::SearchByIndex { search_text: search_text.into() }
    }

    pub fn student_profile(
        index: StudentIndexRecord,
        profile: StudentProfileRecord,
        tab: StudentTab,
    ) -> Self {
        Route::StudentProfile { index, profile, tab }
    }

    pub fn exam_periods() -> Self {
        Route::ExamPeriods
    }

    pub fn exams_by_period(period: ExamPeriodRecord) -> Self {
        Route::ExamsByPeriod { period }
    }

    pub fn study_programs() -> Self {
        Route::StudyPrograms
    }

    pub fn program_details(program: StudyProgramRecord) -> Self {
        Route::ProgramDetails { program }
    }

    /// New search route with the text replaced; any other variant is returned
    /// unchanged. Used to persist in-progress typing without a history entry.
    pub fn with_search_text(&self, text: impl Into<String>) -> Self {
        match self {
            Route::SearchByIndex { .. } => Route::search_by_index(text),
            _ => self.clone(),
        }
    }

    /// New profile route with the tab replaced; any other variant is returned
    /// unchanged.
    pub fn with_student_tab(&self, tab: StudentTab) -> Self {
        match self {
            Route::StudentProfile { index, profile, .. } => {
                Route::student_profile(index.clone(), profile.clone(), tab)
            }
            _ => self.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn program() -> StudyProgramRecord {
        StudyProgramRecord {
            id: 3,
            code: "RN".into(),
            name: "Računarske nauke".to_owned(),
            espb_total: 240,
            duration_years: 4,
        }
    }

    #[test]
    fn with_search_text_replaces_text_on_search_variant() {
        let route = Route::search_by_index("rn 19");
        assert_eq!(route.with_search_text("rn 19/23"), Route::search_by_index("rn 19/23"));
    }

    #[test]
    fn with_search_text_is_identity_on_other_variants() {
        let route = Route::program_details(program());
        assert_eq!(route.with_search_text("rn"), route);
    }

    #[test]
    fn with_student_tab_is_identity_on_other_variants() {
        let route = Route::exam_periods();
        assert_eq!(route.with_student_tab(StudentTab::Payments), route);
    }

    #[test]
    fn routes_with_equal_payload_are_interchangeable() {
        use std::collections::HashSet;

        let mut seen = HashSet::new();
        seen.insert(Route::program_details(program()));
        assert!(seen.contains(&Route::program_details(program())));
        assert!(!seen.contains(&Route::study_programs()));
    }
}
