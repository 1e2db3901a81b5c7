// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Kartoteka-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Kartoteka and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Collaborator boundary toward the records backend.
//!
//! The navigation core never talks to a network; it sees only [`StudentApi`].
//! [`DemoDirectory`] implements the trait over an embedded dataset so the
//! TUI and the tests run against deterministic data.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;

use serde::Deserialize;

use crate::model::{
    EnrollmentRecord, ExamPeriodRecord, ExamRecord, PanelData, PassedExamRecord, PaymentRecord,
    StudentIndexRecord, StudentProfileRecord, StudentTab, StudyProgramRecord, SubjectRecord,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    NotFound,
    Backend(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound => f.write_str("record not found"),
            Self::Backend(message) => write!(f, "backend error: {message}"),
        }
    }
}

impl std::error::Error for ApiError {}

/// Everything the views fetch. Calls are synchronous from the caller's point
/// of view; an implementation backed by a real transport must resolve on the
/// caller's thread-of-control before returning.
pub trait StudentApi {
    /// Looks a student up by the canonical index form (see
    /// [`crate::model::canonical_index`]).
    fn find_student(
        &self,
        canonical: &str,
    ) -> Result<Option<(StudentIndexRecord, StudentProfileRecord)>, ApiError>;

    /// Name search, best matches first.
    fn search_students_by_name(&self, query: &str) -> Result<Vec<StudentIndexRecord>, ApiError>;

    /// High-school search, best matches first.
    fn search_students_by_school(&self, query: &str) -> Result<Vec<StudentIndexRecord>, ApiError>;

    /// Enrolls the student into the next school year and returns the created
    /// row. `renewed` repeats the current year of study instead of advancing.
    fn enroll_school_year(
        &self,
        index_id: u64,
        renewed: bool,
    ) -> Result<EnrollmentRecord, ApiError>;

    fn exam_periods(&self) -> Result<Vec<ExamPeriodRecord>, ApiError>;

    fn exams_by_period(&self, period_id: u64) -> Result<Vec<ExamRecord>, ApiError>;

    fn study_programs(&self) -> Result<Vec<StudyProgramRecord>, ApiError>;

    fn program_subjects(&self, program_id: u64) -> Result<Vec<SubjectRecord>, ApiError>;

    /// Fetches the payload for one profile panel.
    fn profile_panel(&self, index_id: u64, tab: StudentTab) -> Result<PanelData, ApiError>;
}

#[derive(Debug, Clone, Deserialize)]
struct DemoStudent {
    index: StudentIndexRecord,
    profile: StudentProfileRecord,
    unpassed: Vec<SubjectRecord>,
    passed: Vec<PassedExamRecord>,
    payments: Vec<PaymentRecord>,
    progress: Vec<EnrollmentRecord>,
}

#[derive(Debug, Clone, Deserialize)]
struct DemoData {
    students: Vec<DemoStudent>,
    exam_periods: Vec<ExamPeriodRecord>,
    exams: Vec<ExamRecord>,
    programs: Vec<StudyProgramRecord>,
    subjects: Vec<SubjectRecord>,
}

/// In-memory records backend seeded from `demo_data.json`. Students sit
/// behind a `RefCell` because enrollment actions append progress rows.
#[derive(Debug, Clone)]
pub struct DemoDirectory {
    students: RefCell<Vec<DemoStudent>>,
    by_index_id: HashMap<u64, usize>,
    exam_periods: Vec<ExamPeriodRecord>,
    exams: Vec<ExamRecord>,
    programs: Vec<StudyProgramRecord>,
    subjects: Vec<SubjectRecord>,
}

impl DemoDirectory {
    pub fn from_embedded() -> Result<Self, serde_json::Error> {
        Self::from_json(include_str!("demo_data.json"))
    }

    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        let data: DemoData = serde_json::from_str(raw)?;
        let by_index_id = data
            .students
            .iter()
            .enumerate()
            .map(|(position, student)| (student.index.id, position))
            .collect();
        Ok(Self {
            students: RefCell::new(data.students),
            by_index_id,
            exam_periods: data.exam_periods,
            exams: data.exams,
            programs: data.programs,
            subjects: data.subjects,
        })
    }

    fn ranked_students(
        &self,
        query: &str,
        haystack: impl Fn(&DemoStudent) -> String,
    ) -> Vec<StudentIndexRecord> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }

        let students = self.students.borrow();
        let mut scored: Vec<(i64, StudentIndexRecord)> = students
            .iter()
            .filter_map(|student| {
                name_match_score(&needle, &haystack(student))
                    .map(|score| (score, student.index.clone()))
            })
            .collect();
        scored.sort_by(|(score_a, index_a), (score_b, index_b)| {
            score_b.cmp(score_a).then_with(|| index_a.canonical().cmp(&index_b.canonical()))
        });
        scored.into_iter().map(|(_, index)| index).collect()
    }
}

impl StudentApi for DemoDirectory {
    fn find_student(
        &self,
        canonical: &str,
    ) -> Result<Option<(StudentIndexRecord, StudentProfileRecord)>, ApiError> {
        Ok(self
            .students
            .borrow()
            .iter()
            .find(|student| student.index.canonical() == canonical)
            .map(|student| (student.index.clone(), student.profile.clone())))
    }

    fn search_students_by_name(&self, query: &str) -> Result<Vec<StudentIndexRecord>, ApiError> {
        Ok(self.ranked_students(query, |student| student.index.full_name().to_lowercase()))
    }

    fn search_students_by_school(&self, query: &str) -> Result<Vec<StudentIndexRecord>, ApiError> {
        Ok(self.ranked_students(query, |student| student.profile.high_school.to_lowercase()))
    }

    fn enroll_school_year(
        &self,
        index_id: u64,
        renewed: bool,
    ) -> Result<EnrollmentRecord, ApiError> {
        let mut students = self.students.borrow_mut();
        let position = *self.by_index_id.get(&index_id).ok_or(ApiError::NotFound)?;
        let student = &mut students[position];

        let last = student.progress.last();
        let start_year = last
            .and_then(|row| row.school_year.get(..4))
            .and_then(|raw| raw.parse::<u32>().ok())
            .map(|year| year + 1)
            .unwrap_or(u32::from(student.index.enrollment_year));
        let year_of_study = match (last, renewed) {
            (Some(row), true) => row.year_of_study,
            (Some(row), false) => row.year_of_study + 1,
            (None, _) => 1,
        };

        let row = EnrollmentRecord {
            school_year: format!("{}/{:02}", start_year, (start_year + 1) % 100),
            year_of_study,
            renewed,
        };
        student.progress.push(row.clone());
        Ok(row)
    }

    fn exam_periods(&self) -> Result<Vec<ExamPeriodRecord>, ApiError> {
        Ok(self.exam_periods.clone())
    }

    fn exams_by_period(&self, period_id: u64) -> Result<Vec<ExamRecord>, ApiError> {
        if !self.exam_periods.iter().any(|period| period.id == period_id) {
            return Err(ApiError::NotFound);
        }
        Ok(self.exams.iter().filter(|exam| exam.period_id == period_id).cloned().collect())
    }

    fn study_programs(&self) -> Result<Vec<StudyProgramRecord>, ApiError> {
        Ok(self.programs.clone())
    }

    fn program_subjects(&self, program_id: u64) -> Result<Vec<SubjectRecord>, ApiError> {
        if !self.programs.iter().any(|program| program.id == program_id) {
            return Err(ApiError::NotFound);
        }
        Ok(self.subjects.iter().filter(|subject| subject.program_id == program_id).cloned().collect())
    }

    fn profile_panel(&self, index_id: u64, tab: StudentTab) -> Result<PanelData, ApiError> {
        let students = self.students.borrow();
        let position = *self.by_index_id.get(&index_id).ok_or(ApiError::NotFound)?;
        let student = &students[position];
        Ok(match tab {
            StudentTab::Personal => PanelData::Personal(student.profile.clone()),
            StudentTab::Unpassed => PanelData::Unpassed(student.unpassed.clone()),
            StudentTab::Passed => PanelData::Passed(student.passed.clone()),
            StudentTab::Payments => PanelData::Payments(student.payments.clone()),
            StudentTab::Progress => PanelData::Progress(student.progress.clone()),
        })
    }
}

/// Substring matches rank above fuzzy ones; the fuzzy tail tolerates typos.
fn name_match_score(needle: &str, haystack: &str) -> Option<i64> {
    if let Some(first) = haystack.find(needle) {
        let mut score = 200_000i64.saturating_sub((first as i64) * 1000);
        if first == 0 {
            score += 50_000;
        }
        score -= haystack.chars().count() as i64;
        return Some(score);
    }

    let ratio = rapidfuzz::fuzz::ratio(needle.chars(), haystack.chars());
    let score = (ratio * 1000.0).round() as i64;
    (score >= 55_000).then_some(score)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn directory() -> DemoDirectory {
        DemoDirectory::from_embedded().expect("embedded demo data parses")
    }

    #[test]
    fn embedded_data_is_internally_consistent() {
        let directory = directory();
        let students = directory.students.borrow();
        assert!(!students.is_empty());
        for student in students.iter() {
            assert_eq!(student.index.id, student.profile.index_id);
        }
        for exam in &directory.exams {
            assert!(directory.exam_periods.iter().any(|period| period.id == exam.period_id));
        }
        for subject in &directory.subjects {
            assert!(directory.programs.iter().any(|program| program.id == subject.program_id));
        }
    }

    #[test]
    fn find_student_matches_canonical_form_only() {
        let directory = directory();
        let hit = directory.find_student("RN1923").expect("lookup succeeds");
        assert!(hit.is_some());
        assert!(directory.find_student("RN 19/23").expect("lookup succeeds").is_none());
        assert!(directory.find_student("XX9999").expect("lookup succeeds").is_none());
    }

    #[test]
    fn name_search_prefers_prefix_matches() {
        let directory = directory();
        let results = directory.search_students_by_name("jov").expect("search succeeds");
        assert!(!results.is_empty());
        assert!(results[0].full_name().to_lowercase().starts_with("jov"));
    }

    #[test]
    fn name_search_tolerates_typos() {
        let directory = directory();
        let results = directory.search_students_by_name("jovana jankovic").expect("search");
        assert!(results.iter().any(|index| index.canonical() == "RN1923"));
    }

    #[test]
    fn empty_name_query_returns_nothing() {
        let directory = directory();
        assert!(directory.search_students_by_name("   ").expect("search").is_empty());
    }

    #[test]
    fn school_search_ranks_matching_school() {
        let directory = directory();
        let results = directory.search_students_by_school("zmaj").expect("search succeeds");
        assert_eq!(results[0].canonical(), "SI207");
    }

    #[test]
    fn enrolling_next_year_appends_a_progress_row() {
        let directory = directory();
        let row = directory.enroll_school_year(102, false).expect("enroll succeeds");
        assert_eq!(row.school_year, "2023/24");
        assert_eq!(row.year_of_study, 3);
        assert!(!row.renewed);

        match directory.profile_panel(102, StudentTab::Progress).expect("panel") {
            PanelData::Progress(rows) => assert_eq!(rows.last(), Some(&row)),
            other => panic!("expected progress payload, got {other:?}"),
        }
    }

    #[test]
    fn renewal_repeats_the_year_of_study() {
        let directory = directory();
        let row = directory.enroll_school_year(101, true).expect("enroll succeeds");
        assert_eq!(row.school_year, "2023/24");
        assert_eq!(row.year_of_study, 3);
        assert!(row.renewed);
    }

    #[test]
    fn enrollment_for_unknown_student_is_not_found() {
        let directory = directory();
        assert_eq!(directory.enroll_school_year(9_999, false), Err(ApiError::NotFound));
    }

    #[test]
    fn unknown_period_is_not_found() {
        let directory = directory();
        assert_eq!(directory.exams_by_period(9_999), Err(ApiError::NotFound));
    }

    #[test]
    fn profile_panel_variant_matches_tab() {
        let directory = directory();
        let index_id = directory.students.borrow()[0].index.id;
        match directory.profile_panel(index_id, StudentTab::Payments).expect("panel") {
            PanelData::Payments(_) => {}
            other => panic!("expected payments payload, got {other:?}"),
        }
    }
}
