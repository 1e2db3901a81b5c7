// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Kartoteka-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Kartoteka and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! API payload records carried inside routes.
//!
//! Every record derives structural `Eq` and `Hash` because routes containing
//! them are compared and hashed by the history engine. Grade averages and
//! money amounts are therefore kept in integer subunits; no field is a float.

use serde::{Deserialize, Serialize};
use smol_str::{format_smolstr, SmolStr};

/// One enrollment ("indeks") of a student into a study program.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StudentIndexRecord {
    pub id: u64,
    pub program_code: SmolStr,
    pub enrollment_year: u16,
    pub number: u32,
    pub first_name: String,
    pub last_name: String,
    pub espb_earned: u32,
    /// Grade average in hundredths (923 = 9.23); `None` before the first
    /// passed exam.
    pub average_hundredths: Option<u32>,
}

impl StudentIndexRecord {
    /// Canonical `PROGRAM + YY + SERIAL` form, e.g. `RN1923`.
    pub fn canonical(&self) -> SmolStr {
        format_smolstr!("{}{:02}{}", self.program_code, self.enrollment_year % 100, self.number)
    }

    /// Human-facing label in the `RN 19/23` form the profile header uses.
    pub fn display_label(&self) -> String {
        format!("{} {:02}/{}", self.program_code, self.enrollment_year % 100, self.number)
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn average_label(&self) -> String {
        match self.average_hundredths {
            Some(hundredths) => format!("{}.{:02}", hundredths / 100, hundredths % 100),
            None => "—".to_owned(),
        }
    }
}

/// Personal data shown on the profile's first tab.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StudentProfileRecord {
    pub index_id: u64,
    pub jmbg: String,
    pub email: String,
    pub address: String,
    pub phone: String,
    pub high_school: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ExamPeriodRecord {
    pub id: u64,
    pub name: String,
    pub school_year: String,
    /// ISO-8601 dates; the client never does date arithmetic on them.
    pub starts_on: String,
    pub ends_on: String,
}

/// One scheduled exam within a period.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ExamRecord {
    pub id: u64,
    pub period_id: u64,
    pub subject_code: SmolStr,
    pub subject_name: String,
    pub exam_date: String,
    pub registered: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StudyProgramRecord {
    pub id: u64,
    pub code: SmolStr,
    pub name: String,
    pub espb_total: u32,
    pub duration_years: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SubjectRecord {
    pub id: u64,
    pub program_id: u64,
    pub code: SmolStr,
    pub name: String,
    pub espb: u32,
    pub semester: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PassedExamRecord {
    pub subject_code: SmolStr,
    pub subject_name: String,
    pub espb: u32,
    /// 5 is a fail in the local grading scale; passed exams carry 6..=10.
    pub grade: u8,
    pub passed_on: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PaymentRecord {
    /// Amount in para (1 RSD = 100 para) to keep `Eq`/`Hash` exact.
    pub amount_para: u64,
    pub paid_on: String,
    pub purpose: String,
}

impl PaymentRecord {
    pub fn amount_label(&self) -> String {
        format!("{}.{:02} RSD", self.amount_para / 100, self.amount_para % 100)
    }
}

/// One school year in the course of study (enrollment or renewal).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EnrollmentRecord {
    pub school_year: String,
    pub year_of_study: u8,
    pub renewed: bool,
}

/// Payload a profile panel fetch resolves to, one variant per tab.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PanelData {
    Personal(StudentProfileRecord),
    Unpassed(Vec<SubjectRecord>),
    Passed(Vec<PassedExamRecord>),
    Payments(Vec<PaymentRecord>),
    Progress(Vec<EnrollmentRecord>),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn index() -> StudentIndexRecord {
        StudentIndexRecord {
            id: 1,
            program_code: "RN".into(),
            enrollment_year: 2019,
            number: 23,
            first_name: "Jovana".to_owned(),
            last_name: "Janković".to_owned(),
            espb_earned: 120,
            average_hundredths: Some(905),
        }
    }

    #[test]
    fn canonical_uses_two_digit_year() {
        assert_eq!(index().canonical(), "RN1923");
    }

    #[test]
    fn display_label_pads_year() {
        let mut idx = index();
        idx.enrollment_year = 2004;
        idx.number = 7;
        assert_eq!(idx.display_label(), "RN 04/7");
    }

    #[test]
    fn average_label_formats_hundredths() {
        assert_eq!(index().average_label(), "9.05");
        let mut idx = index();
        idx.average_hundredths = None;
        assert_eq!(idx.average_label(), "—");
    }

    #[test]
    fn payment_label_formats_para() {
        let payment = PaymentRecord {
            amount_para: 1_500_050,
            paid_on: "2024-10-01".to_owned(),
            purpose: "Školarina".to_owned(),
        };
        assert_eq!(payment.amount_label(), "15000.50 RSD");
    }
}
