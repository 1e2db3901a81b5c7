// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Kartoteka-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Kartoteka and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Core data model.
//!
//! Routes describe navigable places; records are the API payloads they carry.

pub mod index;
pub mod records;
pub mod route;

pub use index::canonical_index;
pub use records::{
    EnrollmentRecord, ExamPeriodRecord, ExamRecord, PanelData, PassedExamRecord, PaymentRecord,
    StudentIndexRecord, StudentProfileRecord, StudyProgramRecord, SubjectRecord,
};
pub use route::{Route, StudentTab};
