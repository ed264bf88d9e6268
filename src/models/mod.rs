// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the application.

pub mod activity;

pub use activity::{
    cell_text, fields, is_truthy, ActivityRecord, ProjectedRecord, ABSENT, ACTIVITY_URL_BASE,
    OUTPUT_COLUMNS,
};
