//! Per-frame snapshots for the interactive UI.
//!
//! Built fresh on every draw from controller state plus component UI state
//! (focus, selection). Widgets only read these.

use super::{AnalyticsViewModel, PostDetailViewModel, PostSummaryViewModel, StatusLevel};

#[derive(Debug, Clone)]
pub struct StatusBarViewModel {
    pub mode: &'static str,
    pub busy: bool,
    pub notice: Option<(StatusLevel, String)>,
    pub hints: &'static str,
}

#[derive(Debug, Clone)]
pub struct PostListScreenViewModel {
    pub rows: Vec<PostSummaryViewModel>,
    pub search_term: String,
    pub search_field: &'static str,
    pub editing_search: bool,
    pub loading: bool,
}

#[derive(Debug, Clone)]
pub struct FormFieldViewModel {
    pub label: &'static str,
    pub value: String,
    pub length: usize,
    pub limit: Option<usize>,
    pub error: Option<String>,
    pub focused: bool,
    pub multiline: bool,
}

#[derive(Debug, Clone)]
pub struct PostFormViewModel {
    pub heading: &'static str,
    pub step: usize,
    pub step_count: usize,
    pub step_title: &'static str,
    pub fields: Vec<FormFieldViewModel>,
    /// `Some` only on the step that owns the toggle
    pub published: Option<bool>,
    /// Errors on fields of other steps, as "Step N: message"
    pub other_step_errors: Vec<String>,
    pub submit_error: Option<String>,
    pub submitting: bool,
}

#[derive(Debug, Clone)]
pub struct PostViewScreenViewModel {
    pub post: PostDetailViewModel,
    pub confirming_delete: bool,
}

#[derive(Debug, Clone)]
pub enum AnalyticsScreenViewModel {
    /// Last load failed or has not run
    Unavailable,
    Ready(AnalyticsViewModel),
}
