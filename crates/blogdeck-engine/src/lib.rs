// View-state engine - screen transitions, forms, single-post view, analytics
// Sits between the API client and the CLI/TUI presentation layer

pub mod analytics;
pub mod controller;
pub mod form;
pub mod notice;
pub mod viewer;

pub use analytics::{AnalyticsProgress, AnalyticsSnapshot};
pub use controller::{Action, Screen, ViewController, ViewMode};
pub use form::{
    CONTENT_MAX, Field, FieldErrors, FormMode, FormStep, PostDraft, PostForm, SUMMARY_MAX,
    SubmitOutcome, TITLE_MAX, validate_draft, validate_patch,
};
pub use notice::{Notice, NoticeLevel};
pub use viewer::PostViewer;
