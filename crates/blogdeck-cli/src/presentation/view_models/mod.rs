pub mod analytics;
pub mod common;
pub mod post;
pub mod result;
pub mod system;
pub mod tui;

pub use analytics::{AnalyticsViewModel, ProgressViewModel};
pub use common::{Guidance, OutputFormat, StatusBadge, StatusLevel};
pub use post::{
    CancelledViewModel, FieldErrorViewModel, ListScope, MutationKind, PostDetailViewModel,
    PostListViewModel, PostMutationViewModel, PostSummaryViewModel, ValidationViewModel,
};
pub use result::CommandResultViewModel;
pub use system::{ConfigViewModel, GuidanceViewModel};
pub use tui::{
    AnalyticsScreenViewModel, FormFieldViewModel, PostFormViewModel, PostListScreenViewModel,
    PostViewScreenViewModel, StatusBarViewModel,
};

use std::fmt;

/// Bridge from a ViewModel to its text View
pub trait CreateView {
    fn create_view<'a>(&'a self) -> Box<dyn fmt::Display + 'a>;
}
