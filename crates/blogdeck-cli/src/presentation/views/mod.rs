// Console views: fmt::Display over ViewModels
// TUI widgets live under views::tui

pub mod analytics;
pub mod post;
pub mod system;
pub mod tui;

pub use analytics::AnalyticsView;
pub use post::{CancelledView, PostDetailView, PostListView, PostMutationView, ValidationView};
pub use system::{ConfigView, GuidanceView};
