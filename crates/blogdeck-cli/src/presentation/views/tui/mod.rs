//! Interactive UI widgets and components.
//!
//! Views are stateless `Widget`s over a ViewModel reference. Components own
//! UI state (selection, focus, scroll), translate keys into engine
//! [`Action`](blogdeck_engine::Action)s and delegate drawing to the views.

pub mod analytics;
pub mod components;
pub mod home;
pub mod not_found;
pub mod post_form;
pub mod post_list;
pub mod post_view;
pub mod status_bar;

pub use analytics::AnalyticsScreenView;
pub use components::{
    AnalyticsComponent, HomeComponent, NotFoundComponent, PostFormComponent, PostListComponent,
    PostViewComponent,
};
pub use home::HomeView;
pub use not_found::NotFoundView;
pub use post_form::PostFormView;
pub use post_list::PostListScreenView;
pub use post_view::PostViewScreenView;
pub use status_bar::StatusBarView;

use crate::presentation::view_models::StatusLevel;
use ratatui::style::Color;

pub(crate) fn status_level_to_color(level: StatusLevel) -> Color {
    match level {
        StatusLevel::Success => Color::Green,
        StatusLevel::Info => Color::Cyan,
        StatusLevel::Warning => Color::Yellow,
        StatusLevel::Error => Color::Red,
    }
}
