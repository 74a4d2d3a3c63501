use serde::Serialize;
use std::fmt;

use super::CreateView;

#[derive(Debug, Clone, Serialize)]
pub struct AnalyticsViewModel {
    pub total_posts: u64,
    pub published_posts: u64,
    pub draft_posts: u64,
    pub total_views: u64,
    pub avg_views_per_post: f64,
    pub avg_views_display: String,
    /// Posts the view totals were computed over
    pub loaded_posts: usize,
    pub progress: ProgressViewModel,
}

/// Bar fill per card, percent
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ProgressViewModel {
    pub total_posts: f64,
    pub published_posts: f64,
    pub total_views: f64,
    pub avg_views: f64,
}

impl CreateView for AnalyticsViewModel {
    fn create_view<'a>(&'a self) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::analytics::AnalyticsView;
        Box::new(AnalyticsView::new(self))
    }
}
