use serde::Serialize;
use std::fmt;

use super::CreateView;

// --------------------------------------------------------
// Data Definitions (ViewModels)
// --------------------------------------------------------

/// One post as listed; no content body
#[derive(Debug, Clone, Serialize)]
pub struct PostSummaryViewModel {
    pub id: Option<i64>,
    pub title: String,
    /// Display name, "Anonymous" when unset or blank
    pub author: String,
    pub summary: Option<String>,
    pub tags: Vec<String>,
    pub published: bool,
    pub view_count: u64,
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ListScope {
    Published,
    All,
    Search { field: String, query: String },
}

#[derive(Debug, Clone, Serialize)]
pub struct PostListViewModel {
    pub scope: ListScope,
    pub posts: Vec<PostSummaryViewModel>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PostDetailViewModel {
    pub id: Option<i64>,
    pub title: String,
    /// Display name, "Anonymous" when unset or blank
    pub author: String,
    pub summary: Option<String>,
    pub tags: Vec<String>,
    pub content: String,
    pub published: bool,
    pub view_count: u64,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MutationKind {
    Created,
    Updated,
    Deleted,
    Published,
    Unpublished,
}

#[derive(Debug, Clone, Serialize)]
pub struct PostMutationViewModel {
    pub action: MutationKind,
    pub id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub post: Option<PostDetailViewModel>,
}

#[derive(Debug, Clone, Serialize)]
pub struct FieldErrorViewModel {
    pub field: String,
    pub message: String,
}

/// Client-side validation failure; nothing was sent
#[derive(Debug, Clone, Serialize)]
pub struct ValidationViewModel {
    pub errors: Vec<FieldErrorViewModel>,
}

/// Delete prompt answered with "no"
#[derive(Debug, Clone, Serialize)]
pub struct CancelledViewModel {
    pub id: i64,
}

// --------------------------------------------------------
// CreateView Trait Implementations (Bridge to Views)
// --------------------------------------------------------

impl CreateView for PostListViewModel {
    fn create_view<'a>(&'a self) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::post::PostListView;
        Box::new(PostListView::new(self))
    }
}

impl CreateView for PostDetailViewModel {
    fn create_view<'a>(&'a self) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::post::PostDetailView;
        Box::new(PostDetailView::new(self))
    }
}

impl CreateView for PostMutationViewModel {
    fn create_view<'a>(&'a self) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::post::PostMutationView;
        Box::new(PostMutationView::new(self))
    }
}

impl CreateView for ValidationViewModel {
    fn create_view<'a>(&'a self) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::post::ValidationView;
        Box::new(ValidationView::new(self))
    }
}

impl CreateView for CancelledViewModel {
    fn create_view<'a>(&'a self) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::post::CancelledView;
        Box::new(CancelledView::new(self))
    }
}
