use std::fmt;

use crate::presentation::formatters::{date_part, status_label, truncate};
use crate::presentation::view_models::{
    CancelledViewModel, ListScope, MutationKind, PostDetailViewModel, PostListViewModel,
    PostMutationViewModel, ValidationViewModel,
};

// --------------------------------------------------------
// Post List View
// --------------------------------------------------------

pub struct PostListView<'a> {
    data: &'a PostListViewModel,
}

impl<'a> PostListView<'a> {
    pub fn new(data: &'a PostListViewModel) -> Self {
        Self { data }
    }
}

impl<'a> fmt::Display for PostListView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.data.scope {
            ListScope::Published => {}
            ListScope::All => writeln!(f, "All posts, including drafts")?,
            ListScope::Search { field, query } => {
                writeln!(f, "Search by {}: \"{}\"", field, query)?
            }
        }

        if self.data.posts.is_empty() {
            return Ok(());
        }

        writeln!(
            f,
            "{:<6} {:<40} {:<16} {:>6}  {:<10} CREATED",
            "ID", "TITLE", "AUTHOR", "VIEWS", "STATUS"
        )?;
        writeln!(f, "{}", "-".repeat(92))?;

        for post in &self.data.posts {
            let id = post
                .id
                .map(|id| format!("#{}", id))
                .unwrap_or_else(|| "-".to_string());
            writeln!(
                f,
                "{:<6} {:<40} {:<16} {:>6}  {:<10} {}",
                id,
                truncate(&post.title, 40),
                truncate(&post.author, 16),
                post.view_count,
                status_label(post.published),
                date_part(post.created_at.as_deref()),
            )?;
        }

        Ok(())
    }
}

// --------------------------------------------------------
// Post Detail View
// --------------------------------------------------------

pub struct PostDetailView<'a> {
    data: &'a PostDetailViewModel,
}

impl<'a> PostDetailView<'a> {
    pub fn new(data: &'a PostDetailViewModel) -> Self {
        Self { data }
    }
}

impl<'a> fmt::Display for PostDetailView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let post = self.data;
        match post.id {
            Some(id) => writeln!(f, "#{} {}", id, post.title)?,
            None => writeln!(f, "{}", post.title)?,
        }
        writeln!(
            f,
            "by {} | {} | {} | {} views",
            post.author,
            date_part(post.created_at.as_deref()),
            status_label(post.published),
            post.view_count,
        )?;
        if !post.tags.is_empty() {
            writeln!(f, "Tags: {}", post.tags.join(", "))?;
        }
        if let Some(summary) = &post.summary {
            writeln!(f, "Summary: {}", summary)?;
        }
        writeln!(f)?;
        writeln!(f, "{}", post.content)?;
        Ok(())
    }
}

// --------------------------------------------------------
// Mutation Result View
// --------------------------------------------------------

pub struct PostMutationView<'a> {
    data: &'a PostMutationViewModel,
}

impl<'a> PostMutationView<'a> {
    pub fn new(data: &'a PostMutationViewModel) -> Self {
        Self { data }
    }
}

impl<'a> fmt::Display for PostMutationView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match (&self.data.post, self.data.action) {
            (_, MutationKind::Deleted) | (None, _) => {
                writeln!(f, "Post #{}", self.data.id)
            }
            (Some(post), _) => writeln!(
                f,
                "#{} {} ({})",
                self.data.id,
                post.title,
                status_label(post.published)
            ),
        }
    }
}

// --------------------------------------------------------
// Validation View
// --------------------------------------------------------

pub struct ValidationView<'a> {
    data: &'a ValidationViewModel,
}

impl<'a> ValidationView<'a> {
    pub fn new(data: &'a ValidationViewModel) -> Self {
        Self { data }
    }
}

impl<'a> fmt::Display for ValidationView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for error in &self.data.errors {
            writeln!(f, "  {}: {}", error.field, error.message)?;
        }
        Ok(())
    }
}

pub struct CancelledView<'a> {
    data: &'a CancelledViewModel,
}

impl<'a> CancelledView<'a> {
    pub fn new(data: &'a CancelledViewModel) -> Self {
        Self { data }
    }
}

impl<'a> fmt::Display for CancelledView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Post #{} was not deleted.", self.data.id)
    }
}
