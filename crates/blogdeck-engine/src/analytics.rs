//! Dashboard figures derived from the count endpoints and the loaded posts.

use blogdeck_client::{PostsApi, Result};
use blogdeck_types::Post;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalyticsSnapshot {
    pub total_posts: u64,
    pub published_posts: u64,
    pub total_views: u64,
    /// Average over the loaded posts, rounded to one decimal
    pub avg_views_per_post: f64,
    pub loaded_posts: usize,
}

/// Bar fill for each dashboard card, in percent (0..=100)
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AnalyticsProgress {
    pub total_posts: f64,
    pub published_posts: f64,
    pub total_views: f64,
    pub avg_views: f64,
}

impl AnalyticsSnapshot {
    pub fn from_parts(total_posts: u64, published_posts: u64, posts: &[Post]) -> Self {
        let total_views: u64 = posts.iter().map(Post::views).sum();
        let avg_views_per_post = if posts.is_empty() {
            0.0
        } else {
            (total_views as f64 / posts.len() as f64 * 10.0).round() / 10.0
        };

        Self {
            total_posts,
            published_posts,
            total_views,
            avg_views_per_post,
            loaded_posts: posts.len(),
        }
    }

    /// Fetch both counts and combine them with `posts`.
    pub async fn load<A: PostsApi>(api: &A, posts: &[Post]) -> Result<Self> {
        let total = api.get_total_posts_count().await?;
        let published = api.get_published_posts_count().await?;
        Ok(Self::from_parts(total, published, posts))
    }

    pub fn draft_posts(&self) -> u64 {
        self.total_posts.saturating_sub(self.published_posts)
    }

    /// `"0"` with no loaded posts, otherwise one decimal place
    pub fn avg_display(&self) -> String {
        if self.loaded_posts == 0 {
            "0".to_string()
        } else {
            format!("{:.1}", self.avg_views_per_post)
        }
    }

    pub fn progress(&self) -> AnalyticsProgress {
        let total = self.total_posts as f64;
        let (total_pct, published_pct, views_pct) = if self.total_posts == 0 {
            (0.0, 0.0, 0.0)
        } else {
            (
                100.0,
                self.published_posts as f64 / total * 100.0,
                (self.total_views as f64 / (total * 100.0) * 100.0).min(100.0),
            )
        };

        AnalyticsProgress {
            total_posts: total_pct,
            published_posts: published_pct,
            total_views: views_pct,
            avg_views: (self.avg_views_per_post * 10.0).min(100.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blogdeck_client::InMemoryBackend;
    use blogdeck_types::NewPost;

    fn post_with_views(views: u64) -> Post {
        let mut post = Post::draft("t", "c");
        post.view_count = Some(views);
        post
    }

    #[test]
    fn test_empty_collection() {
        let snapshot = AnalyticsSnapshot::from_parts(0, 0, &[]);
        assert_eq!(snapshot.total_views, 0);
        assert_eq!(snapshot.avg_display(), "0");

        let progress = snapshot.progress();
        assert_eq!(progress.total_posts, 0.0);
        assert_eq!(progress.published_posts, 0.0);
        assert_eq!(progress.avg_views, 0.0);
    }

    #[test]
    fn test_views_and_average() {
        let posts = vec![post_with_views(5), post_with_views(0)];
        let snapshot = AnalyticsSnapshot::from_parts(4, 2, &posts);

        assert_eq!(snapshot.total_views, 5);
        assert_eq!(snapshot.avg_display(), "2.5");
        assert_eq!(snapshot.draft_posts(), 2);

        let progress = snapshot.progress();
        assert_eq!(progress.total_posts, 100.0);
        assert_eq!(progress.published_posts, 50.0);
        assert!((progress.total_views - 1.25).abs() < 1e-9);
        assert_eq!(progress.avg_views, 25.0);
    }

    #[test]
    fn test_missing_view_count_counts_as_zero() {
        let mut post = Post::draft("t", "c");
        post.view_count = None;
        let snapshot = AnalyticsSnapshot::from_parts(1, 1, &[post, post_with_views(3)]);
        assert_eq!(snapshot.total_views, 3);
        assert_eq!(snapshot.avg_display(), "1.5");
    }

    #[test]
    fn test_progress_is_capped() {
        let posts = vec![post_with_views(1_000)];
        let progress = AnalyticsSnapshot::from_parts(1, 1, &posts).progress();
        assert_eq!(progress.total_views, 100.0);
        assert_eq!(progress.avg_views, 100.0);
    }

    #[test]
    fn test_published_count_above_total_does_not_underflow() {
        let snapshot = AnalyticsSnapshot::from_parts(1, 3, &[]);
        assert_eq!(snapshot.draft_posts(), 0);
    }

    #[tokio::test]
    async fn test_load_uses_count_endpoints() {
        let api = InMemoryBackend::with_posts([
            NewPost::new("a", "a").published(true),
            NewPost::new("b", "b"),
        ]);
        let snapshot = AnalyticsSnapshot::load(&api, &[]).await.unwrap();
        assert_eq!(snapshot.total_posts, 2);
        assert_eq!(snapshot.published_posts, 1);
    }
}
