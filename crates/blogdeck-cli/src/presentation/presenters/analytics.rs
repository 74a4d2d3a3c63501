use crate::presentation::view_models::{
    AnalyticsViewModel, CommandResultViewModel, ProgressViewModel,
};
use blogdeck_engine::AnalyticsSnapshot;

pub fn present_analytics(snapshot: &AnalyticsSnapshot) -> CommandResultViewModel<AnalyticsViewModel> {
    let progress = snapshot.progress();

    CommandResultViewModel::new(AnalyticsViewModel {
        total_posts: snapshot.total_posts,
        published_posts: snapshot.published_posts,
        draft_posts: snapshot.draft_posts(),
        total_views: snapshot.total_views,
        avg_views_per_post: snapshot.avg_views_per_post,
        avg_views_display: snapshot.avg_display(),
        loaded_posts: snapshot.loaded_posts,
        progress: ProgressViewModel {
            total_posts: progress.total_posts,
            published_posts: progress.published_posts,
            total_views: progress.total_views,
            avg_views: progress.avg_views,
        },
    })
}
