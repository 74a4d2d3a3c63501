use std::fmt;

use crate::presentation::formatters::bar;
use crate::presentation::view_models::AnalyticsViewModel;

const BAR_WIDTH: usize = 20;

pub struct AnalyticsView<'a> {
    data: &'a AnalyticsViewModel,
}

impl<'a> AnalyticsView<'a> {
    pub fn new(data: &'a AnalyticsViewModel) -> Self {
        Self { data }
    }
}

fn row(f: &mut fmt::Formatter, label: &str, value: &str, percent: Option<f64>) -> fmt::Result {
    match percent {
        Some(p) => writeln!(
            f,
            "  {:<14}{:>6}  {} {:>3.0}%",
            label,
            value,
            bar(p, BAR_WIDTH),
            p
        ),
        None => writeln!(f, "  {:<14}{:>6}", label, value),
    }
}

impl<'a> fmt::Display for AnalyticsView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let d = self.data;
        let p = &d.progress;

        writeln!(f, "Posts")?;
        row(f, "Total", &d.total_posts.to_string(), Some(p.total_posts))?;
        row(f, "Published", &d.published_posts.to_string(), Some(p.published_posts))?;
        row(f, "Drafts", &d.draft_posts.to_string(), None)?;
        writeln!(f)?;
        writeln!(f, "Views")?;
        row(f, "Total", &d.total_views.to_string(), Some(p.total_views))?;
        row(
            f,
            "Avg per post",
            &d.avg_views_display,
            Some(p.avg_views),
        )?;
        writeln!(f)?;
        writeln!(f, "View totals cover {} published posts.", d.loaded_posts)?;
        Ok(())
    }
}
