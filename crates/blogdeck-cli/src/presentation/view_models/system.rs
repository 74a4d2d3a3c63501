use serde::Serialize;
use std::fmt;

use super::CreateView;

#[derive(Debug, Clone, Serialize)]
pub struct ConfigViewModel {
    pub config_path: String,
    pub config_exists: bool,
    pub base_url: String,
    pub base_url_source: blogdeck_client::BaseUrlSource,
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct GuidanceViewModel {
    pub config_exists: bool,
    pub base_url: String,
}

impl CreateView for ConfigViewModel {
    fn create_view<'a>(&'a self) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::system::ConfigView;
        Box::new(ConfigView::new(self))
    }
}

impl CreateView for GuidanceViewModel {
    fn create_view<'a>(&'a self) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::system::GuidanceView;
        Box::new(GuidanceView::new(self))
    }
}
