pub mod analytics;
pub mod post;
pub mod system;
pub mod tui;

pub use analytics::present_analytics;
pub use post::{
    present_delete_cancelled, present_post_created, present_post_deleted,
    present_post_detail, present_post_detail_result, present_post_list, present_post_summary,
    present_post_updated, present_publish_toggled, present_validation_failure,
};
pub use system::{present_config, present_config_saved, present_guidance};
pub use tui::build_status_bar;
