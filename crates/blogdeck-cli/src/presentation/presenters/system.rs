use crate::presentation::view_models::{
    CommandResultViewModel, ConfigViewModel, Guidance, GuidanceViewModel, StatusBadge,
};
use blogdeck_client::BaseUrlSource;
use std::path::Path;

pub fn present_config(
    config_path: &Path,
    base_url: &str,
    source: BaseUrlSource,
    timeout_secs: Option<u64>,
) -> CommandResultViewModel<ConfigViewModel> {
    let config_exists = config_path.exists();
    let mut result = CommandResultViewModel::new(ConfigViewModel {
        config_path: config_path.display().to_string(),
        config_exists,
        base_url: base_url.to_string(),
        base_url_source: source,
        timeout_secs,
    });

    if !config_exists {
        result = result.with_suggestion(
            Guidance::new("Save a base URL")
                .with_command("blogdeck config set --url <URL>"),
        );
    }
    result
}

pub fn present_config_saved(
    config_path: &Path,
    base_url: &str,
    source: BaseUrlSource,
    timeout_secs: Option<u64>,
) -> CommandResultViewModel<ConfigViewModel> {
    let result = present_config(config_path, base_url, source, timeout_secs);
    CommandResultViewModel::new(result.content).with_badge(StatusBadge::success("Config saved"))
}

pub fn present_guidance(
    config_exists: bool,
    base_url: &str,
) -> CommandResultViewModel<GuidanceViewModel> {
    CommandResultViewModel::new(GuidanceViewModel {
        config_exists,
        base_url: base_url.to_string(),
    })
}
