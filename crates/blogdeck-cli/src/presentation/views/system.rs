use std::fmt;

use crate::presentation::view_models::{ConfigViewModel, GuidanceViewModel};
use blogdeck_client::BaseUrlSource;

pub struct ConfigView<'a> {
    data: &'a ConfigViewModel,
}

impl<'a> ConfigView<'a> {
    pub fn new(data: &'a ConfigViewModel) -> Self {
        Self { data }
    }
}

impl<'a> fmt::Display for ConfigView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let source = match self.data.base_url_source {
            BaseUrlSource::Flag => "--base-url",
            BaseUrlSource::Env => "BLOGDECK_API_URL",
            BaseUrlSource::ConfigFile => "config file",
            BaseUrlSource::Default => "default",
        };

        write!(f, "Config file: {}", self.data.config_path)?;
        if !self.data.config_exists {
            write!(f, " (not created yet)")?;
        }
        writeln!(f)?;
        writeln!(f, "Base URL:    {} ({})", self.data.base_url, source)?;
        match self.data.timeout_secs {
            Some(secs) => writeln!(f, "Timeout:     {}s", secs)?,
            None => writeln!(f, "Timeout:     none")?,
        }
        Ok(())
    }
}

pub struct GuidanceView<'a> {
    data: &'a GuidanceViewModel,
}

impl<'a> GuidanceView<'a> {
    pub fn new(data: &'a GuidanceViewModel) -> Self {
        Self { data }
    }
}

impl<'a> fmt::Display for GuidanceView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "blogdeck - terminal client for the blog manager")?;
        writeln!(f)?;
        writeln!(f, "Backend: {}", self.data.base_url)?;
        writeln!(f)?;

        if !self.data.config_exists {
            writeln!(f, "Get started:")?;
            writeln!(f, "  blogdeck config set --url <URL>")?;
            writeln!(f, "  blogdeck demo                     # Try the UI on sample data")?;
            writeln!(f)?;
        }

        writeln!(f, "Quick commands:")?;
        writeln!(f, "  blogdeck list                     # Published posts")?;
        writeln!(f, "  blogdeck search <QUERY>           # Search by title")?;
        writeln!(f, "  blogdeck show <ID>                # Read a post")?;
        writeln!(f, "  blogdeck analytics                # Post and view statistics")?;
        writeln!(f, "  blogdeck tui                      # Interactive UI")?;
        writeln!(f)?;
        writeln!(f, "For more commands:")?;
        writeln!(f, "  blogdeck --help")?;
        Ok(())
    }
}
