//! Custom assertions for blogdeck JSON output.
//!
//! Provides high-level assertions that make tests more readable:
//! - Post count validation
//! - Title membership checks
//! - Status badge checks

use anyhow::{Context, Result};
use serde_json::Value;

fn posts(json: &Value) -> Result<&Vec<Value>> {
    json["content"]["posts"]
        .as_array()
        .context("Expected 'content.posts' array in JSON")
}

/// Assert that JSON output contains expected number of posts.
pub fn assert_post_count(json: &Value, expected: usize) -> Result<()> {
    let posts = posts(json)?;
    if posts.len() != expected {
        anyhow::bail!("Expected {} posts, got {}", expected, posts.len());
    }
    Ok(())
}

/// Assert that the listed posts carry exactly these titles, in order.
pub fn assert_post_titles(json: &Value, expected: &[&str]) -> Result<()> {
    let titles: Vec<&str> = posts(json)?
        .iter()
        .filter_map(|p| p["title"].as_str())
        .collect();

    if titles != expected {
        anyhow::bail!("Expected titles {:?}, got {:?}", expected, titles);
    }
    Ok(())
}

/// Assert the result badge level (`success`, `info`, `warning`, `error`).
pub fn assert_badge(json: &Value, level: &str) -> Result<()> {
    let actual = json["badge"]["level"]
        .as_str()
        .context("Expected 'badge.level' in JSON")?;

    if actual != level {
        anyhow::bail!("Expected badge level {}, got {}", level, actual);
    }
    Ok(())
}
