pub mod token;

use anyhow::{Context, Result};
use std::path::Path;
use tracing::info;

use crate::models::common::Config;

/// Loads `file_name` from the crate root, then applies `TX_RESULT__*` environment overrides.
/// A missing file yields the default (test-net) configuration.
pub fn load_config<P: AsRef<Path>>(file_name: P) -> Result<Config> {
    // Build the path to the config file
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    let config_path = Path::new(manifest_dir).join(file_name);
    info!("Config path: {}", config_path.to_string_lossy());

    let settings = config::Config::builder()
        .add_source(config::File::from(config_path).required(false))
        .add_source(
            config::Environment::with_prefix("TX_RESULT")
                .separator("__")
                .try_parsing(true),
        )
        .build()
        .context("failed to read config file")?;

    settings
        .try_deserialize()
        .context("failed to parse config")
}

/// Shortens `text` to at most `max_chars` characters for log and error output.
pub fn truncate(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((end, _)) => format!("{}...", &text[..end]),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("abcdef", 3), "abc...");
        assert_eq!(truncate("abc", 3), "abc");
        assert_eq!(truncate("", 3), "");
    }
}
