//! Configuration loading and environment variable interpolation

use crate::error::{Error, Result};
use regex::Regex;
use std::env;
use std::fs;
use std::path::Path;

use super::Config;

const CONFIG_FILENAME: &str = "crewdesk.toml";

/// Load configuration from crewdesk.toml, falling back to defaults when no
/// config file exists anywhere up the directory tree
pub fn load_config() -> Result<Config> {
    match find_config_file() {
        Some(config_path) => load_config_from_path(&config_path),
        None => {
            tracing::debug!("No {} found, using defaults", CONFIG_FILENAME);
            Ok(Config::default())
        }
    }
}

/// Load configuration from a specific path
pub fn load_config_from_path(path: &Path) -> Result<Config> {
    let content =
        fs::read_to_string(path).map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))?;
    let content = interpolate_env_vars(&content);
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

/// Find the configuration file, searching upward from current directory
fn find_config_file() -> Option<std::path::PathBuf> {
    let mut current = env::current_dir().ok()?;

    loop {
        let config_path = current.join(CONFIG_FILENAME);
        if config_path.exists() {
            return Some(config_path);
        }

        if !current.pop() {
            return None;
        }
    }
}

/// Interpolate environment variables in the format ${VAR_NAME} or ${VAR_NAME:-default}
fn interpolate_env_vars(content: &str) -> String {
    // This regex is a compile-time constant, panicking is acceptable here
    // as it indicates a programming error in the codebase, not a runtime issue
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)(?::-([^}]*))?\}")
        .expect("Invalid regex pattern - this is a bug in the codebase");

    re.replace_all(content, |caps: &regex::Captures| {
        let var_name = &caps[1];
        let default = caps.get(2).map(|m| m.as_str()).unwrap_or("");

        env::var(var_name).unwrap_or_else(|_| default.to_string())
    })
    .to_string()
}

/// Generate a default configuration file content
pub fn default_config_content() -> &'static str {
    r#"# Crewdesk Configuration

[server]
# Base URL of the Crewdesk backend; the /api/v1 prefix is added automatically
base_url = "${CREWDESK_API_URL:-http://localhost:8000}"

[session]
# Where the login token and user record are persisted
# dir = "/home/me/.crewdesk"
"#
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interpolate_with_default() {
        let content = "base_url = \"${CREWDESK_TEST_MISSING_VAR:-http://fallback:8000}\"";
        let result = interpolate_env_vars(content);
        assert_eq!(result, "base_url = \"http://fallback:8000\"");
    }

    #[test]
    fn test_interpolate_from_env() {
        env::set_var("CREWDESK_TEST_URL", "http://fromenv:9000");
        let content = "base_url = \"${CREWDESK_TEST_URL}\"";
        let result = interpolate_env_vars(content);
        assert_eq!(result, "base_url = \"http://fromenv:9000\"");
        env::remove_var("CREWDESK_TEST_URL");
    }

    #[test]
    fn test_default_config_content_parses() {
        let content = interpolate_env_vars(default_config_content());
        let config: Config = toml::from_str(&content).expect("default config must parse");
        assert_eq!(config.server.base_url, "http://localhost:8000");
    }
}
