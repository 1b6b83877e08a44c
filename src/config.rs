//! Runtime configuration for the Confluence content source.
//!
//! Settings come from the process environment, with a `.env` file in the
//! working directory as fallback. The struct is built once at startup and
//! handed to [`crate::content::PageSource`], so tests can substitute a
//! fixture-backed server by constructing it directly.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Credentials and endpoint for the Confluence REST API.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_token: String,
    /// Base URL of the Confluence REST API, e.g.
    /// `https://example.atlassian.net/wiki/rest/api`.
    pub base_url: String,
    pub user_email: String,
}

impl Config {
    /// Load configuration, preferring process environment variables over a
    /// `.env` file in `dir`.
    ///
    /// Missing values are not a startup error: they degrade to empty strings
    /// and surface as an authentication failure on the first fetch.
    pub fn load(dir: &Path) -> Result<Self, String> {
        let dotenv = read_dotenv(&dir.join(".env"))?;
        let env: HashMap<String, String> = std::env::vars().collect();
        Ok(Self::resolve(&env, &dotenv))
    }

    fn resolve(env: &HashMap<String, String>, dotenv: &HashMap<String, String>) -> Self {
        let get = |key: &str| {
            env.get(key)
                .or_else(|| dotenv.get(key))
                .cloned()
                .unwrap_or_default()
        };
        Self {
            api_token: get("API_TOKEN"),
            base_url: get("API_DOMAIN"),
            user_email: get("USER_EMAIL"),
        }
    }
}

/// Parse a dotenv file into a key/value map.
///
/// Supports comments, blank lines, an optional `export ` prefix, and simple
/// single/double quoting. A missing file yields an empty map.
fn read_dotenv(path: &Path) -> Result<HashMap<String, String>, String> {
    if !path.exists() {
        return Ok(HashMap::new());
    }

    let contents = fs::read_to_string(path)
        .map_err(|err| format!("Failed to read dotenv file {}: {err}", path.display()))?;
    let mut vars = HashMap::new();

    for (index, line) in contents.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let entry = trimmed.strip_prefix("export ").unwrap_or(trimmed);
        let (key, value) = entry.split_once('=').ok_or_else(|| {
            format!(
                "Failed to parse dotenv file {} at line {}: missing '='",
                path.display(),
                index + 1
            )
        })?;
        if !is_valid_key(key) {
            return Err(format!(
                "Invalid dotenv variable name '{key}' in {} at line {}",
                path.display(),
                index + 1
            ));
        }
        vars.insert(key.to_string(), unquote(value));
    }

    Ok(vars)
}

fn is_valid_key(key: &str) -> bool {
    !key.is_empty()
        && key
            .chars()
            .all(|ch| ch.is_ascii_alphanumeric() || ch == '_')
}

fn unquote(value: &str) -> String {
    let value = value.trim();
    for quote in ['"', '\''] {
        if value.len() >= 2 && value.starts_with(quote) && value.ends_with(quote) {
            return value[1..value.len() - 1].to_string();
        }
    }
    value.to_string()
}
