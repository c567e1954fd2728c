//! `.env` file environment source

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use super::traits::{EnvError, EnvResult, EnvSource};

/// Environment source backed by a `.env` file
///
/// The file is parsed once at construction; later edits to the file are not
/// seen. Accepted syntax, one assignment per line:
///
/// ```text
/// # comment
/// JIRA_URL=https://jira.internal.corp
/// export JIRA_PERSONAL_TOKEN="secret"
/// ```
///
/// Blank lines and `#` comments are skipped, an `export ` prefix is allowed,
/// and one pair of surrounding single or double quotes is stripped from the
/// value. When a key repeats, the last assignment wins.
#[derive(Debug, Clone)]
pub struct DotenvEnv {
    path: Option<PathBuf>,
    vars: HashMap<String, String>,
}

impl DotenvEnv {
    /// Load and parse the file at `path`
    pub fn from_path(path: impl AsRef<Path>) -> EnvResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let vars = parse(&content)?;
        Ok(Self {
            path: Some(path.to_path_buf()),
            vars,
        })
    }

    /// Parse `.env` content that did not come from a file
    pub fn parse_str(content: &str) -> EnvResult<Self> {
        Ok(Self {
            path: None,
            vars: parse(content)?,
        })
    }

    /// File this source was loaded from, if any
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Number of assignments parsed
    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

impl EnvSource for DotenvEnv {
    fn name(&self) -> &str {
        "dotenv"
    }

    fn get(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }
}

fn parse(content: &str) -> EnvResult<HashMap<String, String>> {
    let mut vars = HashMap::new();

    for (index, raw) in content.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let line = line.strip_prefix("export ").unwrap_or(line);
        let Some((key, value)) = line.split_once('=') else {
            return Err(EnvError::parse(index + 1, format!("expected KEY=VALUE, got '{}'", raw.trim())));
        };

        let key = key.trim();
        if key.is_empty() {
            return Err(EnvError::parse(index + 1, "empty variable name"));
        }

        vars.insert(key.to_string(), unquote(value.trim()).to_string());
    }

    Ok(vars)
}

fn unquote(value: &str) -> &str {
    for quote in ['"', '\''] {
        if value.len() >= 2 && value.starts_with(quote) && value.ends_with(quote) {
            return &value[1..value.len() - 1];
        }
    }
    value
}
