use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::warn;
use tracing_subscriber::EnvFilter;

use crate::document::{DEFAULT_CAPACITY, Document};
use crate::logging;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ConfigFlags {
    pub document_capacity: Option<usize>,
    pub history_capacity: Option<usize>,
    pub log_filter: Option<String>,
}

impl ConfigFlags {
    pub fn union(&self, other: &Self) -> Self {
        Self {
            document_capacity: other.document_capacity.or(self.document_capacity),
            history_capacity: other.history_capacity.or(self.history_capacity),
            log_filter: other
                .log_filter
                .clone()
                .or_else(|| self.log_filter.clone()),
        }
    }

    pub fn document_capacity_or_default(&self) -> usize {
        self.document_capacity.unwrap_or(DEFAULT_CAPACITY)
    }

    /// Build an empty document sized by these flags.
    pub fn new_document(&self) -> crate::error::Result<Document> {
        Document::with_capacity(self.document_capacity_or_default())
    }

    /// The log filter these flags select, falling back to `RUST_LOG`.
    pub fn tracing_filter(&self) -> Result<EnvFilter> {
        logging::build_filter(self.log_filter.as_deref())
    }

    /// Install the global subscriber using the configured `--log-filter`.
    pub fn init_tracing(&self) -> Result<()> {
        logging::init_tracing(self.log_filter.as_deref())
    }
}

pub fn global_config_path() -> PathBuf {
    #[cfg(target_os = "windows")]
    {
        if let Some(appdata) = std::env::var_os("APPDATA") {
            return PathBuf::from(appdata).join("docundo").join("config");
        }
    }

    #[cfg(target_os = "macos")]
    {
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home)
                .join("Library")
                .join("Application Support")
                .join("docundo")
                .join("config");
        }
    }

    #[cfg(not(any(target_os = "windows", target_os = "macos")))]
    {
        if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME") {
            return PathBuf::from(xdg).join("docundo").join("config");
        }
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home).join(".config").join("docundo").join("config");
        }
    }

    PathBuf::from(".docundorc")
}

pub fn local_override_path() -> PathBuf {
    PathBuf::from(".docundorc")
}

pub fn load_config_flags(path: &Path) -> Result<ConfigFlags> {
    if !path.exists() {
        return Ok(ConfigFlags::default());
    }
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    let tokens = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .flat_map(|line| line.split_whitespace().map(ToOwned::to_owned))
        .collect::<Vec<_>>();
    Ok(parse_flag_tokens(&tokens))
}

pub fn save_config_flags(path: &Path, flags: &ConfigFlags) -> Result<()> {
    let mut lines = Vec::new();
    lines.push("# docundo defaults".to_string());
    if let Some(capacity) = flags.document_capacity {
        lines.push(format!("--document-capacity {capacity}"));
    }
    if let Some(capacity) = flags.history_capacity {
        lines.push(format!("--history-capacity {capacity}"));
    }
    if let Some(filter) = &flags.log_filter {
        lines.push(format!("--log-filter {filter}"));
    }
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config dir {}", parent.display()))?;
    }
    fs::write(path, format!("{}\n", lines.join("\n")))
        .with_context(|| format!("Failed to write config {}", path.display()))
}

pub fn clear_config_flags(path: &Path) -> Result<()> {
    if path.exists() {
        fs::remove_file(path).with_context(|| format!("Failed to remove {}", path.display()))?;
    }
    Ok(())
}

pub fn parse_flag_tokens(tokens: &[String]) -> ConfigFlags {
    let mut flags = ConfigFlags::default();
    let mut i = 0;
    while i < tokens.len() {
        let token = &tokens[i];
        if token == "--document-capacity" {
            if let Some(next) = tokens.get(i + 1) {
                flags.document_capacity = parse_capacity(token, next);
                i += 1;
            }
        } else if let Some(value) = token.strip_prefix("--document-capacity=") {
            flags.document_capacity = parse_capacity("--document-capacity", value);
        } else if token == "--history-capacity" {
            if let Some(next) = tokens.get(i + 1) {
                flags.history_capacity = parse_capacity(token, next);
                i += 1;
            }
        } else if let Some(value) = token.strip_prefix("--history-capacity=") {
            flags.history_capacity = parse_capacity("--history-capacity", value);
        } else if token == "--log-filter" {
            if let Some(next) = tokens.get(i + 1) {
                flags.log_filter = Some(next.clone());
                i += 1;
            }
        } else if let Some(value) = token.strip_prefix("--log-filter=") {
            flags.log_filter = Some(value.to_string());
        }
        i += 1;
    }
    flags
}

fn parse_capacity(flag: &str, s: &str) -> Option<usize> {
    match s.parse::<usize>() {
        Ok(0) | Err(_) => {
            warn!(flag, value = s, "ignoring capacity, expected a positive integer");
            None
        }
        Ok(n) => Some(n),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn tokens(args: &[&str]) -> Vec<String> {
        args.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_log_filter_flag_drives_tracing_filter() {
        let flags = parse_flag_tokens(&tokens(&["--log-filter", "docundo=trace"]));
        let filter = flags.tracing_filter().unwrap();
        assert!(filter.to_string().contains("docundo=trace"));
    }

    #[test]
    fn test_invalid_log_filter_flag_is_reported() {
        let flags = ConfigFlags {
            log_filter: Some("docundo=notalevel".to_string()),
            ..ConfigFlags::default()
        };
        assert!(flags.tracing_filter().is_err());
    }

    #[test]
    fn test_parse_flag_tokens_extracts_known_flags() {
        let args = tokens(&[
            "--document-capacity",
            "500",
            "--history-capacity=20",
            "--log-filter",
            "docundo=debug",
            "--unknown",
        ]);
        let flags = parse_flag_tokens(&args);
        assert_eq!(flags.document_capacity, Some(500));
        assert_eq!(flags.history_capacity, Some(20));
        assert_eq!(flags.log_filter.as_deref(), Some("docundo=debug"));
    }

    #[test]
    fn test_parse_flag_tokens_ignores_non_positive_capacity() {
        let flags = parse_flag_tokens(&tokens(&[
            "--history-capacity",
            "0",
            "--document-capacity=lots",
        ]));
        assert_eq!(flags.history_capacity, None);
        assert_eq!(flags.document_capacity, None);
    }

    #[test]
    fn test_config_union_prefers_right_hand_side() {
        let file = ConfigFlags {
            document_capacity: Some(100),
            history_capacity: Some(5),
            ..ConfigFlags::default()
        };
        let cli = ConfigFlags {
            history_capacity: Some(50),
            log_filter: Some("trace".to_string()),
            ..ConfigFlags::default()
        };
        let merged = file.union(&cli);
        assert_eq!(merged.document_capacity, Some(100));
        assert_eq!(merged.history_capacity, Some(50));
        assert_eq!(merged.log_filter.as_deref(), Some("trace"));
    }

    #[test]
    fn test_new_document_uses_default_capacity() {
        let doc = ConfigFlags::default().new_document().unwrap();
        assert_eq!(doc.capacity(), DEFAULT_CAPACITY);

        let flags = ConfigFlags {
            document_capacity: Some(64),
            ..ConfigFlags::default()
        };
        assert_eq!(flags.new_document().unwrap().capacity(), 64);
    }

    #[test]
    fn test_save_load_and_clear_config() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join(".docundorc");
        let flags = ConfigFlags {
            document_capacity: Some(2048),
            history_capacity: Some(16),
            log_filter: Some("docundo=trace".to_string()),
        };

        save_config_flags(&path, &flags).unwrap();
        let loaded = load_config_flags(&path).unwrap();
        assert_eq!(loaded, flags);

        clear_config_flags(&path).unwrap();
        assert!(!path.exists());
    }

    #[test]
    fn test_load_missing_file_yields_defaults() {
        let dir = tempdir().unwrap();
        let loaded = load_config_flags(&dir.path().join("absent")).unwrap();
        assert_eq!(loaded, ConfigFlags::default());
    }
}
