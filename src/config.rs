//! Config file loading and merging with command-line flags.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result, bail};
use ietfdata_core::DataTrackerConfig;

use crate::cli::Args;

/// Values read from `config.toml`. Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileConfig {
    pub cache_dir: Option<PathBuf>,
    pub base_url: Option<String>,
    pub verbosity: Option<VerbositySetting>,
    pub connect_timeout_secs: Option<u64>,
    pub read_timeout_secs: Option<u64>,
}

impl FileConfig {
    /// Checks values against the ranges the CLI accepts.
    pub fn validate(&self) -> Result<()> {
        if let Some(base_url) = &self.base_url
            && !(base_url.starts_with("http://") || base_url.starts_with("https://"))
        {
            bail!("Invalid config value for `base_url`: '{base_url}'. Expected an http(s) URL");
        }
        validate_timeout_secs("connect_timeout_secs", self.connect_timeout_secs)?;
        validate_timeout_secs("read_timeout_secs", self.read_timeout_secs)?;
        Ok(())
    }
}

fn validate_timeout_secs(field: &str, value: Option<u64>) -> Result<()> {
    let Some(value) = value else {
        return Ok(());
    };
    if !(1..=3600).contains(&value) {
        bail!("Invalid config value for `{field}`: {value}. Expected range: 1..=3600");
    }
    Ok(())
}

/// Verbosity labels accepted in the config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerbositySetting {
    Quiet,
    Default,
    Verbose,
    Debug,
}

impl VerbositySetting {
    /// The `EnvFilter` directive this setting stands for.
    #[must_use]
    pub fn level(self) -> &'static str {
        match self {
            Self::Quiet => "error",
            Self::Default => "info",
            Self::Verbose => "debug",
            Self::Debug => "trace",
        }
    }
}

/// Default config location.
///
/// Priority:
/// 1. `$XDG_CONFIG_HOME/ietfdata/config.toml`
/// 2. `$HOME/.config/ietfdata/config.toml`
#[must_use]
pub fn resolve_default_config_path() -> Option<PathBuf> {
    config_path_from(
        env_var_non_empty_os("XDG_CONFIG_HOME").map(PathBuf::from),
        env_var_non_empty_os("HOME").map(PathBuf::from),
    )
}

fn config_path_from(xdg_config_home: Option<PathBuf>, home: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(xdg) = xdg_config_home {
        return Some(xdg.join("ietfdata").join("config.toml"));
    }
    Some(home?.join(".config").join("ietfdata").join("config.toml"))
}

fn env_var_non_empty_os(name: &str) -> Option<std::ffi::OsString> {
    let value = env::var_os(name)?;
    if value.is_empty() { None } else { Some(value) }
}

/// Loads the config file.
///
/// An explicit path must exist. The default path is optional: when it is
/// missing an empty config is returned.
pub fn load(explicit: Option<&Path>) -> Result<FileConfig> {
    if let Some(path) = explicit {
        return load_file_config(path);
    }
    match resolve_default_config_path() {
        Some(path) if path.exists() => load_file_config(&path),
        _ => Ok(FileConfig::default()),
    }
}

fn load_file_config(path: &Path) -> Result<FileConfig> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file '{}'", path.display()))?;
    parse_config_str(&raw)
        .with_context(|| format!("Failed to parse config file '{}'", path.display()))
}

const KEYS: &[&str] = &[
    "cache_dir",
    "base_url",
    "verbosity",
    "connect_timeout_secs",
    "read_timeout_secs",
];

fn parse_config_str(raw: &str) -> Result<FileConfig> {
    let mut cfg = FileConfig::default();
    for (line_number, raw_line) in (1..).zip(raw.lines()) {
        let line = without_comment(raw_line).trim();
        if line.is_empty() {
            continue;
        }
        let Some((key, value)) = line.split_once('=') else {
            bail!("Invalid config syntax on line {line_number}: expected key = value");
        };
        let (key, value) = (key.trim(), value.trim());
        if !KEYS.contains(&key) {
            bail!("Unknown configuration key: '{key}' on line {line_number}");
        }
        set_value(&mut cfg, key, value)
            .with_context(|| format!("Invalid `{key}` value on line {line_number}"))?;
    }
    cfg.validate()?;
    Ok(cfg)
}

fn set_value(cfg: &mut FileConfig, key: &str, value: &str) -> Result<()> {
    match key {
        "cache_dir" => cfg.cache_dir = Some(PathBuf::from(quoted(value)?)),
        "base_url" => cfg.base_url = Some(quoted(value)?),
        "verbosity" => cfg.verbosity = Some(quoted(value)?.parse()?),
        "connect_timeout_secs" => cfg.connect_timeout_secs = Some(seconds(value)?),
        "read_timeout_secs" => cfg.read_timeout_secs = Some(seconds(value)?),
        other => bail!("Unknown configuration key: '{other}'"),
    }
    Ok(())
}

/// The part of `line` before a `#` that is not inside a quoted string.
fn without_comment(line: &str) -> &str {
    let mut in_string = false;
    line.char_indices()
        .find(|&(_, ch)| {
            if ch == '"' {
                in_string = !in_string;
            }
            ch == '#' && !in_string
        })
        .map_or(line, |(index, _)| &line[..index])
}

fn quoted(value: &str) -> Result<String> {
    value
        .strip_prefix('"')
        .and_then(|inner| inner.strip_suffix('"'))
        .map(str::to_string)
        .context("Expected double-quoted string")
}

fn seconds(value: &str) -> Result<u64> {
    value
        .parse::<u64>()
        .with_context(|| format!("Expected a non-negative integer, got '{value}'"))
}

impl std::str::FromStr for VerbositySetting {
    type Err = anyhow::Error;

    fn from_str(value: &str) -> Result<Self> {
        match value {
            "quiet" => Ok(Self::Quiet),
            "default" => Ok(Self::Default),
            "verbose" => Ok(Self::Verbose),
            "debug" => Ok(Self::Debug),
            _ => bail!("Expected one of: quiet, default, verbose, debug"),
        }
    }
}

/// Picks the log level: `-q`/`-v` beat the file, which beats `info`.
#[must_use]
pub fn log_level(args: &Args, file: &FileConfig) -> &'static str {
    if args.quiet {
        return VerbositySetting::Quiet.level();
    }
    match args.verbose {
        0 => file.verbosity.unwrap_or(VerbositySetting::Default).level(),
        1 => VerbositySetting::Verbose.level(),
        _ => VerbositySetting::Debug.level(),
    }
}

/// Builds the engine configuration, with flags overriding file values.
#[must_use]
pub fn tracker_config(args: &Args, file: &FileConfig) -> DataTrackerConfig {
    let mut config = DataTrackerConfig::default();
    if let Some(base_url) = args.base_url.as_ref().or(file.base_url.as_ref()) {
        config.base_url.clone_from(base_url);
    }
    config.cache_dir = args.cache_dir.clone().or_else(|| file.cache_dir.clone());
    if let Some(secs) = file.connect_timeout_secs {
        config.connect_timeout = Duration::from_secs(secs);
    }
    if let Some(secs) = file.read_timeout_secs {
        config.read_timeout = Duration::from_secs(secs);
    }
    config
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use clap::Parser;

    use super::*;

    #[test]
    fn test_parse_config_all_fields() {
        let cfg = parse_config_str(
            r#"
            # cache responses between runs
            cache_dir = "/var/cache/ietfdata"
            base_url = "http://localhost:8000"   # local mirror
            verbosity = "verbose"
            connect_timeout_secs = 5
            read_timeout_secs = 120
            "#,
        )
        .unwrap();
        assert_eq!(cfg.cache_dir, Some(PathBuf::from("/var/cache/ietfdata")));
        assert_eq!(cfg.base_url.as_deref(), Some("http://localhost:8000"));
        assert_eq!(cfg.verbosity, Some(VerbositySetting::Verbose));
        assert_eq!(cfg.connect_timeout_secs, Some(5));
        assert_eq!(cfg.read_timeout_secs, Some(120));
    }

    #[test]
    fn test_parse_config_empty_is_default() {
        assert_eq!(parse_config_str("\n# nothing\n").unwrap(), FileConfig::default());
    }

    #[test]
    fn test_parse_config_rejects_unknown_key() {
        let err = parse_config_str("concurrency = 4").unwrap_err();
        assert!(err.to_string().contains("Unknown configuration key: 'concurrency'"));
    }

    #[test]
    fn test_parse_config_rejects_missing_equals() {
        let err = parse_config_str("cache_dir \"/tmp\"").unwrap_err();
        assert!(err.to_string().contains("expected key = value"));
    }

    #[test]
    fn test_parse_config_rejects_unquoted_string() {
        assert!(parse_config_str("cache_dir = /tmp").is_err());
    }

    #[test]
    fn test_parse_config_keeps_hash_inside_string() {
        let cfg = parse_config_str(r#"cache_dir = "/tmp/#cache""#).unwrap();
        assert_eq!(cfg.cache_dir, Some(PathBuf::from("/tmp/#cache")));
    }

    #[test]
    fn test_parse_config_rejects_out_of_range_timeout() {
        let err = parse_config_str("read_timeout_secs = 0").unwrap_err();
        assert!(err.to_string().contains("Expected range: 1..=3600"));
        assert!(parse_config_str("connect_timeout_secs = -3").is_err());
    }

    #[test]
    fn test_parse_config_rejects_non_http_base_url() {
        assert!(parse_config_str(r#"base_url = "ftp://example.org""#).is_err());
    }

    #[test]
    fn test_parse_config_rejects_unknown_verbosity() {
        assert!(parse_config_str(r#"verbosity = "loud""#).is_err());
    }

    #[test]
    fn test_config_path_prefers_xdg() {
        let path = config_path_from(Some("/xdg".into()), Some("/home/u".into())).unwrap();
        assert_eq!(path, PathBuf::from("/xdg/ietfdata/config.toml"));

        let path = config_path_from(None, Some("/home/u".into())).unwrap();
        assert_eq!(path, PathBuf::from("/home/u/.config/ietfdata/config.toml"));

        assert!(config_path_from(None, None).is_none());
    }

    #[test]
    fn test_load_explicit_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let err = load(Some(&dir.path().join("absent.toml"))).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }

    #[test]
    fn test_load_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "verbosity = \"quiet\"\n").unwrap();
        let cfg = load(Some(&path)).unwrap();
        assert_eq!(cfg.verbosity, Some(VerbositySetting::Quiet));
    }

    #[test]
    fn test_flags_override_file() {
        let file = FileConfig {
            cache_dir: Some("/from/file".into()),
            base_url: Some("http://file.example".to_string()),
            verbosity: Some(VerbositySetting::Quiet),
            connect_timeout_secs: Some(7),
            read_timeout_secs: None,
        };
        let args = Args::try_parse_from([
            "ietfdata",
            "-v",
            "--base-url",
            "http://flag.example",
            "group",
            "quic",
        ])
        .unwrap();

        let config = tracker_config(&args, &file);
        assert_eq!(config.base_url, "http://flag.example");
        assert_eq!(config.cache_dir, Some(PathBuf::from("/from/file")));
        assert_eq!(config.connect_timeout, Duration::from_secs(7));
        assert_eq!(config.read_timeout, DataTrackerConfig::default().read_timeout);
        assert_eq!(log_level(&args, &file), "debug");
    }

    #[test]
    fn test_log_level_falls_back_to_file_then_info() {
        let args = Args::try_parse_from(["ietfdata", "group", "quic"]).unwrap();
        let file = FileConfig {
            verbosity: Some(VerbositySetting::Debug),
            ..FileConfig::default()
        };
        assert_eq!(log_level(&args, &file), "trace");
        assert_eq!(log_level(&args, &FileConfig::default()), "info");

        let quiet = Args::try_parse_from(["ietfdata", "-q", "group", "quic"]).unwrap();
        assert_eq!(log_level(&quiet, &file), "error");
    }
}
