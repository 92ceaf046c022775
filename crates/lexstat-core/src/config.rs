//! Layered configuration.
//!
//! Sources merge lowest to highest:
//!
//! 1. built-in defaults
//! 2. `config.<ext>` in the user config directory (`~/.config/lexstat/` on Linux)
//! 3. project files from the closest directory, walking up from the search
//!    root and giving up past the first directory holding `.git`:
//!    `.lexstat.<ext>`, then `lexstat.<ext>`
//! 4. files added with [`ConfigLoader::with_file`] (the `--config` flag)
//! 5. `LEXSTAT_*` environment variables
//!
//! `<ext>` is `toml`, `yaml`, `yml` or `json`. Within one directory every
//! matching file is merged in that extension order.
//!
//! ```no_run
//! use camino::Utf8PathBuf;
//! use lexstat_core::config::ConfigLoader;
//!
//! let cwd = Utf8PathBuf::try_from(std::env::current_dir().unwrap()).unwrap();
//! let (config, sources) = ConfigLoader::new().with_project_search(&cwd).load().unwrap();
//! println!("wordlist {:?} from {:?}", config.wordlist, sources.primary_file());
//! ```

use camino::{Utf8Path, Utf8PathBuf};
use figment::Figment;
use figment::providers::{Env, Format, Json, Serialized, Toml, Yaml};
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};
use crate::text::ParagraphSplit;

/// The configuration for lexstat.
///
/// Deserialized from config files found during discovery (TOML, YAML, or
/// JSON) and from `LEXSTAT_*` environment variables.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Log level for the application (e.g., "debug", "info", "warn", "error").
    pub log_level: LogLevel,
    /// Directory for JSONL log files (falls back to platform defaults if unset).
    pub log_dir: Option<Utf8PathBuf>,
    /// Dale-Chall wordlist file, one word per line.
    ///
    /// Relative paths resolve against the working directory.
    pub wordlist: Option<Utf8PathBuf>,
    /// How input documents are cut into paragraphs.
    pub paragraph_split: ParagraphSplit,
    /// Score paragraphs across all cores. Default: `true`.
    pub parallel: bool,
    /// Maximum input size in bytes (default: 5 MiB).
    ///
    /// Omit to use the default. Use `disable_input_limit` to remove the
    /// limit entirely.
    pub max_input_bytes: Option<usize>,
    /// Disable the input size limit entirely.
    ///
    /// When `true`, `max_input_bytes` is ignored and no size check is performed.
    pub disable_input_limit: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: LogLevel::default(),
            log_dir: None,
            wordlist: None,
            paragraph_split: ParagraphSplit::default(),
            parallel: true,
            max_input_bytes: None,
            disable_input_limit: false,
        }
    }
}

impl Config {
    /// Resolve the configured wordlist path against `cwd`.
    pub fn wordlist_path(&self, cwd: &Utf8Path) -> Option<Utf8PathBuf> {
        self.wordlist.as_ref().map(|path| {
            if path.is_relative() {
                cwd.join(path)
            } else {
                path.clone()
            }
        })
    }

    /// Effective input size limit, `None` when the limit is disabled.
    pub fn input_limit(&self) -> Option<usize> {
        if self.disable_input_limit {
            None
        } else {
            self.max_input_bytes
                .or(Some(crate::DEFAULT_MAX_INPUT_BYTES))
        }
    }
}

/// Log level configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Verbose output for debugging and development.
    Debug,
    /// Standard operational information (default).
    #[default]
    Info,
    /// Warnings about potential issues.
    Warn,
    /// Errors that indicate failures.
    Error,
}

impl LogLevel {
    /// Returns the log level as a lowercase string slice.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

/// Config files that went into a [`Config`], for reporting.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ConfigSources {
    /// User config file, if one exists.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_file: Option<Utf8PathBuf>,
    /// Project files from the closest matching directory, lowest precedence first.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub project_files: Vec<Utf8PathBuf>,
    /// Files passed explicitly, lowest precedence first.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub explicit_files: Vec<Utf8PathBuf>,
}

impl ConfigSources {
    /// Every file in merge order, lowest precedence first.
    pub fn layered(&self) -> impl Iterator<Item = &Utf8Path> {
        self.user_file
            .iter()
            .chain(&self.project_files)
            .chain(&self.explicit_files)
            .map(Utf8PathBuf::as_path)
    }

    /// The file whose values win, if any file was loaded.
    pub fn primary_file(&self) -> Option<&Utf8Path> {
        self.layered().last()
    }
}

/// File extensions tried in each location, lowest precedence first.
const CONFIG_EXTENSIONS: [&str; 4] = ["toml", "yaml", "yml", "json"];

/// Directory name for user config and the stem of project config files.
const APP_NAME: &str = "lexstat";

/// Prefix of environment variable overrides.
const ENV_PREFIX: &str = "LEXSTAT_";

/// A directory containing this entry is the last one searched.
const BOUNDARY_MARKER: &str = ".git";

/// Collects config sources and merges them into a [`Config`].
#[derive(Debug)]
pub struct ConfigLoader {
    search_root: Option<Utf8PathBuf>,
    user_config: bool,
    explicit_files: Vec<Utf8PathBuf>,
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigLoader {
    /// A loader that reads the user config and nothing else until told to.
    pub const fn new() -> Self {
        Self {
            search_root: None,
            user_config: true,
            explicit_files: Vec::new(),
        }
    }

    /// Search for project config starting at `dir` and walking up.
    pub fn with_project_search<P: AsRef<Utf8Path>>(mut self, dir: P) -> Self {
        self.search_root = Some(dir.as_ref().to_path_buf());
        self
    }

    /// Include or skip the user config file.
    pub const fn with_user_config(mut self, include: bool) -> Self {
        self.user_config = include;
        self
    }

    /// Merge `path` after every discovered file. Later calls win.
    pub fn with_file<P: AsRef<Utf8Path>>(mut self, path: P) -> Self {
        self.explicit_files.push(path.as_ref().to_path_buf());
        self
    }

    /// Locate every config file this loader would merge.
    pub fn discover(&self) -> ConfigSources {
        ConfigSources {
            user_file: if self.user_config {
                user_config_dir().and_then(|dir| existing_files(&dir, "config").pop())
            } else {
                None
            },
            project_files: self
                .search_root
                .as_deref()
                .map(project_files)
                .unwrap_or_default(),
            explicit_files: self.explicit_files.clone(),
        }
    }

    /// Merge defaults, discovered files, explicit files and the environment.
    #[tracing::instrument(skip(self), fields(search_root = ?self.search_root))]
    pub fn load(self) -> ConfigResult<(Config, ConfigSources)> {
        let sources = self.discover();
        tracing::debug!(files = sources.layered().count(), "merging configuration");

        let figment = sources
            .layered()
            .fold(
                Figment::new().merge(Serialized::defaults(Config::default())),
                merge_file,
            )
            .merge(Env::prefixed(ENV_PREFIX).lowercase(true));

        let config: Config = figment
            .extract()
            .map_err(|e| ConfigError::Deserialize(Box::new(e)))?;
        tracing::info!(
            log_level = config.log_level.as_str(),
            wordlist = ?config.wordlist,
            config_file = ?sources.primary_file(),
            "configuration loaded"
        );
        Ok((config, sources))
    }
}

/// Project config files from the closest directory at or above `start` that
/// has any.
fn project_files(start: &Utf8Path) -> Vec<Utf8PathBuf> {
    for dir in start.ancestors() {
        let mut found = existing_files(dir, &format!(".{APP_NAME}"));
        found.extend(existing_files(dir, APP_NAME));
        if !found.is_empty() || dir.join(BOUNDARY_MARKER).exists() {
            return found;
        }
    }
    Vec::new()
}

/// `<dir>/<stem>.<ext>` for each extension that exists, in extension order.
fn existing_files(dir: &Utf8Path, stem: &str) -> Vec<Utf8PathBuf> {
    CONFIG_EXTENSIONS
        .iter()
        .map(|ext| dir.join(format!("{stem}.{ext}")))
        .filter(|path| path.is_file())
        .collect()
}

fn merge_file(figment: Figment, path: &Utf8Path) -> Figment {
    match path.extension() {
        Some("yaml" | "yml") => figment.merge(Yaml::file_exact(path.as_str())),
        Some("json") => figment.merge(Json::file_exact(path.as_str())),
        _ => figment.merge(Toml::file_exact(path.as_str())),
    }
}

/// Platform config directory for lexstat, e.g. `~/.config/lexstat/`.
pub fn user_config_dir() -> Option<Utf8PathBuf> {
    let dirs = directories::ProjectDirs::from("", "", APP_NAME)?;
    Utf8PathBuf::from_path_buf(dirs.config_dir().to_path_buf()).ok()
}
