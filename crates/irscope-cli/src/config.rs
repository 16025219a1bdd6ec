//! Settings for one CLI run.
//!
//! A run layers three sources, later ones winning:
//!
//! 1. built-in defaults: `proto_2`, a fresh seed, `report.toml`;
//! 2. one `irscope.toml`: the `--config` path, else the file next to the
//!    input dump, else the one in the user configuration directory;
//! 3. the `--layout`, `--seed` and `--output` flags.
//!
//! ```toml
//! [layout]
//! method = "grid"
//! seed = 7
//!
//! [report]
//! path = "reports/latest.toml" # relative to this file
//! ```

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use directories::ProjectDirs;
use log::{debug, info};
use serde::Deserialize;
use thiserror::Error;

use irscope::{
    IrscopeError,
    config::{AppConfig, LayoutConfig},
};

use crate::args::Args;

const FILE_NAME: &str = "irscope.toml";
const DEFAULT_REPORT: &str = "report.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read `{}`: {source}", path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid settings in `{}`: {message}", path.display())]
    Invalid { path: PathBuf, message: String },
}

impl From<ConfigError> for IrscopeError {
    fn from(err: ConfigError) -> Self {
        IrscopeError::Config(err.to_string())
    }
}

/// Contents of an `irscope.toml`. Unknown keys are rejected so that a
/// misspelt setting does not silently fall back to its default.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct SettingsFile {
    layout: LayoutConfig,
    report: ReportSection,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ReportSection {
    path: Option<PathBuf>,
}

/// Everything a run needs besides the dump itself.
#[derive(Debug)]
pub struct Settings {
    pub app: AppConfig,
    pub output: PathBuf,
}

/// Combine defaults, the settings file and the command line.
///
/// # Errors
///
/// Returns `IrscopeError::Config` if the settings file cannot be read or
/// holds unknown keys or values.
pub fn resolve(args: &Args) -> Result<Settings, IrscopeError> {
    let (file, base) = match locate(args) {
        Some(path) => {
            let file = read(&path)?;
            let base = path.parent().map(Path::to_path_buf).unwrap_or_default();
            (file, base)
        }
        None => (SettingsFile::default(), PathBuf::new()),
    };

    let mut app = AppConfig {
        layout: file.layout,
    };
    if let Some(method) = args.layout {
        app = app.with_layout_method(method);
    }
    if let Some(seed) = args.seed {
        app = app.with_seed(seed);
    }

    let output = match (&args.output, file.report.path) {
        (Some(output), _) => PathBuf::from(output),
        (None, Some(path)) => base.join(path),
        (None, None) => PathBuf::from(DEFAULT_REPORT),
    };

    debug!(
        method:% = app.layout.method,
        seed:? = app.layout.seed,
        output:? = output;
        "Resolved settings"
    );

    Ok(Settings { app, output })
}

fn locate(args: &Args) -> Option<PathBuf> {
    if let Some(path) = &args.config {
        info!(path; "Using settings given on the command line");
        return Some(PathBuf::from(path));
    }

    let beside_dump = Path::new(&args.input)
        .parent()
        .map(|dir| dir.join(FILE_NAME));
    let user = ProjectDirs::from("", "", "irscope").map(|dirs| dirs.config_dir().join(FILE_NAME));

    let found = beside_dump.into_iter().chain(user).find(|path| path.is_file());
    match &found {
        Some(path) => info!(path:? = path; "Using settings file"),
        None => debug!("No {FILE_NAME} found, using defaults"),
    }
    found
}

fn read(path: &Path) -> Result<SettingsFile, ConfigError> {
    let text = fs::read_to_string(path).map_err(|source| ConfigError::Unreadable {
        path: path.to_path_buf(),
        source,
    })?;

    toml::from_str(&text).map_err(|err| ConfigError::Invalid {
        path: path.to_path_buf(),
        message: err.message().to_string(),
    })
}
