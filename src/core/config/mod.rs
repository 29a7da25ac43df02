//! core::config
//!
//! Configuration schema and loading.
//!
//! # Overview
//!
//! A single TOML file describes the application's route tree (names, path
//! templates, breadcrumb metadata) and the rendering options of the
//! breadcrumb component.
//!
//! # Locations
//!
//! Searched in order:
//! 1. The explicit path, if one is given (CLI `--config`)
//! 2. `$ROUTECRUMBS_CONFIG` if set
//! 3. `./routecrumbs.toml`
//! 4. `$XDG_CONFIG_HOME/routecrumbs/routes.toml`
//! 5. `~/.routecrumbs/routes.toml`
//!
//! If none exists, an empty configuration is used.
//!
//! # Validation
//!
//! Invalid route names and duplicate names are errors. Malformed breadcrumb
//! values and parent references to unknown routes are reported as warnings:
//! they degrade to unlabeled entries or empty ancestor chains at runtime.
//!
//! # Example
//!
//! ```no_run
//! use routecrumbs::core::config::Config;
//!
//! let result = Config::load(None).unwrap();
//! for warning in &result.warnings {
//!     eprintln!("warning: {}", warning);
//! }
//!
//! let table = result.config.route_table().unwrap();
//! println!("{} named routes", table.len());
//! ```

pub mod schema;

pub use schema::{AppConfig, BreadcrumbConfig, BreadcrumbTable, RenderConfig, RouteConfig};

use std::collections::HashSet;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use schema::breadcrumb_location;

use crate::core::router::{RouteDef, RouteTable, RouterError};
use crate::ui::render::RenderOptions;
use crate::ui::template::Template;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "ROUTECRUMBS_CONFIG";

/// Config file name looked up in the working directory.
pub const LOCAL_CONFIG_FILE: &str = "routecrumbs.toml";

/// Location prefix of top-level routes in warnings.
const ROUTES_LOCATION: &str = "routes";

/// Errors from configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config {origin}: {message}")]
    ParseError { origin: String, message: String },

    #[error("invalid config value: {0}")]
    InvalidValue(String),

    #[error("invalid route table: {0}")]
    Routes(#[from] RouterError),
}

/// Warnings generated during config loading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    /// Dotted location of the offending value, e.g. `routes.users.breadcrumb`.
    pub location: String,
    /// The warning message.
    pub message: String,
}

impl ConfigWarning {
    pub fn new(location: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.location, self.message)
    }
}

/// Result of loading configuration.
#[derive(Debug)]
pub struct ConfigLoadResult {
    /// The loaded configuration.
    pub config: Config,
    /// Any warnings generated during loading.
    pub warnings: Vec<ConfigWarning>,
}

/// Loaded and validated configuration.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Parsed file contents
    pub app: AppConfig,
    /// Path of the file this was loaded from
    source: Option<PathBuf>,
}

impl Config {
    /// Load configuration from the first existing location.
    ///
    /// # Errors
    ///
    /// Returns an error if a config file exists but cannot be read, parsed
    /// or validated. A missing file is not an error.
    pub fn load(explicit: Option<&Path>) -> Result<ConfigLoadResult, ConfigError> {
        let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        let found = Self::discover(
            explicit,
            |key| std::env::var(key).ok(),
            &cwd,
            dirs::home_dir(),
        );

        match found {
            Some(path) => Self::from_file(&path),
            None => {
                debug!("no config file found, using defaults");
                Ok(ConfigLoadResult {
                    config: Config::default(),
                    warnings: Vec::new(),
                })
            }
        }
    }

    /// Find the config file to load.
    ///
    /// An explicit path is returned even if it does not exist, so reading it
    /// reports a proper error.
    pub fn discover(
        explicit: Option<&Path>,
        env: impl Fn(&str) -> Option<String>,
        cwd: &Path,
        home: Option<PathBuf>,
    ) -> Option<PathBuf> {
        if let Some(path) = explicit {
            return Some(path.to_path_buf());
        }

        // 1. $ROUTECRUMBS_CONFIG
        if let Some(path) = env(CONFIG_ENV).map(PathBuf::from) {
            if path.exists() {
                return Some(path);
            }
        }

        // 2. ./routecrumbs.toml
        let local = cwd.join(LOCAL_CONFIG_FILE);
        if local.exists() {
            return Some(local);
        }

        // 3. $XDG_CONFIG_HOME/routecrumbs/routes.toml
        if let Some(xdg_home) = env("XDG_CONFIG_HOME") {
            let path = PathBuf::from(xdg_home).join("routecrumbs/routes.toml");
            if path.exists() {
                return Some(path);
            }
        }

        // 4. ~/.routecrumbs/routes.toml
        home.map(|home| home.join(".routecrumbs/routes.toml"))
            .filter(|path| path.exists())
    }

    /// Read, parse and validate a config file.
    pub fn from_file(path: &Path) -> Result<ConfigLoadResult, ConfigError> {
        debug!(path = %path.display(), "loading config");
        let contents = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let mut result = Self::parse(&contents, &format!("file '{}'", path.display()))?;
        result.config.source = Some(path.to_path_buf());
        Ok(result)
    }

    /// Parse and validate configuration from a TOML string.
    pub fn from_toml_str(contents: &str) -> Result<ConfigLoadResult, ConfigError> {
        Self::parse(contents, "string")
    }

    fn parse(contents: &str, origin: &str) -> Result<ConfigLoadResult, ConfigError> {
        let app: AppConfig = toml::from_str(contents).map_err(|e| ConfigError::ParseError {
            origin: origin.to_string(),
            message: e.to_string(),
        })?;

        let config = Config { app, source: None };
        let warnings = config.validate()?;

        Ok(ConfigLoadResult { config, warnings })
    }

    /// Validate the configuration, returning non-fatal warnings.
    ///
    /// # Errors
    ///
    /// Returns an error for invalid or duplicate route names.
    pub fn validate(&self) -> Result<Vec<ConfigWarning>, ConfigError> {
        let (defs, mut warnings) = self.route_defs()?;
        RouteTable::new(defs)?;

        let mut names = HashSet::new();
        let mut parents = Vec::new();
        for route in &self.app.routes {
            route.walk(ROUTES_LOCATION, &mut |r, location| {
                if let Some(name) = &r.name {
                    names.insert(name.as_str());
                }
                if let Some(parent) = r.breadcrumb.as_ref().and_then(BreadcrumbConfig::parent) {
                    parents.push((breadcrumb_location(location), parent));
                }
            });
        }

        for (location, parent) in parents {
            if !names.contains(parent) {
                warnings.push(ConfigWarning::new(
                    location,
                    format!("parent '{parent}' does not name a route"),
                ));
            }
        }

        if matches!(&self.app.render.template, Some(t) if t.trim().is_empty()) {
            warnings.push(ConfigWarning::new(
                "render.template",
                "empty template; the default markup is used",
            ));
        }

        Ok(warnings)
    }

    fn route_defs(&self) -> Result<(Vec<RouteDef>, Vec<ConfigWarning>), ConfigError> {
        let mut warnings = Vec::new();
        let defs = self
            .app
            .routes
            .iter()
            .map(|route| route.to_def(ROUTES_LOCATION, &mut warnings))
            .collect::<Result<Vec<_>, _>>()?;
        Ok((defs, warnings))
    }

    /// Build the route table described by this configuration.
    pub fn route_table(&self) -> Result<RouteTable, ConfigError> {
        let (defs, _) = self.route_defs()?;
        Ok(RouteTable::new(defs)?)
    }

    /// Rendering options with defaults applied.
    pub fn render_options(&self) -> RenderOptions {
        let render = &self.app.render;
        let defaults = RenderOptions::default();

        RenderOptions {
            list_class: render.list_class.clone().unwrap_or(defaults.list_class),
            item_class: render.item_class.clone().unwrap_or(defaults.item_class),
            template: render
                .template
                .as_deref()
                .filter(|t| !t.trim().is_empty())
                .map(Template::parse),
        }
    }

    /// Get the path of the loaded config file.
    pub fn loaded_from(&self) -> Option<&Path> {
        self.source.as_deref()
    }
}
