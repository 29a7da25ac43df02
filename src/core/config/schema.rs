//! core::config::schema
//!
//! Configuration schema types.
//!
//! # Layout
//!
//! A config file has an optional `[render]` table and a list of `[[routes]]`,
//! each of which may nest `[[routes.children]]`.
//!
//! # Breadcrumb forms
//!
//! | TOML value                        | Breadcrumb                        |
//! |-----------------------------------|-----------------------------------|
//! | `"Users"`                         | literal label                     |
//! | `{ label = "Edit" }`              | literal label                     |
//! | `{ label = "Edit", parent = "users" }` | label with parent override   |
//! | `{ parent = "users" }`            | no label, parent override         |
//! | `{ template = "User :id" }`       | label computed from route params  |
//! | `{ template = "...", parent = "users" }` | computed, with parent      |
//! | any other non-table value         | malformed: empty label, warning   |
//!
//! Tables are read leniently: `label` and `parent` are taken independently,
//! a `parent` that is not a non-empty string is ignored, and unknown keys
//! are ignored. Each ignored piece produces a warning.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{ConfigError, ConfigWarning};
use crate::core::meta::{Breadcrumb, BreadcrumbMeta};
use crate::core::router::RouteDef;
use crate::core::types::RouteName;

/// Top-level configuration file.
///
/// # Example
///
/// ```toml
/// [render]
/// list_class = "breadcrumb"
///
/// [[routes]]
/// path = "/users"
/// name = "users"
/// breadcrumb = "Users"
///
///   [[routes.children]]
///   path = ":id"
///   name = "user"
///   breadcrumb = { template = "User #:id" }
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// Rendering options
    pub render: RenderConfig,

    /// Route tree
    pub routes: Vec<RouteConfig>,
}

/// Rendering options.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct RenderConfig {
    /// Class of the list element (default: "breadcrumb")
    pub list_class: Option<String>,

    /// Class of each item element (default: "breadcrumb-item")
    pub item_class: Option<String>,

    /// Custom item template; replaces the default markup when set
    pub template: Option<String>,
}

/// A route entry.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct RouteConfig {
    /// Path template, relative to the parent route unless it starts with `/`
    pub path: String,

    /// Unique route name
    pub name: Option<String>,

    /// Breadcrumb metadata
    pub breadcrumb: Option<BreadcrumbConfig>,

    /// Nested routes
    pub children: Vec<RouteConfig>,
}

/// Breadcrumb metadata as written in the config file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum BreadcrumbConfig {
    Label(String),
    Table(BreadcrumbTable),
    Malformed(toml::Value),
}

/// `{ label?, template?, parent? }`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct BreadcrumbTable {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    /// Label template with `:param` tokens; takes precedence over `label`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template: Option<String>,

    /// Parent route name; only a non-empty string counts
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<toml::Value>,

    /// Keys with no meaning for breadcrumbs
    #[serde(flatten)]
    pub extra: BTreeMap<String, toml::Value>,
}

impl BreadcrumbTable {
    /// The declared parent route name, if it is a non-empty string.
    pub fn declared_parent(&self) -> Option<&str> {
        match &self.parent {
            Some(toml::Value::String(parent)) if !parent.is_empty() => Some(parent.as_str()),
            _ => None,
        }
    }

    fn to_meta(&self, location: &str, warnings: &mut Vec<ConfigWarning>) -> BreadcrumbMeta {
        for key in self.extra.keys() {
            warnings.push(ConfigWarning::new(
                location,
                format!("unknown breadcrumb key '{key}' is ignored"),
            ));
        }

        if let Some(parent) = &self.parent {
            if !matches!(parent, toml::Value::String(_)) {
                warnings.push(ConfigWarning::new(
                    location,
                    format!(
                        "parent must be a route name, found {}; it is ignored",
                        parent.type_str()
                    ),
                ));
            }
        }

        let parent = self.declared_parent().map(str::to_string);

        if let Some(template) = &self.template {
            if self.label.is_some() {
                warnings.push(ConfigWarning::new(
                    location,
                    "both label and template are set; the label is ignored",
                ));
            }
            let template = template.clone();
            return BreadcrumbMeta::computed(move |params| Breadcrumb {
                label: params.substitute(&template),
                parent: parent.clone(),
            });
        }

        let label = self.label.clone().unwrap_or_default();
        match parent {
            Some(parent) => BreadcrumbMeta::with_parent(label, parent),
            None => BreadcrumbMeta::literal(label),
        }
    }
}

impl BreadcrumbConfig {
    /// Convert into breadcrumb metadata.
    ///
    /// Malformed values degrade to an empty label and push a warning.
    pub fn to_meta(&self, location: &str, warnings: &mut Vec<ConfigWarning>) -> BreadcrumbMeta {
        match self {
            BreadcrumbConfig::Label(label) => BreadcrumbMeta::literal(label.clone()),
            BreadcrumbConfig::Table(table) => table.to_meta(location, warnings),
            BreadcrumbConfig::Malformed(value) => {
                warnings.push(ConfigWarning::new(
                    location,
                    format!(
                        "unsupported breadcrumb value ({}); the entry will have no label",
                        value.type_str()
                    ),
                ));
                BreadcrumbMeta::literal("")
            }
        }
    }

    /// The parent route name declared in the config, if any.
    pub fn parent(&self) -> Option<&str> {
        match self {
            BreadcrumbConfig::Table(table) => table.declared_parent(),
            _ => None,
        }
    }
}

impl RouteConfig {
    /// Convert this route and its children into route definitions.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if a route name is invalid.
    pub fn to_def(
        &self,
        parent_location: &str,
        warnings: &mut Vec<ConfigWarning>,
    ) -> Result<RouteDef, ConfigError> {
        let location = self.location(parent_location);

        let name = self
            .name
            .as_ref()
            .map(|n| {
                RouteName::new(n.clone()).map_err(|e| {
                    ConfigError::InvalidValue(format!("{location}: {e}"))
                })
            })
            .transpose()?;

        let breadcrumb = self
            .breadcrumb
            .as_ref()
            .map(|bc| bc.to_meta(&breadcrumb_location(&location), warnings));

        let children = self
            .children
            .iter()
            .map(|child| child.to_def(&location, warnings))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(RouteDef {
            name,
            path: self.path.clone(),
            breadcrumb,
            children,
        })
    }

    /// Dotted location of this route below `parent_location`, e.g.
    /// `routes.home.users`, or `routes[/about]` for an unnamed route.
    pub fn location(&self, parent_location: &str) -> String {
        match &self.name {
            Some(name) => format!("{parent_location}.{name}"),
            None => format!("{parent_location}[{}]", display_path(&self.path)),
        }
    }

    /// Visit this route and all nested routes, depth first, with the
    /// location of each.
    pub fn walk<'a>(&'a self, parent_location: &str, visit: &mut impl FnMut(&'a RouteConfig, &str)) {
        let location = self.location(parent_location);
        visit(self, &location);
        for child in &self.children {
            child.walk(&location, visit);
        }
    }
}

/// Location of a route's breadcrumb value.
pub fn breadcrumb_location(route_location: &str) -> String {
    format!("{route_location}.breadcrumb")
}

fn display_path(path: &str) -> &str {
    if path.is_empty() {
        "\"\""
    } else {
        path
    }
}
