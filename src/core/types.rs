//! core::types
//!
//! Strong types for core domain concepts.
//!
//! # Types
//!
//! - [`RouteName`] - Validated route identifier
//! - [`RouteParams`] - Current route parameters and `:param` substitution
//!
//! # Validation
//!
//! Names are validated at construction time. Parameters are free-form
//! strings, as handed over by the host router.
//!
//! # Examples
//!
//! ```
//! use routecrumbs::core::types::{RouteName, RouteParams};
//!
//! let name = RouteName::new("user-edit").unwrap();
//! assert_eq!(name.as_str(), "user-edit");
//! assert!(RouteName::new("").is_err());
//!
//! let params: RouteParams = [("id", "42")].into_iter().collect();
//! assert_eq!(params.substitute("/users/:id"), "/users/42");
//! ```

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from type validation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("invalid route name: {0}")]
    InvalidRouteName(String),

    #[error("invalid route parameter '{0}': expected key=value")]
    InvalidParam(String),
}

/// A validated route name.
///
/// Route names identify records in the host router's configuration:
/// - Cannot be empty
/// - Cannot start or end with whitespace
/// - Cannot contain ASCII control characters
///
/// # Example
///
/// ```
/// use routecrumbs::core::types::RouteName;
///
/// assert!(RouteName::new("users").is_ok());
/// assert!(RouteName::new("admin.users.list").is_ok());
/// assert!(RouteName::new(" users").is_err());
/// assert!(RouteName::new("a\tb").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RouteName(String);

impl RouteName {
    /// Create a new validated route name.
    ///
    /// # Errors
    ///
    /// Returns `TypeError::InvalidRouteName` if the name is empty, padded with
    /// whitespace, or contains control characters.
    pub fn new(name: impl Into<String>) -> Result<Self, TypeError> {
        let name = name.into();
        Self::validate(&name)?;
        Ok(Self(name))
    }

    fn validate(name: &str) -> Result<(), TypeError> {
        if name.is_empty() {
            return Err(TypeError::InvalidRouteName(
                "route name cannot be empty".into(),
            ));
        }

        if name.trim() != name {
            return Err(TypeError::InvalidRouteName(format!(
                "route name '{name}' cannot start or end with whitespace"
            )));
        }

        if name.chars().any(|c| c.is_control()) {
            return Err(TypeError::InvalidRouteName(
                "route name cannot contain control characters".into(),
            ));
        }

        Ok(())
    }

    /// Get the route name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for RouteName {
    type Error = TypeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<RouteName> for String {
    fn from(name: RouteName) -> Self {
        name.0
    }
}

impl AsRef<str> for RouteName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RouteName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Parameters of the current route, keyed by parameter name.
///
/// Keys are kept sorted so substitution and serialization are deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RouteParams(BTreeMap<String, String>);

impl RouteParams {
    /// Create an empty parameter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a parameter, returning the previous value if any.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.0.insert(key.into(), value.into())
    }

    /// Get a parameter value.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Iterate over `(key, value)` pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Parse a `key=value` pair, as given on the command line.
    ///
    /// The value may be empty and may itself contain `=`.
    ///
    /// # Errors
    ///
    /// Returns `TypeError::InvalidParam` if there is no `=` or the key is empty.
    pub fn parse_pair(pair: &str) -> Result<(String, String), TypeError> {
        match pair.split_once('=') {
            Some((key, value)) if !key.trim().is_empty() => {
                Ok((key.trim().to_string(), value.to_string()))
            }
            _ => Err(TypeError::InvalidParam(pair.to_string())),
        }
    }

    /// Substitute `:key` tokens in a path template.
    ///
    /// For every parameter, the first exact `:key` token is replaced by its
    /// value. A token is exact when the character after the key cannot
    /// continue an identifier, so `:id` never matches inside `:idx`.
    /// Templates are otherwise left untouched: no optional segments, no
    /// repeated-parameter expansion.
    ///
    /// # Example
    ///
    /// ```
    /// use routecrumbs::core::types::RouteParams;
    ///
    /// let params: RouteParams = [("id", "42"), ("idx", "7")].into_iter().collect();
    /// assert_eq!(params.substitute("/users/:id/rows/:idx"), "/users/42/rows/7");
    /// assert_eq!(params.substitute("/users"), "/users");
    /// ```
    pub fn substitute(&self, template: &str) -> String {
        let mut path = template.to_string();

        for (key, value) in self.iter() {
            if let Some(start) = find_token(&path, key) {
                path.replace_range(start..start + key.len() + 1, value);
            }
        }

        path
    }
}

/// Find the byte offset of the first exact `:key` token in `path`.
fn find_token(path: &str, key: &str) -> Option<usize> {
    let token = format!(":{key}");
    let mut from = 0;

    while let Some(offset) = path[from..].find(&token) {
        let start = from + offset;
        let end = start + token.len();
        let boundary = path[end..]
            .chars()
            .next()
            .is_none_or(|c| !is_ident_char(c));

        if boundary {
            return Some(start);
        }
        from = start + 1;
    }

    None
}

fn is_ident_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

impl<K, V> FromIterator<(K, V)> for RouteParams
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}
