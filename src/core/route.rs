//! core::route
//!
//! Route records as seen by the breadcrumb resolver.

use std::sync::Arc;

use super::meta::BreadcrumbMeta;
use super::types::{RouteName, RouteParams};

/// An entry of the host router's configuration.
///
/// `path` is the full path template of the record, including any
/// `:param` tokens.
#[derive(Debug, Clone, Default)]
pub struct RouteRecord {
    pub name: Option<RouteName>,
    pub path: String,
    pub breadcrumb: Option<BreadcrumbMeta>,
}

impl RouteRecord {
    /// Create an unnamed record without breadcrumb metadata.
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            name: None,
            path: path.into(),
            breadcrumb: None,
        }
    }

    pub fn named(mut self, name: RouteName) -> Self {
        self.name = Some(name);
        self
    }

    pub fn with_breadcrumb(mut self, breadcrumb: BreadcrumbMeta) -> Self {
        self.breadcrumb = Some(breadcrumb);
        self
    }

    /// The route name as a string slice, if named.
    pub fn name_str(&self) -> Option<&str> {
        self.name.as_ref().map(RouteName::as_str)
    }
}

/// Ordered list of records matched for a location, root to leaf.
pub type MatchedChain = Vec<Arc<RouteRecord>>;

/// The active route: its matched chain and parameters.
#[derive(Debug, Clone, Default)]
pub struct CurrentRoute {
    pub matched: MatchedChain,
    pub params: RouteParams,
}

impl CurrentRoute {
    pub fn new(matched: MatchedChain, params: RouteParams) -> Self {
        Self { matched, params }
    }

    /// The most specific matched record.
    pub fn leaf(&self) -> Option<&Arc<RouteRecord>> {
        self.matched.last()
    }
}
