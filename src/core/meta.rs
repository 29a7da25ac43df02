//! core::meta
//!
//! Per-route breadcrumb metadata.
//!
//! # Variants
//!
//! A route describes its breadcrumb in one of three ways:
//! - [`BreadcrumbMeta::Literal`] - a fixed label
//! - [`BreadcrumbMeta::Computed`] - a function of the current route
//!   parameters, evaluated lazily on every resolution
//! - [`BreadcrumbMeta::LabeledWithParent`] - a label plus the name of a route
//!   to splice in as the logical ancestor
//!
//! Every variant evaluates to a [`Breadcrumb`]. Only a non-empty parent name
//! counts as a declared parent.

use std::fmt;
use std::sync::Arc;

use super::types::RouteParams;

/// Label function of a [`BreadcrumbMeta::Computed`] breadcrumb.
pub type LabelFn = Arc<dyn Fn(&RouteParams) -> Breadcrumb + Send + Sync>;

/// Breadcrumb metadata attached to a route record.
#[derive(Clone)]
pub enum BreadcrumbMeta {
    /// Fixed label, never re-parented.
    Literal(String),
    /// Label (and optional parent) computed from the current route parameters.
    Computed(LabelFn),
    /// Fixed label with a parent override.
    LabeledWithParent { label: String, parent: String },
}

impl BreadcrumbMeta {
    /// Fixed label.
    pub fn literal(label: impl Into<String>) -> Self {
        BreadcrumbMeta::Literal(label.into())
    }

    /// Label computed from the current route parameters.
    ///
    /// # Example
    ///
    /// ```
    /// use routecrumbs::core::meta::{Breadcrumb, BreadcrumbMeta};
    /// use routecrumbs::core::types::RouteParams;
    ///
    /// let meta = BreadcrumbMeta::computed(|params| {
    ///     Breadcrumb::new(format!("Edit user #{}", params.get("id").unwrap_or("?")))
    /// });
    ///
    /// let params: RouteParams = [("id", "42")].into_iter().collect();
    /// assert_eq!(meta.evaluate(&params).label, "Edit user #42");
    /// ```
    pub fn computed<F>(f: F) -> Self
    where
        F: Fn(&RouteParams) -> Breadcrumb + Send + Sync + 'static,
    {
        BreadcrumbMeta::Computed(Arc::new(f))
    }

    /// Fixed label with a parent override.
    pub fn with_parent(label: impl Into<String>, parent: impl Into<String>) -> Self {
        BreadcrumbMeta::LabeledWithParent {
            label: label.into(),
            parent: parent.into(),
        }
    }

    /// Evaluate the metadata against the current route parameters.
    pub fn evaluate(&self, params: &RouteParams) -> Breadcrumb {
        match self {
            BreadcrumbMeta::Literal(label) => Breadcrumb::new(label.clone()),
            BreadcrumbMeta::Computed(f) => f(params),
            BreadcrumbMeta::LabeledWithParent { label, parent } => {
                Breadcrumb::with_parent(label.clone(), parent.clone())
            }
        }
    }

    /// Short name of the variant, for listings.
    pub fn kind(&self) -> &'static str {
        match self {
            BreadcrumbMeta::Literal(_) => "literal",
            BreadcrumbMeta::Computed(_) => "computed",
            BreadcrumbMeta::LabeledWithParent { .. } => "parent",
        }
    }
}

impl fmt::Debug for BreadcrumbMeta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BreadcrumbMeta::Literal(label) => f.debug_tuple("Literal").field(label).finish(),
            BreadcrumbMeta::Computed(_) => f.write_str("Computed(<fn>)"),
            BreadcrumbMeta::LabeledWithParent { label, parent } => f
                .debug_struct("LabeledWithParent")
                .field("label", label)
                .field("parent", parent)
                .finish(),
        }
    }
}

/// An evaluated breadcrumb.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Breadcrumb {
    /// Display label. Empty means the entry is not rendered.
    pub label: String,
    /// Parent route name, as written in the metadata.
    pub parent: Option<String>,
}

impl Breadcrumb {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            parent: None,
        }
    }

    pub fn with_parent(label: impl Into<String>, parent: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            parent: Some(parent.into()),
        }
    }

    /// The parent route name, if one is declared.
    ///
    /// An empty parent is treated as no parent at all.
    pub fn declared_parent(&self) -> Option<&str> {
        self.parent.as_deref().filter(|p| !p.is_empty())
    }

    /// The label, if it is non-empty.
    pub fn visible_label(&self) -> Option<&str> {
        Some(self.label.as_str()).filter(|l| !l.is_empty())
    }
}
