//! core::resolver
//!
//! Breadcrumb trail resolution.
//!
//! # Algorithm
//!
//! Each matched route contributes itself, preceded by the ancestor chain of
//! its declared parent (if any). Ancestor chains are built by
//! [`find_parents`], which follows parent declarations from route to route
//! through the [`RouteResolver`]. The contributions are flattened in matched
//! order and empty paths are normalized to `/`.
//!
//! # Invariants
//!
//! - Output order: parent ancestors come before the route that declared them
//! - No deduplication: overlapping chains may repeat a route
//! - A parent name is never visited twice in one walk (cycles are errors)
//! - Resolution is pure: identical inputs give identical output

use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, warn};

use super::route::{MatchedChain, RouteRecord};
use super::router::RouteResolver;
use super::types::RouteParams;

/// Errors from breadcrumb resolution.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BreadcrumbError {
    #[error("breadcrumb parent cycle at '{route}': {}", .chain.join(" -> "))]
    CyclicParent { route: String, chain: Vec<String> },
}

/// The resolved breadcrumb trail.
///
/// Entries are copies of the resolved route records with their paths
/// normalized, so the trail can outlive the route table.
#[derive(Debug, Clone, Default)]
pub struct ResolvedBreadcrumbs {
    entries: Vec<RouteRecord>,
}

impl ResolvedBreadcrumbs {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RouteRecord> {
        self.entries.iter()
    }

    /// Evaluated labels, one per entry. Unlabeled entries give `None`.
    pub fn labels(&self, params: &RouteParams) -> Vec<Option<String>> {
        self.entries
            .iter()
            .map(|entry| {
                entry
                    .breadcrumb
                    .as_ref()
                    .map(|meta| meta.evaluate(params))
                    .and_then(|bc| bc.visible_label().map(str::to_string))
            })
            .collect()
    }

    /// Entry paths, in order.
    pub fn paths(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.path.as_str()).collect()
    }
}

impl<'a> IntoIterator for &'a ResolvedBreadcrumbs {
    type Item = &'a RouteRecord;
    type IntoIter = std::slice::Iter<'a, RouteRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Compute the breadcrumb trail for a matched chain.
///
/// # Errors
///
/// Returns `BreadcrumbError::CyclicParent` if following parent declarations
/// revisits a route name.
///
/// # Example
///
/// ```
/// use routecrumbs::core::meta::BreadcrumbMeta;
/// use routecrumbs::core::resolver::compute_breadcrumbs;
/// use routecrumbs::core::router::{RouteDef, RouteTable};
/// use routecrumbs::core::types::{RouteName, RouteParams};
///
/// let table = RouteTable::new(vec![
///     RouteDef::new("/users")
///         .named(RouteName::new("users").unwrap())
///         .with_breadcrumb(BreadcrumbMeta::literal("Users")),
///     RouteDef::new("/users/:id/edit")
///         .named(RouteName::new("user-edit").unwrap())
///         .with_breadcrumb(BreadcrumbMeta::with_parent("Edit", "users")),
/// ])
/// .unwrap();
///
/// let current = table.current("user-edit", RouteParams::new()).unwrap();
/// let trail = compute_breadcrumbs(&current.matched, &current.params, &table).unwrap();
///
/// assert_eq!(trail.paths(), vec!["/users", "/users/:id/edit"]);
/// ```
pub fn compute_breadcrumbs<R>(
    matched: &[Arc<RouteRecord>],
    params: &RouteParams,
    resolver: &R,
) -> Result<ResolvedBreadcrumbs, BreadcrumbError>
where
    R: RouteResolver + ?Sized,
{
    let mut entries = Vec::with_capacity(matched.len());

    for route in matched {
        let parent = route
            .breadcrumb
            .as_ref()
            .map(|meta| meta.evaluate(params))
            .and_then(|bc| bc.declared_parent().map(str::to_string));

        if let Some(parent) = parent {
            debug!(
                route = route.name_str().unwrap_or(&route.path),
                parent = %parent,
                "expanding breadcrumb parent"
            );
            let ancestors = find_parents(resolver, &parent, params)?;
            entries.extend(ancestors.iter().map(|r| normalized(r)));
        }

        entries.push(normalized(route));
    }

    debug!(entries = entries.len(), "resolved breadcrumb trail");
    Ok(ResolvedBreadcrumbs { entries })
}

/// Build the ancestor chain for a parent route name.
///
/// Resolves `name`, takes the most specific record of its chain and, while
/// that record declares a parent of its own, keeps walking upwards. The
/// result is the remaining chain of the last resolved route followed by
/// every record visited, oldest ancestor first.
///
/// An unknown name contributes nothing beyond the records already collected.
///
/// # Errors
///
/// Returns `BreadcrumbError::CyclicParent` if a parent name repeats.
pub fn find_parents<R>(
    resolver: &R,
    name: &str,
    params: &RouteParams,
) -> Result<MatchedChain, BreadcrumbError>
where
    R: RouteResolver + ?Sized,
{
    let mut matches: MatchedChain = Vec::new();
    let mut visited: Vec<String> = Vec::new();
    let mut current = name.to_string();

    loop {
        if visited.contains(&current) {
            visited.push(current.clone());
            warn!(route = %current, "breadcrumb parent cycle detected");
            return Err(BreadcrumbError::CyclicParent {
                route: current,
                chain: visited,
            });
        }
        visited.push(current.clone());

        let mut chain = resolver.resolve(&current);
        let Some(last) = chain.pop() else {
            debug!(route = %current, "parent route did not resolve");
            chain.extend(matches);
            return Ok(chain);
        };

        matches.insert(0, Arc::clone(&last));

        let next = last
            .breadcrumb
            .as_ref()
            .map(|meta| meta.evaluate(params))
            .and_then(|bc| bc.declared_parent().map(str::to_string));

        match next {
            Some(parent) => current = parent,
            None => {
                chain.extend(matches);
                return Ok(chain);
            }
        }
    }
}

/// Copy a record into the trail, normalizing an empty path to `/`.
fn normalized(route: &RouteRecord) -> RouteRecord {
    let mut entry = route.clone();
    if entry.path.is_empty() {
        entry.path = "/".to_string();
    }
    entry
}
