//! core::router
//!
//! The seam between breadcrumb resolution and the host router.
//!
//! # Architecture
//!
//! The resolver never reads route configuration directly. Every ancestor
//! lookup goes through [`RouteResolver::resolve`], which returns the matched
//! chain of a named route. Any `Fn(&str) -> MatchedChain` is a resolver, and
//! [`RouteTable`] provides an in-memory implementation built from a nested
//! route tree.
//!
//! # Path joining
//!
//! Child paths are relative to their parent unless they start with `/`:
//!
//! | parent     | child   | full path        |
//! |------------|---------|------------------|
//! | `/users`   | `:id`   | `/users/:id`     |
//! | `/users`   | `""`    | `/users`         |
//! | `/users`   | `/me`   | `/me`            |
//! | `""`       | `about` | `/about`         |

use std::collections::HashMap;
use std::sync::Arc;

use thiserror::Error;

use super::meta::BreadcrumbMeta;
use super::route::{CurrentRoute, MatchedChain, RouteRecord};
use super::types::{RouteName, RouteParams};

/// Errors from building or querying a route table.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RouterError {
    #[error("duplicate route name '{0}'")]
    DuplicateName(RouteName),

    #[error("unknown route '{0}'")]
    UnknownRoute(String),
}

/// Name-based route resolution, as provided by the host router.
pub trait RouteResolver {
    /// The matched chain of the named route, root to leaf.
    ///
    /// Unknown names resolve to an empty chain.
    fn resolve(&self, name: &str) -> MatchedChain;
}

impl<F> RouteResolver for F
where
    F: Fn(&str) -> MatchedChain,
{
    fn resolve(&self, name: &str) -> MatchedChain {
        self(name)
    }
}

/// A route definition with nested children.
#[derive(Debug, Clone, Default)]
pub struct RouteDef {
    pub name: Option<RouteName>,
    pub path: String,
    pub breadcrumb: Option<BreadcrumbMeta>,
    pub children: Vec<RouteDef>,
}

impl RouteDef {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            ..Self::default()
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

    pub fn with_children(mut self, children: Vec<RouteDef>) -> Self {
        self.children = children;
        self
    }
}

/// A listed route: its name and full matched chain.
#[derive(Debug, Clone)]
pub struct NamedRoute<'a> {
    pub name: &'a RouteName,
    pub chain: &'a MatchedChain,
}

impl NamedRoute<'_> {
    /// The most specific record of the chain, i.e. the named record itself.
    pub fn record(&self) -> Option<&Arc<RouteRecord>> {
        self.chain.last()
    }
}

/// In-memory route table, indexed by name.
#[derive(Debug, Default)]
pub struct RouteTable {
    chains: HashMap<RouteName, MatchedChain>,
    /// Declaration order, for listings
    order: Vec<RouteName>,
}

impl RouteTable {
    /// Build a table from a route tree.
    ///
    /// # Errors
    ///
    /// Returns `RouterError::DuplicateName` if two routes share a name.
    ///
    /// # Example
    ///
    /// ```
    /// use routecrumbs::core::router::{RouteDef, RouteResolver, RouteTable};
    /// use routecrumbs::core::types::RouteName;
    ///
    /// let table = RouteTable::new(vec![RouteDef::new("/users")
    ///     .named(RouteName::new("users").unwrap())
    ///     .with_children(vec![RouteDef::new(":id").named(RouteName::new("user").unwrap())])])
    /// .unwrap();
    ///
    /// let chain = table.resolve("user");
    /// assert_eq!(chain.len(), 2);
    /// assert_eq!(chain[1].path, "/users/:id");
    /// assert!(table.resolve("missing").is_empty());
    /// ```
    pub fn new(defs: Vec<RouteDef>) -> Result<Self, RouterError> {
        let mut table = Self::default();
        let mut ancestors = Vec::new();

        for def in defs {
            table.insert_tree(def, &mut ancestors)?;
        }

        Ok(table)
    }

    fn insert_tree(
        &mut self,
        def: RouteDef,
        ancestors: &mut MatchedChain,
    ) -> Result<(), RouterError> {
        let parent_path = ancestors.last().map(|r| r.path.as_str());
        let path = join_path(parent_path, &def.path);

        let record = Arc::new(RouteRecord {
            name: def.name.clone(),
            path,
            breadcrumb: def.breadcrumb,
        });

        ancestors.push(record);

        if let Some(name) = def.name {
            if self.chains.contains_key(&name) {
                return Err(RouterError::DuplicateName(name));
            }
            self.chains.insert(name.clone(), ancestors.clone());
            self.order.push(name);
        }

        for child in def.children {
            self.insert_tree(child, ancestors)?;
        }

        ancestors.pop();
        Ok(())
    }

    /// Build the current route for a named route and its parameters.
    ///
    /// This is a name lookup, not URL matching.
    ///
    /// # Errors
    ///
    /// Returns `RouterError::UnknownRoute` if no route has that name.
    pub fn current(&self, name: &str, params: RouteParams) -> Result<CurrentRoute, RouterError> {
        let matched = self
            .lookup(name)
            .cloned()
            .ok_or_else(|| RouterError::UnknownRoute(name.to_string()))?;

        Ok(CurrentRoute::new(matched, params))
    }

    /// Named routes in declaration order.
    pub fn routes(&self) -> impl Iterator<Item = NamedRoute<'_>> {
        self.order.iter().filter_map(|name| {
            self.chains
                .get(name)
                .map(|chain| NamedRoute { name, chain })
        })
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    fn lookup(&self, name: &str) -> Option<&MatchedChain> {
        RouteName::new(name)
            .ok()
            .and_then(|name| self.chains.get(&name))
    }
}

impl RouteResolver for RouteTable {
    fn resolve(&self, name: &str) -> MatchedChain {
        self.lookup(name).cloned().unwrap_or_default()
    }
}

/// Join a child path template onto its parent's full path.
fn join_path(parent: Option<&str>, child: &str) -> String {
    match parent {
        None => child.to_string(),
        Some(_) if child.starts_with('/') => child.to_string(),
        Some(parent) if child.is_empty() => parent.to_string(),
        Some("") => format!("/{}", child),
        Some(parent) => format!("{}/{}", parent.trim_end_matches('/'), child),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name(s: &str) -> RouteName {
        RouteName::new(s).unwrap()
    }

    fn sample_table() -> RouteTable {
        RouteTable::new(vec![
            RouteDef::new("")
                .named(name("home"))
                .with_breadcrumb(BreadcrumbMeta::literal("Home"))
                .with_children(vec![RouteDef::new("users")
                    .named(name("users"))
                    .with_children(vec![
                        RouteDef::new(":id").named(name("user")),
                        RouteDef::new("/me").named(name("me")),
                    ])]),
            RouteDef::new("/about").named(name("about")),
        ])
        .unwrap()
    }

    #[test]
    fn join_path_rules() {
        assert_eq!(join_path(None, ""), "");
        assert_eq!(join_path(None, "/users"), "/users");
        assert_eq!(join_path(Some("/users"), ":id"), "/users/:id");
        assert_eq!(join_path(Some("/users/"), ":id"), "/users/:id");
        assert_eq!(join_path(Some("/users"), ""), "/users");
        assert_eq!(join_path(Some("/users"), "/me"), "/me");
        assert_eq!(join_path(Some(""), "users"), "/users");
        assert_eq!(join_path(Some("/"), "users"), "/users");
    }

    #[test]
    fn resolve_returns_chain_root_to_leaf() {
        let table = sample_table();
        let chain = table.resolve("user");

        let paths: Vec<&str> = chain.iter().map(|r| r.path.as_str()).collect();
        assert_eq!(paths, vec!["", "/users", "/users/:id"]);
        assert_eq!(chain[2].name_str(), Some("user"));
    }

    #[test]
    fn absolute_child_keeps_ancestors() {
        let table = sample_table();
        let chain = table.resolve("me");
        assert_eq!(chain.len(), 3);
        assert_eq!(chain[2].path, "/me");
    }

    #[test]
    fn unknown_name_resolves_empty() {
        let table = sample_table();
        assert!(table.resolve("nope").is_empty());
        assert!(table.resolve("").is_empty());
    }

    #[test]
    fn duplicate_names_are_rejected() {
        let result = RouteTable::new(vec![
            RouteDef::new("/a").named(name("dup")),
            RouteDef::new("/b").named(name("dup")),
        ]);
        assert_eq!(result.unwrap_err(), RouterError::DuplicateName(name("dup")));
    }

    #[test]
    fn unnamed_routes_are_part_of_chains_but_not_listed() {
        let table = RouteTable::new(vec![RouteDef::new("/admin")
            .with_children(vec![RouteDef::new("logs").named(name("logs"))])])
        .unwrap();

        assert_eq!(table.len(), 1);
        let chain = table.resolve("logs");
        assert_eq!(chain.len(), 2);
        assert_eq!(chain[0].name, None);
    }

    #[test]
    fn routes_are_listed_in_declaration_order() {
        let table = sample_table();
        let names: Vec<&str> = table.routes().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["home", "users", "user", "me", "about"]);
    }

    #[test]
    fn current_builds_route_with_params() {
        let table = sample_table();
        let params: RouteParams = [("id", "7")].into_iter().collect();
        let current = table.current("user", params.clone()).unwrap();

        assert_eq!(current.matched.len(), 3);
        assert_eq!(current.params, params);
        assert_eq!(current.leaf().and_then(|r| r.name_str()), Some("user"));
    }

    #[test]
    fn current_rejects_unknown_route() {
        let table = sample_table();
        assert_eq!(
            table.current("ghost", RouteParams::new()).unwrap_err(),
            RouterError::UnknownRoute("ghost".into())
        );
    }

    #[test]
    fn closures_are_resolvers() {
        let record = Arc::new(RouteRecord::new("/x").named(name("x")));
        let resolver = |n: &str| {
            if n == "x" {
                vec![record.clone()]
            } else {
                Vec::new()
            }
        };

        assert_eq!(resolver.resolve("x").len(), 1);
        assert!(resolver.resolve("y").is_empty());
    }
}
