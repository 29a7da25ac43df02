//! routecrumbs - Breadcrumb trails for named, nested route tables
//!
//! Given the route a user is on, routecrumbs derives the breadcrumb trail to
//! show for it and renders that trail as a list of links, with the current
//! page as plain text. Trails follow the route tree by default; breadcrumb
//! metadata can name a different route as the logical parent, splicing that
//! route's ancestors into the trail.
//!
//! # Architecture
//!
//! - [`core`] - Domain types, the router seam, resolution, configuration
//! - [`ui`] - Pure rendering and terminal output
//! - [`service`] - Per-application service tying resolver and component
//! - [`cli`] - The `crumbs` command-line interface
//!
//! # Example
//!
//! ```
//! use routecrumbs::{BreadcrumbMeta, BreadcrumbService, RenderOptions, RouteDef, RouteName, RouteParams, RouteTable};
//!
//! let table = RouteTable::new(vec![
//!     RouteDef::new("/users")
//!         .named(RouteName::new("users").unwrap())
//!         .with_breadcrumb(BreadcrumbMeta::literal("Users")),
//!     RouteDef::new("/users/:id/edit")
//!         .named(RouteName::new("user-edit").unwrap())
//!         .with_breadcrumb(BreadcrumbMeta::with_parent("Edit", "users")),
//! ])
//! .unwrap();
//!
//! let service = BreadcrumbService::new(table, RenderOptions::default());
//! let params: RouteParams = [("id", "42")].into_iter().collect();
//! let current = service.resolver().current("user-edit", params).unwrap();
//!
//! let labels: Vec<_> = service.items(&current).unwrap()
//!     .into_iter()
//!     .flatten()
//!     .map(|item| (item.label, item.path))
//!     .collect();
//! assert_eq!(labels, vec![
//!     ("Users".to_string(), "/users".to_string()),
//!     ("Edit".to_string(), "/users/42/edit".to_string()),
//! ]);
//! ```

pub mod cli;
pub mod core;
pub mod service;
pub mod ui;

pub use crate::core::meta::{Breadcrumb, BreadcrumbMeta};
pub use crate::core::resolver::{compute_breadcrumbs, find_parents, BreadcrumbError, ResolvedBreadcrumbs};
pub use crate::core::route::{CurrentRoute, MatchedChain, RouteRecord};
pub use crate::core::router::{RouteDef, RouteResolver, RouteTable, RouterError};
pub use crate::core::types::{RouteName, RouteParams};
pub use crate::service::BreadcrumbService;
pub use crate::ui::render::{BreadcrumbComponent, CrumbItem, RenderOptions};
