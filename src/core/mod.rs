//! core
//!
//! Core domain types and breadcrumb resolution.
//!
//! # Modules
//!
//! - [`types`] - Strong types: RouteName, RouteParams
//! - [`meta`] - Breadcrumb metadata variants
//! - [`route`] - Route records and the current route
//! - [`router`] - Host router seam and in-memory route table
//! - [`resolver`] - Breadcrumb trail resolution
//! - [`config`] - Configuration schema and loading
//!
//! # Design Principles
//!
//! - Strong typing prevents invalid states at compile time
//! - Route lookups go through the resolver seam, never raw configuration
//! - Resolution is deterministic and side-effect free

pub mod config;
pub mod meta;
pub mod resolver;
pub mod route;
pub mod router;
pub mod types;
