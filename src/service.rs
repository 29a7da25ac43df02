//! service
//!
//! The breadcrumb service: one per application instance.
//!
//! # Design
//!
//! The service owns the application's route resolver and the configured
//! breadcrumb component. It is built once and handed to whatever renders
//! pages; nothing is registered globally. Every call recomputes the trail
//! from the current route, so the service holds no per-route state.
//!
//! # Example
//!
//! ```
//! use routecrumbs::core::meta::BreadcrumbMeta;
//! use routecrumbs::core::router::{RouteDef, RouteTable};
//! use routecrumbs::core::types::{RouteName, RouteParams};
//! use routecrumbs::service::BreadcrumbService;
//! use routecrumbs::ui::render::RenderOptions;
//!
//! let table = RouteTable::new(vec![RouteDef::new("")
//!     .named(RouteName::new("home").unwrap())
//!     .with_breadcrumb(BreadcrumbMeta::literal("Home"))])
//! .unwrap();
//!
//! let service = BreadcrumbService::new(table, RenderOptions::default());
//! let current = service.resolver().current("home", RouteParams::new()).unwrap();
//!
//! assert_eq!(
//!     service.render(&current).unwrap(),
//!     r#"<ol class="breadcrumb"><li class="breadcrumb-item"><span>Home</span></li></ol>"#
//! );
//! ```

use crate::core::resolver::{compute_breadcrumbs, BreadcrumbError, ResolvedBreadcrumbs};
use crate::core::route::CurrentRoute;
use crate::core::router::RouteResolver;
use crate::ui::render::{crumb_items, BreadcrumbComponent, CrumbItem, RenderOptions};

/// Breadcrumb resolution and rendering for one application.
#[derive(Debug)]
pub struct BreadcrumbService<R> {
    resolver: R,
    component: BreadcrumbComponent,
}

impl<R: RouteResolver> BreadcrumbService<R> {
    pub fn new(resolver: R, options: RenderOptions) -> Self {
        Self {
            resolver,
            component: BreadcrumbComponent::new(options),
        }
    }

    pub fn resolver(&self) -> &R {
        &self.resolver
    }

    pub fn component(&self) -> &BreadcrumbComponent {
        &self.component
    }

    /// The resolved trail for the current route.
    pub fn breadcrumbs(&self, current: &CurrentRoute) -> Result<ResolvedBreadcrumbs, BreadcrumbError> {
        compute_breadcrumbs(&current.matched, &current.params, &self.resolver)
    }

    /// Visible items of the trail, one slot per entry.
    pub fn items(&self, current: &CurrentRoute) -> Result<Vec<Option<CrumbItem>>, BreadcrumbError> {
        let trail = self.breadcrumbs(current)?;
        Ok(crumb_items(&trail, &current.params))
    }

    /// The trail rendered by the configured component.
    pub fn render(&self, current: &CurrentRoute) -> Result<String, BreadcrumbError> {
        let trail = self.breadcrumbs(current)?;
        Ok(self.component.render(&trail, &current.params))
    }
}
