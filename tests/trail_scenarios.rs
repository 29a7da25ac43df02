//! End-to-end trail scenarios through the library API.
//!
//! Each scenario builds a route table, resolves a current route and checks
//! the rendered trail the way an application would see it.

use routecrumbs::core::config::Config;
use routecrumbs::ui::template::Template;
use routecrumbs::{
    Breadcrumb, BreadcrumbError, BreadcrumbMeta, BreadcrumbService, CurrentRoute, MatchedChain,
    RenderOptions, RouteDef, RouteName, RouteParams, RouteRecord, RouteTable,
};

// =============================================================================
// Helpers
// =============================================================================

fn name(s: &str) -> RouteName {
    RouteName::new(s).unwrap()
}

fn params(pairs: &[(&str, &str)]) -> RouteParams {
    pairs.iter().copied().collect()
}

fn service(defs: Vec<RouteDef>) -> BreadcrumbService<RouteTable> {
    BreadcrumbService::new(RouteTable::new(defs).unwrap(), RenderOptions::default())
}

fn labels(svc: &BreadcrumbService<RouteTable>, current: &CurrentRoute) -> Vec<String> {
    svc.items(current)
        .unwrap()
        .into_iter()
        .flatten()
        .map(|item| item.label)
        .collect()
}

// =============================================================================
// Scenarios
// =============================================================================

#[test]
fn no_metadata_renders_placeholders_without_links() {
    let svc = service(vec![RouteDef::new("/a")
        .named(name("a"))
        .with_children(vec![RouteDef::new("b")
            .named(name("b"))
            .with_children(vec![RouteDef::new("c").named(name("c"))])])]);

    let current = svc.resolver().current("c", RouteParams::new()).unwrap();
    let items = svc.items(&current).unwrap();
    assert_eq!(items.len(), 3);
    assert!(items.iter().all(Option::is_none));

    let html = svc.render(&current).unwrap();
    assert_eq!(
        html,
        r#"<ol class="breadcrumb"><span></span><span></span><span></span></ol>"#
    );
    assert!(!html.contains("<a "));
}

#[test]
fn string_label_without_parent_is_single_entry() {
    let svc = service(vec![RouteDef::new("/users/:id")
        .named(name("user"))
        .with_breadcrumb(BreadcrumbMeta::literal("Profile"))]);

    let current = svc.resolver().current("user", params(&[("id", "42")])).unwrap();
    let items: Vec<_> = svc.items(&current).unwrap().into_iter().flatten().collect();

    assert_eq!(items.len(), 1);
    assert_eq!(items[0].label, "Profile");
    assert_eq!(items[0].path, "/users/42");
    assert!(items[0].current);
}

#[test]
fn parent_override_prepends_parent_label() {
    let svc = service(vec![
        RouteDef::new("/users")
            .named(name("users"))
            .with_breadcrumb(BreadcrumbMeta::literal("Users")),
        RouteDef::new("/users/:id/edit")
            .named(name("user-edit"))
            .with_breadcrumb(BreadcrumbMeta::with_parent("Edit", "users")),
    ]);

    let current = svc
        .resolver()
        .current("user-edit", params(&[("id", "42")]))
        .unwrap();
    assert_eq!(labels(&svc, &current), vec!["Users", "Edit"]);

    let html = svc.render(&current).unwrap();
    assert!(html.contains(r#"<a href="/users">Users</a>"#));
    assert!(html.contains("<span>Edit</span>"));
}

#[test]
fn root_path_renders_as_slash() {
    let svc = service(vec![RouteDef::new("")
        .named(name("home"))
        .with_breadcrumb(BreadcrumbMeta::literal("Home"))
        .with_children(vec![RouteDef::new("about")
            .named(name("about"))
            .with_breadcrumb(BreadcrumbMeta::literal("About"))])]);

    let current = svc.resolver().current("about", RouteParams::new()).unwrap();
    let trail = svc.breadcrumbs(&current).unwrap();
    assert_eq!(trail.paths(), vec!["/", "/about"]);

    let html = svc.render(&current).unwrap();
    assert!(html.contains(r#"<a href="/">Home</a>"#));
}

#[test]
fn only_last_entry_is_unlinked() {
    let svc = service(vec![RouteDef::new("")
        .named(name("home"))
        .with_breadcrumb(BreadcrumbMeta::literal("Home"))
        .with_children(vec![RouteDef::new("docs")
            .named(name("docs"))
            .with_breadcrumb(BreadcrumbMeta::literal("Docs"))
            .with_children(vec![RouteDef::new(":page")
                .named(name("page"))
                .with_breadcrumb(BreadcrumbMeta::computed(|p| {
                    Breadcrumb::new(p.get("page").unwrap_or("?").to_uppercase())
                }))])])]);

    let current = svc.resolver().current("page", params(&[("page", "intro")])).unwrap();
    let html = svc.render(&current).unwrap();

    assert_eq!(
        html,
        concat!(
            r#"<ol class="breadcrumb">"#,
            r#"<li class="breadcrumb-item"><a href="/">Home</a></li>"#,
            r#"<li class="breadcrumb-item"><a href="/docs">Docs</a></li>"#,
            r#"<li class="breadcrumb-item"><span>INTRO</span></li>"#,
            "</ol>"
        )
    );
}

#[test]
fn params_fill_path_tokens() {
    let svc = service(vec![RouteDef::new("/users/:id")
        .named(name("user"))
        .with_breadcrumb(BreadcrumbMeta::literal("User"))]);

    let current = svc.resolver().current("user", params(&[("id", "42")])).unwrap();
    let items: Vec<_> = svc.items(&current).unwrap().into_iter().flatten().collect();
    assert_eq!(items[0].path, "/users/42");
}

#[test]
fn resolution_is_repeatable() {
    let svc = service(vec![
        RouteDef::new("/users")
            .named(name("users"))
            .with_breadcrumb(BreadcrumbMeta::literal("Users")),
        RouteDef::new("/users/:id")
            .named(name("user"))
            .with_breadcrumb(BreadcrumbMeta::with_parent("User", "users")),
    ]);

    let current = svc.resolver().current("user", params(&[("id", "1")])).unwrap();
    assert_eq!(svc.render(&current).unwrap(), svc.render(&current).unwrap());
    assert_eq!(
        svc.breadcrumbs(&current).unwrap().paths(),
        svc.breadcrumbs(&current).unwrap().paths()
    );
}

#[test]
fn parent_cycle_is_an_error() {
    let svc = service(vec![
        RouteDef::new("/a")
            .named(name("a"))
            .with_breadcrumb(BreadcrumbMeta::with_parent("A", "b")),
        RouteDef::new("/b")
            .named(name("b"))
            .with_breadcrumb(BreadcrumbMeta::with_parent("B", "a")),
    ]);

    let current = svc.resolver().current("a", RouteParams::new()).unwrap();
    let err = svc.render(&current).unwrap_err();
    assert!(matches!(err, BreadcrumbError::CyclicParent { .. }));
}

#[test]
fn custom_template_replaces_default_markup() {
    let table = RouteTable::new(vec![RouteDef::new("")
        .named(name("home"))
        .with_breadcrumb(BreadcrumbMeta::literal("Home"))
        .with_children(vec![RouteDef::new("about")
            .named(name("about"))
            .with_breadcrumb(BreadcrumbMeta::literal("About"))])])
    .unwrap();
    let svc = BreadcrumbService::new(
        table,
        RenderOptions {
            template: Some(Template::parse("<{label}|{path}|{current}>")),
            ..RenderOptions::default()
        },
    );

    assert!(!svc.component().uses_default_render());
    let current = svc.resolver().current("about", RouteParams::new()).unwrap();
    assert_eq!(
        svc.render(&current).unwrap(),
        "<Home|/|false><About|/about|true>"
    );
}

#[test]
fn closure_resolver_feeds_the_service() {
    let users = std::sync::Arc::new(
        RouteRecord::new("/users")
            .named(name("users"))
            .with_breadcrumb(BreadcrumbMeta::literal("Users")),
    );
    let lookup = {
        let users = users.clone();
        move |route: &str| -> MatchedChain {
            if route == "users" {
                vec![users.clone()]
            } else {
                Vec::new()
            }
        }
    };

    let svc = BreadcrumbService::new(lookup, RenderOptions::default());
    let leaf = std::sync::Arc::new(
        RouteRecord::new("/users/new").with_breadcrumb(BreadcrumbMeta::with_parent("New", "users")),
    );
    let current = CurrentRoute::new(vec![leaf], RouteParams::new());

    assert_eq!(labels_of(&svc, &current), vec!["Users", "New"]);
}

fn labels_of<R: routecrumbs::RouteResolver>(
    svc: &BreadcrumbService<R>,
    current: &CurrentRoute,
) -> Vec<String> {
    svc.items(current)
        .unwrap()
        .into_iter()
        .flatten()
        .map(|item| item.label)
        .collect()
}

#[test]
fn malformed_config_breadcrumb_is_skipped_with_warning() {
    let result = Config::from_toml_str(
        r#"
        [[routes]]
        path = ""
        name = "home"
        breadcrumb = "Home"

          [[routes.children]]
          path = "odd"
          name = "odd"
          breadcrumb = ["not", "a", "label"]

            [[routes.children.children]]
            path = "leaf"
            name = "leaf"
            breadcrumb = "Leaf"
        "#,
    )
    .unwrap();
    assert_eq!(result.warnings.len(), 1);
    assert!(result.warnings[0].location.contains("odd"));

    let config = result.config;
    let svc = BreadcrumbService::new(config.route_table().unwrap(), config.render_options());
    let current = svc.resolver().current("leaf", RouteParams::new()).unwrap();

    let items = svc.items(&current).unwrap();
    assert_eq!(items.len(), 3);
    assert!(items[1].is_none());
    assert_eq!(labels(&svc, &current), vec!["Home", "Leaf"]);
}
