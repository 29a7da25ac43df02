//! ui::render
//!
//! Pure rendering of a resolved breadcrumb trail.
//!
//! # Design
//!
//! Rendering takes immutable inputs (the trail and the current route
//! parameters) and returns markup. It has no side effects and never
//! triggers navigation.
//!
//! Every trail entry occupies one slot. An entry without breadcrumb
//! metadata, or whose label evaluates to an empty string, renders as an
//! empty placeholder. The last entry is the current page: it is rendered
//! as plain text, never as a link.
//!
//! # Example Output
//!
//! ```html
//! <ol class="breadcrumb">
//!   <li class="breadcrumb-item"><a href="/users">Users</a></li>
//!   <li class="breadcrumb-item"><span>Edit user #42</span></li>
//! </ol>
//! ```
//!
//! (Whitespace added for readability; the output has none.)

use serde::Serialize;

use super::markup::{Element, Node};
use super::template::Template;
use crate::core::resolver::ResolvedBreadcrumbs;
use crate::core::route::RouteRecord;
use crate::core::types::RouteParams;

/// Default class of the list element.
pub const DEFAULT_LIST_CLASS: &str = "breadcrumb";

/// Default class of each item element.
pub const DEFAULT_ITEM_CLASS: &str = "breadcrumb-item";

/// A visible breadcrumb item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CrumbItem {
    /// Position in the trail, counting placeholder slots
    pub index: usize,
    /// Display label (never empty)
    pub label: String,
    /// Path with route parameters substituted
    pub path: String,
    /// Whether this is the last entry of the trail
    pub current: bool,
}

/// Options of the breadcrumb component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    pub list_class: String,
    pub item_class: String,
    /// When set, replaces the default markup.
    pub template: Option<Template>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            list_class: DEFAULT_LIST_CLASS.to_string(),
            item_class: DEFAULT_ITEM_CLASS.to_string(),
            template: None,
        }
    }
}

/// Display label of an entry, if it has a non-empty one.
pub fn crumb_label(entry: &RouteRecord, params: &RouteParams) -> Option<String> {
    entry
        .breadcrumb
        .as_ref()
        .map(|meta| meta.evaluate(params))
        .and_then(|bc| bc.visible_label().map(str::to_string))
}

/// Path of an entry with route parameters substituted.
pub fn crumb_path(entry: &RouteRecord, params: &RouteParams) -> String {
    params.substitute(&entry.path)
}

/// One slot per trail entry; `None` for entries that render as placeholders.
pub fn crumb_items(trail: &ResolvedBreadcrumbs, params: &RouteParams) -> Vec<Option<CrumbItem>> {
    let last = trail.len().saturating_sub(1);

    trail
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            let path = crumb_path(entry, params);
            crumb_label(entry, params).map(|label| CrumbItem {
                index,
                label,
                path,
                current: index == last,
            })
        })
        .collect()
}

/// Render a trail with the default markup.
///
/// An empty trail renders as a single empty `<span>`.
pub fn render_breadcrumbs(
    trail: &ResolvedBreadcrumbs,
    params: &RouteParams,
    options: &RenderOptions,
) -> Node {
    if trail.is_empty() {
        return placeholder();
    }

    let items = crumb_items(trail, params).into_iter().map(|slot| match slot {
        Some(item) => render_item(&item, options),
        None => placeholder(),
    });

    Element::new("ol")
        .class(&options.list_class)
        .children(items)
        .into()
}

fn render_item(item: &CrumbItem, options: &RenderOptions) -> Node {
    let inner = if item.current {
        Element::new("span")
    } else {
        Element::new("a").attr("href", item.path.clone())
    }
    .child(Node::text(item.label.clone()));

    Element::new("li")
        .class(&options.item_class)
        .child(inner)
        .into()
}

fn placeholder() -> Node {
    Element::new("span").into()
}

/// The breadcrumb component: a trail renderer configured once per application.
#[derive(Debug, Clone, Default)]
pub struct BreadcrumbComponent {
    options: RenderOptions,
}

impl BreadcrumbComponent {
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    /// Whether the default markup is in use (no custom template).
    pub fn uses_default_render(&self) -> bool {
        self.options.template.is_none()
    }

    /// Render a trail to HTML.
    ///
    /// With a custom template, the template is rendered once per visible
    /// item and the results are concatenated; otherwise the default markup
    /// is used.
    pub fn render(&self, trail: &ResolvedBreadcrumbs, params: &RouteParams) -> String {
        match &self.options.template {
            Some(template) => crumb_items(trail, params)
                .iter()
                .flatten()
                .map(|item| template.render_item(item))
                .collect(),
            None => render_breadcrumbs(trail, params, &self.options).to_html(),
        }
    }
}
