//! ui::template
//!
//! Custom item templates for the breadcrumb component.
//!
//! # Syntax
//!
//! A template is literal text with placeholders:
//!
//! | placeholder | value                                   |
//! |-------------|-----------------------------------------|
//! | `{label}`   | display label                           |
//! | `{path}`    | path with parameters substituted        |
//! | `{index}`   | position in the trail, starting at 0    |
//! | `{current}` | `true` for the last entry, else `false` |
//!
//! `{{` and `}}` produce literal braces. Unknown placeholders and unmatched
//! braces are kept as written. Substituted values are HTML-escaped.

use super::markup::escape_attr;
use super::render::CrumbItem;

/// A parsed item template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    source: String,
    segments: Vec<Segment>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Field(Field),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Label,
    Path,
    Index,
    Current,
}

impl Field {
    fn from_name(name: &str) -> Option<Self> {
        match name {
            "label" => Some(Field::Label),
            "path" => Some(Field::Path),
            "index" => Some(Field::Index),
            "current" => Some(Field::Current),
            _ => None,
        }
    }
}

impl Template {
    /// Parse a template. Parsing never fails.
    ///
    /// # Example
    ///
    /// ```
    /// use routecrumbs::ui::render::CrumbItem;
    /// use routecrumbs::ui::template::Template;
    ///
    /// let template = Template::parse("<a href=\"{path}\">{label}</a>");
    /// let item = CrumbItem {
    ///     index: 0,
    ///     label: "Users".into(),
    ///     path: "/users".into(),
    ///     current: false,
    /// };
    /// assert_eq!(template.render_item(&item), "<a href=\"/users\">Users</a>");
    /// ```
    pub fn parse(source: &str) -> Self {
        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut rest = source;

        while let Some(c) = rest.chars().next() {
            if rest.starts_with("{{") {
                literal.push('{');
                rest = &rest[2..];
                continue;
            }
            if rest.starts_with("}}") {
                literal.push('}');
                rest = &rest[2..];
                continue;
            }
            if c == '{' {
                if let Some(end) = rest.find('}') {
                    if let Some(field) = Field::from_name(&rest[1..end]) {
                        if !literal.is_empty() {
                            segments.push(Segment::Literal(std::mem::take(&mut literal)));
                        }
                        segments.push(Segment::Field(field));
                        rest = &rest[end + 1..];
                        continue;
                    }
                }
            }
            literal.push(c);
            rest = &rest[c.len_utf8()..];
        }

        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }

        Self {
            source: source.to_string(),
            segments,
        }
    }

    /// The template as written.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Render the template for one item.
    pub fn render_item(&self, item: &CrumbItem) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Field(Field::Label) => out.push_str(&escape_attr(&item.label)),
                Segment::Field(Field::Path) => out.push_str(&escape_attr(&item.path)),
                Segment::Field(Field::Index) => out.push_str(&item.index.to_string()),
                Segment::Field(Field::Current) => out.push_str(if item.current {
                    "true"
                } else {
                    "false"
                }),
            }
        }
        out
    }
}
