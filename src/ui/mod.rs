//! ui
//!
//! Rendering and user-facing output.
//!
//! # Modules
//!
//! - [`render`] - Breadcrumb component and default markup
//! - [`template`] - Custom item templates
//! - [`markup`] - Element tree and HTML serialization
//! - [`output`] - Terminal output formatting and display
//!
//! # Design
//!
//! Rendering is pure: it reads a resolved trail and the current route
//! parameters and produces markup. Nothing here navigates or mutates state.

pub mod markup;
pub mod output;
pub mod render;
pub mod template;
