//! Rendering logic that converts module metadata into reStructuredText
//! API reference pages.
//!
//! This crate is the pure half of rstpage: it performs no I/O and holds no
//! state between invocations. Callers build a [`ModuleContext`] describing
//! one module and receive the finished page as a `String`.

/// The input model describing one module's members.
pub mod context;
/// reStructuredText escaping for heading text.
pub mod escape;
/// Page fragment functions and the top-level orchestrator.
pub mod page;

pub use context::ModuleContext;
pub use escape::escape;
pub use page::{
	render_attribute_docs, render_automodule, render_class_docs, render_contents,
	render_detail_heading, render_exception_docs, render_function_docs, render_module_page,
	render_modules, render_title,
};
