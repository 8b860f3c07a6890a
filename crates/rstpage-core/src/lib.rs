//! Core library for rstpage, providing the main API for rendering module
//! reference pages.
//!
//! This crate wires context decoding and validation around the pure
//! renderer in `rstpage-render`. It is UI-agnostic and can be used by any
//! frontend (CLI, build tooling, a documentation pipeline, etc.).

/// Error helpers for the core API.
pub mod error;

pub use rstpage_render::{ModuleContext, render_module_page};

pub use crate::error::{Result, RstpageError};

/// Rstpage turns a Render Context describing one code module into a
/// reStructuredText reference page.
///
/// The heavy lifting (member discovery, docstring extraction, submodule
/// enumeration) is expected to have happened upstream in whatever tool
/// produced the context document; Rstpage only decodes, checks, and
/// renders.
#[derive(Debug, Clone)]
pub struct Rstpage {
	/// In strict mode contexts with empty identifiers are rejected before
	/// rendering.
	strict: bool,
}

impl Default for Rstpage {
	fn default() -> Self {
		Self::new()
	}
}

impl Rstpage {
	/// Creates a new Rstpage instance with strict validation enabled.
	pub fn new() -> Self {
		Self { strict: true }
	}

	/// Enables or disables strict mode.
	///
	/// The renderer itself never validates its input; with strict mode off
	/// a context with empty identifiers renders to a malformed (but still
	/// deterministic) page, matching what the raw renderer would do.
	pub fn with_strict(mut self, strict: bool) -> Self {
		self.strict = strict;
		self
	}

	/// Decode a JSON Render Context document.
	pub fn parse(&self, json: &str) -> Result<ModuleContext> {
		let ctx: ModuleContext = serde_json::from_str(json)?;
		self.check(&ctx)?;
		Ok(ctx)
	}

	/// Render an already-built context into a page.
	pub fn render(&self, ctx: &ModuleContext) -> Result<String> {
		self.check(ctx)?;
		Ok(render_module_page(ctx))
	}

	/// Decode a JSON Render Context document and render it into a page.
	pub fn render_str(&self, json: &str) -> Result<String> {
		let ctx = self.parse(json)?;
		Ok(render_module_page(&ctx))
	}

	fn check(&self, ctx: &ModuleContext) -> Result<()> {
		if !self.strict {
			return Ok(());
		}
		if ctx.fullname.is_empty() {
			return Err(RstpageError::InvalidContext(
				"context has an empty 'fullname'".to_string(),
			));
		}
		if ctx.name.is_empty() {
			return Err(RstpageError::InvalidContext(
				"context has an empty 'name'".to_string(),
			));
		}
		Ok(())
	}
}
