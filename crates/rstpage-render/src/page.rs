//! Fragment functions that each render one region of a module page.
//!
//! Every function takes the same [`ModuleContext`] and returns either a
//! finished fragment or an empty string when its region is suppressed.
//! [`render_module_page`] composes them in fixed order, which keeps the
//! regions independently testable and overridable by callers that want to
//! assemble pages differently.

use crate::context::ModuleContext;
use crate::escape::escape;

/// Substring marking a submodule as a test module to be left out of the
/// Modules section.
pub const TEST_MODULE_MARKER: &str = ".test";

/// Directive content indent. reStructuredText is indentation sensitive, so
/// nested fragments are shifted by exactly this prefix and nothing else.
const INDENT: &str = "   ";

/// Render the full reStructuredText page for one module.
///
/// Output is deterministic: identical contexts produce byte-identical
/// pages. Fragments are separated by a single blank line and the document
/// ends with exactly one newline.
pub fn render_module_page(ctx: &ModuleContext) -> String {
	let fragments = [
		render_title(ctx),
		render_contents(),
		render_automodule(ctx),
		render_detail_heading(ctx),
		render_attribute_docs(ctx),
		render_function_docs(ctx),
		render_class_docs(ctx),
		render_exception_docs(ctx),
		render_modules(ctx),
	];

	let mut page = fragments
		.iter()
		.filter(|fragment| !fragment.is_empty())
		.cloned()
		.collect::<Vec<_>>()
		.join("\n\n");
	page.push('\n');
	page
}

/// Render the title block: a `#` overline, the escaped full module name,
/// and a matching underline.
///
/// The over/underline length equals the escaped name's character count,
/// not the raw name's, so names containing markup characters stay valid
/// headings after escaping widens them.
pub fn render_title(ctx: &ModuleContext) -> String {
	let title = escape(&ctx.fullname);
	let rule = "#".repeat(title.chars().count());
	format!("{rule}\n{title}\n{rule}")
}

/// Render the table-of-contents directive for the page.
pub fn render_contents() -> String {
	".. contents::".to_string()
}

/// Render the automodule directive with its nested member summaries.
///
/// Each of the four summary blocks is emitted only when its backing list
/// is non-empty, indented as directive content under the automodule.
pub fn render_automodule(ctx: &ModuleContext) -> String {
	let mut output = format!(".. automodule:: {}", ctx.fullname);
	let summaries = [
		("Module Attributes", &ctx.attributes),
		("Functions", &ctx.functions),
		("Classes", &ctx.classes),
		("Exceptions", &ctx.exceptions),
	];
	for (rubric, items) in summaries {
		if items.is_empty() {
			continue;
		}
		output.push_str("\n\n");
		output.push_str(&indent(&summary_block(rubric, items)));
	}
	output
}

/// Render the heading that introduces the per-member detail blocks.
///
/// Emitted only when at least one of the attribute, class, function, or
/// exception lists is non-empty. Unlike the page title, the heading text
/// is not escaped; the underline is sized against the raw joined text.
pub fn render_detail_heading(ctx: &ModuleContext) -> String {
	if !ctx.has_members() {
		return String::new();
	}
	let heading = format!("Detailed docs for {} module", ctx.name);
	let rule = "=".repeat(heading.chars().count());
	format!("{heading}\n{rule}")
}

/// Render one autoattribute directive per module attribute.
pub fn render_attribute_docs(ctx: &ModuleContext) -> String {
	item_directives(&ctx.attributes, |item| format!(".. autoattribute:: {item}"))
}

/// Render one autofunction directive per module function.
pub fn render_function_docs(ctx: &ModuleContext) -> String {
	item_directives(&ctx.functions, |item| format!(".. autofunction:: {item}"))
}

/// Render one autoclass directive per class, with members, undocumented
/// members, and the inheritance chain always enabled.
pub fn render_class_docs(ctx: &ModuleContext) -> String {
	item_directives(&ctx.classes, class_directive)
}

/// Render the detail directives for exception types.
///
/// Exceptions are classes as far as the downstream tool is concerned, so
/// they reuse the class directive and its fixed option set.
pub fn render_exception_docs(ctx: &ModuleContext) -> String {
	item_directives(&ctx.exceptions, class_directive)
}

/// Render the Modules section listing direct submodules under a
/// toctree-generating summary directive.
///
/// The section is gated on the raw list: filtering happens per entry, so
/// a list holding only test modules still emits the heading and an
/// item-less directive.
pub fn render_modules(ctx: &ModuleContext) -> String {
	if ctx.modules.is_empty() {
		return String::new();
	}
	let mut output = String::from("Modules\n=======\n\n.. autosummary::\n   :toctree:\n   :recursive:");
	let survivors: Vec<&String> = ctx
		.modules
		.iter()
		.filter(|module| !module.contains(TEST_MODULE_MARKER))
		.collect();
	if !survivors.is_empty() {
		output.push_str("\n\n");
		for (idx, module) in survivors.iter().enumerate() {
			if idx > 0 {
				output.push('\n');
			}
			output.push_str(INDENT);
			output.push_str(module);
		}
	}
	output
}

/// Build a signature-free summary listing for one member category.
fn summary_block(rubric: &str, items: &[String]) -> String {
	let mut block = format!(".. rubric:: {rubric}\n\n.. autosummary::\n   :nosignatures:\n");
	for item in items {
		block.push('\n');
		block.push_str(INDENT);
		block.push_str(item);
	}
	block
}

/// Render one directive per item, blocks separated by blank lines.
fn item_directives(items: &[String], directive: impl Fn(&str) -> String) -> String {
	items
		.iter()
		.map(|item| directive(item))
		.collect::<Vec<_>>()
		.join("\n\n")
}

/// The class detail directive with its three fixed option flags.
fn class_directive(item: &str) -> String {
	format!(".. autoclass:: {item}\n   :members:\n   :undoc-members:\n   :show-inheritance:")
}

/// Shift a fragment one directive-content level to the right, leaving
/// blank lines blank.
fn indent(fragment: &str) -> String {
	fragment
		.lines()
		.map(|line| {
			if line.is_empty() {
				String::new()
			} else {
				format!("{INDENT}{line}")
			}
		})
		.collect::<Vec<_>>()
		.join("\n")
}
