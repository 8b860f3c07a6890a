//! Integration tests validating whole-page rendering.

use pretty_assertions::assert_eq;
use rstpage_render::{ModuleContext, render_module_page};

fn names(items: &[&str]) -> Vec<String> {
	items.iter().map(|s| s.to_string()).collect()
}

#[test]
fn page_for_module_with_one_function_and_one_class() {
	let ctx = ModuleContext {
		functions: names(&["f"]),
		classes: names(&["C"]),
		..ModuleContext::new("pkg.mod", "mod")
	};

	let expected = "\
#######
pkg.mod
#######

.. contents::

.. automodule:: pkg.mod

   .. rubric:: Functions

   .. autosummary::
      :nosignatures:

      f

   .. rubric:: Classes

   .. autosummary::
      :nosignatures:

      C

Detailed docs for mod module
============================

.. autofunction:: f

.. autoclass:: C
   :members:
   :undoc-members:
   :show-inheritance:
";

	assert_eq!(render_module_page(&ctx), expected);
}

#[test]
fn page_with_every_section_populated() {
	let ctx = ModuleContext {
		attributes: names(&["level"]),
		functions: names(&["run"]),
		classes: names(&["Widget"]),
		exceptions: names(&["WidgetError"]),
		modules: names(&["pkg.mod.sub", "pkg.mod.testing"]),
		..ModuleContext::new("pkg.mod", "mod")
	};

	let expected = "\
#######
pkg.mod
#######

.. contents::

.. automodule:: pkg.mod

   .. rubric:: Module Attributes

   .. autosummary::
      :nosignatures:

      level

   .. rubric:: Functions

   .. autosummary::
      :nosignatures:

      run

   .. rubric:: Classes

   .. autosummary::
      :nosignatures:

      Widget

   .. rubric:: Exceptions

   .. autosummary::
      :nosignatures:

      WidgetError

Detailed docs for mod module
============================

.. autoattribute:: level

.. autofunction:: run

.. autoclass:: Widget
   :members:
   :undoc-members:
   :show-inheritance:

.. autoclass:: WidgetError
   :members:
   :undoc-members:
   :show-inheritance:

Modules
=======

.. autosummary::
   :toctree:
   :recursive:

   pkg.mod.sub
";

	assert_eq!(render_module_page(&ctx), expected);
}

#[test]
fn bare_module_renders_only_title_contents_and_automodule() {
	let ctx = ModuleContext::new("pkg.empty", "empty");

	let expected = "\
#########
pkg.empty
#########

.. contents::

.. automodule:: pkg.empty
";

	assert_eq!(render_module_page(&ctx), expected);
}

#[test]
fn no_attribute_rubric_anywhere_when_attributes_are_empty() {
	let ctx = ModuleContext {
		functions: names(&["f"]),
		..ModuleContext::new("pkg.mod", "mod")
	};
	let page = render_module_page(&ctx);
	assert!(!page.contains("Module Attributes"));
	assert!(!page.contains("autoattribute"));
}

#[test]
fn rendering_twice_is_byte_identical() {
	let ctx = ModuleContext {
		attributes: names(&["a", "b"]),
		exceptions: names(&["E"]),
		modules: names(&["pkg.mod.inner"]),
		..ModuleContext::new("pkg.mod", "mod")
	};
	assert_eq!(render_module_page(&ctx), render_module_page(&ctx));
}
