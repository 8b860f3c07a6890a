use serde::{Deserialize, Serialize};

/// Metadata describing one code module, supplied by the documentation tool
/// that performed source introspection.
///
/// Every list keeps the order the caller supplied it in; the renderer never
/// sorts or deduplicates. The renderer treats the context as read-only and
/// performs no validation of the identifiers it contains.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleContext {
	/// Fully qualified dotted module path, e.g. `pkg.sub.module`.
	pub fullname: String,
	/// Short unqualified module name, e.g. `module`.
	pub name: String,
	/// Names of module-level data attributes to document.
	#[serde(default)]
	pub attributes: Vec<String>,
	/// Names of module-level functions.
	#[serde(default)]
	pub functions: Vec<String>,
	/// Names of module-level classes.
	#[serde(default)]
	pub classes: Vec<String>,
	/// Names of module-level exception types.
	#[serde(default)]
	pub exceptions: Vec<String>,
	/// Dotted names of direct submodules.
	#[serde(default)]
	pub modules: Vec<String>,
}

impl ModuleContext {
	/// Create a context for a module with the given identifiers and no
	/// members.
	pub fn new(fullname: &str, name: &str) -> Self {
		Self {
			fullname: fullname.to_string(),
			name: name.to_string(),
			..Self::default()
		}
	}

	/// True if any of the four detail-eligible member lists is non-empty.
	///
	/// Submodules do not count: they get their own section but no detail
	/// block.
	pub fn has_members(&self) -> bool {
		!self.attributes.is_empty()
			|| !self.classes.is_empty()
			|| !self.functions.is_empty()
			|| !self.exceptions.is_empty()
	}
}

#[cfg(test)]
mod tests {
	use super::ModuleContext;

	#[test]
	fn absent_lists_deserialize_as_empty() {
		let ctx: ModuleContext =
			serde_json::from_str(r#"{"fullname": "pkg.mod", "name": "mod"}"#).unwrap();
		assert_eq!(ctx.fullname, "pkg.mod");
		assert_eq!(ctx.name, "mod");
		assert!(ctx.attributes.is_empty());
		assert!(ctx.modules.is_empty());
		assert!(!ctx.has_members());
	}

	#[test]
	fn member_lists_keep_caller_order() {
		let ctx: ModuleContext = serde_json::from_str(
			r#"{"fullname": "pkg.mod", "name": "mod", "functions": ["b", "a", "c"]}"#,
		)
		.unwrap();
		assert_eq!(ctx.functions, vec!["b", "a", "c"]);
		assert!(ctx.has_members());
	}
}
