use once_cell::sync::Lazy;
use regex::Regex;

// ASCII punctuation that carries markup meaning in reStructuredText.
// The dot is deliberately absent so dotted module paths keep their
// natural width in headings.
static MARKUP_CHARS: Lazy<Regex> =
	Lazy::new(|| Regex::new(r"([!-,\-/:-@\[-`{-~])").unwrap());

/// Backslash-escape reStructuredText markup characters in heading text.
///
/// Every ASCII punctuation character except `.` is prefixed with a
/// backslash; letters, digits, dots, and whitespace pass through
/// untouched. Heading underlines must be sized against the escaped text,
/// so callers measure the return value, never the input.
pub fn escape(text: &str) -> String {
	MARKUP_CHARS.replace_all(text, r"\$1").into_owned()
}
