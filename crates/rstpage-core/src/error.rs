use std::fmt;

use serde_json::Error as SerdeError;

/// Aggregate errors produced by the rstpage-core API.
#[derive(Debug)]
pub enum RstpageError {
	/// Failed to decode a Render Context document.
	Serialization(SerdeError),
	/// A context failed the strict-mode identifier checks.
	InvalidContext(String),
}

impl fmt::Display for RstpageError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Serialization(err) => write!(f, "{err}"),
			Self::InvalidContext(message) => write!(f, "{message}"),
		}
	}
}

impl std::error::Error for RstpageError {
	fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
		match self {
			Self::Serialization(err) => Some(err),
			Self::InvalidContext(_) => None,
		}
	}
}

impl From<SerdeError> for RstpageError {
	fn from(err: SerdeError) -> Self {
		Self::Serialization(err)
	}
}

/// Result type returned by the rstpage-core library.
pub type Result<T> = std::result::Result<T, RstpageError>;
