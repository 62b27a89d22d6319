use std::path::PathBuf;

/// Library-level structured errors for the header fixup.
///
/// Every variant is an I/O failure; the variant records which step failed
/// and on which path. The CLI binary wraps these with `anyhow`.
#[derive(Debug, thiserror::Error)]
pub enum FixupError {
	#[error("Failed to open input header: {path}")]
	OpenInput {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Failed to create output header: {path}")]
	CreateOutput {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Failed to read input header: {path}")]
	Read {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Failed to write output header: {path}")]
	Write {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},
}

impl FixupError {
	/// The underlying I/O error.
	pub fn io_error(&self) -> &std::io::Error {
		match self {
			FixupError::OpenInput { source, .. }
			| FixupError::CreateOutput { source, .. }
			| FixupError::Read { source, .. }
			| FixupError::Write { source, .. } => source,
		}
	}
}

/// Result type alias using FixupError.
pub type Result<T> = std::result::Result<T, FixupError>;
