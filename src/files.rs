//! File upload constraints
//!
//! Metadata-only validation for uploaded files (size, count, name,
//! extension). The bytes themselves never pass through here; callers hand
//! in the name/size pairs they got from the upload layer.

use crate::messages;
use serde::{Deserialize, Serialize};

const MAX_FILE_NAME_LENGTH: usize = 255;

// Characters that break downstream storage paths.
const INVALID_NAME_CHARS: &[char] = &['<', '>', ':', '"', '/', '\\', '|', '?', '*'];

/// Name and size of one uploaded file, as reported by the upload layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileInfo {
	pub name: String,
	pub size_bytes: u64,
}

impl FileInfo {
	/// # Examples
	///
	/// ```
	/// use portal_forms::files::FileInfo;
	///
	/// let file = FileInfo::new("recibo.pdf", 1024);
	/// assert_eq!(file.name, "recibo.pdf");
	/// assert_eq!(file.size_bytes, 1024);
	/// ```
	pub fn new(name: impl Into<String>, size_bytes: u64) -> Self {
		Self {
			name: name.into(),
			size_bytes,
		}
	}

	/// Extension after the last dot, lowercased. A name without a dot
	/// yields the whole name, which then simply fails the allowed list.
	fn extension(&self) -> String {
		self.name
			.rsplit('.')
			.next()
			.unwrap_or(&self.name)
			.to_lowercase()
	}
}

/// Constraints applied to a file selection.
///
/// Defaults match the activation-request upload: 5 MiB, `jpg`/`jpeg`/
/// `png`/`pdf`, a single file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileConstraint {
	pub max_size_bytes: u64,
	pub allowed_extensions: Vec<String>,
	pub max_count: usize,
}

impl Default for FileConstraint {
	fn default() -> Self {
		Self {
			max_size_bytes: 5 * 1024 * 1024,
			allowed_extensions: ["jpg", "jpeg", "png", "pdf"]
				.iter()
				.map(|s| s.to_string())
				.collect(),
			max_count: 1,
		}
	}
}

/// Outcome of a file-constraint check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileReport {
	pub valid: bool,
	pub errors: Vec<String>,
}

impl FileConstraint {
	/// Creates the default constraint.
	///
	/// # Examples
	///
	/// ```
	/// use portal_forms::files::FileConstraint;
	///
	/// let constraint = FileConstraint::new();
	/// assert_eq!(constraint.max_size_bytes, 5 * 1024 * 1024);
	/// assert_eq!(constraint.max_count, 1);
	/// ```
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets the per-file size bound in bytes.
	pub fn with_max_size_bytes(mut self, max_size_bytes: u64) -> Self {
		self.max_size_bytes = max_size_bytes;
		self
	}

	/// Replaces the allowed extension list (lowercase, no leading dot).
	///
	/// # Examples
	///
	/// ```
	/// use portal_forms::files::FileConstraint;
	///
	/// let constraint = FileConstraint::new().with_allowed_extensions(["pdf"]);
	/// assert_eq!(constraint.allowed_extensions, vec!["pdf".to_string()]);
	/// ```
	pub fn with_allowed_extensions<I, S>(mut self, extensions: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.allowed_extensions = extensions.into_iter().map(Into::into).collect();
		self
	}

	/// Sets the maximum number of files in one selection.
	pub fn with_max_count(mut self, max_count: usize) -> Self {
		self.max_count = max_count;
		self
	}

	/// Checks a file selection against the constraint.
	///
	/// An empty selection short-circuits to a single error. Otherwise every
	/// rule is evaluated: one aggregate count check plus size, extension,
	/// name-length and name-character checks per file. With `max_count > 1`
	/// each per-file message is prefixed `"Archivo {n}: "` (1-based).
	///
	/// # Examples
	///
	/// ```
	/// use portal_forms::files::{FileConstraint, FileInfo};
	///
	/// let constraint = FileConstraint::new();
	/// let report = constraint.validate(&[FileInfo::new("recibo.pdf", 1024)]);
	/// assert!(report.valid);
	///
	/// let report = constraint.validate(&[FileInfo::new("recibo.exe", 1024)]);
	/// assert_eq!(report.errors.len(), 1);
	/// ```
	pub fn validate(&self, files: &[FileInfo]) -> FileReport {
		if files.is_empty() {
			return FileReport {
				valid: false,
				errors: vec![messages::NO_FILE_SELECTED.to_string()],
			};
		}

		let mut errors = Vec::new();

		if files.len() > self.max_count {
			errors.push(messages::max_files(self.max_count));
		}

		for (index, file) in files.iter().enumerate() {
			errors.extend(self.validate_single(file, index));
		}

		FileReport {
			valid: errors.is_empty(),
			errors,
		}
	}

	fn validate_single(&self, file: &FileInfo, index: usize) -> Vec<String> {
		let mut errors = Vec::new();
		let prefix = if self.max_count > 1 {
			format!("Archivo {}: ", index + 1)
		} else {
			String::new()
		};

		if file.size_bytes > self.max_size_bytes {
			errors.push(format!(
				"{prefix}{}",
				messages::file_too_large(&format_file_size(self.max_size_bytes))
			));
		}

		if !self.allowed_extensions.contains(&file.extension()) {
			errors.push(format!(
				"{prefix}{}",
				messages::file_type_not_allowed(&self.allowed_extensions)
			));
		}

		if file.name.chars().count() > MAX_FILE_NAME_LENGTH {
			errors.push(format!("{prefix}{}", messages::FILE_NAME_TOO_LONG));
		}

		if file.name.contains(INVALID_NAME_CHARS) {
			errors.push(format!("{prefix}{}", messages::FILE_NAME_INVALID_CHARS));
		}

		errors
	}
}

/// Formats a byte count in binary units with one decimal place.
///
/// # Examples
///
/// ```
/// use portal_forms::files::format_file_size;
///
/// assert_eq!(format_file_size(512), "512.0 B");
/// assert_eq!(format_file_size(5 * 1024 * 1024), "5.0 MB");
/// ```
pub fn format_file_size(bytes: u64) -> String {
	const UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];

	let mut size = bytes as f64;
	let mut unit = 0;

	while size >= 1024.0 && unit < UNITS.len() - 1 {
		size /= 1024.0;
		unit += 1;
	}

	format!("{size:.1} {}", UNITS[unit])
}
