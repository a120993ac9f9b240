//! Per-field rule declarations
//!
//! A [`FieldRules`] value describes every constraint on one form field.
//! Rule sets are assembled with the builder methods and handed to
//! [`FormRules`](crate::form::FormRules); evaluation lives in
//! [`crate::form`].

use crate::form::FormData;
use regex::Regex;
use std::fmt;
use std::sync::Arc;

/// Selects one of the built-in validation predicates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
	Email,
	Phone,
	NationalId,
	Numeric,
	Alphabetic,
	Alphanumeric,
	Password,
}

/// Custom per-field check. Receives the field's raw value and a snapshot of
/// every field value, so a check may depend on sibling fields. `Err` carries
/// the message to show; an empty message falls back to the generic one.
pub type FieldValidator = Arc<dyn Fn(&str, &FormData) -> Result<(), String> + Send + Sync>;

/// Error raised while declaring rules.
#[derive(Debug, thiserror::Error)]
pub enum RuleError {
	#[error("invalid field pattern: {0}")]
	Pattern(#[from] regex::Error),
}

/// Declarative constraints for one field.
///
/// # Examples
///
/// ```
/// use portal_forms::rules::{FieldKind, FieldRules};
///
/// let rules = FieldRules::new()
/// 	.required()
/// 	.kind(FieldKind::Alphabetic)
/// 	.with_min_length(2)
/// 	.with_max_length(50);
/// assert!(rules.is_required());
/// ```
#[derive(Clone, Default)]
pub struct FieldRules {
	pub(crate) required: bool,
	pub(crate) kind: Option<FieldKind>,
	pub(crate) min_length: Option<usize>,
	pub(crate) max_length: Option<usize>,
	pub(crate) pattern: Option<Regex>,
	pub(crate) pattern_message: Option<String>,
	pub(crate) strong: bool,
	pub(crate) institutional: bool,
	pub(crate) validator: Option<FieldValidator>,
}

impl FieldRules {
	/// Creates an empty rule set: optional field, no checks.
	pub fn new() -> Self {
		Self::default()
	}

	/// Marks the field as required.
	pub fn required(mut self) -> Self {
		self.required = true;
		self
	}

	/// Selects a built-in predicate for the field.
	pub fn kind(mut self, kind: FieldKind) -> Self {
		self.kind = Some(kind);
		self
	}

	/// Sets the minimum length in characters.
	pub fn with_min_length(mut self, min_length: usize) -> Self {
		self.min_length = Some(min_length);
		self
	}

	/// Sets the maximum length in characters.
	pub fn with_max_length(mut self, max_length: usize) -> Self {
		self.max_length = Some(max_length);
		self
	}

	/// Sets a custom pattern the value must match.
	pub fn with_pattern(mut self, pattern: Regex) -> Self {
		self.pattern = Some(pattern);
		self
	}

	/// Compiles and sets a custom pattern from source text.
	///
	/// # Examples
	///
	/// ```
	/// use portal_forms::rules::FieldRules;
	///
	/// let rules = FieldRules::new().with_pattern_str(r"^\d{4}-\d$").unwrap();
	/// assert!(FieldRules::new().with_pattern_str(r"[unclosed").is_err());
	/// # let _ = rules;
	/// ```
	pub fn with_pattern_str(self, pattern: &str) -> Result<Self, RuleError> {
		Ok(self.with_pattern(Regex::new(pattern)?))
	}

	/// Sets the message shown when the custom pattern fails.
	pub fn with_pattern_message(mut self, message: impl Into<String>) -> Self {
		self.pattern_message = Some(message.into());
		self
	}

	/// Requires full complexity for a `Password` field (lowercase,
	/// uppercase, digit and symbol).
	pub fn strong(mut self) -> Self {
		self.strong = true;
		self
	}

	/// Requires an institutional email domain (meaningful for the `email`
	/// field; checked in the cross-field phase).
	pub fn institutional(mut self) -> Self {
		self.institutional = true;
		self
	}

	/// Attaches a custom check.
	///
	/// # Examples
	///
	/// ```
	/// use portal_forms::rules::FieldRules;
	///
	/// let rules = FieldRules::new().with_validator(|value, _all| {
	/// 	if value.len() % 2 == 0 {
	/// 		Ok(())
	/// 	} else {
	/// 		Err("Longitud impar".to_string())
	/// 	}
	/// });
	/// # let _ = rules;
	/// ```
	pub fn with_validator<F>(mut self, validator: F) -> Self
	where
		F: Fn(&str, &FormData) -> Result<(), String> + Send + Sync + 'static,
	{
		self.validator = Some(Arc::new(validator));
		self
	}

	pub fn is_required(&self) -> bool {
		self.required
	}

	pub fn field_kind(&self) -> Option<FieldKind> {
		self.kind
	}

	pub fn is_institutional(&self) -> bool {
		self.institutional
	}
}

impl fmt::Debug for FieldRules {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("FieldRules")
			.field("required", &self.required)
			.field("kind", &self.kind)
			.field("min_length", &self.min_length)
			.field("max_length", &self.max_length)
			.field("pattern", &self.pattern.as_ref().map(Regex::as_str))
			.field("pattern_message", &self.pattern_message)
			.field("strong", &self.strong)
			.field("institutional", &self.institutional)
			.field("validator", &self.validator.is_some())
			.finish()
	}
}
