//! Form processing and validation for the student activation portal
//!
//! This crate is the portal's validation core:
//! - Rule-driven form validation: declarative per-field rules
//!   ([`FieldRules`]) evaluated over a value snapshot by [`FormRules`],
//!   producing an ordered, serializable [`ValidationReport`]
//! - Password strength scoring for the registration strength bar
//! - File upload constraints (size, count, extension, name)
//! - The portal's concrete form schemas (login, registration, activation
//!   request)
//!
//! Everything is a pure function over in-memory data: no I/O, no global
//! state, no UI. Failures are accumulated messages, never errors; the one
//! `Result`-returning API is rule construction with a user-supplied
//! pattern.

pub mod files;
pub mod form;
pub mod messages;
pub mod rules;
pub mod schemas;
pub mod strength;
pub mod validators;

pub use files::{FileConstraint, FileInfo, FileReport, format_file_size};
pub use form::{FieldErrors, FormData, FormRules, ValidationReport, form_data_from_json};
pub use rules::{FieldKind, FieldRules, FieldValidator, RuleError};
pub use strength::{PasswordStrength, StrengthChecks, password_strength};
