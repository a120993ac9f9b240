//! Rule-driven form validation
//!
//! [`FormRules`] holds an ordered set of field declarations and evaluates a
//! snapshot of form values against them. The engine is pure: it reads the
//! value map, produces a [`ValidationReport`], and touches nothing else.
//! Mapping the report onto visible feedback is the caller's job.

use crate::messages;
use crate::rules::{FieldKind, FieldRules};
use crate::strength::MIN_PASSWORD_LENGTH;
use crate::validators;
use chrono::{Local, NaiveDate};
use serde::Serialize;
use std::collections::HashMap;

/// Snapshot of form values: field name to raw string value. A missing
/// field reads as the empty string.
pub type FormData = HashMap<String, String>;

/// Field names the cross-field phase looks at.
pub const PASSWORD_FIELD: &str = "password";
pub const CONFIRM_PASSWORD_FIELD: &str = "confirmPassword";
pub const BIRTH_DATE_FIELD: &str = "birthDate";
pub const EMAIL_FIELD: &str = "email";

const ADULT_AGE: i32 = 18;

/// Errors accumulated for one field, in check order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldErrors {
	pub field: String,
	pub messages: Vec<String>,
}

/// Outcome of validating one form snapshot.
///
/// `valid` holds exactly when no field accumulated an error. Fields appear
/// in rule-set declaration order; fields errored only by the cross-field
/// phase without a declaration come after all declared fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
	valid: bool,
	errors: Vec<FieldErrors>,
}

impl ValidationReport {
	pub fn is_valid(&self) -> bool {
		self.valid
	}

	/// Messages for one field, if it failed.
	pub fn field_errors(&self, field: &str) -> Option<&[String]> {
		self.errors
			.iter()
			.find(|e| e.field == field)
			.map(|e| e.messages.as_slice())
	}

	/// Failed fields in declaration order.
	pub fn iter(&self) -> impl Iterator<Item = &FieldErrors> {
		self.errors.iter()
	}

	/// Number of fields that failed.
	pub fn error_field_count(&self) -> usize {
		self.errors.len()
	}
}

// Collects errors during a run; declaration order is restored when the
// report is assembled, so insertion order only matters for undeclared
// fields.
struct ErrorAccumulator {
	by_field: HashMap<String, Vec<String>>,
	undeclared_order: Vec<String>,
}

impl ErrorAccumulator {
	fn new() -> Self {
		Self {
			by_field: HashMap::new(),
			undeclared_order: Vec::new(),
		}
	}

	fn add(&mut self, declared: bool, field: &str, message: impl Into<String>) {
		let entry = self.by_field.entry(field.to_string()).or_default();
		if entry.is_empty() && !declared {
			self.undeclared_order.push(field.to_string());
		}
		entry.push(message.into());
	}
}

/// Ordered rule set for one form.
///
/// # Examples
///
/// ```
/// use portal_forms::form::{FormData, FormRules};
/// use portal_forms::rules::{FieldKind, FieldRules};
///
/// let rules = FormRules::new()
/// 	.field("email", FieldRules::new().required().kind(FieldKind::Email))
/// 	.field("telefono", FieldRules::new().kind(FieldKind::Phone));
///
/// let mut data = FormData::new();
/// data.insert("email".to_string(), "ana@ejemplo.com".to_string());
///
/// let report = rules.validate(&data);
/// assert!(report.is_valid());
/// ```
#[derive(Clone, Default)]
pub struct FormRules {
	fields: Vec<(String, FieldRules)>,
}

impl FormRules {
	pub fn new() -> Self {
		Self { fields: Vec::new() }
	}

	/// Declares (or replaces) the rules for a field. Replacing keeps the
	/// field's original position, so error ordering stays stable.
	pub fn field(mut self, name: impl Into<String>, rules: FieldRules) -> Self {
		let name = name.into();
		if let Some(slot) = self.fields.iter_mut().find(|(n, _)| *n == name) {
			slot.1 = rules;
		} else {
			self.fields.push((name, rules));
		}
		self
	}

	/// Rules declared for a field, if any.
	pub fn get(&self, name: &str) -> Option<&FieldRules> {
		self.fields
			.iter()
			.find(|(n, _)| n == name)
			.map(|(_, rules)| rules)
	}

	/// Declared field names, in order.
	pub fn field_names(&self) -> impl Iterator<Item = &str> {
		self.fields.iter().map(|(name, _)| name.as_str())
	}

	/// Validates a form snapshot against this rule set, evaluating the
	/// birth-date check at the current local date.
	pub fn validate(&self, data: &FormData) -> ValidationReport {
		self.validate_on(data, Local::now().date_naive())
	}

	/// Validates a form snapshot, with the date the age check is evaluated
	/// at passed in explicitly.
	///
	/// Per field, in order: required/empty handling, kind predicate,
	/// min/max length, custom pattern, custom validator. A required field
	/// that is empty gets exactly the one required error; an optional empty
	/// field passes outright. All other checks accumulate. Cross-field
	/// checks (password confirmation, adult age, institutional email) run
	/// once afterwards.
	///
	/// # Examples
	///
	/// ```
	/// use chrono::NaiveDate;
	/// use portal_forms::form::{FormData, FormRules};
	/// use portal_forms::rules::FieldRules;
	///
	/// let rules = FormRules::new().field("nombre", FieldRules::new().required());
	/// let today = NaiveDate::from_ymd_opt(2026, 8, 30).unwrap();
	///
	/// let report = rules.validate_on(&FormData::new(), today);
	/// assert!(!report.is_valid());
	/// assert_eq!(
	/// 	report.field_errors("nombre"),
	/// 	Some(&["Este campo es obligatorio".to_string()][..])
	/// );
	/// ```
	pub fn validate_on(&self, data: &FormData, today: NaiveDate) -> ValidationReport {
		let mut acc = ErrorAccumulator::new();

		for (name, rules) in &self.fields {
			self.validate_field(name, rules, data, &mut acc);
		}

		self.cross_field_checks(data, today, &mut acc);

		self.into_report(acc)
	}

	fn validate_field(
		&self,
		name: &str,
		rules: &FieldRules,
		data: &FormData,
		acc: &mut ErrorAccumulator,
	) {
		let value = data.get(name).map(String::as_str).unwrap_or("");

		// Empty decisions are made on the trimmed value; every other check
		// sees the raw value.
		if value.trim().is_empty() {
			if rules.required {
				acc.add(true, name, messages::REQUIRED);
			}
			return;
		}

		if let Some(kind) = rules.kind {
			match kind {
				FieldKind::Email => {
					if !validators::is_valid_email(value) {
						acc.add(true, name, messages::EMAIL);
					}
				}
				FieldKind::Phone => {
					if !validators::is_valid_phone(value) {
						acc.add(true, name, messages::PHONE);
					}
				}
				FieldKind::NationalId => {
					if !validators::is_valid_national_id(value) {
						acc.add(true, name, messages::NATIONAL_ID);
					}
				}
				FieldKind::Numeric => {
					if !validators::is_numeric(value) {
						acc.add(true, name, messages::NUMERIC);
					}
				}
				FieldKind::Alphabetic => {
					if !validators::is_alphabetic(value) {
						acc.add(true, name, messages::ALPHABETIC);
					}
				}
				FieldKind::Alphanumeric => {
					if !validators::is_alphanumeric(value) {
						acc.add(true, name, messages::ALPHANUMERIC);
					}
				}
				FieldKind::Password => {
					if rules.strong && !validators::is_strong_password(value) {
						acc.add(true, name, messages::STRONG_PASSWORD);
					}
				}
			}
		}

		// A password field is never allowed below eight characters, even
		// when the rule set forgot to say so.
		let min_length = rules.min_length.or_else(|| {
			(rules.kind == Some(FieldKind::Password)).then_some(MIN_PASSWORD_LENGTH)
		});

		let length = value.chars().count();

		if let Some(min) = min_length
			&& length < min
		{
			acc.add(true, name, messages::min_length(min));
		}

		if let Some(max) = rules.max_length
			&& length > max
		{
			acc.add(true, name, messages::max_length(max));
		}

		if let Some(pattern) = &rules.pattern
			&& !pattern.is_match(value)
		{
			let message = rules
				.pattern_message
				.clone()
				.unwrap_or_else(|| messages::PATTERN.to_string());
			acc.add(true, name, message);
		}

		if let Some(validator) = &rules.validator
			&& let Err(message) = validator(value, data)
		{
			let message = if message.is_empty() {
				messages::INVALID_VALUE.to_string()
			} else {
				message
			};
			acc.add(true, name, message);
		}
	}

	fn cross_field_checks(&self, data: &FormData, today: NaiveDate, acc: &mut ErrorAccumulator) {
		let value = |name: &str| data.get(name).map(String::as_str).unwrap_or("");

		let password = value(PASSWORD_FIELD);
		let confirm = value(CONFIRM_PASSWORD_FIELD);
		if !password.is_empty() && !confirm.is_empty() && password != confirm {
			acc.add(
				self.get(CONFIRM_PASSWORD_FIELD).is_some(),
				CONFIRM_PASSWORD_FIELD,
				messages::PASSWORD_MISMATCH,
			);
		}

		let birth_date = value(BIRTH_DATE_FIELD);
		if !birth_date.is_empty() {
			let declared = self.get(BIRTH_DATE_FIELD).is_some();
			match NaiveDate::parse_from_str(birth_date, "%Y-%m-%d") {
				Ok(birth) => {
					if validators::calculate_age(birth, today) < ADULT_AGE {
						acc.add(declared, BIRTH_DATE_FIELD, messages::UNDERAGE);
					}
				}
				Err(_) => acc.add(declared, BIRTH_DATE_FIELD, messages::INVALID_DATE),
			}
		}

		let email = value(EMAIL_FIELD);
		if let Some(rules) = self.get(EMAIL_FIELD)
			&& rules.institutional
			&& !email.is_empty()
			&& !validators::is_institutional_email(email)
		{
			acc.add(true, EMAIL_FIELD, messages::INSTITUTIONAL_EMAIL);
		}
	}

	fn into_report(&self, mut acc: ErrorAccumulator) -> ValidationReport {
		let mut errors = Vec::new();

		for (name, _) in &self.fields {
			if let Some(messages) = acc.by_field.remove(name) {
				errors.push(FieldErrors {
					field: name.clone(),
					messages,
				});
			}
		}

		for name in acc.undeclared_order {
			if let Some(messages) = acc.by_field.remove(&name) {
				errors.push(FieldErrors {
					field: name,
					messages,
				});
			}
		}

		ValidationReport {
			valid: errors.is_empty(),
			errors,
		}
	}
}

/// Builds a [`FormData`] snapshot from a serialized-form JSON object.
///
/// String members are taken as-is; numbers and booleans are rendered to
/// their display form; nulls and nested structures are skipped. A non-object
/// value yields an empty snapshot.
///
/// # Examples
///
/// ```
/// use portal_forms::form::form_data_from_json;
/// use serde_json::json;
///
/// let data = form_data_from_json(&json!({"email": "a@b.c", "semestre": 3}));
/// assert_eq!(data.get("email").unwrap(), "a@b.c");
/// assert_eq!(data.get("semestre").unwrap(), "3");
/// ```
pub fn form_data_from_json(value: &serde_json::Value) -> FormData {
	let mut data = FormData::new();

	if let Some(object) = value.as_object() {
		for (name, member) in object {
			match member {
				serde_json::Value::String(s) => {
					data.insert(name.clone(), s.clone());
				}
				serde_json::Value::Number(n) => {
					data.insert(name.clone(), n.to_string());
				}
				serde_json::Value::Bool(b) => {
					data.insert(name.clone(), b.to_string());
				}
				_ => {}
			}
		}
	}

	data
}
