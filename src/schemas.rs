//! Rule sets for the portal's forms
//!
//! One constructor per form: login, registration and activation request.
//! These are the declarative counterparts of the portal's three modals; the
//! HTTP layer builds the snapshot and renders the report, nothing more.

use crate::form::FormRules;
use crate::rules::{FieldKind, FieldRules};

/// Login form: institutional account email plus any non-empty password.
///
/// # Examples
///
/// ```
/// use portal_forms::form::form_data_from_json;
/// use portal_forms::schemas::login_rules;
/// use serde_json::json;
///
/// let data = form_data_from_json(&json!({"email": "ana@b.c", "password": "x"}));
/// assert!(login_rules().validate(&data).is_valid());
/// ```
pub fn login_rules() -> FormRules {
	FormRules::new()
		.field("email", FieldRules::new().required().kind(FieldKind::Email))
		.field("password", FieldRules::new().required().with_min_length(1))
}

/// Registration form for new students.
pub fn registration_rules() -> FormRules {
	FormRules::new()
		.field(
			"nombre",
			FieldRules::new()
				.required()
				.kind(FieldKind::Alphabetic)
				.with_min_length(2)
				.with_max_length(50),
		)
		.field(
			"apellido",
			FieldRules::new()
				.required()
				.kind(FieldKind::Alphabetic)
				.with_min_length(2)
				.with_max_length(50),
		)
		.field(
			"email",
			FieldRules::new()
				.required()
				.kind(FieldKind::Email)
				.institutional(),
		)
		.field(
			"cedula",
			FieldRules::new()
				.required()
				.kind(FieldKind::NationalId)
				.with_min_length(8)
				.with_max_length(15),
		)
		.field("telefono", FieldRules::new().kind(FieldKind::Phone))
		.field("carrera", FieldRules::new().required())
		.field(
			"semestre",
			FieldRules::new()
				.required()
				.kind(FieldKind::Numeric)
				.with_validator(|value, _| {
					// Only an out-of-range parse fails here; a non-numeric
					// value is already the kind check's finding.
					if let Ok(semestre) = value.parse::<i64>()
						&& !(1..=12).contains(&semestre)
					{
						Err("Selecciona un semestre válido (1-12)".to_string())
					} else {
						Ok(())
					}
				}),
		)
		.field(
			"password",
			FieldRules::new()
				.required()
				.kind(FieldKind::Password)
				.strong()
				.with_min_length(8),
		)
		.field("confirmPassword", FieldRules::new().required())
}

/// Activation request form. The receipt file's size/type constraints are
/// the caller's [`FileConstraint`](crate::files::FileConstraint) check over
/// the upload metadata; here the field only has to be present.
pub fn activation_request_rules() -> FormRules {
	FormRules::new()
		.field("periodo_academico", FieldRules::new().required())
		.field("recibo_matricula", FieldRules::new().required())
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::form::FormData;
	use crate::messages;

	fn data(pairs: &[(&str, &str)]) -> FormData {
		pairs
			.iter()
			.map(|(k, v)| (k.to_string(), v.to_string()))
			.collect()
	}

	#[test]
	fn test_login_requires_both_fields() {
		let report = login_rules().validate(&FormData::new());
		assert!(!report.is_valid());
		assert!(report.field_errors("email").is_some());
		assert!(report.field_errors("password").is_some());
	}

	#[test]
	fn test_login_accepts_any_non_empty_password() {
		let report = login_rules().validate(&data(&[("email", "a@b.c"), ("password", "x")]));
		assert!(report.is_valid());
	}

	#[test]
	fn test_registration_happy_path() {
		let report = registration_rules().validate(&data(&[
			("nombre", "Ana María"),
			("apellido", "Gómez"),
			("email", "ana@universidad.edu"),
			("cedula", "8-123-4567"),
			("telefono", "+507 6123-4567"),
			("carrera", "Ingeniería de Sistemas"),
			("semestre", "5"),
			("password", "Abcdef1!"),
			("confirmPassword", "Abcdef1!"),
		]));
		assert!(report.is_valid(), "unexpected errors: {report:?}");
	}

	#[test]
	fn test_registration_telefono_is_optional() {
		let report = registration_rules().validate(&data(&[
			("nombre", "Ana"),
			("apellido", "Gómez"),
			("email", "ana@universidad.edu"),
			("cedula", "8-123-4567"),
			("carrera", "Derecho"),
			("semestre", "1"),
			("password", "Abcdef1!"),
			("confirmPassword", "Abcdef1!"),
		]));
		assert!(report.is_valid());
	}

	#[test]
	fn test_registration_rejects_personal_email() {
		let report = registration_rules().validate(&data(&[
			("nombre", "Ana"),
			("apellido", "Gómez"),
			("email", "ana@gmail.com"),
			("cedula", "8-123-4567"),
			("carrera", "Derecho"),
			("semestre", "1"),
			("password", "Abcdef1!"),
			("confirmPassword", "Abcdef1!"),
		]));
		assert_eq!(
			report.field_errors("email"),
			Some(&[messages::INSTITUTIONAL_EMAIL.to_string()][..])
		);
	}

	#[test]
	fn test_registration_semestre_range() {
		let base = |semestre: &str| {
			data(&[
				("nombre", "Ana"),
				("apellido", "Gómez"),
				("email", "ana@universidad.edu"),
				("cedula", "8-123-4567"),
				("carrera", "Derecho"),
				("semestre", semestre),
				("password", "Abcdef1!"),
				("confirmPassword", "Abcdef1!"),
			])
		};

		let out_of_range = registration_rules().validate(&base("13"));
		assert_eq!(
			out_of_range.field_errors("semestre"),
			Some(&["Selecciona un semestre válido (1-12)".to_string()][..])
		);

		assert!(registration_rules().validate(&base("12")).is_valid());
	}

	#[test]
	fn test_registration_non_numeric_semestre_fails_kind_only() {
		let report = registration_rules().validate(&data(&[("semestre", "abc")]));
		assert_eq!(
			report.field_errors("semestre"),
			Some(&[messages::NUMERIC.to_string()][..])
		);
	}

	#[test]
	fn test_activation_request_fields_required() {
		let report = activation_request_rules().validate(&FormData::new());
		assert!(report.field_errors("periodo_academico").is_some());
		assert!(report.field_errors("recibo_matricula").is_some());
	}
}
