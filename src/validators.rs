//! Built-in validation predicates
//!
//! The regex tables and small checks the engine dispatches to per
//! [`FieldKind`](crate::rules::FieldKind), plus standalone helpers the
//! portal uses outside the rule-driven flow (institutional email,
//! Panamanian cédula, date checks, input sanitization).

use crate::messages;
use chrono::{Datelike, Local, NaiveDate};
use regex::Regex;
use std::sync::LazyLock;

// Deliberately permissive: anything@anything.anything, no whitespace.
static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("EMAIL_REGEX: invalid regex pattern")
});

// Applied to the whitespace-stripped value; digits plus phone punctuation.
static PHONE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"^[0-9\-+()\s]+$").expect("PHONE_REGEX: invalid regex pattern")
});

// Uppercase letters, digits and hyphens; length is checked separately on
// the hyphen-stripped value.
static NATIONAL_ID_REGEX: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"^[0-9A-Z\-]+$").expect("NATIONAL_ID_REGEX: invalid regex pattern")
});

static NUMERIC_REGEX: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"^[0-9]+$").expect("NUMERIC_REGEX: invalid regex pattern"));

// Latin letters including accented vowels and ñ, plus spaces.
static ALPHABETIC_REGEX: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"^[a-zA-ZáéíóúÁÉÍÓÚñÑ\s]+$").expect("ALPHABETIC_REGEX: invalid regex pattern")
});

static ALPHANUMERIC_REGEX: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"^[a-zA-Z0-9\s]+$").expect("ALPHANUMERIC_REGEX: invalid regex pattern")
});

// Hyphen-stripped cédula shape: digits or the PE prefix letters, 8 to 15.
static CEDULA_CLEAN_REGEX: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"^[0-9PE]{8,15}$").expect("CEDULA_CLEAN_REGEX: invalid regex pattern")
});

/// Symbols that count towards password strength.
pub const STRONG_PASSWORD_SYMBOLS: &str = "@$!%*?&";

/// Email domains accepted as institutional addresses.
pub const INSTITUTIONAL_DOMAINS: [&str; 4] = [
	"@universidad.edu",
	"@estudiantes.universidad.edu",
	"@utp.ac.pa",
	"@usma.ac.pa",
];

/// Minimum digit count for a phone number after stripping whitespace.
pub const MIN_PHONE_LENGTH: usize = 7;

/// Minimum length of a national ID after stripping hyphens.
pub const MIN_NATIONAL_ID_LENGTH: usize = 8;

/// Checks that a value looks like an email address.
///
/// # Examples
///
/// ```
/// use portal_forms::validators::is_valid_email;
///
/// assert!(is_valid_email("a@b.c"));
/// assert!(!is_valid_email("a@b"));
/// ```
pub fn is_valid_email(email: &str) -> bool {
	EMAIL_REGEX.is_match(email)
}

/// Checks that a value looks like a phone number.
///
/// Whitespace is stripped first; the remainder must be digits and phone
/// punctuation with at least seven characters.
///
/// # Examples
///
/// ```
/// use portal_forms::validators::is_valid_phone;
///
/// assert!(is_valid_phone("+507 6123-4567"));
/// assert!(!is_valid_phone("123"));
/// ```
pub fn is_valid_phone(phone: &str) -> bool {
	let stripped: String = phone.chars().filter(|c| !c.is_whitespace()).collect();
	PHONE_REGEX.is_match(&stripped) && stripped.chars().count() >= MIN_PHONE_LENGTH
}

/// Checks that a value looks like a national ID (cédula).
///
/// The raw value must be uppercase letters, digits and hyphens; the value
/// with hyphens removed must have at least eight characters.
///
/// # Examples
///
/// ```
/// use portal_forms::validators::is_valid_national_id;
///
/// assert!(is_valid_national_id("8-123-4567"));
/// assert!(!is_valid_national_id("8-12"));
/// ```
pub fn is_valid_national_id(value: &str) -> bool {
	let clean_len = value.chars().filter(|&c| c != '-').count();
	NATIONAL_ID_REGEX.is_match(value) && clean_len >= MIN_NATIONAL_ID_LENGTH
}

/// Checks that a value contains digits only.
pub fn is_numeric(value: &str) -> bool {
	NUMERIC_REGEX.is_match(value)
}

/// Checks that a value contains letters (accented Latin included) and
/// spaces only.
pub fn is_alphabetic(value: &str) -> bool {
	ALPHABETIC_REGEX.is_match(value)
}

/// Checks that a value contains letters, digits and spaces only.
pub fn is_alphanumeric(value: &str) -> bool {
	ALPHANUMERIC_REGEX.is_match(value)
}

/// Checks password complexity: at least one lowercase letter, one uppercase
/// letter, one digit and one symbol from [`STRONG_PASSWORD_SYMBOLS`], each
/// anywhere in the string.
///
/// # Examples
///
/// ```
/// use portal_forms::validators::is_strong_password;
///
/// assert!(is_strong_password("Abcdef1!"));
/// assert!(!is_strong_password("abcdef1!"));
/// ```
pub fn is_strong_password(password: &str) -> bool {
	let has_lowercase = password.chars().any(|c| c.is_ascii_lowercase());
	let has_uppercase = password.chars().any(|c| c.is_ascii_uppercase());
	let has_digit = password.chars().any(|c| c.is_ascii_digit());
	let has_symbol = password.chars().any(|c| STRONG_PASSWORD_SYMBOLS.contains(c));

	has_lowercase && has_uppercase && has_digit && has_symbol
}

/// Checks that an email belongs to one of the institutional domains.
///
/// # Examples
///
/// ```
/// use portal_forms::validators::is_institutional_email;
///
/// assert!(is_institutional_email("ana@universidad.edu"));
/// assert!(is_institutional_email("ana@utp.ac.pa"));
/// assert!(!is_institutional_email("ana@gmail.com"));
/// ```
pub fn is_institutional_email(email: &str) -> bool {
	INSTITUTIONAL_DOMAINS
		.iter()
		.any(|domain| email.ends_with(domain))
}

/// Checks a Panamanian cédula.
///
/// Hyphens are stripped; the remainder must be digits or the `PE` resident
/// prefix, 8 to 15 characters. `PE`-prefixed numbers need at least ten
/// characters, plain numeric ones at least eight.
///
/// # Examples
///
/// ```
/// use portal_forms::validators::is_valid_panamanian_cedula;
///
/// assert!(is_valid_panamanian_cedula("8-123-45678"));
/// assert!(is_valid_panamanian_cedula("PE-1234-5678"));
/// assert!(!is_valid_panamanian_cedula("PE-123456"));
/// ```
pub fn is_valid_panamanian_cedula(cedula: &str) -> bool {
	let clean: String = cedula.chars().filter(|&c| c != '-').collect();

	if !CEDULA_CLEAN_REGEX.is_match(&clean) {
		return false;
	}

	if clean.starts_with("PE") {
		clean.chars().count() >= 10
	} else {
		clean.chars().count() >= 8
	}
}

/// Strips a free-text value for safe echoing: trims, removes `<`, `>`, `"`
/// and `'`, and collapses whitespace runs to single spaces.
///
/// # Examples
///
/// ```
/// use portal_forms::validators::sanitize_input;
///
/// assert_eq!(sanitize_input("  Juan   <Pérez> "), "Juan Pérez");
/// ```
pub fn sanitize_input(input: &str) -> String {
	let stripped: String = input
		.trim()
		.chars()
		.filter(|c| !matches!(c, '<' | '>' | '"' | '\''))
		.collect();

	stripped.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Whole-year age at `today`, decremented when the birthday has not yet
/// occurred this year.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use portal_forms::validators::calculate_age;
///
/// let birth = NaiveDate::from_ymd_opt(2000, 6, 15).unwrap();
/// let before = NaiveDate::from_ymd_opt(2026, 6, 14).unwrap();
/// let after = NaiveDate::from_ymd_opt(2026, 6, 15).unwrap();
/// assert_eq!(calculate_age(birth, before), 25);
/// assert_eq!(calculate_age(birth, after), 26);
/// ```
pub fn calculate_age(birth: NaiveDate, today: NaiveDate) -> i32 {
	let mut age = today.year() - birth.year();
	if (today.month(), today.day()) < (birth.month(), birth.day()) {
		age -= 1;
	}
	age
}

/// Checks a `%Y-%m-%d` date string against age bounds, evaluated at `today`.
///
/// The age here is the raw year difference, without the birthday
/// adjustment; that is the contract the portal's date inputs rely on. The
/// cross-field birth-date check in [`FormRules::validate_on`] uses the
/// adjusted [`calculate_age`] instead.
///
/// [`FormRules::validate_on`]: crate::form::FormRules::validate_on
pub fn check_date_on(
	date_str: &str,
	min_age: i32,
	max_age: i32,
	today: NaiveDate,
) -> Result<(), String> {
	let date = NaiveDate::parse_from_str(date_str, "%Y-%m-%d")
		.map_err(|_| messages::INVALID_DATE.to_string())?;

	if date > today {
		return Err(messages::FUTURE_DATE.to_string());
	}

	let age = today.year() - date.year();

	if age < min_age {
		return Err(messages::min_age(min_age));
	}

	if age > max_age {
		return Err(messages::max_age(max_age));
	}

	Ok(())
}

/// [`check_date_on`] evaluated at the current local date.
pub fn check_date(date_str: &str, min_age: i32, max_age: i32) -> Result<(), String> {
	check_date_on(date_str, min_age, max_age, Local::now().date_naive())
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case("a@b.c")]
	#[case("estudiante@universidad.edu")]
	#[case("first.last+tag@sub.domain.org")]
	fn test_valid_emails(#[case] email: &str) {
		assert!(is_valid_email(email), "Expected '{email}' to be valid");
	}

	#[rstest]
	#[case("")]
	#[case("a@b")]
	#[case("no-at-sign.com")]
	#[case("two@@signs.com")]
	#[case("spaces in@mail.com")]
	fn test_invalid_emails(#[case] email: &str) {
		assert!(!is_valid_email(email), "Expected '{email}' to be invalid");
	}

	#[rstest]
	#[case("61234567")]
	#[case("+507 6123-4567")]
	#[case("(507) 6123 4567")]
	fn test_valid_phones(#[case] phone: &str) {
		assert!(is_valid_phone(phone), "Expected '{phone}' to be valid");
	}

	#[rstest]
	#[case("")]
	#[case("123456")] // below the seven-character floor
	#[case("phone123")]
	fn test_invalid_phones(#[case] phone: &str) {
		assert!(!is_valid_phone(phone), "Expected '{phone}' to be invalid");
	}

	#[rstest]
	#[case("12345678")]
	#[case("8-123-4567")]
	#[case("PE-1234-5678")]
	fn test_valid_national_ids(#[case] id: &str) {
		assert!(is_valid_national_id(id), "Expected '{id}' to be valid");
	}

	#[rstest]
	#[case("")]
	#[case("8-12")] // too short once hyphens are removed
	#[case("8.123.4567")]
	#[case("abcdefgh")] // lowercase letters rejected
	fn test_invalid_national_ids(#[case] id: &str) {
		assert!(!is_valid_national_id(id), "Expected '{id}' to be invalid");
	}

	#[rstest]
	#[case("María José", true)]
	#[case("Ñoño", true)]
	#[case("Juan2", false)]
	#[case("", false)]
	fn test_alphabetic(#[case] value: &str, #[case] expected: bool) {
		assert_eq!(is_alphabetic(value), expected);
	}

	#[rstest]
	#[case("Sala 12", true)]
	#[case("María 12", false)] // accented letters are alphabetic-only
	#[case("a-b", false)]
	fn test_alphanumeric(#[case] value: &str, #[case] expected: bool) {
		assert_eq!(is_alphanumeric(value), expected);
	}

	#[rstest]
	#[case("Abcdef1!", true)]
	#[case("NoSymbol1", false)]
	#[case("nouppercase1!", false)]
	#[case("NOLOWERCASE1!", false)]
	#[case("NoDigits!!", false)]
	// '#' is not in the accepted symbol set
	#[case("Abcdefg1#", false)]
	// classes may appear in any order, anywhere in the string
	#[case("!1aA", true)]
	fn test_strong_password(#[case] password: &str, #[case] expected: bool) {
		assert_eq!(is_strong_password(password), expected);
	}

	#[rstest]
	#[case("ana@universidad.edu", true)]
	#[case("ana@estudiantes.universidad.edu", true)]
	#[case("ana@utp.ac.pa", true)]
	#[case("ana@usma.ac.pa", true)]
	#[case("ana@gmail.com", false)]
	#[case("ana@universidad.edu.fake.com", false)]
	fn test_institutional_email(#[case] email: &str, #[case] expected: bool) {
		assert_eq!(is_institutional_email(email), expected);
	}

	#[rstest]
	#[case("8-123-45678", true)]
	#[case("PE-1234-5678", true)]
	#[case("PE-123456", false)] // PE numbers need ten characters
	#[case("1234567", false)] // below eight digits
	#[case("8-123-4567x", false)]
	fn test_panamanian_cedula(#[case] cedula: &str, #[case] expected: bool) {
		assert_eq!(is_valid_panamanian_cedula(cedula), expected);
	}

	#[test]
	fn test_sanitize_input() {
		assert_eq!(sanitize_input("  hola   mundo  "), "hola mundo");
		assert_eq!(sanitize_input("<b>\"x\"</b>"), "bx/b");
		assert_eq!(sanitize_input(""), "");
	}

	#[test]
	fn test_calculate_age_birthday_boundary() {
		let birth = NaiveDate::from_ymd_opt(2008, 3, 10).unwrap();
		let day_before = NaiveDate::from_ymd_opt(2026, 3, 9).unwrap();
		let birthday = NaiveDate::from_ymd_opt(2026, 3, 10).unwrap();

		assert_eq!(calculate_age(birth, day_before), 17);
		assert_eq!(calculate_age(birth, birthday), 18);
	}

	#[test]
	fn test_check_date_on() {
		let today = NaiveDate::from_ymd_opt(2026, 8, 30).unwrap();

		assert!(check_date_on("2000-01-15", 18, 120, today).is_ok());
		assert_eq!(
			check_date_on("not-a-date", 0, 120, today),
			Err(messages::INVALID_DATE.to_string())
		);
		assert_eq!(
			check_date_on("2030-01-01", 0, 120, today),
			Err(messages::FUTURE_DATE.to_string())
		);
		assert_eq!(
			check_date_on("2015-01-01", 18, 120, today),
			Err(messages::min_age(18))
		);
		assert_eq!(
			check_date_on("1890-01-01", 0, 120, today),
			Err(messages::max_age(120))
		);
	}
}
