//! Password strength scoring
//!
//! Stateless scorer behind the registration form's strength bar. The UI
//! re-invokes it on every keystroke and renders the score, label and bar
//! percentage directly from the result.

use crate::validators::STRONG_PASSWORD_SYMBOLS;
use serde::Serialize;

const LABELS: [&str; 5] = ["Muy débil", "Débil", "Regular", "Buena", "Muy fuerte"];

/// Minimum length for the length check to pass.
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// The five independent complexity checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StrengthChecks {
	pub length: bool,
	pub lowercase: bool,
	pub uppercase: bool,
	pub numbers: bool,
	pub symbols: bool,
}

/// Result of scoring a password.
///
/// `score` counts the satisfied checks (0 to 5). `percentage` drives the
/// strength bar and is floored at 20 so the bar stays visible even for an
/// empty password; that floor is part of the contract with the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PasswordStrength {
	pub score: u8,
	pub label: &'static str,
	pub percentage: u8,
	pub checks: StrengthChecks,
}

/// Scores a password against the five complexity checks.
///
/// Pure and idempotent; callers re-invoke it on every input change.
///
/// # Examples
///
/// ```
/// use portal_forms::strength::password_strength;
///
/// let empty = password_strength("");
/// assert_eq!(empty.score, 0);
/// assert_eq!(empty.label, "Muy débil");
/// assert_eq!(empty.percentage, 20);
///
/// let strong = password_strength("Abcdef1!");
/// assert_eq!(strong.score, 5);
/// assert_eq!(strong.label, "Muy fuerte");
/// assert_eq!(strong.percentage, 100);
/// ```
pub fn password_strength(password: &str) -> PasswordStrength {
	let checks = StrengthChecks {
		length: password.chars().count() >= MIN_PASSWORD_LENGTH,
		lowercase: password.chars().any(|c| c.is_ascii_lowercase()),
		uppercase: password.chars().any(|c| c.is_ascii_uppercase()),
		numbers: password.chars().any(|c| c.is_ascii_digit()),
		symbols: password.chars().any(|c| STRONG_PASSWORD_SYMBOLS.contains(c)),
	};

	let score = [
		checks.length,
		checks.lowercase,
		checks.uppercase,
		checks.numbers,
		checks.symbols,
	]
	.iter()
	.filter(|&&check| check)
	.count() as u8;

	// Index score-1; a score of 0 falls back to the weakest label.
	let label = match score {
		0 => LABELS[0],
		s => LABELS[s as usize - 1],
	};

	let percentage = (score * 20).max(20);

	PasswordStrength {
		score,
		label,
		percentage,
		checks,
	}
}
