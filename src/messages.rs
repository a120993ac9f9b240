//! User-facing validation messages
//!
//! Every message the engine can produce lives here, so the UI layer and the
//! tests have a single catalog to refer to. The portal's audience is
//! Spanish-speaking; messages are Spanish by contract with the front-end.

/// Emitted when a required field is empty or whitespace-only.
pub const REQUIRED: &str = "Este campo es obligatorio";

/// Emitted when a value fails the email predicate.
pub const EMAIL: &str = "Ingresa un email válido";

/// Emitted when a value fails the phone predicate.
pub const PHONE: &str = "Ingresa un teléfono válido";

/// Emitted when a value fails the national-ID (cédula) predicate.
pub const NATIONAL_ID: &str = "Ingresa una cédula válida";

/// Fallback for a custom pattern without its own message.
pub const PATTERN: &str = "Formato inválido";

/// Fallback for a custom validator that failed without a message.
pub const INVALID_VALUE: &str = "Valor inválido";

/// Emitted on `confirmPassword` when it differs from `password`.
pub const PASSWORD_MISMATCH: &str = "Las contraseñas no coinciden";

/// Emitted when a strong password misses one of the four character classes.
pub const STRONG_PASSWORD: &str =
	"La contraseña debe contener mayúsculas, minúsculas, números y símbolos";

/// Emitted when a numeric-only field contains other characters.
pub const NUMERIC: &str = "Solo se permiten números";

/// Emitted when a letters-only field contains other characters.
pub const ALPHABETIC: &str = "Solo se permiten letras";

/// Emitted when a letters-and-digits field contains other characters.
pub const ALPHANUMERIC: &str = "Solo se permiten letras y números";

/// Emitted on `birthDate` when the computed age is under 18.
pub const UNDERAGE: &str = "Debes ser mayor de 18 años";

/// Emitted when a date value cannot be parsed.
pub const INVALID_DATE: &str = "Fecha inválida";

/// Emitted when a date value lies in the future.
pub const FUTURE_DATE: &str = "La fecha no puede ser futura";

/// Emitted on `email` when an institutional address is required.
pub const INSTITUTIONAL_EMAIL: &str =
	"Debes usar tu email institucional (@universidad.edu)";

/// Emitted when a file list is empty.
pub const NO_FILE_SELECTED: &str = "No se ha seleccionado ningún archivo";

/// Emitted when a file name exceeds 255 characters.
pub const FILE_NAME_TOO_LONG: &str = "Nombre demasiado largo";

/// Emitted when a file name contains forbidden characters.
pub const FILE_NAME_INVALID_CHARS: &str = "Nombre contiene caracteres no permitidos";

/// Minimum-length message with the bound interpolated.
///
/// # Examples
///
/// ```
/// assert_eq!(portal_forms::messages::min_length(8), "Mínimo 8 caracteres");
/// ```
pub fn min_length(min: usize) -> String {
	format!("Mínimo {min} caracteres")
}

/// Maximum-length message with the bound interpolated.
///
/// # Examples
///
/// ```
/// assert_eq!(portal_forms::messages::max_length(50), "Máximo 50 caracteres");
/// ```
pub fn max_length(max: usize) -> String {
	format!("Máximo {max} caracteres")
}

/// Aggregate message for a file list longer than the allowed count.
pub fn max_files(max: usize) -> String {
	format!("Máximo {max} archivo(s) permitido(s)")
}

/// Per-file size message; `bound` is already human-formatted (e.g. "5.0 MB").
pub fn file_too_large(bound: &str) -> String {
	format!("Tamaño demasiado grande (máximo {bound})")
}

/// Per-file type message listing the accepted extensions.
pub fn file_type_not_allowed(allowed: &[String]) -> String {
	format!("Tipo no permitido. Formatos aceptados: {}", allowed.join(", "))
}

/// Minimum-age message for date checks.
pub fn min_age(min: i32) -> String {
	format!("Debes tener al menos {min} años")
}

/// Maximum-age message for date checks.
pub fn max_age(max: i32) -> String {
	format!("La edad no puede ser mayor a {max} años")
}
