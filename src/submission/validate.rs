use std::sync::LazyLock;

use regex::Regex;
use serde_json::{Map, Value};

use crate::config::ValidationPolicy;
use crate::error::AppError;
use crate::models::ContactForm;

pub const FULL_NAME_REQUIRED: &str = "El nombre completo es requerido";
pub const PHONE_INVALID: &str = "Por favor, introduce un número de teléfono válido de 9 dígitos";
pub const NAME_AND_PHONE_REQUIRED: &str = "El nombre y el teléfono son campos obligatorios";
pub const EMAIL_INVALID: &str = "El correo electrónico no es válido";

static WHITESPACE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());
static PHONE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9]{9}$").unwrap());
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

/// Check a raw payload and normalize it into a [`ContactForm`].
///
/// Rules run in a fixed order and the first violation is returned. Non-string
/// values count as missing.
pub fn validate(raw: &Value, policy: ValidationPolicy) -> Result<ContactForm, AppError> {
    let obj = raw
        .as_object()
        .ok_or_else(|| AppError::BadRequest("Expected a JSON object".to_string()))?;

    if policy == ValidationPolicy::Strict {
        for field in ["fullName", "phone"] {
            if trimmed(obj, field).is_empty() {
                return Err(AppError::validation(field, NAME_AND_PHONE_REQUIRED));
            }
        }
    }

    let full_name = trimmed(obj, "fullName");
    if full_name.is_empty() {
        return Err(AppError::validation("fullName", FULL_NAME_REQUIRED));
    }

    let phone = normalize_phone(text(obj, "phone").unwrap_or(""));
    if !PHONE_RE.is_match(&phone) {
        return Err(AppError::validation("phone", PHONE_INVALID));
    }

    let email = trimmed(obj, "email");
    if policy == ValidationPolicy::Strict && !email.is_empty() && !EMAIL_RE.is_match(&email) {
        return Err(AppError::validation("email", EMAIL_INVALID));
    }

    Ok(ContactForm {
        full_name,
        phone,
        email,
        address: trimmed(obj, "address"),
        city: trimmed(obj, "city"),
        postal_code: trimmed(obj, "postalCode"),
        property_type: trimmed(obj, "propertyType"),
        attic_type: trimmed(obj, "atticType"),
        privacy_accepted: is_checked(obj.get("privacyAccepted")),
    })
}

/// Remove all whitespace, e.g. `"6 1234 5678"` becomes `"612345678"`.
pub fn normalize_phone(phone: &str) -> String {
    WHITESPACE_RE.replace_all(phone, "").into_owned()
}

fn text<'a>(obj: &'a Map<String, Value>, key: &str) -> Option<&'a str> {
    obj.get(key).and_then(Value::as_str)
}

fn trimmed(obj: &Map<String, Value>, key: &str) -> String {
    text(obj, key).map(str::trim).unwrap_or_default().to_string()
}

// Checkboxes arrive as JSON booleans or as form strings.
fn is_checked(value: Option<&Value>) -> bool {
    match value {
        Some(Value::Bool(b)) => *b,
        Some(Value::String(s)) => matches!(
            s.trim().to_ascii_lowercase().as_str(),
            "true" | "on" | "1" | "yes"
        ),
        _ => false,
    }
}
