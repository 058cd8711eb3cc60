//! Ingredient name canonicalization.
//!
//! Every comparison in the engine goes through these helpers. Names are
//! trimmed before use and compared case-insensitively; the empty string is
//! the canonical "absent" sentinel, never an error.

use serde_json::Value;

/// Trims surrounding whitespace from a raw name.
///
/// Returns an empty string for whitespace-only input; callers treat the
/// empty string as "no value".
pub fn normalize(raw: &str) -> String {
    raw.trim().to_string()
}

/// Normalizes a raw JSON value into name text.
///
/// `None` and JSON null normalize to the empty string. Strings are trimmed;
/// numbers and booleans are stringified the way a spreadsheet export renders
/// them. Arrays and objects are not names and normalize to empty.
pub fn normalize_value(raw: Option<&Value>) -> String {
    match raw {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => normalize(s),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        Some(_) => String::new(),
    }
}

/// Produces the case-folded form of a name used for set membership.
///
/// The original casing is kept on the values themselves for display; the
/// folded form exists only for equality.
pub fn fold(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Case-insensitive equality after independently normalizing both sides.
pub fn equals_fold(a: &str, b: &str) -> bool {
    fold(a) == fold(b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_normalize_trims_whitespace() {
        assert_eq!(normalize("  Potato  "), "Potato");
        assert_eq!(normalize("Carrot"), "Carrot");
    }

    #[test]
    fn test_normalize_whitespace_only_is_empty() {
        assert_eq!(normalize("   "), "");
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("\t\n"), "");
    }

    #[test]
    fn test_normalize_value_absent_and_null() {
        assert_eq!(normalize_value(None), "");
        assert_eq!(normalize_value(Some(&Value::Null)), "");
    }

    #[test]
    fn test_normalize_value_strings_and_scalars() {
        assert_eq!(normalize_value(Some(&json!("  Egg "))), "Egg");
        assert_eq!(normalize_value(Some(&json!(12))), "12");
        assert_eq!(normalize_value(Some(&json!(true))), "true");
    }

    #[test]
    fn test_normalize_value_compound_is_empty() {
        assert_eq!(normalize_value(Some(&json!(["Egg"]))), "");
        assert_eq!(normalize_value(Some(&json!({"name": "Egg"}))), "");
    }

    #[test]
    fn test_equals_fold_is_case_insensitive() {
        assert!(equals_fold("Potato", "potato"));
        assert!(equals_fold("  POTATO ", "potato"));
        assert!(!equals_fold("potato", "pot"));
    }

    #[test]
    fn test_fold_combines_trim_and_lowercase() {
        assert_eq!(fold("  Maple Syrup "), "maple syrup");
    }
}
