//! Case conversions used to derive symbol and file names.
//!
//! All three transforms are pure and idempotent: applying one to its own
//! output returns the same string.

/// Uppercase the first character, keep the rest untouched.
pub fn to_pascal_case(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Lowercase the first character, keep the rest untouched.
pub fn to_camel_case(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Insert a hyphen at every lower-to-upper boundary, then lowercase.
///
/// `DomMetaKeyword` becomes `dom-meta-keyword`. Runs of capitals are not
/// split (`HTTPServer` becomes `httpserver`).
pub fn to_kebab_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len() + 4);
    let mut prev_lower = false;

    for c in s.chars() {
        if prev_lower && c.is_ascii_uppercase() {
            result.push('-');
        }
        prev_lower = c.is_ascii_lowercase();
        result.push(c);
    }

    result.to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_pascal_case() {
        assert_eq!(to_pascal_case("product"), "Product");
        assert_eq!(to_pascal_case("domCategory"), "DomCategory");
        assert_eq!(to_pascal_case("Product"), "Product");
        assert_eq!(to_pascal_case(""), "");
    }

    #[test]
    fn test_to_camel_case() {
        assert_eq!(to_camel_case("Product"), "product");
        assert_eq!(to_camel_case("DomMetaKeyword"), "domMetaKeyword");
        assert_eq!(to_camel_case("user"), "user");
        assert_eq!(to_camel_case(""), "");
    }

    #[test]
    fn test_to_kebab_case() {
        assert_eq!(to_kebab_case("Product"), "product");
        assert_eq!(to_kebab_case("DomMetaKeyword"), "dom-meta-keyword");
        assert_eq!(to_kebab_case("productCategory"), "product-category");
        assert_eq!(to_kebab_case("HTTPServer"), "httpserver");
        assert_eq!(to_kebab_case("already-kebab"), "already-kebab");
    }

    #[test]
    fn test_kebab_keeps_digits_and_underscores() {
        assert_eq!(to_kebab_case("Product2Tag"), "product2tag");
        assert_eq!(to_kebab_case("user_Profile"), "user_profile");
    }
}
