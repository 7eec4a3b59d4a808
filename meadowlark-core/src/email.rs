use once_cell::sync::Lazy;
use regex::Regex;

static VALID_EMAIL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)+$",
    )
    .expect("email pattern is valid")
});

/// Boundary-format check only: local part, an `@`, and a dotted domain.
/// Says nothing about deliverability.
pub fn is_valid_email(input: &str) -> bool {
    VALID_EMAIL.is_match(input)
}
