/// Uppercases the first character, leaving the rest untouched.
pub fn first_upper(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub fn first_lower(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Flips the case of the first character. Returns `None` when that changes
/// nothing (empty input, digits, caseless scripts).
pub fn flip_first_letter_case(value: &str) -> Option<String> {
    let first = value.chars().next()?;
    let flipped = if first.is_uppercase() {
        first_lower(value)
    } else {
        first_upper(value)
    };
    (flipped != value).then_some(flipped)
}
