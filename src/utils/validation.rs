//! String predicates
//!
//! Character-level checks shared by the field validators.

/// Length in Unicode scalar values, not bytes.
pub fn char_len(input: &str) -> usize {
    input.chars().count()
}

/// Checks the `local@domain.tld` shape.
///
/// No whitespace anywhere, exactly one `@` with a non-empty local part, and a
/// domain containing a `.` that has at least one character on each side.
pub fn is_well_formed_email(input: &str) -> bool {
    if input.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = input.split_once('@') else {
        return false;
    };

    if local.is_empty() || domain.contains('@') {
        return false;
    }

    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

pub fn has_ascii_uppercase(input: &str) -> bool {
    input.chars().any(|c| c.is_ascii_uppercase())
}

pub fn has_ascii_digit(input: &str) -> bool {
    input.chars().any(|c| c.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_len_counts_scalars() {
        assert_eq!(char_len("abc"), 3);
        assert_eq!(char_len("Zoë"), 3);
        assert_eq!(char_len(""), 0);
    }

    #[test]
    fn test_accepts_plain_addresses() {
        assert!(is_well_formed_email("a@b.com"));
        assert!(is_well_formed_email("first.last@mail.example.org"));
        assert!(is_well_formed_email("x@y.z"));
    }

    #[test]
    fn test_rejects_malformed_addresses() {
        assert!(!is_well_formed_email("plainaddress"));
        assert!(!is_well_formed_email("@b.com"));
        assert!(!is_well_formed_email("a@@b.com"));
        assert!(!is_well_formed_email("a@b@c.com"));
        assert!(!is_well_formed_email("a@bcom"));
        assert!(!is_well_formed_email("a@.com"));
        assert!(!is_well_formed_email("a@b."));
        assert!(!is_well_formed_email("a b@c.com"));
        assert!(!is_well_formed_email("a@b.com "));
    }

    #[test]
    fn test_character_classes() {
        assert!(has_ascii_uppercase("abC"));
        assert!(!has_ascii_uppercase("abc1"));
        assert!(has_ascii_digit("ab9"));
        assert!(!has_ascii_digit("abc"));
    }
}
