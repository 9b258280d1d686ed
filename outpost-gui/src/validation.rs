//! Pure field checks shared by the sign-up and sign-in panels.

/// Whether the value is a RFC-compliant email address with a TLD.
pub fn email(value: &str) -> bool {
    email_address::EmailAddress::parse_with_options(
        value,
        email_address::Options::default().with_required_tld(),
    )
    .is_ok()
}

/// Whether the password is long enough (strictly more than 6 characters).
pub fn password(value: &str) -> bool {
    value.chars().count() > 6
}

/// Whether the password and its confirmation are the same.
pub fn matching(password: &str, confirmation: &str) -> bool {
    password == confirmation
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_format() {
        assert!(email("a@b.com"));
        assert!(email("user.name+tag@example.co.uk"));
        assert!(!email(""));
        assert!(!email("not-an-email"));
        assert!(!email("missing@tld"));
        assert!(!email("@example.com"));
    }

    #[test]
    fn password_length() {
        assert!(!password(""));
        assert!(!password("ab"));
        // exactly 6 is too short, the minimum is strictly more.
        assert!(!password("secret"));
        assert!(password("secret1"));
        // length is counted in characters, not bytes.
        assert!(password("pässwörd"));
    }

    #[test]
    fn password_confirmation() {
        assert!(matching("secret1", "secret1"));
        assert!(!matching("secret1", "secret2"));
        assert!(!matching("secret1", ""));
    }
}
