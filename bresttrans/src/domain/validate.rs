//! Field validation predicates shared by the entry and profile flows.

/// Returns true when `s` is non-empty and consists only of ASCII digits.
///
/// This is the gate for every count field on the entry form. There is
/// no upper bound: `"999999"` is as valid as `"0"`.
pub fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// Structural email check used at registration and profile save.
///
/// Exactly one `@`, a non-empty local part, and a domain containing an
/// interior dot. Deliverability is not this code's problem.
pub fn is_valid_email(s: &str) -> bool {
    let Some((local, domain)) = s.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') || s.chars().any(char::is_whitespace) {
        return false;
    }
    match domain.split_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

/// Prefix of every acceptable Drive folder link.
const DRIVE_FOLDER_PREFIX: &str = "https://drive.google.com/drive/folders/";

/// Checks that `s` is a Google Drive folder link.
///
/// The link must carry a non-empty folder segment and no whitespace.
pub fn is_valid_folder_link(s: &str) -> bool {
    match s.strip_prefix(DRIVE_FOLDER_PREFIX) {
        Some(rest) => !rest.is_empty() && !rest.chars().any(char::is_whitespace),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digits_accepts_any_magnitude() {
        assert!(is_digits("0"));
        assert!(is_digits("5"));
        assert!(is_digits("1234567890123456789"));
    }

    #[test]
    fn digits_rejects_mixed_and_empty() {
        assert!(!is_digits(""));
        assert!(!is_digits("3a"));
        assert!(!is_digits("a3"));
        assert!(!is_digits("1 2"));
        assert!(!is_digits("-1"));
        assert!(!is_digits("1.5"));
    }

    #[test]
    fn email_structure() {
        assert!(is_valid_email("surveyor@example.com"));
        assert!(is_valid_email("a.b@mail.ru"));
        assert!(!is_valid_email("surveyor"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("surveyor@com"));
        assert!(!is_valid_email("sur veyor@example.com"));
        assert!(!is_valid_email("a@b@example.com"));
        assert!(!is_valid_email("surveyor@.com"));
        assert!(!is_valid_email("surveyor@example."));
    }

    #[test]
    fn folder_link_shape() {
        assert!(is_valid_folder_link(
            "https://drive.google.com/drive/folders/1AbC_dEf"
        ));
        assert!(is_valid_folder_link(
            "https://drive.google.com/drive/folders/1AbC?usp=sharing"
        ));
        assert!(!is_valid_folder_link("https://drive.google.com/drive/folders/"));
        assert!(!is_valid_folder_link("https://example.com/folders/1AbC"));
        assert!(!is_valid_folder_link(
            "https://drive.google.com/drive/folders/1A bC"
        ));
        assert!(!is_valid_folder_link(""));
    }

    mod proptests {
        use super::super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn digit_strings_always_pass(s in "[0-9]{1,40}") {
                prop_assert!(is_digits(&s));
            }

            #[test]
            fn non_digit_byte_always_fails(
                prefix in "[0-9]{0,10}",
                bad in "[^0-9]",
                suffix in "[0-9]{0,10}",
            ) {
                let s = format!("{prefix}{bad}{suffix}");
                prop_assert!(!is_digits(&s));
            }
        }
    }
}
