//! Field formatters for the entry form.
//!
//! Both functions take raw keystrokes and return the canonical stored text.
//! They are pure and tolerate partial input, since they run on every input
//! event while the user is still typing.

use regex::Regex;

/// Groups an amount with a dot every three digits, counting from the right.
///
/// All non-digit characters are stripped first, so the function is idempotent
/// over its own output: `"1234567"` and `"1.234.567"` both format to
/// `"1.234.567"`.
pub fn format_amount(raw: &str) -> String {
    let digits = Regex::new(r"\D").unwrap().replace_all(raw, "");
    let digits = digits.as_ref();
    if digits.is_empty() {
        return String::new();
    }

    let lead = digits.len() % 3;
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i != 0 && i % 3 == lead {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    grouped
}

/// Renders a phone number as `+7-XXX-XXX-XX-XX`, growing group by group.
///
/// Non-digits are stripped, a leading `7` is prepended when missing, and
/// anything past eleven digits is ignored. Fewer than eleven digits yield a
/// partial pattern rather than an error, so the mask stays stable while the
/// user types.
pub fn format_telephone(raw: &str) -> String {
    let mut digits = Regex::new(r"\D").unwrap().replace_all(raw, "").into_owned();
    if !digits.starts_with('7') {
        digits.insert(0, '7');
    }
    digits.truncate(11);

    let mut formatted = format!("+{}", &digits[..1]);
    for (start, end) in [(1usize, 4usize), (4, 7), (7, 9), (9, 11)] {
        if digits.len() > start {
            formatted.push('-');
            formatted.push_str(&digits[start..digits.len().min(end)]);
        }
    }
    formatted
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn amount_groups_from_the_right() {
        assert_eq!(format_amount("1234567"), "1.234.567");
        assert_eq!(format_amount("1500"), "1.500");
        assert_eq!(format_amount("123"), "123");
        assert_eq!(format_amount("123456"), "123.456");
    }

    #[test]
    fn amount_strips_non_digits() {
        assert_eq!(format_amount("1a2b3c4"), "1.234");
        assert_eq!(format_amount("$ 9,999"), "9.999");
        assert_eq!(format_amount(""), "");
        assert_eq!(format_amount("abc"), "");
    }

    #[test]
    fn amount_formatting_is_idempotent() {
        for raw in ["1234567", "1.500", "12", "", "007", "9.999.999"] {
            let once = format_amount(raw);
            assert_eq!(format_amount(&once), once, "input {raw:?}");
        }
    }

    #[test]
    fn telephone_formats_a_full_number() {
        assert_eq!(format_telephone("79123456789"), "+7-912-345-67-89");
        assert_eq!(format_telephone("+7 (912) 345-67-89"), "+7-912-345-67-89");
    }

    #[test]
    fn telephone_prepends_seven_when_missing() {
        assert_eq!(format_telephone("9123456789"), "+7-912-345-67-89");
        assert_eq!(format_telephone("8912345"), "+7-891-234-5");
    }

    #[test]
    fn telephone_grows_with_partial_input() {
        assert_eq!(format_telephone(""), "+7");
        assert_eq!(format_telephone("7"), "+7");
        assert_eq!(format_telephone("79"), "+7-9");
        assert_eq!(format_telephone("7912"), "+7-912");
        assert_eq!(format_telephone("79123"), "+7-912-3");
        assert_eq!(format_telephone("791234567"), "+7-912-345-67");
    }

    #[test]
    fn telephone_ignores_digits_past_eleven() {
        assert_eq!(format_telephone("791234567890000"), "+7-912-345-67-89");
    }

    #[test]
    fn full_numbers_always_match_the_mask() {
        for raw in ["79123456789", "00000000000", "89999999999", "12345678901"] {
            let formatted = format_telephone(raw);
            assert!(
                formatted.starts_with("+7-"),
                "input {raw:?} gave {formatted:?}"
            );
            let groups: Vec<usize> = formatted[1..].split('-').map(str::len).collect();
            assert_eq!(groups, vec![1, 3, 3, 2, 2], "input {raw:?} gave {formatted:?}");
        }
    }
}
