pub const SAUDI_DIAL_CODE: &str = "+966";
pub const LOCAL_MOBILE_DIGITS: usize = 9;

pub fn digits_only(input: &str) -> String {
    input.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Groups a mobile number as `XXX XXX XXX`, keeping at most nine digits.
pub fn format_mobile(input: &str) -> String {
    let digits: String = digits_only(input)
        .chars()
        .take(LOCAL_MOBILE_DIGITS)
        .collect();

    match digits.len() {
        0..=3 => digits,
        4..=6 => format!("{} {}", &digits[..3], &digits[3..]),
        _ => format!("{} {} {}", &digits[..3], &digits[3..6], &digits[6..]),
    }
}

/// The nine local digits of a number given in local or `+966` form.
pub fn local_digits(phone: &str) -> String {
    let trimmed = phone.trim();
    let rest = trimmed.strip_prefix(SAUDI_DIAL_CODE).unwrap_or(trimmed);
    digits_only(rest)
}

/// Local digits capped at nine, the form every stored mobile number uses.
pub fn normalize_mobile(input: &str) -> String {
    local_digits(input).chars().take(LOCAL_MOBILE_DIGITS).collect()
}

pub fn to_international(local: &str) -> String {
    format!("{}{}", SAUDI_DIAL_CODE, normalize_mobile(local))
}

pub fn same_mobile(a: &str, b: &str) -> bool {
    let a = local_digits(a);
    !a.is_empty() && a == local_digits(b)
}
