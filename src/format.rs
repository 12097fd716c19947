// src/format.rs

/// `20000` -> `"$20,000"` (en-US grouping, no decimals).
pub fn format_currency(amount: u64) -> String {
    format!("${}", group_thousands(amount))
}

/// `12345` -> `"12,345"`
pub fn format_mileage(miles: u32) -> String {
    group_thousands(u64::from(miles))
}

/// Ten digit numbers become `(123) 456-7890`; anything else is returned as is.
pub fn format_phone_number(phone: &str) -> String {
    let digits: String = phone.chars().filter(char::is_ascii_digit).collect();
    if digits.len() != 10 {
        return phone.to_string();
    }
    format!("({}) {}-{}", &digits[0..3], &digits[3..6], &digits[6..10])
}

/// First `max_chars` characters followed by `...`.
pub fn truncate_description(text: &str, max_chars: usize) -> String {
    let mut out: String = text.chars().take(max_chars).collect();
    out.push_str("...");
    out
}

fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
