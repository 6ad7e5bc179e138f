/// Format a whole-peso amount the way es-CO renders COP: currency symbol,
/// no decimals, dot as the thousands separator. `1_000_000` becomes
/// `"$ 1.000.000"`.
pub fn format_cop(value: i64) -> String {
    let sign = if value < 0 { "-" } else { "" };
    format!("{sign}$ {}", group_thousands(value.unsigned_abs()))
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    out
}
