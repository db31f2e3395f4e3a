use chrono::NaiveDate;

/// US-dollar amount with thousands separators and no cents, e.g. `$45,200,000`.
pub fn format_usd(amount: u64) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    out.push('$');
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// One-decimal percentage, e.g. `-38.4%`.
pub fn format_return(pct: f64) -> String {
    format!("{pct:.1}%")
}

/// Short month form used in the client table, e.g. `Jun 28, 2024`.
pub fn format_contact_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}
