//! Rupee formatting helpers for renderers.

/// Group a non-negative rupee amount with Indian digit grouping:
/// the last three digits, then groups of two (`100000` → `1,00,000`).
pub fn group_rupees(value: u64) -> String {
    let digits = value.to_string();
    if digits.len() <= 3 {
        return digits;
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups = Vec::new();
    let mut rest = head;
    while rest.len() > 2 {
        let cut = rest.len() - 2;
        groups.push(rest[cut..].to_string());
        rest = &rest[..cut];
    }
    if !rest.is_empty() {
        groups.push(rest.to_string());
    }
    groups.reverse();

    format!("{},{}", groups.join(","), tail)
}

/// Format a signed amount with the rupee sign: `-1500` → `-₹1,500`.
pub fn format_rupees(amount: i64) -> String {
    if amount < 0 {
        format!("-₹{}", group_rupees(amount.unsigned_abs()))
    } else {
        format!("₹{}", group_rupees(amount as u64))
    }
}
