//! Indian-rupee formatting.

/// Format a rupee amount the way the dashboard shows it: whole rupees with
/// lakh/crore digit grouping (`1234567.8` -> `₹12,34,568`).
///
/// Non-finite input renders as `₹0`.
pub fn format_inr(value: f64) -> String {
    if !value.is_finite() {
        return "₹0".to_string();
    }

    let rounded = value.round();
    let digits = format!("{:.0}", rounded.abs());
    let sign = if rounded < 0.0 { "-" } else { "" };
    format!("{sign}₹{}", group_indian(&digits))
}

/// Last three digits form one group; everything before is grouped in pairs.
fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();

    format!("{},{}", groups.join(","), tail)
}
