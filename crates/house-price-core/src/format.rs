//! Price formatting

/// Format a price as Indian rupees with no fraction digits
///
/// Uses Indian digit grouping: the last three digits form one group, the
/// rest are grouped in pairs (`4200000` → `₹42,00,000`).
pub fn format_inr(price: f64) -> String {
    if !price.is_finite() {
        return format!("₹{}", price);
    }

    let rounded = price.round();
    let digits = format!("{:.0}", rounded.abs());
    let sign = if rounded < 0.0 { "-" } else { "" };

    format!("{}₹{}", sign, group_indian(&digits))
}

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
