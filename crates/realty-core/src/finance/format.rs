/// Formats whole rupees with Indian digit grouping, e.g. `₹50,00,000`.
///
/// The last three digits form one group; everything above groups in pairs.
pub fn format_inr(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let sign = if amount < 0 { "-" } else { "" };

    if digits.len() <= 3 {
        return format!("{sign}₹{digits}");
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

    format!("{sign}₹{},{tail}", groups.join(","))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_lakhs_and_crores() {
        assert_eq!(format_inr(0), "₹0");
        assert_eq!(format_inr(999), "₹999");
        assert_eq!(format_inr(1_000), "₹1,000");
        assert_eq!(format_inr(43_391), "₹43,391");
        assert_eq!(format_inr(5_000_000), "₹50,00,000");
        assert_eq!(format_inr(125_000_000), "₹12,50,00,000");
    }

    #[test]
    fn negative_amounts_keep_sign_before_symbol() {
        assert_eq!(format_inr(-2_500), "-₹2,500");
        assert_eq!(format_inr(i64::MIN), "-₹92,23,37,20,36,85,47,75,808");
    }
}
