//! Number and paragraph formatting for view bodies.

/// `2431620` → `"2,431,620"`.
pub fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        grouped.push('-');
    }
    for (idx, c) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

/// Growth percentages keep at least one decimal, so `100.0` stays `"100.0"`.
pub fn format_growth(percent: f64) -> String {
    if percent.fract() == 0.0 {
        format!("{percent:.1}")
    } else {
        percent.to_string()
    }
}

/// Greedy word wrap on character counts. Words longer than `width` get a
/// line of their own.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        let needed = if current.is_empty() {
            word.chars().count()
        } else {
            current.chars().count() + 1 + word.chars().count()
        };
        if needed > width && !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1_000), "1,000");
        assert_eq!(group_thousands(2_431_620), "2,431,620");
        assert_eq!(group_thousands(-14_462_724), "-14,462,724");
    }

    #[test]
    fn test_format_growth() {
        assert_eq!(format_growth(566.67), "566.67");
        assert_eq!(format_growth(100.0), "100.0");
        assert_eq!(format_growth(-12.5), "-12.5");
    }

    #[test]
    fn test_wrap() {
        let lines = wrap("Le Bénin a accédé à l'indépendance le 1er août 1960", 20);
        assert_eq!(
            lines,
            vec!["Le Bénin a accédé à", "l'indépendance le", "1er août 1960"]
        );
        assert!(lines.iter().all(|l| l.chars().count() <= 20));
    }

    #[test]
    fn test_wrap_long_word_and_empty() {
        assert_eq!(wrap("anticonstitutionnellement", 5), vec!["anticonstitutionnellement"]);
        assert!(wrap("   ", 10).is_empty());
    }
}
