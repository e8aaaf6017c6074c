/// `₹ 1,234.50` style amount, or `-` when missing.
pub fn currency(amount: Option<f64>) -> String {
    match amount {
        Some(value) => format!("₹ {}", group_thousands(value)),
        None => "-".to_string(),
    }
}

fn group_thousands(value: f64) -> String {
    let negative = value < 0.0;
    let fixed = format!("{:.2}", value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (idx, ch) in int_part.chars().enumerate() {
        if idx > 0 && (int_part.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("{}{}.{}", if negative { "-" } else { "" }, grouped, frac_part)
}

pub fn percent(value: Option<f64>) -> String {
    value
        .map(|v| format!("{:.1}%", v))
        .unwrap_or_else(|| "0%".to_string())
}

pub fn or_dash(value: Option<&str>) -> String {
    value
        .filter(|v| !v.trim().is_empty())
        .unwrap_or("-")
        .to_string()
}

/// Up to two initials from a display name.
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|part| part.chars().next())
        .take(2)
        .collect::<String>()
        .to_uppercase()
}

/// Splits comma-separated input into trimmed, non-empty entries.
pub fn split_list(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn file_size(bytes: Option<&serde_json::Value>) -> String {
    match bytes {
        Some(serde_json::Value::Number(n)) => match n.as_f64() {
            Some(size) if size >= 1024.0 * 1024.0 => format!("{:.1} MB", size / (1024.0 * 1024.0)),
            Some(size) if size >= 1024.0 => format!("{:.1} KB", size / 1024.0),
            Some(size) => format!("{} B", size as u64),
            None => "-".to_string(),
        },
        Some(serde_json::Value::String(s)) => s.clone(),
        _ => "-".to_string(),
    }
}
