const SPINNER_FRAMES: [&str; 4] = ["|", "/", "-", "\\"];

/// Spinner glyph for the loading tick, advancing every other frame
pub fn spinner_frame(tick: u64) -> &'static str {
    SPINNER_FRAMES[(tick / 2) as usize % SPINNER_FRAMES.len()]
}

/// Dollar amount with thousands separators, e.g. `$2,787,965,087`
pub fn format_revenue(revenue: f64) -> String {
    let whole = revenue.max(0.0).round() as u64;
    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    format!("${}", grouped)
}
