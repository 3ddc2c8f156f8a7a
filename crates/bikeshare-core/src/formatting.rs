use unicode_width::UnicodeWidthStr;

/// Width of the rule line that closes every report section.
pub const RULE_WIDTH: usize = 40;

/// The `-` rule printed after each report section.
pub fn rule_line() -> String {
    "-".repeat(RULE_WIDTH)
}

/// Format a value the way the reports print raw quantities: integral values
/// without a fractional part, everything else with Rust's shortest
/// round-trip representation.
///
/// # Examples
///
/// ```
/// use bikeshare_core::formatting::format_value;
///
/// assert_eq!(format_value(600.0), "600");
/// assert_eq!(format_value(1392.972), "1392.972");
/// assert_eq!(format_value(0.0), "0");
/// ```
pub fn format_value(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

/// Format a number with thousands separators and a fixed number of decimals.
///
/// # Examples
///
/// ```
/// use bikeshare_core::formatting::format_number;
///
/// assert_eq!(format_number(1234.5, 1), "1,234.5");
/// assert_eq!(format_number(280871787.0, 0), "280,871,787");
/// assert_eq!(format_number(-9876.5, 1), "-9,876.5");
/// ```
pub fn format_number(value: f64, decimals: usize) -> String {
    let fixed = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (fixed.as_str(), None),
    };

    let mut out = String::new();
    if value < 0.0 && fixed.chars().any(|c| c.is_ascii_digit() && c != '0') {
        out.push('-');
    }
    out.push_str(&group_thousands(int_part));
    if let Some(frac) = frac_part {
        out.push('.');
        out.push_str(frac);
    }
    out
}

/// Humanise a number of seconds as days/hours/minutes/seconds.
///
/// Leading zero units are omitted; fractional seconds are rounded.
///
/// # Examples
///
/// ```
/// use bikeshare_core::formatting::format_duration;
///
/// assert_eq!(format_duration(45.0), "45s");
/// assert_eq!(format_duration(3600.0), "1h 0m 0s");
/// assert_eq!(format_duration(90061.4), "1d 1h 1m 1s");
/// ```
pub fn format_duration(seconds: f64) -> String {
    let total = seconds.max(0.0).round() as u64;
    let days = total / 86_400;
    let hours = (total % 86_400) / 3_600;
    let minutes = (total % 3_600) / 60;
    let secs = total % 60;

    if days > 0 {
        format!("{}d {}h {}m {}s", days, hours, minutes, secs)
    } else if hours > 0 {
        format!("{}h {}m {}s", hours, minutes, secs)
    } else if minutes > 0 {
        format!("{}m {}s", minutes, secs)
    } else {
        format!("{}s", secs)
    }
}

// ── Column layout ─────────────────────────────────────────────────────────────

/// Pad `text` with spaces to `width` terminal columns.
///
/// Width is measured in display cells, so station names with wide glyphs
/// still line up. Text already wider than `width` is returned unchanged.
pub fn pad(text: &str, width: usize, align_right: bool) -> String {
    let fill = width.saturating_sub(text.width());
    if align_right {
        format!("{}{}", " ".repeat(fill), text)
    } else {
        format!("{}{}", text, " ".repeat(fill))
    }
}

/// Lay out `rows` under `headers` as space-separated, aligned columns.
///
/// The first column is right-aligned (it carries the row index); all other
/// columns are left-aligned. Returns one string per output line, header
/// first.
pub fn render_table(headers: &[String], rows: &[Vec<String>]) -> Vec<String> {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.width()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            if i < widths.len() {
                widths[i] = widths[i].max(cell.width());
            } else {
                widths.push(cell.width());
            }
        }
    }

    let render_line = |cells: &[String]| -> String {
        let parts: Vec<String> = widths
            .iter()
            .enumerate()
            .map(|(i, &w)| {
                let cell = cells.get(i).map(String::as_str).unwrap_or("");
                pad(cell, w, i == 0)
            })
            .collect();
        parts.join("  ").trim_end().to_string()
    };

    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(render_line(headers));
    lines.extend(rows.iter().map(|r| render_line(r)));
    lines
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// Insert commas every three digits from the right of an integer string.
fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i != 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
