//! Bordered text table of sport totals.

use polar_flow_client::SportResult;

pub const HEADERS: [&str; 5] = ["Sport", "Distance", "Duration", "Count", "Ascent"];

/// `HH:MM:SS`, hours keep growing past 99.
pub fn format_duration(seconds: u64) -> String {
    let (minutes, seconds) = (seconds / 60, seconds % 60);
    let (hours, minutes) = (minutes / 60, minutes % 60);
    format!("{hours:02}:{minutes:02}:{seconds:02}")
}

/// Kilometers rounded to two decimals (ties to even), always showing at
/// least one.
pub fn format_distance(km: f64) -> String {
    let fixed = format!("{km:.2}");
    let trimmed = fixed.trim_end_matches('0');
    if trimmed.ends_with('.') {
        format!("{trimmed}0")
    } else {
        trimmed.to_string()
    }
}

/// Center `cell` in `width` columns. With an odd amount of padding the extra
/// space goes left for even-length text and right for odd-length text.
fn center(cell: &str, width: usize) -> String {
    let len = cell.chars().count();
    let excess = width.saturating_sub(len);
    let (left, right) = if excess % 2 == 1 && len % 2 == 0 {
        (excess / 2 + 1, excess / 2)
    } else {
        (excess / 2, excess - excess / 2)
    };
    format!("{}{cell}{}", " ".repeat(left), " ".repeat(right))
}

/// One row per result with a non-zero session count.
pub fn rows(results: &[SportResult]) -> Vec<[String; 5]> {
    results
        .iter()
        .filter(|r| r.count != 0)
        .map(|r| {
            [
                r.name.clone(),
                format_distance(r.distance),
                format_duration(r.duration),
                r.count.to_string(),
                r.ascent.to_string(),
            ]
        })
        .collect()
}

pub fn render(results: &[SportResult]) -> String {
    let rows = rows(results);
    let mut widths = HEADERS.map(str::len);
    for row in &rows {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = (*w).max(cell.chars().count());
        }
    }

    let border = widths.iter().fold(String::from("+"), |mut acc, w| {
        acc.push_str(&"-".repeat(w + 2));
        acc.push('+');
        acc
    });
    let line = |cells: &[&str]| {
        let mut acc = String::from("|");
        for (cell, &w) in cells.iter().zip(&widths) {
            acc.push(' ');
            acc.push_str(&center(cell, w));
            acc.push_str(" |");
        }
        acc
    };

    let mut out = vec![border.clone(), line(&HEADERS), border.clone()];
    for row in &rows {
        let cells: Vec<&str> = row.iter().map(String::as_str).collect();
        out.push(line(&cells));
    }
    out.push(border);
    out.join("\n")
}
