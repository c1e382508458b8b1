//! Textual rendering of measurement counts.
//!
//! Purely presentational: nothing here feeds back into the solve pipeline.

use crate::backend::Counts;

const BAR_WIDTH: usize = 40;

/// Sum of all observed frequencies.
pub fn total_shots(counts: &Counts) -> u64 {
    counts.values().sum()
}

/// Render counts as a bar chart, one bitstring per line, sorted by bitstring.
pub fn render(counts: &Counts) -> String {
    if counts.is_empty() {
        return String::from("(no shots)\n");
    }

    let mut rows: Vec<(&String, u64)> = counts.iter().map(|(k, &v)| (k, v)).collect();
    rows.sort_by(|a, b| a.0.cmp(b.0));

    let total = total_shots(counts);
    let max = rows.iter().map(|&(_, count)| count).max().unwrap_or(1);

    let mut out = String::new();
    for (bits, count) in rows {
        let bar_len = ((count as f64 / max as f64) * BAR_WIDTH as f64).round() as usize;
        let percent = 100.0 * count as f64 / total as f64;
        out.push_str(&format!(
            "{bits}  {count:>6}  {percent:>5.1}%  {}\n",
            "█".repeat(bar_len)
        ));
    }
    out
}
