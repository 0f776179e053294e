//! Plain listing of items and their purchase counts.
//!
//! Formats one `<name> <count>` row per item in listing order, followed by
//! a total line when the listing is not empty.

const TOTAL_LABEL: &str = "total";

pub fn render(items: &[(String, u64)]) -> String {
    if items.is_empty() {
        return String::from("No purchases recorded.\n");
    }

    let width = items
        .iter()
        .map(|(name, _)| name.chars().count())
        .chain(std::iter::once(TOTAL_LABEL.len()))
        .max()
        .unwrap_or(0);

    let mut output = String::new();
    let mut total: u64 = 0;

    for (name, count) in items {
        total = total.saturating_add(*count);
        output.push_str(&format!("{name:<width$} {count:>5}\n"));
    }

    output.push_str(&"-".repeat(width + 6));
    output.push('\n');
    output.push_str(&format!("{TOTAL_LABEL:<width$} {total:>5}\n"));

    output
}
