use advocates::records::Record;
use advocates::table::TableModel;
use advocates::ui::BrowseOutcome;
use anyhow::Result;
use serde_json::json;

const LIST_SEPARATOR: &str = ", ";

/// Print a plain-text representation of the browse outcome.
pub(crate) fn print_plain(outcome: &BrowseOutcome) {
    if !outcome.accepted {
        println!("Search cancelled (query: '{}')", outcome.query);
        return;
    }

    match &outcome.selection {
        Some(record) => println!("{}", describe(record)),
        None => println!("No selection"),
    }
}

fn describe(record: &Record) -> String {
    let mut line = record.full_name();
    for part in [&record.degree, &record.city] {
        if !part.is_empty() {
            line.push_str(", ");
            line.push_str(part);
        }
    }
    if let Some(phone) = record.phone_number {
        line.push_str(&format!(" ({phone})"));
    }
    line
}

pub(crate) fn format_outcome_json(outcome: &BrowseOutcome) -> Result<String> {
    Ok(serde_json::to_string_pretty(outcome)?)
}

pub(crate) fn print_json(outcome: &BrowseOutcome) -> Result<()> {
    println!("{}", format_outcome_json(outcome)?);
    Ok(())
}

/// Tab-separated table: one header line, then one line per displayed record
/// with list cells joined by commas.
pub(crate) fn format_listing_plain(model: &TableModel) -> String {
    let mut out = model.headers.join("\t");
    out.push('\n');
    for row in &model.rows {
        let cells = row
            .cells
            .iter()
            .map(|cell| cell.joined(LIST_SEPARATOR))
            .collect::<Vec<_>>();
        out.push_str(&cells.join("\t"));
        out.push('\n');
    }
    out
}

pub(crate) fn print_listing_plain(model: &TableModel) {
    print!("{}", format_listing_plain(model));
}

pub(crate) fn format_listing_json<'a>(
    query: &str,
    total: usize,
    records: impl IntoIterator<Item = &'a Record>,
) -> Result<String> {
    let records = records.into_iter().collect::<Vec<_>>();
    let payload = json!({
        "query": query,
        "total": total,
        "shown": records.len(),
        "data": records,
    });
    Ok(serde_json::to_string_pretty(&payload)?)
}

/// Print the displayed records as `{ query, total, shown, data: [...] }`.
pub(crate) fn print_listing_json<'a>(
    query: &str,
    total: usize,
    records: impl IntoIterator<Item = &'a Record>,
) -> Result<()> {
    println!("{}", format_listing_json(query, total, records)?);
    Ok(())
}
