//! CSV output formatting.

use crate::models::ReportRow;

/// Report header row.
const HEADER: &str =
    "PubmedID,Title,Publication Date,Non-academic Author(s),Company Affiliation(s),Corresponding Author Email";

/// Format report rows as CSV, header included.
#[must_use]
pub fn format_report_csv(rows: &[ReportRow]) -> String {
    let mut output = String::new();
    output.push_str(HEADER);
    output.push('\n');

    for row in rows {
        let fields = [
            csv_escape(&row.pmid),
            csv_escape(&row.title),
            csv_escape(&row.pub_date),
            csv_escape(&row.authors_joined()),
            csv_escape(&row.affiliations_joined()),
            csv_escape(row.email_or_empty()),
        ];
        output.push_str(&fields.join(","));
        output.push('\n');
    }

    output
}

/// Escape a string for CSV output.
fn csv_escape(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') || s.contains('\r') {
        // Prefix with single quote to prevent formula injection in spreadsheets
        let escaped = s.replace('"', "\"\"");
        if escaped.starts_with('=')
            || escaped.starts_with('+')
            || escaped.starts_with('-')
            || escaped.starts_with('@')
        {
            format!("\"'{escaped}\"")
        } else {
            format!("\"{escaped}\"")
        }
    } else if s.starts_with('=') || s.starts_with('+') || s.starts_with('-') || s.starts_with('@') {
        // Prevent CSV injection
        format!("'{s}")
    } else {
        s.to_string()
    }
}
