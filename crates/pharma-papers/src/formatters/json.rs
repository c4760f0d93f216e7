//! JSON output formatting.

use crate::error::PipelineResult;
use crate::models::ReportRow;

/// Format report rows as pretty-printed JSON.
///
/// # Errors
///
/// Returns error if serialization fails.
pub fn format_report_json(rows: &[ReportRow]) -> PipelineResult<String> {
    Ok(serde_json::to_string_pretty(rows)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_round_trips_fields() {
        let rows = vec![ReportRow {
            pmid: "123".into(),
            title: "T".into(),
            pub_date: "2024 Jan".into(),
            non_academic_authors: vec!["Smith, John".into()],
            company_affiliations: vec!["Pfizer Inc".into()],
            corresponding_email: Some("smith@pfizer.com".into()),
        }];

        let output = format_report_json(&rows).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed[0]["pmid"], "123");
        assert_eq!(parsed[0]["non_academic_authors"][0], "Smith, John");
        assert_eq!(parsed[0]["corresponding_email"], "smith@pfizer.com");
    }

    #[test]
    fn test_empty_report() {
        assert_eq!(format_report_json(&[]).unwrap(), "[]");
    }
}
