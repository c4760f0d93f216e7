//! Report rendering.
//!
//! Fixed column order: PubmedID, Title, Publication Date, Non-academic
//! Author(s), Company Affiliation(s), Corresponding Author Email.

mod csv;
mod json;

use std::path::Path;

use crate::error::PipelineResult;

pub use csv::format_report_csv;
pub use json::format_report_json;

/// Write rendered output to a file, or stdout when no path is given.
///
/// # Errors
///
/// Returns error if the file cannot be written.
pub fn write_report(output: &str, path: Option<&Path>) -> PipelineResult<()> {
    match path {
        Some(path) => std::fs::write(path, output)?,
        None => {
            use std::io::Write;
            std::io::stdout().write_all(output.as_bytes())?;
        }
    }
    Ok(())
}
