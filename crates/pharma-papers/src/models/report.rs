//! Normalized report entities produced by the classification pipeline.

use serde::Serialize;

/// One author after affiliation classification.
#[derive(Debug, Clone, Serialize)]
pub struct ClassifiedAuthor {
    /// Author display name.
    pub name: String,

    /// The affiliation string the verdict was derived from.
    pub affiliation: String,

    /// Whether the affiliation classifies as a company.
    pub is_company: bool,

    /// Extracted company name, when one was found.
    pub company_name: Option<String>,
}

/// One normalized report row per article with at least one company author.
#[derive(Debug, Clone, Serialize)]
pub struct ReportRow {
    /// PubMed identifier.
    pub pmid: String,

    /// Article title.
    pub title: String,

    /// Publication date, "Unknown" when the record carried none.
    pub pub_date: String,

    /// Company-affiliated author names, unique, in first-seen order.
    pub non_academic_authors: Vec<String>,

    /// Distinct company affiliation fragments, in first-seen order.
    pub company_affiliations: Vec<String>,

    /// First contact email found across the article's authors.
    pub corresponding_email: Option<String>,
}

impl ReportRow {
    /// Author names joined for columnar rendering.
    #[must_use]
    pub fn authors_joined(&self) -> String {
        self.non_academic_authors.join("; ")
    }

    /// Company affiliations joined for columnar rendering.
    #[must_use]
    pub fn affiliations_joined(&self) -> String {
        self.company_affiliations.join("; ")
    }

    /// Email column value, empty when absent.
    #[must_use]
    pub fn email_or_empty(&self) -> &str {
        self.corresponding_email.as_deref().unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_join_helpers() {
        let row = ReportRow {
            pmid: "123".into(),
            title: "T".into(),
            pub_date: "Unknown".into(),
            non_academic_authors: vec!["Smith, John".into(), "Doe, Jane".into()],
            company_affiliations: vec!["Pfizer Inc".into()],
            corresponding_email: None,
        };
        assert_eq!(row.authors_joined(), "Smith, John; Doe, Jane");
        assert_eq!(row.affiliations_joined(), "Pfizer Inc");
        assert_eq!(row.email_or_empty(), "");
    }
}
