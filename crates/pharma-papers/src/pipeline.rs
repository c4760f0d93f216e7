//! Record normalization: raw PubMed articles to report rows.
//!
//! Purely functional over its input. An article yields a row if and only if
//! at least one author classifies as company-affiliated; everything else is
//! dropped silently.

use crate::heuristics::{ClassifierRules, classify, extract_email};
use crate::models::{ClassifiedAuthor, RawArticle, ReportRow};

/// Classify every author of an article, in original order.
///
/// Each affiliation string is classified independently; the first company
/// verdict wins for that author. The returned entry records the affiliation
/// the verdict was derived from (first one for non-company authors).
#[must_use]
pub fn classify_authors(rules: &ClassifierRules, article: &RawArticle) -> Vec<ClassifiedAuthor> {
    article
        .authors
        .iter()
        .map(|author| {
            for affiliation in &author.affiliations {
                let verdict = classify(rules, affiliation);
                if verdict.is_company {
                    return ClassifiedAuthor {
                        name: author.name.clone(),
                        affiliation: affiliation.clone(),
                        is_company: true,
                        company_name: verdict.company_name,
                    };
                }
            }
            ClassifiedAuthor {
                name: author.name.clone(),
                affiliation: author.affiliations.first().cloned().unwrap_or_default(),
                is_company: false,
                company_name: None,
            }
        })
        .collect()
}

/// Normalize one article into a report row.
///
/// Returns `None` when no author classifies as company-affiliated. Author
/// names are collected uniquely in first-seen order, company fragments are
/// deduplicated, and the first email found across authors (author order,
/// then affiliation order) becomes the corresponding email.
#[must_use]
pub fn normalize(rules: &ClassifierRules, article: &RawArticle) -> Option<ReportRow> {
    let mut non_academic_authors: Vec<String> = Vec::new();
    let mut company_affiliations: Vec<String> = Vec::new();
    let mut corresponding_email: Option<String> = None;

    for (author, classified) in article.authors.iter().zip(classify_authors(rules, article)) {
        if classified.is_company {
            if !non_academic_authors.contains(&classified.name) {
                non_academic_authors.push(classified.name);
            }
            if let Some(company) = classified.company_name {
                if !company_affiliations.contains(&company) {
                    company_affiliations.push(company);
                }
            }
        }

        // First email wins; later authors are classified but not searched.
        if corresponding_email.is_none() {
            corresponding_email =
                author.affiliations.iter().find_map(|aff| extract_email(aff));
        }
    }

    if non_academic_authors.is_empty() {
        return None;
    }

    Some(ReportRow {
        pmid: article.pmid.clone(),
        title: article.title_or_default().to_string(),
        pub_date: article.date_or_unknown().to_string(),
        non_academic_authors,
        company_affiliations,
        corresponding_email,
    })
}

/// Normalize a batch of articles, preserving input order.
#[must_use]
pub fn build_report(rules: &ClassifierRules, articles: &[RawArticle]) -> Vec<ReportRow> {
    let rows: Vec<ReportRow> =
        articles.iter().filter_map(|article| normalize(rules, article)).collect();

    tracing::debug!(
        articles = articles.len(),
        rows = rows.len(),
        "normalized articles into report rows"
    );

    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RawAuthor;

    fn rules() -> ClassifierRules {
        ClassifierRules::default()
    }

    fn article(authors: Vec<RawAuthor>) -> RawArticle {
        RawArticle {
            pmid: "100".into(),
            title: "Test".into(),
            pub_date: Some("2024 Jan".into()),
            authors,
        }
    }

    #[test]
    fn test_all_academic_yields_none() {
        let art = article(vec![
            RawAuthor::new("Smith, John", "Harvard University, Boston"),
            RawAuthor::new("Doe, Jane", "Mayo Clinic, Rochester"),
        ]);
        assert!(normalize(&rules(), &art).is_none());
    }

    #[test]
    fn test_no_authors_yields_none() {
        let art = article(Vec::new());
        assert!(normalize(&rules(), &art).is_none());
    }

    #[test]
    fn test_mixed_authors() {
        let art = article(vec![
            RawAuthor::new("Smith, John", "Pfizer Inc, USA"),
            RawAuthor::new("Doe, Jane", "Dept. of Medicine, Harvard University"),
        ]);
        let row = normalize(&rules(), &art).unwrap();
        assert_eq!(row.non_academic_authors, ["Smith, John"]);
        assert_eq!(row.company_affiliations, ["Pfizer Inc"]);
    }

    #[test]
    fn test_company_fragment_dedup() {
        let art = article(vec![
            RawAuthor::new("Smith, John", "Pfizer Inc, New York"),
            RawAuthor::new("Doe, Jane", "Pfizer Inc, New York"),
        ]);
        let row = normalize(&rules(), &art).unwrap();
        assert_eq!(row.non_academic_authors.len(), 2);
        assert_eq!(row.company_affiliations, ["Pfizer Inc"]);
    }

    #[test]
    fn test_duplicate_author_name_collapsed() {
        let art = article(vec![
            RawAuthor::new("Smith, John", "Moderna, Cambridge"),
            RawAuthor::new("Smith, John", "Moderna, Cambridge"),
        ]);
        let row = normalize(&rules(), &art).unwrap();
        assert_eq!(row.non_academic_authors, ["Smith, John"]);
    }

    #[test]
    fn test_first_email_wins_across_authors() {
        let art = article(vec![
            RawAuthor::new("Smith, John", "Harvard University. smith@harvard.edu"),
            RawAuthor::new("Doe, Jane", "Moderna, Cambridge. jane@modernatx.com"),
        ]);
        let row = normalize(&rules(), &art).unwrap();
        // The academic first author still supplies the email.
        assert_eq!(row.corresponding_email.as_deref(), Some("smith@harvard.edu"));
    }

    #[test]
    fn test_second_affiliation_classified() {
        let author = RawAuthor {
            name: "Iafusco, Fernanda".into(),
            affiliations: vec![
                "Dept. of Translational Medical Sciences, Federico II University".into(),
                "CEINGE Advanced Biotech".into(),
            ],
        };
        let row = normalize(&rules(), &article(vec![author])).unwrap();
        assert_eq!(row.non_academic_authors, ["Iafusco, Fernanda"]);
        assert_eq!(row.company_affiliations, ["CEINGE Advanced Biotech"]);
    }

    #[test]
    fn test_missing_date_becomes_unknown() {
        let mut art = article(vec![RawAuthor::new("A", "CEINGE Advanced Biotech")]);
        art.pub_date = None;
        let row = normalize(&rules(), &art).unwrap();
        assert_eq!(row.pub_date, "Unknown");
    }

    #[test]
    fn test_build_report_preserves_order() {
        let first = RawArticle {
            pmid: "1".into(),
            title: "First".into(),
            pub_date: None,
            authors: vec![RawAuthor::new("A", "Moderna, Cambridge")],
        };
        let academic = RawArticle {
            pmid: "2".into(),
            title: "Dropped".into(),
            pub_date: None,
            authors: vec![RawAuthor::new("B", "Uppsala University")],
        };
        let second = RawArticle {
            pmid: "3".into(),
            title: "Second".into(),
            pub_date: None,
            authors: vec![RawAuthor::new("C", "Acme Therapeutics")],
        };

        let rows = build_report(&rules(), &[first, academic, second]);
        let pmids: Vec<&str> = rows.iter().map(|r| r.pmid.as_str()).collect();
        assert_eq!(pmids, ["1", "3"]);
    }

    #[test]
    fn test_classify_authors_records_verdicts() {
        let art = article(vec![
            RawAuthor::new("Smith, John", "Pfizer Inc, USA"),
            RawAuthor::unaffiliated("Doe, Jane"),
        ]);
        let classified = classify_authors(&rules(), &art);
        assert_eq!(classified.len(), 2);
        assert!(classified[0].is_company);
        assert_eq!(classified[0].company_name.as_deref(), Some("Pfizer Inc"));
        assert!(!classified[1].is_company);
        assert!(classified[1].affiliation.is_empty());
    }
}
