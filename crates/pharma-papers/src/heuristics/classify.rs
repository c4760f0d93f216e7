//! Company-vs-academic classification of a single affiliation string.

use super::rules::ClassifierRules;

/// Verdict for one affiliation string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    /// Whether the affiliation classifies as a company.
    pub is_company: bool,

    /// Extracted company name, when one was found.
    pub company_name: Option<String>,
}

impl Classification {
    /// A non-company verdict.
    #[must_use]
    pub const fn non_company() -> Self {
        Self { is_company: false, company_name: None }
    }

    /// A company verdict with an optional extracted name.
    #[must_use]
    pub const fn company(company_name: Option<String>) -> Self {
        Self { is_company: true, company_name }
    }
}

/// What a single rule concluded about an affiliation.
enum RuleVerdict {
    Company { name: Option<String> },
    Academic,
}

/// A classification rule: inspects the affiliation (original and lowercased)
/// and either reaches a verdict or abstains.
type Rule = fn(&ClassifierRules, &str, &str) -> Option<RuleVerdict>;

/// Ordered rule table, evaluated first-match-wins. The academic exclusion
/// sits between the known-company and industry-keyword rules so hybrid names
/// like "University Biotech Center" stay academic.
const RULE_TABLE: &[(&str, Rule)] = &[
    ("known-company", known_company),
    ("academic-exclusion", academic_exclusion),
    ("industry-keyword", industry_keyword),
];

/// Classify one affiliation string.
///
/// Pure function of the input: case-insensitive matching, original casing
/// preserved in any extracted name. Empty or whitespace-only input is never
/// a company.
#[must_use]
pub fn classify(rules: &ClassifierRules, affiliation: &str) -> Classification {
    let original = affiliation.trim();
    if original.is_empty() {
        return Classification::non_company();
    }
    let lower = original.to_lowercase();

    for (rule_name, rule) in RULE_TABLE {
        if let Some(verdict) = rule(rules, original, &lower) {
            tracing::trace!(rule = rule_name, affiliation = original, "rule matched");
            return match verdict {
                RuleVerdict::Company { name } => Classification::company(name),
                RuleVerdict::Academic => Classification::non_company(),
            };
        }
    }

    Classification::non_company()
}

fn known_company(rules: &ClassifierRules, original: &str, lower: &str) -> Option<RuleVerdict> {
    for company in rules.known_companies() {
        if lower.contains(company.as_str()) {
            return Some(RuleVerdict::Company { name: fragment_containing(original, company) });
        }
    }
    None
}

fn academic_exclusion(rules: &ClassifierRules, _original: &str, lower: &str) -> Option<RuleVerdict> {
    rules
        .academic_keywords()
        .iter()
        .any(|keyword| lower.contains(keyword.as_str()))
        .then_some(RuleVerdict::Academic)
}

fn industry_keyword(rules: &ClassifierRules, original: &str, lower: &str) -> Option<RuleVerdict> {
    for keyword in rules.industry_keywords() {
        if lower.contains(keyword.as_str()) {
            // Suffix keywords carry a leading space; strip it before locating
            // the fragment the keyword sits in.
            let name = fragment_containing(original, keyword.trim_start());
            return Some(RuleVerdict::Company { name });
        }
    }
    None
}

/// Smallest comma/semicolon-delimited fragment of `original` containing
/// `needle` (case-insensitive), trimmed, original casing preserved.
fn fragment_containing(original: &str, needle: &str) -> Option<String> {
    original
        .split([',', ';'])
        .map(str::trim)
        .find(|fragment| fragment.to_lowercase().contains(needle))
        .map(ToString::to_string)
}
