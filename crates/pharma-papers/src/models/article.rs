//! Raw bibliographic records as delivered by PubMed EFetch.

use serde::{Deserialize, Serialize};

/// An author entry from a PubMed article record.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawAuthor {
    /// Display name ("LastName, ForeName" as PubMed lists it).
    pub name: String,

    /// Affiliation strings attached to this author.
    ///
    /// PubMed records zero or more `AffiliationInfo` entries per author;
    /// each is classified independently.
    #[serde(default)]
    pub affiliations: Vec<String>,
}

impl RawAuthor {
    /// Create an author with a single affiliation, mainly for tests.
    #[must_use]
    pub fn new(name: impl Into<String>, affiliation: impl Into<String>) -> Self {
        Self { name: name.into(), affiliations: vec![affiliation.into()] }
    }

    /// Create an author with no affiliation.
    #[must_use]
    pub fn unaffiliated(name: impl Into<String>) -> Self {
        Self { name: name.into(), affiliations: Vec::new() }
    }
}

/// A raw article record from PubMed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawArticle {
    /// PubMed identifier (numeric ID as text).
    pub pmid: String,

    /// Article title.
    #[serde(default)]
    pub title: String,

    /// Publication date as PubMed renders it ("2023 Mar 15", possibly partial).
    #[serde(default)]
    pub pub_date: Option<String>,

    /// Authors in the order PubMed lists them.
    #[serde(default)]
    pub authors: Vec<RawAuthor>,
}

impl RawArticle {
    /// Get the title, falling back to "Untitled" if empty.
    #[must_use]
    pub fn title_or_default(&self) -> &str {
        if self.title.is_empty() { "Untitled" } else { &self.title }
    }

    /// Get the publication date, substituting "Unknown" when absent or empty.
    #[must_use]
    pub fn date_or_unknown(&self) -> &str {
        match self.pub_date.as_deref() {
            Some(d) if !d.trim().is_empty() => d,
            _ => "Unknown",
        }
    }
}
