//! Curated term sets driving affiliation classification.

/// Known pharmaceutical/biotech companies, matched as lowercase substrings.
const KNOWN_COMPANIES: &[&str] = &[
    "pfizer",
    "merck",
    "novartis",
    "roche",
    "sanofi",
    "gsk",
    "glaxosmithkline",
    "astrazeneca",
    "johnson & johnson",
    "j&j",
    "janssen",
    "lilly",
    "eli lilly",
    "abbvie",
    "bristol myers squibb",
    "bms",
    "gilead",
    "amgen",
    "biogen",
    "regeneron",
    "moderna",
    "vertex",
    "bayer",
    "boehringer ingelheim",
    "genentech",
    "takeda",
    "novo nordisk",
    "astellas",
    "daiichi sankyo",
    "celgene",
    "servier",
    "teva",
    "otsuka",
    "eisai",
    "alexion",
    "biomarin",
    "incyte",
    "illumina",
    "iqvia",
    "medimmune",
    "grail",
    "23andme",
    "beam",
    "editas",
    "crispr",
    "intellia",
    "allogene",
    "sarepta",
    "bluebird bio",
    "sage therapeutics",
    "alnylam",
    "mirati",
    "seagen",
    "blueprint medicines",
    "acceleron",
    "exelixis",
    "guardant health",
    "applied therapeutics",
];

/// Academic institution markers. A hit here vetoes the industry keywords.
const ACADEMIC_KEYWORDS: &[&str] = &[
    "university",
    "college",
    "institute",
    "school of medicine",
    "academy",
    "hospital",
    "medical center",
    "clinic",
    "medical school",
    "faculty",
    "dept",
    "department of",
    "center for",
    "research center",
    "national institute",
    "foundation",
    "laboratory of",
    "health system",
];

/// Generic industry markers checked after the academic veto.
///
/// Corporate-suffix entries carry a leading space so "inc" cannot fire
/// inside words like "Princeton".
const INDUSTRY_KEYWORDS: &[&str] = &[
    "pharma",
    "pharmaceutical",
    "therapeutics",
    "biopharm",
    "biotech",
    "biologics",
    "laboratories",
    "medicines",
    "vaccines",
    "health products",
    "bioscience",
    "life science",
    "biopharma",
    "genomics",
    "diagnostics",
    "medical technology",
    "biotechnology",
    " inc",
    " ltd",
    " llc",
    " corp",
    " gmbh",
    " s.a.",
    " co.",
];

/// Immutable term sets for the affiliation classifier.
///
/// Built once per run and passed by reference; tests substitute fixtures
/// through the constructor.
#[derive(Debug, Clone)]
pub struct ClassifierRules {
    known_companies: Vec<String>,
    academic_keywords: Vec<String>,
    industry_keywords: Vec<String>,
}

impl ClassifierRules {
    /// Create rules from explicit term sets. Terms are lowercased for
    /// case-insensitive matching.
    #[must_use]
    pub fn new<I, S>(known_companies: I, academic_keywords: I, industry_keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        fn lowered<I, S>(terms: I) -> Vec<String>
        where
            I: IntoIterator<Item = S>,
            S: Into<String>,
        {
            terms.into_iter().map(|t| t.into().to_lowercase()).collect()
        }

        Self {
            known_companies: lowered(known_companies),
            academic_keywords: lowered(academic_keywords),
            industry_keywords: lowered(industry_keywords),
        }
    }

    /// Known company names, lowercase.
    #[must_use]
    pub fn known_companies(&self) -> &[String] {
        &self.known_companies
    }

    /// Academic keywords, lowercase.
    #[must_use]
    pub fn academic_keywords(&self) -> &[String] {
        &self.academic_keywords
    }

    /// Industry keywords, lowercase.
    #[must_use]
    pub fn industry_keywords(&self) -> &[String] {
        &self.industry_keywords
    }
}

impl Default for ClassifierRules {
    fn default() -> Self {
        Self::new(
            KNOWN_COMPANIES.iter().copied(),
            ACADEMIC_KEYWORDS.iter().copied(),
            INDUSTRY_KEYWORDS.iter().copied(),
        )
    }
}
