//! E-utilities XML parsing.
//!
//! ESearch and EFetch only speak XML for the fields this pipeline needs
//! (author affiliations are absent from the JSON ESummary), so both
//! responses are walked with a streaming event reader.

use quick_xml::Reader;
use quick_xml::events::Event;

use crate::error::{ClientError, ClientResult};
use crate::models::{RawArticle, RawAuthor};

/// Parse an ESearch response into the list of matching PMIDs.
pub fn parse_esearch(xml: &str) -> ClientResult<Vec<String>> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut pmids = Vec::new();
    let mut in_id = false;

    loop {
        match reader.read_event() {
            Ok(Event::Start(ref e)) => {
                if e.name().as_ref() == b"Id" {
                    in_id = true;
                }
            }
            Ok(Event::End(ref e)) => {
                if e.name().as_ref() == b"Id" {
                    in_id = false;
                }
            }
            Ok(Event::Text(e)) if in_id => {
                pmids.push(e.unescape().unwrap_or_default().to_string());
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(ClientError::parse(format!("XML parse error: {e}"))),
            _ => {}
        }
    }

    Ok(pmids)
}

/// Parse an EFetch `PubmedArticleSet` response into raw article records.
///
/// Records missing fields degrade to defaults (empty title, no date, empty
/// author list) rather than failing; only malformed XML is an error.
pub fn parse_efetch(xml: &str) -> ClientResult<Vec<RawArticle>> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut articles = Vec::new();
    let mut current_element = String::new();

    let mut in_article = false;
    let mut in_title = false;
    let mut in_pub_date = false;
    let mut in_author = false;
    let mut in_affiliation = false;

    let mut pmid = String::new();
    let mut title = String::new();
    let mut year = String::new();
    let mut month = String::new();
    let mut day = String::new();
    let mut medline_date = String::new();
    let mut authors: Vec<RawAuthor> = Vec::new();

    let mut last_name = String::new();
    let mut fore_name = String::new();
    let mut initials = String::new();
    let mut collective_name = String::new();
    let mut affiliations: Vec<String> = Vec::new();
    let mut affiliation_buf = String::new();

    loop {
        match reader.read_event() {
            Ok(Event::Start(ref e)) => {
                let name = String::from_utf8_lossy(e.name().as_ref()).to_string();

                match name.as_str() {
                    "PubmedArticle" => {
                        in_article = true;
                        pmid.clear();
                        title.clear();
                        year.clear();
                        month.clear();
                        day.clear();
                        medline_date.clear();
                        authors.clear();
                    }
                    "ArticleTitle" if in_article => in_title = true,
                    // Journal/JournalIssue/PubDate only; DateCompleted and the
                    // PubmedData history also carry Year/Month/Day elements.
                    "PubDate" if in_article => in_pub_date = true,
                    "Author" if in_article => {
                        in_author = true;
                        last_name.clear();
                        fore_name.clear();
                        initials.clear();
                        collective_name.clear();
                        affiliations.clear();
                    }
                    "Affiliation" if in_author => {
                        in_affiliation = true;
                        affiliation_buf.clear();
                    }
                    _ => {}
                }

                current_element = name;
            }
            Ok(Event::End(ref e)) => {
                let name = String::from_utf8_lossy(e.name().as_ref()).to_string();

                match name.as_str() {
                    "PubmedArticle" if in_article => {
                        if !pmid.is_empty() {
                            articles.push(RawArticle {
                                pmid: pmid.clone(),
                                title: title.trim().to_string(),
                                pub_date: assemble_date(&year, &month, &day, &medline_date),
                                authors: std::mem::take(&mut authors),
                            });
                        }
                        in_article = false;
                    }
                    "ArticleTitle" => in_title = false,
                    "PubDate" => in_pub_date = false,
                    "Author" if in_author => {
                        let display =
                            display_name(&last_name, &fore_name, &initials, &collective_name);
                        if !display.is_empty() {
                            authors.push(RawAuthor {
                                name: display,
                                affiliations: std::mem::take(&mut affiliations),
                            });
                        }
                        in_author = false;
                    }
                    "Affiliation" if in_affiliation => {
                        let affiliation = affiliation_buf.trim();
                        if !affiliation.is_empty() {
                            affiliations.push(affiliation.to_string());
                        }
                        in_affiliation = false;
                    }
                    _ => {}
                }

                current_element.clear();
            }
            Ok(Event::Text(e)) => {
                let text = e.unescape().unwrap_or_default();

                if in_affiliation {
                    if !affiliation_buf.is_empty() {
                        affiliation_buf.push(' ');
                    }
                    affiliation_buf.push_str(&text);
                } else if in_title {
                    // Inline markup (<i>, <sub>) splits the title into chunks.
                    if !title.is_empty() {
                        title.push(' ');
                    }
                    title.push_str(&text);
                } else if in_article {
                    match current_element.as_str() {
                        // First PMID is the citation's own; later ones belong
                        // to CommentsCorrections references.
                        "PMID" if pmid.is_empty() => pmid = text.to_string(),
                        "Year" if in_pub_date => year = text.to_string(),
                        "Month" if in_pub_date => month = text.to_string(),
                        "Day" if in_pub_date => day = text.to_string(),
                        "MedlineDate" if in_pub_date => medline_date = text.to_string(),
                        "LastName" if in_author => last_name = text.to_string(),
                        "ForeName" if in_author => fore_name = text.to_string(),
                        "Initials" if in_author => initials = text.to_string(),
                        "CollectiveName" if in_author => collective_name = text.to_string(),
                        _ => {}
                    }
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(ClientError::parse(format!("XML parse error: {e}"))),
            _ => {}
        }
    }

    Ok(articles)
}

/// Join PubDate parts the way PubMed renders them ("2023 Mar 15"), falling
/// back to MedlineDate ("2022 Nov-Dec") and then to no date at all.
fn assemble_date(year: &str, month: &str, day: &str, medline_date: &str) -> Option<String> {
    let joined = [year, month, day]
        .iter()
        .filter(|part| !part.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(" ");

    if !joined.is_empty() {
        Some(joined)
    } else if !medline_date.is_empty() {
        Some(medline_date.to_string())
    } else {
        None
    }
}

/// "LastName, ForeName" as PubMed lists authors, falling back to initials,
/// bare last name, then collective group name.
fn display_name(last: &str, fore: &str, initials: &str, collective: &str) -> String {
    if !last.is_empty() {
        if !fore.is_empty() {
            format!("{last}, {fore}")
        } else if !initials.is_empty() {
            format!("{last}, {initials}")
        } else {
            last.to_string()
        }
    } else {
        collective.trim().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_ESEARCH: &str = r#"<?xml version="1.0"?>
<eSearchResult>
  <Count>2</Count>
  <RetMax>2</RetMax>
  <IdList>
    <Id>35270448</Id>
    <Id>87654321</Id>
  </IdList>
</eSearchResult>"#;

    const SAMPLE_EFETCH: &str = r#"<?xml version="1.0"?>
<PubmedArticleSet>
  <PubmedArticle>
    <MedlineCitation>
      <PMID>35270448</PMID>
      <DateCompleted><Year>2022</Year><Month>05</Month><Day>10</Day></DateCompleted>
      <Article>
        <Journal>
          <Title>Test Journal</Title>
          <JournalIssue>
            <PubDate><Year>2022</Year><Month>Mar</Month><Day>4</Day></PubDate>
          </JournalIssue>
        </Journal>
        <ArticleTitle>Metabolic Treatment of Wolfram Syndrome</ArticleTitle>
        <AuthorList>
          <Author>
            <LastName>Iafusco</LastName>
            <ForeName>Fernanda</ForeName>
            <AffiliationInfo>
              <Affiliation>CEINGE Advanced Biotech, Naples, Italy. f.iafusco@ceinge.it.</Affiliation>
            </AffiliationInfo>
          </Author>
          <Author>
            <LastName>Smith</LastName>
            <Initials>J</Initials>
          </Author>
        </AuthorList>
      </Article>
    </MedlineCitation>
  </PubmedArticle>
  <PubmedArticle>
    <MedlineCitation>
      <PMID>87654321</PMID>
      <Article>
        <Journal>
          <JournalIssue>
            <PubDate><MedlineDate>2021 Nov-Dec</MedlineDate></PubDate>
          </JournalIssue>
        </Journal>
        <ArticleTitle>Consortium Study of <i>BRCA1</i> Variants</ArticleTitle>
        <AuthorList>
          <Author>
            <CollectiveName>GenoMed Alliance</CollectiveName>
          </Author>
        </AuthorList>
      </Article>
    </MedlineCitation>
  </PubmedArticle>
</PubmedArticleSet>"#;

    #[test]
    fn test_parse_esearch() {
        let pmids = parse_esearch(SAMPLE_ESEARCH).unwrap();
        assert_eq!(pmids, ["35270448", "87654321"]);
    }

    #[test]
    fn test_parse_esearch_empty() {
        let pmids = parse_esearch("<eSearchResult><IdList></IdList></eSearchResult>").unwrap();
        assert!(pmids.is_empty());
    }

    #[test]
    fn test_parse_efetch_articles() {
        let articles = parse_efetch(SAMPLE_EFETCH).unwrap();
        assert_eq!(articles.len(), 2);

        let first = &articles[0];
        assert_eq!(first.pmid, "35270448");
        assert_eq!(first.title, "Metabolic Treatment of Wolfram Syndrome");
        // Journal PubDate wins over DateCompleted.
        assert_eq!(first.pub_date.as_deref(), Some("2022 Mar 4"));
        assert_eq!(first.authors.len(), 2);
        assert_eq!(first.authors[0].name, "Iafusco, Fernanda");
        assert_eq!(
            first.authors[0].affiliations,
            ["CEINGE Advanced Biotech, Naples, Italy. f.iafusco@ceinge.it."]
        );
        // Initials fallback when ForeName is absent.
        assert_eq!(first.authors[1].name, "Smith, J");
        assert!(first.authors[1].affiliations.is_empty());
    }

    #[test]
    fn test_parse_efetch_medline_date_and_collective() {
        let articles = parse_efetch(SAMPLE_EFETCH).unwrap();
        let second = &articles[1];
        assert_eq!(second.pub_date.as_deref(), Some("2021 Nov-Dec"));
        assert_eq!(second.authors[0].name, "GenoMed Alliance");
        // Inline markup chunks are rejoined.
        assert_eq!(second.title, "Consortium Study of BRCA1 Variants");
    }

    #[test]
    fn test_parse_efetch_no_date() {
        let xml = r#"<PubmedArticleSet><PubmedArticle><MedlineCitation>
            <PMID>1</PMID>
            <Article><ArticleTitle>Undated</ArticleTitle></Article>
        </MedlineCitation></PubmedArticle></PubmedArticleSet>"#;
        let articles = parse_efetch(xml).unwrap();
        assert_eq!(articles[0].pub_date, None);
        assert!(articles[0].authors.is_empty());
    }

    #[test]
    fn test_parse_efetch_malformed() {
        assert!(parse_efetch("<PubmedArticleSet><Unclosed").is_err());
    }
}
