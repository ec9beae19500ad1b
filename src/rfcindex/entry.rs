//! Entries of the RFC index.
//!
//! Values are kept as the index spells them (`RFC0768`, `INTERNET STANDARD`,
//! `March`); nothing is normalised.

use std::str::FromStr;

use serde::Serialize;

use super::RfcIndexError;
use super::xml::Element;

/// Base for the plain-text, PostScript and PDF renderings of an RFC.
const CONTENT_BASE: &str = "https://www.rfc-editor.org/rfc/";

/// RFCs whose text is not UTF-8.
const LATIN1_RFCS: &[&str] = &[
    "RFC0064", "RFC0101", "RFC0177", "RFC0178", "RFC0182", "RFC0227", "RFC0234", "RFC0235",
    "RFC0237", "RFC0243", "RFC0270", "RFC0282", "RFC0288", "RFC0290", "RFC0292", "RFC0303",
    "RFC0306", "RFC0307", "RFC0310", "RFC0313", "RFC0315", "RFC0316", "RFC0317", "RFC0323",
    "RFC0327", "RFC0367", "RFC0369", "RFC0441", "RFC1305", "RFC2497", "RFC2557",
    // Both contain a few bytes that are corrupt in any charset; Latin-1 gets the rest right.
    "RFC2708", "RFC2875",
];

/// One published file format of an RFC.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RfcFormat {
    /// `ASCII`, `PS`, `PDF`, `HTML`, `XML`, ...
    pub file_format: String,
    pub char_count: Option<u64>,
    /// Not every format has pages, and not every paged format records a count.
    pub page_count: Option<u32>,
}

/// An `<rfc-entry>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RfcEntry {
    pub doc_id: String,
    pub title: String,
    /// Author names. Per-author titles such as "Editor" are dropped.
    pub authors: Vec<String>,
    pub doi: Option<String>,
    pub stream: String,
    pub wg: Option<String>,
    pub area: Option<String>,
    pub current_status: String,
    pub publication_status: String,
    /// Only present for 1 April RFCs.
    pub day: Option<u32>,
    pub month: String,
    pub year: i32,
    pub formats: Vec<RfcFormat>,
    pub draft: Option<String>,
    pub keywords: Vec<String>,
    pub updates: Vec<String>,
    pub updated_by: Vec<String>,
    pub obsoletes: Vec<String>,
    pub obsoleted_by: Vec<String>,
    pub is_also: Vec<String>,
    pub see_also: Vec<String>,
    pub errata_url: Option<String>,
    /// Paragraphs of the abstract, in order.
    #[serde(rename = "abstract")]
    pub abstract_paragraphs: Vec<String>,
}

impl RfcEntry {
    pub(crate) fn from_element(element: &Element) -> Result<Self, RfcIndexError> {
        let entry_name = entry_name(element, "rfc-entry");

        let mut doc_id = None;
        let mut title = None;
        let mut doi = None;
        let mut stream = None;
        let mut current_status = None;
        let mut publication_status = None;
        let mut date = None;
        let mut entry = PartialRfc::default();

        for child in element.children() {
            match child.tag() {
                Some("doc-id") => doc_id = owned_text(child),
                Some("title") => title = owned_text(child),
                Some("doi") => doi = owned_text(child),
                Some("stream") => stream = owned_text(child),
                Some("wg_acronym") => entry.wg = owned_text(child),
                Some("area") => entry.area = owned_text(child),
                Some("current-status") => current_status = owned_text(child),
                Some("publication-status") => publication_status = owned_text(child),
                Some("author") => entry.authors.extend(author_name(child)),
                Some("date") => date = Some(RfcDate::from_element(child, &entry_name)?),
                Some("format") => entry.formats.push(rfc_format(child, &entry_name)?),
                Some("draft") => entry.draft = owned_text(child),
                Some("keywords") => entry.keywords = keywords(child),
                Some("updates") => entry.updates = child.doc_ids(),
                Some("updated-by") => entry.updated_by = child.doc_ids(),
                Some("obsoletes") => entry.obsoletes = child.doc_ids(),
                Some("obsoleted-by") => entry.obsoleted_by = child.doc_ids(),
                Some("is-also") => entry.is_also = child.doc_ids(),
                Some("see-also") => entry.see_also = child.doc_ids(),
                Some("errata-url") => entry.errata_url = owned_text(child),
                Some("abstract") => entry.abstract_paragraphs = paragraphs(child),
                _ => child.skip(&entry_name),
            }
        }

        let doc_id = required(doc_id, &entry_name, "doc-id")?;
        let title = required(title, &entry_name, "title")?;
        let date = required(date, &entry_name, "date")?;
        Ok(Self {
            doc_id,
            title,
            authors: entry.authors,
            doi,
            stream: required(stream, &entry_name, "stream")?,
            wg: entry.wg,
            area: entry.area,
            current_status: required(current_status, &entry_name, "current-status")?,
            publication_status: required(publication_status, &entry_name, "publication-status")?,
            day: date.day,
            month: date.month,
            year: date.year,
            formats: entry.formats,
            draft: entry.draft,
            keywords: entry.keywords,
            updates: entry.updates,
            updated_by: entry.updated_by,
            obsoletes: entry.obsoletes,
            obsoleted_by: entry.obsoleted_by,
            is_also: entry.is_also,
            see_also: entry.see_also,
            errata_url: entry.errata_url,
            abstract_paragraphs: entry.abstract_paragraphs,
        })
    }

    /// Character set of this RFC's text: UTF-8 (or its ASCII subset) for all
    /// but a handful of early documents.
    ///
    /// ```
    /// # use ietfdata_core::rfcindex::RfcIndex;
    /// # let xml = r#"<rfc-index xmlns="http://www.rfc-editor.org/rfc-index"><rfc-entry>
    /// #   <doc-id>RFC2166</doc-id><title>t</title><stream>Legacy</stream>
    /// #   <current-status>INFORMATIONAL</current-status><publication-status>INFORMATIONAL</publication-status>
    /// #   <date><month>June</month><year>1997</year></date></rfc-entry></rfc-index>"#;
    /// let index = RfcIndex::parse(xml).unwrap();
    /// assert_eq!(index.rfc["RFC2166"].charset(), "windows-1252");
    /// ```
    #[must_use]
    pub fn charset(&self) -> &'static str {
        if self.doc_id == "RFC2166" {
            "windows-1252"
        } else if LATIN1_RFCS.contains(&self.doc_id.as_str()) {
            "iso-8859-1"
        } else {
            "utf-8"
        }
    }

    /// Where to download the RFC in `format` (`ASCII`, `PS` or `PDF`).
    ///
    /// `None` if the RFC was not published in that format, or the format has
    /// no stable download location.
    #[must_use]
    pub fn content_url(&self, format: &str) -> Option<String> {
        let extension = match format {
            "ASCII" => "txt",
            "PS" => "ps",
            "PDF" => "pdf",
            _ => return None,
        };
        self.formats
            .iter()
            .any(|f| f.file_format == format)
            .then(|| format!("{CONTENT_BASE}{}.{extension}", self.doc_id.to_lowercase()))
    }
}

/// Optional parts of an RFC entry, collected while walking its children.
#[derive(Default)]
struct PartialRfc {
    authors: Vec<String>,
    wg: Option<String>,
    area: Option<String>,
    formats: Vec<RfcFormat>,
    draft: Option<String>,
    keywords: Vec<String>,
    updates: Vec<String>,
    updated_by: Vec<String>,
    obsoletes: Vec<String>,
    obsoleted_by: Vec<String>,
    is_also: Vec<String>,
    see_also: Vec<String>,
    errata_url: Option<String>,
    abstract_paragraphs: Vec<String>,
}

struct RfcDate {
    day: Option<u32>,
    month: String,
    year: i32,
}

impl RfcDate {
    fn from_element(element: &Element, entry_name: &str) -> Result<Self, RfcIndexError> {
        let mut day = None;
        let mut month = None;
        let mut year = None;
        for child in element.children() {
            match child.tag() {
                Some("day") => day = Some(number(child, entry_name, "day")?),
                Some("month") => month = owned_text(child),
                Some("year") => year = Some(number(child, entry_name, "year")?),
                _ => child.skip("date"),
            }
        }
        Ok(Self {
            day,
            month: required(month, entry_name, "month")?,
            year: required(year, entry_name, "year")?,
        })
    }
}

/// An `<rfc-not-issued-entry>`: a number that was allocated but never published.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RfcNotIssuedEntry {
    pub doc_id: String,
}

impl RfcNotIssuedEntry {
    pub(crate) fn from_element(element: &Element) -> Result<Self, RfcIndexError> {
        let (doc_id, _) = id_and_aliases(element, "rfc-not-issued-entry")?;
        Ok(Self { doc_id })
    }
}

/// A `<bcp-entry>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BcpEntry {
    pub doc_id: String,
    /// RFCs that make up this BCP.
    pub is_also: Vec<String>,
}

impl BcpEntry {
    pub(crate) fn from_element(element: &Element) -> Result<Self, RfcIndexError> {
        let (doc_id, is_also) = id_and_aliases(element, "bcp-entry")?;
        Ok(Self { doc_id, is_also })
    }
}

/// An `<std-entry>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StdEntry {
    pub doc_id: String,
    pub title: String,
    /// RFCs that make up this standard.
    pub is_also: Vec<String>,
}

impl StdEntry {
    pub(crate) fn from_element(element: &Element) -> Result<Self, RfcIndexError> {
        let (doc_id, is_also) = id_and_aliases(element, "std-entry")?;
        let title = element
            .children()
            .iter()
            .find(|child| child.tag() == Some("title"))
            .and_then(owned_text);
        Ok(Self {
            title: required(title, &doc_id, "title")?,
            doc_id,
            is_also,
        })
    }
}

/// An `<fyi-entry>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FyiEntry {
    pub doc_id: String,
    pub is_also: Vec<String>,
}

impl FyiEntry {
    pub(crate) fn from_element(element: &Element) -> Result<Self, RfcIndexError> {
        let (doc_id, is_also) = id_and_aliases(element, "fyi-entry")?;
        Ok(Self { doc_id, is_also })
    }
}

fn owned_text(element: &Element) -> Option<String> {
    element.text().map(str::to_string)
}

fn required<T>(value: Option<T>, entry: &str, element: &'static str) -> Result<T, RfcIndexError> {
    value.ok_or_else(|| RfcIndexError::missing(entry, element))
}

fn number<T: FromStr>(
    element: &Element,
    entry: &str,
    name: &'static str,
) -> Result<T, RfcIndexError> {
    let text = element.text().unwrap_or_default();
    text.parse()
        .map_err(|_| RfcIndexError::invalid_number(entry, name, text))
}

/// The entry's doc-id if it has one, else the element name, for error messages.
fn entry_name(element: &Element, fallback: &str) -> String {
    element
        .children()
        .iter()
        .find(|child| child.tag() == Some("doc-id"))
        .and_then(Element::text)
        .unwrap_or(fallback)
        .to_string()
}

/// Reads the `<doc-id>` and `<is-also>` children shared by the series entries.
/// Other children, apart from `<title>`, are skipped.
fn id_and_aliases(element: &Element, kind: &str) -> Result<(String, Vec<String>), RfcIndexError> {
    let mut doc_id = None;
    let mut is_also = Vec::new();
    for child in element.children() {
        match child.tag() {
            Some("doc-id") => doc_id = owned_text(child),
            Some("is-also") => is_also = child.doc_ids(),
            Some("title") => {}
            _ => child.skip(kind),
        }
    }
    Ok((required(doc_id, kind, "doc-id")?, is_also))
}

fn author_name(element: &Element) -> Option<String> {
    let mut name = None;
    for child in element.children() {
        match child.tag() {
            Some("name") => name = owned_text(child),
            Some("title") => {}
            _ => child.skip("author"),
        }
    }
    name
}

fn rfc_format(element: &Element, entry_name: &str) -> Result<RfcFormat, RfcIndexError> {
    let mut file_format = None;
    let mut char_count = None;
    let mut page_count = None;
    for child in element.children() {
        match child.tag() {
            Some("file-format") => file_format = owned_text(child),
            Some("char-count") => char_count = Some(number(child, entry_name, "char-count")?),
            Some("page-count") => page_count = Some(number(child, entry_name, "page-count")?),
            _ => child.skip("format"),
        }
    }
    Ok(RfcFormat {
        file_format: required(file_format, entry_name, "file-format")?,
        char_count,
        page_count,
    })
}

// Empty <kw></kw> elements occur in the index and are left out.
fn keywords(element: &Element) -> Vec<String> {
    element
        .children()
        .iter()
        .filter_map(|child| match child.tag() {
            Some("kw") => owned_text(child),
            _ => {
                child.skip("keywords");
                None
            }
        })
        .collect()
}

fn paragraphs(element: &Element) -> Vec<String> {
    let mut paragraphs: Vec<String> = element
        .children()
        .iter()
        .filter(|child| child.tag() == Some("p"))
        .filter_map(owned_text)
        .collect();
    if paragraphs.is_empty()
        && let Some(text) = element.text()
    {
        paragraphs.push(text.to_string());
    }
    paragraphs
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::rfcindex::xml;

    fn element(xml_text: &str) -> Element {
        xml::parse(&xml_text.replacen('>', r#" xmlns="http://www.rfc-editor.org/rfc-index">"#, 1))
            .unwrap()
    }

    const RFC3550: &str = r#"<rfc-entry>
        <doc-id>RFC3550</doc-id>
        <title>RTP: A Transport Protocol for Real-Time Applications</title>
        <author><name>H. Schulzrinne</name></author>
        <author><name>S. Casner</name></author>
        <author><name>R. Frederick</name></author>
        <author><name>V. Jacobson</name><title>Editor</title></author>
        <date><month>July</month><year>2003</year></date>
        <format><file-format>ASCII</file-format><char-count>259985</char-count><page-count>104</page-count></format>
        <format><file-format>PS</file-format><char-count>630740</char-count></format>
        <keywords><kw>RTP</kw><kw></kw><kw>real-time transport protocol</kw></keywords>
        <abstract><p>This memorandum describes RTP.</p><p>RTP provides end-to-end network transport.</p></abstract>
        <draft>draft-ietf-avt-rtp-new-12</draft>
        <obsoletes><doc-id>RFC1889</doc-id></obsoletes>
        <updated-by><doc-id>RFC5506</doc-id><doc-id>RFC5761</doc-id></updated-by>
        <is-also><doc-id>STD0064</doc-id></is-also>
        <current-status>INTERNET STANDARD</current-status>
        <publication-status>DRAFT STANDARD</publication-status>
        <stream>IETF</stream>
        <area>rai</area>
        <wg_acronym>avt</wg_acronym>
        <errata-url>https://www.rfc-editor.org/errata/rfc3550</errata-url>
        <doi>10.17487/RFC3550</doi>
      </rfc-entry>"#;

    #[test]
    fn test_rfc_entry_fields() {
        let rfc = RfcEntry::from_element(&element(RFC3550)).unwrap();
        assert_eq!(rfc.doc_id, "RFC3550");
        assert_eq!(rfc.authors.len(), 4);
        assert_eq!(rfc.authors[3], "V. Jacobson");
        assert_eq!(rfc.day, None);
        assert_eq!(rfc.month, "July");
        assert_eq!(rfc.year, 2003);
        assert_eq!(rfc.keywords, vec!["RTP", "real-time transport protocol"]);
        assert_eq!(rfc.abstract_paragraphs.len(), 2);
        assert_eq!(rfc.obsoletes, vec!["RFC1889"]);
        assert_eq!(rfc.updated_by, vec!["RFC5506", "RFC5761"]);
        assert_eq!(rfc.is_also, vec!["STD0064"]);
        assert_eq!(rfc.wg.as_deref(), Some("avt"));
        assert_eq!(rfc.doi.as_deref(), Some("10.17487/RFC3550"));
        assert_eq!(
            rfc.formats[1],
            RfcFormat {
                file_format: "PS".to_string(),
                char_count: Some(630_740),
                page_count: None,
            }
        );
    }

    #[test]
    fn test_content_url() {
        let rfc = RfcEntry::from_element(&element(RFC3550)).unwrap();
        assert_eq!(
            rfc.content_url("ASCII").as_deref(),
            Some("https://www.rfc-editor.org/rfc/rfc3550.txt")
        );
        assert_eq!(
            rfc.content_url("PS").as_deref(),
            Some("https://www.rfc-editor.org/rfc/rfc3550.ps")
        );
        assert_eq!(rfc.content_url("PDF"), None);
        assert_eq!(rfc.content_url("HTML"), None);
    }

    #[test]
    fn test_charset_exceptions() {
        let mut rfc = RfcEntry::from_element(&element(RFC3550)).unwrap();
        assert_eq!(rfc.charset(), "utf-8");
        rfc.doc_id = "RFC1305".to_string();
        assert_eq!(rfc.charset(), "iso-8859-1");
        rfc.doc_id = "RFC2875".to_string();
        assert_eq!(rfc.charset(), "iso-8859-1");
        rfc.doc_id = "RFC2166".to_string();
        assert_eq!(rfc.charset(), "windows-1252");
    }

    #[test]
    fn test_april_first_day() {
        let rfc = RfcEntry::from_element(&element(
            r#"<rfc-entry><doc-id>RFC1149</doc-id><title>IP over Avian Carriers</title>
               <date><day>1</day><month>April</month><year>1990</year></date>
               <current-status>EXPERIMENTAL</current-status>
               <publication-status>EXPERIMENTAL</publication-status><stream>Legacy</stream></rfc-entry>"#,
        ))
        .unwrap();
        assert_eq!(rfc.day, Some(1));
        assert!(rfc.authors.is_empty());
        assert!(rfc.abstract_paragraphs.is_empty());
    }

    #[test]
    fn test_missing_title_names_entry() {
        let err = RfcEntry::from_element(&element(
            r#"<rfc-entry><doc-id>RFC0001</doc-id></rfc-entry>"#,
        ))
        .unwrap_err();
        assert_eq!(err.to_string(), "RFC0001 has no <title>");
    }

    #[test]
    fn test_bad_year_is_an_error() {
        let err = RfcEntry::from_element(&element(
            r#"<rfc-entry><doc-id>RFC0002</doc-id><title>t</title>
               <date><month>May</month><year>MCMLXIX</year></date></rfc-entry>"#,
        ))
        .unwrap_err();
        assert!(matches!(err, RfcIndexError::InvalidNumber { element: "year", .. }));
    }

    #[test]
    fn test_series_entries() {
        let bcp = BcpEntry::from_element(&element(
            "<bcp-entry><doc-id>BCP0014</doc-id><is-also><doc-id>RFC2119</doc-id><doc-id>RFC8174</doc-id></is-also></bcp-entry>",
        ))
        .unwrap();
        assert_eq!(bcp.is_also, vec!["RFC2119", "RFC8174"]);

        let std = StdEntry::from_element(&element(
            "<std-entry><doc-id>STD0064</doc-id><title>RTP</title><is-also><doc-id>RFC3550</doc-id></is-also></std-entry>",
        ))
        .unwrap();
        assert_eq!(std.title, "RTP");

        let fyi = FyiEntry::from_element(&element("<fyi-entry><doc-id>FYI0001</doc-id></fyi-entry>")).unwrap();
        assert!(fyi.is_also.is_empty());

        assert!(StdEntry::from_element(&element("<std-entry><doc-id>STD0001</doc-id></std-entry>")).is_err());
    }
}
