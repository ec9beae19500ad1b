//! Documents, their metadata, events, ballots and authorship.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::{country, impl_resource, timestamp};
use crate::uri::{
    BallotDocumentEventUri, BallotPositionNameUri, BallotTypeUri, DocumentAliasUri,
    DocumentAuthorUri, DocumentEventUri, DocumentStateTypeUri, DocumentStateUri, DocumentTypeUri,
    DocumentUri, EmailUri, GroupUri, IntendedStdLevelUri, PersonUri, RelatedDocumentUri,
    RelationshipTypeUri, StdLevelUri, StreamUri, SubmissionUri,
};

/// A document: an Internet-Draft, RFC, charter, set of slides, agenda, ...
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub id: u64,
    pub resource_uri: DocumentUri,
    pub name: String,
    pub title: String,
    pub pages: Option<u32>,
    pub words: Option<u32>,
    #[serde(with = "timestamp")]
    pub time: NaiveDateTime,
    pub notify: String,
    pub expires: Option<String>,
    #[serde(rename = "type")]
    pub doc_type: DocumentTypeUri,
    pub rfc: Option<u32>,
    /// For a published RFC this is the revision of the publication notice.
    pub rev: String,
    #[serde(rename = "abstract")]
    pub abstract_text: String,
    pub internal_comments: String,
    pub order: i32,
    pub note: String,
    pub ad: Option<PersonUri>,
    pub shepherd: Option<EmailUri>,
    pub group: Option<GroupUri>,
    pub stream: Option<StreamUri>,
    pub intended_std_level: Option<IntendedStdLevelUri>,
    pub std_level: Option<StdLevelUri>,
    pub states: Vec<DocumentStateUri>,
    pub submissions: Vec<SubmissionUri>,
    pub tags: Vec<String>,
    pub uploaded_filename: String,
    pub external_url: String,
}

impl Document {
    /// Where the content of this document can be downloaded from.
    ///
    /// Meeting materials (agendas, minutes, slides, bluesheets) take the
    /// meeting number from the second `-`-separated component of the name,
    /// e.g. `slides-105-quic-chairs`. Returns `None` for document types with
    /// no known download location, and for meeting materials whose name has
    /// no meeting component.
    #[must_use]
    pub fn url(&self) -> Option<String> {
        let meeting = || self.name.split('-').nth(1);
        let url = match self.doc_type.last_segment()? {
            "agenda" | "minutes" => format!(
                "https://datatracker.ietf.org/meeting/{}/materials/{}",
                meeting()?,
                self.uploaded_filename
            ),
            "bluesheets" => format!(
                "https://www.ietf.org/proceedings/{}/bluesheets/{}",
                meeting()?,
                self.uploaded_filename
            ),
            "slides" => format!(
                "https://www.ietf.org/proceedings/{}/slides/{}",
                meeting()?,
                self.uploaded_filename
            ),
            "charter" => format!("https://www.ietf.org/charter/{}-{}.txt", self.name, self.rev),
            "conflrev" => format!("https://www.ietf.org/cr/{}-{}.txt", self.name, self.rev),
            "draft" => format!("https://www.ietf.org/archive/id/{}-{}.txt", self.name, self.rev),
            "statchg" => format!("https://www.ietf.org/sc/{}-{}.txt", self.name, self.rev),
            "liaison" | "liai-att" => format!(
                "https://www.ietf.org/lib/dt/documents/LIAISON/{}",
                self.uploaded_filename
            ),
            "recording" | "shepwrit" => self.external_url.clone(),
            "review" => format!("https://datatracker.ietf.org/doc/{}", self.name),
            _ => return None,
        };
        Some(url)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentType {
    pub resource_uri: DocumentTypeUri,
    pub name: String,
    pub used: bool,
    pub prefix: String,
    pub slug: String,
    pub desc: String,
    pub order: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentStateType {
    pub resource_uri: DocumentStateTypeUri,
    pub label: String,
    pub slug: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentState {
    pub id: u64,
    pub resource_uri: DocumentStateUri,
    pub desc: String,
    pub name: String,
    pub next_states: Vec<DocumentStateUri>,
    pub order: i32,
    pub slug: String,
    #[serde(rename = "type")]
    pub state_type: DocumentStateTypeUri,
    pub used: bool,
}

/// An RFC publication stream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stream {
    pub resource_uri: StreamUri,
    pub name: String,
    pub desc: String,
    pub used: bool,
    pub slug: String,
    pub order: i32,
}

/// An alternative name for a document, e.g. `rfc3550` for the draft it was published from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentAlias {
    pub id: u64,
    pub resource_uri: DocumentAliasUri,
    pub document: DocumentUri,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentEvent {
    pub by: PersonUri,
    pub desc: String,
    pub doc: DocumentUri,
    pub id: u64,
    pub resource_uri: DocumentEventUri,
    pub rev: String,
    #[serde(with = "timestamp")]
    pub time: NaiveDateTime,
    #[serde(rename = "type")]
    pub event_type: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BallotPositionName {
    pub blocking: bool,
    pub desc: Option<String>,
    pub name: String,
    pub order: i32,
    pub resource_uri: BallotPositionNameUri,
    pub slug: String,
    pub used: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BallotType {
    pub doc_type: DocumentTypeUri,
    pub id: u64,
    pub name: String,
    pub order: i32,
    pub positions: Vec<BallotPositionNameUri>,
    pub question: String,
    pub resource_uri: BallotTypeUri,
    pub slug: String,
    pub used: bool,
}

/// A ballot being opened or closed on a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BallotDocumentEvent {
    pub ballot_type: BallotTypeUri,
    pub by: PersonUri,
    pub desc: String,
    pub doc: DocumentUri,
    pub docevent_ptr: DocumentEventUri,
    pub id: u64,
    pub resource_uri: BallotDocumentEventUri,
    pub rev: String,
    #[serde(with = "timestamp")]
    pub time: NaiveDateTime,
    #[serde(rename = "type")]
    pub event_type: String,
}

/// A kind of relationship between documents, e.g. `obs` (obsoletes).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationshipType {
    pub resource_uri: RelationshipTypeUri,
    pub slug: String,
    pub desc: String,
    pub name: String,
    pub used: bool,
    pub order: i32,
    pub revname: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelatedDocument {
    pub id: u64,
    pub relationship: RelationshipTypeUri,
    pub resource_uri: RelatedDocumentUri,
    pub source: DocumentUri,
    pub target: DocumentAliasUri,
}

/// One author of a document, with the affiliation and country they gave.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentAuthor {
    pub id: u64,
    pub order: i32,
    pub resource_uri: DocumentAuthorUri,
    pub country: String,
    pub affiliation: String,
    pub document: DocumentUri,
    pub person: PersonUri,
    pub email: Option<EmailUri>,
}

impl DocumentAuthor {
    /// The author's country, normalised with [`normalise_country`](super::normalise_country).
    #[must_use]
    pub fn normalise_country(&self) -> String {
        country::normalise_country(&self.country)
    }

    /// The author's affiliation. No normalisation is applied yet.
    #[must_use]
    pub fn normalise_affiliation(&self) -> &str {
        &self.affiliation
    }
}

impl_resource! {
    Document => DocumentUri,
    DocumentType => DocumentTypeUri,
    DocumentStateType => DocumentStateTypeUri,
    DocumentState => DocumentStateUri,
    Stream => StreamUri,
    DocumentAlias => DocumentAliasUri,
    DocumentEvent => DocumentEventUri,
    BallotPositionName => BallotPositionNameUri,
    BallotType => BallotTypeUri,
    BallotDocumentEvent => BallotDocumentEventUri,
    RelationshipType => RelationshipTypeUri,
    RelatedDocument => RelatedDocumentUri,
    DocumentAuthor => DocumentAuthorUri,
}
