//! Documents, their states, events, authors and ballots, and RFC streams.

use futures_util::{StreamExt, TryStreamExt, future};
use tracing::{debug, instrument};

use super::{
    BallotDocumentEventFilter, DocumentEventFilter, DocumentFilter, RelatedDocumentFilter,
    at_most_one, path_segment, series_name,
};
use crate::datatracker::{DataTracker, DatatrackerError, RecordStream};
use crate::records::{
    BallotDocumentEvent, BallotPositionName, BallotType, Document, DocumentAlias, DocumentAuthor,
    DocumentEvent, DocumentState, DocumentStateType, DocumentType, Email, Person, RelatedDocument,
    RelationshipType, Stream,
};
use crate::uri::{
    BallotDocumentEventUri, BallotPositionNameUri, BallotTypeUri, DocumentAliasUri,
    DocumentAuthorUri, DocumentEventUri, DocumentStateTypeUri, DocumentStateUri, DocumentTypeUri,
    DocumentUri, RelatedDocumentUri, RelationshipTypeUri, StreamUri,
};

impl DataTracker {
    pub async fn document(&self, uri: &DocumentUri) -> Result<Option<Document>, DatatrackerError> {
        self.retrieve(uri).await
    }

    pub fn documents(&self, filter: &DocumentFilter) -> RecordStream<'_, Document> {
        let mut uri = DocumentUri::collection();
        filter.apply(&mut uri);
        self.retrieve_multi(uri)
    }

    pub async fn document_alias(
        &self,
        uri: &DocumentAliasUri,
    ) -> Result<Option<DocumentAlias>, DatatrackerError> {
        self.retrieve(uri).await
    }

    /// Aliases matching `name` exactly (`rfc3550`, `bcp25`, `std68`,
    /// `draft-ietf-quic-transport`, ...), or every alias when `name` is `None`.
    pub fn document_aliases(&self, name: Option<&str>) -> RecordStream<'_, DocumentAlias> {
        let mut uri = DocumentAliasUri::collection();
        uri.set_opt_param("name", name);
        self.retrieve_multi(uri)
    }

    /// Fetches an Internet-Draft by name, e.g. `draft-ietf-avt-rtp-new`.
    ///
    /// # Errors
    ///
    /// [`DatatrackerError::InvalidArgument`] unless `draft` starts with
    /// `draft-` and contains no comma.
    pub async fn document_from_draft(&self, draft: &str) -> Result<Option<Document>, DatatrackerError> {
        if !draft.starts_with("draft-") || draft.contains(',') {
            return Err(DatatrackerError::invalid_argument(
                "draft name",
                format!("'{draft}' must start with 'draft-' and contain no ','"),
            ));
        }
        let draft = path_segment("draft name", draft)?;
        self.document(&DocumentUri::new(format!("/api/v1/doc/document/{draft}/"))?)
            .await
    }

    /// Fetches the document that became an RFC (`rfc3550` or `RFC3550`).
    ///
    /// One alias lookup, then one document fetch if exactly one alias matched.
    ///
    /// # Errors
    ///
    /// [`DatatrackerError::InvalidArgument`] if `rfc` does not start with
    /// `rfc` (any case), and [`DatatrackerError::AmbiguousLookup`] if the
    /// alias matches more than one document.
    #[instrument(skip(self))]
    pub async fn document_from_rfc(&self, rfc: &str) -> Result<Option<Document>, DatatrackerError> {
        let name = series_name("RFC name", "rfc", rfc)?;
        let alias = at_most_one(self.document_aliases(Some(&name)), "RFC alias", &name).await?;
        match alias {
            Some(alias) => self.document(&alias.document).await,
            None => {
                debug!(%name, "no alias");
                Ok(None)
            }
        }
    }

    /// Documents that make up a Best Current Practice (`bcp205` or `BCP205`).
    ///
    /// # Errors
    ///
    /// [`DatatrackerError::InvalidArgument`] if `bcp` does not start with `bcp`.
    pub fn documents_from_bcp(&self, bcp: &str) -> Result<RecordStream<'_, Document>, DatatrackerError> {
        let name = series_name("BCP name", "bcp", bcp)?;
        Ok(self.documents_for_alias(&name))
    }

    /// Documents that make up an Internet Standard (`std68` or `STD68`).
    ///
    /// # Errors
    ///
    /// [`DatatrackerError::InvalidArgument`] if `standard` does not start with `std`.
    pub fn documents_from_std(
        &self,
        standard: &str,
    ) -> Result<RecordStream<'_, Document>, DatatrackerError> {
        let name = series_name("STD name", "std", standard)?;
        Ok(self.documents_for_alias(&name))
    }

    // Follows every alias named `name` to its document, skipping dangling aliases.
    fn documents_for_alias(&self, name: &str) -> RecordStream<'_, Document> {
        self.document_aliases(Some(name))
            .and_then(move |alias| async move { self.document(&alias.document).await })
            .try_filter_map(|document| future::ready(Ok(document)))
            .boxed()
    }

    pub async fn document_type(
        &self,
        uri: &DocumentTypeUri,
    ) -> Result<Option<DocumentType>, DatatrackerError> {
        self.retrieve(uri).await
    }

    pub fn document_types(&self) -> RecordStream<'_, DocumentType> {
        self.retrieve_multi(DocumentTypeUri::collection())
    }

    pub async fn document_state(
        &self,
        uri: &DocumentStateUri,
    ) -> Result<Option<DocumentState>, DatatrackerError> {
        self.retrieve(uri).await
    }

    /// Possible document states, optionally only those of one state type.
    pub fn document_states(
        &self,
        state_type: Option<&DocumentStateType>,
    ) -> RecordStream<'_, DocumentState> {
        let mut uri = DocumentStateUri::collection();
        uri.set_opt_param("type", state_type.map(|t| t.slug.as_str()));
        self.retrieve_multi(uri)
    }

    pub async fn document_state_type(
        &self,
        uri: &DocumentStateTypeUri,
    ) -> Result<Option<DocumentStateType>, DatatrackerError> {
        self.retrieve(uri).await
    }

    pub fn document_state_types(&self) -> RecordStream<'_, DocumentStateType> {
        self.retrieve_multi(DocumentStateTypeUri::collection())
    }

    pub async fn document_event(
        &self,
        uri: &DocumentEventUri,
    ) -> Result<Option<DocumentEvent>, DatatrackerError> {
        self.retrieve(uri).await
    }

    pub fn document_events(&self, filter: &DocumentEventFilter) -> RecordStream<'_, DocumentEvent> {
        let mut uri = DocumentEventUri::collection();
        filter.apply(&mut uri);
        self.retrieve_multi(uri)
    }

    pub fn document_authors(&self, document: &Document) -> RecordStream<'_, DocumentAuthor> {
        let mut uri = DocumentAuthorUri::collection();
        uri.set_param("document", document.id);
        self.retrieve_multi(uri)
    }

    pub fn documents_authored_by_person(&self, person: &Person) -> RecordStream<'_, DocumentAuthor> {
        let mut uri = DocumentAuthorUri::collection();
        uri.set_param("person", person.id);
        self.retrieve_multi(uri)
    }

    pub fn documents_authored_by_email(&self, email: &Email) -> RecordStream<'_, DocumentAuthor> {
        let mut uri = DocumentAuthorUri::collection();
        uri.set_param("email", &email.address);
        self.retrieve_multi(uri)
    }

    pub fn related_documents(
        &self,
        filter: &RelatedDocumentFilter,
    ) -> RecordStream<'_, RelatedDocument> {
        let mut uri = RelatedDocumentUri::collection();
        filter.apply(&mut uri);
        self.retrieve_multi(uri)
    }

    pub async fn relationship_type(
        &self,
        uri: &RelationshipTypeUri,
    ) -> Result<Option<RelationshipType>, DatatrackerError> {
        self.retrieve(uri).await
    }

    /// Kinds of relationship between documents (`obs`, `updates`, `replaces`, ...).
    pub fn relationship_types(&self) -> RecordStream<'_, RelationshipType> {
        self.retrieve_multi(RelationshipTypeUri::collection())
    }

    pub async fn ballot_position_name(
        &self,
        uri: &BallotPositionNameUri,
    ) -> Result<Option<BallotPositionName>, DatatrackerError> {
        self.retrieve(uri).await
    }

    /// Positions an AD can take on a ballot ("Discuss", "No Objection", ...).
    pub fn ballot_position_names(&self) -> RecordStream<'_, BallotPositionName> {
        self.retrieve_multi(BallotPositionNameUri::collection())
    }

    pub async fn ballot_type(&self, uri: &BallotTypeUri) -> Result<Option<BallotType>, DatatrackerError> {
        self.retrieve(uri).await
    }

    pub fn ballot_types(&self, doc_type: Option<&DocumentType>) -> RecordStream<'_, BallotType> {
        let mut uri = BallotTypeUri::collection();
        uri.set_opt_param("doc_type", doc_type.map(|t| t.slug.as_str()));
        self.retrieve_multi(uri)
    }

    pub async fn ballot_document_event(
        &self,
        uri: &BallotDocumentEventUri,
    ) -> Result<Option<BallotDocumentEvent>, DatatrackerError> {
        self.retrieve(uri).await
    }

    pub fn ballot_document_events(
        &self,
        filter: &BallotDocumentEventFilter,
    ) -> RecordStream<'_, BallotDocumentEvent> {
        let mut uri = BallotDocumentEventUri::collection();
        filter.apply(&mut uri);
        self.retrieve_multi(uri)
    }

    pub async fn stream(&self, uri: &StreamUri) -> Result<Option<Stream>, DatatrackerError> {
        self.retrieve(uri).await
    }

    /// RFC publication streams (`ietf`, `irtf`, `iab`, `ise`, `legacy`).
    pub fn streams(&self) -> RecordStream<'_, Stream> {
        self.retrieve_multi(StreamUri::collection())
    }
}
