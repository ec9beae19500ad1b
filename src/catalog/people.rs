//! People and email addresses.

use tracing::instrument;

use super::{EmailFilter, PeopleFilter, path_segment};
use crate::datatracker::{DataTracker, DatatrackerError, RecordStream};
use crate::records::{Email, HistoricalEmail, HistoricalPerson, Person, PersonAlias, PersonEvent};
use crate::uri::{EmailUri, PersonAliasUri, PersonEventUri, PersonUri};

impl DataTracker {
    /// Fetches one person.
    pub async fn person(&self, uri: &PersonUri) -> Result<Option<Person>, DatatrackerError> {
        self.retrieve(uri).await
    }

    /// Looks up the person who owns an email address.
    ///
    /// Two fetches: the address record, then the person it points at.
    ///
    /// # Errors
    ///
    /// [`DatatrackerError::InvalidArgument`] if `address` cannot be used as a
    /// path segment, plus any retrieval error.
    #[instrument(skip(self))]
    pub async fn person_from_email(&self, address: &str) -> Result<Option<Person>, DatatrackerError> {
        let address = path_segment("email address", address)?;
        let uri = EmailUri::new(format!("/api/v1/person/email/{address}/"))?;
        match self.email(&uri).await? {
            Some(email) => self.person(&email.person).await,
            None => Ok(None),
        }
    }

    pub fn person_aliases(&self, person: &Person) -> RecordStream<'_, PersonAlias> {
        let mut uri = PersonAliasUri::collection();
        uri.set_param("person", person.id);
        self.retrieve_multi(uri)
    }

    /// Earlier snapshots of a person record.
    pub fn person_history(&self, person: &Person) -> RecordStream<'_, HistoricalPerson> {
        let mut uri = PersonUri::historical();
        uri.set_param("id", person.id);
        self.retrieve_multi(uri)
    }

    pub fn person_events(&self, person: &Person) -> RecordStream<'_, PersonEvent> {
        let mut uri = PersonEventUri::collection();
        uri.set_param("person", person.id);
        self.retrieve_multi(uri)
    }

    /// Every person matching `filter`. Unfiltered, this is tens of thousands of records.
    pub fn people(&self, filter: &PeopleFilter) -> RecordStream<'_, Person> {
        let mut uri = PersonUri::collection();
        filter.apply(&mut uri);
        self.retrieve_multi(uri)
    }

    pub async fn email(&self, uri: &EmailUri) -> Result<Option<Email>, DatatrackerError> {
        self.retrieve(uri).await
    }

    pub fn email_for_person(&self, person: &Person) -> RecordStream<'_, Email> {
        let mut uri = EmailUri::collection();
        uri.set_param("person", person.id);
        self.retrieve_multi(uri)
    }

    pub fn email_history_for_address(&self, address: &str) -> RecordStream<'_, HistoricalEmail> {
        let mut uri = EmailUri::historical();
        uri.set_param("address", address);
        self.retrieve_multi(uri)
    }

    pub fn email_history_for_person(&self, person: &Person) -> RecordStream<'_, HistoricalEmail> {
        let mut uri = EmailUri::historical();
        uri.set_param("person", person.id);
        self.retrieve_multi(uri)
    }

    pub fn emails(&self, filter: &EmailFilter) -> RecordStream<'_, Email> {
        let mut uri = EmailUri::collection();
        filter.apply(&mut uri);
        self.retrieve_multi(uri)
    }
}
