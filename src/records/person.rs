//! People, their aliases and events, and email addresses.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::{Resource, impl_resource, timestamp};
use crate::uri::{EmailUri, PersonAliasUri, PersonEventUri, PersonUri};

/// A person known to the Datatracker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub resource_uri: PersonUri,
    pub id: u64,
    pub name: String,
    /// Name as extracted from a draft; absent for people who never authored one.
    pub name_from_draft: Option<String>,
    pub ascii: String,
    pub ascii_short: Option<String>,
    pub user: String,
    #[serde(with = "timestamp")]
    pub time: NaiveDateTime,
    pub photo: String,
    pub photo_thumb: String,
    pub biography: String,
    pub consent: Option<bool>,
}

/// A snapshot of a [`Person`] as it was at `history_date`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoricalPerson {
    #[serde(flatten)]
    pub person: Person,
    pub history_change_reason: Option<String>,
    pub history_user: Option<String>,
    pub history_id: u64,
    pub history_type: String,
    #[serde(with = "timestamp")]
    pub history_date: NaiveDateTime,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonAlias {
    pub id: u64,
    pub resource_uri: PersonAliasUri,
    pub person: PersonUri,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonEvent {
    pub desc: String,
    pub id: u64,
    pub person: PersonUri,
    pub resource_uri: PersonEventUri,
    #[serde(with = "timestamp")]
    pub time: NaiveDateTime,
    #[serde(rename = "type")]
    pub event_type: String,
}

/// An email address and the person it belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Email {
    pub resource_uri: EmailUri,
    pub person: PersonUri,
    pub address: String,
    #[serde(with = "timestamp")]
    pub time: NaiveDateTime,
    pub origin: String,
    pub primary: bool,
    pub active: bool,
}

/// A snapshot of an [`Email`] as it was at `history_date`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoricalEmail {
    #[serde(flatten)]
    pub email: Email,
    pub history_change_reason: Option<String>,
    pub history_user: Option<String>,
    pub history_id: u64,
    pub history_type: String,
    #[serde(with = "timestamp")]
    pub history_date: NaiveDateTime,
}

impl_resource! {
    Person => PersonUri,
    PersonAlias => PersonAliasUri,
    PersonEvent => PersonEventUri,
    Email => EmailUri,
}

impl Resource for HistoricalPerson {
    type Uri = PersonUri;
    const KIND: &'static str = "HistoricalPerson";

    fn resource_uri(&self) -> &PersonUri {
        &self.person.resource_uri
    }
}

impl Resource for HistoricalEmail {
    type Uri = EmailUri;
    const KIND: &'static str = "HistoricalEmail";

    fn resource_uri(&self) -> &EmailUri {
        &self.email.resource_uri
    }
}
