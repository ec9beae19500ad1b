//! Mailing lists and subscriptions.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::{impl_resource, timestamp};
use crate::uri::{MailingListSubscriptionsUri, MailingListUri};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MailingList {
    pub id: u64,
    pub resource_uri: MailingListUri,
    pub name: String,
    pub description: String,
    pub advertised: bool,
}

/// The lists one email address is subscribed to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MailingListSubscriptions {
    pub id: u64,
    pub resource_uri: MailingListSubscriptionsUri,
    pub email: String,
    pub lists: Vec<MailingListUri>,
    #[serde(with = "timestamp")]
    pub time: NaiveDateTime,
}

impl_resource! {
    MailingList => MailingListUri,
    MailingListSubscriptions => MailingListSubscriptionsUri,
}
