//! Mailing lists.

use crate::datatracker::{DataTracker, DatatrackerError, RecordStream};
use crate::records::{MailingList, MailingListSubscriptions};
use crate::uri::{MailingListSubscriptionsUri, MailingListUri};

impl DataTracker {
    pub async fn mailing_list(&self, uri: &MailingListUri) -> Result<Option<MailingList>, DatatrackerError> {
        self.retrieve(uri).await
    }

    pub fn mailing_lists(&self) -> RecordStream<'_, MailingList> {
        self.retrieve_multi(MailingListUri::collection())
    }

    /// Subscription records, optionally only those of one address.
    pub fn mailing_list_subscriptions(
        &self,
        email: Option<&str>,
    ) -> RecordStream<'_, MailingListSubscriptions> {
        let mut uri = MailingListSubscriptionsUri::collection();
        uri.set_opt_param("email", email);
        self.retrieve_multi(uri)
    }
}
