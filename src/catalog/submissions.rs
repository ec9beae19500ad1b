//! Internet-Draft submissions.

use super::{SubmissionEventFilter, SubmissionFilter};
use crate::datatracker::{DataTracker, DatatrackerError, RecordStream};
use crate::records::{Submission, SubmissionEvent};
use crate::uri::{SubmissionEventUri, SubmissionUri};

impl DataTracker {
    pub async fn submission(&self, uri: &SubmissionUri) -> Result<Option<Submission>, DatatrackerError> {
        self.retrieve(uri).await
    }

    pub fn submissions(&self, filter: &SubmissionFilter) -> RecordStream<'_, Submission> {
        let mut uri = SubmissionUri::collection();
        filter.apply(&mut uri);
        self.retrieve_multi(uri)
    }

    pub async fn submission_event(
        &self,
        uri: &SubmissionEventUri,
    ) -> Result<Option<SubmissionEvent>, DatatrackerError> {
        self.retrieve(uri).await
    }

    pub fn submission_events(&self, filter: &SubmissionEventFilter) -> RecordStream<'_, SubmissionEvent> {
        let mut uri = SubmissionEventUri::collection();
        filter.apply(&mut uri);
        self.retrieve_multi(uri)
    }
}
