//! Meetings, schedules, sessions and timeslots.

use super::{MeetingFilter, path_segment};
use crate::datatracker::{DataTracker, DatatrackerError, RecordStream};
use crate::records::{Group, Meeting, MeetingType, Schedule, Session, SessionAssignment, Timeslot};
use crate::uri::{MeetingTypeUri, MeetingUri, ScheduleUri, SessionAssignmentUri, SessionUri, TimeslotUri};

impl DataTracker {
    pub async fn meeting(&self, uri: &MeetingUri) -> Result<Option<Meeting>, DatatrackerError> {
        self.retrieve(uri).await
    }

    /// Meetings whose first day falls inside the filter's date window.
    pub fn meetings(&self, filter: &MeetingFilter) -> RecordStream<'_, Meeting> {
        let mut uri = MeetingUri::collection();
        filter.apply(&mut uri);
        self.retrieve_multi(uri)
    }

    /// Fetches a meeting type by slug, e.g. `ietf` or `interim`.
    ///
    /// # Errors
    ///
    /// [`DatatrackerError::InvalidArgument`] if `slug` is not a single path segment.
    pub async fn meeting_type(&self, slug: &str) -> Result<Option<MeetingType>, DatatrackerError> {
        let slug = path_segment("meeting type", slug)?;
        self.retrieve(&MeetingTypeUri::new(format!("/api/v1/name/meetingtypename/{slug}/"))?)
            .await
    }

    pub fn meeting_types(&self) -> RecordStream<'_, MeetingType> {
        self.retrieve_multi(MeetingTypeUri::collection())
    }

    /// One version of a meeting's schedule. Pair with
    /// [`meeting_session_assignments`](Self::meeting_session_assignments) to
    /// see what runs in each timeslot.
    pub async fn meeting_schedule(&self, uri: &ScheduleUri) -> Result<Option<Schedule>, DatatrackerError> {
        self.retrieve(uri).await
    }

    pub async fn meeting_session_assignment(
        &self,
        uri: &SessionAssignmentUri,
    ) -> Result<Option<SessionAssignment>, DatatrackerError> {
        self.retrieve(uri).await
    }

    /// Session-to-timeslot assignments under one schedule.
    pub fn meeting_session_assignments(
        &self,
        schedule: &Schedule,
    ) -> RecordStream<'_, SessionAssignment> {
        let mut uri = SessionAssignmentUri::collection();
        uri.set_param("schedule", schedule.id);
        self.retrieve_multi(uri)
    }

    pub async fn meeting_session(&self, uri: &SessionUri) -> Result<Option<Session>, DatatrackerError> {
        self.retrieve(uri).await
    }

    /// Sessions held at `meeting`, optionally only those of one group.
    pub fn meeting_sessions(&self, meeting: &Meeting, group: Option<&Group>) -> RecordStream<'_, Session> {
        let mut uri = SessionUri::collection();
        uri.set_param("meeting", meeting.id);
        uri.set_opt_param("group", group.map(|g| g.id));
        self.retrieve_multi(uri)
    }

    pub async fn meeting_timeslot(&self, uri: &TimeslotUri) -> Result<Option<Timeslot>, DatatrackerError> {
        self.retrieve(uri).await
    }
}
