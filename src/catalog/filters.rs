//! Query filters for collection endpoints.
//!
//! Every filter is a plain struct whose `Default` applies no constraint. Only
//! fields that are `Some` become query parameters. Related records are
//! referred to by the key the server filters on (numeric `id` or `slug`); the
//! `with_*` helpers fill those keys from a record.

use chrono::{NaiveDate, NaiveDateTime};

use crate::records::{
    BallotType, Document, DocumentType, Group, GroupMilestone, GroupMilestoneStateName,
    GroupState, MeetingType, Person, RelationshipType, RoleName, Submission, timestamp,
};
use crate::uri::QueryParams;

const DATE_FORMAT: &str = "%Y-%m-%d";

fn set_time(uri: &mut impl QueryParams, name: &str, value: Option<NaiveDateTime>) {
    uri.set_opt_param(name, value.map(|t| t.format(timestamp::FORMAT)));
}

fn set_date(uri: &mut impl QueryParams, name: &str, value: Option<NaiveDate>) {
    uri.set_opt_param(name, value.map(|d| d.format(DATE_FORMAT)));
}

fn set_text(uri: &mut impl QueryParams, name: &str, value: Option<&String>) {
    uri.set_opt_param(name, value);
}

/// Filter for [`DataTracker::people`](crate::datatracker::DataTracker::people).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PeopleFilter {
    /// Records modified at or after this time.
    pub since: Option<NaiveDateTime>,
    /// Records modified before this time.
    pub until: Option<NaiveDateTime>,
    pub name_contains: Option<String>,
}

impl PeopleFilter {
    pub(crate) fn apply(&self, uri: &mut impl QueryParams) {
        set_time(uri, "time__gte", self.since);
        set_time(uri, "time__lt", self.until);
        set_text(uri, "name__contains", self.name_contains.as_ref());
    }
}

/// Filter for [`DataTracker::emails`](crate::datatracker::DataTracker::emails).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmailFilter {
    pub since: Option<NaiveDateTime>,
    pub until: Option<NaiveDateTime>,
    pub addr_contains: Option<String>,
}

impl EmailFilter {
    pub(crate) fn apply(&self, uri: &mut impl QueryParams) {
        set_time(uri, "time__gte", self.since);
        set_time(uri, "time__lt", self.until);
        set_text(uri, "address__contains", self.addr_contains.as_ref());
    }
}

/// Filter for [`DataTracker::documents`](crate::datatracker::DataTracker::documents).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentFilter {
    pub since: Option<NaiveDateTime>,
    pub until: Option<NaiveDateTime>,
    /// Document type slug, e.g. `draft`.
    pub doctype: Option<String>,
    /// Group id.
    pub group: Option<u64>,
}

impl DocumentFilter {
    #[must_use]
    pub fn with_doctype(mut self, doctype: &DocumentType) -> Self {
        self.doctype = Some(doctype.slug.clone());
        self
    }

    #[must_use]
    pub fn with_group(mut self, group: &Group) -> Self {
        self.group = Some(group.id);
        self
    }

    pub(crate) fn apply(&self, uri: &mut impl QueryParams) {
        set_time(uri, "time__gt", self.since);
        set_time(uri, "time__lt", self.until);
        set_text(uri, "type", self.doctype.as_ref());
        uri.set_opt_param("group", self.group);
    }
}

/// Filter for [`DataTracker::document_events`](crate::datatracker::DataTracker::document_events).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentEventFilter {
    pub since: Option<NaiveDateTime>,
    pub until: Option<NaiveDateTime>,
    /// Document id.
    pub doc: Option<u64>,
    /// Person id of whoever caused the event.
    pub by: Option<u64>,
    /// Event type, e.g. `new_revision`.
    pub event_type: Option<String>,
}

impl DocumentEventFilter {
    #[must_use]
    pub fn with_doc(mut self, doc: &Document) -> Self {
        self.doc = Some(doc.id);
        self
    }

    #[must_use]
    pub fn with_by(mut self, by: &Person) -> Self {
        self.by = Some(by.id);
        self
    }

    pub(crate) fn apply(&self, uri: &mut impl QueryParams) {
        set_time(uri, "time__gt", self.since);
        set_time(uri, "time__lt", self.until);
        uri.set_opt_param("doc", self.doc);
        uri.set_opt_param("by", self.by);
        set_text(uri, "type", self.event_type.as_ref());
    }
}

/// Filter for [`DataTracker::related_documents`](crate::datatracker::DataTracker::related_documents).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RelatedDocumentFilter {
    /// Id of the document the relationship starts from.
    pub source: Option<u64>,
    /// Id of the document alias the relationship points at.
    pub target: Option<u64>,
    /// Relationship slug, e.g. `obs` or `updates`.
    pub relationship: Option<String>,
}

impl RelatedDocumentFilter {
    #[must_use]
    pub fn with_source(mut self, source: &Document) -> Self {
        self.source = Some(source.id);
        self
    }

    #[must_use]
    pub fn with_relationship(mut self, relationship: &RelationshipType) -> Self {
        self.relationship = Some(relationship.slug.clone());
        self
    }

    pub(crate) fn apply(&self, uri: &mut impl QueryParams) {
        uri.set_opt_param("source", self.source);
        uri.set_opt_param("target", self.target);
        set_text(uri, "relationship", self.relationship.as_ref());
    }
}

/// Filter for [`DataTracker::ballot_document_events`](crate::datatracker::DataTracker::ballot_document_events).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BallotDocumentEventFilter {
    pub since: Option<NaiveDateTime>,
    pub until: Option<NaiveDateTime>,
    /// Ballot type id.
    pub ballot_type: Option<u64>,
    pub event_type: Option<String>,
    pub by: Option<u64>,
    pub doc: Option<u64>,
}

impl BallotDocumentEventFilter {
    #[must_use]
    pub fn with_ballot_type(mut self, ballot_type: &BallotType) -> Self {
        self.ballot_type = Some(ballot_type.id);
        self
    }

    #[must_use]
    pub fn with_doc(mut self, doc: &Document) -> Self {
        self.doc = Some(doc.id);
        self
    }

    pub(crate) fn apply(&self, uri: &mut impl QueryParams) {
        set_time(uri, "time__gt", self.since);
        set_time(uri, "time__lt", self.until);
        uri.set_opt_param("ballot_type", self.ballot_type);
        uri.set_opt_param("by", self.by);
        uri.set_opt_param("doc", self.doc);
        set_text(uri, "type", self.event_type.as_ref());
    }
}

/// Filter for [`DataTracker::submissions`](crate::datatracker::DataTracker::submissions).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmissionFilter {
    pub since: Option<NaiveDateTime>,
    pub until: Option<NaiveDateTime>,
}

impl SubmissionFilter {
    pub(crate) fn apply(&self, uri: &mut impl QueryParams) {
        set_time(uri, "time__gt", self.since);
        set_time(uri, "time__lt", self.until);
    }
}

/// Filter for [`DataTracker::submission_events`](crate::datatracker::DataTracker::submission_events).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmissionEventFilter {
    pub since: Option<NaiveDateTime>,
    pub until: Option<NaiveDateTime>,
    pub by: Option<u64>,
    /// Submission id.
    pub submission: Option<u64>,
}

impl SubmissionEventFilter {
    #[must_use]
    pub fn with_submission(mut self, submission: &Submission) -> Self {
        self.submission = Some(submission.id);
        self
    }

    pub(crate) fn apply(&self, uri: &mut impl QueryParams) {
        set_time(uri, "time__gt", self.since);
        set_time(uri, "time__lt", self.until);
        uri.set_opt_param("by", self.by);
        uri.set_opt_param("submission", self.submission);
    }
}

/// Filter for [`DataTracker::groups`](crate::datatracker::DataTracker::groups)
/// and, ignoring `name_contains`, [`DataTracker::group_histories`](crate::datatracker::DataTracker::group_histories).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupFilter {
    pub since: Option<NaiveDateTime>,
    pub until: Option<NaiveDateTime>,
    pub name_contains: Option<String>,
    /// Group state slug, e.g. `active`.
    pub state: Option<String>,
    /// Parent group id.
    pub parent: Option<u64>,
}

impl GroupFilter {
    #[must_use]
    pub fn with_state(mut self, state: &GroupState) -> Self {
        self.state = Some(state.slug.clone());
        self
    }

    #[must_use]
    pub fn with_parent(mut self, parent: &Group) -> Self {
        self.parent = Some(parent.id);
        self
    }

    pub(crate) fn apply(&self, uri: &mut impl QueryParams) {
        self.apply_history(uri);
        set_text(uri, "name__contains", self.name_contains.as_ref());
    }

    pub(crate) fn apply_history(&self, uri: &mut impl QueryParams) {
        set_time(uri, "time__gt", self.since);
        set_time(uri, "time__lt", self.until);
        set_text(uri, "state", self.state.as_ref());
        uri.set_opt_param("parent", self.parent);
    }
}

/// Filter for [`DataTracker::group_events`](crate::datatracker::DataTracker::group_events).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupEventFilter {
    pub since: Option<NaiveDateTime>,
    pub until: Option<NaiveDateTime>,
    pub by: Option<u64>,
    pub group: Option<u64>,
    pub event_type: Option<String>,
}

impl GroupEventFilter {
    #[must_use]
    pub fn with_group(mut self, group: &Group) -> Self {
        self.group = Some(group.id);
        self
    }

    pub(crate) fn apply(&self, uri: &mut impl QueryParams) {
        set_time(uri, "time__gt", self.since);
        set_time(uri, "time__lt", self.until);
        set_text(uri, "type", self.event_type.as_ref());
        uri.set_opt_param("by", self.by);
        uri.set_opt_param("group", self.group);
    }
}

/// Filter for [`DataTracker::group_milestones`](crate::datatracker::DataTracker::group_milestones).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupMilestoneFilter {
    pub since: Option<NaiveDateTime>,
    pub until: Option<NaiveDateTime>,
    pub group: Option<u64>,
    /// Milestone state slug.
    pub state: Option<String>,
}

impl GroupMilestoneFilter {
    #[must_use]
    pub fn with_group(mut self, group: &Group) -> Self {
        self.group = Some(group.id);
        self
    }

    #[must_use]
    pub fn with_state(mut self, state: &GroupMilestoneStateName) -> Self {
        self.state = Some(state.slug.clone());
        self
    }

    pub(crate) fn apply(&self, uri: &mut impl QueryParams) {
        set_time(uri, "time__gt", self.since);
        set_time(uri, "time__lt", self.until);
        uri.set_opt_param("group", self.group);
        set_text(uri, "state", self.state.as_ref());
    }
}

/// Filter for [`DataTracker::group_milestone_histories`](crate::datatracker::DataTracker::group_milestone_histories).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupMilestoneHistoryFilter {
    pub since: Option<NaiveDateTime>,
    pub until: Option<NaiveDateTime>,
    pub group: Option<u64>,
    /// Milestone id.
    pub milestone: Option<u64>,
    pub state: Option<String>,
}

impl GroupMilestoneHistoryFilter {
    #[must_use]
    pub fn with_milestone(mut self, milestone: &GroupMilestone) -> Self {
        self.milestone = Some(milestone.id);
        self
    }

    pub(crate) fn apply(&self, uri: &mut impl QueryParams) {
        set_time(uri, "time__gt", self.since);
        set_time(uri, "time__lt", self.until);
        uri.set_opt_param("group", self.group);
        uri.set_opt_param("milestone", self.milestone);
        set_text(uri, "state", self.state.as_ref());
    }
}

/// Filter for [`DataTracker::group_milestone_events`](crate::datatracker::DataTracker::group_milestone_events).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupMilestoneEventFilter {
    pub since: Option<NaiveDateTime>,
    pub until: Option<NaiveDateTime>,
    pub by: Option<u64>,
    pub group: Option<u64>,
    pub milestone: Option<u64>,
    pub event_type: Option<String>,
}

impl GroupMilestoneEventFilter {
    pub(crate) fn apply(&self, uri: &mut impl QueryParams) {
        set_time(uri, "time__gt", self.since);
        set_time(uri, "time__lt", self.until);
        set_text(uri, "type", self.event_type.as_ref());
        uri.set_opt_param("by", self.by);
        uri.set_opt_param("group", self.group);
        uri.set_opt_param("milestone", self.milestone);
    }
}

/// Filter for [`DataTracker::group_state_change_events`](crate::datatracker::DataTracker::group_state_change_events).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupStateChangeEventFilter {
    pub since: Option<NaiveDateTime>,
    pub until: Option<NaiveDateTime>,
    pub by: Option<u64>,
    pub group: Option<u64>,
    pub state: Option<String>,
}

impl GroupStateChangeEventFilter {
    pub(crate) fn apply(&self, uri: &mut impl QueryParams) {
        set_time(uri, "time__gt", self.since);
        set_time(uri, "time__lt", self.until);
        uri.set_opt_param("by", self.by);
        uri.set_opt_param("group", self.group);
        set_text(uri, "state", self.state.as_ref());
    }
}

/// Filter for [`DataTracker::group_roles`](crate::datatracker::DataTracker::group_roles)
/// and [`DataTracker::group_role_histories`](crate::datatracker::DataTracker::group_role_histories).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupRoleFilter {
    pub email: Option<String>,
    pub group: Option<u64>,
    /// Role slug, e.g. `chair` or `ad`.
    pub name: Option<String>,
    pub person: Option<u64>,
}

impl GroupRoleFilter {
    #[must_use]
    pub fn with_group(mut self, group: &Group) -> Self {
        self.group = Some(group.id);
        self
    }

    #[must_use]
    pub fn with_name(mut self, name: &RoleName) -> Self {
        self.name = Some(name.slug.clone());
        self
    }

    #[must_use]
    pub fn with_person(mut self, person: &Person) -> Self {
        self.person = Some(person.id);
        self
    }

    pub(crate) fn apply(&self, uri: &mut impl QueryParams) {
        set_text(uri, "email", self.email.as_ref());
        uri.set_opt_param("group", self.group);
        set_text(uri, "name", self.name.as_ref());
        uri.set_opt_param("person", self.person);
    }
}

/// Filter for [`DataTracker::meetings`](crate::datatracker::DataTracker::meetings).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MeetingFilter {
    /// First day of the window, inclusive.
    pub start_date: Option<NaiveDate>,
    /// Last day of the window, inclusive.
    pub end_date: Option<NaiveDate>,
    /// Meeting type slug, e.g. `ietf` or `interim`.
    pub meeting_type: Option<String>,
}

impl MeetingFilter {
    #[must_use]
    pub fn with_meeting_type(mut self, meeting_type: &MeetingType) -> Self {
        self.meeting_type = Some(meeting_type.slug.clone());
        self
    }

    pub(crate) fn apply(&self, uri: &mut impl QueryParams) {
        set_date(uri, "date__gte", self.start_date);
        set_date(uri, "date__lte", self.end_date);
        set_text(uri, "type", self.meeting_type.as_ref());
    }
}
