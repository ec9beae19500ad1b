//! Identifier declarations for every Datatracker resource kind.
//!
//! Grouped the way the API groups its endpoints.

use super::{ResourceUri, resource_uri};

// ==================== People and email ====================

resource_uri! {
    /// A person, or a historical snapshot of one.
    PersonUri => ["/api/v1/person/person/", "/api/v1/person/historicalperson/"]
}

resource_uri! {
    /// An alternative name recorded for a person.
    PersonAliasUri => ["/api/v1/person/alias/"]
}

resource_uri! {
    /// An event in the life of a person record.
    PersonEventUri => ["/api/v1/person/personevent/"]
}

resource_uri! {
    /// An email address, or a historical snapshot of one.
    EmailUri => ["/api/v1/person/email/", "/api/v1/person/historicalemail/"]
}

// ==================== Documents ====================

resource_uri! {
    /// A document (Internet-Draft, RFC, charter, slides, ...).
    DocumentUri => ["/api/v1/doc/document/"]
}

resource_uri! {
    /// A document type name, e.g. `draft` or `charter`.
    DocumentTypeUri => ["/api/v1/name/doctypename/"]
}

resource_uri! {
    DocumentStateTypeUri => ["/api/v1/doc/statetype/"]
}

resource_uri! {
    DocumentStateUri => ["/api/v1/doc/state/"]
}

resource_uri! {
    /// An alias such as `rfc3550`, `bcp25` or `std68`.
    DocumentAliasUri => ["/api/v1/doc/docalias/"]
}

resource_uri! {
    DocumentEventUri => ["/api/v1/doc/docevent/"]
}

resource_uri! {
    DocumentAuthorUri => ["/api/v1/doc/documentauthor/"]
}

resource_uri! {
    RelationshipTypeUri => ["/api/v1/name/docrelationshipname/"]
}

resource_uri! {
    RelatedDocumentUri => ["/api/v1/doc/relateddocument/"]
}

resource_uri! {
    /// The standards level a document is intended for.
    IntendedStdLevelUri => ["/api/v1/name/intendedstdlevelname/"]
}

resource_uri! {
    /// The standards level a document was published at.
    StdLevelUri => ["/api/v1/name/stdlevelname/"]
}

resource_uri! {
    /// An RFC publication stream (IETF, IAB, IRTF, independent).
    StreamUri => ["/api/v1/name/streamname/"]
}

// ==================== Ballots ====================

resource_uri! {
    BallotPositionNameUri => ["/api/v1/name/ballotpositionname/"]
}

resource_uri! {
    BallotTypeUri => ["/api/v1/doc/ballottype/"]
}

resource_uri! {
    BallotDocumentEventUri => ["/api/v1/doc/ballotdocevent/"]
}

// ==================== Submissions ====================

resource_uri! {
    SubmissionUri => ["/api/v1/submit/submission/"]
}

resource_uri! {
    SubmissionCheckUri => ["/api/v1/submit/submissioncheck/"]
}

resource_uri! {
    SubmissionEventUri => ["/api/v1/submit/submissionevent/"]
}

// ==================== Groups ====================

resource_uri! {
    /// A working group, research group, area, directorate, ...
    GroupUri => ["/api/v1/group/group/"]
}

resource_uri! {
    GroupHistoryUri => ["/api/v1/group/grouphistory/"]
}

resource_uri! {
    GroupEventUri => ["/api/v1/group/groupevent/"]
}

resource_uri! {
    GroupUrlUri => ["/api/v1/group/groupurl/"]
}

resource_uri! {
    GroupStateUri => ["/api/v1/name/groupstatename/"]
}

resource_uri! {
    GroupTypeNameUri => ["/api/v1/name/grouptypename/"]
}

resource_uri! {
    GroupMilestoneStateNameUri => ["/api/v1/name/groupmilestonestatename/"]
}

resource_uri! {
    GroupMilestoneUri => ["/api/v1/group/groupmilestone/"]
}

resource_uri! {
    GroupMilestoneHistoryUri => ["/api/v1/group/groupmilestonehistory/"]
}

resource_uri! {
    GroupMilestoneEventUri => ["/api/v1/group/milestonegroupevent/"]
}

resource_uri! {
    GroupStateChangeEventUri => ["/api/v1/group/changestategroupevent/"]
}

resource_uri! {
    RoleNameUri => ["/api/v1/name/rolename/"]
}

resource_uri! {
    GroupRoleUri => ["/api/v1/group/role/"]
}

resource_uri! {
    GroupRoleHistoryUri => ["/api/v1/group/rolehistory/"]
}

// ==================== Meetings ====================

resource_uri! {
    MeetingUri => ["/api/v1/meeting/meeting/"]
}

resource_uri! {
    MeetingTypeUri => ["/api/v1/name/meetingtypename/"]
}

resource_uri! {
    /// One version of a meeting agenda.
    ScheduleUri => ["/api/v1/meeting/schedule/"]
}

resource_uri! {
    SessionUri => ["/api/v1/meeting/session/"]
}

resource_uri! {
    TimeslotUri => ["/api/v1/meeting/timeslot/"]
}

resource_uri! {
    SessionAssignmentUri => ["/api/v1/meeting/schedtimesessassignment/"]
}

// ==================== Mailing lists ====================

resource_uri! {
    MailingListUri => ["/api/v1/mailinglists/list/"]
}

resource_uri! {
    MailingListSubscriptionsUri => ["/api/v1/mailinglists/subscribed/"]
}

// ==================== History endpoints ====================

impl PersonUri {
    /// The `historicalperson` collection.
    #[must_use]
    pub fn historical() -> Self {
        Self(super::Uri::unchecked(
            Self::PREFIXES[1].to_string(),
            std::collections::BTreeMap::new(),
        ))
    }
}

impl EmailUri {
    /// The `historicalemail` collection.
    #[must_use]
    pub fn historical() -> Self {
        Self(super::Uri::unchecked(
            Self::PREFIXES[1].to_string(),
            std::collections::BTreeMap::new(),
        ))
    }
}
