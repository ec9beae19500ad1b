//! Typed records decoded from Datatracker JSON objects.
//!
//! Records are plain data: each one carries its own `resource_uri` and refers
//! to related resources only through typed identifiers, never by embedding
//! them. Follow a reference by handing the identifier back to the matching
//! [`DataTracker`](crate::datatracker::DataTracker) accessor.
//!
//! Unknown JSON fields are ignored so that server-side schema additions do not
//! break decoding.

mod country;
mod document;
mod group;
mod mailing_list;
mod meeting;
mod person;
mod submission;
pub mod timestamp;

use serde::de::DeserializeOwned;

use crate::uri::ResourceUri;

pub use country::normalise_country;
pub use document::{
    BallotDocumentEvent, BallotPositionName, BallotType, Document, DocumentAlias, DocumentAuthor,
    DocumentEvent, DocumentState, DocumentStateType, DocumentType, RelatedDocument,
    RelationshipType, Stream,
};
pub use group::{
    Group, GroupEvent, GroupHistory, GroupMilestone, GroupMilestoneEvent, GroupMilestoneHistory,
    GroupMilestoneStateName, GroupRole, GroupRoleHistory, GroupState, GroupStateChangeEvent,
    GroupTypeName, GroupUrl, RoleName,
};
pub use mailing_list::{MailingList, MailingListSubscriptions};
pub use meeting::{Meeting, MeetingStatus, MeetingType, Schedule, Session, SessionAssignment, Timeslot};
pub use person::{Email, HistoricalEmail, HistoricalPerson, Person, PersonAlias, PersonEvent};
pub use submission::{Submission, SubmissionEvent};

/// A record that can be fetched from the Datatracker.
pub trait Resource: DeserializeOwned + Send + 'static {
    /// The identifier type of this record's `resource_uri`.
    type Uri: ResourceUri;

    /// Record kind name used in decode errors and logs.
    const KIND: &'static str;

    /// The record's own identifier.
    fn resource_uri(&self) -> &Self::Uri;
}

/// Implements [`Resource`] for records whose `resource_uri` field sits at the top level.
macro_rules! impl_resource {
    ($($record:ident => $uri:ty),+ $(,)?) => {
        $(
            impl $crate::records::Resource for $record {
                type Uri = $uri;
                const KIND: &'static str = stringify!($record);

                fn resource_uri(&self) -> &$uri {
                    &self.resource_uri
                }
            }
        )+
    };
}

pub(crate) use impl_resource;
