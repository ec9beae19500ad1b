//! Draft submissions and their events.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::{impl_resource, timestamp};
use crate::uri::{DocumentUri, GroupUri, PersonUri, SubmissionCheckUri, SubmissionEventUri, SubmissionUri};

/// An upload of a new draft revision through the submission tool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Submission {
    #[serde(rename = "abstract")]
    pub abstract_text: String,
    pub access_key: String,
    pub auth_key: String,
    /// Author list as rendered by the submission tool.
    pub authors: String,
    pub checks: Vec<SubmissionCheckUri>,
    pub document_date: String,
    pub draft: DocumentUri,
    pub file_size: Option<u64>,
    /// Comma-separated file extensions, e.g. `.txt,.xml`.
    pub file_types: String,
    pub first_two_pages: String,
    pub group: Option<GroupUri>,
    pub id: u64,
    pub name: String,
    pub note: String,
    pub pages: Option<u32>,
    pub remote_ip: String,
    /// Comma-separated names of drafts this submission replaces.
    pub replaces: String,
    pub resource_uri: SubmissionUri,
    pub rev: String,
    pub state: String,
    pub submission_date: String,
    pub submitter: String,
    pub title: String,
    pub words: Option<u32>,
}

impl Submission {
    /// `(file_type, url)` pairs for each format this submission was uploaded in.
    pub fn urls(&self) -> impl Iterator<Item = (&str, String)> + '_ {
        self.file_types
            .split(',')
            .filter(|file_type| !file_type.is_empty())
            .map(move |file_type| {
                let url = format!(
                    "https://www.ietf.org/archive/id/{}-{}{file_type}",
                    self.name, self.rev
                );
                (file_type, url)
            })
    }

    /// Names of the drafts replaced by this submission.
    pub fn replaced_drafts(&self) -> impl Iterator<Item = &str> + '_ {
        self.replaces.split(',').map(str::trim).filter(|name| !name.is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionEvent {
    pub by: Option<PersonUri>,
    pub desc: String,
    pub id: u64,
    pub resource_uri: SubmissionEventUri,
    pub submission: SubmissionUri,
    #[serde(with = "timestamp")]
    pub time: NaiveDateTime,
}

impl_resource! {
    Submission => SubmissionUri,
    SubmissionEvent => SubmissionEventUri,
}
