//! Endpoint-specific accessors on [`DataTracker`].
//!
//! Each accessor builds one identifier for its endpoint, maps the filters it
//! was given onto query parameters, and hands off to
//! [`DataTracker::retrieve`] or [`DataTracker::retrieve_multi`]. Nothing here
//! talks to the network directly.
//!
//! The accessors are split by API area, one `impl DataTracker` block per file.

mod documents;
mod filters;
mod groups;
mod mailing_lists;
mod meetings;
mod people;
mod submissions;

use futures_util::TryStreamExt;

pub use filters::{
    BallotDocumentEventFilter, DocumentEventFilter, DocumentFilter, EmailFilter, GroupEventFilter,
    GroupFilter, GroupMilestoneEventFilter, GroupMilestoneFilter, GroupMilestoneHistoryFilter,
    GroupRoleFilter, GroupStateChangeEventFilter, MeetingFilter, PeopleFilter,
    RelatedDocumentFilter, SubmissionEventFilter, SubmissionFilter,
};

use crate::datatracker::{DatatrackerError, RecordStream};

/// Drains `records`, returning the only element.
///
/// No match is `Ok(None)`; more than one is [`DatatrackerError::AmbiguousLookup`].
async fn at_most_one<R>(
    records: RecordStream<'_, R>,
    what: &'static str,
    name: &str,
) -> Result<Option<R>, DatatrackerError> {
    let mut matches: Vec<R> = records.try_collect().await?;
    match matches.len() {
        0 | 1 => Ok(matches.pop()),
        n => Err(DatatrackerError::ambiguous(what, name, n)),
    }
}

/// Checks that a name is a single path segment that can be spliced into an endpoint path.
fn path_segment<'a>(argument: &'static str, value: &'a str) -> Result<&'a str, DatatrackerError> {
    if value.is_empty() || value.contains(['/', '?', '#']) || value == "." || value == ".." {
        return Err(DatatrackerError::invalid_argument(
            argument,
            format!("'{value}' is not a single path segment"),
        ));
    }
    Ok(value)
}

/// Lower-cases `value` and checks that it starts with `prefix`.
fn series_name(
    argument: &'static str,
    prefix: &str,
    value: &str,
) -> Result<String, DatatrackerError> {
    let lowered = value.to_ascii_lowercase();
    if !lowered.starts_with(prefix) {
        return Err(DatatrackerError::invalid_argument(
            argument,
            format!("'{value}' does not start with '{prefix}'"),
        ));
    }
    Ok(lowered)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use futures_util::StreamExt;
    use futures_util::stream;

    #[test]
    fn test_path_segment_rejects_separators() {
        assert!(path_segment("name", "draft-ietf-quic-transport").is_ok());
        assert!(path_segment("name", "").is_err());
        assert!(path_segment("name", "a/b").is_err());
        assert!(path_segment("name", "a?b=c").is_err());
        assert!(path_segment("name", "..").is_err());
    }

    #[test]
    fn test_series_name_lowercases() {
        assert_eq!(series_name("rfc", "rfc", "RFC3550").unwrap(), "rfc3550");
        let err = series_name("rfc", "rfc", "bcp14").unwrap_err();
        assert!(matches!(err, DatatrackerError::InvalidArgument { argument: "rfc", .. }));
    }

    #[tokio::test]
    async fn test_at_most_one() {
        let none = stream::iter(Vec::<Result<u32, DatatrackerError>>::new()).boxed();
        assert_eq!(at_most_one(none, "test", "x").await.unwrap(), None);

        let one = stream::iter(vec![Ok(7)]).boxed();
        assert_eq!(at_most_one(one, "test", "x").await.unwrap(), Some(7));

        let two = stream::iter(vec![Ok(1), Ok(2)]).boxed();
        let err = at_most_one(two, "test", "x").await.unwrap_err();
        assert!(matches!(err, DatatrackerError::AmbiguousLookup { matches: 2, .. }));
    }
}
