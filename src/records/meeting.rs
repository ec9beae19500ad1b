//! Meetings, their schedules, sessions and timeslots.

use chrono::{Days, Local, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use super::{impl_resource, timestamp};
use crate::uri::{
    DocumentUri, GroupUri, MeetingTypeUri, MeetingUri, PersonUri, ScheduleUri,
    SessionAssignmentUri, SessionUri, TimeslotUri,
};

/// Where a meeting sits relative to a given day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MeetingStatus {
    Future,
    Ongoing,
    Completed,
}

/// A meeting type such as `ietf` or `interim`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeetingType {
    pub name: String,
    pub order: i32,
    pub resource_uri: MeetingTypeUri,
    pub slug: String,
    pub desc: String,
    pub used: bool,
}

/// One version of a meeting's agenda.
///
/// Use `meeting_session_assignments()` to find which session sits in which
/// timeslot under this schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    pub id: u64,
    pub name: String,
    pub resource_uri: ScheduleUri,
    pub owner: PersonUri,
    pub meeting: MeetingUri,
    pub visible: bool,
    pub public: bool,
    pub badness: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meeting {
    pub id: u64,
    pub resource_uri: MeetingUri,
    #[serde(rename = "type")]
    pub meeting_type: MeetingTypeUri,
    pub country: String,
    pub city: String,
    pub venue_name: String,
    pub venue_addr: String,
    /// First day of the meeting.
    pub date: NaiveDate,
    /// Length of the meeting in days.
    pub days: u32,
    pub time_zone: String,
    pub acknowledgements: String,
    pub agenda_info_note: String,
    pub agenda_warning_note: String,
    pub session_request_lock_message: String,
    pub idsubmit_cutoff_warning_days: String,
    pub idsubmit_cutoff_time_utc: String,
    pub idsubmit_cutoff_day_offset_00: i32,
    pub idsubmit_cutoff_day_offset_01: i32,
    pub submission_start_day_offset: i32,
    pub submission_cutoff_day_offset: i32,
    pub submission_correction_day_offset: i32,
    /// Same as `schedule`; kept for older clients.
    pub agenda: Option<ScheduleUri>,
    /// The current schedule. Absent until the secretariat publishes one.
    pub schedule: Option<ScheduleUri>,
    pub number: String,
    pub break_area: String,
    pub reg_area: String,
    pub proceedings_final: bool,
    pub show_important_dates: bool,
    pub attendees: Option<u32>,
    #[serde(with = "timestamp")]
    pub updated: NaiveDateTime,
}

impl Meeting {
    /// Last day of the meeting.
    #[must_use]
    pub fn end_date(&self) -> NaiveDate {
        let extra = u64::from(self.days.saturating_sub(1));
        self.date.checked_add_days(Days::new(extra)).unwrap_or(NaiveDate::MAX)
    }

    /// Status of the meeting on `today`.
    ///
    /// Works at day granularity: the whole of the last day, as given by
    /// [`end_date`](Self::end_date), counts as [`MeetingStatus::Ongoing`].
    /// The meeting is only [`MeetingStatus::Completed`] from the day after.
    #[must_use]
    pub fn status_on(&self, today: NaiveDate) -> MeetingStatus {
        if self.date > today {
            MeetingStatus::Future
        } else if self.end_date() < today {
            MeetingStatus::Completed
        } else {
            MeetingStatus::Ongoing
        }
    }

    /// Status of the meeting today, in local time.
    #[must_use]
    pub fn status(&self) -> MeetingStatus {
        self.status_on(Local::now().date_naive())
    }
}

/// A block of time in a room during a meeting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timeslot {
    pub id: u64,
    pub resource_uri: TimeslotUri,
    #[serde(rename = "type")]
    pub slot_type: String,
    pub meeting: MeetingUri,
    /// Sessions assigned to this slot across agenda versions; the current one is last.
    pub sessions: Vec<SessionUri>,
    pub name: String,
    #[serde(with = "timestamp")]
    pub time: NaiveDateTime,
    pub duration: String,
    pub location: String,
    pub show_location: bool,
    #[serde(with = "timestamp")]
    pub modified: NaiveDateTime,
}

/// The placement of a session into a timeslot within one schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionAssignment {
    pub id: u64,
    pub resource_uri: SessionAssignmentUri,
    pub session: SessionUri,
    pub agenda: ScheduleUri,
    pub schedule: ScheduleUri,
    pub timeslot: TimeslotUri,
    #[serde(with = "timestamp")]
    pub modified: NaiveDateTime,
    pub notes: String,
    pub pinned: bool,
    pub extendedfrom: Option<String>,
    pub badness: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub id: u64,
    #[serde(rename = "type")]
    pub session_type: String,
    pub name: String,
    pub resource_uri: SessionUri,
    pub meeting: MeetingUri,
    pub group: GroupUri,
    pub materials: Vec<DocumentUri>,
    pub scheduled: Option<String>,
    pub requested_duration: String,
    pub resources: Vec<String>,
    pub agenda_note: String,
    pub assignments: Vec<SessionAssignmentUri>,
    pub remote_instructions: String,
    pub short: String,
    pub attendees: Option<u32>,
    #[serde(with = "timestamp")]
    pub modified: NaiveDateTime,
    pub comments: String,
}

impl_resource! {
    MeetingType => MeetingTypeUri,
    Schedule => ScheduleUri,
    Meeting => MeetingUri,
    Timeslot => TimeslotUri,
    SessionAssignment => SessionAssignmentUri,
    Session => SessionUri,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    fn meeting(date: &str, days: u32) -> Meeting {
        Meeting::deserialize(&json!({
            "id": 1083,
            "resource_uri": "/api/v1/meeting/meeting/1083/",
            "type": "/api/v1/name/meetingtypename/ietf/",
            "country": "CA",
            "city": "Montreal",
            "venue_name": "Fairmont The Queen Elizabeth",
            "venue_addr": "900 René-Lévesque Blvd. W",
            "date": date,
            "days": days,
            "time_zone": "America/Montreal",
            "acknowledgements": "",
            "agenda_info_note": "",
            "agenda_warning_note": "",
            "session_request_lock_message": "",
            "idsubmit_cutoff_warning_days": "21 days, 0:00:00",
            "idsubmit_cutoff_time_utc": "23:59:59",
            "idsubmit_cutoff_day_offset_00": 13,
            "idsubmit_cutoff_day_offset_01": 13,
            "submission_start_day_offset": 90,
            "submission_cutoff_day_offset": 26,
            "submission_correction_day_offset": 50,
            "agenda": "/api/v1/meeting/schedule/787/",
            "schedule": "/api/v1/meeting/schedule/787/",
            "number": "105",
            "break_area": "Mezzanine",
            "reg_area": "Mezzanine",
            "proceedings_final": false,
            "show_important_dates": true,
            "attendees": 1000,
            "updated": "2019-07-20T08:10:44+00:00"
        }))
        .unwrap()
    }

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_meeting_decodes_date() {
        let m = meeting("2019-07-20", 7);
        assert_eq!(m.date, day(2019, 7, 20));
        assert_eq!(m.end_date(), day(2019, 7, 26));
        assert_eq!(m.number, "105");
    }

    #[test]
    fn test_status_on() {
        let m = meeting("2019-07-20", 7);
        assert_eq!(m.status_on(day(2019, 7, 19)), MeetingStatus::Future);
        assert_eq!(m.status_on(day(2019, 7, 20)), MeetingStatus::Ongoing);
        assert_eq!(m.status_on(day(2019, 7, 26)), MeetingStatus::Ongoing);
        assert_eq!(m.status_on(day(2019, 7, 27)), MeetingStatus::Completed);
    }

    #[test]
    fn test_zero_day_meeting_is_single_day() {
        let m = meeting("2020-03-01", 0);
        assert_eq!(m.end_date(), day(2020, 3, 1));
        assert_eq!(m.status_on(day(2020, 3, 1)), MeetingStatus::Ongoing);
    }

    #[test]
    fn test_status_of_old_meeting_is_completed() {
        assert_eq!(meeting("1986-01-16", 2).status(), MeetingStatus::Completed);
    }
}
