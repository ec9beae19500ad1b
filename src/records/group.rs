//! Groups (working groups, research groups, areas, ...) and their history.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::{impl_resource, timestamp};
use crate::uri::{
    DocumentUri, EmailUri, GroupEventUri, GroupHistoryUri, GroupMilestoneEventUri,
    GroupMilestoneHistoryUri, GroupMilestoneStateNameUri, GroupMilestoneUri, GroupRoleHistoryUri,
    GroupRoleUri, GroupStateChangeEventUri, GroupStateUri, GroupTypeNameUri, GroupUri, GroupUrlUri,
    PersonUri, RoleNameUri,
};

/// A group state name such as `active`, `bof` or `conclude`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupState {
    pub resource_uri: GroupStateUri,
    pub slug: String,
    pub desc: String,
    pub name: String,
    pub used: bool,
    pub order: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupTypeName {
    pub desc: String,
    pub name: String,
    pub order: i32,
    pub resource_uri: GroupTypeNameUri,
    pub slug: String,
    pub used: bool,
    pub verbose_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    pub acronym: String,
    pub ad: Option<PersonUri>,
    pub charter: Option<DocumentUri>,
    pub comments: String,
    pub description: String,
    pub id: u64,
    pub list_archive: String,
    pub list_email: String,
    pub list_subscribe: String,
    pub name: String,
    pub parent: Option<GroupUri>,
    pub resource_uri: GroupUri,
    pub state: GroupStateUri,
    #[serde(with = "timestamp")]
    pub time: NaiveDateTime,
    #[serde(rename = "type")]
    pub group_type: GroupTypeNameUri,
    pub unused_states: Vec<String>,
    pub unused_tags: Vec<String>,
}

/// A past version of a [`Group`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupHistory {
    pub acronym: String,
    pub ad: Option<PersonUri>,
    pub comments: String,
    pub description: String,
    pub group: GroupUri,
    pub id: u64,
    pub list_archive: String,
    pub list_email: String,
    pub list_subscribe: String,
    pub name: String,
    pub parent: Option<GroupUri>,
    pub resource_uri: GroupHistoryUri,
    pub state: GroupStateUri,
    #[serde(with = "timestamp")]
    pub time: NaiveDateTime,
    #[serde(rename = "type")]
    pub group_type: GroupTypeNameUri,
    pub unused_states: Vec<String>,
    pub unused_tags: Vec<String>,
    pub uses_milestone_dates: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupEvent {
    pub by: PersonUri,
    pub desc: String,
    pub group: GroupUri,
    pub id: u64,
    pub resource_uri: GroupEventUri,
    #[serde(with = "timestamp")]
    pub time: NaiveDateTime,
    #[serde(rename = "type")]
    pub event_type: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupUrl {
    pub group: GroupUri,
    pub id: u64,
    pub name: String,
    pub resource_uri: GroupUrlUri,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupMilestoneStateName {
    pub desc: String,
    pub name: String,
    pub order: i32,
    pub resource_uri: GroupMilestoneStateNameUri,
    pub slug: String,
    pub used: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupMilestone {
    pub desc: String,
    pub docs: Vec<DocumentUri>,
    pub due: String,
    pub group: GroupUri,
    pub id: u64,
    pub order: Option<i32>,
    pub resolved: String,
    pub resource_uri: GroupMilestoneUri,
    pub state: GroupMilestoneStateNameUri,
    #[serde(with = "timestamp")]
    pub time: NaiveDateTime,
}

/// A role name such as `chair`, `ad` or `secr`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleName {
    pub desc: String,
    pub name: String,
    pub order: i32,
    pub resource_uri: RoleNameUri,
    pub slug: String,
    pub used: bool,
}

/// A person holding a role in a group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupRole {
    pub email: EmailUri,
    pub group: GroupUri,
    pub id: u64,
    pub name: RoleNameUri,
    pub person: PersonUri,
    pub resource_uri: GroupRoleUri,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupMilestoneHistory {
    pub desc: String,
    pub docs: Vec<DocumentUri>,
    pub due: String,
    pub group: GroupUri,
    pub id: u64,
    pub milestone: GroupMilestoneUri,
    pub order: Option<i32>,
    pub resolved: String,
    pub resource_uri: GroupMilestoneHistoryUri,
    pub state: GroupMilestoneStateNameUri,
    #[serde(with = "timestamp")]
    pub time: NaiveDateTime,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupMilestoneEvent {
    pub by: PersonUri,
    pub desc: String,
    pub group: GroupUri,
    pub groupevent_ptr: GroupEventUri,
    pub id: u64,
    pub milestone: GroupMilestoneUri,
    pub resource_uri: GroupMilestoneEventUri,
    #[serde(with = "timestamp")]
    pub time: NaiveDateTime,
    #[serde(rename = "type")]
    pub event_type: String,
}

/// A role held in a past version of a group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupRoleHistory {
    pub email: EmailUri,
    pub group: GroupHistoryUri,
    pub id: u64,
    pub name: RoleNameUri,
    pub person: PersonUri,
    pub resource_uri: GroupRoleHistoryUri,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupStateChangeEvent {
    pub by: PersonUri,
    pub desc: String,
    pub group: GroupUri,
    pub groupevent_ptr: GroupEventUri,
    pub id: u64,
    pub resource_uri: GroupStateChangeEventUri,
    pub state: GroupStateUri,
    #[serde(with = "timestamp")]
    pub time: NaiveDateTime,
    #[serde(rename = "type")]
    pub event_type: String,
}

impl_resource! {
    GroupState => GroupStateUri,
    GroupTypeName => GroupTypeNameUri,
    Group => GroupUri,
    GroupHistory => GroupHistoryUri,
    GroupEvent => GroupEventUri,
    GroupUrl => GroupUrlUri,
    GroupMilestoneStateName => GroupMilestoneStateNameUri,
    GroupMilestone => GroupMilestoneUri,
    RoleName => RoleNameUri,
    GroupRole => GroupRoleUri,
    GroupMilestoneHistory => GroupMilestoneHistoryUri,
    GroupMilestoneEvent => GroupMilestoneEventUri,
    GroupRoleHistory => GroupRoleHistoryUri,
    GroupStateChangeEvent => GroupStateChangeEventUri,
}
