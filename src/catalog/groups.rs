//! Working groups and other IETF bodies: history, events, milestones and roles.

use tracing::instrument;

use super::{
    GroupEventFilter, GroupFilter, GroupMilestoneEventFilter, GroupMilestoneFilter,
    GroupMilestoneHistoryFilter, GroupRoleFilter, GroupStateChangeEventFilter, at_most_one,
};
use crate::datatracker::{DataTracker, DatatrackerError, RecordStream};
use crate::records::{
    Group, GroupEvent, GroupHistory, GroupMilestone, GroupMilestoneEvent, GroupMilestoneHistory,
    GroupMilestoneStateName, GroupRole, GroupRoleHistory, GroupState, GroupStateChangeEvent,
    GroupTypeName, GroupUrl, RoleName,
};
use crate::uri::{
    GroupEventUri, GroupHistoryUri, GroupMilestoneEventUri, GroupMilestoneHistoryUri,
    GroupMilestoneStateNameUri, GroupMilestoneUri, GroupRoleHistoryUri, GroupRoleUri,
    GroupStateChangeEventUri, GroupStateUri, GroupTypeNameUri, GroupUri, GroupUrlUri, RoleNameUri,
};

impl DataTracker {
    pub async fn group(&self, uri: &GroupUri) -> Result<Option<Group>, DatatrackerError> {
        self.retrieve(uri).await
    }

    /// Looks up a group by acronym, e.g. `quic`.
    ///
    /// # Errors
    ///
    /// [`DatatrackerError::AmbiguousLookup`] if more than one group carries
    /// the acronym.
    #[instrument(skip(self))]
    pub async fn group_from_acronym(&self, acronym: &str) -> Result<Option<Group>, DatatrackerError> {
        let mut uri = GroupUri::collection();
        uri.set_param("acronym", acronym);
        at_most_one(self.retrieve_multi(uri), "group acronym", acronym).await
    }

    pub fn groups(&self, filter: &GroupFilter) -> RecordStream<'_, Group> {
        let mut uri = GroupUri::collection();
        filter.apply(&mut uri);
        self.retrieve_multi(uri)
    }

    pub async fn group_history(
        &self,
        uri: &GroupHistoryUri,
    ) -> Result<Option<GroupHistory>, DatatrackerError> {
        self.retrieve(uri).await
    }

    pub fn group_histories_from_acronym(&self, acronym: &str) -> RecordStream<'_, GroupHistory> {
        let mut uri = GroupHistoryUri::collection();
        uri.set_param("acronym", acronym);
        self.retrieve_multi(uri)
    }

    /// Group history snapshots. `filter.name_contains` is not supported by
    /// this endpoint and is ignored.
    pub fn group_histories(&self, filter: &GroupFilter) -> RecordStream<'_, GroupHistory> {
        let mut uri = GroupHistoryUri::collection();
        filter.apply_history(&mut uri);
        self.retrieve_multi(uri)
    }

    pub async fn group_event(&self, uri: &GroupEventUri) -> Result<Option<GroupEvent>, DatatrackerError> {
        self.retrieve(uri).await
    }

    pub fn group_events(&self, filter: &GroupEventFilter) -> RecordStream<'_, GroupEvent> {
        let mut uri = GroupEventUri::collection();
        filter.apply(&mut uri);
        self.retrieve_multi(uri)
    }

    pub async fn group_url(&self, uri: &GroupUrlUri) -> Result<Option<GroupUrl>, DatatrackerError> {
        self.retrieve(uri).await
    }

    pub fn group_urls(&self, group: Option<&Group>) -> RecordStream<'_, GroupUrl> {
        let mut uri = GroupUrlUri::collection();
        uri.set_opt_param("group", group.map(|g| g.id));
        self.retrieve_multi(uri)
    }

    pub async fn group_milestone_statename(
        &self,
        uri: &GroupMilestoneStateNameUri,
    ) -> Result<Option<GroupMilestoneStateName>, DatatrackerError> {
        self.retrieve(uri).await
    }

    pub fn group_milestone_statenames(&self) -> RecordStream<'_, GroupMilestoneStateName> {
        self.retrieve_multi(GroupMilestoneStateNameUri::collection())
    }

    pub async fn group_milestone(
        &self,
        uri: &GroupMilestoneUri,
    ) -> Result<Option<GroupMilestone>, DatatrackerError> {
        self.retrieve(uri).await
    }

    pub fn group_milestones(&self, filter: &GroupMilestoneFilter) -> RecordStream<'_, GroupMilestone> {
        let mut uri = GroupMilestoneUri::collection();
        filter.apply(&mut uri);
        self.retrieve_multi(uri)
    }

    pub async fn group_milestone_history(
        &self,
        uri: &GroupMilestoneHistoryUri,
    ) -> Result<Option<GroupMilestoneHistory>, DatatrackerError> {
        self.retrieve(uri).await
    }

    pub fn group_milestone_histories(
        &self,
        filter: &GroupMilestoneHistoryFilter,
    ) -> RecordStream<'_, GroupMilestoneHistory> {
        let mut uri = GroupMilestoneHistoryUri::collection();
        filter.apply(&mut uri);
        self.retrieve_multi(uri)
    }

    pub async fn group_milestone_event(
        &self,
        uri: &GroupMilestoneEventUri,
    ) -> Result<Option<GroupMilestoneEvent>, DatatrackerError> {
        self.retrieve(uri).await
    }

    pub fn group_milestone_events(
        &self,
        filter: &GroupMilestoneEventFilter,
    ) -> RecordStream<'_, GroupMilestoneEvent> {
        let mut uri = GroupMilestoneEventUri::collection();
        filter.apply(&mut uri);
        self.retrieve_multi(uri)
    }

    pub async fn role_name(&self, uri: &RoleNameUri) -> Result<Option<RoleName>, DatatrackerError> {
        self.retrieve(uri).await
    }

    pub fn role_names(&self) -> RecordStream<'_, RoleName> {
        self.retrieve_multi(RoleNameUri::collection())
    }

    pub async fn group_role(&self, uri: &GroupRoleUri) -> Result<Option<GroupRole>, DatatrackerError> {
        self.retrieve(uri).await
    }

    /// Current role holders (chairs, ADs, secretaries, ...).
    pub fn group_roles(&self, filter: &GroupRoleFilter) -> RecordStream<'_, GroupRole> {
        let mut uri = GroupRoleUri::collection();
        filter.apply(&mut uri);
        self.retrieve_multi(uri)
    }

    pub async fn group_role_history(
        &self,
        uri: &GroupRoleHistoryUri,
    ) -> Result<Option<GroupRoleHistory>, DatatrackerError> {
        self.retrieve(uri).await
    }

    /// Former role holders.
    pub fn group_role_histories(&self, filter: &GroupRoleFilter) -> RecordStream<'_, GroupRoleHistory> {
        let mut uri = GroupRoleHistoryUri::collection();
        filter.apply(&mut uri);
        self.retrieve_multi(uri)
    }

    pub async fn group_state_change_event(
        &self,
        uri: &GroupStateChangeEventUri,
    ) -> Result<Option<GroupStateChangeEvent>, DatatrackerError> {
        self.retrieve(uri).await
    }

    pub fn group_state_change_events(
        &self,
        filter: &GroupStateChangeEventFilter,
    ) -> RecordStream<'_, GroupStateChangeEvent> {
        let mut uri = GroupStateChangeEventUri::collection();
        filter.apply(&mut uri);
        self.retrieve_multi(uri)
    }

    /// Fetches a group state. Known slugs include `active`, `bof`,
    /// `conclude`, `dormant`, `proposed` and `replaced`.
    pub async fn group_state(&self, uri: &GroupStateUri) -> Result<Option<GroupState>, DatatrackerError> {
        self.retrieve(uri).await
    }

    pub fn group_states(&self) -> RecordStream<'_, GroupState> {
        self.retrieve_multi(GroupStateUri::collection())
    }

    pub async fn group_type_name(
        &self,
        uri: &GroupTypeNameUri,
    ) -> Result<Option<GroupTypeName>, DatatrackerError> {
        self.retrieve(uri).await
    }

    pub fn group_type_names(&self) -> RecordStream<'_, GroupTypeName> {
        self.retrieve_multi(GroupTypeNameUri::collection())
    }
}
