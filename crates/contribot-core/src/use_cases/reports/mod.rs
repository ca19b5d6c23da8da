pub(crate) mod list_community_assigned_issues;
pub(crate) mod list_team_members;

pub use list_community_assigned_issues::{
    filter_external_issues, ListCommunityAssignedIssuesInterface,
};
pub use list_team_members::ListTeamMembersInterface;

#[cfg(any(test, feature = "testkit"))]
pub use self::{
    list_community_assigned_issues::MockListCommunityAssignedIssuesInterface,
    list_team_members::MockListTeamMembersInterface,
};
