//! Logic module.

#![warn(clippy::all)]
#![allow(clippy::new_without_default)]

mod context;
pub mod errors;
pub mod use_cases;

pub use context::CoreContext;
pub use errors::{DomainError, Result};
use shaku::module;
use use_cases::{
    assignees::{
        classify_assignee::ClassifyAssignee, detect_external_assignee::DetectExternalAssignee,
    },
    contributors::{
        check_close_contributor::CheckCloseContributor, check_contributor::CheckContributor,
    },
    events::process_assignment_event::ProcessAssignmentEvent,
    labels::{add_marker_label::AddMarkerLabel, remove_marker_label::RemoveMarkerLabel},
    reports::{
        list_community_assigned_issues::ListCommunityAssignedIssues,
        list_team_members::ListTeamMembers,
    },
};

module! {
    pub CoreModule {
        components = [
            ClassifyAssignee, DetectExternalAssignee,
            AddMarkerLabel, RemoveMarkerLabel,
            CheckCloseContributor, CheckContributor,
            ProcessAssignmentEvent,
            ListTeamMembers, ListCommunityAssignedIssues
        ],
        providers = []
    }
}
