mod assignee_kind;
mod issue_handle;
mod marker_label;
mod repository_path;

pub use assignee_kind::AssigneeKind;
pub use issue_handle::IssueHandle;
pub use marker_label::{MarkerLabelUpdate, MARKER_LABEL};
pub use repository_path::{RepositoryPath, RepositoryPathError};
