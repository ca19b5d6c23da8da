pub(crate) mod classify_assignee;
pub(crate) mod detect_external_assignee;

pub use classify_assignee::ClassifyAssigneeInterface;
pub use detect_external_assignee::DetectExternalAssigneeInterface;

#[cfg(any(test, feature = "testkit"))]
pub use self::{
    classify_assignee::MockClassifyAssigneeInterface,
    detect_external_assignee::MockDetectExternalAssigneeInterface,
};
