pub(crate) mod process_assignment_event;

pub use process_assignment_event::ProcessAssignmentEventInterface;

#[cfg(any(test, feature = "testkit"))]
pub use process_assignment_event::MockProcessAssignmentEventInterface;
