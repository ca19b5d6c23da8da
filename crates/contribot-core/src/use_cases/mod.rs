pub mod assignees;
pub mod contributors;
pub mod events;
pub mod labels;
pub mod reports;
