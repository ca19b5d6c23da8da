mod issue;
mod issues_action;
mod issues_event;

pub use issue::GhIssue;
pub use issues_action::GhIssuesAction;
pub use issues_event::GhIssuesEvent;
