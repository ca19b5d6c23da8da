/// Classification of an issue assignee against the repository collaborators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssigneeKind {
    /// Collaborator of the repository.
    Internal,
    /// Confirmed to not be a collaborator.
    External,
    /// Lookup could not be completed; never counted as external.
    Unknown,
}

impl AssigneeKind {
    pub fn is_external(&self) -> bool {
        matches!(self, Self::External)
    }
}
