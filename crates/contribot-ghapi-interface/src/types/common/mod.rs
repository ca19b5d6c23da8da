mod author_association;
mod user;

pub use author_association::GhAuthorAssociation;
pub use user::GhUser;
