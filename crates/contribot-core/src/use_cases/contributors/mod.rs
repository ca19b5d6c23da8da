pub(crate) mod check_close_contributor;
pub(crate) mod check_contributor;

pub use check_close_contributor::CheckCloseContributorInterface;
pub use check_contributor::CheckContributorInterface;

#[cfg(any(test, feature = "testkit"))]
pub use self::{
    check_close_contributor::MockCheckCloseContributorInterface,
    check_contributor::MockCheckContributorInterface,
};
