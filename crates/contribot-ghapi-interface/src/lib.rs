//! GitHub API interface.

#![warn(clippy::all)]

mod errors;
mod interface;
pub mod pagination;
pub mod types;

pub use errors::{ApiError, Result};
pub use interface::ApiService;
#[cfg(any(test, feature = "testkit"))]
pub use interface::MockApiService;
