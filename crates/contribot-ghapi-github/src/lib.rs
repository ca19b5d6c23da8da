//! GitHub driver for GH API.

#![warn(clippy::all)]

mod auth;
mod errors;
mod pages;
mod service;

pub use errors::GitHubError;
pub use service::GitHubApiService;
