mod common;
mod issues;

pub use common::*;
pub use issues::*;
