pub mod boundary;
pub mod config;
pub mod describe;
pub mod embedded;
pub mod emit;
pub mod error;
pub mod git_ops;
pub mod ui;
pub mod version;

pub use error::{GitverError, Result};
