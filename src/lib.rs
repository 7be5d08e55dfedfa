pub mod actions;
pub mod compose;
pub mod error;
pub mod run;
pub mod ui;
pub mod vars;
pub mod version;

pub use error::{Result, SemverBuildError};
