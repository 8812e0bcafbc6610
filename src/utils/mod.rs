pub mod error;
pub mod logging;
pub mod types;

pub use error::{ContribError, Result};
