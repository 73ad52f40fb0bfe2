//! Foundation crate for wsp: the error taxonomy shared by every layer, themed
//! output macros, user directory resolution and input validation.

pub mod error;
pub mod output_macros;
pub mod user_paths;
pub mod validation;

pub use error::{Result, WspError};
