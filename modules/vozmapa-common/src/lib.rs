pub mod error;
pub mod types;
pub mod visibility;

pub use error::VozmapaError;
pub use types::*;
pub use visibility::*;
