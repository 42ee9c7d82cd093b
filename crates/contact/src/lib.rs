mod delivery;
mod error;
mod submission;
mod types;

pub use delivery::*;
pub use error::*;
pub use submission::*;
pub use types::*;
