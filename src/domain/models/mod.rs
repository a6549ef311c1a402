mod analysis;
mod submission;

pub use analysis::*;
pub use submission::*;
