mod groq_completion;
mod mock_completion;

pub use groq_completion::*;
pub use mock_completion::*;
