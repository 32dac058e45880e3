//! Non-interactive layer prompts.

mod fixed;

pub use fixed::FixedPrompt;
