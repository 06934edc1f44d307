pub mod coach_reply;
pub mod common;

pub use coach_reply::{CoachReply, render_markdown};
pub use common::LoadingText;
