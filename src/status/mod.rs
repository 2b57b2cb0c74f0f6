mod status_rule;
mod status_state;
mod status_text;

pub use status_rule::classify;
pub use status_state::StatusState;
pub use status_text::{StatusBuffer, StatusText};
