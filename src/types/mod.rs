// ABOUTME: Validated domain identifiers.
// ABOUTME: Channel and project ids are checked once at construction.

mod channel_id;
mod project_id;

pub use channel_id::{ChannelId, ChannelIdError, LIVE_CHANNEL};
pub use project_id::{ProjectId, ProjectIdError};
