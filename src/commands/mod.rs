// ABOUTME: Command module aggregator for the firedeploy CLI.
// ABOUTME: Re-exports preview and production command handlers.

mod preview;
mod production;

pub use preview::preview;
pub use production::production;
