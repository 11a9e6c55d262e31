// ── Application state store ──
//
// Explicit state + dispatch handle. Pure reducer underneath, watch channel
// on top for subscribers.

mod action;
mod cascade;
mod handle;
mod reducer;
mod state;
mod stream;

pub use action::Action;
pub use handle::Store;
pub use reducer::transition;
pub use state::{AppState, Lifecycle};
pub use stream::{StateStream, StateWatchStream};
