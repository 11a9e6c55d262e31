// taskboard-core: Normalized client-side state for the task board.
//
// Sits between taskboard-api and front ends. The server graph is
// flattened into entity maps, a pure reducer applies local changes, and
// the controller reconciles with the server after structural writes.

pub mod backend;
pub mod config;
pub mod controller;
pub mod error;
pub mod model;
pub mod normalize;
pub mod selection;
pub mod store;

// ── Primary re-exports ──────────────────────────────────────────────
pub use backend::BoardBackend;
pub use config::ClientConfig;
pub use controller::Controller;
pub use error::CoreError;
pub use normalize::{denormalize, format_timestamp, normalize, parse_timestamp};
pub use selection::resolve_selection;
pub use store::{Action, AppState, Lifecycle, StateStream, Store, transition};

pub use model::{
    Board, BoardId, Entities, List, ListId, NewTask, Priority, Task, TaskId, TaskPatch, UserId,
};
