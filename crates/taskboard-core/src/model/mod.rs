// ── Normalized domain model ──
//
// Flat, id-addressable entities. Child order lives exclusively in the
// `list_ids` / `task_ids` sequences; map iteration order carries no
// meaning except for boards (see `Entities`).

pub mod entities;
pub mod id;

pub use entities::{Board, Entities, List, NewTask, Task, TaskPatch};
pub use id::{BoardId, ListId, TaskId, UserId};

pub use taskboard_api::Priority;
