// taskboard-api: Async Rust client for the task-board REST API.
//
// Users own Boards, Boards own ordered Lists, Lists own ordered Tasks.
// This crate only speaks the wire protocol; normalization and local
// state live in `taskboard-core`.

pub mod client;
pub mod error;
pub mod transport;
pub mod types;

pub use client::BoardClient;
pub use error::Error;
pub use transport::TransportConfig;
pub use types::{
    ApiBoard, ApiList, ApiTask, ApiUser, BoardUpdate, CreateBoard, CreateList, CreateTask,
    CreateUser, Created, ListUpdate, Priority, TaskUpdate,
};
