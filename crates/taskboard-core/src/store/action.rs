use crate::model::{BoardId, Entities, ListId, TaskId, TaskPatch, UserId};

/// Every state transition the store accepts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // ── Bootstrap lifecycle ──────────────────────────────────────────
    BootstrapStart,
    BootstrapSuccess {
        user_id: UserId,
        user_name: String,
        entities: Entities,
        selected_board_id: Option<BoardId>,
    },
    BootstrapError(String),
    /// A user was just registered: no boards yet.
    SetUser {
        user_id: UserId,
        user_name: String,
    },

    // ── Selection & sync ─────────────────────────────────────────────
    /// Set the selection verbatim; callers supply a known id.
    SelectBoard(BoardId),
    /// Install a fresh server snapshot wholesale.
    ReplaceAll {
        entities: Entities,
        selected_board_id: Option<BoardId>,
    },

    // ── Local patches ────────────────────────────────────────────────
    RenameBoard {
        id: BoardId,
        title: String,
    },
    RenameList {
        id: ListId,
        title: String,
    },
    UpdateTask {
        id: TaskId,
        patch: TaskPatch,
    },
    DeleteTask {
        list_id: ListId,
        task_id: TaskId,
    },
    DeleteList {
        board_id: BoardId,
        list_id: ListId,
    },
    DeleteBoard(BoardId),

    // ── Local ordering ───────────────────────────────────────────────
    /// Move a task to `index` in another list (or the same one).
    /// `None` appends.
    MoveTask {
        task_id: TaskId,
        from_list: ListId,
        to_list: ListId,
        index: Option<usize>,
    },
    /// Move the list at position `from` of a board to position `to`.
    ReorderLists {
        board_id: BoardId,
        from: usize,
        to: usize,
    },
    /// Move the task at position `from` of a list to position `to`.
    ReorderTasks {
        list_id: ListId,
        from: usize,
        to: usize,
    },
}

impl Action {
    /// Short name for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::BootstrapStart => "bootstrap:start",
            Self::BootstrapSuccess { .. } => "bootstrap:success",
            Self::BootstrapError(_) => "bootstrap:error",
            Self::SetUser { .. } => "user:set",
            Self::SelectBoard(_) => "board:select",
            Self::ReplaceAll { .. } => "sync:replace-all",
            Self::RenameBoard { .. } => "board:rename",
            Self::RenameList { .. } => "list:rename",
            Self::UpdateTask { .. } => "task:update",
            Self::DeleteTask { .. } => "task:delete",
            Self::DeleteList { .. } => "list:delete",
            Self::DeleteBoard(_) => "board:delete",
            Self::MoveTask { .. } => "task:move",
            Self::ReorderLists { .. } => "list:reorder",
            Self::ReorderTasks { .. } => "task:reorder",
        }
    }
}
