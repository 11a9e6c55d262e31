use serde::Serialize;

use crate::model::{Board, BoardId, Entities, UserId};

/// Bootstrap lifecycle.
///
/// ```text
/// idle --start--> loading --success--> ready
///                 loading --error----> errored
/// ready | errored --start--> loading
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Lifecycle {
    #[default]
    Idle,
    Loading,
    Ready,
    Errored,
}

/// The whole client state. Immutable once published by the [`Store`].
///
/// `error` is `Some` exactly when `lifecycle` is `Errored`.
/// `selected_board_id` is `None` or a key of `entities.boards`, except
/// transiently after an explicit `SelectBoard` with an unknown id.
///
/// [`Store`]: super::Store
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AppState {
    pub user_id: Option<UserId>,
    pub user_name: Option<String>,
    pub lifecycle: Lifecycle,
    pub error: Option<String>,
    pub selected_board_id: Option<BoardId>,
    pub entities: Entities,
}

impl AppState {
    pub fn is_loading(&self) -> bool {
        self.lifecycle == Lifecycle::Loading
    }

    pub fn selected_board(&self) -> Option<&Board> {
        self.selected_board_id
            .and_then(|id| self.entities.boards.get(&id))
    }
}
