// ── Reconciliation controller ──
//
// Drives the store from the outside world. Structural changes (creates)
// go to the server first and are followed by a full snapshot reload.
// Edits and deletes are applied locally first and then sent; a failed
// send is logged and reported but the local change stays.

use std::sync::Arc;

use taskboard_api::BoardClient;
use tracing::{debug, info, warn};

use crate::backend::BoardBackend;
use crate::config::ClientConfig;
use crate::error::CoreError;
use crate::model::{
    Board, BoardId, Entities, List, ListId, NewTask, Task, TaskId, TaskPatch, UserId,
};
use crate::normalize::normalize;
use crate::selection::resolve_selection;
use crate::store::{Action, AppState, StateStream, Store};

/// Entry point for front ends.
///
/// Cheaply cloneable; clones share the backend and the store.
pub struct Controller<B = BoardClient> {
    inner: Arc<ControllerInner<B>>,
}

struct ControllerInner<B> {
    backend: B,
    store: Store,
}

impl<B> Clone for Controller<B> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl Controller<BoardClient> {
    /// Build an HTTP-backed controller. Does no I/O.
    pub fn connect(config: &ClientConfig) -> Result<Self, CoreError> {
        let client = BoardClient::new(config.api_base.as_str(), &config.transport())?;
        debug!(api_base = %client.base_url(), "created API client");
        Ok(Self::new(client))
    }
}

impl<B: BoardBackend> Controller<B> {
    pub fn new(backend: B) -> Self {
        Self::with_store(backend, Store::new())
    }

    /// Use an existing store, e.g. one a view already subscribed to.
    pub fn with_store(backend: B, store: Store) -> Self {
        Self {
            inner: Arc::new(ControllerInner { backend, store }),
        }
    }

    pub fn backend(&self) -> &B {
        &self.inner.backend
    }

    pub fn store(&self) -> &Store {
        &self.inner.store
    }

    pub fn snapshot(&self) -> Arc<AppState> {
        self.inner.store.snapshot()
    }

    pub fn subscribe(&self) -> StateStream {
        self.inner.store.subscribe()
    }

    fn current_user(&self) -> Result<UserId, CoreError> {
        self.snapshot().user_id.ok_or(CoreError::NoUser)
    }

    // ── Lookups ──────────────────────────────────────────────────────

    pub fn board(&self, id: BoardId) -> Result<Board, CoreError> {
        self.snapshot()
            .entities
            .boards
            .get(&id)
            .cloned()
            .ok_or(CoreError::NotFound {
                kind: "board",
                id: id.get(),
            })
    }

    pub fn list(&self, id: ListId) -> Result<List, CoreError> {
        self.snapshot()
            .entities
            .lists
            .get(&id)
            .cloned()
            .ok_or(CoreError::NotFound {
                kind: "list",
                id: id.get(),
            })
    }

    pub fn task(&self, id: TaskId) -> Result<Task, CoreError> {
        self.snapshot()
            .entities
            .tasks
            .get(&id)
            .cloned()
            .ok_or(CoreError::NotFound {
                kind: "task",
                id: id.get(),
            })
    }

    // ── Session ──────────────────────────────────────────────────────

    /// Register a new user and make them current with an empty board set.
    pub async fn register_user(&self, name: &str) -> Result<UserId, CoreError> {
        let name = non_empty(name, "user name")?;
        let (user_id, user_name) = self.inner.backend.create_user(name).await?;
        info!(%user_id, "registered user");
        self.inner
            .store
            .dispatch(Action::SetUser { user_id, user_name });
        Ok(user_id)
    }

    /// Initial load for a known user. Selects the first board.
    ///
    /// Failures land in the state as `Errored` and are also returned.
    pub async fn bootstrap(&self, user_id: UserId, user_name: &str) -> Result<(), CoreError> {
        self.inner.store.dispatch(Action::BootstrapStart);

        match self.fetch(user_id).await {
            Ok(entities) => {
                let selected_board_id = entities.first_board();
                info!(
                    %user_id,
                    boards = entities.boards.len(),
                    lists = entities.lists.len(),
                    tasks = entities.tasks.len(),
                    "bootstrap complete"
                );
                self.inner.store.dispatch(Action::BootstrapSuccess {
                    user_id,
                    user_name: user_name.to_owned(),
                    entities,
                    selected_board_id,
                });
                Ok(())
            }
            Err(e) => {
                warn!(%user_id, error = %e, "bootstrap failed");
                self.inner
                    .store
                    .dispatch(Action::BootstrapError(e.to_string()));
                Err(e)
            }
        }
    }

    /// Reload the full snapshot and replace local state with it.
    ///
    /// Selection becomes `preferred` if it exists in the snapshot, else the
    /// current selection if it still exists, else the first board, else
    /// `None`. On failure the state is left untouched.
    pub async fn reconcile(&self, user_id: UserId, preferred: Option<BoardId>) -> Result<(), CoreError> {
        let entities = self.fetch(user_id).await?;
        let previous = self.snapshot().selected_board_id;
        let selected_board_id =
            resolve_selection(preferred.into_iter().chain(previous), &entities.boards);
        info!(
            %user_id,
            boards = entities.boards.len(),
            selected = ?selected_board_id,
            "reconciled"
        );
        self.inner.store.dispatch(Action::ReplaceAll {
            entities,
            selected_board_id,
        });
        Ok(())
    }

    async fn fetch(&self, user_id: UserId) -> Result<Entities, CoreError> {
        let boards = self.inner.backend.get_boards(user_id).await?;
        normalize(&boards)
    }

    // ── Selection ────────────────────────────────────────────────────

    pub fn select_board(&self, id: BoardId) {
        self.inner.store.dispatch(Action::SelectBoard(id));
    }

    // ── Local ordering ───────────────────────────────────────────────
    //
    // The API has no ordering endpoint. These only reshape local state;
    // the next reconcile restores the server's order.

    pub fn move_task(&self, task_id: TaskId, from_list: ListId, to_list: ListId, index: Option<usize>) {
        self.inner.store.dispatch(Action::MoveTask {
            task_id,
            from_list,
            to_list,
            index,
        });
    }

    pub fn reorder_lists(&self, board_id: BoardId, from: usize, to: usize) {
        self.inner
            .store
            .dispatch(Action::ReorderLists { board_id, from, to });
    }

    pub fn reorder_tasks(&self, list_id: ListId, from: usize, to: usize) {
        self.inner
            .store
            .dispatch(Action::ReorderTasks { list_id, from, to });
    }

    // ── Server-first creates ─────────────────────────────────────────

    /// Create a board and select it once the reload lands.
    pub async fn create_board(&self, title: &str) -> Result<Option<BoardId>, CoreError> {
        let user_id = self.current_user()?;
        let title = non_empty(title, "board title")?;
        let created = self.inner.backend.create_board(title, user_id).await?;
        debug!(?created, "board created");
        self.reconcile(user_id, created).await?;
        Ok(created)
    }

    pub async fn create_list(&self, board_id: BoardId, title: &str) -> Result<Option<ListId>, CoreError> {
        let user_id = self.current_user()?;
        let title = non_empty(title, "list title")?;
        let created = self.inner.backend.create_list(title, board_id).await?;
        debug!(?created, %board_id, "list created");
        self.reconcile(user_id, None).await?;
        Ok(created)
    }

    pub async fn create_task(&self, list_id: ListId, task: NewTask) -> Result<Option<TaskId>, CoreError> {
        let user_id = self.current_user()?;
        let task = NewTask {
            title: non_empty(&task.title, "task title")?.to_owned(),
            description: task.description.filter(|d| !d.is_empty()),
            priority: task.priority,
        };
        let created = self.inner.backend.create_task(list_id, &task).await?;
        debug!(?created, %list_id, "task created");
        self.reconcile(user_id, None).await?;
        Ok(created)
    }

    // ── Optimistic edits ─────────────────────────────────────────────

    pub async fn rename_board(&self, id: BoardId, title: &str) -> Result<(), CoreError> {
        let title = non_empty(title, "board title")?;
        self.inner.store.dispatch(Action::RenameBoard {
            id,
            title: title.to_owned(),
        });
        self.inner
            .backend
            .rename_board(id, title)
            .await
            .inspect_err(|e| unconfirmed("rename board", id.get(), e))
    }

    pub async fn rename_list(&self, id: ListId, title: &str) -> Result<(), CoreError> {
        let title = non_empty(title, "list title")?;
        self.inner.store.dispatch(Action::RenameList {
            id,
            title: title.to_owned(),
        });
        self.inner
            .backend
            .rename_list(id, title)
            .await
            .inspect_err(|e| unconfirmed("rename list", id.get(), e))
    }

    pub async fn update_task(&self, id: TaskId, mut patch: TaskPatch) -> Result<(), CoreError> {
        if patch.is_empty() {
            return Ok(());
        }
        if let Some(title) = patch.title.take() {
            patch.title = Some(non_empty(&title, "task title")?.to_owned());
        }
        self.inner.store.dispatch(Action::UpdateTask {
            id,
            patch: patch.clone(),
        });
        self.inner
            .backend
            .update_task(id, &patch)
            .await
            .inspect_err(|e| unconfirmed("update task", id.get(), e))
    }

    pub async fn delete_task(&self, list_id: ListId, task_id: TaskId) -> Result<(), CoreError> {
        self.inner
            .store
            .dispatch(Action::DeleteTask { list_id, task_id });
        self.inner
            .backend
            .delete_task(task_id)
            .await
            .inspect_err(|e| unconfirmed("delete task", task_id.get(), e))
    }

    pub async fn delete_list(&self, board_id: BoardId, list_id: ListId) -> Result<(), CoreError> {
        self.inner
            .store
            .dispatch(Action::DeleteList { board_id, list_id });
        self.inner
            .backend
            .delete_list(list_id)
            .await
            .inspect_err(|e| unconfirmed("delete list", list_id.get(), e))
    }

    pub async fn delete_board(&self, id: BoardId) -> Result<(), CoreError> {
        self.inner.store.dispatch(Action::DeleteBoard(id));
        self.inner
            .backend
            .delete_board(id)
            .await
            .inspect_err(|e| unconfirmed("delete board", id.get(), e))
    }
}

fn non_empty<'a>(value: &'a str, what: &str) -> Result<&'a str, CoreError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(CoreError::validation(format!("{what} must not be empty")));
    }
    Ok(trimmed)
}

// Local state already reflects the change and is left as is.
fn unconfirmed(operation: &str, id: u64, error: &CoreError) {
    warn!(operation, id, %error, "server did not confirm local change");
}
