// ── Backend seam ──
//
// What the controller needs from the server, expressed in core types.
// `BoardClient` is the production implementation; tests plug in fakes.

use std::future::Future;

use taskboard_api::{ApiBoard, BoardClient, BoardUpdate, CreateTask, ListUpdate, TaskUpdate};

use crate::error::CoreError;
use crate::model::{BoardId, ListId, NewTask, TaskId, TaskPatch, UserId};

/// Remote operations against the task-board API.
///
/// Create operations return the new id when the server reports one.
pub trait BoardBackend: Send + Sync + 'static {
    fn create_user(&self, name: &str) -> impl Future<Output = Result<(UserId, String), CoreError>> + Send;

    fn get_boards(&self, user_id: UserId) -> impl Future<Output = Result<Vec<ApiBoard>, CoreError>> + Send;

    fn create_board(
        &self,
        title: &str,
        user_id: UserId,
    ) -> impl Future<Output = Result<Option<BoardId>, CoreError>> + Send;

    fn rename_board(&self, id: BoardId, title: &str) -> impl Future<Output = Result<(), CoreError>> + Send;

    fn delete_board(&self, id: BoardId) -> impl Future<Output = Result<(), CoreError>> + Send;

    fn create_list(
        &self,
        title: &str,
        board_id: BoardId,
    ) -> impl Future<Output = Result<Option<ListId>, CoreError>> + Send;

    fn rename_list(&self, id: ListId, title: &str) -> impl Future<Output = Result<(), CoreError>> + Send;

    fn delete_list(&self, id: ListId) -> impl Future<Output = Result<(), CoreError>> + Send;

    fn create_task(
        &self,
        list_id: ListId,
        task: &NewTask,
    ) -> impl Future<Output = Result<Option<TaskId>, CoreError>> + Send;

    fn update_task(&self, id: TaskId, patch: &TaskPatch) -> impl Future<Output = Result<(), CoreError>> + Send;

    fn delete_task(&self, id: TaskId) -> impl Future<Output = Result<(), CoreError>> + Send;
}

/// Wire body for a task patch. A cleared description is sent as `""`.
pub(crate) fn task_update(patch: &TaskPatch) -> TaskUpdate {
    TaskUpdate {
        title: patch.title.clone(),
        description: patch
            .description
            .as_ref()
            .map(|d| d.clone().unwrap_or_default()),
        priority: patch.priority,
    }
}

impl BoardBackend for BoardClient {
    async fn create_user(&self, name: &str) -> Result<(UserId, String), CoreError> {
        let user = BoardClient::create_user(self, name).await?;
        Ok((UserId(user.id), user.name))
    }

    async fn get_boards(&self, user_id: UserId) -> Result<Vec<ApiBoard>, CoreError> {
        Ok(BoardClient::get_boards(self, user_id.get()).await?)
    }

    async fn create_board(&self, title: &str, user_id: UserId) -> Result<Option<BoardId>, CoreError> {
        let created = BoardClient::create_board(self, title, user_id.get()).await?;
        Ok(created.id.map(BoardId))
    }

    async fn rename_board(&self, id: BoardId, title: &str) -> Result<(), CoreError> {
        let update = BoardUpdate {
            title: Some(title.to_owned()),
        };
        Ok(self.update_board(id.get(), &update).await?)
    }

    async fn delete_board(&self, id: BoardId) -> Result<(), CoreError> {
        Ok(BoardClient::delete_board(self, id.get()).await?)
    }

    async fn create_list(&self, title: &str, board_id: BoardId) -> Result<Option<ListId>, CoreError> {
        let created = BoardClient::create_list(self, title, board_id.get()).await?;
        Ok(created.id.map(ListId))
    }

    async fn rename_list(&self, id: ListId, title: &str) -> Result<(), CoreError> {
        let update = ListUpdate {
            title: Some(title.to_owned()),
        };
        Ok(self.update_list(id.get(), &update).await?)
    }

    async fn delete_list(&self, id: ListId) -> Result<(), CoreError> {
        Ok(BoardClient::delete_list(self, id.get()).await?)
    }

    async fn create_task(&self, list_id: ListId, task: &NewTask) -> Result<Option<TaskId>, CoreError> {
        let body = CreateTask {
            title: task.title.clone(),
            description: task.description.clone().unwrap_or_default(),
            priority: task.priority,
            list_id: list_id.get(),
        };
        let created = BoardClient::create_task(self, &body).await?;
        Ok(created.id.map(TaskId))
    }

    async fn update_task(&self, id: TaskId, patch: &TaskPatch) -> Result<(), CoreError> {
        Ok(BoardClient::update_task(self, id.get(), &task_update(patch)).await?)
    }

    async fn delete_task(&self, id: TaskId) -> Result<(), CoreError> {
        Ok(BoardClient::delete_task(self, id.get()).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use taskboard_api::Priority;

    #[test]
    fn cleared_description_is_sent_empty() {
        let patch = TaskPatch {
            description: Some(None),
            ..TaskPatch::default()
        };
        let update = task_update(&patch);
        assert_eq!(update.description.as_deref(), Some(""));
        assert_eq!(update.title, None);
    }

    #[test]
    fn untouched_fields_stay_absent() {
        let update = task_update(&TaskPatch {
            priority: Some(Priority::Medium),
            ..TaskPatch::default()
        });
        assert_eq!(update.priority, Some(Priority::Medium));
        assert_eq!(update.description, None);
    }
}
