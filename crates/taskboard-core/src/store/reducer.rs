// ── Reducer ──
//
// `(state, action) -> state`. No I/O. Actions that name an unknown entity
// return the state unchanged.

use crate::model::{BoardId, Entities};
use crate::selection::resolve_selection;

use super::action::Action;
use super::cascade;
use super::state::{AppState, Lifecycle};

/// Apply one action.
pub fn transition(mut state: AppState, action: Action) -> AppState {
    match action {
        Action::BootstrapStart => {
            state.lifecycle = Lifecycle::Loading;
            state.error = None;
        }
        Action::BootstrapSuccess {
            user_id,
            user_name,
            entities,
            selected_board_id,
        } => {
            state.user_id = Some(user_id);
            state.user_name = Some(user_name);
            state.lifecycle = Lifecycle::Ready;
            state.error = None;
            install(&mut state, entities, selected_board_id);
        }
        Action::BootstrapError(message) => {
            state.lifecycle = Lifecycle::Errored;
            state.error = Some(message);
        }
        Action::SetUser { user_id, user_name } => {
            state.user_id = Some(user_id);
            state.user_name = Some(user_name);
            state.lifecycle = Lifecycle::Ready;
            state.error = None;
            state.entities = Entities::default();
            state.selected_board_id = None;
        }
        Action::SelectBoard(id) => {
            state.selected_board_id = Some(id);
        }
        Action::ReplaceAll {
            entities,
            selected_board_id,
        } => install(&mut state, entities, selected_board_id),
        Action::RenameBoard { id, title } => {
            if let Some(board) = state.entities.boards.get_mut(&id) {
                board.title = title;
            }
        }
        Action::RenameList { id, title } => {
            if let Some(list) = state.entities.lists.get_mut(&id) {
                list.title = title;
            }
        }
        Action::UpdateTask { id, patch } => {
            if let Some(task) = state.entities.tasks.get_mut(&id) {
                patch.apply_to(task);
            }
        }
        Action::DeleteTask { list_id, task_id } => {
            let Some(list) = state.entities.lists.get_mut(&list_id) else {
                return state;
            };
            if !list.task_ids.contains(&task_id) {
                return state;
            }
            list.task_ids.retain(|id| *id != task_id);
            state.entities.tasks.remove(&task_id);
        }
        Action::DeleteList { board_id, list_id } => {
            let Some(board) = state.entities.boards.get_mut(&board_id) else {
                return state;
            };
            if !board.list_ids.contains(&list_id) {
                return state;
            }
            board.list_ids.retain(|id| *id != list_id);
            let subtree = cascade::list_subtree(&state.entities, list_id);
            cascade::remove(&mut state.entities, &subtree);
        }
        Action::DeleteBoard(id) => {
            if !state.entities.boards.contains_key(&id) {
                return state;
            }
            let subtree = cascade::board_subtree(&state.entities, id);
            cascade::remove(&mut state.entities, &subtree);
            state.entities.boards.shift_remove(&id);
            if state.selected_board_id == Some(id) {
                state.selected_board_id = state.entities.first_board();
            }
        }
        Action::MoveTask {
            task_id,
            from_list,
            to_list,
            index,
        } => {
            let lists = &mut state.entities.lists;
            if !lists.contains_key(&to_list) {
                return state;
            }
            let Some(source) = lists.get_mut(&from_list) else {
                return state;
            };
            let Some(pos) = source.task_ids.iter().position(|id| *id == task_id) else {
                return state;
            };
            source.task_ids.remove(pos);
            if let Some(target) = lists.get_mut(&to_list) {
                let at = index.map_or(target.task_ids.len(), |i| i.min(target.task_ids.len()));
                target.task_ids.insert(at, task_id);
            }
        }
        Action::ReorderLists { board_id, from, to } => {
            if let Some(board) = state.entities.boards.get_mut(&board_id) {
                move_within(&mut board.list_ids, from, to);
            }
        }
        Action::ReorderTasks { list_id, from, to } => {
            if let Some(list) = state.entities.lists.get_mut(&list_id) {
                move_within(&mut list.task_ids, from, to);
            }
        }
    }
    state
}

/// Move `ids[from]` to `to`, clamping `to` to the end. Out-of-range
/// `from` does nothing.
fn move_within<T>(ids: &mut Vec<T>, from: usize, to: usize) {
    if from >= ids.len() {
        return;
    }
    let moved = ids.remove(from);
    ids.insert(to.min(ids.len()), moved);
}

/// Replace entities and keep the selection pointing at a live board.
fn install(state: &mut AppState, entities: Entities, selected: Option<BoardId>) {
    state.selected_board_id = selected.and_then(|id| resolve_selection([id], &entities.boards));
    state.entities = entities;
}
