use std::collections::HashMap;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::id::{BoardId, ListId, TaskId};
use taskboard_api::Priority;

// ── Entities ────────────────────────────────────────────────────────

/// A task card. Owned by exactly one [`List`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    /// `None` and "empty" are the same thing; an empty string is never stored.
    pub description: Option<String>,
    pub priority: Priority,
    /// Creation instant, epoch milliseconds (UTC). Immutable.
    pub created_at: i64,
}

/// A column of tasks. Owned by exactly one [`Board`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct List {
    pub id: ListId,
    pub title: String,
    /// Display order; no duplicates, every id resolves in `Entities::tasks`.
    pub task_ids: Vec<TaskId>,
}

/// A board of lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    pub id: BoardId,
    pub title: String,
    /// Display order; no duplicates, every id resolves in `Entities::lists`.
    pub list_ids: Vec<ListId>,
}

/// Shallow patch for an existing task.
///
/// Deliberately has no `id` or `created_at` field: those are immutable
/// and cannot be expressed as a patch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskPatch {
    pub title: Option<String>,
    /// `Some(None)` or `Some(Some(""))` clears the description.
    pub description: Option<Option<String>>,
    pub priority: Option<Priority>,
}

impl TaskPatch {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none() && self.priority.is_none()
    }

    /// Apply onto `task`, leaving unset fields untouched.
    pub fn apply_to(&self, task: &mut Task) {
        if let Some(title) = &self.title {
            task.title.clone_from(title);
        }
        if let Some(description) = &self.description {
            task.description = description.clone().filter(|d| !d.is_empty());
        }
        if let Some(priority) = self.priority {
            task.priority = priority;
        }
    }
}

/// Fields needed to create a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTask {
    pub title: String,
    pub description: Option<String>,
    pub priority: Priority,
}

// ── Aggregate ───────────────────────────────────────────────────────

/// The three entity maps.
///
/// `boards` keeps insertion order: the order boards appeared in the last
/// server snapshot, with removals preserving the relative order of the
/// rest. That order is what "first board" means everywhere in this crate.
/// Equality ignores map order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entities {
    pub boards: IndexMap<BoardId, Board>,
    pub lists: HashMap<ListId, List>,
    pub tasks: HashMap<TaskId, Task>,
}

impl Entities {
    pub fn is_empty(&self) -> bool {
        self.boards.is_empty() && self.lists.is_empty() && self.tasks.is_empty()
    }

    /// Board ids in snapshot order.
    pub fn board_order(&self) -> impl Iterator<Item = BoardId> + '_ {
        self.boards.keys().copied()
    }

    /// First board in snapshot order.
    pub fn first_board(&self) -> Option<BoardId> {
        self.boards.first().map(|(id, _)| *id)
    }

    /// Lists of a board in display order. Unknown ids are skipped.
    pub fn board_lists(&self, board_id: BoardId) -> Vec<&List> {
        self.boards.get(&board_id).map_or_else(Vec::new, |board| {
            board
                .list_ids
                .iter()
                .filter_map(|id| self.lists.get(id))
                .collect()
        })
    }

    /// Tasks of a list in display order. Unknown ids are skipped.
    pub fn list_tasks(&self, list_id: ListId) -> Vec<&Task> {
        self.lists.get(&list_id).map_or_else(Vec::new, |list| {
            list.task_ids
                .iter()
                .filter_map(|id| self.tasks.get(id))
                .collect()
        })
    }

    /// The list whose `task_ids` contains `task_id`.
    pub fn owning_list(&self, task_id: TaskId) -> Option<ListId> {
        self.lists
            .values()
            .find(|l| l.task_ids.contains(&task_id))
            .map(|l| l.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(id: u64) -> Task {
        Task {
            id: TaskId(id),
            title: "t".into(),
            description: Some("old".into()),
            priority: Priority::Low,
            created_at: 1_000,
        }
    }

    fn sample() -> Entities {
        let mut e = Entities::default();
        e.tasks.insert(TaskId(100), task(100));
        e.tasks.insert(TaskId(101), task(101));
        e.lists.insert(
            ListId(10),
            List {
                id: ListId(10),
                title: "Todo".into(),
                task_ids: vec![TaskId(101), TaskId(100)],
            },
        );
        e.boards.insert(
            BoardId(1),
            Board {
                id: BoardId(1),
                title: "Demo".into(),
                list_ids: vec![ListId(10)],
            },
        );
        e
    }

    #[test]
    fn patch_leaves_unset_fields() {
        let mut t = task(1);
        TaskPatch {
            priority: Some(Priority::High),
            ..TaskPatch::default()
        }
        .apply_to(&mut t);
        assert_eq!(t.priority, Priority::High);
        assert_eq!(t.description.as_deref(), Some("old"));
        assert_eq!(t.created_at, 1_000);
    }

    #[test]
    fn patch_with_empty_description_clears_it() {
        let mut t = task(1);
        TaskPatch {
            description: Some(Some(String::new())),
            ..TaskPatch::default()
        }
        .apply_to(&mut t);
        assert_eq!(t.description, None);
    }

    #[test]
    fn views_follow_child_order() {
        let e = sample();
        let ids: Vec<TaskId> = e.list_tasks(ListId(10)).iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![TaskId(101), TaskId(100)]);
        assert_eq!(e.board_lists(BoardId(1)).len(), 1);
        assert!(e.board_lists(BoardId(2)).is_empty());
    }

    #[test]
    fn owner_lookups() {
        let e = sample();
        assert_eq!(e.owning_list(TaskId(100)), Some(ListId(10)));
        assert_eq!(e.owning_list(TaskId(999)), None);
    }

    #[test]
    fn equality_ignores_board_order() {
        let mut a = Entities::default();
        let mut b = Entities::default();
        for id in [1, 2] {
            a.boards.insert(
                BoardId(id),
                Board {
                    id: BoardId(id),
                    title: String::new(),
                    list_ids: Vec::new(),
                },
            );
        }
        for id in [2, 1] {
            b.boards.insert(
                BoardId(id),
                Board {
                    id: BoardId(id),
                    title: String::new(),
                    list_ids: Vec::new(),
                },
            );
        }
        assert_eq!(a, b);
        assert_eq!(a.first_board(), Some(BoardId(1)));
        assert_eq!(b.first_board(), Some(BoardId(2)));
    }
}
