// ── Cascading removal ──
//
// Deletion is two passes: collect every descendant id, then remove them
// all. Collection only reads, so a missing child is simply skipped.

use crate::model::{BoardId, Entities, ListId, TaskId};

/// Ids owned (directly or transitively) by a board or list.
#[derive(Debug, Default, PartialEq, Eq)]
pub(crate) struct Subtree {
    pub lists: Vec<ListId>,
    pub tasks: Vec<TaskId>,
}

pub(crate) fn board_subtree(entities: &Entities, board_id: BoardId) -> Subtree {
    let mut subtree = Subtree::default();
    let Some(board) = entities.boards.get(&board_id) else {
        return subtree;
    };
    for list_id in &board.list_ids {
        subtree.lists.push(*list_id);
        if let Some(list) = entities.lists.get(list_id) {
            subtree.tasks.extend(list.task_ids.iter().copied());
        }
    }
    subtree
}

pub(crate) fn list_subtree(entities: &Entities, list_id: ListId) -> Subtree {
    Subtree {
        lists: vec![list_id],
        tasks: entities
            .lists
            .get(&list_id)
            .map(|l| l.task_ids.clone())
            .unwrap_or_default(),
    }
}

/// Drop every entity in `subtree`. Parents' id sequences are the
/// caller's business.
pub(crate) fn remove(entities: &mut Entities, subtree: &Subtree) {
    for task_id in &subtree.tasks {
        entities.tasks.remove(task_id);
    }
    for list_id in &subtree.lists {
        entities.lists.remove(list_id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Board, List};

    #[test]
    fn board_subtree_collects_lists_and_tasks() {
        let mut e = Entities::default();
        e.lists.insert(
            ListId(10),
            List {
                id: ListId(10),
                title: String::new(),
                task_ids: vec![TaskId(100), TaskId(101)],
            },
        );
        e.lists.insert(
            ListId(11),
            List {
                id: ListId(11),
                title: String::new(),
                task_ids: vec![TaskId(102)],
            },
        );
        e.boards.insert(
            BoardId(1),
            Board {
                id: BoardId(1),
                title: String::new(),
                list_ids: vec![ListId(10), ListId(11)],
            },
        );

        let subtree = board_subtree(&e, BoardId(1));
        assert_eq!(subtree.lists, vec![ListId(10), ListId(11)]);
        assert_eq!(subtree.tasks, vec![TaskId(100), TaskId(101), TaskId(102)]);
        assert_eq!(board_subtree(&e, BoardId(2)), Subtree::default());
    }
}
