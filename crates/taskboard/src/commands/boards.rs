//! Board command handlers.

use std::fmt::Write as _;

use tabled::Tabled;

use taskboard_core::{AppState, Board, BoardId, denormalize};

use crate::cli::{BoardsArgs, BoardsCommand};
use crate::error::CliError;
use crate::output;

use super::{Ctx, util};

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct BoardRow {
    #[tabled(rename = "")]
    marker: &'static str,
    #[tabled(rename = "ID")]
    id: u64,
    #[tabled(rename = "TITLE")]
    title: String,
    #[tabled(rename = "LISTS")]
    lists: usize,
    #[tabled(rename = "TASKS")]
    tasks: usize,
}

fn board_row(state: &AppState, board: &Board) -> BoardRow {
    BoardRow {
        marker: if state.selected_board_id == Some(board.id) {
            "*"
        } else {
            ""
        },
        id: board.id.get(),
        title: board.title.clone(),
        lists: board.list_ids.len(),
        tasks: state
            .entities
            .board_lists(board.id)
            .iter()
            .map(|l| l.task_ids.len())
            .sum(),
    }
}

/// Human-readable board with its lists and tasks.
fn board_detail(state: &AppState, id: BoardId) -> String {
    let Some(board) = state.entities.boards.get(&id) else {
        return String::new();
    };
    let mut out = format!("{}  [board {}]\n", board.title, board.id);
    for list in state.entities.board_lists(id) {
        let _ = write!(
            out,
            "\n{}  [list {}]  {}\n",
            list.title,
            list.id,
            util::plural(list.task_ids.len(), "task")
        );
        for task in state.entities.list_tasks(list.id) {
            let _ = writeln!(
                out,
                "  #{:<6} {:<8} {}  {}",
                task.id,
                task.priority.to_string(),
                task.title,
                output::short_time(task.created_at)
            );
            if let Some(description) = &task.description {
                let _ = writeln!(out, "          {description}");
            }
        }
    }
    if board.list_ids.is_empty() {
        out.push_str("\n(no lists)\n");
    }
    out.trim_end().to_owned()
}

fn show(ctx: &Ctx<'_>, id: BoardId) -> Result<(), CliError> {
    let state = ctx.controller.snapshot();
    let exported = denormalize(&state.entities, state.user_id)
        .into_iter()
        .find(|b| b.id == id.get())
        .ok_or(taskboard_core::CoreError::NotFound {
            kind: "board",
            id: id.get(),
        })?;
    let out = output::render_single(
        ctx.session.output,
        &exported,
        |_| board_detail(&state, id),
        |b| b.id.to_string(),
    )?;
    output::print_output(&out, ctx.quiet());
    Ok(())
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(ctx: &Ctx<'_>, args: BoardsArgs) -> Result<(), CliError> {
    let controller = &ctx.controller;
    match args.command {
        BoardsCommand::List => {
            let state = controller.snapshot();
            let boards: Vec<Board> = state.entities.boards.values().cloned().collect();
            let out = output::render_list(
                ctx.session.output,
                &boards,
                |b| board_row(&state, b),
                |b| b.id.to_string(),
            )?;
            output::print_output(&out, ctx.quiet());
            Ok(())
        }

        BoardsCommand::Show { board } => {
            let id = match board {
                Some(id) => {
                    let id = BoardId(id);
                    controller.board(id)?;
                    controller.select_board(id);
                    id
                }
                None => match controller.snapshot().selected_board().map(|b| b.id) {
                    Some(id) => id,
                    None => {
                        output::status(
                            "No boards yet. Create one with: taskboard boards create <title>",
                            ctx.quiet(),
                        );
                        return Ok(());
                    }
                },
            };
            show(ctx, id)
        }

        BoardsCommand::Create { title } => {
            let created = controller.create_board(&title).await?;
            output::status("Board created", ctx.quiet());
            // Without an id in the response, the reload still selected
            // something sensible.
            match created.or(controller.snapshot().selected_board_id) {
                Some(id) => show(ctx, id),
                None => Ok(()),
            }
        }

        BoardsCommand::Rename { board, title } => {
            let id = BoardId(board);
            controller.board(id)?;
            controller.rename_board(id, &title).await?;
            output::status("Board renamed", ctx.quiet());
            Ok(())
        }

        BoardsCommand::Delete { board } => {
            let id = BoardId(board);
            let existing = controller.board(id)?;
            let state = controller.snapshot();
            let row = board_row(&state, &existing);
            let prompt = format!(
                "Delete board '{}' with {} and {}?",
                existing.title,
                util::plural(row.lists, "list"),
                util::plural(row.tasks, "task")
            );
            if !util::confirm(&prompt, ctx.global.yes, "boards delete")? {
                return Ok(());
            }
            controller.delete_board(id).await?;
            output::status("Board deleted", ctx.quiet());
            Ok(())
        }
    }
}
