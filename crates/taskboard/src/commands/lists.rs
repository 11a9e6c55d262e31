//! List command handlers.

use taskboard_core::{BoardId, List, ListId};

use crate::cli::{ListsArgs, ListsCommand};
use crate::error::CliError;
use crate::output;

use super::{Ctx, util};

fn print_list(ctx: &Ctx<'_>, list: &List) -> Result<(), CliError> {
    let out = output::render_single(
        ctx.session.output,
        list,
        |l| format!("{}  [list {}]  {}", l.title, l.id, util::plural(l.task_ids.len(), "task")),
        |l| l.id.to_string(),
    )?;
    output::print_output(&out, ctx.quiet());
    Ok(())
}

pub async fn handle(ctx: &Ctx<'_>, args: ListsArgs) -> Result<(), CliError> {
    let controller = &ctx.controller;
    match args.command {
        ListsCommand::Create { board, title } => {
            let board_id = BoardId(board);
            controller.board(board_id)?;
            let created = controller.create_list(board_id, &title).await?;
            output::status("List created", ctx.quiet());
            if let Some(list) = created.and_then(|id| controller.list(id).ok()) {
                print_list(ctx, &list)?;
            }
            Ok(())
        }

        ListsCommand::Rename { list, title } => {
            let id = ListId(list);
            controller.list(id)?;
            controller.rename_list(id, &title).await?;
            output::status("List renamed", ctx.quiet());
            Ok(())
        }

        ListsCommand::Delete { board, list } => {
            let board_id = BoardId(board);
            let list_id = ListId(list);
            let owner = controller.board(board_id)?;
            let existing = controller.list(list_id)?;
            if !owner.list_ids.contains(&list_id) {
                return Err(CliError::Validation {
                    field: "list".into(),
                    reason: format!("list {list_id} is not on board {board_id}"),
                });
            }

            let prompt = format!(
                "Delete list '{}' with {}?",
                existing.title,
                util::plural(existing.task_ids.len(), "task")
            );
            if !util::confirm(&prompt, ctx.global.yes, "lists delete")? {
                return Ok(());
            }
            controller.delete_list(board_id, list_id).await?;
            output::status("List deleted", ctx.quiet());
            Ok(())
        }
    }
}
