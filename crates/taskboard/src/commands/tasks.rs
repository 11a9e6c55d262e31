//! Task command handlers.

use taskboard_core::{ListId, NewTask, Task, TaskId, TaskPatch};

use crate::cli::{TasksArgs, TasksCommand};
use crate::error::CliError;
use crate::output;

use super::{Ctx, util};

fn task_detail(task: &Task) -> String {
    let mut out = format!(
        "#{}  {}\npriority: {}\ncreated:  {}",
        task.id,
        task.title,
        task.priority,
        output::short_time(task.created_at)
    );
    if let Some(description) = &task.description {
        out.push_str("\n\n");
        out.push_str(description);
    }
    out
}

fn print_task(ctx: &Ctx<'_>, task: &Task) -> Result<(), CliError> {
    let out = output::render_single(ctx.session.output, task, task_detail, |t| t.id.to_string())?;
    output::print_output(&out, ctx.quiet());
    Ok(())
}

fn patch_from_flags(
    title: Option<String>,
    description: Option<String>,
    priority: Option<taskboard_core::Priority>,
) -> Result<TaskPatch, CliError> {
    let patch = TaskPatch {
        title,
        description: description.map(Some),
        priority,
    };
    if patch.is_empty() {
        return Err(CliError::Validation {
            field: "update".into(),
            reason: "nothing to change; pass --title, --description or --priority".into(),
        });
    }
    Ok(patch)
}

fn misplaced_task(task_id: TaskId, named: ListId, actual: Option<ListId>) -> String {
    match actual {
        Some(actual) => format!("task {task_id} is in list {actual}, not list {named}"),
        None => format!("task {task_id} is not in list {named}"),
    }
}

pub async fn handle(ctx: &Ctx<'_>, args: TasksArgs) -> Result<(), CliError> {
    let controller = &ctx.controller;
    match args.command {
        TasksCommand::Create {
            list,
            title,
            description,
            priority,
        } => {
            let list_id = ListId(list);
            controller.list(list_id)?;
            let created = controller
                .create_task(
                    list_id,
                    NewTask {
                        title,
                        description,
                        priority,
                    },
                )
                .await?;
            output::status("Task created", ctx.quiet());
            if let Some(task) = created.and_then(|id| controller.task(id).ok()) {
                print_task(ctx, &task)?;
            }
            Ok(())
        }

        TasksCommand::Update {
            task,
            title,
            description,
            priority,
        } => {
            let id = TaskId(task);
            controller.task(id)?;
            let patch = patch_from_flags(title, description, priority)?;
            controller.update_task(id, patch).await?;
            output::status("Task updated", ctx.quiet());
            print_task(ctx, &controller.task(id)?)
        }

        TasksCommand::Delete { list, task } => {
            let list_id = ListId(list);
            let task_id = TaskId(task);
            let owner = controller.list(list_id)?;
            let existing = controller.task(task_id)?;
            if !owner.task_ids.contains(&task_id) {
                let actual = controller.snapshot().entities.owning_list(task_id);
                return Err(CliError::Validation {
                    field: "task".into(),
                    reason: misplaced_task(task_id, list_id, actual),
                });
            }

            let prompt = format!("Delete task '{}'?", existing.title);
            if !util::confirm(&prompt, ctx.global.yes, "tasks delete")? {
                return Ok(());
            }
            controller.delete_task(list_id, task_id).await?;
            output::status("Task deleted", ctx.quiet());
            Ok(())
        }
    }
}
