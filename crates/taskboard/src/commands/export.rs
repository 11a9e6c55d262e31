//! `export`: the loaded snapshot as nested JSON.

use taskboard_core::denormalize;

use crate::error::CliError;
use crate::output;

use super::Ctx;

/// Always JSON: the nested shape is the point of this command.
pub fn handle(ctx: &Ctx<'_>) -> Result<(), CliError> {
    let state = ctx.controller.snapshot();
    let boards = denormalize(&state.entities, state.user_id);
    output::print_output(&output::render_json(&boards)?, ctx.quiet());
    Ok(())
}
