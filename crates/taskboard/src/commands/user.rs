//! User command handlers.

use serde::Serialize;

use crate::cli::{UserArgs, UserCommand};
use crate::error::CliError;
use crate::output;

use super::Ctx;

#[derive(Serialize)]
struct Registered<'a> {
    id: u64,
    name: &'a str,
    profile: &'a str,
}

pub async fn handle(ctx: &Ctx<'_>, args: UserArgs) -> Result<(), CliError> {
    match args.command {
        UserCommand::Create { name } => {
            let user_id = ctx.controller.register_user(&name).await?;
            let name = ctx
                .controller
                .snapshot()
                .user_name
                .clone()
                .unwrap_or_else(|| name.trim().to_owned());

            // Persist against the profile as resolved, overrides included.
            let mut config = ctx.session.config.clone();
            config
                .profiles
                .entry(ctx.session.profile_name.clone())
                .or_insert_with(|| ctx.session.profile.clone())
                .api_base
                .clone_from(&ctx.session.profile.api_base);
            config.remember_user(&ctx.session.profile_name, user_id, &name);
            let path = taskboard_config::save_config(&config)?;
            tracing::debug!(path = %path.display(), "saved user to config");

            let registered = Registered {
                id: user_id.get(),
                name: &name,
                profile: &ctx.session.profile_name,
            };
            let out = output::render_single(
                ctx.session.output,
                &registered,
                |r| format!("Registered {} (id {}) in profile '{}'", r.name, r.id, r.profile),
                |r| r.id.to_string(),
            )?;
            output::print_output(&out, ctx.quiet());
            Ok(())
        }
    }
}
