//! Command dispatch: bridges CLI args -> controller calls -> output.

pub mod boards;
pub mod config_cmd;
pub mod export;
pub mod lists;
pub mod tasks;
pub mod user;
pub mod util;

use taskboard_core::Controller;

use crate::cli::{Command, GlobalOpts};
use crate::config::Session;
use crate::error::CliError;

/// Shared state for controller-bound handlers.
pub struct Ctx<'a> {
    pub controller: Controller,
    pub session: Session,
    pub global: &'a GlobalOpts,
}

impl Ctx<'_> {
    /// Load the acting user's boards.
    async fn bootstrap(&self) -> Result<(), CliError> {
        let (user_id, user_name) = self.session.user(self.global)?;
        self.controller.bootstrap(user_id, &user_name).await?;
        Ok(())
    }

    pub fn quiet(&self) -> bool {
        self.global.quiet
    }
}

/// Dispatch a controller-bound command to the appropriate handler.
pub async fn dispatch(cmd: Command, ctx: &Ctx<'_>) -> Result<(), CliError> {
    run(cmd, ctx)
        .await
        .map_err(|e| e.at_url(ctx.session.client.api_base.as_str()))
}

async fn run(cmd: Command, ctx: &Ctx<'_>) -> Result<(), CliError> {
    if let Command::User(args) = cmd {
        return user::handle(ctx, args).await;
    }

    ctx.bootstrap().await?;
    match cmd {
        Command::Boards(args) => boards::handle(ctx, args).await,
        Command::Lists(args) => lists::handle(ctx, args).await,
        Command::Tasks(args) => tasks::handle(ctx, args).await,
        Command::Export => export::handle(ctx),
        // User is handled above; Config and Completions before dispatch
        Command::User(_) | Command::Config(_) | Command::Completions(_) => Ok(()),
    }
}
