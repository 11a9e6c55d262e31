//! Config subcommand handlers. These never touch the server.

use dialoguer::{Confirm, Input};

use taskboard_config::{Config, DEFAULT_PROFILE};

use crate::cli::{ConfigArgs, ConfigCommand, GlobalOpts, OutputFormat};
use crate::config::output_format;
use crate::error::CliError;
use crate::output;

use super::util::prompt_err;

pub fn handle(args: ConfigArgs, global: &GlobalOpts) -> Result<(), CliError> {
    match args.command {
        ConfigCommand::Init => init(global),
        ConfigCommand::Show => show(global),
    }
}

fn init(global: &GlobalOpts) -> Result<(), CliError> {
    let mut cfg = taskboard_config::load_config_or_default();
    let path = taskboard_config::config_path();
    eprintln!("taskboard configuration");
    eprintln!("   Config path: {}\n", path.display());

    let profile_name: String = Input::new()
        .with_prompt("Profile name")
        .default(global.profile.clone().unwrap_or_else(|| DEFAULT_PROFILE.into()))
        .interact_text()
        .map_err(prompt_err)?;

    let mut profile = cfg.profiles.get(&profile_name).cloned().unwrap_or_default();
    let current_base = global
        .api_base
        .clone()
        .unwrap_or_else(|| profile.api_base.clone());
    profile.api_base = Input::new()
        .with_prompt("API base URL")
        .default(current_base)
        .interact_text()
        .map_err(prompt_err)?;

    // Reject a bad URL before it reaches disk.
    profile.to_client_config(&cfg.defaults)?;

    let make_default = cfg.profiles.is_empty()
        || Confirm::new()
            .with_prompt(format!("Make '{profile_name}' the default profile?"))
            .default(false)
            .interact()
            .map_err(prompt_err)?;
    if make_default {
        cfg.default_profile = Some(profile_name.clone());
    }

    let needs_user = profile.user_id.is_none();
    cfg.profiles.insert(profile_name.clone(), profile);
    let saved = taskboard_config::save_config(&cfg)?;
    tracing::debug!(path = %saved.display(), profile = %profile_name, "saved config");

    output::status(&format!("Profile '{profile_name}' saved"), global.quiet);
    if needs_user {
        output::status("Next: taskboard user create <name>", global.quiet);
    }
    Ok(())
}

fn show(global: &GlobalOpts) -> Result<(), CliError> {
    let cfg = taskboard_config::load_config()?;
    let out = render_config(&cfg, output_format(global, &cfg))?;
    output::status(
        &format!("# {}", taskboard_config::config_path().display()),
        global.quiet,
    );
    output::print_output(&out, global.quiet);
    Ok(())
}

fn render_config(cfg: &Config, format: OutputFormat) -> Result<String, CliError> {
    match format {
        OutputFormat::Json => output::render_json(cfg),
        OutputFormat::Table | OutputFormat::Plain => Ok(toml::to_string_pretty(cfg)
            .map_err(taskboard_config::ConfigError::from)?),
    }
}
