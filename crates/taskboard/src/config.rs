//! Resolves the active profile plus CLI overrides into a session.
//!
//! Core never sees these types -- it receives a pre-built `ClientConfig`.

use taskboard_config::{Config, Profile};
use taskboard_core::{ClientConfig, UserId};

use crate::cli::{GlobalOpts, OutputFormat};
use crate::error::CliError;

/// Everything a controller-bound command needs from configuration.
#[derive(Debug)]
pub struct Session {
    pub config: Config,
    pub profile_name: String,
    /// Active profile with `--api-base` / `--timeout` applied.
    pub profile: Profile,
    pub client: ClientConfig,
    pub output: OutputFormat,
}

impl Session {
    pub fn resolve(global: &GlobalOpts) -> Result<Self, CliError> {
        let config = taskboard_config::load_config()?;
        Self::from_config(config, global)
    }

    pub fn from_config(config: Config, global: &GlobalOpts) -> Result<Self, CliError> {
        let profile_name = config.profile_name(global.profile.as_deref()).to_owned();

        let mut profile = match config.profile(&profile_name) {
            Ok(profile) => profile,
            // A bare --api-base works without any profile on disk.
            Err(_) if global.api_base.is_some() => Profile::default(),
            Err(_) => {
                return Err(CliError::ProfileNotFound {
                    name: profile_name,
                    available: available_profiles(&config),
                });
            }
        };
        if let Some(api_base) = &global.api_base {
            profile.api_base.clone_from(api_base);
        }
        if let Some(timeout) = global.timeout {
            profile.timeout = Some(timeout);
        }

        let client = profile.to_client_config(&config.defaults)?;
        let output = output_format(global, &config);

        Ok(Self {
            config,
            profile_name,
            profile,
            client,
            output,
        })
    }

    /// The user to act as: `--user` first, then the profile's remembered
    /// user.
    pub fn user(&self, global: &GlobalOpts) -> Result<(UserId, String), CliError> {
        let remembered = self.profile.user();
        match (global.user, remembered) {
            (Some(id), Some((known, name))) if known.get() == id => Ok((known, name.to_owned())),
            (Some(id), _) => Ok((UserId(id), format!("user {id}"))),
            (None, Some((id, name))) => Ok((id, name.to_owned())),
            (None, None) => Err(CliError::NoUser {
                profile: self.profile_name.clone(),
            }),
        }
    }
}

/// `--output`, else `defaults.output` from the config file, else table.
pub fn output_format(global: &GlobalOpts, config: &Config) -> OutputFormat {
    use clap::ValueEnum;

    global.output.unwrap_or_else(|| {
        OutputFormat::from_str(&config.defaults.output, true).unwrap_or(OutputFormat::Table)
    })
}

fn available_profiles(config: &Config) -> String {
    if config.profiles.is_empty() {
        "(none)".into()
    } else {
        config
            .profiles
            .keys()
            .cloned()
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use clap::Parser;

    use crate::cli::Cli;

    fn global(args: &[&str]) -> GlobalOpts {
        let mut argv = vec!["taskboard"];
        argv.extend_from_slice(args);
        argv.push("export");
        Cli::try_parse_from(argv).unwrap().global
    }

    fn config_with_work_profile() -> Config {
        let mut config = Config::default();
        config.profiles.insert(
            "work".into(),
            Profile {
                api_base: "http://boards.internal:8080".into(),
                timeout: None,
                user_id: Some(7),
                user_name: Some("ada".into()),
            },
        );
        config
    }

    #[test]
    fn api_base_flag_overrides_profile() {
        let session = Session::from_config(
            config_with_work_profile(),
            &global(&["-p", "work", "--api-base", "http://127.0.0.1:9"]),
        )
        .unwrap();
        assert_eq!(session.client.api_base.as_str(), "http://127.0.0.1:9/");
        assert_eq!(session.profile.user_id, Some(7));
    }

    #[test]
    fn unknown_profile_lists_alternatives() {
        let err = Session::from_config(config_with_work_profile(), &global(&["-p", "home"]))
            .unwrap_err();
        match err {
            CliError::ProfileNotFound { name, available } => {
                assert_eq!(name, "home");
                assert_eq!(available, "work");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn user_resolution_order() {
        let config = config_with_work_profile();
        let session = Session::from_config(config.clone(), &global(&["-p", "work"])).unwrap();
        assert_eq!(
            session.user(&global(&[])).unwrap(),
            (UserId(7), "ada".to_owned())
        );
        assert_eq!(session.user(&global(&["--user", "9"])).unwrap().0, UserId(9));

        let bare = Session::from_config(Config::default(), &global(&[])).unwrap();
        assert!(matches!(
            bare.user(&global(&[])),
            Err(CliError::NoUser { .. })
        ));
    }

    #[test]
    fn output_falls_back_to_config_default() {
        let mut config = Config::default();
        config.defaults.output = "json".into();
        assert_eq!(output_format(&global(&[]), &config), OutputFormat::Json);
        assert_eq!(
            output_format(&global(&["-o", "plain"]), &config),
            OutputFormat::Plain
        );
    }
}
