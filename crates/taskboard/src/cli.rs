//! Clap derive structures for the `taskboard` CLI.

use clap::{Args, Parser, Subcommand, ValueEnum};

use taskboard_core::Priority;

// ── Top-Level CLI ────────────────────────────────────────────────────

/// taskboard -- boards, lists and tasks from the command line
#[derive(Debug, Parser)]
#[command(
    name = "taskboard",
    version,
    about = "Manage task boards from the command line",
    long_about = "A command-line client for a task-board server.\n\n\
        Boards own ordered lists, lists own ordered tasks. Every command\n\
        loads the current user's boards from the server before acting.",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Config profile to use
    #[arg(long, short = 'p', env = "TASKBOARD_PROFILE", global = true)]
    pub profile: Option<String>,

    /// API base URL (overrides profile)
    #[arg(long, env = "TASKBOARD_API_BASE", global = true)]
    pub api_base: Option<String>,

    /// User id (overrides the user remembered in the profile)
    #[arg(long, env = "TASKBOARD_USER", global = true)]
    pub user: Option<u64>,

    /// Output format [default: from config, else table]
    #[arg(long, short = 'o', env = "TASKBOARD_OUTPUT", global = true)]
    pub output: Option<OutputFormat>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Skip confirmation prompts
    #[arg(long, short = 'y', global = true)]
    pub yes: bool,

    /// Request timeout in seconds
    #[arg(long, env = "TASKBOARD_TIMEOUT", global = true)]
    pub timeout: Option<u64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Pretty table (default, interactive)
    Table,
    /// Pretty-printed JSON
    Json,
    /// Plain text, one id per line (scripting)
    Plain,
}

// ── Top-Level Command Enum ───────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Register a user
    User(UserArgs),

    /// Manage boards
    #[command(alias = "b")]
    Boards(BoardsArgs),

    /// Manage lists on a board
    #[command(alias = "l")]
    Lists(ListsArgs),

    /// Manage tasks in a list
    #[command(alias = "t")]
    Tasks(TasksArgs),

    /// Print every board, list and task as nested JSON
    Export,

    /// Manage CLI configuration and profiles
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  USER
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct UserArgs {
    #[command(subcommand)]
    pub command: UserCommand,
}

#[derive(Debug, Subcommand)]
pub enum UserCommand {
    /// Register a new user and remember it in the active profile
    Create {
        /// Display name
        name: String,
    },
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  BOARDS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct BoardsArgs {
    #[command(subcommand)]
    pub command: BoardsCommand,
}

#[derive(Debug, Subcommand)]
pub enum BoardsCommand {
    /// List boards
    #[command(alias = "ls")]
    List,

    /// Show a board with its lists and tasks
    Show {
        /// Board id [default: first board]
        board: Option<u64>,
    },

    /// Create a board
    Create {
        title: String,
    },

    /// Rename a board
    Rename {
        board: u64,
        title: String,
    },

    /// Delete a board with all its lists and tasks
    #[command(alias = "rm")]
    Delete {
        board: u64,
    },
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  LISTS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct ListsArgs {
    #[command(subcommand)]
    pub command: ListsCommand,
}

#[derive(Debug, Subcommand)]
pub enum ListsCommand {
    /// Add a list to a board
    Create {
        board: u64,
        title: String,
    },

    /// Rename a list
    Rename {
        list: u64,
        title: String,
    },

    /// Delete a list with all its tasks
    #[command(alias = "rm")]
    Delete {
        board: u64,
        list: u64,
    },
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  TASKS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct TasksArgs {
    #[command(subcommand)]
    pub command: TasksCommand,
}

#[derive(Debug, Subcommand)]
pub enum TasksCommand {
    /// Add a task to a list
    Create {
        list: u64,
        title: String,

        #[arg(long, short = 'd')]
        description: Option<String>,

        /// low, medium or high
        #[arg(long, short = 'P', default_value = "low")]
        priority: Priority,
    },

    /// Change a task's title, description or priority
    Update {
        task: u64,

        #[arg(long)]
        title: Option<String>,

        /// New description; an empty string clears it
        #[arg(long, short = 'd')]
        description: Option<String>,

        #[arg(long, short = 'P')]
        priority: Option<Priority>,
    },

    /// Delete a task
    #[command(alias = "rm")]
    Delete {
        list: u64,
        task: u64,
    },
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  CONFIG & COMPLETIONS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Create or update a profile interactively
    Init,

    /// Display the resolved configuration
    Show,
}

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: clap_complete::Shell,
}
