use clap::{Parser, Subcommand};

use crate::render::ColorMode;

/// wk: weekly time-block planner
#[derive(Parser, Debug)]
#[command(name = "wk", version, about)]
pub struct Cli {
    /// Control ANSI colors in output.
    /// By default, colors are disabled when output is redirected (e.g with `>` or `|`).
    #[arg(long, value_enum, global = true, default_value_t = ColorMode::Auto)]
    pub color: ColorMode,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Plan a time block (e.g., `wk add monday 9:00-11:00 deep work #focus`).
    /// The day defaults to today when the first argument is a time range.
    Add {
        /// `[day] <start>-<end> <description...>`
        #[arg(required = true, value_name = "ARGS")]
        args: Vec<String>,
        /// Tag for the block (or use #hashtag in the description)
        #[arg(long, short)]
        tag: Option<String>,
    },
    /// Add a note to a day (e.g., `wk note friday call the bank`).
    Note {
        /// `[day] <text...>`
        #[arg(required = true, value_name = "ARGS")]
        args: Vec<String>,
        /// Tag for the note (or use #hashtag in the text)
        #[arg(long, short)]
        tag: Option<String>,
    },
    /// Record the actual time of a block (`wk actual <id> <start>-<end>`), or with
    /// `--unplanned` something that happened without a plan
    /// (`wk actual --unplanned [day] <start>-<end> <description...>`).
    Actual {
        /// Record an unplanned block
        #[arg(long)]
        unplanned: bool,
        #[arg(required = true, value_name = "ARGS")]
        args: Vec<String>,
        /// Tag for unplanned blocks (or use #hashtag in the description)
        #[arg(long, short)]
        tag: Option<String>,
    },
    /// Mark a block as done
    Done { id: String },
    /// Unmark a block as done
    Undone { id: String },
    /// Delete a block or note
    Rm { id: String },
    /// List the week, or a single day of it (e.g., `wk ls`, `wk ls friday --last`)
    Ls {
        day: Option<String>,
        /// Show last week
        #[arg(long, conflicts_with_all = ["next", "week"])]
        last: bool,
        /// Show next week
        #[arg(long, conflicts_with = "week")]
        next: bool,
        /// Show a specific week (e.g., `2025-W06`)
        #[arg(long)]
        week: Option<String>,
    },
    /// Serve a read-only week grid on 127.0.0.1
    Serve {
        /// Port to listen on [default: `port` from the config file, or 8080]
        #[arg(long, short)]
        port: Option<u16>,
    },
}
