//! animals-web CLI: render a JSON list of animals into an HTML page.
//!
//! `animals-web` with no subcommand renders `animals_data.json` into
//! `animals_template.html` and writes `animals.html`. `animals-web init`
//! scaffolds those starter files.

mod commands;
mod output;

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use animals_web_core::style::RenderStyle;

#[derive(Parser)]
#[command(
    name = "animals-web",
    about = "Render a JSON list of animals into an HTML page",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    render: RenderArgs,

    /// Path to animals-web.config.json (default: ./animals-web.config.json)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the animals page (the default when no subcommand is given)
    Render(RenderArgs),

    /// Write a starter template, sample data, and config file
    Init {
        /// Directory to scaffold into
        #[arg(default_value = ".")]
        dir: PathBuf,

        /// Render style recorded in the config (prompts if omitted)
        #[arg(long, value_enum)]
        style: Option<StyleChoice>,

        /// Overwrite existing files
        #[arg(long)]
        force: bool,
    },
}

/// Overrides for the values in the config file.
#[derive(Args, Clone, Debug, Default)]
pub struct RenderArgs {
    /// JSON file with the list of animals
    #[arg(long)]
    data: Option<PathBuf>,

    /// HTML template containing __REPLACE_ANIMALS_INFO__
    #[arg(long)]
    template: Option<PathBuf>,

    /// Output HTML file (overwritten)
    #[arg(long, short)]
    output: Option<PathBuf>,

    /// Markup style for each animal
    #[arg(long, value_enum)]
    style: Option<StyleChoice>,
}

impl RenderArgs {
    /// Fill unset fields from `other`.
    fn or(self, other: RenderArgs) -> RenderArgs {
        RenderArgs {
            data: self.data.or(other.data),
            template: self.template.or(other.template),
            output: self.output.or(other.output),
            style: self.style.or(other.style),
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum StyleChoice {
    PlainText,
    SimpleListItem,
    CardListItem,
}

impl From<StyleChoice> for RenderStyle {
    fn from(choice: StyleChoice) -> Self {
        match choice {
            StyleChoice::PlainText => Self::PlainText,
            StyleChoice::SimpleListItem => Self::SimpleListItem,
            StyleChoice::CardListItem => Self::CardListItem,
        }
    }
}

fn main() {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let result = match cli.command {
        Some(Commands::Init { dir, style, force }) => {
            commands::init::run(&dir, style.map(RenderStyle::from), force)
        }
        Some(Commands::Render(args)) => {
            commands::render::run(cli.config.as_deref(), &args.or(cli.render))
        }
        None => commands::render::run(cli.config.as_deref(), &cli.render),
    };

    if let Err(e) = result {
        output::print_error(&format!("{e:#}"));
        println!("The run was aborted.");
        std::process::exit(1);
    }
}
