use clap::{CommandFactory, FromArgMatches, Parser, Subcommand};
use keymapcraft::config::EditorConfig;
use std::process;

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// JSON file with editor settings; flags given on the command line win
    #[arg(global = true, long)]
    config: Option<String>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List the built-in preset layouts
    Presets,
    Inspect(cmd::inspect::InspectArgs),
    Export(cmd::export::ExportArgs),
    Import(cmd::import::ImportArgs),
    Compare(cmd::compare::CompareArgs),
}

impl Commands {
    fn editor_config(&self) -> Option<&EditorConfig> {
        match self {
            Self::Inspect(args) => Some(&args.config),
            Self::Export(args) => Some(&args.config),
            Self::Import(args) => Some(&args.config),
            Self::Presets | Self::Compare(_) => None,
        }
    }
}

fn main() {
    // stdout carries export payloads
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    // Raw matches tell explicit flags apart from clap defaults
    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    let mut config = match &cli.config {
        Some(path) => EditorConfig::load_from_file(path).unwrap_or_else(|e| {
            eprintln!("❌ Failed to load config '{}': {}", path, e);
            process::exit(1);
        }),
        None => EditorConfig::default(),
    };

    if let (Some(flags), Some((_, sub_matches))) =
        (cli.command.editor_config(), matches.subcommand())
    {
        config.merge_from_cli(flags, sub_matches);
        if let Err(e) = config.validate() {
            eprintln!("❌ {}", e);
            process::exit(1);
        }
    }

    let result = match cli.command {
        Commands::Presets => {
            cmd::presets::run();
            Ok(())
        }
        Commands::Inspect(args) => cmd::inspect::run(args, &config),
        Commands::Export(args) => cmd::export::run(args, &config),
        Commands::Import(args) => cmd::import::run(args, &config),
        Commands::Compare(args) => cmd::compare::run(args),
    };

    if let Err(e) = result {
        eprintln!("\n❌ {}", e);
        process::exit(1);
    }
}
