use super::{preset_layout, resolve_layout};
use clap::{Args, ValueEnum};
use keymapcraft::config::EditorConfig;
use keymapcraft::error::{KeymapError, KmResult};
use keymapcraft::exchange;
use std::fs;

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Url,
    Csv,
}

#[derive(Args, Debug, Clone)]
pub struct ExportArgs {
    #[command(flatten)]
    pub config: EditorConfig,

    #[arg(short, long, conflicts_with = "input")]
    pub preset: Option<String>,

    #[arg(short, long)]
    pub input: Option<String>,

    #[arg(short, long, value_enum, default_value_t = ExportFormat::Json)]
    pub format: ExportFormat,

    /// Write to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<String>,
}

pub fn run(args: ExportArgs, config: &EditorConfig) -> KmResult<()> {
    let layout = match (&args.input, &args.preset) {
        (Some(input), _) => resolve_layout(input)?,
        (None, Some(preset)) => preset_layout(preset)?,
        (None, None) => {
            return Err(KeymapError::Import(
                "nothing to export: pass --input or --preset".to_string(),
            ))
        }
    };

    let rendered = match args.format {
        ExportFormat::Json => exchange::to_json(&layout)?,
        ExportFormat::Url => exchange::share_url(&config.share_base_url, &layout)?,
        ExportFormat::Csv => exchange::key_table_string(&layout)?,
    };

    match &args.output {
        Some(path) => {
            fs::write(path, rendered)?;
            eprintln!("💾 Wrote '{}' ({} keys) to {}", layout.name, layout.keys.len(), path);
        }
        None => println!("{}", rendered.trim_end()),
    }
    Ok(())
}
