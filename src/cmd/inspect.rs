use super::{preset_layout, resolve_layout};
use crate::reports;
use clap::Args;
use keymapcraft::config::EditorConfig;
use keymapcraft::error::{KeymapError, KmResult};
use keymapcraft::overlap::detect_overlaps;

#[derive(Args, Debug, Clone)]
pub struct InspectArgs {
    #[command(flatten)]
    pub config: EditorConfig,

    /// Layout JSON file
    pub file: Option<String>,

    #[arg(short, long, conflicts_with = "file")]
    pub preset: Option<String>,
}

pub fn run(args: InspectArgs, config: &EditorConfig) -> KmResult<()> {
    let layout = match (&args.file, &args.preset) {
        (Some(file), _) => resolve_layout(file)?,
        (None, Some(preset)) => preset_layout(preset)?,
        (None, None) => {
            return Err(KeymapError::Import(
                "nothing to inspect: pass a FILE or --preset".to_string(),
            ))
        }
    };

    reports::print_layout_summary(&layout, config);
    let overlaps = detect_overlaps(&layout, config.unit_px);
    reports::print_overlap_report(&overlaps);
    Ok(())
}
