use crate::reports;
use clap::Args;
use keymapcraft::config::EditorConfig;
use keymapcraft::error::KmResult;
use keymapcraft::store::EditorStore;
use std::fs;

#[derive(Args, Debug, Clone)]
pub struct ImportArgs {
    #[command(flatten)]
    pub config: EditorConfig,

    /// Layout JSON file, or a file holding a share URL with `--url`
    pub file: String,

    #[arg(long, default_value_t = false)]
    pub url: bool,
}

pub fn run(args: ImportArgs, config: &EditorConfig) -> KmResult<()> {
    let payload = fs::read_to_string(&args.file)?;
    let mut store = EditorStore::new(config.clone());

    if args.url {
        store.import_share_url(payload.trim())?;
    } else {
        store.import_json(&payload)?;
    }

    if let Some(layout) = store.current_layout() {
        println!("✅ Imported '{}' as {}", layout.name, layout.id);
        reports::print_layout_summary(layout, store.config());
    }
    reports::print_overlap_report(&store.overlaps());
    Ok(())
}
