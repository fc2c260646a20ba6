use crate::reports;
use chrono::Utc;
use keymapcraft::presets::all_presets;

pub fn run() {
    let now = Utc::now();
    let rows: Vec<_> = all_presets()
        .into_iter()
        .map(|p| (p.to_string(), p.layout(now)))
        .collect();
    reports::print_preset_table(&rows);
}
