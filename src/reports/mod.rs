use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use keymapcraft::compare::LegendDifference;
use keymapcraft::config::EditorConfig;
use keymapcraft::model::Layout;
use keymapcraft::overlap::OverlapReport;

fn table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

pub fn print_preset_table(presets: &[(String, Layout)]) {
    println!("\n📚 === PRESET LAYOUTS === 📚");
    let mut table = table();
    table.add_row(vec![
        Cell::new("Preset").add_attribute(Attribute::Bold),
        Cell::new("Name"),
        Cell::new("Type").fg(Color::Cyan),
        Cell::new("Lang"),
        Cell::new("Keys"),
    ]);
    if let Some(col) = table.column_mut(4) {
        col.set_cell_alignment(CellAlignment::Right);
    }

    for (preset, layout) in presets {
        table.add_row(vec![
            Cell::new(preset).add_attribute(Attribute::Bold),
            Cell::new(&layout.name),
            Cell::new(&layout.metadata.layout_type).fg(Color::Cyan),
            Cell::new(format!("{}-{}", layout.metadata.language, layout.metadata.region)),
            Cell::new(layout.keys.len()),
        ]);
    }
    println!("{}", table);
}

pub fn print_layout_summary(layout: &Layout, config: &EditorConfig) {
    println!("\nLayout: {} ({})", layout.name, layout.id);
    if let Some(desc) = &layout.description {
        println!("   {}", desc);
    }

    let (width, height) = layout.extent();
    let mut table = table();
    let rows = [
        ("Keys", layout.keys.len().to_string()),
        ("Type", layout.metadata.layout_type.clone()),
        (
            "Locale",
            format!("{}-{}", layout.metadata.language, layout.metadata.region),
        ),
        ("Extent", format!("{:.2}u x {:.2}u", width, height)),
        (
            "Canvas",
            format!(
                "{:.0} x {:.0} px",
                width * config.unit_px + 2.0 * config.canvas_padding_px,
                height * config.unit_px + 2.0 * config.canvas_padding_px
            ),
        ),
        ("Created", layout.created_at.to_rfc3339()),
        ("Updated", layout.updated_at.to_rfc3339()),
    ];
    for (label, value) in rows {
        table.add_row(vec![
            Cell::new(label).add_attribute(Attribute::Bold),
            Cell::new(value),
        ]);
    }
    println!("{}", table);
}

pub fn print_overlap_report(report: &OverlapReport) {
    if report.is_empty() {
        println!("✅ No overlapping keys.");
        return;
    }

    println!("\n⚠️  {} overlapping pair(s):", report.pairs.len());
    let mut table = table();
    table.add_row(vec![
        Cell::new("Key").add_attribute(Attribute::Bold),
        Cell::new("Overlaps").fg(Color::Red),
    ]);
    for (a, b) in &report.pairs {
        table.add_row(vec![Cell::new(a), Cell::new(b).fg(Color::Red)]);
    }
    println!("{}", table);
}

pub fn print_comparison_report(current: &str, other: &str, diffs: &[LegendDifference]) {
    println!("\n🔎 === {} vs {} === 🔎", current, other);
    if diffs.is_empty() {
        println!("No legend differences at shared positions.");
        return;
    }

    let mut table = table();
    table.add_row(vec![
        Cell::new("Key").add_attribute(Attribute::Bold),
        Cell::new("Pos"),
        Cell::new(current).fg(Color::Cyan),
        Cell::new(other).fg(Color::Green),
    ]);
    for d in diffs {
        table.add_row(vec![
            Cell::new(&d.key_id).add_attribute(Attribute::Bold),
            Cell::new(format!("{:.2},{:.2}", d.position.x, d.position.y))
                .set_alignment(CellAlignment::Right),
            Cell::new(&d.current).fg(Color::Cyan),
            Cell::new(&d.other).fg(Color::Green),
        ]);
    }
    println!("{}", table);
    println!("{} difference(s)", diffs.len());
}
