use super::resolve_layout;
use crate::reports;
use clap::Args;
use keymapcraft::compare::compare_layouts;
use keymapcraft::error::KmResult;

#[derive(Args, Debug, Clone)]
pub struct CompareArgs {
    /// Current layout (file or preset name)
    pub current: String,

    /// Layout to compare against (file or preset name)
    pub other: String,
}

pub fn run(args: CompareArgs) -> KmResult<()> {
    let current = resolve_layout(&args.current)?;
    let other = resolve_layout(&args.other)?;
    let diffs = compare_layouts(&current, &other);
    reports::print_comparison_report(&current.name, &other.name, &diffs);
    Ok(())
}
