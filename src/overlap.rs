use crate::model::Layout;
use itertools::Itertools;
use std::collections::BTreeSet;

/// Keys whose bounding boxes intersect, recomputed on every call.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OverlapReport {
    /// Each intersecting pair once, in layout order.
    pub pairs: Vec<(String, String)>,
    pub keys: BTreeSet<String>,
}

impl OverlapReport {
    pub fn is_overlapping(&self, id: &str) -> bool {
        self.keys.contains(id)
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

/// Pairwise O(n²) scan. Rectangles sharing only an edge do not overlap.
pub fn detect_overlaps(layout: &Layout, unit_px: f32) -> OverlapReport {
    let rects: Vec<_> = layout
        .keys
        .iter()
        .map(|k| (k.id.as_str(), k.rect(unit_px)))
        .collect();

    let mut report = OverlapReport::default();
    for ((a_id, a), (b_id, b)) in rects.iter().tuple_combinations() {
        if a.intersects(b) {
            report.pairs.push((a_id.to_string(), b_id.to_string()));
            report.keys.insert(a_id.to_string());
            report.keys.insert(b_id.to_string());
        }
    }
    report
}
