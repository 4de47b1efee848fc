//! Human-readable rationale for a ranking.
//!
//! Segment order is fixed: importance, urgency, effort, dependency, cycle
//! warning, unblocks, quadrant, score. Callers compare these strings.

use crate::scoring::ScoreInfo;

pub const SEPARATOR: &str = "; ";
pub const CYCLE_WARNING: &str = "⚠ Part of a circular dependency chain";

pub fn build_explanation(info: &ScoreInfo, in_cycle: bool, unblocks: usize) -> String {
    let mut reasons: Vec<String> = vec![
        info.importance_label.clone(),
        info.urgency_label.clone(),
        info.effort_label.clone(),
        info.dependency_label.clone(),
    ];

    if in_cycle {
        reasons.push(CYCLE_WARNING.to_string());
    }

    // Overlaps the dependency label; both are surfaced.
    if unblocks > 0 {
        reasons.push(format!("Unblocks {unblocks} downstream task(s)"));
    }

    reasons.push(format!("Eisenhower zone: {}", info.quadrant));
    // Debug keeps the trailing ".0" on whole scores.
    reasons.push(format!("Final score: {:?}", info.score));

    reasons.join(SEPARATOR)
}
