//! Compaction prompt.
//!
//! Fixed instructions for distilling an unbounded interaction history into
//! a `<state_snapshot>` with five sections. Independent of any context.

const COMPACTION: &str = include_str!("../../templates/compaction.md").trim_ascii();

/// The sections of a state snapshot, in order.
pub const SNAPSHOT_SECTIONS: [&str; 5] = [
    "overall_goal",
    "key_knowledge",
    "file_system_state",
    "recent_actions",
    "current_plan",
];

pub fn compaction_prompt() -> &'static str {
    COMPACTION
}
