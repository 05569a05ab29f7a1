//! Target proposal and commit of a reorder.

use crate::types::{DragSession, DropDirection, DropIndicator};

/// Result of moving one entry within the list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitOutcome {
    /// Dropped onto its own position
    Unchanged,
    Moved,
    /// An index no longer points into the list
    OutOfRange,
}

/// Whether a proposal should be acknowledged with a light pulse
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Proposal {
    pub pulse: bool,
}

/// Aim the session at `candidate` and place the drop indicator
///
/// Hovering the dragged item itself clears the target. The pulse fires only
/// when the candidate differs from the last one announced.
pub fn propose_target(session: &mut DragSession, candidate: usize) -> Proposal {
    if candidate == session.dragged_index {
        session.current_target_index = None;
        session.indicator = None;
        return Proposal { pulse: false };
    }

    let direction = if session.dragged_index < candidate {
        DropDirection::After
    } else {
        DropDirection::Before
    };
    session.current_target_index = Some(candidate);
    session.indicator = Some(DropIndicator {
        index: candidate,
        direction,
    });

    let pulse = session.last_notified_candidate != Some(candidate);
    if pulse {
        session.last_notified_candidate = Some(candidate);
    }
    Proposal { pulse }
}

/// Move `items[dragged]` so that it ends up at index `target`
///
/// The entry is removed first and then inserted at `target`, so the target is
/// an index into the shortened list. Every other entry keeps its relative
/// order.
pub fn commit<T>(items: &mut Vec<T>, dragged: usize, target: usize) -> CommitOutcome {
    if dragged >= items.len() || target >= items.len() {
        return CommitOutcome::OutOfRange;
    }
    if dragged == target {
        return CommitOutcome::Unchanged;
    }
    let entry = items.remove(dragged);
    items.insert(target, entry);
    CommitOutcome::Moved
}
