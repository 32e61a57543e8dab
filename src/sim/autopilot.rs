//! Demo mode - a simple controller that plays the game
//!
//! Aims for the centre of the nearest gap the actor has not cleared yet and
//! flaps whenever it has sunk far enough below that line.

use super::state::{GamePhase, Snapshot};

/// Flap only this far below the gap centre; one flap rises about 80 px
const AIM_BIAS: f32 = 30.0;

/// Target height for the actor given what lies ahead
pub fn target_y(snapshot: &Snapshot<'_>, field_height: f32) -> f32 {
    let actor = snapshot.actor;
    snapshot
        .obstacles
        .iter()
        .filter(|o| o.right() + actor.radius >= actor.pos.x)
        .min_by(|a, b| a.x.total_cmp(&b.x))
        .map(|o| o.gap_center())
        .unwrap_or(field_height / 2.0)
}

/// Whether the demo controller wants to flap this frame
pub fn should_flap(snapshot: &Snapshot<'_>, field_height: f32) -> bool {
    if snapshot.phase != GamePhase::Running && snapshot.phase != GamePhase::Idle {
        return false;
    }
    snapshot.actor.pos.y > target_y(snapshot, field_height) + AIM_BIAS
}
