//! Commands sent to the simulation by its external collaborators.
//!
//! The input collaborator delivers normalized movement vectors and fire
//! edges (it owns device abstraction — the core never branches on input
//! hardware); the collision collaborator delivers overlap reports.
//! Commands are queued and processed at the next tick boundary.

use serde::{Deserialize, Serialize};

/// All messages accepted by the simulation engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SimCommand {
    // --- Session control ---
    /// Start (or restart) a mission.
    StartMission,
    /// Pause the simulation.
    Pause,
    /// Resume the simulation.
    Resume,

    // --- Input collaborator ---
    /// Latest normalized movement vector, each axis nominally in [-1, 1].
    SetMoveInput { x: f32, y: f32 },
    /// Fire signal edge: pressed. Starts a repeat-fire session if none is
    /// active; a no-op otherwise.
    FirePressed,
    /// Fire signal edge: released. Cancels the active session immediately;
    /// a no-op if none is active.
    FireReleased,

    // --- Collision collaborator ---
    /// Two actors overlapped. Delivery is at-most-once per physical
    /// overlap occurrence (the collaborator debounces continuous contact).
    ReportOverlap { first: u32, second: u32 },
}
