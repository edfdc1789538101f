//! Pocket Arena Battle Core
//!
//! A deterministic turn-based battle system: elemental combatants with
//! derived stats and experience progression, bounded trainer rosters with
//! win/loss records, and a two-sided battle state machine narrated through
//! an injected event bus.

// --- MODULE DECLARATIONS ---
// This declares the module hierarchy for the crate.
pub mod battle;
pub mod combatant;
pub mod errors;
pub mod prefab;
pub mod roster;

// --- PUBLIC API RE-EXPORTS ---
// This section defines the public-facing API of the `pocket-arena` crate,
// making it easy for users to import the most important types directly.

// --- From the `schema` crate ---
// Re-export the shared data definitions.
pub use schema::{
    CombatantStats, Element, BASE_ATTACK, BASE_HEALTH, BASE_PROTECTION, BASE_SPEED, EXP_PER_LEVEL,
};

// --- From this crate's modules (`src/`) ---

// Core battle engine functions and state.
pub use battle::engine::{execute_turn, register_outcome, start_battle, VICTORY_EXPERIENCE};
pub use battle::state::{Battle, BattleEvent, BattleSide, BattleStatus, EventBus, SideId};

// Core runtime types for a battle.
pub use combatant::{AttackReport, Combatant};
pub use roster::{Roster, MAX_TEAM_SIZE};

// Crate-specific error and result types.
pub use errors::{
    ArenaError, ArenaResult, BattleResult, BattleStateError, CombatantError, CombatantResult,
    RosterError, RosterResult,
};
