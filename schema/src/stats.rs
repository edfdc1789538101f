use crate::Element;
use serde::{Deserialize, Serialize};

// Reference configuration for derived stats
pub const BASE_HEALTH: u32 = 100;
pub const BASE_ATTACK: u32 = 10;
pub const BASE_PROTECTION: u32 = 5;
pub const BASE_SPEED: f32 = 1.0;

/// Experience consumed per level gained.
pub const EXP_PER_LEVEL: u32 = 50;

/// The four derived battle stats of a combatant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CombatantStats {
    pub health: u32,
    pub attack: u32,
    pub protection: u32,
    pub speed: f32,
}

impl CombatantStats {
    /// Compute the full stat block for a combatant of the given level and
    /// element. Health is the full value for that level.
    pub fn for_level(level: u32, element: Element) -> Self {
        CombatantStats {
            health: BASE_HEALTH * level,
            attack: BASE_ATTACK * level,
            protection: BASE_PROTECTION * level,
            speed: BASE_SPEED * element.speed_weight(),
        }
    }
}
