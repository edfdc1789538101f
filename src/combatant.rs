use crate::errors::{CombatantError, CombatantResult};
use schema::{CombatantStats, Element, EXP_PER_LEVEL};
use serde::{Deserialize, Serialize};

/// The outcome of one resolved attack, carrying what the observer layer
/// needs to narrate the exchange.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AttackReport {
    pub damage: u32,
    pub effectiveness: f32,
    pub knocked_out: bool,
}

/// A named entity with an element, a level, and derived battle stats,
/// owning its own experience progression.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Combatant {
    name: String,
    element: Element,
    level: u32,
    experience: u32,
    stats: CombatantStats,
}

impl Combatant {
    /// Create a combatant at the given level with no banked experience.
    ///
    /// Each field is validated explicitly: the name must be non-empty and
    /// the level at least 1.
    pub fn new(name: impl Into<String>, element: Element, level: u32) -> CombatantResult<Self> {
        Self::with_experience(name, element, level, 0)
    }

    /// Create a combatant with an explicit starting experience balance.
    pub fn with_experience(
        name: impl Into<String>,
        element: Element,
        level: u32,
        experience: u32,
    ) -> CombatantResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(CombatantError::EmptyName);
        }
        if level == 0 {
            return Err(CombatantError::InvalidLevel(level));
        }

        Ok(Combatant {
            stats: CombatantStats::for_level(level, element),
            name,
            element,
            level,
            experience,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn element(&self) -> Element {
        self.element
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn experience(&self) -> u32 {
        self.experience
    }

    pub fn health(&self) -> u32 {
        self.stats.health
    }

    pub fn attack(&self) -> u32 {
        self.stats.attack
    }

    pub fn protection(&self) -> u32 {
        self.stats.protection
    }

    pub fn speed(&self) -> f32 {
        self.stats.speed
    }

    /// True once health has been driven to exactly 0.
    pub fn is_knocked_out(&self) -> bool {
        self.stats.health == 0
    }

    /// Add experience, consuming the per-level threshold for each level
    /// gained. A single large grant can gain several levels in a row; the
    /// derived stats are recomputed after every increment, which restores
    /// health to the new full value. Returns the number of levels gained.
    pub fn grant_experience(&mut self, amount: u32) -> u32 {
        self.experience += amount;

        let mut levels_gained = 0;
        while self.experience >= EXP_PER_LEVEL {
            self.experience -= EXP_PER_LEVEL;
            self.level += 1;
            self.stats = CombatantStats::for_level(self.level, self.element);
            levels_gained += 1;
        }
        levels_gained
    }

    /// Subtract damage from health, clamped at a floor of 0. Returns the
    /// knockout signal: health is now exactly 0.
    pub fn apply_damage(&mut self, amount: u32) -> bool {
        self.stats.health = self.stats.health.saturating_sub(amount);
        self.stats.health == 0
    }

    /// Resolve one attack against a defender.
    ///
    /// The raw damage has a hard floor of 1 regardless of the protection
    /// differential; the element multiplier is applied afterwards and the
    /// product truncated to whole points.
    pub fn resolve_attack(&self, defender: &mut Combatant) -> AttackReport {
        let raw = self
            .stats
            .attack
            .saturating_sub(defender.protection())
            .max(1);
        let effectiveness = Element::effectiveness(self.element, defender.element());
        let damage = (raw as f32 * effectiveness) as u32;
        let knocked_out = defender.apply_damage(damage);

        AttackReport {
            damage,
            effectiveness,
            knocked_out,
        }
    }

    #[cfg(test)]
    pub(crate) fn set_raw_stats(&mut self, health: u32, attack: u32, protection: u32, speed: f32) {
        self.stats = CombatantStats {
            health,
            attack,
            protection,
            speed,
        };
    }
}
