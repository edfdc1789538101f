use crate::battle::state::{Battle, BattleSide};
use crate::combatant::Combatant;
use crate::roster::Roster;
use schema::Element;

/// Builder for combatants with explicit raw stats, so engine tests can pin
/// exact matchups instead of deriving them from levels.
pub struct TestCombatantBuilder {
    combatant: Combatant,
}

impl TestCombatantBuilder {
    pub fn new(name: &str, element: Element) -> Self {
        Self {
            combatant: Combatant::new(name, element, 1).expect("valid test combatant"),
        }
    }

    pub fn at_level(name: &str, element: Element, level: u32) -> Self {
        Self {
            combatant: Combatant::new(name, element, level).expect("valid test combatant"),
        }
    }

    pub fn with_stats(mut self, health: u32, attack: u32, protection: u32, speed: f32) -> Self {
        self.combatant
            .set_raw_stats(health, attack, protection, speed);
        self
    }

    pub fn with_experience(mut self, experience: u32) -> Self {
        let name = self.combatant.name().to_string();
        let element = self.combatant.element();
        let level = self.combatant.level();
        let stats = (
            self.combatant.health(),
            self.combatant.attack(),
            self.combatant.protection(),
            self.combatant.speed(),
        );
        self.combatant = Combatant::with_experience(name, element, level, experience)
            .expect("valid test combatant");
        self.combatant
            .set_raw_stats(stats.0, stats.1, stats.2, stats.3);
        self
    }

    pub fn build(self) -> Combatant {
        self.combatant
    }
}

/// Roster holding a single combatant, ready to battle.
pub fn roster_with(name: &str, combatant: Combatant) -> Roster {
    let mut roster = Roster::new(name);
    roster.add_combatant(combatant).expect("team capacity");
    roster
}

/// Battle over the first combatant of each roster, still waiting to start.
pub fn battle_between(side_one: Roster, side_two: Roster) -> Battle {
    Battle::new(
        "test".to_string(),
        BattleSide::new(side_one, 0).expect("side one selection"),
        BattleSide::new(side_two, 0).expect("side two selection"),
    )
}
