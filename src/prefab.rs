use crate::combatant::Combatant;
use crate::errors::ArenaResult;
use crate::roster::Roster;
use schema::Element;
use serde::{Deserialize, Serialize};

/// A predefined roster configuration for exhibition battles.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrefabRoster {
    pub trainer: String,
    pub combatants: Vec<PrefabCombatant>,
}

/// A predefined combatant configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrefabCombatant {
    pub name: String,
    pub element: Element,
    pub level: u32,
}

impl PrefabRoster {
    /// Materialize the configuration into a battle-ready roster.
    pub fn build(&self) -> ArenaResult<Roster> {
        let mut roster = Roster::new(self.trainer.clone());
        for entry in &self.combatants {
            let combatant = Combatant::new(entry.name.clone(), entry.element, entry.level)?;
            roster.add_combatant(combatant)?;
        }
        Ok(roster)
    }
}

/// Get the prefab rosters for the exhibition battle.
pub fn exhibition_rosters() -> Vec<PrefabRoster> {
    vec![
        PrefabRoster {
            trainer: "Ash".to_string(),
            combatants: vec![PrefabCombatant {
                name: "Pikachu".to_string(),
                element: Element::Wind,
                level: 3,
            }],
        },
        PrefabRoster {
            trainer: "Misty".to_string(),
            combatants: vec![PrefabCombatant {
                name: "Bulbasaur".to_string(),
                element: Element::Earth,
                level: 5,
            }],
        },
    ]
}
