use crate::combatant::Combatant;
use crate::errors::{RosterError, RosterResult};
use serde::{Deserialize, Serialize};

/// Maximum number of combatants a roster may field.
pub const MAX_TEAM_SIZE: usize = 3;

/// An owner of a bounded team of combatants with an aggregate win/loss
/// record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Roster {
    name: String,
    victories: u32,
    defeats: u32,
    team: Vec<Combatant>,
}

impl Roster {
    pub fn new(name: impl Into<String>) -> Self {
        Roster {
            name: name.into(),
            victories: 0,
            defeats: 0,
            team: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn victories(&self) -> u32 {
        self.victories
    }

    pub fn defeats(&self) -> u32 {
        self.defeats
    }

    pub fn team(&self) -> &[Combatant] {
        &self.team
    }

    pub fn combatant(&self, index: usize) -> Option<&Combatant> {
        self.team.get(index)
    }

    pub(crate) fn combatant_mut(&mut self, index: usize) -> Option<&mut Combatant> {
        self.team.get_mut(index)
    }

    /// Append a combatant to the team, preserving insertion order.
    pub fn add_combatant(&mut self, combatant: Combatant) -> RosterResult<()> {
        if self.team.len() >= MAX_TEAM_SIZE {
            return Err(RosterError::TeamFull {
                capacity: MAX_TEAM_SIZE,
            });
        }
        self.team.push(combatant);
        Ok(())
    }

    /// Remove the named combatant from the team and return it.
    ///
    /// A missing member is reported to the caller rather than swallowed;
    /// the roster is unchanged in that case.
    pub fn remove_combatant(&mut self, name: &str) -> RosterResult<Combatant> {
        match self.team.iter().position(|member| member.name() == name) {
            Some(index) => Ok(self.team.remove(index)),
            None => Err(RosterError::NotInTeam {
                name: name.to_string(),
            }),
        }
    }

    pub fn record_victory(&mut self) {
        self.victories += 1;
    }

    pub fn record_defeat(&mut self) {
        self.defeats += 1;
    }
}
