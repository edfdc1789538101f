use crate::combatant::Combatant;
use crate::errors::{BattleResult, BattleStateError};
use crate::roster::Roster;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BattleStatus {
    Waiting,
    InProgress,
    Finished,
}

/// Identity of one of the two predefined combatant slots in a battle.
///
/// Outcome registration compares slots, never team membership.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SideId {
    SideOne,
    SideTwo,
}

impl SideId {
    pub fn to_index(self) -> usize {
        match self {
            SideId::SideOne => 0,
            SideId::SideTwo => 1,
        }
    }

    pub fn from_index(index: usize) -> Self {
        if index == 0 {
            SideId::SideOne
        } else {
            SideId::SideTwo
        }
    }

    pub fn opponent(self) -> Self {
        match self {
            SideId::SideOne => SideId::SideTwo,
            SideId::SideTwo => SideId::SideOne,
        }
    }
}

/// One side of an encounter: a roster and the combatant it fields.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct BattleSide {
    roster: Roster,
    active_index: usize,
}

impl BattleSide {
    /// Pair a roster with the team index of the combatant it sends out.
    pub fn new(roster: Roster, active_index: usize) -> BattleResult<Self> {
        if roster.combatant(active_index).is_none() {
            return Err(BattleStateError::InvalidCombatantIndex(active_index));
        }
        Ok(BattleSide {
            roster,
            active_index,
        })
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn combatant(&self) -> &Combatant {
        self.roster
            .combatant(self.active_index)
            .expect("active index validated at construction")
    }

    pub(crate) fn combatant_mut(&mut self) -> &mut Combatant {
        self.roster
            .combatant_mut(self.active_index)
            .expect("active index validated at construction")
    }

    pub(crate) fn roster_mut(&mut self) -> &mut Roster {
        &mut self.roster
    }
}

/// A stateful orchestration of turn-based combat between two combatants,
/// each owned by a distinct roster.
///
/// Status moves Waiting -> InProgress -> Finished, monotonically; the
/// battle owns both rosters for its duration and the presentation layer
/// reads final counters back through [`Battle::side`].
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Battle {
    pub battle_id: String,
    sides: [BattleSide; 2],
    status: BattleStatus,
    turn_number: u32,
}

impl Battle {
    pub fn new(id: String, side_one: BattleSide, side_two: BattleSide) -> Self {
        Self {
            battle_id: id,
            sides: [side_one, side_two],
            status: BattleStatus::Waiting,
            turn_number: 0,
        }
    }

    pub fn status(&self) -> BattleStatus {
        self.status
    }

    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }

    pub fn side(&self, id: SideId) -> &BattleSide {
        &self.sides[id.to_index()]
    }

    pub fn combatant(&self, id: SideId) -> &Combatant {
        self.sides[id.to_index()].combatant()
    }

    pub(crate) fn side_mut(&mut self, id: SideId) -> &mut BattleSide {
        &mut self.sides[id.to_index()]
    }

    pub(crate) fn sides_mut(&mut self) -> (&mut BattleSide, &mut BattleSide) {
        let [one, two] = &mut self.sides;
        (one, two)
    }

    pub(crate) fn set_status(&mut self, status: BattleStatus) {
        self.status = status;
    }

    pub(crate) fn advance_turn(&mut self) -> u32 {
        self.turn_number += 1;
        self.turn_number
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub enum BattleEvent {
    BattleStarted {
        side_one: String,
        side_two: String,
    },
    TurnStarted {
        turn_number: u32,
    },
    AttackLanded {
        attacker: String,
        defender: String,
        damage: u32,
        remaining_health: u32,
    },
    Effectiveness {
        multiplier: f32,
    },
    CombatantKnockedOut {
        name: String,
    },
    ExperienceGained {
        name: String,
        amount: u32,
    },
    LevelledUp {
        name: String,
        new_level: u32,
    },
    BattleEnded {
        winner: SideId,
        winner_name: String,
    },
}

impl BattleEvent {
    /// Formats the event into a human-readable string.
    /// Returns None for silent events that should not produce user-visible
    /// text.
    pub fn format(&self) -> Option<String> {
        match self {
            BattleEvent::BattleStarted { side_one, side_two } => Some(format!(
                "The battle between {} and {} has begun!",
                side_one, side_two
            )),
            BattleEvent::TurnStarted { turn_number } => {
                Some(format!("=== Turn {} ===", turn_number))
            }
            BattleEvent::AttackLanded {
                attacker,
                defender,
                damage,
                remaining_health,
            } => Some(format!(
                "{} hit {} for {} damage! ({} HP left)",
                attacker, defender, damage, remaining_health
            )),
            BattleEvent::Effectiveness { multiplier } => match *multiplier {
                m if m > 1.0 => Some("It's super effective!".to_string()),
                m if m < 1.0 => Some("It's not very effective...".to_string()),
                _ => None, // Neutral matchup, no message
            },
            BattleEvent::CombatantKnockedOut { name } => {
                Some(format!("{} was knocked out!", name))
            }
            BattleEvent::ExperienceGained { name, amount } => {
                Some(format!("{} gained {} experience!", name, amount))
            }
            BattleEvent::LevelledUp { name, new_level } => {
                Some(format!("{} grew to level {}!", name, new_level))
            }
            BattleEvent::BattleEnded { winner_name, .. } => {
                Some(format!("{} has won the battle!", winner_name))
            }
        }
    }
}

/// Ordered collector for battle events, injected into the engine per run.
///
/// The bus is advisory observability only; it never affects battle logic
/// or outcome.
#[derive(Debug, Clone)]
pub struct EventBus {
    events: Vec<BattleEvent>,
}

impl EventBus {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn push(&mut self, event: BattleEvent) {
        self.events.push(event);
    }

    pub fn events(&self) -> &[BattleEvent] {
        &self.events
    }

    /// Print all events using their formatted text; silent events are
    /// skipped.
    pub fn print_formatted(&self) {
        for event in &self.events {
            if let Some(formatted) = event.format() {
                println!("  {}", formatted);
            }
        }
    }

    /// Return true if the event bus contains no events.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Return the number of events in the bus.
    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl std::fmt::Display for EventBus {
    /// Format the EventBus for printing. Shows debug format of all events.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for event in &self.events {
            writeln!(f, "  {:?}", event)?;
        }
        Ok(())
    }
}
