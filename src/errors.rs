use std::fmt;

/// Main error type for the Pocket Arena battle core
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArenaError {
    /// Error validating a combatant's construction data
    Combatant(CombatantError),
    /// Error mutating a roster's team
    Roster(RosterError),
    /// Error related to invalid battle state
    BattleState(BattleStateError),
}

/// Errors raised by combatant construction validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CombatantError {
    /// The combatant name was empty
    EmptyName,
    /// The level was below the minimum of 1
    InvalidLevel(u32),
}

/// Errors raised by roster team mutation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RosterError {
    /// The team already holds the maximum number of combatants
    TeamFull { capacity: usize },
    /// No team member carries the given name
    NotInTeam { name: String },
}

/// Errors related to battle state validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BattleStateError {
    /// The selected combatant index points outside the roster's team
    InvalidCombatantIndex(usize),
    /// The battle has already left the waiting state
    AlreadyStarted,
}

impl fmt::Display for ArenaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArenaError::Combatant(err) => write!(f, "Combatant error: {}", err),
            ArenaError::Roster(err) => write!(f, "Roster error: {}", err),
            ArenaError::BattleState(err) => write!(f, "Battle state error: {}", err),
        }
    }
}

impl fmt::Display for CombatantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CombatantError::EmptyName => write!(f, "Combatant name must not be empty"),
            CombatantError::InvalidLevel(level) => {
                write!(f, "Invalid combatant level: {} (minimum is 1)", level)
            }
        }
    }
}

impl fmt::Display for RosterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RosterError::TeamFull { capacity } => {
                write!(f, "The team is already full (maximum size: {})", capacity)
            }
            RosterError::NotInTeam { name } => {
                write!(f, "No combatant named {} in the team", name)
            }
        }
    }
}

impl fmt::Display for BattleStateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BattleStateError::InvalidCombatantIndex(index) => {
                write!(f, "Invalid combatant index: {}", index)
            }
            BattleStateError::AlreadyStarted => write!(f, "Battle has already been started"),
        }
    }
}

impl std::error::Error for ArenaError {}
impl std::error::Error for CombatantError {}
impl std::error::Error for RosterError {}
impl std::error::Error for BattleStateError {}

impl From<CombatantError> for ArenaError {
    fn from(err: CombatantError) -> Self {
        ArenaError::Combatant(err)
    }
}

impl From<RosterError> for ArenaError {
    fn from(err: RosterError) -> Self {
        ArenaError::Roster(err)
    }
}

impl From<BattleStateError> for ArenaError {
    fn from(err: BattleStateError) -> Self {
        ArenaError::BattleState(err)
    }
}

/// Type alias for Results using ArenaError
pub type ArenaResult<T> = Result<T, ArenaError>;

/// Type alias for Results using CombatantError
pub type CombatantResult<T> = Result<T, CombatantError>;

/// Type alias for Results using RosterError
pub type RosterResult<T> = Result<T, RosterError>;

/// Type alias for Results using BattleStateError
pub type BattleResult<T> = Result<T, BattleStateError>;
