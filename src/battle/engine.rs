use crate::battle::state::{Battle, BattleEvent, BattleStatus, EventBus, SideId};
use crate::errors::{BattleResult, BattleStateError};

/// Experience granted to the winning combatant when the outcome is
/// registered.
pub const VICTORY_EXPERIENCE: u32 = 20;

/// Begin a waiting battle and drive it to completion.
///
/// Valid only from `Waiting`. Transitions the battle to `InProgress`, then
/// executes turns until one ends in a knockout. Returns the winning side.
pub fn start_battle(battle: &mut Battle, bus: &mut EventBus) -> BattleResult<SideId> {
    if battle.status() != BattleStatus::Waiting {
        return Err(BattleStateError::AlreadyStarted);
    }

    battle.set_status(BattleStatus::InProgress);
    bus.push(BattleEvent::BattleStarted {
        side_one: battle.combatant(SideId::SideOne).name().to_string(),
        side_two: battle.combatant(SideId::SideTwo).name().to_string(),
    });

    loop {
        if let Some(winner) = execute_turn(battle, bus) {
            return Ok(winner);
        }
    }
}

/// Execute one turn of an in-progress battle.
///
/// The faster combatant attacks first; ties go to side one. A knockout ends
/// the turn immediately: the defender never counter-attacks, the battle
/// moves to `Finished`, and the outcome is registered. Returns the winning
/// side when the turn ends the battle, and does nothing unless the battle
/// is in progress.
pub fn execute_turn(battle: &mut Battle, bus: &mut EventBus) -> Option<SideId> {
    if battle.status() != BattleStatus::InProgress {
        return None;
    }

    let turn_number = battle.advance_turn();
    bus.push(BattleEvent::TurnStarted { turn_number });

    let (first, second) = attack_order(battle);

    if resolve_side_attack(battle, first, bus) {
        battle.set_status(BattleStatus::Finished);
        register_outcome(battle, first, bus);
        return Some(first);
    }

    if resolve_side_attack(battle, second, bus) {
        battle.set_status(BattleStatus::Finished);
        register_outcome(battle, second, bus);
        return Some(second);
    }

    None
}

/// Grant the victory experience to the winning combatant and record the
/// result on both rosters. Called by the engine exactly once, when a
/// knockout ends a turn.
pub fn register_outcome(battle: &mut Battle, winner: SideId, bus: &mut EventBus) {
    let winning_side = battle.side_mut(winner);
    let combatant = winning_side.combatant_mut();
    let name = combatant.name().to_string();

    let levels_gained = combatant.grant_experience(VICTORY_EXPERIENCE);
    let final_level = combatant.level();

    bus.push(BattleEvent::ExperienceGained {
        name: name.clone(),
        amount: VICTORY_EXPERIENCE,
    });
    for offset in (0..levels_gained).rev() {
        bus.push(BattleEvent::LevelledUp {
            name: name.clone(),
            new_level: final_level - offset,
        });
    }

    winning_side.roster_mut().record_victory();
    battle.side_mut(winner.opponent()).roster_mut().record_defeat();

    bus.push(BattleEvent::BattleEnded {
        winner,
        winner_name: name,
    });
}

// Compare current speeds to decide who attacks first; ties resolve in
// favor of side one.
fn attack_order(battle: &Battle) -> (SideId, SideId) {
    let one = battle.combatant(SideId::SideOne).speed();
    let two = battle.combatant(SideId::SideTwo).speed();

    if one >= two {
        (SideId::SideOne, SideId::SideTwo)
    } else {
        (SideId::SideTwo, SideId::SideOne)
    }
}

// Resolve one attack from the given side against its opponent, narrating
// the exchange. Returns the knockout signal.
fn resolve_side_attack(battle: &mut Battle, attacker: SideId, bus: &mut EventBus) -> bool {
    let (one, two) = battle.sides_mut();
    let (attacking, defending) = match attacker {
        SideId::SideOne => (one, two),
        SideId::SideTwo => (two, one),
    };

    let attacker_name = attacking.combatant().name().to_string();
    let defender_name = defending.combatant().name().to_string();

    let report = attacking.combatant().resolve_attack(defending.combatant_mut());

    bus.push(BattleEvent::AttackLanded {
        attacker: attacker_name,
        defender: defender_name.clone(),
        damage: report.damage,
        remaining_health: defending.combatant().health(),
    });
    bus.push(BattleEvent::Effectiveness {
        multiplier: report.effectiveness,
    });
    if report.knocked_out {
        bus.push(BattleEvent::CombatantKnockedOut {
            name: defender_name,
        });
    }

    report.knocked_out
}
