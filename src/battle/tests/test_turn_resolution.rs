use crate::battle::engine::{execute_turn, start_battle};
use crate::battle::state::{BattleEvent, BattleStatus, EventBus, SideId};
use crate::battle::tests::common::{battle_between, roster_with, TestCombatantBuilder};
use pretty_assertions::assert_eq;
use schema::Element;

#[test]
fn faster_side_attacks_first() {
    // Arrange: side two is faster but neither blow knocks out.
    let slow = TestCombatantBuilder::new("Slow", Element::Water)
        .with_stats(100, 10, 0, 1.0)
        .build();
    let fast = TestCombatantBuilder::new("Fast", Element::Water)
        .with_stats(100, 10, 0, 2.0)
        .build();
    let mut battle = battle_between(roster_with("One", slow), roster_with("Two", fast));
    let mut bus = EventBus::new();
    battle.set_status(BattleStatus::InProgress);

    // Act
    let winner = execute_turn(&mut battle, &mut bus);

    // Assert: no knockout, and the first strike came from the fast side.
    assert_eq!(winner, None);
    let first_attack = bus
        .events()
        .iter()
        .find_map(|event| match event {
            BattleEvent::AttackLanded { attacker, .. } => Some(attacker.clone()),
            _ => None,
        })
        .expect("turn should produce at least one attack");
    assert_eq!(first_attack, "Fast");
}

#[test]
fn speed_tie_resolves_in_favor_of_side_one() {
    let one = TestCombatantBuilder::new("One", Element::Fire)
        .with_stats(100, 10, 0, 1.5)
        .build();
    let two = TestCombatantBuilder::new("Two", Element::Fire)
        .with_stats(100, 10, 0, 1.5)
        .build();
    let mut battle = battle_between(roster_with("P1", one), roster_with("P2", two));
    let mut bus = EventBus::new();
    battle.set_status(BattleStatus::InProgress);

    execute_turn(&mut battle, &mut bus);

    let first_attack = bus
        .events()
        .iter()
        .find_map(|event| match event {
            BattleEvent::AttackLanded { attacker, .. } => Some(attacker.clone()),
            _ => None,
        })
        .expect("turn should produce at least one attack");
    assert_eq!(first_attack, "One");
}

#[test]
fn survivor_counter_attacks_in_the_same_turn() {
    let one = TestCombatantBuilder::new("One", Element::Earth)
        .with_stats(100, 10, 0, 2.0)
        .build();
    let two = TestCombatantBuilder::new("Two", Element::Earth)
        .with_stats(100, 15, 0, 1.0)
        .build();
    let mut battle = battle_between(roster_with("P1", one), roster_with("P2", two));
    let mut bus = EventBus::new();
    battle.set_status(BattleStatus::InProgress);

    let winner = execute_turn(&mut battle, &mut bus);

    // Both sides struck once; the turn ended with no status change.
    assert_eq!(winner, None);
    assert_eq!(battle.status(), BattleStatus::InProgress);
    let attackers: Vec<_> = bus
        .events()
        .iter()
        .filter_map(|event| match event {
            BattleEvent::AttackLanded { attacker, .. } => Some(attacker.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(attackers, vec!["One", "Two"]);
    assert_eq!(battle.combatant(SideId::SideOne).health(), 100 - 15);
    assert_eq!(battle.combatant(SideId::SideTwo).health(), 100 - 10);
}

#[test]
fn knockout_short_circuits_the_counter_attack() {
    let one = TestCombatantBuilder::new("One", Element::Wind)
        .with_stats(100, 200, 0, 2.0)
        .build();
    let two = TestCombatantBuilder::new("Two", Element::Wind)
        .with_stats(100, 50, 0, 1.0)
        .build();
    let mut battle = battle_between(roster_with("P1", one), roster_with("P2", two));
    let mut bus = EventBus::new();
    battle.set_status(BattleStatus::InProgress);

    let winner = execute_turn(&mut battle, &mut bus);

    assert_eq!(winner, Some(SideId::SideOne));
    assert_eq!(battle.status(), BattleStatus::Finished);

    // The knocked-out side never got to strike back.
    let attackers: Vec<_> = bus
        .events()
        .iter()
        .filter_map(|event| match event {
            BattleEvent::AttackLanded { attacker, .. } => Some(attacker.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(attackers, vec!["One"]);
    assert_eq!(battle.combatant(SideId::SideOne).health(), 100);
}

#[test]
fn execute_turn_does_nothing_before_the_battle_starts() {
    let one = TestCombatantBuilder::new("One", Element::Water).build();
    let two = TestCombatantBuilder::new("Two", Element::Water).build();
    let mut battle = battle_between(roster_with("P1", one), roster_with("P2", two));
    let mut bus = EventBus::new();

    let winner = execute_turn(&mut battle, &mut bus);

    assert_eq!(winner, None);
    assert_eq!(battle.status(), BattleStatus::Waiting);
    assert_eq!(battle.turn_number(), 0);
    assert!(bus.is_empty());
}

#[test]
fn multi_turn_battle_runs_to_a_knockout() {
    // Each hit lands 10 damage both ways; side one is faster and wins on
    // turn 10 before the counter-attack.
    let one = TestCombatantBuilder::new("One", Element::Fire)
        .with_stats(100, 10, 0, 2.0)
        .build();
    let two = TestCombatantBuilder::new("Two", Element::Fire)
        .with_stats(100, 10, 0, 1.0)
        .build();
    let mut battle = battle_between(roster_with("P1", one), roster_with("P2", two));
    let mut bus = EventBus::new();

    let winner = start_battle(&mut battle, &mut bus).expect("battle starts from waiting");

    assert_eq!(winner, SideId::SideOne);
    assert_eq!(battle.status(), BattleStatus::Finished);
    assert_eq!(battle.turn_number(), 10);
    assert_eq!(battle.combatant(SideId::SideTwo).health(), 0);
    // The winner soaked nine counter-attacks along the way.
    assert_eq!(battle.combatant(SideId::SideOne).health(), 100 - 9 * 10);
}
