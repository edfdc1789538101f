use pocket_arena::prefab::exhibition_rosters;
use pocket_arena::{start_battle, Battle, BattleSide, EventBus, SideId};

fn main() {
    // Build the two exhibition rosters
    let mut rosters = Vec::new();
    for prefab in exhibition_rosters() {
        match prefab.build() {
            Ok(roster) => rosters.push(roster),
            Err(e) => {
                println!("Error building roster for {}: {}", prefab.trainer, e);
                return;
            }
        }
    }
    let misty = rosters.pop().expect("two prefab rosters");
    let ash = rosters.pop().expect("two prefab rosters");

    for roster in [&ash, &misty] {
        let team: Vec<&str> = roster.team().iter().map(|c| c.name()).collect();
        println!("{}'s team: {:?}", roster.name(), team);
    }

    // Each side fields the first combatant of its roster
    let side_one = match BattleSide::new(ash, 0) {
        Ok(side) => side,
        Err(e) => {
            println!("Error selecting side one: {}", e);
            return;
        }
    };
    let side_two = match BattleSide::new(misty, 0) {
        Ok(side) => side,
        Err(e) => {
            println!("Error selecting side two: {}", e);
            return;
        }
    };

    let mut battle = Battle::new("exhibition-001".to_string(), side_one, side_two);
    let mut bus = EventBus::new();

    println!();
    println!("The battle is starting!");
    match start_battle(&mut battle, &mut bus) {
        Ok(winner) => {
            bus.print_formatted();

            println!();
            println!(
                "The battle is over after {} turn(s). Winner: {}",
                battle.turn_number(),
                battle.combatant(winner).name()
            );
            for id in [SideId::SideOne, SideId::SideTwo] {
                let roster = battle.side(id).roster();
                println!(
                    "{} - victories: {}, defeats: {}",
                    roster.name(),
                    roster.victories(),
                    roster.defeats()
                );
            }

            match serde_json::to_string_pretty(&battle) {
                Ok(summary) => {
                    println!();
                    println!("Final battle state:");
                    println!("{}", summary);
                }
                Err(e) => println!("Error serializing battle summary: {}", e),
            }
        }
        Err(e) => println!("Error starting battle: {}", e),
    }
}
