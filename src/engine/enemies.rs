use tracing::{debug, info};

use crate::engine::output::Output;
use crate::world;

/// Examine an enemy by id. Returns false only if no living enemy has that id,
/// so the caller can fall through to its own "not found".
pub fn try_handle_examine_enemy(
    out: &mut Output,
    world: &world::World,
    current_room_id: &str,
    target: &str,
) -> bool {
    let Some(enemy) = world.enemy(target) else {
        return false;
    };

    if enemy.initial_room == current_room_id {
        out.say(enemy.desc.as_str());
    } else {
        out.say(format!("Enemy not found: {}", target));
    }
    true
}

/// `kill <id>`: slay an enemy anchored to the current room and remove it from
/// the world. Returns true if an enemy died.
///
/// An unknown id and an enemy in another room get the same answer.
pub fn handle_kill(
    out: &mut Output,
    world: &mut world::World,
    current_room_id: &str,
    target: &str,
) -> bool {
    let here = world
        .enemy(target)
        .is_some_and(|e| e.initial_room == current_room_id);

    if !here {
        debug!(enemy = %target, known = world.enemy(target).is_some(), "kill target not here");
        out.say(format!("{} is not in this room or does not exist", target));
        return false;
    }

    let Some(enemy) = world.remove_enemy(target) else {
        return false;
    };

    out.say(enemy.intro_msg.as_str());
    match &enemy.kill_msg {
        Some(msg) => out.say(format!("{} {}", enemy.id, msg)),
        None => out.say(format!("You have successfully defeated {}.", enemy.id)),
    }

    info!(enemy = %enemy.id, room = %current_room_id, "enemy slain");
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::{WorldFormat, load_world_from_str};

    fn world() -> world::World {
        load_world_from_str(
            r#"{
                "rooms": [{"id": "cave"}, {"id": "lake"}],
                "enemies": [
                    {"id": "troll", "desc": "A huge troll.", "initialroom": "cave",
                     "intro_msg": "A troll blocks the way.", "successful_kill_msg": "turns to stone."},
                    {"id": "goblin", "desc": "A sneaky goblin.", "initialroom": "lake",
                     "intro_msg": "A goblin cackles."}
                ]
            }"#,
            WorldFormat::Json,
        )
        .unwrap()
    }

    #[test]
    fn kill_prints_intro_then_custom_message_and_removes() {
        let mut world = world();
        let mut out = Output::new();

        assert!(handle_kill(&mut out, &mut world, "cave", "troll"));
        assert_eq!(
            out.lines().collect::<Vec<_>>(),
            vec!["A troll blocks the way.", "troll turns to stone."]
        );
        assert!(world.enemy("troll").is_none());

        // gone for good
        let mut out = Output::new();
        assert!(!handle_kill(&mut out, &mut world, "cave", "troll"));
        assert!(out.contains("troll is not in this room or does not exist"));
        assert!(!try_handle_examine_enemy(&mut out, &world, "cave", "troll"));
    }

    #[test]
    fn kill_uses_default_message() {
        let mut world = world();
        let mut out = Output::new();

        assert!(handle_kill(&mut out, &mut world, "lake", "goblin"));
        assert!(out.contains("You have successfully defeated goblin."));
    }

    #[test]
    fn enemy_in_another_room_survives() {
        let mut world = world();
        let mut out = Output::new();

        assert!(!handle_kill(&mut out, &mut world, "cave", "goblin"));
        assert!(out.contains("goblin is not in this room or does not exist"));
        assert!(world.enemy("goblin").is_some());
    }

    #[test]
    fn examine_enemy_requires_same_room() {
        let world = world();

        let mut out = Output::new();
        assert!(try_handle_examine_enemy(&mut out, &world, "cave", "troll"));
        assert!(out.contains("A huge troll."));

        let mut out = Output::new();
        assert!(try_handle_examine_enemy(&mut out, &world, "lake", "troll"));
        assert!(out.contains("Enemy not found: troll"));
    }
}
