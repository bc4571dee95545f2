use rand::Rng;
use tracing::{debug, info, warn};

use crate::engine::encounter::{EncounterPolicy, roll_encounter};
use crate::engine::output::Output;
use crate::engine::render::render_room;
use crate::engine::state::{Ending, Player};
use crate::world;

/// `go <direction>`. Enemies in the room being left get their roll first; a
/// death cancels the move. Returns true if the player changed rooms.
pub fn handle_go<R: Rng>(
    out: &mut Output,
    world: &world::World,
    player: &mut Player,
    direction: &str,
    policy: EncounterPolicy,
    rng: &mut R,
) -> bool {
    if let Some(killer) = roll_encounter(world, &player.current_room, policy, rng) {
        info!(enemy = %killer, room = %player.current_room, "player killed");
        out.event(format!("You have been killed by {}", killer));
        player.end(Ending::Killed { by: killer });
        return false;
    }

    let Some(room) = world.room(&player.current_room) else {
        out.error("Error: Current room not found in the map data.");
        return false;
    };

    if room.exits.is_none() {
        out.error("Error: 'exits' field not found or not an object.");
        return false;
    }

    let target = match room.exit(direction) {
        Some(t) if world.room(t).is_some() => t,
        Some(t) => {
            warn!(room = %room.id, direction, target = %t, "exit leads to a missing room");
            out.say("Invalid exit or direction.");
            return false;
        }
        None => {
            out.say("Invalid exit or direction.");
            return false;
        }
    };

    debug!(from = %room.id, to = %target, "player moved");
    player.current_room = target.to_string();
    render_room(out, world, &player.current_room, &player.inventory);
    true
}
