use tracing::debug;

use crate::engine::enemies::try_handle_examine_enemy;
use crate::engine::output::Output;
use crate::engine::state::Inventory;
use crate::world;

/// `take <id>`: pick up an object lying in the current room. Returns true if
/// the inventory changed.
pub fn handle_take(
    out: &mut Output,
    world: &world::World,
    current_room_id: &str,
    inventory: &mut Inventory,
    target: &str,
) -> bool {
    match world.object(target) {
        Some(object) if object.initial_room == current_room_id => {
            if inventory.insert(&object.id) {
                debug!(object = %object.id, "object taken");
                out.say(format!("You take the {}.", object.id));
                true
            } else {
                out.say(format!("You already have the {}.", object.id));
                false
            }
        }
        _ => {
            out.say("Error: The specified object is not in the room.");
            false
        }
    }
}

pub fn handle_inventory(out: &mut Output, inventory: &Inventory) {
    out.say(inventory.summary());
}

/// `look <id>`: objects shadow enemies with the same id.
pub fn handle_examine(
    out: &mut Output,
    world: &world::World,
    current_room_id: &str,
    inventory: &Inventory,
    target: &str,
) {
    if let Some(object) = world.object(target) {
        examine_object(out, object, current_room_id, inventory);
        return;
    }

    if try_handle_examine_enemy(out, world, current_room_id, target) {
        return;
    }

    out.say(format!("Object or enemy not found: {}", target));
}

// With empty hands the object has to be lying here. Once anything is held, only
// held objects can be examined, including ones still lying in the room.
fn examine_object(
    out: &mut Output,
    object: &world::Object,
    current_room_id: &str,
    inventory: &Inventory,
) {
    let visible = if inventory.is_empty() {
        object.initial_room == current_room_id
    } else {
        inventory.contains(&object.id)
    };

    if visible {
        out.say(object.desc.as_str());
    } else {
        out.say(format!("Object not found: {}", object.id));
    }
}
