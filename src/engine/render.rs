use crate::engine::output::Output;
use crate::engine::state::Inventory;
use crate::world;

/// Full room description: the room text, one line per object still lying
/// here, then the intro of every living enemy anchored here.
///
/// Taken objects are filtered by inventory membership; they never leave the
/// room's object list.
pub fn render_room(out: &mut Output, world: &world::World, room_id: &str, inventory: &Inventory) {
    let Some(room) = world.room(room_id) else {
        out.error("Error: Room not found.");
        return;
    };

    out.say(room.desc.as_str());

    for object in world.objects_in(room_id) {
        if !inventory.contains(&object.id) {
            out.say(format!("You see a {} in the room.", object.id));
        }
    }

    for enemy in world.enemies_in(room_id) {
        out.say(enemy.intro_msg.as_str());
    }
}
