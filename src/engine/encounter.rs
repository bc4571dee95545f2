use rand::Rng;
use tracing::debug;

use crate::world;

/// Which enemies in a room get to roll when the player tries to leave it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum EncounterPolicy {
    /// Walk enemies in declared order; a peaceful enemy ends the scan, so it
    /// shields every enemy declared after it.
    #[default]
    Compatible,
    /// Skip peaceful enemies and roll for every hostile one.
    #[value(name = "every")]
    EveryEnemy,
}

/// Roll for the enemies anchored to `room_id`. Returns the id of the enemy
/// that killed the player, if any.
///
/// Each hostile enemy draws a fresh integer in `0..=100` and kills when its
/// aggressiveness is at least the draw, so 100 always kills. A negative
/// aggressiveness still rolls, never kills, and does not stop the scan.
pub fn roll_encounter<R: Rng>(
    world: &world::World,
    room_id: &str,
    policy: EncounterPolicy,
    rng: &mut R,
) -> Option<String> {
    for enemy in world.enemies_in(room_id) {
        if enemy.is_peaceful() {
            match policy {
                EncounterPolicy::Compatible => return None,
                EncounterPolicy::EveryEnemy => continue,
            }
        }

        let draw: i16 = rng.gen_range(0..=100);
        debug!(enemy = %enemy.id, aggressiveness = enemy.aggressiveness, draw, "encounter roll");

        if enemy.aggressiveness >= draw {
            return Some(enemy.id.clone());
        }
    }

    None
}
