use tracing::info;

use crate::engine::output::Output;
use crate::engine::state::{Ending, Player};
use crate::world::{self, ObjectiveKind};

/// Pure check of the win condition.
///
/// A `kill` objective only looks at which targets are still alive, so a target
/// id that never named an enemy counts as already dead. The validator warns
/// about such worlds at load time.
pub fn objective_met(world: &world::World, player: &Player) -> bool {
    let Some(objective) = &world.objective else {
        return false;
    };

    match objective.kind {
        ObjectiveKind::Room => objective.targets.iter().any(|r| *r == player.current_room),
        ObjectiveKind::Collect => objective
            .targets
            .iter()
            .all(|id| player.inventory.contains(id)),
        ObjectiveKind::Kill => !objective.targets.iter().any(|id| world.enemies.contains(id)),
    }
}

/// Run after every state-changing command. On success announces the win and
/// ends the game.
pub fn check_objective(out: &mut Output, world: &world::World, player: &mut Player) -> bool {
    if !objective_met(world, player) {
        return false;
    }

    let msg = match world.objective.as_ref().map(|o| o.kind) {
        Some(ObjectiveKind::Collect) => "Congratulations! You have collected all required items.",
        Some(ObjectiveKind::Kill) => "Congratulations! You have killed all required enemies.",
        _ => "Congratulations! You have completed the objective.",
    };

    info!(room = %player.current_room, "objective met");
    out.event(msg);
    player.end(Ending::ObjectiveMet);
    true
}
