use thiserror::Error;

use super::model::{ObjectiveKind, World};

/// A consistency problem in a loaded world. None of these stop play on their
/// own; the engine reports the affected lookups as "not found" instead.
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct ValidationError {
    pub message: String,
}

impl ValidationError {
    fn new(msg: impl Into<String>) -> Self {
        ValidationError {
            message: msg.into(),
        }
    }
}

pub fn validate_world(world: &World) -> Vec<ValidationError> {
    let mut errors: Vec<ValidationError> = Vec::new();

    if world.rooms.is_empty() {
        errors.push(ValidationError::new("world has no rooms"));
    }

    if world.room(&world.start_room).is_none() {
        errors.push(ValidationError::new(format!(
            "start room '{}' not found among rooms",
            world.start_room
        )));
    }

    // Sorted so the report is stable between runs
    let mut room_ids: Vec<&String> = world.rooms.keys().collect();
    room_ids.sort();

    for room_id in room_ids {
        let Some(exits) = world.rooms[room_id].exits.as_ref() else {
            continue;
        };
        for (direction, target) in exits {
            if world.room(target).is_none() {
                errors.push(ValidationError::new(format!(
                    "room '{}' exit '{}' targets missing room '{}'",
                    room_id, direction, target
                )));
            }
        }
    }

    for object in world.objects.iter() {
        if world.room(&object.initial_room).is_none() {
            errors.push(ValidationError::new(format!(
                "object '{}' initial room '{}' not found",
                object.id, object.initial_room
            )));
        }
    }

    for enemy in world.enemies.iter() {
        if world.room(&enemy.initial_room).is_none() {
            errors.push(ValidationError::new(format!(
                "enemy '{}' initial room '{}' not found",
                enemy.id, enemy.initial_room
            )));
        }
    }

    match &world.objective {
        None => errors.push(ValidationError::new(
            "world has no usable objective; the game can only end by quitting or dying",
        )),
        Some(objective) => {
            for target in &objective.targets {
                let known = match objective.kind {
                    ObjectiveKind::Room => world.room(target).is_some(),
                    ObjectiveKind::Collect => world.object(target).is_some(),
                    ObjectiveKind::Kill => world.enemy(target).is_some(),
                };
                if !known {
                    errors.push(ValidationError::new(format!(
                        "{} objective target '{}' does not exist",
                        objective.kind.as_str(),
                        target
                    )));
                }
            }
        }
    }

    errors
}
