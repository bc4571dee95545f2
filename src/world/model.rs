use std::collections::{BTreeMap, HashMap};

use super::registry::{Keyed, Registry};

//////////////////////////////
/// GAME STRUCTS AND ENUMS ///
//////////////////////////////

/// Runtime world used by the game loop.
///
/// Read-only after load except for [`World::remove_enemy`]: a slain enemy is
/// gone from the world for good.
#[derive(Debug, Default)]
pub struct World {
    pub start_room: String,
    pub rooms: HashMap<String, Room>,
    pub objects: Registry<Object>,
    pub enemies: Registry<Enemy>,
    pub objective: Option<Objective>,
}

#[derive(Debug, Clone)]
pub struct Room {
    pub id: String,
    pub desc: String,
    /// `None` when the world file gave this room no exits table at all.
    pub exits: Option<BTreeMap<String, String>>,
}

#[derive(Debug, Clone)]
pub struct Object {
    pub id: String,
    pub desc: String,
    pub initial_room: String,
}

#[derive(Debug, Clone)]
pub struct Enemy {
    pub id: String,
    pub desc: String,
    pub initial_room: String,
    pub intro_msg: String,
    /// Capped at 100. Negative values roll but can never win the roll.
    pub aggressiveness: i16,
    pub kill_msg: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectiveKind {
    Room,
    Collect,
    Kill,
}

#[derive(Debug, Clone)]
pub struct Objective {
    pub kind: ObjectiveKind,
    pub targets: Vec<String>,
}

impl Keyed for Object {
    fn key(&self) -> &str {
        &self.id
    }
}

impl Keyed for Enemy {
    fn key(&self) -> &str {
        &self.id
    }
}

impl Room {
    pub fn exit(&self, direction: &str) -> Option<&str> {
        self.exits
            .as_ref()
            .and_then(|exits| exits.get(direction))
            .map(String::as_str)
    }
}

impl Enemy {
    pub fn is_peaceful(&self) -> bool {
        self.aggressiveness == 0
    }
}

impl ObjectiveKind {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "room" => Some(ObjectiveKind::Room),
            "collect" => Some(ObjectiveKind::Collect),
            "kill" => Some(ObjectiveKind::Kill),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ObjectiveKind::Room => "room",
            ObjectiveKind::Collect => "collect",
            ObjectiveKind::Kill => "kill",
        }
    }
}

impl World {
    pub fn room(&self, id: &str) -> Option<&Room> {
        self.rooms.get(id)
    }

    pub fn object(&self, id: &str) -> Option<&Object> {
        self.objects.get(id)
    }

    pub fn enemy(&self, id: &str) -> Option<&Enemy> {
        self.enemies.get(id)
    }

    /// Objects whose starting room is `room_id`, in declaration order.
    pub fn objects_in<'a>(&'a self, room_id: &'a str) -> impl Iterator<Item = &'a Object> + 'a {
        self.objects.iter().filter(move |o| o.initial_room == room_id)
    }

    /// Living enemies anchored to `room_id`, in declaration order.
    pub fn enemies_in<'a>(&'a self, room_id: &'a str) -> impl Iterator<Item = &'a Enemy> + 'a {
        self.enemies.iter().filter(move |e| e.initial_room == room_id)
    }

    pub fn remove_enemy(&mut self, id: &str) -> Option<Enemy> {
        self.enemies.remove(id)
    }
}
