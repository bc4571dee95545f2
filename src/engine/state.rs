/// Object ids the player holds, in the order they were picked up. Never holds
/// the same id twice.
#[derive(Debug, Default, Clone)]
pub struct Inventory {
    items: Vec<String>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns false (and changes nothing) if the id is already held.
    pub fn insert(&mut self, id: &str) -> bool {
        if self.contains(id) {
            return false;
        }
        self.items.push(id.to_string());
        true
    }

    pub fn contains(&self, id: &str) -> bool {
        self.items.iter().any(|i| i == id)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(String::as_str)
    }

    /// `Inventory: a, b` or `Inventory: Empty`.
    pub fn summary(&self) -> String {
        if self.is_empty() {
            "Inventory: Empty".to_string()
        } else {
            format!("Inventory: {}", self.items.join(", "))
        }
    }
}

/// How a finished game ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Ending {
    Quit,
    Killed { by: String },
    ObjectiveMet,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    Running,
    Terminated(Ending),
}

/// Mutable per-session player data.
#[derive(Debug, Clone)]
pub struct Player {
    pub current_room: String,
    pub inventory: Inventory,
    phase: Phase,
}

impl Player {
    pub fn new(start_room: impl Into<String>) -> Self {
        Player {
            current_room: start_room.into(),
            inventory: Inventory::new(),
            phase: Phase::Running,
        }
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn is_game_over(&self) -> bool {
        matches!(self.phase, Phase::Terminated(_))
    }

    /// First ending wins; a terminated game stays terminated.
    pub fn end(&mut self, ending: Ending) {
        if !self.is_game_over() {
            self.phase = Phase::Terminated(ending);
        }
    }
}
