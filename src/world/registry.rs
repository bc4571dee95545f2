use std::collections::HashMap;

/// Anything stored in a [`Registry`] is addressed by its string id.
pub trait Keyed {
    fn key(&self) -> &str;
}

/// Insertion-ordered collection with O(1) lookup by id.
///
/// Iteration follows the order entries were declared in the world file, which
/// is the order room descriptions and encounters walk them. Removal is a keyed
/// delete followed by an index rebuild, so callers never erase while iterating.
#[derive(Debug, Clone)]
pub struct Registry<T> {
    entries: Vec<T>,
    index: HashMap<String, usize>,
}

impl<T> Default for Registry<T> {
    fn default() -> Self {
        Registry {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<T: Keyed> Registry<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an entry. Returns the entry back if its id is already taken.
    pub fn insert(&mut self, entry: T) -> Result<(), T> {
        if self.index.contains_key(entry.key()) {
            return Err(entry);
        }
        self.index.insert(entry.key().to_string(), self.entries.len());
        self.entries.push(entry);
        Ok(())
    }

    pub fn get(&self, id: &str) -> Option<&T> {
        self.index.get(id).map(|&i| &self.entries[i])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    pub fn remove(&mut self, id: &str) -> Option<T> {
        let idx = self.index.remove(id)?;
        let removed = self.entries.remove(idx);

        // everything after the hole shifted down by one
        for entry in &self.entries[idx..] {
            if let Some(slot) = self.index.get_mut(entry.key()) {
                *slot -= 1;
            }
        }

        Some(removed)
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
