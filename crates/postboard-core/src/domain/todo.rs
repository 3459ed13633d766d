/// Session-local to-do list. Items are kept exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoList {
    items: Vec<String>,
}

impl TodoList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an item. Empty items are accepted.
    pub fn add(&mut self, value: impl Into<String>) {
        self.items.push(value.into());
    }

    /// Remove the item at `index`, returning it if it existed.
    pub fn remove(&mut self, index: usize) -> Option<String> {
        if index < self.items.len() {
            Some(self.items.remove(index))
        } else {
            None
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(String::as_str)
    }
}
