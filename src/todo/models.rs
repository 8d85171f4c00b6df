use std::collections::HashSet;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoItem {
    pub id: u64,
    pub text: String,
    pub completed: bool,
}

impl TodoItem {
    pub fn new(id: u64, text: String) -> Self {
        Self {
            id,
            text,
            completed: false,
        }
    }
}

/// Ordered todo items. The list is the only source of ids: a new item gets
/// the highest existing id plus one, or 1 when the list is empty.
#[derive(Debug, Clone, Default)]
pub struct TodoList {
    pub items: Vec<TodoItem>,
}

impl TodoList {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn next_id(&self) -> u64 {
        self.items.iter().map(|item| item.id).max().unwrap_or(0) + 1
    }

    /// Appends a todo with the trimmed text. Returns the new id, or `None`
    /// when the text is blank.
    pub fn add(&mut self, text: &str) -> Option<u64> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }

        let id = self.next_id();
        self.items.push(TodoItem::new(id, text.to_string()));
        Some(id)
    }

    pub fn get(&self, id: u64) -> Option<&TodoItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn contains(&self, id: u64) -> bool {
        self.get(id).is_some()
    }

    pub fn position(&self, id: u64) -> Option<usize> {
        self.items.iter().position(|item| item.id == id)
    }

    pub fn remove(&mut self, id: u64) -> Option<TodoItem> {
        let index = self.position(id)?;
        Some(self.items.remove(index))
    }

    /// Removes every item whose id is in `ids`, returning how many went.
    pub fn remove_many(&mut self, ids: &HashSet<u64>) -> usize {
        let before = self.items.len();
        self.items.retain(|item| !ids.contains(&item.id));
        before - self.items.len()
    }

    pub fn toggle_completed(&mut self, id: u64) -> bool {
        match self.items.iter_mut().find(|item| item.id == id) {
            Some(item) => {
                item.completed = !item.completed;
                true
            }
            None => false,
        }
    }

    /// Replaces an item's text with the trimmed value. Blank text is
    /// rejected and leaves the item untouched.
    pub fn set_text(&mut self, id: u64, text: &str) -> bool {
        let text = text.trim();
        if text.is_empty() {
            return false;
        }

        match self.items.iter_mut().find(|item| item.id == id) {
            Some(item) => {
                item.text = text.to_string();
                true
            }
            None => false,
        }
    }

    pub fn ids(&self) -> HashSet<u64> {
        self.items.iter().map(|item| item.id).collect()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn total_items(&self) -> usize {
        self.items.len()
    }

    pub fn completed_items(&self) -> usize {
        self.items.iter().filter(|item| item.completed).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list_with(texts: &[&str]) -> TodoList {
        let mut list = TodoList::new();
        for text in texts {
            list.add(text);
        }
        list
    }

    #[test]
    fn test_first_id_is_one() {
        let list = TodoList::new();
        assert_eq!(list.next_id(), 1);
    }

    #[test]
    fn test_add_rejects_blank_text() {
        let mut list = TodoList::new();
        assert_eq!(list.add(""), None);
        assert_eq!(list.add("   \t "), None);
        assert!(list.is_empty());
    }

    #[test]
    fn test_add_trims_and_appends_in_order() {
        let mut list = TodoList::new();
        let first = list.add("  Buy milk ").unwrap();
        let second = list.add("Walk dog").unwrap();

        assert!(second > first);
        assert_eq!(list.items[0].text, "Buy milk");
        assert_eq!(list.items[1].text, "Walk dog");
        assert!(!list.items[0].completed);
    }

    #[test]
    fn test_next_id_follows_max_not_length() {
        let mut list = list_with(&["a", "b", "c"]);
        list.remove(1);
        list.remove(2);
        assert_eq!(list.next_id(), 4);

        list.remove(3);
        assert_eq!(list.next_id(), 1);
    }

    #[test]
    fn test_remove_missing_id_is_noop() {
        let mut list = list_with(&["a", "b"]);
        assert!(list.remove(42).is_none());
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn test_remove_many() {
        let mut list = list_with(&["a", "b", "c", "d"]);
        let ids: HashSet<u64> = [2, 3, 99].into_iter().collect();

        assert_eq!(list.remove_many(&ids), 2);
        let remaining: Vec<u64> = list.items.iter().map(|item| item.id).collect();
        assert_eq!(remaining, vec![1, 4]);
    }

    #[test]
    fn test_toggle_completed() {
        let mut list = list_with(&["a"]);
        assert!(list.toggle_completed(1));
        assert!(list.items[0].completed);
        assert_eq!(list.completed_items(), 1);

        assert!(list.toggle_completed(1));
        assert!(!list.items[0].completed);
        assert!(!list.toggle_completed(7));
    }

    #[test]
    fn test_set_text() {
        let mut list = list_with(&["old"]);
        list.toggle_completed(1);

        assert!(!list.set_text(1, "  "));
        assert_eq!(list.items[0].text, "old");

        assert!(list.set_text(1, " new "));
        assert_eq!(list.items[0], TodoItem { id: 1, text: "new".to_string(), completed: true });
    }
}
