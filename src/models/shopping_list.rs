// Shopping list model holding the items a shopper wants to price-compare

use serde::{Deserialize, Serialize};

use crate::models::{denormalize_item_label, normalize_item_label, ItemId};

/// Insertion-ordered set of item identifiers the shopper wants.
///
/// An empty list means "every item the considered stores sell".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShoppingList {
    items: Vec<ItemId>,
}

impl ShoppingList {
    /// Creates a new empty shopping list
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a list from user-typed labels, normalizing each one
    pub fn from_labels<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut list = Self::new();
        for label in labels {
            list.add_item(label.as_ref());
        }
        list
    }

    /// Builds a list from item identifiers that are already normalized.
    ///
    /// Identifiers are kept verbatim; only duplicates are dropped.
    pub fn from_ids<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<ItemId>,
    {
        let mut list = Self::new();
        for id in ids {
            list.add_id(id);
        }
        list
    }

    /// Adds an already-normalized identifier, returning whether it was new
    pub fn add_id<S: Into<ItemId>>(&mut self, id: S) -> bool {
        let id = id.into();
        if self.contains(&id) {
            return false;
        }
        self.items.push(id);
        true
    }

    /// Normalizes a user-typed label and adds it to the list.
    ///
    /// Returns the identifier that was added, or `None` when the label was
    /// blank or the item was already on the list.
    pub fn add_item(&mut self, label: &str) -> Option<ItemId> {
        let id = normalize_item_label(label)?;
        if self.contains(&id) {
            return None;
        }
        self.items.push(id.clone());
        Some(id)
    }

    /// Removes an item from the shopping list, returning whether it was present
    pub fn remove_item(&mut self, id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item != id);
        self.items.len() != before
    }

    pub fn contains(&self, id: &str) -> bool {
        self.items.iter().any(|item| item == id)
    }

    /// Gets the number of unique items on the list
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterates item identifiers in the order they were added
    pub fn iter(&self) -> impl Iterator<Item = &ItemId> {
        self.items.iter()
    }

    /// Human-readable labels for display, in list order
    pub fn display_labels(&self) -> Vec<String> {
        self.items.iter().map(|id| denormalize_item_label(id)).collect()
    }
}

impl FromIterator<ItemId> for ShoppingList {
    fn from_iter<I: IntoIterator<Item = ItemId>>(iter: I) -> Self {
        Self::from_ids(iter)
    }
}

impl<'a> IntoIterator for &'a ShoppingList {
    type Item = &'a ItemId;
    type IntoIter = std::slice::Iter<'a, ItemId>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_item_normalizes_and_dedupes() {
        let mut list = ShoppingList::new();
        assert_eq!(list.add_item("Organic Chopped Kale").as_deref(), Some("organicChoppedKale"));
        assert_eq!(list.add_item("organic   chopped kale"), None);
        assert_eq!(list.add_item("   "), None);
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_preserves_insertion_order() {
        let list = ShoppingList::from_labels(["milk", "eggs", "apples"]);
        let ids: Vec<&str> = list.iter().map(String::as_str).collect();
        assert_eq!(ids, vec!["milk", "eggs", "apples"]);
    }

    #[test]
    fn test_remove_item() {
        let mut list = ShoppingList::from_labels(["milk", "eggs"]);
        assert!(list.remove_item("milk"));
        assert!(!list.remove_item("milk"));
        assert!(!list.contains("milk"));
        assert!(list.contains("eggs"));
    }

    #[test]
    fn test_from_ids_keeps_identifiers_verbatim() {
        let list = ShoppingList::from_ids(["organicChoppedKale", "milk", "organicChoppedKale"]);
        let ids: Vec<&str> = list.iter().map(String::as_str).collect();
        assert_eq!(ids, vec!["organicChoppedKale", "milk"]);
        assert_eq!(list.display_labels(), vec!["Organic Chopped Kale", "Milk"]);
    }

    #[test]
    fn test_add_id_dedupes_without_normalizing() {
        let mut list = ShoppingList::new();
        assert!(list.add_id("wholeWheatBread"));
        assert!(!list.add_id("wholeWheatBread"));
        assert!(list.add_id("wholewheatbread"));
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn test_display_labels() {
        let list = ShoppingList::from_labels(["whole wheat bread", "milk"]);
        assert_eq!(list.display_labels(), vec!["Whole Wheat Bread", "Milk"]);
    }
}
