//! Shopping list item and the persisted item collection

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use core_kernel::ItemId;
use crate::error::ItemError;

/// Trims surrounding whitespace and rejects names that end up empty
pub fn normalize_name(name: Option<&str>) -> Result<String, ItemError> {
    match name.map(str::trim) {
        Some(trimmed) if !trimmed.is_empty() => Ok(trimmed.to_string()),
        _ => Err(ItemError::NameRequired),
    }
}

/// A single shopping list entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub purchased: bool,
    pub created_at: DateTime<Utc>,
}

impl Item {
    /// Creates an unpurchased item, normalising the name
    pub fn new(name: Option<&str>) -> Result<Self, ItemError> {
        Ok(Self {
            id: ItemId::new(),
            name: normalize_name(name)?,
            purchased: false,
            created_at: Utc::now(),
        })
    }
}

/// The whole item collection as it is stored: `{"items": [...]}`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemList {
    #[serde(default)]
    pub items: Vec<Item>,
}

impl ItemList {
    pub fn new(items: Vec<Item>) -> Self {
        Self { items }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn push(&mut self, item: Item) {
        self.items.push(item);
    }

    /// Sets the purchased flag, returning the updated item
    pub fn set_purchased(&mut self, id: ItemId, purchased: bool) -> Option<&Item> {
        let item = self.items.iter_mut().find(|item| item.id == id)?;
        item.purchased = purchased;
        Some(item)
    }

    /// Removes an item, preserving the order of the rest
    pub fn remove(&mut self, id: ItemId) -> Option<Item> {
        let index = self.items.iter().position(|item| item.id == id)?;
        Some(self.items.remove(index))
    }

    pub fn purchased_count(&self) -> usize {
        self.items.iter().filter(|item| item.purchased).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_item_trims_name() {
        let item = Item::new(Some("  Milk  ")).unwrap();
        assert_eq!(item.name, "Milk");
        assert!(!item.purchased);
    }

    #[test]
    fn test_new_item_rejects_blank_names() {
        assert_eq!(Item::new(None), Err(ItemError::NameRequired));
        assert_eq!(Item::new(Some("")), Err(ItemError::NameRequired));
        assert_eq!(Item::new(Some(" \t\n ")), Err(ItemError::NameRequired));
    }

    #[test]
    fn test_list_set_purchased_and_remove() {
        let mut list = ItemList::default();
        let eggs = Item::new(Some("Eggs")).unwrap();
        let bread = Item::new(Some("Bread")).unwrap();
        list.push(eggs.clone());
        list.push(bread.clone());

        assert!(list.set_purchased(eggs.id, true).is_some_and(|i| i.purchased));
        assert_eq!(list.purchased_count(), 1);

        assert_eq!(list.remove(eggs.id).map(|i| i.id), Some(eggs.id));
        assert_eq!(list.items, vec![bread]);
        assert!(list.remove(eggs.id).is_none());
    }
}
