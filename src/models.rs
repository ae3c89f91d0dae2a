//! Domain Models
//!
//! Menu items, layout modes and the pure list operations behind the
//! sidebar actions.

use serde::{Deserialize, Serialize};

/// A dish (or drink) in the item bank
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    pub selected: bool,
}

/// Optional item category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Food,
    Drink,
    Dessert,
}

/// Which printable document is being edited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LayoutMode {
    /// Classic single-column menu sheet
    #[default]
    Menu,
    /// Large label grid, 3 columns
    Labels,
    /// Small label grid, 4 columns, 4 copies of each item
    Labels32,
}

/// Flip `selected` on the item with the given id; absent id is a no-op
pub fn toggle_item(items: &mut [MenuItem], id: &str) {
    if let Some(item) = items.iter_mut().find(|i| i.id == id) {
        item.selected = !item.selected;
    }
}

/// Prepend a new, selected item unless the trimmed name is empty.
/// Returns whether an item was actually added.
pub fn add_item(items: &mut Vec<MenuItem>, name: &str, id: String) -> bool {
    let name = name.trim();
    if name.is_empty() {
        return false;
    }
    items.insert(
        0,
        MenuItem {
            id,
            name: name.to_string(),
            category: None,
            selected: true,
        },
    );
    true
}

/// Remove the item with the given id. Callers are expected to have the
/// user confirm first; see [`DeleteIntent`] and `DeleteConfirmButton`.
pub fn remove_item(items: &mut Vec<MenuItem>, id: &str) {
    items.retain(|i| i.id != id);
}

/// Two-step protocol guarding permanent deletion: the intent is armed
/// first and commits only on an explicit confirmation. Declining drops
/// the pending deletion without touching anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeleteIntent {
    #[default]
    Idle,
    Armed,
}

impl DeleteIntent {
    /// Arm the deletion; nothing is removed yet
    pub fn request(self) -> Self {
        Self::Armed
    }

    /// Decline the pending deletion
    pub fn decline(self) -> Self {
        Self::Idle
    }

    pub fn is_armed(self) -> bool {
        self == Self::Armed
    }

    /// Commit an armed deletion, running `commit` exactly once; an
    /// unarmed confirm never commits. Returns the reset intent.
    pub fn confirm(self, commit: impl FnOnce()) -> Self {
        if self.is_armed() {
            commit();
        }
        Self::Idle
    }
}

/// Generate an id not yet present in `items`, starting from a millisecond
/// timestamp seed and counting upwards past any collision.
pub fn fresh_id(items: &[MenuItem], seed: u64) -> String {
    let mut candidate = seed;
    loop {
        let id = candidate.to_string();
        if !items.iter().any(|i| i.id == id) {
            return id;
        }
        candidate += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_item(id: &str, name: &str, selected: bool) -> MenuItem {
        MenuItem {
            id: id.to_string(),
            name: name.to_string(),
            category: None,
            selected,
        }
    }

    #[test]
    fn test_toggle_twice_restores_selection() {
        let mut items = vec![make_item("1", "Coxinha", true), make_item("2", "Pudim", false)];
        let before = items.clone();

        toggle_item(&mut items, "1");
        assert!(!items[0].selected);
        toggle_item(&mut items, "1");
        assert_eq!(items, before);

        toggle_item(&mut items, "2");
        toggle_item(&mut items, "2");
        assert_eq!(items, before);
    }

    #[test]
    fn test_toggle_unknown_id_is_noop() {
        let mut items = vec![make_item("1", "Coxinha", true)];
        let before = items.clone();
        toggle_item(&mut items, "999");
        assert_eq!(items, before);
    }

    #[test]
    fn test_add_blank_name_is_noop() {
        let mut items = vec![make_item("1", "Coxinha", true)];
        assert!(!add_item(&mut items, "", "2".to_string()));
        assert!(!add_item(&mut items, "   \t ", "2".to_string()));
        assert_eq!(items.len(), 1);
    }

    #[test]
    fn test_add_prepends_selected_with_unique_id() {
        let mut items = vec![make_item("100", "Coxinha", false)];
        let id = fresh_id(&items, 100);
        assert_ne!(id, "100");

        assert!(add_item(&mut items, "Pudim", id.clone()));
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].name, "Pudim");
        assert_eq!(items[0].id, id);
        assert!(items[0].selected);
        assert_eq!(items[1].id, "100");
    }

    #[test]
    fn test_add_trims_name() {
        let mut items = Vec::new();
        assert!(add_item(&mut items, "  Pão de Queijo  ", "1".to_string()));
        assert_eq!(items[0].name, "Pão de Queijo");
    }

    #[test]
    fn test_remove_only_matching_item() {
        let mut items = vec![
            make_item("1", "Coxinha", true),
            make_item("2", "Pudim", true),
            make_item("3", "Brigadeiro", false),
        ];
        remove_item(&mut items, "2");
        assert_eq!(items.len(), 2);
        assert!(items.iter().all(|i| i.id != "2"));
    }

    #[test]
    fn test_declined_delete_leaves_items_unchanged() {
        let items = vec![make_item("1", "Coxinha", true), make_item("2", "Pudim", true)];
        let before = items.clone();

        let intent = DeleteIntent::default().request();
        assert!(intent.is_armed());

        let intent = intent.decline();
        assert_eq!(intent, DeleteIntent::Idle);
        assert_eq!(items, before);

        // confirming after a decline is a no-op too
        let mut committed = false;
        intent.confirm(|| committed = true);
        assert!(!committed);
        assert_eq!(items, before);
    }

    #[test]
    fn test_confirmed_delete_commits_exactly_once() {
        let mut items = vec![make_item("1", "Coxinha", true), make_item("2", "Pudim", true)];
        let mut commits = 0;

        let intent = DeleteIntent::default().request().confirm(|| {
            remove_item(&mut items, "1");
            commits += 1;
        });

        assert_eq!(intent, DeleteIntent::Idle);
        assert_eq!(commits, 1);
        assert_eq!(items.len(), 1);
        assert!(items.iter().all(|i| i.id != "1"));
    }

    #[test]
    fn test_fresh_id_skips_collisions() {
        let items = vec![make_item("50", "a", true), make_item("51", "b", true)];
        assert_eq!(fresh_id(&items, 50), "52");
        assert_eq!(fresh_id(&items, 10), "10");
    }

    #[test]
    fn test_category_serializes_lowercase_and_skips_none() {
        let with = make_item("1", "Suco", true);
        let json = serde_json::to_string(&with).unwrap();
        assert!(!json.contains("category"));

        let mut item = make_item("2", "Café", true);
        item.category = Some(Category::Drink);
        let json = serde_json::to_string(&item).unwrap();
        assert!(json.contains("\"category\":\"drink\""));

        let parsed: MenuItem = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.category, Some(Category::Drink));
    }
}
