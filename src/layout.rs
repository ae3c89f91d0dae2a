//! Layout Model
//!
//! Pure mapping from the item bank to what each printable sheet shows:
//! which items appear, which font tier each name gets, and how the label
//! grids expand items into cells.

use crate::models::{LayoutMode, MenuItem};

/// Name length above which the classic menu drops to the compact font
pub const MENU_NAME_LIMIT: usize = 25;
/// Name length above which a large label drops to the compact font
pub const LABEL_NAME_LIMIT: usize = 20;
/// Name length above which a small label drops to its smallest font
pub const SMALL_LABEL_NAME_LIMIT: usize = 20;

/// Copies printed of each item on the small-label sheet
pub const SMALL_LABEL_COPIES: usize = 4;

/// Per-variant font tier for an item name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontTier {
    Normal,
    Compact,
}

/// Pick the font tier for a name in the given layout. Thresholds are
/// per-variant constants; nothing is measured.
pub fn font_tier(mode: LayoutMode, name: &str) -> FontTier {
    let limit = match mode {
        LayoutMode::Menu => MENU_NAME_LIMIT,
        LayoutMode::Labels => LABEL_NAME_LIMIT,
        LayoutMode::Labels32 => SMALL_LABEL_NAME_LIMIT,
    };
    if name.chars().count() > limit {
        FontTier::Compact
    } else {
        FontTier::Normal
    }
}

/// Items flagged for inclusion, in bank order
pub fn selected_items(items: &[MenuItem]) -> Vec<MenuItem> {
    items.iter().filter(|i| i.selected).cloned().collect()
}

/// One cell of a label sheet
#[derive(Debug, Clone, PartialEq)]
pub struct LabelCell {
    pub id: String,
    pub name: String,
    pub tier: FontTier,
}

/// Synthetic id of the nth printed copy of an item (small labels only)
pub fn copy_id(source_id: &str, copy: usize) -> String {
    format!("{source_id}-{copy}")
}

/// Expand the selected items into label cells. The large grid gets one
/// cell per item; the small grid quadruplicates each item into adjacent
/// cells with synthetic ids so four identical labels print per item.
/// The classic menu is not a label sheet and yields no cells.
pub fn label_cells(items: &[MenuItem], mode: LayoutMode) -> Vec<LabelCell> {
    let selected = selected_items(items);
    match mode {
        LayoutMode::Labels32 => selected
            .iter()
            .flat_map(|item| {
                (1..=SMALL_LABEL_COPIES).map(|copy| LabelCell {
                    id: copy_id(&item.id, copy),
                    name: item.name.clone(),
                    tier: font_tier(mode, &item.name),
                })
            })
            .collect(),
        LayoutMode::Labels => selected
            .iter()
            .map(|item| LabelCell {
                id: item.id.clone(),
                name: item.name.clone(),
                tier: font_tier(mode, &item.name),
            })
            .collect(),
        LayoutMode::Menu => Vec::new(),
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
    fn test_selected_items_preserves_order() {
        let items = vec![
            make_item("1", "Coxinha", true),
            make_item("2", "Pudim", false),
            make_item("3", "Brigadeiro", true),
        ];
        let selected = selected_items(&items);
        assert_eq!(selected.len(), 2);
        assert_eq!(selected[0].id, "1");
        assert_eq!(selected[1].id, "3");
    }

    #[test]
    fn test_small_labels_quadruplicate_with_derived_ids() {
        let items = vec![make_item("77", "Pudim", true)];
        let cells = label_cells(&items, LayoutMode::Labels32);

        assert_eq!(cells.len(), 4);
        let ids: Vec<&str> = cells.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["77-1", "77-2", "77-3", "77-4"]);
        assert!(cells.iter().all(|c| c.name == "Pudim"));
    }

    #[test]
    fn test_small_label_copies_are_adjacent_per_item() {
        let items = vec![make_item("1", "Café", true), make_item("2", "Suco", true)];
        let cells = label_cells(&items, LayoutMode::Labels32);

        assert_eq!(cells.len(), 8);
        assert!(cells[..4].iter().all(|c| c.name == "Café"));
        assert!(cells[4..].iter().all(|c| c.name == "Suco"));
    }

    #[test]
    fn test_large_labels_one_cell_per_selected_item() {
        let items = vec![
            make_item("1", "Coxinha", true),
            make_item("2", "Pudim", false),
            make_item("3", "Brigadeiro", true),
        ];
        let cells = label_cells(&items, LayoutMode::Labels);

        assert_eq!(cells.len(), 2);
        assert_eq!(cells[0].id, "1");
        assert_eq!(cells[1].id, "3");
    }

    #[test]
    fn test_menu_mode_yields_no_label_cells() {
        let items = vec![make_item("1", "Coxinha", true)];
        assert!(label_cells(&items, LayoutMode::Menu).is_empty());
    }

    #[test]
    fn test_no_selection_yields_no_cells() {
        let items = vec![make_item("1", "Coxinha", false)];
        assert!(label_cells(&items, LayoutMode::Labels).is_empty());
        assert!(label_cells(&items, LayoutMode::Labels32).is_empty());
        assert!(selected_items(&items).is_empty());
    }

    #[test]
    fn test_font_tier_thresholds_per_variant() {
        let short = "Pudim"; // 5 chars
        let ten = "Pão Doce x"; // 10 chars
        let twenty_three = "Torta de Frango Mineira"; // 23 chars
        let thirty = "Torta de Frango com Requeijão."; // 30 chars
        assert_eq!(thirty.chars().count(), 30);
        assert_eq!(ten.chars().count(), 10);

        // Classic menu compacts only above 25
        assert_eq!(font_tier(LayoutMode::Menu, ten), FontTier::Normal);
        assert_eq!(font_tier(LayoutMode::Menu, twenty_three), FontTier::Normal);
        assert_eq!(font_tier(LayoutMode::Menu, thirty), FontTier::Compact);

        // Both label variants compact above 20
        assert_eq!(font_tier(LayoutMode::Labels, short), FontTier::Normal);
        assert_eq!(font_tier(LayoutMode::Labels, twenty_three), FontTier::Compact);
        assert_eq!(font_tier(LayoutMode::Labels32, short), FontTier::Normal);
        assert_eq!(font_tier(LayoutMode::Labels32, twenty_three), FontTier::Compact);
    }

    #[test]
    fn test_font_tier_counts_chars_not_bytes() {
        // 21 chars, more than 21 bytes
        let accented = "Pão de Queijo Rechead";
        assert_eq!(accented.chars().count(), 21);
        assert_eq!(font_tier(LayoutMode::Labels, accented), FontTier::Compact);

        let twenty = "Pão de Queijo Rechea";
        assert_eq!(twenty.chars().count(), 20);
        assert_eq!(font_tier(LayoutMode::Labels, twenty), FontTier::Normal);
    }
}
