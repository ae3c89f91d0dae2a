//! UI Components
//!
//! Reusable Leptos components.

mod delete_confirm_button;
mod item_list;
mod labels_paper;
mod menu_paper;
mod new_item_form;
mod print_panel;
mod sidebar;

pub use delete_confirm_button::DeleteConfirmButton;
pub use item_list::ItemList;
pub use labels_paper::LabelsPaper;
pub use menu_paper::MenuPaper;
pub use new_item_form::NewItemForm;
pub use print_panel::PrintPanel;
pub use sidebar::Sidebar;
