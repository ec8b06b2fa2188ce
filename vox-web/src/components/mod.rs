mod editable;
mod folder_card;
mod sidebar;

pub use editable::EditableName;
pub use folder_card::FolderCard;
pub use sidebar::Sidebar;
