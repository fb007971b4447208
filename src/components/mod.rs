pub mod header;
pub mod icon;
pub mod layout;
pub mod profile_card;
pub mod sidebar;
