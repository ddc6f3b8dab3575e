pub mod items;
pub mod registry;
pub mod slug;
pub mod validation;
