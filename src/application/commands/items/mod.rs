// src/application/commands/items/mod.rs
mod create;
mod delete;
mod renumber;
mod reorder;
mod service;
mod update;
mod visibility;

pub use create::{CreateItemCommand, CreateItemCommandBuilder};
pub use delete::DeleteItemCommand;
pub use renumber::RenumberCategoryCommand;
pub use reorder::MoveItemCommand;
pub use service::ItemCommandService;
pub use update::UpdateItemCommand;
pub use visibility::SetHiddenCommand;
