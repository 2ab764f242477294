pub mod entity;
pub mod repository;
pub mod services;
pub mod value_objects;

pub use entity::{ContentItem, NewContentItem};
pub use repository::{ContentReadStore, ContentWriteStore};
pub use value_objects::{ContentKind, ItemId, ItemTitle, Slug};
