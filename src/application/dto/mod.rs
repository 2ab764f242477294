mod items;

pub use items::{CategoryDto, CategoryGroupDto, ContentItemDto};
