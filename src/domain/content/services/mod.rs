// src/domain/content/services/mod.rs
pub mod ordering;
pub mod slugs;

pub use slugs::{SlugDeriver, SlugService};
