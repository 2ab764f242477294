// tests/support/mod.rs
#![allow(dead_code)]

pub mod builders;
pub mod mocks;

pub use builders::{forum_taxonomy, seeded_item, vendor_taxonomy, wire};
pub use mocks::{FixedClock, FlakyWriteStore};
