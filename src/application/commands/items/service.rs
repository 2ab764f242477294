// src/application/commands/items/service.rs
use std::sync::Arc;

use crate::{
    application::ports::time::Clock,
    domain::content::{ContentReadStore, ContentWriteStore, services::SlugService},
};

pub struct ItemCommandService {
    pub(super) write_store: Arc<dyn ContentWriteStore>,
    pub(super) read_store: Arc<dyn ContentReadStore>,
    pub(super) slug_service: Arc<SlugService>,
    pub(super) clock: Arc<dyn Clock>,
}

impl ItemCommandService {
    pub fn new(
        write_store: Arc<dyn ContentWriteStore>,
        read_store: Arc<dyn ContentReadStore>,
        slug_service: Arc<SlugService>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            write_store,
            read_store,
            slug_service,
            clock,
        }
    }
}
