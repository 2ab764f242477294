// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::items::ItemCommandService,
        ports::{time::Clock, util::SlugGenerator},
        queries::items::ItemQueryService,
    },
    domain::content::{ContentReadStore, ContentWriteStore, services::SlugService},
};

/// Wires the command and query services over one store pair. The taxonomy
/// snapshot is not held here: call sites pass it per operation so a
/// mid-session category edit cannot leak into an in-flight request.
pub struct ApplicationServices {
    pub item_commands: Arc<ItemCommandService>,
    pub item_queries: Arc<ItemQueryService>,
}

impl ApplicationServices {
    pub fn new(
        write_store: Arc<dyn ContentWriteStore>,
        read_store: Arc<dyn ContentReadStore>,
        clock: Arc<dyn Clock>,
        slugger: Arc<dyn SlugGenerator>,
    ) -> Self {
        let slug_service = Arc::new(SlugService::new(Arc::clone(&read_store), slugger));

        let item_commands = Arc::new(ItemCommandService::new(
            Arc::clone(&write_store),
            Arc::clone(&read_store),
            slug_service,
            clock,
        ));
        let item_queries = Arc::new(ItemQueryService::new(read_store));

        Self {
            item_commands,
            item_queries,
        }
    }
}
