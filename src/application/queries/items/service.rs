use std::sync::Arc;

use crate::domain::content::ContentReadStore;

pub struct ItemQueryService {
    pub(super) read_store: Arc<dyn ContentReadStore>,
}

impl ItemQueryService {
    pub fn new(read_store: Arc<dyn ContentReadStore>) -> Self {
        Self { read_store }
    }
}
