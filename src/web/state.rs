use crate::services::items::ItemStore;
use crate::services::registry::SlugRegistry;
use crate::Config;

/// Shared application state: one slug registry and one item store per
/// deployment scope. Handlers never reach into the registry's set directly;
/// they submit candidates and receive confirmed unique slugs back.
pub struct AppState {
    pub config: Config,
    pub registry: SlugRegistry,
    pub items: ItemStore,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            registry: SlugRegistry::new(),
            items: ItemStore::new(),
        }
    }
}
