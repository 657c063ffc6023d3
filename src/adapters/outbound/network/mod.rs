/// Network adapters for external API calls
mod caching_registry_client;
mod npm_registry_client;

pub use caching_registry_client::CachingRegistryClient;
pub use npm_registry_client::{NpmRegistryClient, DEFAULT_REGISTRY_URL};
