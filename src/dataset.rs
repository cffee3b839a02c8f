//! Record store: loading, normalizing and caching the dataset.

pub mod cache;
pub mod loader;
pub mod record;
pub mod sentiment;
pub mod store;

pub use cache::StoreCache;
pub use loader::{ColumnMapping, DatasetLoader};
pub use record::Record;
pub use sentiment::Sentiment;
pub use store::RecordStore;
