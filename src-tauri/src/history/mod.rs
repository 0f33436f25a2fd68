pub mod export;
pub mod store;
pub mod types;

pub use export::to_csv;
pub use store::HistoryStore;
pub use types::{HistoryEntry, Persistence};
