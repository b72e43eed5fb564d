/// Persistence adapters implementing the storage ports
mod database;
mod snapshot_file;

pub use database::{Database, DatabaseTransaction, Tables};
pub use snapshot_file::SnapshotFile;
