pub mod snapshot;

pub use snapshot::{parse_snapshot, StatusSnapshot};
