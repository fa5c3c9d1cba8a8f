//! World access: the query port, static catalog and in-memory snapshot.

mod catalog;
mod query;
mod snapshot;

pub use catalog::{Catalog, ItemDrop, ItemInfo, LocationInfo, MonsterInfo, Phylum};
pub use query::{CapabilityPort, WorldQuery};
pub use snapshot::WorldSnapshot;
