//! Business services over the datastore

pub mod allocator;
pub mod entries;
pub mod store_status;

pub use allocator::OrderNumberAllocator;
pub use entries::EntryRepository;
pub use store_status::StoreStatusGate;
