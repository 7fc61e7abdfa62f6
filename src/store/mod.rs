pub mod memory;
pub mod row;

pub use memory::InMemoryProfileStore;
pub use row::ProfileRow;
