mod loader;
mod table;

pub use loader::{DataSource, LoadError, ReferenceData};
pub use table::EndingTable;
