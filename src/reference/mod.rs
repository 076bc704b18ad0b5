pub mod entry;
pub mod table;

pub use entry::{Polarity, ReferenceEntry, ReferenceLookup};
pub use table::{ReferenceTable, BUILTIN_REFERENCE};
