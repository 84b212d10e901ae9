pub mod load;
pub mod types;

pub use types::{Config, FileTypeTable, UserSettings};
