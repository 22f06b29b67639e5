//! Sorter configuration: runtime preferences and TOML sort spec files

pub mod runtime;
pub mod spec_file;

pub use runtime::SorterConfig;
pub use spec_file::SortSpecFile;
