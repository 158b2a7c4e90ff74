/// Platform-specific functionality: filesystem usage queries.

pub mod usage;

pub use usage::{filesystem_usage, FilesystemUsage};
