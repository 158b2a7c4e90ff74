/// Analysis modules: bounded ranking of files and directories.

pub mod top_dirs;
pub mod top_files;

pub use top_dirs::top_directories;
pub use top_files::TopFiles;
