// Shared encoding and I/O helpers
pub mod encoding;
pub mod io;
