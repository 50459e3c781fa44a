pub mod format;
pub mod testing;
