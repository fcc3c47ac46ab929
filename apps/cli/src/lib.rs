// Export our modules for use in the binary and integration tests
pub mod cli;
pub mod config;
pub mod load;
pub mod report;
