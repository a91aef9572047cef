// Handler modules
pub mod analyze;
pub mod checks;

// Re-export all handler functions
pub use analyze::handle_analyze;
pub use checks::handle_checks;
