pub mod directory_expiry;
pub mod runner;

pub use directory_expiry::DirectoryExpiryJob;
pub use runner::JobRunner;
