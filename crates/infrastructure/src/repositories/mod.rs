pub mod directory_repository;

pub use directory_repository::SqliteDirectoryRepository;
