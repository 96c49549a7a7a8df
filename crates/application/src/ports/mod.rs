mod directory;
mod directory_repository;

pub use directory::{DirectoryReader, DirectoryStore};
pub use directory_repository::DirectoryRepository;
