mod mock_repositories;

pub use mock_repositories::{CountingDirectory, CountingRepository};
