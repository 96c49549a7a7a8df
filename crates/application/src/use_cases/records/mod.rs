pub mod create;
pub mod delete;
pub mod list;
pub mod load;
pub mod purge;

pub use create::CreateRecordUseCase;
pub use delete::DeleteRecordUseCase;
pub use list::ListRecordsUseCase;
pub use load::LoadDirectoryUseCase;
pub use purge::{PurgeExpiredRecordsUseCase, PurgeOutcome};
