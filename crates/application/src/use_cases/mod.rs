pub mod dns;
pub mod records;

pub use dns::{Resolution, ResolveDomainUseCase};
pub use records::{
    CreateRecordUseCase, DeleteRecordUseCase, ListRecordsUseCase, LoadDirectoryUseCase,
    PurgeExpiredRecordsUseCase, PurgeOutcome,
};
