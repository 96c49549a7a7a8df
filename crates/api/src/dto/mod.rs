pub mod record;
pub mod response;

pub use record::{CreateRecordRequest, RecordDto};
pub use response::ApiResponse;
