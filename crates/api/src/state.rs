use hearth_dns_application::use_cases::{
    CreateRecordUseCase, DeleteRecordUseCase, ListRecordsUseCase,
};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub create_record: Arc<CreateRecordUseCase>,
    pub delete_record: Arc<DeleteRecordUseCase>,
    pub list_records: Arc<ListRecordsUseCase>,
    pub api_key: Option<Arc<str>>,
}
