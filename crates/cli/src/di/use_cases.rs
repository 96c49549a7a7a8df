use super::Repositories;
use hearth_dns_api::AppState;
use hearth_dns_application::use_cases::{
    CreateRecordUseCase, DeleteRecordUseCase, ListRecordsUseCase, LoadDirectoryUseCase,
    PurgeExpiredRecordsUseCase,
};
use std::sync::Arc;

pub struct UseCases {
    pub create_record: Arc<CreateRecordUseCase>,
    pub delete_record: Arc<DeleteRecordUseCase>,
    pub list_records: Arc<ListRecordsUseCase>,
    pub load_directory: Arc<LoadDirectoryUseCase>,
    pub purge_expired: Arc<PurgeExpiredRecordsUseCase>,
}

impl UseCases {
    pub fn new(repos: &Repositories) -> Self {
        let store = repos.directory.clone();
        let repo = repos.directory_repo.clone();

        Self {
            create_record: Arc::new(CreateRecordUseCase::new(store.clone(), repo.clone())),
            delete_record: Arc::new(DeleteRecordUseCase::new(store.clone(), repo.clone())),
            list_records: Arc::new(ListRecordsUseCase::new(store.clone())),
            load_directory: Arc::new(LoadDirectoryUseCase::new(store.clone(), repo.clone())),
            purge_expired: Arc::new(PurgeExpiredRecordsUseCase::new(store, repo)),
        }
    }

    pub fn app_state(&self, api_key: Option<Arc<str>>) -> AppState {
        AppState {
            create_record: self.create_record.clone(),
            delete_record: self.delete_record.clone(),
            list_records: self.list_records.clone(),
            api_key,
        }
    }
}
