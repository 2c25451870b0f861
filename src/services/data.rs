//! Data item service

use crate::api::{self, ApiClient};
use crate::models::{DataForm, DataItem};
use crate::AppResult;

#[derive(Clone)]
pub struct DataService {
    client: ApiClient,
}

impl DataService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> AppResult<Vec<DataItem>> {
        api::data::list(&self.client).await
    }

    pub async fn create(&self, data: &DataForm) -> AppResult<DataItem> {
        super::check_valid(data)?;
        api::data::create(&self.client, data).await
    }

    pub async fn update(&self, id: i64, data: &DataForm) -> AppResult<DataItem> {
        super::check_valid(data)?;
        api::data::update(&self.client, id, data).await
    }

    pub async fn delete(&self, id: i64) -> AppResult<()> {
        api::data::delete(&self.client, id).await
    }
}
