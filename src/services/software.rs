//! Software license service

use crate::api::{self, ApiClient};
use crate::models::{Software, SoftwareForm};
use crate::AppResult;

#[derive(Clone)]
pub struct SoftwareService {
    client: ApiClient,
}

impl SoftwareService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> AppResult<Vec<Software>> {
        api::software::list(&self.client).await
    }

    pub async fn get(&self, id: i64) -> AppResult<Software> {
        api::software::get(&self.client, id).await
    }

    pub async fn create(&self, data: &SoftwareForm) -> AppResult<Software> {
        super::check_valid(data)?;
        api::software::create(&self.client, data).await
    }

    pub async fn update(&self, id: i64, data: &SoftwareForm) -> AppResult<Software> {
        super::check_valid(data)?;
        api::software::update(&self.client, id, data).await
    }

    pub async fn delete(&self, id: i64) -> AppResult<()> {
        api::software::delete(&self.client, id).await
    }
}
