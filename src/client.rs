//! This module provides a client to connect to a server hosting a `/todos` collection

use async_trait::async_trait;
use reqwest::StatusCode;
use url::Url;

use crate::draft::DraftEntry;
use crate::error::SourceError;
use crate::resource::Resource;
use crate::task::{TaskId, TaskRecord};
use crate::traits::TodoSource;


/// A [`TodoSource`] that fetches its data from a remote server
#[derive(Clone, Debug)]
pub struct Client {
    resource: Resource,
    http: reqwest::Client,
}

impl Client {
    /// Create a client. This does not start a connection
    pub fn new<S: AsRef<str>>(url: S) -> Result<Self, SourceError> {
        let url = Url::parse(url.as_ref())?;

        Ok(Self {
            resource: Resource::new(url)?,
            http: reqwest::Client::new(),
        })
    }

    /// Create a client for the server set in the [`config`](crate::config)
    pub fn from_config() -> Result<Self, SourceError> {
        Self::new(crate::config::base_url())
    }

    pub fn resource(&self) -> &Resource {
        &self.resource
    }
}

#[async_trait]
impl TodoSource for Client {
    async fn list(&self) -> Result<Vec<TaskRecord>, SourceError> {
        let url = self.resource.collection();
        log::debug!("GET {}", url);

        let response = self.http
            .get(url.clone())
            .send()
            .await?;

        if response.status().is_success() == false {
            return Err(SourceError::UnexpectedStatus(response.status()));
        }

        let text = response.text().await?;
        let records: Vec<TaskRecord> = serde_json::from_str(&text)?;
        log::debug!("Fetched {} tasks", records.len());
        Ok(records)
    }

    async fn create(&self, draft: &DraftEntry) -> Result<TaskRecord, SourceError> {
        let url = self.resource.collection();
        log::debug!("POST {} ({:?})", url, draft);

        let response = self.http
            .post(url.clone())
            .json(draft)
            .send()
            .await?;

        // Anything but a proper creation (even another 2xx) means we do not know what has been stored
        if response.status() != StatusCode::CREATED {
            return Err(SourceError::UnexpectedStatus(response.status()));
        }

        let text = response.text().await?;
        let record: TaskRecord = serde_json::from_str(&text)?;
        log::debug!("Created task {}", record.id());
        Ok(record)
    }

    async fn delete(&self, id: &TaskId) -> Result<(), SourceError> {
        let url = self.resource.item(id)?;
        log::debug!("DELETE {}", url);

        let response = self.http
            .delete(url)
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            log::info!("Task {} is not on the server (anymore)", id);
            return Ok(());
        }
        if status.is_success() == false {
            return Err(SourceError::UnexpectedStatus(status));
        }

        Ok(())
    }
}
