use url::Url;

use crate::error::SourceError;
use crate::task::TaskId;

/// The name of the remote collection, relative to the base URL
pub const COLLECTION: &str = "todos";

/// Just a wrapper around the base URL of a server, that knows where its tasks live
#[derive(Clone, Debug)]
pub struct Resource {
    url: Url,
    collection: Url,
}

impl Resource {
    pub fn new(url: Url) -> Result<Self, SourceError> {
        let mut collection = url.clone();
        collection.path_segments_mut()
            .map_err(|_| SourceError::NotABase(url.clone()))?
            .pop_if_empty()
            .push(COLLECTION);

        Ok(Self { url, collection })
    }

    /// The URL of the whole collection, e.g. `http://localhost:4000/todos`
    pub fn collection(&self) -> &Url { &self.collection }

    /// The URL of a single task, e.g. `http://localhost:4000/todos/7`
    pub fn item(&self, id: &TaskId) -> Result<Url, SourceError> {
        let mut built = self.collection.clone();
        built.path_segments_mut()
            .map_err(|_| SourceError::NotABase(self.url.clone()))?
            .push(&id.to_string());
        Ok(built)
    }
}
