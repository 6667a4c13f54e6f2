//! Support for library configuration options

use std::sync::{Arc, Mutex};
use once_cell::sync::Lazy;

/// The server used when nothing else is configured
pub const DEFAULT_BASE_URL: &str = "http://localhost:4000";

/// Name of the environment variable that overrides [`BASE_URL`]
pub const BASE_URL_ENV: &str = "PLANNER_URL";

/// Base URL of the server that hosts the `/todos` collection.
/// Feel free to override it when initing this library.
pub static BASE_URL: Lazy<Arc<Mutex<String>>> = Lazy::new(|| Arc::new(Mutex::new(DEFAULT_BASE_URL.to_string())));

/// The base URL to use: the value of the `PLANNER_URL` environment variable if it is set, [`BASE_URL`] otherwise
pub fn base_url() -> String {
    match std::env::var(BASE_URL_ENV) {
        Ok(url) if url.is_empty() == false => url,
        _ => match BASE_URL.lock() {
            Ok(url) => url.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        },
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn set_base_url(url: &str) {
        *BASE_URL.lock().unwrap() = url.to_string();
    }

    // The environment is shared by the whole process, so every case runs in this single test
    #[test]
    fn base_url_precedence() {
        std::env::remove_var(BASE_URL_ENV);
        assert_eq!(base_url(), DEFAULT_BASE_URL);

        set_base_url("http://planner.example.com:8080");
        assert_eq!(base_url(), "http://planner.example.com:8080");

        std::env::set_var(BASE_URL_ENV, "http://from-env.example.com");
        assert_eq!(base_url(), "http://from-env.example.com");
        let client = crate::client::Client::from_config().unwrap();
        assert_eq!(client.resource().collection().as_str(), "http://from-env.example.com/todos");

        std::env::set_var(BASE_URL_ENV, "");
        assert_eq!(base_url(), "http://planner.example.com:8080");

        std::env::remove_var(BASE_URL_ENV);
        set_base_url(DEFAULT_BASE_URL);
        assert_eq!(base_url(), DEFAULT_BASE_URL);
    }
}
