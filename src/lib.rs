//! This crate provides a personal task planner, bound to a remote `/todos` collection.
//!
//! It provides an HTTP client in the [`client`] module, that can be used as a stand-alone module.
//!
//! The planner itself is a [`TaskPlannerView`]: it mirrors the tasks of a [`TodoSource`](traits::TodoSource) locally,
//! holds a draft of the next task to create, and tells the user (with a [`Notice`]) when something went wrong. \
//! Any `TodoSource` can back a view: usually a [`Client`](client::Client), but tests (or offline demos) can use a [`MemorySource`](memory::MemorySource).

pub mod traits;

mod task;
pub use task::{TaskId, TaskRecord, TaskStatus};
mod draft;
pub use draft::{DraftEntry, DraftField};
pub mod error;
pub use error::Notice;
pub mod view;
pub use view::TaskPlannerView;

pub mod client;
pub mod resource;
pub mod memory;
pub mod mock_behaviour;

pub mod config;
pub mod render;
