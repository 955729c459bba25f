//! Client-side core for the task service.
//!
//! # Overview
//! Everything a rendering layer needs to talk to the task API, with no I/O
//! of its own: `TaskClient` builds `HttpRequest` values and parses
//! `HttpResponse` values, and the caller executes the actual round-trip.
//! `TaskView` holds the transient state a task list UI keeps between
//! paints and encodes the refresh-after-mutation policy.
//!
//! # Design
//! - `TaskClient` is stateless — it holds only `base_url`.
//! - Each API operation is split into `build_*` (produces request) and
//!   `parse_*` (consumes response), so the I/O boundary is explicit.
//! - DTOs are defined independently from the server crate; integration
//!   tests catch schema drift.
//! - `TaskView` applies no optimistic updates and treats every failure
//!   uniformly, whatever the status code or error kind.

pub mod client;
pub mod error;
pub mod http;
pub mod types;
pub mod view;

pub use client::TaskClient;
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use types::{CreateTask, Task, UpdateTask};
pub use view::{Action, TaskView};
