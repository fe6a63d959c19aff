//! Shared core of the SMS submission form.
//!
//! - `requests`: the payload posted to the dispatch endpoint.
//! - `model`: the dispatch service's response.
//! - `validation`: client-side checks of the raw form fields.
//! - `controller`: the target-independent form controller, its view binding
//!   and the dispatch seam. The `frontend` crate renders it in the browser.

pub mod controller;
pub mod model;
pub mod requests;
pub mod validation;
