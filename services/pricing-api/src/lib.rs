//! HTTP boundary for the VAT price correction service.

pub mod error;
pub mod handlers;
pub mod models;
pub mod router;
