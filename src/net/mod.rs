//! HTTP gateway, typed endpoint helpers, and the failure taxonomy.

pub mod api;
pub mod error;
pub mod gateway;
