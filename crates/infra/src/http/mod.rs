//! HTTP transport shared by every API namespace

pub mod client;

pub use client::{HttpClient, HttpClientBuilder};
