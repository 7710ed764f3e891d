//! YouTube adapter
//!
//! Implementation of the YouTube Data API client.

pub mod client;

pub use client::{YouTubeClientImpl, YouTubeCredentials};
