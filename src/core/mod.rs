//! Core utilities shared across the application
//!
//! - `cache`: On-disk TTL cache and in-memory LRU snapshot cache

pub mod cache;
