//! Shopfront Core - Shared types library.
//!
//! This crate provides common types used across all Shopfront components:
//! - `client` - Headless state-sync client for the Shopfront REST API
//! - `cli` - Command-line driver over the client library
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP clients, no cache
//! logic. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, prices, emails, ratings,
//!   and order statuses

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
