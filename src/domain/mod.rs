//! Domain modules organized as vertical slices.
//!
//! Each sub-module contains:
//! - `mod.rs`: Request/response types for the endpoint group
//! - `wire.rs`: Raw serde envelopes, where the group has several
//! - `client.rs`: Sub-client with one method per endpoint
//!
//! `portfolio` additionally holds the balance normalizer.

pub mod market;
pub mod portfolio;
pub mod strategy;
pub mod wallet;
