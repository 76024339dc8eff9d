//! Client wrappers around the courier board actor.
//!
//! Callers never build [`CourierRequest`](crate::courier_actor::CourierRequest)s by
//! hand; they go through [`CourierClient`] via the [`CourierApi`] trait.

pub mod courier_api;
pub mod courier_client;

pub use courier_api::CourierApi;
pub use courier_client::CourierClient;
