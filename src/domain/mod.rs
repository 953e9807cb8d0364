//! Domain entities shared by the service and client layers.

pub mod asset;
