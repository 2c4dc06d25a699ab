//! Application layer: services orchestrating domain logic and gateways.

pub mod services;
