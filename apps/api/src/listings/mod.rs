// Listings: the in-memory store, its sample seed, posting, and the HTTP handlers.

pub mod handlers;
pub mod seed;
pub mod service;
pub mod store;
