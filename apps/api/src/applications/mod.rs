// Application intake and match prediction. Applications are never stored.

pub mod handlers;
pub mod service;
