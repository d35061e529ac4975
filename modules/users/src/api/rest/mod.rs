//! REST transport for the users module

pub mod dto;
pub mod error;
pub mod handlers;
pub mod routes;
