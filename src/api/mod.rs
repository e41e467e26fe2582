//! API handlers for Libris REST endpoints

pub mod books;
pub mod health;
pub mod libraries;
pub mod mappings;
pub mod openapi;
