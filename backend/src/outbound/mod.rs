//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! - **persistence**: PostgreSQL repositories via Diesel, plus in-memory
//!   stand-ins for database-less runs
//! - **security**: Argon2id password hashing
//!
//! Adapters translate between domain types and infrastructure
//! representations; they contain no business logic.

pub mod persistence;
pub mod security;
