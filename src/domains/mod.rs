//! Domains module containing business logic organized by bounded contexts.
//!
//! Each subdomain represents a specific area of functionality within the
//! server. Today there is one: validated file access.

pub mod files;
