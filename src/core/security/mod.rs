// Security module for path containment validation
//
// This module decides whether untrusted path fragments resolve inside a
// configured base directory, preventing path traversal and absolute-path
// override attacks. Validation is lexical only; it never touches the
// filesystem.

pub mod containment;

pub use containment::{Containment, ContainmentError};
