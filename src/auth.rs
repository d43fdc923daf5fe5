//! Credential model: tokens, their types, secrets, and type-specific extras.

pub mod token;

pub use token::{extra::*, kind::*, secret::*, *};
