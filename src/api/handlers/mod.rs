//! Request handlers, one module per entity family.
//!
//! Every handler decodes its input, delegates to a repository, and maps the
//! outcome to a status code. Errors convert to responses through
//! [`crate::errors::Error`]'s `IntoResponse` impl.

/// `/products` routes
pub mod products;
/// `/recipes` routes
pub mod recipes;
