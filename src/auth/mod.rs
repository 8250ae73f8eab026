//! Authentication types for dispatched requests.
//!
//! The dispatcher authenticates with an optional bearer token sent as
//! `authorization: Bearer <token>`. See [`Token`] for the supported shapes.

mod token;

pub use token::{Token, TokenError, TokenFuture};
