//! Synchronous client core for a JSON-RPC-style postal-logistics API.
//!
//! # Overview
//! One `fetch` call runs the whole pipeline: build the request envelope
//! (`apiKey` / `modelName` / `calledMethod` / `methodProperties`), POST it,
//! then classify the body as success, logical error or malformed response.
//! Successful calls yield a [`ResultContainer`]; typed access to its `data`
//! items goes through [`FieldReader`], the only defense against the
//! service's loosely typed JSON.
//!
//! # Design
//! - `Client` is stateless between calls — it holds only the API key and
//!   transport configuration, so concurrent calls are safe.
//! - Every failure category is a distinct [`ApiError`] variant; callers
//!   branch on kind (transport vs. logical vs. shape), never on message
//!   text.
//! - Endpoints and timeout are explicit [`Config`] values, letting tests
//!   substitute a local server.
//! - Retries, pooling, caching and the per-resource entity layer are out of
//!   scope; entities consume `FieldReader` and `ResultContainer` from
//!   outside this crate.

pub mod client;
pub mod error;
pub mod reader;
pub mod request;
pub mod response;
pub mod transport;

pub use client::Client;
pub use error::ApiError;
pub use reader::FieldReader;
pub use request::{Params, RequestEnvelope};
pub use response::{classify, ResultContainer};
pub use transport::{Config, Transport};
