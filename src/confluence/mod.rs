//! Confluence content module: endpoint construction, wire encoding and
//! decoding, pagination, the transport seam and the operation facade.

pub mod client;
pub mod decode;
pub mod encode;
pub mod endpoint;
pub mod error;
pub mod http;
pub mod models;
pub mod pagination;
pub mod transport;

pub use client::ContentClient;
pub use endpoint::ContentEndpoint;
pub use error::{ApiError, TransportError};
pub use http::HttpTransport;
pub use models::{
  Ancestor, Body, Content, Label, LabelResult, PageRequest, PageResult, PagedResult, Space, Storage, Version,
};
pub use transport::{ApiRequest, FormFile, HttpMethod, RequestBody, Transport};
