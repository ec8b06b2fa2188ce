mod routes;

pub use routes::{Endpoint, Routes};

#[cfg(feature = "web")]
mod http;

#[cfg(feature = "web")]
pub use http::HttpProvider;
