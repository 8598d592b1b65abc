//! HTTP transport
//!
//! `ReqwestTransport` is the production `DeployTransport`.

mod reqwest_transport;

pub use reqwest_transport::ReqwestTransport;
