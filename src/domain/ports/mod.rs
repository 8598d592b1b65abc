//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod notice_sink;
pub mod transport;

pub use notice_sink::{DeployNotice, NoticeSink, ACKNOWLEDGED_MESSAGE, NOT_ACKNOWLEDGED_PREFIX};
pub use transport::{DeployTransport, ResponseBody, TransportResponse};
