//! Core types shared by the wait-for probes, the readiness loop and the binary.

pub mod command;
pub mod endpoint;
pub mod policy;

pub use command::CommandSpec;
pub use endpoint::{Endpoint, EndpointError, Scheme};
pub use policy::{Deadline, WaitPolicy};

pub const fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
