//! Common test utilities and fixtures.

pub mod mocks;
pub mod server;
pub mod store;

#[allow(unused_imports)]
pub use http::*;
#[allow(unused_imports)]
pub use mocks::*;
#[allow(unused_imports)]
pub use server::*;
#[allow(unused_imports)]
pub use store::*;
