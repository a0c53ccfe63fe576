//! Typed HTTP gateway client.
//!
//! The gateway is the only component that performs network I/O; everything
//! it returns feeds the pure core. Credentials live in an explicit
//! [`Session`] held by the client, established by `login`/`register` and
//! dropped by `logout`; there is no process-global token slot.
//!
//! Calls carry no retry policy: any transport failure or non-2xx response
//! is terminal for that call. In-flight requests are cancelled by dropping
//! their futures; callers racing a newer query against an older one are
//! responsible for discarding the stale response.

pub mod error;
pub mod gateway;
pub mod session;

pub use error::ClientError;
pub use gateway::{ApiClient, ExpenseFilters};
pub use session::Session;
