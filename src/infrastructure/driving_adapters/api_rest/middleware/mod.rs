//! API Middleware

pub mod gateway_ready;
pub mod request_id;

pub use gateway_ready::gateway_ready_middleware;
pub use request_id::{request_id_middleware, RequestId, REQUEST_ID_HEADER};
