//! Shared building blocks for the user directory and order ledger services.
//!
//! Both services speak the same JSON envelope (`{success, data|error}`),
//! surface the same error taxonomy, stamp every response with a `Trace-Id`
//! header, and expose the same health probes. This crate owns those pieces,
//! plus the [`User`] record the directory serves and the ledger consumes,
//! so neither service redefines the wire contract.

pub mod envelope;
pub mod error;
pub mod health;
pub mod trace;
pub mod user;

pub use envelope::{ApiError, ApiResult, Envelope, ErrorEnvelope};
pub use error::{DomainError, ErrorCode};
pub use trace::{Trace, TraceId};
pub use user::{User, UserId, UserValidationError};
