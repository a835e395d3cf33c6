//! Domain types shared by the student API.
//!
//! Holds the inbound record, the domain error type, and the pluggable
//! [`creator::StudentCreator`] capability the HTTP layer invokes after a
//! payload has been decoded.

pub mod creator;
pub mod error;
pub mod student;
