//! Cinelog Core — shared event abstractions.
//!
//! This crate defines the envelope contract and the handler capability that
//! every domain crate and the bus depend on. It contains no broker or
//! transport code.

pub mod error;
pub mod event;
pub mod handler;
