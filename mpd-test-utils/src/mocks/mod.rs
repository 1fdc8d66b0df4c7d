//! Mock implementations for testing

pub mod transport;

pub use transport::{ScriptedConnector, ScriptedTransport};
