//! Events Module
//!
//! Publishes usage events without coupling the query core to a message bus.
//!
//! The `EventProducer` trait is the narrow seam a broker client would
//! implement; the bundled implementation writes events to the structured log.
//! Production is fire-and-forget from the caller's perspective: a failed
//! produce is logged and never affects the client response.

pub mod producer;
