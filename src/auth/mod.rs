//! Auth Module
//!
//! Validates bearer tokens and turns them into a request `Identity`.
//!
//! The query core never authenticates anything itself. Handlers declare an
//! `Identity` extractor argument; the extractor pulls the `Authorization`
//! header, runs it through the configured `TokenValidator` and rejects the
//! request with 401 before the handler body ever runs.

pub mod validator;
