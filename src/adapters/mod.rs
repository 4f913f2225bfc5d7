//! External integrations
//!
//! Adapters connect the core pipeline to the outside world. Currently the
//! only adapter family is the persistent submission store.

pub mod store;
