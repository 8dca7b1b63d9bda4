//! Repository Implementations
//!
//! Concrete implementations of domain repository ports.

mod lock;

pub use lock::JsonLockRepository;
