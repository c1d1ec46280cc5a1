//! Application layer: loading, saving and summarising ring networks
//!
//! This layer wraps the domain with file I/O and validation.

pub mod error;
pub mod error_ext;
pub mod loader;
pub mod report;

pub use error::{ApplicationError, ApplicationResult};
pub use error_ext::IoResultExt;
pub use loader::{load_network, save_network, NetworkFile, RingEntry};
pub use report::NetworkReport;
