pub mod adaptive;
pub mod diagnostics;
pub mod error;
pub mod integral;
pub mod integrand;
pub mod interval;
pub mod plot;
pub mod report;

pub use adaptive::{integrate, AdaptiveSimpson, Quadrature};
pub use diagnostics::{Diagnostics, ErrorRecord, NodeRecord, NodeStatus};
pub use error::{ExportError, IntegrationError};
pub use interval::Interval;
