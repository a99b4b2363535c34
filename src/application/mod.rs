//! Application layer: order files, reports and the demo order
//!
//! This layer turns external input into domain trees and domain trees into output lines.

pub mod demo;
pub mod error;
pub mod error_ext;
pub mod order_file;
pub mod report;

pub use demo::sample_order;
pub use error::{ApplicationError, ApplicationResult};
pub use error_ext::IoResultExt;
pub use order_file::{ItemSpec, OrderFile};
pub use report::OrderReport;
