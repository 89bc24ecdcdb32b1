pub mod error;
pub mod ffi;
pub mod logging;
#[cfg(feature = "python")]
pub mod python;
pub mod reduce;

pub use error::{InteropError, Result};
pub use ffi::InteropStatus;
pub use reduce::{fold_sum, scale_fold, scale_sum};
