#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod errors;
pub mod pipeline;

pub use errors::{PigmentError, Result};
pub use pipeline::{FilterFunctionDescriptor, FunctionCache};
