//! Filter pipeline primitives.
//!
//! Identity and caching for compiled GPU filter functions:
//! - `function_descriptor`: which shader entry point, from which source
//! - `function_cache`: descriptor-keyed cache of compiled functions

pub mod function_cache;
pub mod function_descriptor;

pub use function_cache::FunctionCache;
pub use function_descriptor::FilterFunctionDescriptor;
