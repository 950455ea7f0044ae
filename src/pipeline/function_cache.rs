//! Compiled Function Cache
//!
//! Descriptor-keyed cache of compiled filter functions. The pipeline builder
//! creates one [`FilterFunctionDescriptor`] per referenced shader entry point
//! and funnels every compile/load through [`FunctionCache`], so the same
//! `(name, library)` pair is only ever compiled once.
//!
//! The compiled function type is supplied by the caller — this crate never
//! touches a GPU object or dereferences a library URL.

use rustc_hash::FxHashMap;

use super::function_descriptor::FilterFunctionDescriptor;

/// Descriptor-keyed compiled function storage.
///
/// Owned by the pipeline builder; one per pipeline definition. Lookup and
/// deduplication rely entirely on the descriptor's structural equality, so a
/// freshly constructed descriptor retrieves an entry cached under an equal
/// one.
pub struct FunctionCache<F> {
    functions: FxHashMap<FilterFunctionDescriptor, F>,
}

impl<F> Default for FunctionCache<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F> FunctionCache<F> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            functions: FxHashMap::default(),
        }
    }

    /// Returns the cached function for `descriptor`, if any.
    #[must_use]
    pub fn get(&self, descriptor: &FilterFunctionDescriptor) -> Option<&F> {
        self.functions.get(descriptor)
    }

    /// Whether a function is cached for `descriptor`.
    #[must_use]
    pub fn contains(&self, descriptor: &FilterFunctionDescriptor) -> bool {
        self.functions.contains_key(descriptor)
    }

    /// Returns the cached function for `descriptor`, building and caching it
    /// on first request.
    pub fn get_or_insert_with(
        &mut self,
        descriptor: &FilterFunctionDescriptor,
        build: impl FnOnce() -> F,
    ) -> &F {
        self.functions
            .entry(descriptor.clone())
            .or_insert_with(|| {
                log::trace!("Compiling filter function: {descriptor}");
                build()
            })
    }

    /// Fallible variant of [`FunctionCache::get_or_insert_with`] for loaders
    /// that can fail.
    ///
    /// On build error nothing is cached and the error is returned unchanged,
    /// so the same descriptor can be retried later.
    pub fn get_or_try_insert_with<E>(
        &mut self,
        descriptor: &FilterFunctionDescriptor,
        build: impl FnOnce() -> Result<F, E>,
    ) -> Result<&F, E> {
        if !self.functions.contains_key(descriptor) {
            log::trace!("Compiling filter function: {descriptor}");
            let function = build()?;
            self.functions.insert(descriptor.clone(), function);
        }
        Ok(&self.functions[descriptor])
    }

    /// Discards the cached function for `descriptor`, returning it.
    pub fn remove(&mut self, descriptor: &FilterFunctionDescriptor) -> Option<F> {
        self.functions.remove(descriptor)
    }

    /// Clears all cached functions.
    pub fn clear(&mut self) {
        self.functions.clear();
    }

    /// Number of cached functions.
    #[must_use]
    pub fn function_count(&self) -> usize {
        self.functions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }
}
