//! Filter function identity.
//!
//! A [`FilterFunctionDescriptor`] names one shader entry point together with
//! the source it resolves against: either the pipeline's embedded default
//! shader source, or a precompiled shader library addressed by URL. The
//! pipeline builder uses descriptors as compiled-function cache keys, so
//! equality and hashing are structural over the `(name, library)` pair.

use std::fmt;

use url::Url;

use crate::errors::{PigmentError, Result};

/// Identity of one GPU filter function.
///
/// Two descriptors are equal iff both the entry-point name and the library
/// location match. The embedded-source form (`library_url() == None`) is
/// never equal to a library form of the same name — the two denote different
/// sourcing strategies and must resolve to different cache entries.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FilterFunctionDescriptor {
    name: String,
    library_url: Option<Url>,
}

impl FilterFunctionDescriptor {
    /// Creates a descriptor resolved against the pipeline's embedded default
    /// shader source, compiled alongside the pipeline at build time.
    ///
    /// # Errors
    ///
    /// Returns [`PigmentError::EmptyFunctionName`] if `name` is empty.
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(PigmentError::EmptyFunctionName);
        }
        Ok(Self {
            name,
            library_url: None,
        })
    }

    /// Creates a descriptor resolved against the precompiled shader library
    /// at `library_url`.
    ///
    /// "No library" is not expressible through this form; use
    /// [`FilterFunctionDescriptor::new`] for the embedded-source form.
    ///
    /// # Errors
    ///
    /// Returns [`PigmentError::EmptyFunctionName`] if `name` is empty.
    pub fn with_library(name: impl Into<String>, library_url: Url) -> Result<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(PigmentError::EmptyFunctionName);
        }
        Ok(Self {
            name,
            library_url: Some(library_url),
        })
    }

    /// The entry-point symbol this descriptor resolves.
    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The shader library to load the function from, or `None` for the
    /// embedded default source.
    #[inline]
    #[must_use]
    pub fn library_url(&self) -> Option<&Url> {
        self.library_url.as_ref()
    }
}

impl fmt::Display for FilterFunctionDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.library_url {
            Some(url) => write!(f, "{} @ {url}", self.name),
            None => write!(f, "{} (embedded)", self.name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lib_url(s: &str) -> Url {
        Url::parse(s).unwrap()
    }

    #[test]
    fn test_embedded_form_has_no_library() {
        let d = FilterFunctionDescriptor::new("gaussian_blur").unwrap();
        assert_eq!(d.name(), "gaussian_blur");
        assert!(d.library_url().is_none());
    }

    #[test]
    fn test_library_form_keeps_url() {
        let url = lib_url("file:///filters/default.pigmentlib");
        let d = FilterFunctionDescriptor::with_library("gaussian_blur", url.clone()).unwrap();
        assert_eq!(d.name(), "gaussian_blur");
        assert_eq!(d.library_url(), Some(&url));
    }

    #[test]
    fn test_empty_name_rejected_by_both_forms() {
        assert!(matches!(
            FilterFunctionDescriptor::new(""),
            Err(PigmentError::EmptyFunctionName)
        ));
        assert!(matches!(
            FilterFunctionDescriptor::with_library("", lib_url("file:///filters/default.pigmentlib")),
            Err(PigmentError::EmptyFunctionName)
        ));
    }

    #[test]
    fn test_equality_is_structural_over_name_and_library() {
        let url = lib_url("file:///filters/default.pigmentlib");
        let other_url = lib_url("file:///filters/extra.pigmentlib");

        let a = FilterFunctionDescriptor::with_library("blur", url.clone()).unwrap();
        let b = FilterFunctionDescriptor::with_library("blur", url.clone()).unwrap();
        let different_name = FilterFunctionDescriptor::with_library("resize", url).unwrap();
        let different_lib = FilterFunctionDescriptor::with_library("blur", other_url).unwrap();

        assert_eq!(a, b);
        assert_ne!(a, different_name);
        assert_ne!(a, different_lib);
    }

    #[test]
    fn test_embedded_and_library_forms_are_distinct() {
        let embedded = FilterFunctionDescriptor::new("blur").unwrap();
        let library =
            FilterFunctionDescriptor::with_library("blur", lib_url("file:///filters/default.pigmentlib"))
                .unwrap();
        assert_ne!(embedded, library);
    }

    #[test]
    fn test_display_shows_sourcing_strategy() {
        let embedded = FilterFunctionDescriptor::new("blur").unwrap();
        assert_eq!(embedded.to_string(), "blur (embedded)");

        let library =
            FilterFunctionDescriptor::with_library("blur", lib_url("file:///filters/a.pigmentlib"))
                .unwrap();
        assert_eq!(library.to_string(), "blur @ file:///filters/a.pigmentlib");
    }
}
