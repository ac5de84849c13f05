//! Per-activation rule options.

use std::collections::BTreeSet;

use globset::{GlobBuilder, GlobSet, GlobSetBuilder};

use crate::error::{BoundaryError, BoundaryResult};

/// Validated rule options: allow-list globs and lazy-loaded library names.
///
/// Pre-compiles the allow-list into a single glob set. `*` matches within
/// one path segment; `**` spans segments.
#[derive(Debug, Clone)]
pub struct RuleOptions {
    allow: Vec<String>,
    /// Pre-compiled matcher for `allow`.
    allow_set: GlobSet,
    lazy_load: BTreeSet<String>,
}

impl Default for RuleOptions {
    fn default() -> Self {
        Self {
            allow: Vec::new(),
            allow_set: GlobSet::empty(),
            lazy_load: BTreeSet::new(),
        }
    }
}

impl RuleOptions {
    /// Compile rule options.
    ///
    /// # Errors
    ///
    /// Returns [`BoundaryError::InvalidPattern`] if an allow pattern is not a
    /// valid glob, or [`BoundaryError::InvalidLazyLoadName`] if a lazy-load
    /// entry is empty or written with the scope prefix.
    pub fn new<A, L>(allow: A, lazy_load: L) -> BoundaryResult<Self>
    where
        A: IntoIterator,
        A::Item: Into<String>,
        L: IntoIterator,
        L::Item: Into<String>,
    {
        let allow: Vec<String> = allow.into_iter().map(Into::into).collect();

        let mut builder = GlobSetBuilder::new();
        for pattern in &allow {
            let glob = GlobBuilder::new(pattern)
                .literal_separator(true)
                .build()
                .map_err(|source| BoundaryError::InvalidPattern {
                    pattern: pattern.clone(),
                    source,
                })?;
            builder.add(glob);
        }
        let allow_set = builder
            .build()
            .map_err(|source| BoundaryError::InvalidPattern {
                pattern: allow.join(", "),
                source,
            })?;

        let lazy_load = lazy_load
            .into_iter()
            .map(|name| validate_lazy_name(name.into()))
            .collect::<BoundaryResult<BTreeSet<_>>>()?;

        Ok(Self {
            allow,
            allow_set,
            lazy_load,
        })
    }

    /// Allow-list patterns as given.
    #[must_use]
    pub fn allow_patterns(&self) -> &[String] {
        &self.allow
    }

    /// Whether a specifier matches any allow-list pattern.
    #[must_use]
    pub fn is_allowed(&self, specifier: &str) -> bool {
        !self.allow.is_empty() && self.allow_set.is_match(specifier)
    }

    /// Lazy-loaded library names.
    pub fn lazy_load(&self) -> impl Iterator<Item = &str> {
        self.lazy_load.iter().map(String::as_str)
    }

    /// Whether a library name is lazy-loaded.
    #[must_use]
    pub fn is_lazy_loaded(&self, name: &str) -> bool {
        self.lazy_load.contains(name)
    }
}

fn validate_lazy_name(raw: String) -> BoundaryResult<String> {
    let name = raw.trim().trim_matches('/');
    let reason = if name.is_empty() {
        "name must not be empty"
    } else if name.starts_with('@') {
        "name must be given without the scope prefix"
    } else if name.starts_with('.') {
        "name must not be a relative path"
    } else {
        return Ok(name.to_owned());
    };
    Err(BoundaryError::InvalidLazyLoadName {
        name: raw,
        reason: reason.to_owned(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_allows_nothing() {
        let options = RuleOptions::default();
        assert!(!options.is_allowed("@mycompany/a"));
        assert_eq!(options.lazy_load().count(), 0);
    }

    #[test]
    fn test_literal_pattern() {
        let options =
            RuleOptions::new(["@mycompany/libgroup/mylib/deep"], Vec::<String>::new()).unwrap();
        assert!(options.is_allowed("@mycompany/libgroup/mylib/deep"));
        assert!(!options.is_allowed("@mycompany/libgroup/mylib/deeper"));
    }

    #[test]
    fn test_star_stays_in_segment() {
        let options = RuleOptions::new(["@mycompany/*/testing"], Vec::<String>::new()).unwrap();
        assert!(options.is_allowed("@mycompany/shared/testing"));
        assert!(!options.is_allowed("@mycompany/shared/ui/testing"));
    }

    #[test]
    fn test_double_star_spans_segments() {
        let options = RuleOptions::new(["@mycompany/shared/**"], Vec::<String>::new()).unwrap();
        assert!(options.is_allowed("@mycompany/shared/ui/testing"));
        assert!(options.is_allowed("@mycompany/shared/x"));
        assert!(!options.is_allowed("@mycompany/other/x"));
    }

    #[test]
    fn test_invalid_glob_rejected() {
        let err = RuleOptions::new(["@mycompany/[oops"], Vec::<String>::new()).unwrap_err();
        assert!(matches!(err, BoundaryError::InvalidPattern { .. }));
    }

    #[test]
    fn test_lazy_names_normalized() {
        let options =
            RuleOptions::new(Vec::<String>::new(), [" libgroup/lazy/ ", "other"]).unwrap();
        assert!(options.is_lazy_loaded("libgroup/lazy"));
        assert_eq!(options.lazy_load().collect::<Vec<_>>(), ["libgroup/lazy", "other"]);
    }

    #[test]
    fn test_invalid_lazy_names() {
        for name in ["", "  ", "@mycompany/lazy", "./lazy"] {
            let err = RuleOptions::new(Vec::<String>::new(), [name]).unwrap_err();
            assert!(matches!(err, BoundaryError::InvalidLazyLoadName { .. }), "{name:?}");
        }
    }
}
