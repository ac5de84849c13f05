use serde::{Deserialize, Serialize};

/// Default base directory for libraries.
pub const DEFAULT_LIBS_DIR: &str = "libs";
/// Default base directory for applications.
pub const DEFAULT_APPS_DIR: &str = "apps";

fn default_libs_dir() -> String {
    DEFAULT_LIBS_DIR.to_owned()
}

fn default_apps_dir() -> String {
    DEFAULT_APPS_DIR.to_owned()
}

/// A workspace manifest (`bulwark.toml` / `bulwark.json`).
///
/// ```toml
/// namespace = "mycompany"
///
/// [[projects]]
/// name = "libgroup/mylib"
/// root = "libs/libgroup/mylib"
///
/// [[projects]]
/// name = "myapp"
/// root = "apps/myapp"
///
/// [rules]
/// allow = ["@mycompany/libgroup/mylib/testing"]
/// lazy_load = ["libgroup/admin"]
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WorkspaceManifest {
    /// Namespace prefix without `@`.
    pub namespace: String,
    /// Base directory for libraries.
    #[serde(default = "default_libs_dir")]
    pub libs_dir: String,
    /// Base directory for applications.
    #[serde(default = "default_apps_dir")]
    pub apps_dir: String,
    /// Libraries and applications.
    #[serde(default)]
    pub projects: Vec<ProjectEntry>,
    /// Module boundary rule options.
    #[serde(default)]
    pub rules: RuleConfig,
}

/// One project in the manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectEntry {
    /// Name as imported after the namespace prefix.
    pub name: String,
    /// Root directory, starting with the libraries or applications directory.
    pub root: String,
}

/// Module boundary rule options.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RuleConfig {
    /// Glob patterns exempting specifiers from every check.
    #[serde(default)]
    pub allow: Vec<String>,
    /// Library names (without namespace) that are lazy-loaded.
    #[serde(default, alias = "lazyLoad")]
    pub lazy_load: Vec<String>,
}

impl RuleConfig {
    /// Append extra allow patterns and lazy-load names (e.g. from flags),
    /// skipping ones already present.
    pub fn extend(&mut self, allow: impl IntoIterator<Item = String>, lazy_load: impl IntoIterator<Item = String>) {
        for pattern in allow {
            if !self.allow.contains(&pattern) {
                self.allow.push(pattern);
            }
        }
        for name in lazy_load {
            if !self.lazy_load.contains(&name) {
                self.lazy_load.push(name);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_applied() {
        let manifest: WorkspaceManifest = toml::from_str(r#"namespace = "acme""#).unwrap();
        assert_eq!(manifest.libs_dir, "libs");
        assert_eq!(manifest.apps_dir, "apps");
        assert!(manifest.projects.is_empty());
        assert_eq!(manifest.rules, RuleConfig::default());
    }

    #[test]
    fn test_lazy_load_camel_case_alias() {
        let rules: RuleConfig =
            serde_json::from_str(r#"{"allow": ["@a/b"], "lazyLoad": ["admin"]}"#).unwrap();
        assert_eq!(rules.lazy_load, ["admin"]);
    }

    #[test]
    fn test_unknown_field_rejected() {
        let result: Result<WorkspaceManifest, _> =
            toml::from_str("namespace = \"acme\"\nnpm_scope = \"acme\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_extend_deduplicates() {
        let mut rules = RuleConfig {
            allow: vec!["@a/x".to_owned()],
            lazy_load: Vec::new(),
        };
        rules.extend(
            ["@a/x".to_owned(), "@a/y".to_owned()],
            ["admin".to_owned(), "admin".to_owned()],
        );
        assert_eq!(rules.allow, ["@a/x", "@a/y"]);
        assert_eq!(rules.lazy_load, ["admin"]);
    }
}
