//! Integration tests from configuration files on disk to diagnostics.

mod common;

use bulwark_boundaries::{ModuleBoundaryRule, RuleOptions, ViolationKind, WorkspaceTopology};
use bulwark_config::{ConfigError, WorkspaceManifest};
use bulwark_test::{TempWorkspace, import_from, setup_test_logging_default};

const MANIFEST: &str = r#"
namespace = "acme"

[[projects]]
name = "shared/ui"
root = "libs/shared/ui"

[[projects]]
name = "admin"
root = "libs/admin"

[[projects]]
name = "portal"
root = "apps/portal"

[rules]
allow = ["@acme/shared/ui/testing/**"]
lazy_load = ["admin"]
"#;

fn rule_parts(workspace: &TempWorkspace) -> (WorkspaceTopology, RuleOptions) {
    setup_test_logging_default();
    let (_, manifest) = WorkspaceManifest::discover(workspace.path()).unwrap();
    let topology = WorkspaceTopology::from_manifest(&manifest, workspace.path()).unwrap();
    let options = RuleOptions::from_config(&manifest.rules).unwrap();
    (topology, options)
}

#[test]
fn test_toml_manifest_drives_rule() {
    let workspace = TempWorkspace::new();
    workspace.write("bulwark.toml", MANIFEST);
    let (topology, options) = rule_parts(&workspace);
    let rule = ModuleBoundaryRule::new(&topology, options);

    let source = workspace.join("apps/portal/src/main.ts");
    let verdicts: Vec<Option<ViolationKind>> = [
        "@acme/shared/ui",
        "@acme/shared/ui/button",
        "@acme/shared/ui/testing/harness",
        "@acme/admin",
        "../../../libs/shared/ui",
        "./app.module",
    ]
    .into_iter()
    .map(|specifier| rule.check(&import_from(&source, specifier)).map(|d| d.kind))
    .collect();

    assert_eq!(
        verdicts,
        [
            None,
            Some(ViolationKind::DeepImport),
            None,
            Some(ViolationKind::LazyLoadedImport),
            Some(ViolationKind::MissingScopePrefix),
            None,
        ]
    );
}

#[test]
fn test_legacy_angular_cli_file() {
    let workspace = TempWorkspace::new();
    workspace.write(
        ".angular-cli.json",
        r#"{
            "project": { "name": "acme", "npmScope": "acme" },
            "apps": [
                { "name": "shared/ui", "root": "libs/shared/ui/src" },
                { "name": "portal", "root": "apps/portal/src" }
            ]
        }"#,
    );
    let (topology, options) = rule_parts(&workspace);
    assert_eq!(topology.namespace(), "acme");
    assert!(topology.is_library_name("shared/ui"));
    assert!(topology.is_application_name("portal"));

    let rule = ModuleBoundaryRule::new(&topology, options);
    let diagnostic = rule
        .check(&import_from(workspace.join("libs/shared/ui/src/index.ts"), "@acme/portal"))
        .unwrap();
    assert_eq!(diagnostic.message, "imports of apps are forbidden");
}

#[test]
fn test_toml_preferred_over_legacy_file() {
    let workspace = TempWorkspace::new();
    workspace.write(".angular-cli.json", r#"{"project": {"npmScope": "old"}, "apps": []}"#);
    workspace.write("bulwark.toml", MANIFEST);
    let (topology, _) = rule_parts(&workspace);
    assert_eq!(topology.namespace(), "acme");
}

#[test]
fn test_invalid_manifest_reports_field() {
    let workspace = TempWorkspace::new();
    workspace.write(
        "bulwark.toml",
        "namespace = \"acme\"\n[[projects]]\nname = \"tool\"\nroot = \"tools/tool\"\n",
    );
    let err = WorkspaceManifest::discover(workspace.path()).unwrap_err();
    match err {
        ConfigError::ValidationError { field, .. } => assert_eq!(field, "projects[0].root"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_diagnostics_serialize_to_json() {
    let workspace = TempWorkspace::new();
    workspace.write("bulwark.toml", MANIFEST);
    let (topology, options) = rule_parts(&workspace);
    let rule = ModuleBoundaryRule::new(&topology, options);

    let diagnostic = rule
        .check(&import_from(workspace.join("libs/admin/src/a.ts"), "@acme/shared/ui/x"))
        .unwrap();
    let json = serde_json::to_value(&diagnostic).unwrap();
    assert_eq!(json["kind"], "deep_import");
    assert_eq!(json["message"], "deep imports into libraries are forbidden");
}
