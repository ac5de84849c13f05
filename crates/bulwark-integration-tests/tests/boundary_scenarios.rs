//! End-to-end boundary scenarios against the reference workspace.

mod common;

use bulwark_boundaries::{ModuleBoundaryRule, RuleOptions, ViolationKind};
use bulwark_test::{
    APP_SOURCE_FILE, LIB_SOURCE_FILE, app_import, lib_import, mycompany_topology, topology_with,
};
use common::{messages, options, run_rule};

#[test]
fn test_everything_in_order() {
    let topology = mycompany_topology();
    let diagnostics = run_rule(
        &topology,
        options(&["@mycompany/libgroup/mylib/deep"], &["myliblazy"]),
        APP_SOURCE_FILE,
        &[
            "@mycompany/libgroup/mylib",
            "@mycompany/libgroup/mylib/deep",
            "../blah",
        ],
    );
    assert!(diagnostics.is_empty(), "{diagnostics:?}");
}

#[test]
fn test_relative_import_within_same_library() {
    let topology = mycompany_topology();
    let diagnostics = run_rule(
        &topology,
        RuleOptions::default(),
        LIB_SOURCE_FILE,
        &["../libgroup/mylib2", "../../libgroup/mylib"],
    );
    assert!(diagnostics.is_empty(), "{diagnostics:?}");
}

#[test]
fn test_relative_import_into_another_library() {
    let topology = mycompany_topology();
    for specifier in ["../../../../libs/libgroup/mylib2", "../../../libgroup/mylib2"] {
        let diagnostics = run_rule(&topology, RuleOptions::default(), LIB_SOURCE_FILE, &[specifier]);
        assert_eq!(
            messages(&diagnostics),
            ["library imports must start with @mycompany/"],
            "{specifier}"
        );
        assert_eq!(diagnostics[0].kind, ViolationKind::MissingScopePrefix);
    }
}

#[test]
fn test_workspace_relative_import_into_library() {
    let topology = mycompany_topology();
    let diagnostics = run_rule(
        &topology,
        RuleOptions::default(),
        APP_SOURCE_FILE,
        &["libs/libgroup/mylib"],
    );
    assert_eq!(
        messages(&diagnostics),
        ["library imports must start with @mycompany/"]
    );
}

#[test]
fn test_deep_import() {
    let topology = mycompany_topology();
    let diagnostics = run_rule(
        &topology,
        RuleOptions::default(),
        APP_SOURCE_FILE,
        &["@mycompany/libgroup/mylib/blah"],
    );
    assert_eq!(
        messages(&diagnostics),
        ["deep imports into libraries are forbidden"]
    );
}

#[test]
fn test_libraries_sharing_a_name_prefix() {
    let forward = [
        ("reporting", "libs/reporting"),
        ("reporting-dashboard-ui", "libs/reporting-dashboard-ui"),
        ("reporting-other", "libs/reporting-other"),
        ("myapp", "apps/myapp"),
    ];
    let mut reversed = forward;
    reversed.reverse();

    for projects in [forward, reversed] {
        let topology = topology_with(&projects);
        let diagnostics = run_rule(
            &topology,
            RuleOptions::default(),
            APP_SOURCE_FILE,
            &[
                "@mycompany/reporting-dashboard-ui",
                "@mycompany/reporting-other",
                "@mycompany/reporting",
            ],
        );
        assert!(diagnostics.is_empty(), "{diagnostics:?}");
    }
}

#[test]
fn test_lazy_loaded_library() {
    let topology = mycompany_topology();
    let diagnostics = run_rule(
        &topology,
        options(&[], &["libgroup/mylib"]),
        APP_SOURCE_FILE,
        &["@mycompany/libgroup/mylib"],
    );
    assert_eq!(
        messages(&diagnostics),
        ["imports of lazy-loaded libraries are forbidden"]
    );
}

#[test]
fn test_app_import_through_namespace() {
    let topology = mycompany_topology();
    let diagnostics = run_rule(
        &topology,
        options(&[], &["libgroup/mylib"]),
        APP_SOURCE_FILE,
        &["@mycompany/myapp", "@mycompany/myapp2"],
    );
    assert_eq!(
        messages(&diagnostics),
        ["imports of apps are forbidden", "imports of apps are forbidden"]
    );
}

#[test]
fn test_library_with_application_name_prefix() {
    let topology = topology_with(&[("myapp/mylib", "libs/myapp/mylib"), ("myapp", "apps/myapp")]);
    let diagnostics = run_rule(
        &topology,
        RuleOptions::default(),
        APP_SOURCE_FILE,
        &["@mycompany/myapp/mylib"],
    );
    assert!(diagnostics.is_empty(), "{diagnostics:?}");
}

#[test]
fn test_namespace_relative_import() {
    let topology = mycompany_topology();
    let diagnostics = run_rule(
        &topology,
        RuleOptions::default(),
        APP_SOURCE_FILE,
        &["@mycompany/./libgroup/mylib", "@mycompany/../x"],
    );
    assert_eq!(
        messages(&diagnostics),
        [
            "relative imports using @mycompany/ are forbidden",
            "relative imports using @mycompany/ are forbidden",
        ]
    );
}

#[test]
fn test_external_and_outside_imports_are_ignored() {
    let topology = mycompany_topology();
    let diagnostics = run_rule(
        &topology,
        RuleOptions::default(),
        APP_SOURCE_FILE,
        &["@angular/core", "rxjs/operators", "../../../../outside", "tools/x"],
    );
    assert!(diagnostics.is_empty(), "{diagnostics:?}");
}

#[test]
fn test_diagnostics_keep_input_order_and_ranges() {
    let topology = mycompany_topology();
    let diagnostics = run_rule(
        &topology,
        RuleOptions::default(),
        APP_SOURCE_FILE,
        &[
            "@mycompany/libgroup/mylib/blah",
            "@mycompany/libgroup/mylib",
            "@mycompany/myapp2",
        ],
    );
    let kinds: Vec<ViolationKind> = diagnostics.iter().map(|d| d.kind).collect();
    assert_eq!(kinds, [ViolationKind::DeepImport, ViolationKind::AppImport]);
    assert_eq!(diagnostics[0].range_length, 32);
    assert!(
        diagnostics
            .iter()
            .all(|d| d.file_path.to_str() == Some(APP_SOURCE_FILE))
    );
}

#[test]
fn test_library_importing_applications() {
    let topology = mycompany_topology();
    let rule = ModuleBoundaryRule::new(&topology, RuleOptions::default());

    let diagnostic = rule.check(&lib_import("@mycompany/myapp2/src/env")).unwrap();
    assert_eq!(diagnostic.kind, ViolationKind::AppImport);
    assert_eq!(diagnostic.file_path.to_str(), Some(LIB_SOURCE_FILE));

    assert!(rule.check(&lib_import("./sibling")).is_none());
    assert!(rule.check(&app_import("@mycompany/libgroup/mylib2")).is_none());
}

#[test]
fn test_app_root_not_shadowed_by_shorter_library_root() {
    let topology = topology_with(&[
        ("shared", "libs/shared"),
        ("other", "libs/other"),
        ("shared-admin", "apps/shared-admin"),
    ]);
    let diagnostics = run_rule(
        &topology,
        RuleOptions::default(),
        "/proj/mycompany/libs/other/src/a.ts",
        &["@mycompany/shared-admin/src/main", "libs/shared-extra/x"],
    );
    assert_eq!(messages(&diagnostics), ["imports of apps are forbidden"]);
}
