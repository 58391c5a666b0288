use pragma_inventory::inventory::{
    self, collect_rows, report, InventoryOptions, ReportMode, TraversalOrder, NO_VERSION_SPECIFIED,
    UNKNOWN_FILE,
};
use pragma_inventory::{
    CompilationUnit, Contract, Declaration, DeclarationKind, Filename, PragmaDirective, Project,
    SourceMapping,
};
use std::collections::BTreeSet;

fn file(relative: &str) -> Filename {
    Filename::new(format!("/work/app/{}", relative), relative)
}

fn located(name: &str, unit: &mut CompilationUnit, relative: &str) -> Declaration {
    let scope = unit.add_scope(file(relative));
    Declaration::new(name, scope).with_source(SourceMapping::file(file(relative)))
}

#[test]
fn scenario_a_interface_with_duplicate_pragmas() {
    let mut unit = CompilationUnit::new("main");
    let decl = located("IOracle", &mut unit, "src/IOracle.sol");
    unit.add_pragma(PragmaDirective::new(decl.scope, ["solidity", "^", "0.8", ".0"]));
    unit.add_pragma(PragmaDirective::solidity(decl.scope, "^0.8.0"));
    unit.add_contract(Contract::interface(decl));

    let rows = collect_rows(&Project::new(vec![unit]), &InventoryOptions::default());
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].kind, DeclarationKind::Interface);
    assert_eq!(rows[0].version_range, "^0.8.0");
    assert_eq!(rows[0].file, "src/IOracle.sol");
}

#[test]
fn scenario_b_struct_without_pragma() {
    let mut unit = CompilationUnit::new("main");
    let decl = located("Position", &mut unit, "src/Types.sol");
    let other = unit.add_scope(file("src/Other.sol"));
    unit.add_pragma(PragmaDirective::solidity(other, "0.8.20"));
    unit.add_struct(decl);

    let rows = collect_rows(&Project::new(vec![unit]), &InventoryOptions::default());
    assert_eq!(rows[0].kind, DeclarationKind::Struct);
    assert_eq!(rows[0].version_range, NO_VERSION_SPECIFIED);
}

#[test]
fn scenario_c_vendored_contract_dropped() {
    let mut unit = CompilationUnit::new("main");
    let vendored = Filename::new("node_modules/lib/Foo.sol", "node_modules/lib/Foo.sol");
    let scope = unit.add_scope(vendored.clone());
    unit.add_pragma(PragmaDirective::solidity(scope, "^0.8.0"));
    unit.add_contract(Contract::new(
        Declaration::new("Foo", scope).with_source(SourceMapping::file(vendored)),
    ));

    let output = inventory::generate_report(&Project::new(vec![unit]), &InventoryOptions::default());
    assert_eq!(output.description, report::NONE_FOUND);
    assert!(output.elements.is_empty());
}

#[test]
fn scenario_d_empty_project() {
    let output = inventory::generate_report(&Project::default(), &InventoryOptions::default());
    assert_eq!(output.description, report::NONE_FOUND);
    assert!(output.tables().next().is_none());

    let interfaces = InventoryOptions {
        mode: ReportMode::InterfacesOnly,
        ..Default::default()
    };
    let output = inventory::generate_report(&Project::default(), &interfaces);
    assert_eq!(output.description, report::NO_INTERFACES_FOUND);
}

#[test]
fn scenario_e_missing_location() {
    let mut unit = CompilationUnit::new("main");
    let scope = unit.add_scope(file("legacy/Old.sol"));
    unit.add_pragma(PragmaDirective::solidity(scope, "0.7.6"));
    unit.add_enum(Declaration::new("Status", scope));

    let rows = collect_rows(&Project::new(vec![unit]), &InventoryOptions::default());
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].file, UNKNOWN_FILE);
    assert_eq!(rows[0].version_range, "0.7.6");
}

/// Two units, several scopes, a shared scope and a vendored tree.
fn mixed_project() -> Project {
    let mut core = CompilationUnit::new("core");
    let vault = located("Vault", &mut core, "src/Vault.sol");
    core.scopes.include(vault.scope, file("src/VaultTypes.sol"));
    core.add_pragma(PragmaDirective::solidity(vault.scope, ">=0.8.0"));
    core.add_pragma(PragmaDirective::solidity(vault.scope, "<0.9.0"));
    core.add_pragma(PragmaDirective::new(vault.scope, ["abicoder", "v2"]));
    core.add_struct(
        Declaration::new("Share", vault.scope)
            .with_source(SourceMapping::file(file("src/VaultTypes.sol"))),
    );
    core.add_contract(Contract::new(vault));

    let math = located("FixedMath", &mut core, "src/FixedMath.sol");
    core.add_pragma(PragmaDirective::solidity(math.scope, "^0.8.19"));
    core.add_contract(Contract::library(math));
    core.add_error(Declaration::new("Overflow", core.contracts[1].declaration.scope));

    let dep = Filename::new("/work/app/node_modules/@oz/IERC20.sol", "node_modules/@oz/IERC20.sol");
    let dep_scope = core.add_scope(dep.clone());
    core.add_contract(Contract::interface(
        Declaration::new("IERC20", dep_scope).with_source(SourceMapping::file(dep)),
    ));

    let mut periphery = CompilationUnit::new("periphery");
    let router = located("IRouter", &mut periphery, "src/IRouter.sol");
    periphery.add_pragma(PragmaDirective::solidity(router.scope, "^0.8.0"));
    periphery.add_event(Declaration::new("Swapped", router.scope));
    periphery.add_contract(Contract {
        declaration: router,
        is_interface: true,
        is_library: true,
    });

    Project::new(vec![core, periphery])
}

#[test]
fn vendored_paths_never_reported() {
    let rows = collect_rows(&mixed_project(), &InventoryOptions::default());
    assert!(rows.iter().all(|r| r.name != "IERC20"));
    assert!(rows.iter().all(|r| !r.file.contains("node_modules")));
}

#[test]
fn shared_scope_rows_use_scope_pragmas() {
    let rows = collect_rows(&mixed_project(), &InventoryOptions::default());
    let share = rows.iter().find(|r| r.name == "Share").unwrap();
    assert_eq!(share.file, "src/VaultTypes.sol");

    let versions: BTreeSet<&str> = share.version_range.split(", ").collect();
    assert_eq!(versions, BTreeSet::from([">=0.8.0", "<0.9.0"]));

    let overflow = rows.iter().find(|r| r.name == "Overflow").unwrap();
    assert_eq!(overflow.version_range, "^0.8.19");
}

#[test]
fn contract_like_declarations_land_in_one_bucket() {
    let project = mixed_project();
    let rows = collect_rows(&project, &InventoryOptions::default());

    for unit in &project.compilation_units {
        for contract in &unit.contracts {
            let hits = rows
                .iter()
                .filter(|r| r.name == contract.declaration.name && r.kind.is_contract_like())
                .count();
            let expected = if contract.declaration.name == "IERC20" { 0 } else { 1 };
            assert_eq!(hits, expected, "{}", contract.declaration.name);
        }
    }

    let router = rows.iter().find(|r| r.name == "IRouter").unwrap();
    assert_eq!(router.kind, DeclarationKind::Interface);
}

#[test]
fn category_major_order() {
    let rows = collect_rows(&mixed_project(), &InventoryOptions::default());
    let order: Vec<(&str, DeclarationKind)> = rows.iter().map(|r| (r.name.as_str(), r.kind)).collect();
    assert_eq!(
        order,
        vec![
            ("Vault", DeclarationKind::Contract),
            ("IRouter", DeclarationKind::Interface),
            ("FixedMath", DeclarationKind::Library),
            ("Share", DeclarationKind::Struct),
            ("Swapped", DeclarationKind::Event),
            ("Overflow", DeclarationKind::Error),
        ]
    );
}

#[test]
fn unit_major_order() {
    let options = InventoryOptions {
        order: TraversalOrder::UnitMajor,
        ..Default::default()
    };
    let rows = collect_rows(&mixed_project(), &options);
    let names: Vec<&str> = rows.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["Vault", "FixedMath", "Share", "Overflow", "IRouter", "Swapped"]);
}

#[test]
fn no_version_iff_no_scope_pragma() {
    let project = mixed_project();
    let rows = collect_rows(&project, &InventoryOptions::default());
    let swapped = rows.iter().find(|r| r.name == "Swapped").unwrap();
    assert_ne!(swapped.version_range, NO_VERSION_SPECIFIED);

    let mut unit = CompilationUnit::new("bare");
    let scope = unit.add_scope(file("src/Bare.sol"));
    unit.add_pragma(PragmaDirective::new(scope, ["experimental", "ABIEncoderV2"]));
    unit.add_event(Declaration::new("Ping", scope));
    let rows = collect_rows(&Project::new(vec![unit]), &InventoryOptions::default());
    assert_eq!(rows[0].version_range, NO_VERSION_SPECIFIED);
}

#[test]
fn report_is_idempotent() {
    let project = mixed_project();
    let options = InventoryOptions::default();
    let first = inventory::generate_report(&project, &options);
    let second = inventory::generate_report(&project, &options);

    assert_eq!(first, second);
    assert_eq!(first.to_json().unwrap(), second.to_json().unwrap());
}

#[test]
fn summary_count_matches_table() {
    let output = inventory::generate_report(&mixed_project(), &InventoryOptions::default());
    let table = output.table(report::INVENTORY_TABLE).unwrap();

    assert_eq!(table.len(), 6);
    assert!(output.description.starts_with("Found 6 item(s):"));
}

#[test]
fn interfaces_only_report() {
    let options = InventoryOptions {
        mode: ReportMode::InterfacesOnly,
        ..Default::default()
    };
    let output = inventory::generate_report(&mixed_project(), &options);
    let table = output.table(report::INTERFACES_TABLE).unwrap();

    assert_eq!(table.field_names, vec!["Interface Name", "File", "Pragma Version"]);
    assert_eq!(table.rows, vec![vec!["IRouter", "src/IRouter.sol", "^0.8.0"]]);
}

#[test]
fn extra_vendor_marker() {
    let options = InventoryOptions {
        vendor_markers: vec!["FixedMath".to_string()],
        ..Default::default()
    };
    let rows = collect_rows(&mixed_project(), &options);
    assert!(rows.iter().all(|r| r.name != "FixedMath"));
    // Overflow has no location, so the marker cannot apply
    assert!(rows.iter().any(|r| r.name == "Overflow"));
}

#[test]
fn snapshot_json_roundtrip_report() {
    let project = mixed_project();
    let json = serde_json::to_string(&project).unwrap();
    let loaded = Project::from_json_str(&json).unwrap();

    let options = InventoryOptions::default();
    assert_eq!(collect_rows(&loaded, &options), collect_rows(&project, &options));
}
