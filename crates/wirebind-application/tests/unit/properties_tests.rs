//! Tests for property injection discovery

use crate::support::{PROPERTY_MARKER, known, model, site, ty};
use wirebind_application::discover_properties;
use wirebind_domain::diagnostics::Diagnostic;
use wirebind_domain::value_objects::{Dependency, DependencyKind, Location};

fn discover(yaml: &str, concrete: &str) -> Result<Vec<Dependency>, Vec<Diagnostic>> {
    let model = model(yaml);
    let known = known(&model);
    discover_properties(&model, &known, &ty(&model, concrete), &site()).map_err(Vec::from)
}

fn hierarchy() -> String {
    format!(
        r"
types:
  - name: Test.Root
    properties:
      - {{ name: Clock, type: Test.IClock, setter: public, attributes: [{PROPERTY_MARKER}] }}
      - {{ name: Plugins, type: System.Collections.Generic.IEnumerable<Test.IPlugin>, setter: public, attributes: [{PROPERTY_MARKER}] }}
  - name: Test.Middle
    base: Test.Root
    properties:
      - {{ name: Ignored, type: Test.INothing, setter: public }}
  - name: Test.Leaf
    base: Test.Middle
    properties:
      - {{ name: Logger, type: Test.ILogger, setter: internal, attributes: [{PROPERTY_MARKER}] }}
  - name: System.Collections.Generic.IEnumerable<Test.IPlugin>
    definition: System.Collections.Generic.IEnumerable`1
    type_arguments: [Test.IPlugin]
"
    )
}

#[test]
fn test_marked_properties_from_all_levels_most_derived_first() {
    let properties = discover(&hierarchy(), "Test.Leaf").expect("discovery should succeed");
    let names: Vec<&str> = properties.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Logger", "Clock", "Plugins"]);
}

#[test]
fn test_discovered_property_types_are_classified() {
    let properties = discover(&hierarchy(), "Test.Leaf").expect("discovery should succeed");
    assert!(matches!(
        &properties[2].kind,
        DependencyKind::CollectionOf(item) if item.name() == "Test.IPlugin"
    ));
}

#[test]
fn test_type_without_marked_properties_yields_nothing() {
    let yaml = "types:\n  - name: Test.A\n    properties:\n      - { name: P, type: Test.IP, setter: public }\n";
    let properties = discover(yaml, "Test.A").expect("discovery should succeed");
    assert!(properties.is_empty());
}

#[test]
fn test_shadowed_properties_are_kept_at_every_level() {
    let yaml = format!(
        r"
types:
  - name: Test.Base
    properties:
      - {{ name: Logger, type: Test.ILogger, setter: public, attributes: [{PROPERTY_MARKER}] }}
  - name: Test.Derived
    base: Test.Base
    properties:
      - {{ name: Logger, type: Test.ILogger, setter: public, attributes: [{PROPERTY_MARKER}] }}
"
    );
    let properties = discover(&yaml, "Test.Derived").expect("discovery should succeed");
    assert_eq!(properties.len(), 2);
}

#[test]
fn test_get_only_property_yields_d002_at_property() {
    let yaml = format!(
        r"
types:
  - name: Test.Base
    properties:
      - name: Logger
        type: Test.ILogger
        attributes: [{PROPERTY_MARKER}]
        location: {{ file: Base.cs, line: 6, column: 23 }}
  - name: Test.Derived
    base: Test.Base
"
    );
    let diagnostics = discover(&yaml, "Test.Derived").expect_err("discovery should fail");
    assert_eq!(diagnostics.len(), 1);
    assert!(matches!(
        &diagnostics[0],
        Diagnostic::PropertyMustBeSettable { property, .. } if property == "Test.Base.Logger"
    ));
    assert_eq!(diagnostics[0].location(), &Location::new("Base.cs", 6, 23));
}

#[test]
fn test_private_setter_yields_d002_at_setter() {
    let yaml = format!(
        r"
types:
  - name: Test.A
    properties:
      - name: Logger
        type: Test.ILogger
        setter: private
        attributes: [{PROPERTY_MARKER}]
        location: {{ file: A.cs, line: 6, column: 23 }}
        setter_location: {{ file: A.cs, line: 6, column: 45 }}
"
    );
    let diagnostics = discover(&yaml, "Test.A").expect_err("discovery should fail");
    assert_eq!(diagnostics[0].id(), "D002");
    assert_eq!(diagnostics[0].location(), &Location::new("A.cs", 6, 45));
}

#[test]
fn test_unlocated_property_reports_at_site() {
    let yaml = format!(
        "types:\n  - name: Test.A\n    properties:\n      - {{ name: P, type: Test.IP, setter: protected, attributes: [{PROPERTY_MARKER}] }}\n"
    );
    let diagnostics = discover(&yaml, "Test.A").expect_err("discovery should fail");
    assert_eq!(diagnostics[0].location(), &site());
}
