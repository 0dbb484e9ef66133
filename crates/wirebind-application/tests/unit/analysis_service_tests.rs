//! End-to-end tests for the analysis use case

use crate::support::{PROPERTY_MARKER, sequential, service};
use wirebind_application::{AnalysisOptions, CycleDetection, WellKnownNames};
use wirebind_domain::diagnostics::Diagnostic;

const BOUND: &str = "binding: { containing_type: Wirebind.Registrations, parameters: [contract, mode] }";

fn invocation(method: &str, types: &str, line: u32) -> String {
    format!(
        "  - {{ method: {method}, type_arguments: [{types}], location: {{ file: Program.cs, line: {line}, column: 9 }}, {BOUND} }}\n"
    )
}

fn test_concrete_model(service2_method: &str) -> String {
    let mut yaml = String::from(
        r"
references: [System.Lazy`1]
types:
  - name: Test.TestConcrete
    base: Test.ITest
    constructors:
      - parameters:
          - { name: service1, type: Test.IService1 }
          - { name: service, type: System.Lazy<Test.IService2> }
  - name: Test.ITest
  - name: Test.Service1
    constructors: [{}]
  - name: Test.Service2
    constructors: [{}]
  - name: System.Lazy<Test.IService2>
    definition: System.Lazy`1
    type_arguments: [Test.IService2]
invocations:
",
    );
    yaml.push_str(&invocation("Register", "Test.ITest, Test.TestConcrete", 10));
    yaml.push_str(&invocation("Register", "Test.IService1, Test.Service1", 11));
    yaml.push_str(&invocation(service2_method, "Test.IService2, Test.Service2", 12));
    yaml
}

#[test]
fn test_end_to_end_lazy_mismatch_rejects_consumer() {
    let (service, sites) = service(&test_concrete_model("Register"), sequential());
    let outcome = service.analyze(&sites);

    assert_eq!(outcome.stats.extracted, 3);
    assert_eq!(outcome.diagnostics.len(), 1);
    assert!(matches!(
        &outcome.diagnostics[0],
        Diagnostic::LazyParameterNotRegisteredLazy { type_name, parameter, target, .. }
            if type_name == "Test.TestConcrete" && parameter == "service" && target == "Test.IService2"
    ));
    let kept: Vec<&str> = outcome.records.iter().map(|r| r.key()).collect();
    assert_eq!(kept, vec!["Test.IService1", "Test.IService2"]);
    assert!(outcome.has_errors());
}

#[test]
fn test_end_to_end_lazy_registration_passes() {
    let (service, sites) = service(&test_concrete_model("RegisterLazySingleton"), sequential());
    let outcome = service.analyze(&sites);

    assert!(outcome.diagnostics.is_empty());
    assert_eq!(outcome.records.len(), 3);
    assert_eq!(outcome.stats.rejected, 0);
}

fn mixed_model() -> String {
    let mut yaml = String::from(
        r"
types:
  - name: Test.CA
    constructors:
      - parameters: [{ name: b, type: Test.IB }]
  - name: Test.CB
    constructors:
      - parameters: [{ name: a, type: Test.IA }]
  - name: Test.Ambiguous
    constructors:
      - {}
      - parameters: [{ name: x, type: Test.IX }]
  - name: Test.Plain
    constructors: [{}]
invocations:
",
    );
    yaml.push_str(&invocation("Register", "Test.IA, Test.CA", 10));
    yaml.push_str(&invocation("Register", "Test.IB, Test.CB", 11));
    yaml.push_str(&invocation("Register", "Test.IX, Test.Ambiguous", 12));
    yaml.push_str(&invocation("Register", "Test.IP, Test.Plain", 13));
    yaml.push_str(&invocation("Register", "Test.IP, Test.Plain", 14));
    yaml.push_str(&invocation("Unrelated", "Test.Plain", 15));
    yaml
}

#[test]
fn test_extraction_diagnostics_precede_validation_diagnostics() {
    let (service, sites) = service(&mixed_model(), sequential());
    let outcome = service.analyze(&sites);

    let ids: Vec<&str> = outcome.diagnostics.iter().map(Diagnostic::id).collect();
    assert_eq!(ids, vec!["D001", "D006", "D005"]);
    assert_eq!(outcome.stats.sites, 6);
    assert_eq!(outcome.stats.skipped, 1);
    assert_eq!(outcome.stats.extracted, 4);
    assert_eq!(outcome.stats.rejected, 3);
    assert_eq!(outcome.stats.errors, 2);
    assert_eq!(outcome.stats.warnings, 1);
    assert_eq!(outcome.records.len(), 2);
}

#[test]
fn test_parallel_and_sequential_analysis_agree() {
    let (sequential_service, sites) = service(&mixed_model(), sequential());
    let (parallel_service, _) = service(&mixed_model(), AnalysisOptions::default());
    assert_eq!(
        sequential_service.analyze(&sites),
        parallel_service.analyze(&sites)
    );
}

#[test]
fn test_repeated_analysis_reuses_cached_extractions() {
    let (service, sites) = service(&mixed_model(), sequential());
    let first = service.analyze(&sites);
    let cold = service.cache_stats();
    assert_eq!(cold.hits, 0);
    // Rejected extractions are never cached; dropped sites are
    assert_eq!(cold.entries, 5);

    let second = service.analyze(&sites);
    let warm = service.cache_stats();
    assert_eq!(first, second);
    assert_eq!(warm.hits, 5);

    service.clear_cache();
    assert_eq!(service.cache_stats().entries, 0);
    assert_eq!(service.cache_stats().hits, 0);
}

#[test]
fn test_pairwise_option_reaches_validator() {
    let mut yaml = String::from(
        r"
types:
  - name: Test.CA
    constructors:
      - parameters: [{ name: b, type: Test.IB }]
  - name: Test.CB
    constructors:
      - parameters: [{ name: c, type: Test.IC }]
  - name: Test.CC
    constructors:
      - parameters: [{ name: a, type: Test.IA }]
invocations:
",
    );
    yaml.push_str(&invocation("Register", "Test.IA, Test.CA", 10));
    yaml.push_str(&invocation("Register", "Test.IB, Test.CB", 11));
    yaml.push_str(&invocation("Register", "Test.IC, Test.CC", 12));

    let pairwise = AnalysisOptions {
        cycle_detection: CycleDetection::Pairwise,
        ..sequential()
    };
    let (service, sites) = service(&yaml, pairwise);
    assert!(service.analyze(&sites).diagnostics.is_empty());

    let (service, sites) = crate::support::service(&yaml, sequential());
    assert_eq!(service.analyze(&sites).diagnostics.len(), 1);
}

#[test]
fn test_custom_marker_names_are_honored() {
    let mut yaml = format!(
        r"
types:
  - name: Test.Service
    constructors: [{{}}]
    properties:
      - {{ name: Default, type: Test.IA, setter: public, attributes: [{PROPERTY_MARKER}] }}
      - {{ name: Custom, type: Test.IB, setter: public, attributes: [My.InjectAttribute] }}
invocations:
"
    );
    yaml.push_str(&invocation("Register", "Test.Service", 10));

    let options = AnalysisOptions {
        well_known: WellKnownNames {
            property_marker: "My.InjectAttribute".to_string(),
            ..WellKnownNames::default()
        },
        ..sequential()
    };
    let (service, sites) = service(&yaml, options);
    let outcome = service.analyze(&sites);
    let names: Vec<&str> = outcome.records[0]
        .property_dependencies
        .iter()
        .map(|d| d.name.as_str())
        .collect();
    assert_eq!(names, vec!["Custom"]);
}
