//! Tests for the handlebars registration emitter

use wirebind_domain::value_objects::{
    Dependency, DependencyKind, Location, RegistrationKind, RegistrationRecord, SymbolId, TypeRef,
};
use wirebind_domain::RegistrationEmitter;
use wirebind_providers::emit::{EmitOptions, TemplateEmitter, global_name};

fn ty(id: u32, name: &str) -> TypeRef {
    TypeRef::new(SymbolId(id), name)
}

fn record(interface: &str, concrete: &str, kind: RegistrationKind) -> RegistrationRecord {
    RegistrationRecord {
        interface: ty(1, interface),
        concrete: ty(2, concrete),
        constructor_dependencies: Vec::new(),
        property_dependencies: Vec::new(),
        contract: None,
        kind,
        location: Location::new("Program.cs", 10, 9),
    }
}

fn emitter() -> TemplateEmitter {
    TemplateEmitter::new(EmitOptions::default()).expect("built-in templates should compile")
}

#[test]
fn test_transient_registration_constructs_with_resolved_arguments() {
    let mut transient = record("Test.IService1", "Test.Service1", RegistrationKind::Transient);
    transient.constructor_dependencies = vec![
        Dependency::new("a", DependencyKind::Plain(ty(3, "Test.IService2")), None),
        Dependency::new("b", DependencyKind::CollectionOf(ty(4, "Test.IPlugin")), None),
    ];
    transient.contract = Some("\"Test1\"".to_string());

    let code = emitter().emit(&[transient]).expect("emission should succeed");

    assert!(code.contains(
        "global::Wirebind.Locator.CurrentMutable.Register(() => new global::Test.Service1(\
         (global::Test.IService2)global::Wirebind.Locator.CurrentMutable.GetService(typeof(global::Test.IService2)), \
         global::Wirebind.Locator.CurrentMutable.GetServices<global::Test.IPlugin>()), \
         typeof(global::Test.IService1), \"Test1\");"
    ));
}

#[test]
fn test_property_dependencies_use_object_initializer() {
    let mut transient = record("Test.IService1", "Test.Service1", RegistrationKind::Transient);
    transient.property_dependencies = vec![Dependency::new(
        "Logger",
        DependencyKind::Plain(ty(3, "Test.ILogger")),
        None,
    )];

    let code = emitter().emit(&[transient]).expect("emission should succeed");

    assert!(code.contains("new global::Test.Service1() { Logger = (global::Test.ILogger)"));
}

#[test]
fn test_lazy_singleton_registers_wrapper_and_value() {
    let lazy = record(
        "Test.IService2",
        "Test.Service2",
        RegistrationKind::LazySingleton {
            mode: Some("System.Threading.LazyThreadSafetyMode.PublicationOnly".to_string()),
        },
    );

    let code = emitter().emit(&[lazy]).expect("emission should succeed");

    assert!(code.contains(
        "new global::System.Lazy<global::Test.IService2>(() => new global::Test.Service2(), \
         System.Threading.LazyThreadSafetyMode.PublicationOnly);"
    ));
    assert!(code.contains("Register(() => lazy, typeof(global::System.Lazy<global::Test.IService2>));"));
    assert!(code.contains("Register(() => lazy.Value, typeof(global::Test.IService2));"));
}

#[test]
fn test_deferred_dependency_resolves_lazy_wrapper() {
    let mut transient = record("Test.IService1", "Test.Service1", RegistrationKind::Transient);
    transient.constructor_dependencies = vec![Dependency::new(
        "other",
        DependencyKind::Deferred(ty(3, "Test.IService2")),
        None,
    )];

    let code = emitter().emit(&[transient]).expect("emission should succeed");

    assert!(code.contains(
        "(global::System.Lazy<global::Test.IService2>)global::Wirebind.Locator.CurrentMutable\
         .GetService(typeof(global::System.Lazy<global::Test.IService2>))"
    ));
}

#[test]
fn test_constant_registrations_are_not_emitted() {
    let constant = record("Test.IConfig", "Test.IConfig", RegistrationKind::Constant);
    let code = emitter().emit(&[constant]).expect("emission should succeed");
    assert!(!code.contains("Test.IConfig"));
}

#[test]
fn test_options_shape_the_class() {
    let options = EmitOptions {
        namespace: "MyApp".to_string(),
        class_name: "Wiring".to_string(),
        resolver: "Locator".to_string(),
    };
    let emitter = TemplateEmitter::new(options).expect("built-in templates should compile");
    let code = emitter
        .emit(&[record("Test.IA", "Test.A", RegistrationKind::Transient)])
        .expect("emission should succeed");

    assert!(code.contains("namespace MyApp"));
    assert!(code.contains("partial class Wiring"));
    assert!(code.contains("Locator.Register(() => new global::Test.A(), typeof(global::Test.IA));"));
    assert_eq!(emitter.emitter_name(), "template");
}

#[test]
fn test_emission_is_deterministic() {
    let records = vec![
        record("Test.IA", "Test.A", RegistrationKind::Transient),
        record("Test.IB", "Test.B", RegistrationKind::LazySingleton { mode: None }),
    ];
    let emitter = emitter();
    let first = emitter.emit(&records).expect("emission should succeed");
    let second = emitter.emit(&records).expect("emission should succeed");
    assert_eq!(first, second);
    assert!(first.find("Test.A(").unwrap() < first.find("Test.B(").unwrap());
}

#[test]
fn test_global_name_prefixes_generic_arguments() {
    assert_eq!(global_name("Ns.Type"), "global::Ns.Type");
    assert_eq!(
        global_name("Ns.Map<Ns.Key, Ns.Value>"),
        "global::Ns.Map<global::Ns.Key, global::Ns.Value>"
    );
    assert_eq!(global_name("global::Ns.Type"), "global::Ns.Type");
}

#[test]
fn test_global_name_leaves_keyword_types() {
    assert_eq!(global_name("int"), "int");
    assert_eq!(
        global_name("System.Collections.Generic.IEnumerable<int>"),
        "global::System.Collections.Generic.IEnumerable<int>"
    );
    assert_eq!(global_name("(Ns.A, string)"), "(global::Ns.A, string)");
    assert_eq!(
        global_name("Ns.Map<string, bool?>"),
        "global::Ns.Map<string, bool?>"
    );
    // Only whole identifiers are keywords
    assert_eq!(global_name("Ns.Holder<integer>"), "global::Ns.Holder<global::integer>");
}

#[test]
fn test_global_name_skips_qualified_arguments() {
    assert_eq!(
        global_name("Ns.Map<global::Ns.Key, Ns.Value>"),
        "global::Ns.Map<global::Ns.Key, global::Ns.Value>"
    );
    assert_eq!(
        global_name("global::Ns.Outer<global::Ns.Inner>"),
        "global::Ns.Outer<global::Ns.Inner>"
    );
}

#[test]
fn test_emitted_keyword_dependency_is_not_qualified() {
    let mut record = record("Test.IService", "Test.Service", RegistrationKind::Transient);
    record.constructor_dependencies.push(Dependency::new(
        "count",
        DependencyKind::Plain(ty(3, "int")),
        None,
    ));
    let code = emitter().emit(&[record]).expect("emit");
    assert!(code.contains("(int)global::Wirebind.Locator.CurrentMutable.GetService(typeof(int))"));
    assert!(!code.contains("global::int"));
}
