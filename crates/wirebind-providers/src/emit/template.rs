//! Handlebars registration emitter
//!
//! Renders validated registrations into a partial class wiring the runtime
//! service registry. Constant registrations are skipped: caller code already
//! registers the instance.

use super::EmitOptions;
use crate::constants::{
    GENERATED_METHOD_NAME, GLOBAL_ALIAS_PREFIX, KEYWORD_TYPE_NAMES, TEMPLATE_EMITTER_NAME,
};
use handlebars::Handlebars;
use serde::Serialize;
use wirebind_domain::error::{Error, Result};
use wirebind_domain::ports::RegistrationEmitter;
use wirebind_domain::value_objects::{DependencyKind, RegistrationKind, RegistrationRecord};

const REGISTRATIONS_TEMPLATE: &str = "registrations";
const CONSTRUCTION_PARTIAL: &str = "construction";

const REGISTRATIONS_SOURCE: &str = r"// <auto-generated />
#nullable enable

namespace {{namespace}}
{
    internal static partial class {{class_name}}
    {
        static partial void {{method_name}}()
        {
{{#each registrations}}
{{#if lazy}}
            {
                var lazy = new global::System.Lazy<{{interface}}>(() => {{> construction}}{{#if mode}}, {{mode}}{{/if}});
                {{@root.resolver}}.Register(() => lazy, typeof(global::System.Lazy<{{interface}}>){{#if contract}}, {{contract}}{{/if}});
                {{@root.resolver}}.Register(() => lazy.Value, typeof({{interface}}){{#if contract}}, {{contract}}{{/if}});
            }
{{else}}
            {{@root.resolver}}.Register(() => {{> construction}}, typeof({{interface}}){{#if contract}}, {{contract}}{{/if}});
{{/if}}
{{/each}}
        }
    }
}
";

const CONSTRUCTION_SOURCE: &str = "new {{concrete}}({{#each arguments}}{{this}}{{#unless @last}}, {{/unless}}{{/each}}){{#if properties}} { {{#each properties}}{{name}} = {{value}}{{#unless @last}}, {{/unless}}{{/each}} }{{/if}}";

#[derive(Serialize)]
struct ClassView<'a> {
    namespace: &'a str,
    class_name: &'a str,
    method_name: &'a str,
    resolver: &'a str,
    registrations: Vec<RegistrationView>,
}

#[derive(Serialize)]
struct RegistrationView {
    interface: String,
    concrete: String,
    arguments: Vec<String>,
    properties: Vec<PropertyView>,
    contract: Option<String>,
    lazy: bool,
    mode: Option<String>,
}

#[derive(Serialize)]
struct PropertyView {
    name: String,
    value: String,
}

/// Template-driven [`RegistrationEmitter`]
pub struct TemplateEmitter {
    registry: Handlebars<'static>,
    options: EmitOptions,
}

impl TemplateEmitter {
    /// Create an emitter with the built-in templates
    pub fn new(options: EmitOptions) -> Result<Self> {
        let mut registry = Handlebars::new();
        // Emitted code is C#, not HTML
        registry.register_escape_fn(handlebars::no_escape);
        registry
            .register_partial(CONSTRUCTION_PARTIAL, CONSTRUCTION_SOURCE)
            .map_err(|e| Error::emit_with_source("Invalid construction template", e))?;
        registry
            .register_template_string(REGISTRATIONS_TEMPLATE, REGISTRATIONS_SOURCE)
            .map_err(|e| Error::emit_with_source("Invalid registrations template", e))?;
        Ok(Self { registry, options })
    }

    pub fn options(&self) -> &EmitOptions {
        &self.options
    }

    fn registration_view(&self, record: &RegistrationRecord) -> RegistrationView {
        let resolver = self.options.resolver.as_str();
        RegistrationView {
            interface: global_name(record.interface.name()),
            concrete: global_name(record.concrete.name()),
            arguments: record
                .constructor_dependencies
                .iter()
                .map(|d| resolve_expression(resolver, &d.kind))
                .collect(),
            properties: record
                .property_dependencies
                .iter()
                .map(|d| PropertyView {
                    name: d.name.clone(),
                    value: resolve_expression(resolver, &d.kind),
                })
                .collect(),
            contract: record.contract.clone(),
            lazy: record.is_lazy_singleton(),
            mode: record.mode().map(str::to_string),
        }
    }
}

impl RegistrationEmitter for TemplateEmitter {
    fn emit(&self, records: &[RegistrationRecord]) -> Result<String> {
        let registrations: Vec<RegistrationView> = records
            .iter()
            .filter(|record| !matches!(record.kind, RegistrationKind::Constant))
            .map(|record| self.registration_view(record))
            .collect();
        tracing::debug!(
            emitter = TEMPLATE_EMITTER_NAME,
            registrations = registrations.len(),
            "rendering registrations"
        );

        let view = ClassView {
            namespace: &self.options.namespace,
            class_name: &self.options.class_name,
            method_name: GENERATED_METHOD_NAME,
            resolver: &self.options.resolver,
            registrations,
        };
        self.registry
            .render(REGISTRATIONS_TEMPLATE, &view)
            .map_err(|e| Error::emit_with_source("Failed to render registrations", e))
    }

    fn emitter_name(&self) -> &str {
        TEMPLATE_EMITTER_NAME
    }
}

/// Registry lookup expression for one dependency
fn resolve_expression(resolver: &str, kind: &DependencyKind) -> String {
    match kind {
        DependencyKind::Plain(ty) => {
            let ty = global_name(ty.name());
            format!("({ty}){resolver}.GetService(typeof({ty}))")
        }
        DependencyKind::Deferred(ty) => {
            let ty = format!("global::System.Lazy<{}>", global_name(ty.name()));
            format!("({ty}){resolver}.GetService(typeof({ty}))")
        }
        DependencyKind::CollectionOf(ty) => {
            format!("{resolver}.GetServices<{}>()", global_name(ty.name()))
        }
    }
}

/// Prefix every qualified name in a display string with `global::`
///
/// `Ns.Map<Ns.Key, int>` becomes `global::Ns.Map<global::Ns.Key, int>`.
/// Keyword types and names already carrying an alias qualifier
/// (`global::Ns.Key`) are left as they are.
pub fn global_name(display: &str) -> String {
    let mut out = String::with_capacity(display.len() + GLOBAL_ALIAS_PREFIX.len());
    let mut at_name_start = true;
    let mut rest = display;
    while let Some(ch) = rest.chars().next() {
        if at_name_start && (ch.is_alphabetic() || ch == '_') {
            let end = rest
                .find(|c: char| !(c.is_alphanumeric() || c == '_' || c == '.'))
                .unwrap_or(rest.len());
            let (name, tail) = rest.split_at(end);
            if !tail.starts_with("::") && !KEYWORD_TYPE_NAMES.contains(&name) {
                out.push_str(GLOBAL_ALIAS_PREFIX);
            }
            out.push_str(name);
            rest = tail;
            at_name_start = false;
            continue;
        }
        if !ch.is_whitespace() || !at_name_start {
            at_name_start = matches!(ch, '<' | ',' | '(');
        }
        out.push(ch);
        rest = &rest[ch.len_utf8()..];
    }
    out
}
