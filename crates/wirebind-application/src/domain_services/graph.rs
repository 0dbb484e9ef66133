//! Dependency Graph Validator
//!
//! Whole-set checks over the collected registration records.
//!
//! Pass 1 builds the lookup map (first registration per interface wins) and
//! warns about later duplicates. Pass 2 checks each record independently for
//! circular constructor dependencies and for lazy parameters whose target is
//! not a lazy singleton. Failed records are filtered out; records with only
//! warnings are kept.

use crate::options::CycleDetection;
use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet};
use wirebind_domain::diagnostics::Diagnostic;
use wirebind_domain::value_objects::{Dependency, DependencyKind, RegistrationRecord};

/// Records that passed validation, and everything reported on the way
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Validated {
    pub records: Vec<RegistrationRecord>,
    pub diagnostics: Vec<Diagnostic>,
}

/// Constructor dependency edges between registered interfaces
///
/// Only `Plain` dependencies are edges: lazy wrappers defer construction and
/// collections are not resolved through the lookup map.
struct DependencyGraph<'a> {
    edges: HashMap<&'a str, Vec<&'a str>>,
}

impl<'a> DependencyGraph<'a> {
    fn new(registry: &HashMap<&'a str, &'a RegistrationRecord>) -> Self {
        let edges = registry
            .iter()
            .map(|(key, record)| {
                let mut targets: Vec<&'a str> = Vec::new();
                for dependency in &record.constructor_dependencies {
                    if let DependencyKind::Plain(ty) = &dependency.kind {
                        let name = ty.name();
                        if registry.contains_key(name) && !targets.contains(&name) {
                            targets.push(name);
                        }
                    }
                }
                (*key, targets)
            })
            .collect();
        Self { edges }
    }

    fn successors(&self, node: &str) -> &[&'a str] {
        self.edges.get(node).map(Vec::as_slice).unwrap_or_default()
    }

    /// Path `[from, .., to]` of at least one edge, if any
    fn path(&self, from: &'a str, to: &str, detection: CycleDetection) -> Option<Vec<&'a str>> {
        match detection {
            CycleDetection::Pairwise => self
                .successors(from)
                .iter()
                .find(|next| **next == to)
                .map(|next| vec![from, *next]),
            CycleDetection::Full => {
                let mut visited = HashSet::from([from]);
                let mut path = Vec::new();
                self.search(from, to, &mut visited, &mut path).then_some(path)
            }
        }
    }

    fn search(
        &self,
        node: &'a str,
        target: &str,
        visited: &mut HashSet<&'a str>,
        path: &mut Vec<&'a str>,
    ) -> bool {
        path.push(node);
        for &next in self.successors(node) {
            if next == target {
                path.push(next);
                return true;
            }
            if visited.insert(next) && self.search(next, target, visited, path) {
                return true;
            }
        }
        path.pop();
        false
    }
}

/// Validator over a complete registration set
#[derive(Debug, Clone, Copy, Default)]
pub struct DependencyGraphValidator {
    detection: CycleDetection,
}

impl DependencyGraphValidator {
    pub fn new(detection: CycleDetection) -> Self {
        Self { detection }
    }

    /// Validate `records`; output keeps input order
    pub fn validate(&self, records: &[RegistrationRecord]) -> Validated {
        let mut diagnostics = Vec::new();

        let mut registry: HashMap<&str, &RegistrationRecord> = HashMap::new();
        for record in records {
            match registry.entry(record.key()) {
                Entry::Vacant(slot) => {
                    slot.insert(record);
                }
                Entry::Occupied(_) => {
                    diagnostics.push(Diagnostic::InterfaceRegisteredMultipleTimes {
                        interface: record.key().to_string(),
                        location: record.location.clone(),
                    });
                }
            }
        }

        let graph = DependencyGraph::new(&registry);
        let mut reported_cycles: HashSet<Vec<&str>> = HashSet::new();
        let mut valid = Vec::new();

        for record in records {
            let cyclic = self.check_cycles(record, &graph, &mut reported_cycles, &mut diagnostics);
            let mismatched = check_lazy_targets(record, &registry, &mut diagnostics);
            if cyclic || mismatched {
                tracing::debug!(
                    interface = record.key(),
                    concrete = record.concrete.name(),
                    "registration rejected by graph validation"
                );
            } else {
                valid.push(record.clone());
            }
        }

        Validated {
            records: valid,
            diagnostics,
        }
    }

    fn check_cycles<'a>(
        &self,
        record: &'a RegistrationRecord,
        graph: &DependencyGraph<'a>,
        reported: &mut HashSet<Vec<&'a str>>,
        diagnostics: &mut Vec<Diagnostic>,
    ) -> bool {
        let mut cyclic = false;
        for dependency in &record.constructor_dependencies {
            let DependencyKind::Plain(ty) = &dependency.kind else {
                continue;
            };
            let Some(path) = graph.path(ty.name(), record.key(), self.detection) else {
                continue;
            };
            cyclic = true;

            // A self-dependency closes the cycle on its own edge
            let mut cycle = Vec::with_capacity(path.len() + 1);
            if path[0] != record.key() {
                cycle.push(record.key());
            }
            cycle.extend(path);

            if reported.insert(cycle_identity(&cycle)) {
                diagnostics.push(Diagnostic::ConstructorsMustNotHaveCircularDependency {
                    type_name: record.concrete.name().to_string(),
                    cycle: cycle.join(" -> "),
                    location: dependency_location(record, dependency),
                });
            }
        }
        cyclic
    }
}

fn check_lazy_targets(
    record: &RegistrationRecord,
    registry: &HashMap<&str, &RegistrationRecord>,
    diagnostics: &mut Vec<Diagnostic>,
) -> bool {
    let mut mismatched = false;
    for dependency in &record.constructor_dependencies {
        let DependencyKind::Deferred(inner) = &dependency.kind else {
            continue;
        };
        let Some(target) = registry.get(inner.name()) else {
            continue;
        };
        if !target.is_lazy_singleton() {
            mismatched = true;
            diagnostics.push(Diagnostic::LazyParameterNotRegisteredLazy {
                type_name: record.concrete.name().to_string(),
                parameter: dependency.name.clone(),
                target: inner.name().to_string(),
                location: dependency_location(record, dependency),
            });
        }
    }
    mismatched
}

fn dependency_location(
    record: &RegistrationRecord,
    dependency: &Dependency,
) -> wirebind_domain::value_objects::Location {
    dependency
        .location
        .clone()
        .unwrap_or_else(|| record.location.clone())
}

/// Rotation-independent identity of a closed cycle `[a, .., a]`
fn cycle_identity<'a>(cycle: &[&'a str]) -> Vec<&'a str> {
    let nodes = &cycle[..cycle.len() - 1];
    let start = nodes
        .iter()
        .enumerate()
        .min_by_key(|(_, name)| **name)
        .map_or(0, |(index, _)| index);
    nodes[start..].iter().chain(&nodes[..start]).copied().collect()
}
