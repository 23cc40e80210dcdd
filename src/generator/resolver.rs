//! Dependency usage tracking and fetch emission.
//!
//! The resolver knows every library alias imported by the manifest's
//! dependencies. While targets are emitted it records which conditions gate
//! each alias; once all targets are scanned, [`DependencyResolver::flush`]
//! writes one fetch directive per used alias, gated by the conditions
//! recorded for that alias.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::core::dependency::{Dependency, SourceKind};
use crate::generator::condition;
use crate::generator::errors::GenerateError;
use crate::generator::writer::{quote, ScriptWriter};

/// List variable collecting native packages for bulk installation.
pub const NATIVE_PACKAGES_VAR: &str = "ENABLED_NATIVE_PACKAGES";

/// How recorded usage conditions combine into a fetch gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FetchGate {
    /// Every distinct recorded condition must hold (`(a) AND (b)`).
    ///
    /// A dependency shared by targets with mutually exclusive requirements
    /// is never fetched under this gate.
    #[default]
    All,

    /// Fetch when any single usage is enabled.
    Any,
}

impl FetchGate {
    /// Render the gate for a set of usages, before normalization.
    pub fn render(&self, usages: &BTreeSet<Usage<'_>>) -> String {
        match self {
            FetchGate::All => {
                let distinct: BTreeSet<&str> = usages.iter().flat_map(Usage::conditions).collect();
                distinct
                    .iter()
                    .map(|c| format!("({})", c))
                    .collect::<Vec<_>>()
                    .join(" AND ")
            }
            FetchGate::Any => usages
                .iter()
                .map(|u| match u.feature {
                    Some(feature) => format!("(({}) AND ({}))", u.requirement, feature),
                    None => format!("({})", u.requirement),
                })
                .collect::<Vec<_>>()
                .join(" OR "),
        }
    }
}

/// One gated reference to a library alias.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Usage<'m> {
    /// Requirement of the referencing target
    pub requirement: &'m str,
    /// Condition of the enclosing target feature, if any
    pub feature: Option<&'m str>,
}

impl<'m> Usage<'m> {
    pub fn new(requirement: &'m str, feature: Option<&'m str>) -> Self {
        Usage {
            requirement,
            feature,
        }
    }

    /// The condition strings this usage contributes.
    pub fn conditions(&self) -> impl Iterator<Item = &'m str> {
        std::iter::once(self.requirement).chain(self.feature)
    }
}

#[derive(Debug, Clone, Copy)]
struct Library<'m> {
    find: &'m str,
    dependency: usize,
}

/// Tracks which dependencies are used and under which conditions.
#[derive(Debug)]
pub struct DependencyResolver<'m> {
    dependencies: &'m [Dependency],
    libraries: HashMap<&'m str, Library<'m>>,
    usages: BTreeMap<&'m str, BTreeSet<Usage<'m>>>,
}

impl<'m> DependencyResolver<'m> {
    /// Index every import of every dependency by alias.
    ///
    /// When two dependencies import the same alias the later one wins.
    pub fn new(dependencies: &'m [Dependency]) -> Result<Self, GenerateError> {
        let mut libraries = HashMap::new();

        for (index, dep) in dependencies.iter().enumerate() {
            if dep.name().is_empty() {
                return Err(GenerateError::EmptyPackageName {
                    package: dep.package.clone(),
                });
            }

            for import in &dep.imports {
                let previous = libraries.insert(
                    import.name.as_str(),
                    Library {
                        find: import.find.as_str(),
                        dependency: index,
                    },
                );

                if previous.is_some() {
                    tracing::debug!(
                        "alias `{}` re-declared by `{}`",
                        import.name,
                        dep.package
                    );
                }
            }
        }

        Ok(DependencyResolver {
            dependencies,
            libraries,
            usages: BTreeMap::new(),
        })
    }

    /// The `find_package` arguments for an alias, if a dependency provides it.
    pub fn find_declaration(&self, alias: &str) -> Option<&'m str> {
        self.libraries.get(alias).map(|lib| lib.find)
    }

    /// Record a gated usage of `alias`.
    ///
    /// Returns false (and records nothing) when no dependency provides it.
    pub fn register_usage(&mut self, alias: &'m str, usage: Usage<'m>) -> bool {
        if !self.libraries.contains_key(alias) {
            return false;
        }

        self.usages.entry(alias).or_default().insert(usage);
        true
    }

    /// Distinct condition strings recorded for an alias.
    pub fn conditions(&self, alias: &str) -> BTreeSet<&'m str> {
        self.usages
            .get(alias)
            .map(|usages| usages.iter().flat_map(Usage::conditions).collect())
            .unwrap_or_default()
    }

    /// Used aliases with their usages, in manifest import order.
    ///
    /// An alias re-declared by a later dependency is listed once, under the
    /// dependency that provides it.
    fn used_aliases(&self) -> Vec<(&'m str, usize, &BTreeSet<Usage<'m>>)> {
        let mut seen = HashSet::new();
        let mut used = Vec::new();

        for (index, dep) in self.dependencies.iter().enumerate() {
            for import in &dep.imports {
                let alias = import.name.as_str();
                let provider = self.libraries.get(alias).map(|lib| lib.dependency);

                if provider != Some(index) || !seen.insert(alias) {
                    continue;
                }
                if let Some(usages) = self.usages.get(alias) {
                    used.push((alias, index, usages));
                }
            }
        }

        used
    }

    /// Emit one fetch directive per used alias, gated by that alias's own
    /// usages.
    ///
    /// Returns the number of directives written.
    pub fn flush(&self, out: &mut ScriptWriter, gate: FetchGate) -> Result<usize, GenerateError> {
        let mut emitted = 0;

        for (alias, index, usages) in self.used_aliases() {
            let dep = &self.dependencies[index];
            let condition = condition::normalize(&gate.render(usages));

            match &dep.from {
                SourceKind::Registry => {
                    out.if_block(&condition);
                    out.call("coil_fetch_pkg", [quote(&dep.package)]);
                    out.end_if();
                }
                SourceKind::Native => {
                    out.if_block(&condition);
                    out.call(
                        "list",
                        ["APPEND", NATIVE_PACKAGES_VAR, quote(&dep.package).as_str()],
                    );
                    out.end_if();
                }
                SourceKind::Url | SourceKind::Git => {
                    let (name, version) = dep.name_and_version().ok_or_else(|| {
                        GenerateError::MissingVersionSeparator {
                            package: dep.package.clone(),
                            from: dep.from.to_string(),
                        }
                    })?;

                    let function = if dep.from == SourceKind::Url {
                        "coil_fetch_url"
                    } else {
                        "coil_fetch_git"
                    };

                    out.if_block(&condition);
                    out.call(function, [quote(name), quote(&dep.path), quote(version)]);
                    out.end_if();
                }
                SourceKind::System => {
                    tracing::debug!("`{}` is provided by the system", dep.package);
                    continue;
                }
                SourceKind::Unsupported(from) => {
                    return Err(GenerateError::UnsupportedProvider {
                        package: dep.package.clone(),
                        from: from.clone(),
                    });
                }
            }

            tracing::debug!("fetch `{}` for `{}` when {}", dep.package, alias, condition);
            emitted += 1;
        }

        Ok(emitted)
    }
}
