//! Target emission.
//!
//! Each target becomes a status line and a conditional block on its
//! requirement. Inside the enabled branch the target is declared,
//! initialized, has its features applied in order, and is finalized.

use crate::core::target::{Target, TargetFeature, TargetKind, Visibility};
use crate::generator::condition::normalize;
use crate::generator::errors::GenerateError;
use crate::generator::resolver::{DependencyResolver, Usage};
use crate::generator::writer::{quote, ScriptWriter};

/// Alias namespaces that need meta-object compilation.
const UI_TOOLKIT_PREFIX: &str = "Qt";

/// Per-target emission state, reset for every target.
#[derive(Debug)]
pub(crate) struct TargetContext<'m> {
    target: &'m Target,
    /// Default visibility for library references
    link: Visibility,
    /// Whether AUTOMOC has been handled for this target
    automoc: bool,
}

impl<'m> TargetContext<'m> {
    pub(crate) fn new(target: &'m Target) -> Self {
        TargetContext {
            target,
            link: target.kind.default_visibility(),
            automoc: false,
        }
    }

    /// Visibility for a library group.
    ///
    /// Header-only targets can only link with INTERFACE.
    fn library_visibility(&self, explicit: Option<Visibility>) -> Visibility {
        if self.target.kind.is_header_only() {
            return Visibility::Interface;
        }

        match explicit {
            Some(Visibility::Interface) | None => self.link,
            Some(v) => v,
        }
    }
}

/// True when an alias lives in the UI toolkit namespace (e.g. `Qt6::Core`).
fn is_ui_toolkit(alias: &str) -> bool {
    alias
        .split_once("::")
        .is_some_and(|(namespace, _)| namespace.starts_with(UI_TOOLKIT_PREFIX))
}

fn declare(out: &mut ScriptWriter, target: &Target) {
    let name = target.name.as_str();

    match target.kind {
        TargetKind::Executable | TargetKind::Test => out.call("add_executable", [name]),
        TargetKind::Application => out.call("coil_create_graphical_app", [name]),
        TargetKind::StaticLibrary => out.call("add_library", [name, "STATIC"]),
        TargetKind::SharedLibrary => out.call("add_library", [name, "${COIL_LIB_TYPE}"]),
        TargetKind::HeaderLibrary => out.call("add_library", [name, "INTERFACE"]),
        TargetKind::Plugin => out.call("add_library", [name, "MODULE"]),
    }
}

/// Emit a target. `index` is zero-based.
pub fn emit_target<'m>(
    out: &mut ScriptWriter,
    resolver: &mut DependencyResolver<'m>,
    target: &'m Target,
    index: usize,
    count: usize,
) -> Result<(), GenerateError> {
    if target.requirement.trim().is_empty() {
        return Err(GenerateError::EmptyRequirement {
            target: target.name.clone(),
        });
    }

    tracing::debug!("emitting target `{}` ({})", target.name, target.kind);

    let status = format!("\"[{:02}/{:02}] {}\"", index + 1, count, target.name);
    out.call("set", ["TARGET_STATUS", status.as_str()]);
    out.if_block(&normalize(&target.requirement));
    out.call("print_status", ["\"${TARGET_STATUS}\""]);

    let mut ctx = TargetContext::new(target);

    declare(out, target);

    let export = if target.export { "on" } else { "off" };
    out.call(
        "coil_init_target",
        [
            target.name.clone(),
            quote(&target.path),
            ctx.link.as_keyword().to_string(),
            target.kind.as_str().to_string(),
            quote(&target.description),
            export.to_string(),
        ],
    );

    for feature in &target.features {
        emit_feature(out, resolver, &mut ctx, feature);
    }

    out.call("coil_fini_target", [target.name.as_str()]);
    out.else_block();
    out.call("print_dim_status", ["\"${TARGET_STATUS} (disabled)\""]);
    out.end_if();

    Ok(())
}

fn emit_feature<'m>(
    out: &mut ScriptWriter,
    resolver: &mut DependencyResolver<'m>,
    ctx: &mut TargetContext<'m>,
    feature: &'m TargetFeature,
) {
    let target = ctx.target;
    let name = target.name.as_str();

    if let Some(condition) = &feature.condition {
        out.if_block(&normalize(condition));
    }

    for group in &feature.libraries {
        let visibility = ctx.library_visibility(group.visibility);

        for alias in &group.targets {
            let usage = Usage::new(&target.requirement, feature.condition.as_deref());

            if let Some(find) = resolver.find_declaration(alias) {
                resolver.register_usage(alias, usage);
                out.call("find_package", [find]);
            }

            if is_ui_toolkit(alias) && !ctx.automoc {
                if ctx.link != Visibility::Interface {
                    out.call("set_target_properties", [name, "PROPERTIES", "AUTOMOC", "on"]);
                }
                ctx.automoc = true;
            }

            out.call(
                "target_link_libraries",
                [name, visibility.as_keyword(), alias.as_str()],
            );
        }
    }

    if let Some(module) = &feature.module {
        out.call(
            "coil_add_qml_module",
            [
                quote(name),
                quote(&module.uri),
                quote(module.version.as_deref().unwrap_or("")),
                quote(module.prefix.as_deref().unwrap_or("")),
            ],
        );
    }

    for group in &feature.properties {
        for (key, value) in group {
            out.call(
                "set_target_properties",
                [name, "PROPERTIES", key.as_str(), value.as_str()],
            );
        }
    }

    for definition in &feature.definitions {
        out.call("target_compile_definitions", [name, "PUBLIC", definition.as_str()]);
    }

    out.lines(&feature.scripts);

    for plugin in &feature.plugins {
        out.call("coil_import_plugin", [name, plugin.as_str()]);
    }

    for test in &feature.tests {
        let mut args = vec![
            "NAME".to_string(),
            quote(&test.name),
            "COMMAND".to_string(),
            name.to_string(),
        ];
        args.extend(test.functions.iter().cloned());
        out.call("add_test", args);
    }

    for resource in &feature.resources {
        out.call(
            "coil_add_resources",
            [
                quote(name),
                quote(&resource.files.join(";")),
                quote(resource.module.as_deref().unwrap_or("")),
                quote(resource.prefix.as_deref().unwrap_or("")),
            ],
        );
    }

    for install in &feature.installs {
        let mut args = vec![install.kind.as_str()];
        args.extend(install.rules.iter().map(String::as_str));
        out.call("install", args);
    }

    if feature.condition.is_some() {
        out.end_if();
    }
}
