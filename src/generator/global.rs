//! Project-level emission: header, identity block and global features.

use crate::core::feature::Feature;
use crate::core::manifest::ProjectMetadata;
use crate::generator::condition::normalize;
use crate::generator::writer::{quote, ScriptWriter};

/// Emit the banner and the guard that locates the helper scripts.
pub fn emit_header(out: &mut ScriptWriter, tool_version: &str) {
    out.comment(&format!(
        "Generated by coil ({}). You must not modify this file.",
        tool_version
    ));

    out.if_block("NOT DEFINED COIL_DIR");
    out.call("message", ["STATUS", quote("Coil directory is not defined...").as_str()]);
    out.if_block("DEFINED NO_COIL");
    out.call(
        "set",
        ["COIL_DIR", quote("${CMAKE_BINARY_DIR}").as_str(), "CACHE", "INTERNAL", quote("").as_str()],
    );
    out.call("message", ["STATUS", quote("Not using coil... ${COIL_DIR}").as_str()]);
    out.else_block();
    out.call(
        "message",
        [
            "FATAL_ERROR",
            quote("You must re-configure the project using coil or set NO_COIL=on").as_str(),
        ],
    );
    out.end_if();
    out.else_block();
    out.call("message", ["STATUS", quote("Using coil scripts from ${COIL_DIR}").as_str()]);
    out.end_if();
}

/// Emit the minimum version, `project()` call and metadata variables.
pub fn emit_project(
    out: &mut ScriptWriter,
    project: &ProjectMetadata,
    cmake_minimum: &str,
    languages: &[String],
) {
    out.call("cmake_minimum_required", ["VERSION", cmake_minimum, "FATAL_ERROR"]);

    let mut args = vec![
        project.name.as_str(),
        "VERSION",
        project.version.as_str(),
        "LANGUAGES",
    ];
    args.extend(languages.iter().map(String::as_str));
    out.call("project", args);

    let metadata = [
        ("COIL_CONTACT", &project.contact),
        ("COIL_ORGANIZATION", &project.organization),
        ("COIL_PROJECT_LICENSE", &project.license),
        ("COIL_PROJECT_REPOSITORY", &project.repository),
        ("CMAKE_PROJECT_HOMEPAGE_URL", &project.site),
        ("CMAKE_PROJECT_DESCRIPTION", &project.description),
    ];

    for (variable, value) in metadata {
        out.call("set", [variable, quote(value).as_str()]);
    }
}

/// Include one of the externally maintained helper scripts.
pub fn include_phase(out: &mut ScriptWriter, phase: u8) {
    let path = format!("${{COIL_DIR}}/coil.{}.cmake", phase);
    out.call("include", [quote(&path)]);
}

/// Emit a global feature.
pub fn emit_global_feature(out: &mut ScriptWriter, feature: &Feature) {
    if let Some(condition) = &feature.condition {
        out.if_block(&normalize(condition));
    }

    if let Some((key, value)) = feature.variable() {
        if feature.description.is_some() {
            out.call("set", [key, value, "CACHE", "INTERNAL", "\"\""]);
        } else {
            out.call("set", [key, value]);
        }
    }

    out.lines(&feature.scripts);

    if !feature.definitions.is_empty() {
        out.call("add_compile_definitions", &feature.definitions);
    }

    if feature.condition.is_some() {
        out.end_if();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_block() {
        let project = ProjectMetadata {
            name: "demo".to_string(),
            version: "1.2.3".to_string(),
            organization: "Acme".to_string(),
            site: "https://acme.example".to_string(),
            ..Default::default()
        };
        let mut out = ScriptWriter::new();
        emit_project(&mut out, &project, "3.30.0", &["CXX".to_string()]);

        let text = out.into_string();
        assert!(text.starts_with(
            "cmake_minimum_required(VERSION 3.30.0 FATAL_ERROR)\n\
             project(demo VERSION 1.2.3 LANGUAGES CXX)\n"
        ));
        assert!(text.contains("set(COIL_ORGANIZATION \"Acme\")\n"));
        assert!(text.contains("set(COIL_CONTACT \"\")\n"));
        assert!(text.contains("set(CMAKE_PROJECT_HOMEPAGE_URL \"https://acme.example\")\n"));
    }

    #[test]
    fn test_cached_and_transient_variables() {
        let cached = Feature {
            key: Some("USE_FAST".to_string()),
            value: Some("on".to_string()),
            description: Some("fast paths".to_string()),
            ..Default::default()
        };
        let transient = Feature {
            condition: Some("not WIN32".to_string()),
            key: Some("LIBDIR".to_string()),
            value: Some("lib64".to_string()),
            definitions: vec!["A=1".to_string(), "B".to_string()],
            scripts: vec!["enable_testing()".to_string()],
            ..Default::default()
        };

        let mut out = ScriptWriter::new();
        emit_global_feature(&mut out, &cached);
        emit_global_feature(&mut out, &transient);

        assert_eq!(
            out.as_str(),
            "set(USE_FAST on CACHE INTERNAL \"\")\n\
             if(NOT WIN32)\n\
             set(LIBDIR lib64)\n\
             enable_testing()\n\
             add_compile_definitions(A=1 B)\n\
             endif()\n"
        );
    }

    #[test]
    fn test_key_without_value_is_skipped() {
        let feature = Feature {
            key: Some("ONLY_KEY".to_string()),
            ..Default::default()
        };
        let mut out = ScriptWriter::new();
        emit_global_feature(&mut out, &feature);
        assert!(out.is_empty());
    }

    #[test]
    fn test_include_phase() {
        let mut out = ScriptWriter::new();
        include_phase(&mut out, 3);
        assert_eq!(out.as_str(), "include(\"${COIL_DIR}/coil.3.cmake\")\n");
    }
}
