//! Custom target emission for manifest scripts.

use crate::core::script::Script;
use crate::generator::writer::{quote, ScriptWriter};

/// Emit a script as a custom target. Scripts without commands are skipped.
pub fn emit_script(out: &mut ScriptWriter, script: &Script) {
    if script.commands.is_empty() {
        tracing::debug!("skipping script `{}` with no commands", script.name);
        return;
    }

    let mut args = vec![
        script.name.clone(),
        "WORKING_DIRECTORY".to_string(),
        "${CMAKE_SOURCE_DIR}".to_string(),
    ];

    if !script.products.is_empty() {
        args.push("BYPRODUCTS".to_string());
        args.push(quote(&script.products.join(" ")));
    }

    if !script.requires.is_empty() {
        args.push("DEPENDS".to_string());
        args.push(quote(&script.requires.join(" ")));
    }

    for command in script.commands.iter().filter(|c| !c.is_empty()) {
        args.push("COMMAND".to_string());
        args.push(command.clone());
    }

    out.call("add_custom_target", args);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_script_with_products_and_requires() {
        let script = Script {
            products: vec!["docs/html".to_string(), "docs/xml".to_string()],
            requires: vec!["app".to_string()],
            ..Script::new("docs").command("doxygen Doxyfile").command("touch done")
        };

        let mut out = ScriptWriter::new();
        emit_script(&mut out, &script);

        assert_eq!(
            out.as_str(),
            "add_custom_target(docs WORKING_DIRECTORY ${CMAKE_SOURCE_DIR} \
             BYPRODUCTS \"docs/html docs/xml\" DEPENDS \"app\" \
             COMMAND doxygen Doxyfile COMMAND touch done)\n"
        );
    }

    #[test]
    fn test_script_without_commands_is_skipped() {
        let mut out = ScriptWriter::new();
        emit_script(&mut out, &Script::new("noop"));
        assert!(out.is_empty());
    }
}
