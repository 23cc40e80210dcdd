//! Implementation of `coil list`.

use serde::Serialize;

use crate::core::Manifest;

/// What to list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    Targets,
    Profiles,
    Options,
}

/// One listed item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListEntry {
    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
}

/// Collect the entries of one kind from a manifest.
pub fn list(manifest: &Manifest, kind: ListKind) -> Vec<ListEntry> {
    match kind {
        ListKind::Targets => manifest
            .targets
            .iter()
            .map(|t| ListEntry {
                name: t.name.clone(),
                value: None,
                description: t.description.clone(),
            })
            .collect(),
        ListKind::Profiles => manifest
            .profiles
            .iter()
            .map(|p| ListEntry {
                name: p.name.clone(),
                value: None,
                description: p.description.clone(),
            })
            .collect(),
        ListKind::Options => manifest
            .options()
            .filter_map(|f| {
                let (key, value) = f.variable()?;
                Some(ListEntry {
                    name: key.to_string(),
                    value: Some(value.to_string()),
                    description: f.description.clone().unwrap_or_default(),
                })
            })
            .collect(),
    }
}

/// Render entries one per line.
pub fn format_entries(entries: &[ListEntry]) -> String {
    let mut out = String::new();
    for entry in entries {
        match &entry.value {
            Some(value) => {
                out.push_str(&format!("-- {}={} {}\n", entry.name, value, entry.description))
            }
            None => out.push_str(&format!("-- {}\n", entry.name)),
        }
    }
    out
}

/// Render entries as pretty JSON.
pub fn format_json(entries: &[ListEntry]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(entries)
}
