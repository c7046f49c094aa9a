//! Compiled-in intent templates.
//!
//! The catalog is fixed at build time; its order is the display order.

use serde::Serialize;

/// A named, predefined intent offered for quick selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Template {
    pub name: &'static str,
    pub intent: &'static str,
}

pub const CATALOG: [Template; 3] = [
    Template {
        name: "Deploy React → Render (demo)",
        intent: "Deploy React app to Render with Firebase backend",
    },
    Template {
        name: "Daily scrape → Firestore (demo)",
        intent: "Scrape example.com daily and store titles in Firestore",
    },
    Template {
        name: "PDF → JSON (demo)",
        intent: "Convert sample.pdf into structured JSON and index for search",
    },
];

pub fn catalog() -> &'static [Template] {
    &CATALOG
}

/// Format the catalog for `--list-templates`: one `name<TAB>intent` line per
/// template, or a JSON array when `json` is set.
pub fn format_listing(templates: &[Template], json: bool) -> Result<String, serde_json::Error> {
    if json {
        return serde_json::to_string_pretty(templates);
    }
    let mut out = String::new();
    for t in templates {
        out.push_str(t.name);
        out.push('\t');
        out.push_str(t.intent);
        out.push('\n');
    }
    Ok(out)
}
