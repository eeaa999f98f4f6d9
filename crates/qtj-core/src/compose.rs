use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use crate::model::{QueryDocument, QueryRecord};

/// Which versioned form of a query to compose.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionContext {
    /// Single version, fully materialized.
    VersionMaterialization { version: u64 },
    /// Additions between two versions, as a NOT EXISTS delta.
    DeltaMaterialization { start: u64, end: u64 },
    /// Query across all versions via a `?version` variable.
    VersionQuery,
}

/// Load a packed document back from disk.
pub fn load_document(path: &Path) -> Result<QueryDocument, String> {
    let data =
        fs::read_to_string(path).map_err(|e| format!("cannot read {}: {}", path.display(), e))?;
    serde_json::from_str(&data).map_err(|e| e.to_string())
}

// One GRAPH section over the record's core lines. Inside the delta
// filter the whole section shifts one tab deeper.
fn versioned_section(record: &QueryRecord, tag: &str, extra_indent: bool) -> String {
    let indent = if extra_indent { "\t" } else { "" };
    let mut out = String::new();
    write!(&mut out, "\n\t{}GRAPH {} {{", indent, tag).ok();
    for line in record.core.values() {
        write!(&mut out, "\n\t\t{}{}", indent, line).ok();
    }
    write!(&mut out, "\n\t{}}}", indent).ok();
    out
}

/// Rebuild the complete query string for `id` under a version context:
/// header lines, `SELECT * WHERE {`, the versioned GRAPH section(s), and
/// an optional LIMIT clause.
pub fn compose_query(
    doc: &QueryDocument,
    id: u32,
    ctx: &VersionContext,
    limit: Option<u64>,
) -> Result<String, String> {
    let record = doc
        .get(&id)
        .ok_or_else(|| format!("no query with id {}", id))?;
    let header = record
        .header
        .values()
        .cloned()
        .collect::<Vec<_>>()
        .join("\n");
    let mut core = String::from("SELECT * WHERE {");
    match ctx {
        VersionContext::VersionMaterialization { version } => {
            let tag = format!("<version:{}>", version);
            core.push_str(&versioned_section(record, &tag, false));
        }
        VersionContext::DeltaMaterialization { start, end } => {
            let start_tag = format!("<version:{}>", start);
            let end_tag = format!("<version:{}>", end);
            core.push_str(&versioned_section(record, &start_tag, false));
            core.push_str(" .");
            core.push_str("\n\tFILTER (NOT EXISTS {");
            core.push_str(&versioned_section(record, &end_tag, true));
            core.push_str("\n\t})");
        }
        VersionContext::VersionQuery => {
            core.push_str(&versioned_section(record, "?version", false));
        }
    }
    core.push_str("\n}");
    if let Some(n) = limit {
        write!(&mut core, " LIMIT {}", n).ok();
    }
    Ok(format!("{}\n{}", header, core))
}
