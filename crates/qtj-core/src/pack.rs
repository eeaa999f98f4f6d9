use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::lines::normalize_region;
use crate::model::{QueryDocument, QueryRecord};
use crate::split::split_regions;

/// List the entries of a query directory, sorted by path so identifier
/// collisions resolve the same way on every run.
pub fn find_query_files(dir: &Path) -> Result<Vec<PathBuf>, String> {
    let rd = fs::read_dir(dir).map_err(|e| format!("cannot read {}: {}", dir.display(), e))?;
    let mut out = Vec::new();
    for entry in rd {
        let entry = entry.map_err(|e| e.to_string())?;
        out.push(entry.path());
    }
    out.sort();
    Ok(out)
}

/// Decode the integer identifier from a file name shaped
/// `<prefix-char><digits>.txt`. Anything else is an error; the packer
/// does not skip non-conforming entries.
pub fn query_id_from_name(name: &str) -> Result<u32, String> {
    let stem = name
        .strip_suffix(".txt")
        .ok_or_else(|| format!("query file name without .txt suffix: {}", name))?;
    let mut chars = stem.chars();
    chars
        .next()
        .ok_or_else(|| format!("query file name too short: {}", name))?;
    chars
        .as_str()
        .parse::<u32>()
        .map_err(|_| format!("query file name without numeric id: {}", name))
}

/// Split one query file and normalize both regions.
pub fn pack_file(path: &Path) -> Result<QueryRecord, String> {
    let raw =
        fs::read_to_string(path).map_err(|e| format!("cannot read {}: {}", path.display(), e))?;
    let (head, core) = split_regions(&raw).map_err(|e| format!("{}: {}", path.display(), e))?;
    Ok(QueryRecord {
        core: normalize_region(core),
        header: normalize_region(head),
    })
}

/// Pack every query file in `dir` into one document keyed by identifier.
/// Two files mapping to the same identifier keep the later one in sorted
/// path order.
pub fn pack_dir(dir: &Path) -> Result<QueryDocument, String> {
    let mut doc = QueryDocument::new();
    for path in find_query_files(dir)? {
        let name = path
            .file_name()
            .and_then(|s| s.to_str())
            .ok_or_else(|| format!("unreadable file name: {}", path.display()))?;
        let id = query_id_from_name(name)?;
        doc.insert(id, pack_file(&path)?);
    }
    Ok(doc)
}

/// Serialize a document with 4-space indentation. Map entries stream in
/// `BTreeMap` order, so the stringified integer keys come out ascending.
pub fn document_to_pretty_json(doc: &QueryDocument) -> Result<String, String> {
    let mut buf = Vec::new();
    let fmt = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, fmt);
    doc.serialize(&mut ser).map_err(|e| e.to_string())?;
    String::from_utf8(buf).map_err(|e| e.to_string())
}

pub fn write_document(path: &Path, doc: &QueryDocument) -> Result<(), String> {
    let s = document_to_pretty_json(doc)?;
    fs::write(path, s).map_err(|e| e.to_string())
}
