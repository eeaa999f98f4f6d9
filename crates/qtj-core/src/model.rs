use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Line index -> normalized line text for one region. Blank lines consume
/// an index without producing an entry, so gaps are expected.
pub type LineMap = BTreeMap<usize, String>;

/// Both regions of one query file.
///
/// Field order is `core` before `header` so the serialized record matches
/// the key-sorted packed output.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryRecord {
    pub core: LineMap,
    pub header: LineMap,
}

/// Identifier -> record for a whole directory of query files. `BTreeMap`
/// iteration gives the ascending key order the output format requires.
pub type QueryDocument = BTreeMap<u32, QueryRecord>;
