use crate::model::LineMap;

// Running state threaded through one region's re-flow.
struct Reflow {
    depth: i32,
    just_opened: bool,
}

/// Re-flow one region into a line map: surrounding whitespace stripped,
/// one tab prepended per brace-nesting level, blank lines skipped (their
/// index is still consumed).
///
/// A line that opens a brace block is indented at the depth it had before
/// opening. Open and close checks are independent, so `"} else {"` nets
/// zero depth change while still counting as just-opened. Unbalanced
/// braces can drive the depth negative; the tab count clamps at zero but
/// the depth keeps accumulating from its running value.
pub fn normalize_region(region: &str) -> LineMap {
    let mut out = LineMap::new();
    let mut st = Reflow {
        depth: 0,
        just_opened: false,
    };
    for (idx, line) in region.split('\n').enumerate() {
        let trimmed = line.trim();
        if trimmed.contains('{') {
            st.depth += 1;
            st.just_opened = true;
        }
        if trimmed.contains('}') {
            st.depth -= 1;
        }
        if !trimmed.is_empty() {
            let units = (st.depth - i32::from(st.just_opened)).max(0) as usize;
            let mut text = "\t".repeat(units);
            text.push_str(trimmed);
            out.insert(idx, text);
        }
        st.just_opened = false;
    }
    out
}
