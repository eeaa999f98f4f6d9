/// Split raw query text into the head region (everything before the first
/// `{`) and the core region (strictly between the first `{` and the last
/// `}`, both braces excluded). Nested braces inside the core pass through
/// untouched; text after the last `}` is discarded.
pub fn split_regions(raw: &str) -> Result<(&str, &str), String> {
    let open = raw
        .find('{')
        .ok_or_else(|| "no opening brace in query text".to_string())?;
    let close = raw
        .rfind('}')
        .ok_or_else(|| "no closing brace in query text".to_string())?;
    if close < open {
        return Err("closing brace precedes opening brace".to_string());
    }
    Ok((&raw[..open], &raw[open + 1..close]))
}
