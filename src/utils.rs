use crate::errors::Pl0Result;
use serde::Serialize;

/// Dump any serializable AST node as pretty-printed JSON, for debugging
/// and for golden-file style comparisons in downstream tooling.
pub fn to_json<T: Serialize>(node: &T) -> Pl0Result<String> {
    Ok(serde_json::to_string_pretty(node)?)
}
