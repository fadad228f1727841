//! State references

use dash_core::EntityId;
use tracing::warn;

/// Render an indexed state lookup, `states['<id>']`
///
/// Returns `None` for strings that are not entity ids, since those could
/// break out of the quoted index.
pub fn state_ref(entity_id: &str) -> Option<String> {
    match entity_id.parse::<EntityId>() {
        Ok(id) => Some(format!("states['{}']", id)),
        Err(e) => {
            warn!(entity_id, error = %e, "skipping invalid entity id");
            None
        }
    }
}

/// Render state lookups for a list of entity ids, skipping invalid ones
pub fn state_refs<S: AsRef<str>>(entity_ids: &[S]) -> Vec<String> {
    entity_ids
        .iter()
        .filter_map(|id| state_ref(id.as_ref()))
        .collect()
}

/// `[states['a'], states['b']]`, or `None` when nothing is left to reference
pub(crate) fn state_list<S: AsRef<str>>(entity_ids: &[S]) -> Option<String> {
    let refs = state_refs(entity_ids);
    if refs.is_empty() {
        None
    } else {
        Some(format!("[{}]", refs.join(", ")))
    }
}
