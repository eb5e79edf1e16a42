use lore_core::errors::{LoreResult, StoreError};

/// Reject empty or whitespace-only identifiers when `strict` is set.
/// Without `strict` every identifier is accepted.
pub fn validate_project_id(project_id: &str, strict: bool) -> LoreResult<()> {
    if strict && project_id.trim().is_empty() {
        return Err(StoreError::InvalidProjectIdentifier {
            project_id: project_id.to_string(),
        }
        .into());
    }
    Ok(())
}
