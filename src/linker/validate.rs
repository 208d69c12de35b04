//! Fail-fast argument checks for the link operation.

use super::error::{LinkError, Role};
use crate::view::ViewComponent;

/// Return the component's id after checking the link preconditions.
///
/// Unlike browser-side lookup failures, which retry on the poll schedule,
/// these checks fail before any script is built.
pub(super) fn visible_id(
    component: &dyn ViewComponent,
    role: Role,
) -> Result<String, LinkError> {
    let id = match component.id() {
        Some(id) if !id.is_empty() => id.to_string(),
        _ => return Err(LinkError::MissingId { role }),
    };
    if !component.is_visible() {
        return Err(LinkError::NotVisible { role, id });
    }
    Ok(id)
}
