//! The public link operation.
//!
//! Validates both components, builds the polling script, and schedules it for
//! when the trigger's view attaches to the live document. Fire-and-forget:
//! once scheduled, binding success or timeout is observable only in the
//! browser console.

mod error;
mod validate;

pub use error::{LinkError, Role};

use crate::poll::PollPolicy;
use crate::script;
use crate::view::ViewComponent;

/// Link a click on `trigger` to the native file-picker click of the uploader
/// wrapped by `target`, using the default polling policy.
///
/// Both components must have non-empty ids and be visible; ids must be unique
/// within the document (a caller contract the server side cannot verify).
/// Links are additive: linking the same trigger again, or several triggers to
/// one uploader, stacks forwarding listeners, and there is no unlink. The
/// binding does not survive a page reload.
pub fn link(trigger: &dyn ViewComponent, target: &dyn ViewComponent) -> Result<(), LinkError> {
    link_with_policy(trigger, target, &PollPolicy::default())
}

/// [`link`] with an explicit polling policy (e.g. from config).
pub fn link_with_policy(
    trigger: &dyn ViewComponent,
    target: &dyn ViewComponent,
    policy: &PollPolicy,
) -> Result<(), LinkError> {
    let trigger_id = validate::visible_id(trigger, Role::Trigger)?;
    let upload_id = validate::visible_id(target, Role::UploadTarget)?;

    let source = script::poll_script(&trigger_id, &upload_id, policy);
    tracing::debug!(
        trigger = %trigger_id,
        uploader = %upload_id,
        "scheduling upload link script for attach"
    );
    trigger.on_attach(Box::new(move |page| page.execute_js(&source)));
    Ok(())
}
