//! Browser-side polling script generation.
//!
//! The emitted script is the production form of the poll loop: it looks up the
//! trigger element by id and the file input whose enclosing form carries the
//! uploader id, retries on the policy schedule, and on success hides the
//! uploader widget and forwards trigger clicks to the native file input.

use crate::poll::PollPolicy;

/// Build the polling script for one link.
///
/// Identifiers are escaped for the single-quoted string literals they are
/// embedded in, so an id cannot break out of the template. Success and timeout
/// are reported on the browser console only.
pub fn poll_script(trigger_id: &str, upload_id: &str, policy: &PollPolicy) -> String {
    let step_ms = policy.delay_step.as_millis();
    format!(
        r#"const MAX_ATTEMPTS = {max_attempts};
const DELAY_STEP_MS = {step_ms};
setTimeout(checkExistence, DELAY_STEP_MS, 1);
function checkExistence(attemptNumber) {{
  var component = document.getElementById('{trigger}');
  var allUploads = document.querySelectorAll('input[type="file"]');
  var myUpload;
  allUploads.forEach(function (elem) {{
    if (elem.form && elem.form.id == '{upload}') myUpload = elem;
  }});
  if (component != null && myUpload != null) {{
    registerClickBridge(component, myUpload);
  }} else if (attemptNumber < MAX_ATTEMPTS) {{
    setTimeout(checkExistence, attemptNumber * DELAY_STEP_MS, attemptNumber + 1);
  }} else {{
    console.warn('could not bind component to uploader: not all elements found in time');
  }}
}}
function registerClickBridge(component, upload) {{
  upload.parentNode.parentNode.style.display = 'none';
  component.addEventListener('click', function () {{ upload.click(); }});
  console.info('successfully linked component to uploader');
}}
"#,
        max_attempts = policy.max_attempts,
        step_ms = step_ms,
        trigger = escape_js(trigger_id),
        upload = escape_js(upload_id),
    )
}

/// Escape a value for embedding inside a single-quoted JS string literal.
fn escape_js(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            c => out.push(c),
        }
    }
    out
}
