//! Seams toward the hosting UI framework and the browser page.
//!
//! The linker never talks to a concrete framework. It reads a component's id
//! and visibility through `ViewComponent` and hands the generated script to a
//! `BrowserPage` once the owning view attaches. A host framework implements
//! both; the `sim` module provides in-memory doubles for headless tests.

/// One-shot task executed against the page the owning view attached to.
pub type AttachTask = Box<dyn FnOnce(&dyn BrowserPage)>;

/// Server-side handle to a rendered UI component.
pub trait ViewComponent {
    /// The component's DOM id, when one is set.
    fn id(&self) -> Option<&str>;

    /// Whether the component is currently part of the rendered view tree.
    /// An invisible component has no DOM node, so there is nothing to link.
    fn is_visible(&self) -> bool;

    /// Register a one-shot task to run when the view attaches to the live
    /// document. Implementations typically delegate to an [`AttachQueue`].
    ///
    /// [`AttachQueue`]: crate::attach::AttachQueue
    fn on_attach(&self, task: AttachTask);
}

/// Browser context of an attached view.
///
/// Execution is fire-and-forget: there is no result channel, and script
/// failures surface only in the browser console.
pub trait BrowserPage {
    /// Run a script in the page.
    fn execute_js(&self, source: &str);
}
