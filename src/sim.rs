//! In-memory doubles for the framework and page seams.
//!
//! Just enough of a component tree and a DOM to exercise the binding contract
//! headlessly: components with ids, visibility, and an attach queue; a page
//! holding one trigger element and one uploader with click dispatch.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::attach::AttachQueue;
use crate::poll::PageDom;
use crate::view::{AttachTask, BrowserPage, ViewComponent};

/// Framework-side component double: id, visibility flag, attach queue.
pub struct SimComponent {
    id: Option<String>,
    visible: Cell<bool>,
    attach: AttachQueue,
}

impl SimComponent {
    /// A visible component with the given id.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            visible: Cell::new(true),
            attach: AttachQueue::new(),
        }
    }

    /// A visible component with no id set at all.
    pub fn without_id() -> Self {
        Self {
            id: None,
            visible: Cell::new(true),
            attach: AttachQueue::new(),
        }
    }

    pub fn set_visible(&self, visible: bool) {
        self.visible.set(visible);
    }

    /// Simulate the framework attaching this component's view to a page.
    pub fn attach_to(&self, page: Rc<dyn BrowserPage>) {
        self.attach.fire(page);
    }

    /// Tasks still waiting for attach.
    pub fn pending_attach_tasks(&self) -> usize {
        self.attach.pending()
    }
}

impl ViewComponent for SimComponent {
    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn is_visible(&self) -> bool {
        self.visible.get()
    }

    fn on_attach(&self, task: AttachTask) {
        self.attach.enqueue(task);
    }
}

/// Page double that records scripts handed to `execute_js`.
#[derive(Default)]
pub struct RecordingPage {
    scripts: RefCell<Vec<String>>,
}

impl RecordingPage {
    /// Scripts executed so far, in order.
    pub fn scripts(&self) -> Vec<String> {
        self.scripts.borrow().clone()
    }
}

impl BrowserPage for RecordingPage {
    fn execute_js(&self, source: &str) {
        self.scripts.borrow_mut().push(source.to_string());
    }
}

type Listener = Box<dyn FnMut()>;

struct TriggerElement {
    id: String,
    listeners: Vec<Listener>,
}

struct UploadElement {
    form_id: String,
    native_clicks: Rc<Cell<u32>>,
    container_hidden: bool,
}

/// Single-view page model: at most one trigger element and one uploader.
///
/// Mount methods mimic lazy UI building; the poll loop only observes an
/// element once it is mounted, and only under the id the page was built for.
pub struct SimPage {
    trigger_id: String,
    upload_id: String,
    trigger: Option<TriggerElement>,
    upload: Option<UploadElement>,
}

impl SimPage {
    /// A page expecting the given trigger and uploader-form ids.
    pub fn for_link(trigger_id: impl Into<String>, upload_id: impl Into<String>) -> Self {
        Self {
            trigger_id: trigger_id.into(),
            upload_id: upload_id.into(),
            trigger: None,
            upload: None,
        }
    }

    /// Mount the trigger element under the given id.
    pub fn mount_trigger(&mut self, id: impl Into<String>) {
        self.trigger = Some(TriggerElement {
            id: id.into(),
            listeners: Vec::new(),
        });
    }

    /// Mount the uploader: a file input inside a form with the given id.
    /// Returns a counter of native clicks on the file input.
    pub fn mount_upload(&mut self, form_id: impl Into<String>) -> Rc<Cell<u32>> {
        let clicks = Rc::new(Cell::new(0));
        self.upload = Some(UploadElement {
            form_id: form_id.into(),
            native_clicks: Rc::clone(&clicks),
            container_hidden: false,
        });
        clicks
    }

    /// Register a listener on the trigger, like application code that was
    /// wired up before linking.
    pub fn add_trigger_listener(&mut self, listener: Listener) {
        if let Some(trigger) = &mut self.trigger {
            trigger.listeners.push(listener);
        }
    }

    /// Dispatch a click on the trigger; every registered listener fires in
    /// registration order.
    pub fn click_trigger(&mut self) {
        if let Some(trigger) = &mut self.trigger {
            for listener in &mut trigger.listeners {
                listener();
            }
        }
    }

    /// Whether the uploader's container was hidden by the click bridge.
    pub fn upload_container_hidden(&self) -> bool {
        self.upload
            .as_ref()
            .map(|upload| upload.container_hidden)
            .unwrap_or(false)
    }
}

impl PageDom for SimPage {
    fn elements_present(&mut self) -> bool {
        let trigger_found = self
            .trigger
            .as_ref()
            .is_some_and(|trigger| trigger.id == self.trigger_id);
        let upload_found = self
            .upload
            .as_ref()
            .is_some_and(|upload| upload.form_id == self.upload_id);
        trigger_found && upload_found
    }

    fn install_bridge(&mut self) {
        if let (Some(trigger), Some(upload)) = (self.trigger.as_mut(), self.upload.as_mut()) {
            upload.container_hidden = true;
            let clicks = Rc::clone(&upload.native_clicks);
            trigger.listeners.push(Box::new(move || {
                clicks.set(clicks.get() + 1);
            }));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn elements_are_only_found_under_the_expected_ids() {
        let mut page = SimPage::for_link("trigger", "upload");
        assert!(!page.elements_present());

        page.mount_trigger("trigger");
        page.mount_upload("some-other-form");
        assert!(!page.elements_present());

        page.mount_upload("upload");
        assert!(page.elements_present());
    }

    #[test]
    fn bridge_hides_the_container_and_forwards_clicks() {
        let mut page = SimPage::for_link("trigger", "upload");
        page.mount_trigger("trigger");
        let clicks = page.mount_upload("upload");

        page.install_bridge();
        assert!(page.upload_container_hidden());

        page.click_trigger();
        page.click_trigger();
        assert_eq!(clicks.get(), 2);
    }

    #[test]
    fn clicks_before_the_bridge_reach_nothing() {
        let mut page = SimPage::for_link("trigger", "upload");
        page.mount_trigger("trigger");
        let clicks = page.mount_upload("upload");
        page.click_trigger();
        assert_eq!(clicks.get(), 0);
        assert!(!page.upload_container_hidden());
    }
}
