//! Display lifecycle: which sizes are known and which response is current.
//!
//! Overlays may only be computed once both the rendered size of the image
//! element and the reference size of the resolved image are known. The
//! rendered size arrives with the image load event and changes on viewport
//! resize; the reference size arrives with the resolver response.
//!
//! Everything here runs on the UI thread. State is shared with the resize
//! listener through `Rc<RefCell<_>>`.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crate::geometry::CropWindow;
use crate::model::Dimensions;
use crate::resolver::{ImageResponse, ResolveError};

/// Identifier of a registered resize listener.
pub type ListenerId = u64;

/// The displayed image element, queried for its current on-screen size.
pub trait ImageElement {
    fn rendered_size(&self) -> Dimensions;
}

/// Source of viewport resize notifications.
pub trait ResizeEvents {
    /// Register `listener`; it is called after every resize.
    fn add_listener(&self, listener: Box<dyn Fn()>) -> ListenerId;

    /// Unregister a listener. Unknown ids are ignored.
    fn remove_listener(&self, id: ListenerId);
}

/// Registration with a [`ResizeEvents`] source, removed when dropped.
pub struct ResizeSubscription {
    events: Rc<dyn ResizeEvents>,
    id: ListenerId,
}

impl ResizeSubscription {
    pub fn id(&self) -> ListenerId {
        self.id
    }
}

impl Drop for ResizeSubscription {
    fn drop(&mut self) {
        log::debug!("Removing resize listener {}", self.id);
        self.events.remove_listener(self.id);
    }
}

/// Resize event source driven by the host, e.g. a window event loop.
#[derive(Default)]
pub struct ResizeListeners {
    next_id: RefCell<ListenerId>,
    listeners: RefCell<Vec<(ListenerId, Rc<dyn Fn()>)>>,
}

impl ResizeListeners {
    pub fn new() -> Self {
        Self::default()
    }

    /// Notify every listener registered when the dispatch starts.
    ///
    /// Listeners may add or remove registrations while being notified.
    pub fn dispatch(&self) {
        let snapshot: Vec<Rc<dyn Fn()>> = self
            .listeners
            .borrow()
            .iter()
            .map(|(_, listener)| Rc::clone(listener))
            .collect();
        for listener in snapshot {
            listener();
        }
    }

    /// Number of registered listeners.
    pub fn len(&self) -> usize {
        self.listeners.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.borrow().is_empty()
    }
}

impl ResizeEvents for ResizeListeners {
    fn add_listener(&self, listener: Box<dyn Fn()>) -> ListenerId {
        let mut next_id = self.next_id.borrow_mut();
        let id = *next_id;
        *next_id += 1;
        self.listeners.borrow_mut().push((id, Rc::from(listener)));
        id
    }

    fn remove_listener(&self, id: ListenerId) {
        self.listeners.borrow_mut().retain(|(lid, _)| *lid != id);
    }
}

/// Token identifying one resolver request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RequestTicket(u64);

/// Result of the latest resolver request.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    Loaded(ImageResponse),
    /// Message of the resolver error
    Failed(String),
}

#[derive(Debug, Default)]
struct DisplayState {
    rendered: Option<Dimensions>,
    reference: Option<Dimensions>,
    resolution: Option<Resolution>,
    latest_ticket: u64,
}

/// Tracks rendered and reference sizes for one displayed image.
#[derive(Debug, Default)]
pub struct DisplayLifecycle {
    state: Rc<RefCell<DisplayState>>,
}

impl DisplayLifecycle {
    pub fn new() -> Self {
        Self::default()
    }

    /// On-screen size of the image element, once loaded.
    pub fn rendered_dimensions(&self) -> Option<Dimensions> {
        self.state.borrow().rendered
    }

    /// Size of the pixel space annotations are expressed in, once resolved.
    pub fn reference_dimensions(&self) -> Option<Dimensions> {
        self.state.borrow().reference
    }

    /// Both sizes, when overlays can be computed.
    pub fn scaling_inputs(&self) -> Option<(Dimensions, Dimensions)> {
        let state = self.state.borrow();
        match (state.reference, state.rendered) {
            (Some(reference), Some(rendered)) if reference.is_usable() => {
                Some((reference, rendered))
            }
            _ => None,
        }
    }

    /// Latest resolver outcome, if any.
    pub fn resolution(&self) -> Option<Resolution> {
        self.state.borrow().resolution.clone()
    }

    /// Record the element size reported by the image load event.
    pub fn on_image_load(&self, rendered: Dimensions) {
        log::debug!("Image loaded at {}x{}", rendered.width, rendered.height);
        self.state.borrow_mut().rendered = Some(rendered);
    }

    /// Record the element size after a viewport resize.
    pub fn on_resize(&self, rendered: Dimensions) {
        Self::set_rendered(&self.state, rendered);
    }

    fn set_rendered(state: &RefCell<DisplayState>, rendered: Dimensions) {
        log::debug!("Image resized to {}x{}", rendered.width, rendered.height);
        state.borrow_mut().rendered = Some(rendered);
    }

    /// Follow viewport resizes until the returned subscription is dropped.
    pub fn mount(
        &self,
        events: Rc<dyn ResizeEvents>,
        element: Rc<dyn ImageElement>,
    ) -> ResizeSubscription {
        let state: Weak<RefCell<DisplayState>> = Rc::downgrade(&self.state);
        let id = events.add_listener(Box::new(move || {
            if let Some(state) = state.upgrade() {
                Self::set_rendered(&state, element.rendered_size());
            }
        }));
        log::debug!("Registered resize listener {}", id);
        ResizeSubscription { events, id }
    }

    /// Start a resolver request; earlier tickets become stale.
    pub fn begin_request(&self) -> RequestTicket {
        let mut state = self.state.borrow_mut();
        state.latest_ticket += 1;
        RequestTicket(state.latest_ticket)
    }

    /// Forget the resolved image and its reference size.
    ///
    /// Requests already in flight become stale. The rendered size is kept; it
    /// follows the image element, not the request.
    pub fn reset_resolution(&self) {
        let mut state = self.state.borrow_mut();
        state.latest_ticket += 1;
        state.reference = None;
        state.resolution = None;
    }

    /// Whether a newer request has been started since `ticket`.
    pub fn is_stale(&self, ticket: RequestTicket) -> bool {
        ticket.0 < self.state.borrow().latest_ticket
    }

    /// Apply a resolver result. Returns `false` if it was discarded as stale.
    ///
    /// With a crop window the crop size becomes the reference size, whatever
    /// size the resolver reported.
    pub fn apply_result(
        &self,
        ticket: RequestTicket,
        result: Result<ImageResponse, ResolveError>,
        crop: Option<&CropWindow>,
    ) -> bool {
        if self.is_stale(ticket) {
            log::debug!("Discarding stale resolver response {:?}", ticket);
            return false;
        }

        let mut state = self.state.borrow_mut();
        match result {
            Ok(response) => {
                let reference = crop
                    .map(CropWindow::dimensions)
                    .unwrap_or_else(|| response.original_dimensions());
                state.reference = Some(reference);
                state.resolution = Some(Resolution::Loaded(response));
            }
            Err(err) => {
                log::warn!("Image resolution failed: {}", err);
                state.resolution = Some(Resolution::Failed(err.to_string()));
            }
        }
        true
    }
}
