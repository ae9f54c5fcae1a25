//! Image renderer: ties request building, resolution and overlay assembly
//! together for one displayed image.

use std::rc::Rc;

use serde::Serialize;

use crate::config::RendererConfig;
use crate::constants::ERROR_MESSAGE_PREFIX;
use crate::geometry::{CropWindow, ThumbnailCrop};
use crate::lifecycle::{
    DisplayLifecycle, ImageElement, RequestTicket, ResizeEvents, ResizeSubscription, Resolution,
};
use crate::model::{Annotation, CategoryFilter, CategoryStore};
use crate::overlay::{OverlayAssembler, OverlayDescriptor};
use crate::resolver::{ImageRequest, ImageResolver, ImageResponse, ResolveError};

/// What to display and how.
#[derive(Debug, Clone, PartialEq)]
pub struct RendererProps {
    /// Opaque image identifier: file path, URL or MNIST entry
    pub identifier: String,
    /// Annotations to plot over the image
    pub annotations: Vec<Annotation>,
    /// Request a padded crop around a single annotation
    pub thumbnail: bool,
}

impl RendererProps {
    pub fn new(identifier: impl Into<String>, annotations: Vec<Annotation>) -> Self {
        Self {
            identifier: identifier.into(),
            annotations,
            thumbnail: false,
        }
    }

    pub fn thumbnail(mut self, thumbnail: bool) -> Self {
        self.thumbnail = thumbnail;
        self
    }
}

/// Overlay container placed over the rendered image.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OverlayLayer {
    pub width: f64,
    pub height: f64,
    pub boxes: Vec<OverlayDescriptor>,
}

/// What the host should display.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum View {
    /// Resolution failed
    Error { message: String },
    /// Still waiting for the resolver
    Placeholder { width: u32, height: u32 },
    /// Image, plus its overlay once both sizes are known
    Image {
        src: String,
        overlay: Option<OverlayLayer>,
    },
}

/// A request started with [`ImageRenderer::begin_load`].
#[derive(Debug, Clone)]
pub struct PendingLoad {
    pub request: ImageRequest,
    ticket: RequestTicket,
    crop: Option<CropWindow>,
}

/// Renders one image with its annotation overlay.
pub struct ImageRenderer {
    props: RendererProps,
    config: RendererConfig,
    categories: Rc<dyn CategoryStore>,
    filter: Rc<dyn CategoryFilter>,
    crop: Option<ThumbnailCrop>,
    lifecycle: DisplayLifecycle,
}

impl ImageRenderer {
    pub fn new(
        props: RendererProps,
        config: RendererConfig,
        categories: Rc<dyn CategoryStore>,
        filter: Rc<dyn CategoryFilter>,
    ) -> Self {
        let crop = ThumbnailCrop::for_plot(&props.annotations, props.thumbnail, config.pad_ratio);
        Self {
            props,
            config,
            categories,
            filter,
            crop,
            lifecycle: DisplayLifecycle::new(),
        }
    }

    pub fn props(&self) -> &RendererProps {
        &self.props
    }

    /// Thumbnail crop in effect for the current props.
    pub fn crop(&self) -> Option<&ThumbnailCrop> {
        self.crop.as_ref()
    }

    pub fn lifecycle(&self) -> &DisplayLifecycle {
        &self.lifecycle
    }

    /// Replace the props. The caller should start a new load afterwards.
    ///
    /// The previous image and its reference size are dropped, so the
    /// placeholder shows until the new response arrives.
    pub fn set_props(&mut self, props: RendererProps) {
        self.crop =
            ThumbnailCrop::for_plot(&props.annotations, props.thumbnail, self.config.pad_ratio);
        self.props = props;
        self.lifecycle.reset_resolution();
    }

    /// Resolver request for the current props.
    pub fn request(&self) -> ImageRequest {
        let request = ImageRequest::new(self.props.identifier.clone(), self.props.thumbnail);
        match &self.crop {
            Some(crop) => request.with_crop(&crop.window),
            None => request,
        }
    }

    /// Start a request whose result is applied with [`Self::finish_load`].
    pub fn begin_load(&self) -> PendingLoad {
        let request = self.request();
        log::info!(
            "Resolving '{}' via {} resolver",
            request.identifier,
            request.resolver_name.name()
        );
        PendingLoad {
            ticket: self.lifecycle.begin_request(),
            crop: request.crop(),
            request,
        }
    }

    /// Apply the result of `pending`. Returns `false` if a newer load superseded it.
    pub fn finish_load(
        &self,
        pending: PendingLoad,
        result: Result<ImageResponse, ResolveError>,
    ) -> bool {
        self.lifecycle
            .apply_result(pending.ticket, result, pending.crop.as_ref())
    }

    /// Resolve the image for the current props.
    pub async fn load<R: ImageResolver>(&self, resolver: &R) -> bool {
        let pending = self.begin_load();
        let result = resolver.resolve(&pending.request).await;
        self.finish_load(pending, result)
    }

    /// Handle the image element's load event.
    pub fn on_image_load(&self, element: &dyn ImageElement) {
        self.lifecycle.on_image_load(element.rendered_size());
    }

    /// Follow viewport resizes until the subscription is dropped.
    pub fn mount(
        &self,
        events: Rc<dyn ResizeEvents>,
        element: Rc<dyn ImageElement>,
    ) -> ResizeSubscription {
        self.lifecycle.mount(events, element)
    }

    /// Overlay boxes for the current sizes; empty until both are known.
    pub fn overlays(&self) -> Vec<OverlayDescriptor> {
        self.overlay_layer().map(|layer| layer.boxes).unwrap_or_default()
    }

    fn overlay_layer(&self) -> Option<OverlayLayer> {
        let (reference, rendered) = self.lifecycle.scaling_inputs()?;
        // A crop defines the reference space regardless of the stored size
        let reference = self
            .crop
            .as_ref()
            .map(|crop| crop.window.dimensions())
            .unwrap_or(reference);
        let assembler =
            OverlayAssembler::new(&*self.categories, &*self.filter, &self.config);
        let boxes = assembler.assemble(
            &self.props.annotations,
            reference,
            rendered,
            self.props.thumbnail,
            self.crop.as_ref(),
        );
        Some(OverlayLayer {
            width: rendered.width,
            height: rendered.height,
            boxes,
        })
    }

    /// Current view.
    pub fn view(&self) -> View {
        match self.lifecycle.resolution() {
            Some(Resolution::Failed(message)) => View::Error {
                message: format!("{} {}", ERROR_MESSAGE_PREFIX, message),
            },
            None => View::Placeholder {
                width: self.config.placeholder_size,
                height: self.config.placeholder_size,
            },
            Some(Resolution::Loaded(response)) => View::Image {
                src: response.data_uri(),
                overlay: self.overlay_layer(),
            },
        }
    }
}
