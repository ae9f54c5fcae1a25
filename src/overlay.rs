//! Overlay assembly: scaled boxes joined with category metadata.
//!
//! The assembler maps every plottable annotation from reference space into
//! rendered space and attaches the styling the host needs to draw it. Missing
//! categories or filter options never fail a render; the box is simply drawn
//! unstyled or unlabelled.

use serde::Serialize;

use crate::color_utils;
use crate::config::RendererConfig;
use crate::constants::{label, overlay};
use crate::geometry::{ScaledAnnotation, ThumbnailCrop, scale_to_fitted_image};
use crate::model::{
    Annotation, CategoryFilter, CategoryFilterOption, CategoryId, CategoryStore, Dimensions,
};

/// Border and fill of one overlay box.
///
/// `None` colors mean transparent.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OverlayStyle {
    pub border_width: f64,
    pub border_color: Option<String>,
    pub background: Option<String>,
}

impl OverlayStyle {
    /// CSS border shorthand, if the box has a border color.
    pub fn border(&self) -> Option<String> {
        self.border_color
            .as_deref()
            .map(|color| color_utils::border(self.border_width, color))
    }
}

/// Category name tag drawn above a box.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OverlayLabel {
    pub text: String,
    pub background: Option<String>,
    pub text_color: &'static str,
    pub top: f64,
    pub left: f64,
    pub font_size: f64,
    pub font_weight: u16,
    pub padding_x: f64,
}

impl OverlayLabel {
    fn new(text: &str, background: Option<String>) -> Self {
        Self {
            text: text.to_string(),
            background,
            text_color: label::TEXT_COLOR,
            top: label::TOP,
            left: label::LEFT,
            font_size: label::FONT_SIZE,
            font_weight: label::FONT_WEIGHT,
            padding_x: label::PADDING_X,
        }
    }
}

/// A box ready to be drawn over the rendered image.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OverlayDescriptor {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub category_id: CategoryId,
    /// Active filter option for this category
    pub filter_option: Option<CategoryFilterOption>,
    /// Category name tag, outside thumbnail mode only
    pub label: Option<OverlayLabel>,
    pub style: OverlayStyle,
    /// Stacking order; later boxes draw on top
    pub z_index: i32,
}

impl OverlayDescriptor {
    /// Stacking order while the pointer is over this box.
    pub fn hovered_z_index(&self) -> i32 {
        overlay::HOVER_Z_INDEX
    }
}

/// Builds overlay descriptors from annotations and the injected category stores.
pub struct OverlayAssembler<'a> {
    categories: &'a dyn CategoryStore,
    filter: &'a dyn CategoryFilter,
    config: &'a RendererConfig,
}

impl<'a> OverlayAssembler<'a> {
    pub fn new(
        categories: &'a dyn CategoryStore,
        filter: &'a dyn CategoryFilter,
        config: &'a RendererConfig,
    ) -> Self {
        Self {
            categories,
            filter,
            config,
        }
    }

    /// Scale every annotation that has a box, in input order.
    ///
    /// With a thumbnail crop the single annotation is scaled from its position
    /// inside the crop, and its origin is then pinned to the scaled padding.
    pub fn scale_all<'b>(
        &self,
        annotations: &'b [Annotation],
        reference: Dimensions,
        rendered: Dimensions,
        thumbnail: bool,
        crop: Option<&ThumbnailCrop>,
    ) -> Vec<ScaledAnnotation<'b>> {
        let mut scaled: Vec<ScaledAnnotation<'b>> = annotations
            .iter()
            .filter_map(|annotation| {
                let bbox = match crop {
                    Some(crop) if annotations.len() == 1 => crop.local_bbox,
                    _ => annotation.bbox?,
                };
                Some(scale_to_fitted_image(reference, rendered, annotation, &bbox))
            })
            .collect();

        if let (true, [only]) = (thumbnail, scaled.as_mut_slice()) {
            match crop {
                Some(crop) => {
                    only.x = crop.padding_x * only.scale_x;
                    only.y = crop.padding_y * only.scale_y;
                }
                None => log::debug!("Thumbnail box without crop window, keeping scaled origin"),
            }
        }

        scaled
    }

    /// Produce the overlay descriptors for one render.
    pub fn assemble(
        &self,
        annotations: &[Annotation],
        reference: Dimensions,
        rendered: Dimensions,
        thumbnail: bool,
        crop: Option<&ThumbnailCrop>,
    ) -> Vec<OverlayDescriptor> {
        if !annotations.iter().any(Annotation::has_bbox) {
            return Vec::new();
        }

        self.scale_all(annotations, reference, rendered, thumbnail, crop)
            .into_iter()
            .enumerate()
            .map(|(index, scaled)| self.describe(index, &scaled, thumbnail))
            .collect()
    }

    fn describe(
        &self,
        index: usize,
        scaled: &ScaledAnnotation<'_>,
        thumbnail: bool,
    ) -> OverlayDescriptor {
        let category_id = scaled.annotation.category_id;
        let filter_option = self.filter.option(category_id).cloned();
        let color = filter_option.as_ref().map(|o| o.color.as_str());

        let style = OverlayStyle {
            border_width: self.config.border_width(thumbnail),
            border_color: color.map(str::to_string),
            background: color
                .map(|c| color_utils::with_opacity(c, self.config.fill_opacity(thumbnail))),
        };

        let label = if thumbnail {
            None
        } else {
            match self.categories.category(category_id) {
                Some(category) => Some(OverlayLabel::new(
                    &category.name,
                    color.map(str::to_string),
                )),
                None => {
                    log::debug!("No category {} for overlay label", category_id);
                    None
                }
            }
        };

        OverlayDescriptor {
            x: scaled.x,
            y: scaled.y,
            width: scaled.width,
            height: scaled.height,
            category_id,
            filter_option,
            label,
            style,
            z_index: i32::try_from(index).unwrap_or(i32::MAX),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{BBox, Category};

    const EPSILON: f64 = 1e-9;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < EPSILON
    }

    fn categories() -> Vec<Category> {
        vec![
            Category::new(1, "person", "#e6194b"),
            Category::new(2, "car", "#3cb44b"),
        ]
    }

    fn filter() -> Vec<CategoryFilterOption> {
        vec![CategoryFilterOption::new(1, "#e6194b")]
    }

    #[test]
    fn test_no_bboxes_yields_empty() {
        let (cats, filt, config) = (categories(), filter(), RendererConfig::default());
        let assembler = OverlayAssembler::new(&cats, &filt, &config);
        let annotations = [Annotation::without_bbox(1), Annotation::without_bbox(2)];

        let overlays = assembler.assemble(
            &annotations,
            Dimensions::new(100.0, 100.0),
            Dimensions::new(50.0, 50.0),
            true,
            None,
        );

        assert!(overlays.is_empty());
        assert!(ThumbnailCrop::for_plot(&annotations, true, 0.2).is_none());
    }

    #[test]
    fn test_thumbnail_reference_scenario() {
        let (cats, filt, config) = (categories(), filter(), RendererConfig::default());
        let assembler = OverlayAssembler::new(&cats, &filt, &config);
        let annotations = [Annotation::new(BBox::new(10.0, 10.0, 20.0, 20.0), 1)];
        let crop = ThumbnailCrop::for_plot(&annotations, true, 0.2).unwrap();

        let overlays = assembler.assemble(
            &annotations,
            crop.window.dimensions(),
            Dimensions::new(140.0, 140.0),
            true,
            Some(&crop),
        );

        assert_eq!(overlays.len(), 1);
        let o = &overlays[0];
        assert!(approx_eq(o.x, 20.0));
        assert!(approx_eq(o.y, 20.0));
        assert!(approx_eq(o.width, 100.0));
        assert!(approx_eq(o.height, 100.0));
        assert!(o.label.is_none());
        assert_eq!(o.style.border().as_deref(), Some("0.5px solid #e6194b"));
        assert_eq!(o.style.background.as_deref(), Some("#e6194b1A"));
    }

    #[test]
    fn test_thumbnail_override_uses_padding_per_axis() {
        let (cats, filt, config) = (categories(), filter(), RendererConfig::default());
        let assembler = OverlayAssembler::new(&cats, &filt, &config);
        let annotations = [Annotation::new(BBox::new(50.0, 20.0, 40.0, 10.0), 2)];
        let crop = ThumbnailCrop::for_plot(&annotations, true, 0.2).unwrap();

        // Crop is 56x14; render it at 112x70 so the axes scale differently
        let scaled = assembler.scale_all(
            &annotations,
            crop.window.dimensions(),
            Dimensions::new(112.0, 70.0),
            true,
            Some(&crop),
        );

        assert!(approx_eq(scaled[0].scale_x, 2.0));
        assert!(approx_eq(scaled[0].scale_y, 5.0));
        assert!(approx_eq(scaled[0].x, 8.0 * 2.0));
        assert!(approx_eq(scaled[0].y, 2.0 * 5.0));
    }

    #[test]
    fn test_multiple_annotations_in_thumbnail_not_repositioned() {
        let (cats, filt, config) = (categories(), filter(), RendererConfig::default());
        let assembler = OverlayAssembler::new(&cats, &filt, &config);
        let annotations = [
            Annotation::new(BBox::new(10.0, 20.0, 5.0, 5.0), 1),
            Annotation::new(BBox::new(40.0, 60.0, 5.0, 5.0), 2),
        ];
        assert!(ThumbnailCrop::for_plot(&annotations, true, 0.2).is_none());

        let overlays = assembler.assemble(
            &annotations,
            Dimensions::new(100.0, 100.0),
            Dimensions::new(200.0, 200.0),
            true,
            None,
        );

        assert_eq!(overlays.len(), 2);
        assert!(approx_eq(overlays[0].x, 20.0));
        assert!(approx_eq(overlays[0].y, 40.0));
        assert!(approx_eq(overlays[1].x, 80.0));
        assert!(approx_eq(overlays[1].y, 120.0));
    }

    #[test]
    fn test_malformed_annotations_skipped_order_kept() {
        let (cats, filt, config) = (categories(), filter(), RendererConfig::default());
        let assembler = OverlayAssembler::new(&cats, &filt, &config);
        let annotations = [
            Annotation::new(BBox::new(1.0, 1.0, 1.0, 1.0), 2),
            Annotation::without_bbox(1),
            Annotation::new(BBox::new(2.0, 2.0, 1.0, 1.0), 1),
        ];

        let overlays = assembler.assemble(
            &annotations,
            Dimensions::new(10.0, 10.0),
            Dimensions::new(10.0, 10.0),
            false,
            None,
        );

        let ids: Vec<_> = overlays.iter().map(|o| o.category_id).collect();
        assert_eq!(ids, vec![2, 1]);
        assert_eq!(overlays[0].z_index, 0);
        assert_eq!(overlays[1].z_index, 1);
        assert_eq!(overlays[1].hovered_z_index(), 999);
    }

    #[test]
    fn test_normal_mode_labels_and_styles() {
        let (cats, filt, config) = (categories(), filter(), RendererConfig::default());
        let assembler = OverlayAssembler::new(&cats, &filt, &config);
        let annotations = [Annotation::new(BBox::new(0.0, 0.0, 10.0, 10.0), 1)];

        let overlays = assembler.assemble(
            &annotations,
            Dimensions::new(10.0, 10.0),
            Dimensions::new(10.0, 10.0),
            false,
            None,
        );

        let o = &overlays[0];
        let label = o.label.as_ref().unwrap();
        assert_eq!(label.text, "person");
        assert_eq!(label.background.as_deref(), Some("#e6194b"));
        assert_eq!(label.text_color, "white");
        assert_eq!(o.style.border().as_deref(), Some("2px solid #e6194b"));
        assert_eq!(o.style.background.as_deref(), Some("#e6194b33"));
    }

    #[test]
    fn test_unfiltered_category_is_transparent() {
        let (cats, filt, config) = (categories(), filter(), RendererConfig::default());
        let assembler = OverlayAssembler::new(&cats, &filt, &config);
        let annotations = [Annotation::new(BBox::new(0.0, 0.0, 10.0, 10.0), 2)];

        let overlays = assembler.assemble(
            &annotations,
            Dimensions::new(10.0, 10.0),
            Dimensions::new(10.0, 10.0),
            false,
            None,
        );

        let o = &overlays[0];
        assert!(o.filter_option.is_none());
        assert!(o.style.border().is_none());
        assert!(o.style.background.is_none());
        assert_eq!(o.label.as_ref().map(|l| l.text.as_str()), Some("car"));
    }

    #[test]
    fn test_unknown_category_has_no_label() {
        let (cats, filt, config) = (categories(), filter(), RendererConfig::default());
        let assembler = OverlayAssembler::new(&cats, &filt, &config);
        let annotations = [Annotation::new(BBox::new(0.0, 0.0, 10.0, 10.0), 77)];

        let overlays = assembler.assemble(
            &annotations,
            Dimensions::new(10.0, 10.0),
            Dimensions::new(10.0, 10.0),
            false,
            None,
        );

        assert_eq!(overlays.len(), 1);
        assert!(overlays[0].label.is_none());
    }
}
