//! Global constants for the overlay renderer

/// Fraction of the annotation size added on each side of a thumbnail crop
pub const DEFAULT_PAD_RATIO: f64 = 0.2;

/// Edge length of the placeholder shown while the image is being resolved
pub const DEFAULT_PLACEHOLDER_SIZE: u32 = 200;

/// Prefix for the `src` of a resolved image
pub const IMAGE_DATA_URI_PREFIX: &str = "data:image/jpeg;base64,";

/// Prefix of resolver error messages shown to the user
pub const ERROR_MESSAGE_PREFIX: &str = "Oh no...";

/// Overlay box styling
pub mod overlay {
    /// Border width in normal mode (px)
    pub const BORDER_WIDTH: f64 = 2.0;
    /// Border width in thumbnail mode (px)
    pub const THUMBNAIL_BORDER_WIDTH: f64 = 0.5;
    /// Fill opacity in normal mode
    pub const FILL_OPACITY: f64 = 0.2;
    /// Fill opacity in thumbnail mode
    pub const THUMBNAIL_FILL_OPACITY: f64 = 0.1;
    /// Z-index a box is raised to while hovered
    pub const HOVER_Z_INDEX: i32 = 999;
}

/// Category label drawn above each box outside thumbnail mode
pub mod label {
    pub const TEXT_COLOR: &str = "white";
    /// Offset from the box's top edge (px)
    pub const TOP: f64 = -19.0;
    /// Offset from the box's left edge (px)
    pub const LEFT: f64 = -2.0;
    pub const FONT_SIZE: f64 = 12.0;
    pub const FONT_WEIGHT: u16 = 600;
    /// Horizontal padding (px)
    pub const PADDING_X: f64 = 4.0;
}
