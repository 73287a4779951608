use wayland_protocols_wlr::layer_shell::v1::client::{
    zwlr_layer_shell_v1::Layer, zwlr_layer_surface_v1::Anchor,
};

/// The initial configuration of a [`crate::LayerSurface`].
///
/// ```rust
/// use layershellrole::LayerSurfaceSettings;
/// use layershellrole::reexport::{Anchor, Layer};
///
/// let settings: LayerSurfaceSettings<()> = LayerSurfaceSettings::default()
///     .with_layer(Layer::Bottom)
///     .with_anchor(Anchor::Bottom | Anchor::Left | Anchor::Right)
///     .with_exclusive_zone(30);
/// assert_eq!(settings.exclusive_zone, 30);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct LayerSurfaceSettings<O> {
    pub layer: Layer,
    pub anchor: Anchor,
    pub exclusive_zone: i32,
    /// `None` lets the compositor pick the output.
    pub output: Option<O>,
}

impl<O> Default for LayerSurfaceSettings<O> {
    fn default() -> Self {
        Self {
            layer: Layer::Top,
            anchor: Anchor::empty(),
            exclusive_zone: 0,
            output: None,
        }
    }
}

impl<O> LayerSurfaceSettings<O> {
    pub fn with_layer(mut self, layer: Layer) -> Self {
        self.layer = layer;
        self
    }

    pub fn with_anchor(mut self, anchor: Anchor) -> Self {
        self.anchor = anchor;
        self
    }

    pub fn with_exclusive_zone(mut self, exclusive_zone: i32) -> Self {
        self.exclusive_zone = exclusive_zone;
        self
    }

    pub fn with_output(mut self, output: O) -> Self {
        self.output = Some(output);
        self
    }
}
