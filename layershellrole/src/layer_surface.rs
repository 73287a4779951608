use std::rc::Rc;

use wayland_protocols_wlr::layer_shell::v1::client::{
    zwlr_layer_shell_v1::Layer,
    zwlr_layer_surface_v1::{Anchor, KeyboardInteractivity},
};

use crate::LayerSurfaceError;
use crate::id;
use crate::protocol::{LayerShellFactory, LayerSurfaceEvent, LayerSurfaceProxy, ShellBackend};
use crate::role::{RoleBase, SurfaceRole};
use crate::settings::LayerSurfaceSettings;
use crate::window::ToolkitWindow;

/// The namespace used when the window has no title.
pub const DEFAULT_NAMESPACE: &str = "gtk-layer-shell";

/// A toolkit window presented through `zwlr_layer_shell_v1`.
///
/// Anchor and exclusive zone can change at any time. Layer and output can
/// only be given when the layer surface object is created, so changing them
/// while mapped recreates the object on the same drawable.
pub struct LayerSurface<B: ShellBackend, W: ToolkitWindow> {
    base: RoleBase<B, W>,

    // set by the toolkit's size allocation
    cached_size: Option<(u32, u32)>,

    // can be set at any time
    anchor: Anchor,
    exclusive_zone: i32,

    // need the object to be recreated to change
    output: Option<B::Output>,
    layer: Layer,

    last_configure_size: Option<(u32, u32)>,
    layer_surface: Option<B::LayerSurface>,
}

impl<B: ShellBackend, W: ToolkitWindow> LayerSurface<B, W> {
    pub fn new(backend: Rc<B>, window: W) -> Self {
        Self::with_settings(backend, window, LayerSurfaceSettings::default())
    }

    /// Creates the layer surface of `window`. The window loses its
    /// decorations and starts reporting its size allocations to it.
    pub fn with_settings(
        backend: Rc<B>,
        mut window: W,
        settings: LayerSurfaceSettings<B::Output>,
    ) -> Self {
        window.set_decorated(false);
        let base = RoleBase::new(backend, window);
        let id = base.id();
        let mut layer_surface = Self {
            base,
            cached_size: None,
            anchor: settings.anchor,
            exclusive_zone: settings.exclusive_zone,
            output: settings.output,
            layer: settings.layer,
            last_configure_size: None,
            layer_surface: None,
        };
        layer_surface.base.window_mut().connect_size_allocate(id);
        layer_surface
    }

    pub fn id(&self) -> id::Id {
        self.base.id()
    }

    /// Whether the layer surface object currently exists.
    pub fn is_mapped(&self) -> bool {
        self.layer_surface.is_some()
    }

    pub fn layer(&self) -> Layer {
        self.layer
    }

    pub fn anchor(&self) -> Anchor {
        self.anchor
    }

    pub fn exclusive_zone(&self) -> i32 {
        self.exclusive_zone
    }

    pub fn output(&self) -> Option<&B::Output> {
        self.output.as_ref()
    }

    /// The last size the toolkit allocated, `None` before the first layout.
    pub fn cached_size(&self) -> Option<(u32, u32)> {
        self.cached_size
    }

    /// The size suggested by the last configure event.
    pub fn last_configure_size(&self) -> Option<(u32, u32)> {
        self.last_configure_size
    }

    /// The live layer surface object.
    pub fn protocol_object(&self) -> Option<&B::LayerSurface> {
        self.layer_surface.as_ref()
    }

    pub fn window(&self) -> &W {
        self.base.window()
    }

    /// The namespace given to the compositor: the window title if any.
    pub fn namespace(&self) -> String {
        self.base
            .window()
            .title()
            .unwrap_or_else(|| DEFAULT_NAMESPACE.to_owned())
    }

    pub fn set_layer(&mut self, layer: Layer) {
        if self.layer == layer {
            return;
        }
        self.layer = layer;
        if self.layer_surface.is_some() {
            self.remap_or_warn();
        }
    }

    /// Sets the output the surface is shown on, `None` lets the compositor
    /// choose.
    pub fn set_output(&mut self, output: Option<B::Output>) {
        if self.output == output {
            return;
        }
        self.output = output;
        if self.layer_surface.is_some() {
            self.remap_or_warn();
        }
    }

    /// Anchors the surface to the given edges of the output.
    pub fn set_anchor(&mut self, left: bool, right: bool, top: bool, bottom: bool) {
        let mut anchor = Anchor::empty();
        anchor.set(Anchor::Left, left);
        anchor.set(Anchor::Right, right);
        anchor.set(Anchor::Top, top);
        anchor.set(Anchor::Bottom, bottom);
        self.set_anchor_edges(anchor);
    }

    pub fn set_anchor_edges(&mut self, anchor: Anchor) {
        if self.anchor == anchor {
            return;
        }
        self.anchor = anchor;
        if let Some(layer_surface) = &self.layer_surface {
            layer_surface.set_anchor(anchor);
            self.needs_commit();
        }
    }

    pub fn set_exclusive_zone(&mut self, exclusive_zone: i32) {
        if self.exclusive_zone == exclusive_zone {
            return;
        }
        self.exclusive_zone = exclusive_zone;
        if let Some(layer_surface) = &self.layer_surface {
            layer_surface.set_exclusive_zone(exclusive_zone);
            self.needs_commit();
        }
    }

    /// The toolkit laid the window out at `width` x `height`.
    pub fn size_allocate(&mut self, width: u32, height: u32) {
        let size = (width, height);
        if let Some(layer_surface) = &self.layer_surface
            && self.cached_size != Some(size)
        {
            layer_surface.set_size(width, height);
        }
        self.cached_size = Some(size);
    }

    /// Handles an event the compositor sent to `layer_surface`.
    ///
    /// Events queued for an object this surface already destroyed (by
    /// `unmap` or a remap) are dropped.
    pub fn handle_event(&mut self, layer_surface: &B::LayerSurface, event: LayerSurfaceEvent) {
        if self.layer_surface.as_ref() != Some(layer_surface) {
            log::debug!(
                "{}: {event:?} for a destroyed layer surface object",
                self.id()
            );
            return;
        }
        match event {
            LayerSurfaceEvent::Configure {
                serial,
                width,
                height,
            } => {
                layer_surface.ack_configure(serial);
                // TODO: let the toolkit resize the window to the suggestion
                // once it can tell it apart from its own allocations
                self.last_configure_size = Some((width, height));
                self.base.window_mut().configure_hint(width, height);
            }
            LayerSurfaceEvent::Closed => {
                log::info!("{}: layer surface closed by the compositor", self.id());
                self.unmap();
                self.base.window_mut().request_close();
            }
        }
    }

    fn remap_or_warn(&mut self) {
        if let Err(err) = self.remap() {
            log::warn!("{}: remap failed, surface stays unmapped: {err}", self.id());
        }
    }
}

impl<B: ShellBackend, W: ToolkitWindow> SurfaceRole for LayerSurface<B, W> {
    type Backend = B;
    type Window = W;

    fn base(&self) -> &RoleBase<B, W> {
        &self.base
    }

    fn base_mut(&mut self) -> &mut RoleBase<B, W> {
        &mut self.base
    }

    fn map(&mut self, drawable: &B::Surface) -> Result<(), LayerSurfaceError> {
        if self.layer_surface.is_some() {
            log::error!("{}: map called while already mapped", self.id());
            return Err(LayerSurfaceError::InvalidState(
                "the layer surface object already exists",
            ));
        }

        let namespace = self.namespace();
        let Some(layer_shell) = self.base.backend().layer_shell() else {
            log::warn!(
                "{}: the compositor does not support zwlr_layer_shell_v1",
                self.id()
            );
            return Err(LayerSurfaceError::CapabilityUnavailable);
        };
        let Some(layer_surface) = layer_shell.get_layer_surface(
            drawable,
            self.output.as_ref(),
            self.layer,
            namespace,
            self.base.id(),
        ) else {
            log::warn!("{}: failed to create the layer surface object", self.id());
            return Err(LayerSurfaceError::ProtocolObjectCreationFailed);
        };

        layer_surface.set_keyboard_interactivity(KeyboardInteractivity::None);
        layer_surface.set_anchor(self.anchor);
        layer_surface.set_exclusive_zone(self.exclusive_zone);
        if let Some((width, height)) = self.cached_size {
            layer_surface.set_size(width, height);
        }

        log::debug!("{}: mapped on layer {:?}", self.id(), self.layer);
        self.layer_surface = Some(layer_surface);
        self.base.attach(drawable.clone());
        Ok(())
    }

    fn unmap(&mut self) {
        if let Some(layer_surface) = self.layer_surface.take() {
            layer_surface.destroy();
            log::debug!("{}: unmapped", self.id());
        }
        self.base.detach();
    }

    fn get_popup(
        &self,
        popup_surface: &B::PopupSurface,
        positioner: &B::Positioner,
    ) -> Result<B::Popup, LayerSurfaceError> {
        let Some(layer_surface) = &self.layer_surface else {
            log::error!(
                "{}: get_popup called before the layer surface object was created",
                self.id()
            );
            return Err(LayerSurfaceError::InvalidState(
                "the layer surface object does not exist",
            ));
        };
        let popup = self.base.backend().create_popup(popup_surface, positioner);
        layer_surface.get_popup(&popup);
        Ok(popup)
    }
}

impl<B: ShellBackend, W: ToolkitWindow> Drop for LayerSurface<B, W> {
    fn drop(&mut self) {
        self.finalize();
    }
}

impl<B: ShellBackend, W: ToolkitWindow> std::fmt::Debug for LayerSurface<B, W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LayerSurface")
            .field("id", &self.id())
            .field("mapped", &self.is_mapped())
            .field("layer", &self.layer)
            .field("anchor", &self.anchor)
            .field("exclusive_zone", &self.exclusive_zone)
            .field("has_output", &self.output.is_some())
            .field("cached_size", &self.cached_size)
            .finish()
    }
}
