//! The compositor side of a layer surface, seen through traits.
//!
//! [`crate::wayland`] implements these for the real `zwlr_layer_shell_v1`
//! objects. Anything else implementing them (a recording double in the tests,
//! for instance) drives [`crate::LayerSurface`] the same way.

use wayland_protocols_wlr::layer_shell::v1::client::{
    zwlr_layer_shell_v1::Layer,
    zwlr_layer_surface_v1::{Anchor, KeyboardInteractivity},
};

use crate::id;

/// An event the compositor sends to a layer surface object.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayerSurfaceEvent {
    /// The compositor suggests a size. `serial` has to be acknowledged.
    Configure {
        serial: u32,
        width: u32,
        height: u32,
    },
    /// The compositor destroyed the surface on its side.
    Closed,
}

/// Requests on a live layer surface object.
///
/// Equality is object identity: a recreated object never equals the one it
/// replaced.
pub trait LayerSurfaceProxy: PartialEq {
    type Popup;

    fn ack_configure(&self, serial: u32);
    fn set_keyboard_interactivity(&self, interactivity: KeyboardInteractivity);
    fn set_anchor(&self, anchor: Anchor);
    fn set_exclusive_zone(&self, zone: i32);
    fn set_size(&self, width: u32, height: u32);
    /// Roots an already created popup under this layer surface.
    fn get_popup(&self, popup: &Self::Popup);
    fn destroy(&self);
}

/// The layer shell global.
pub trait LayerShellFactory {
    type Surface;
    type Output;
    type LayerSurface: LayerSurfaceProxy;

    /// Creates the layer surface object for `surface`.
    ///
    /// Events for the new object are delivered under `id`. `None` means the
    /// compositor side refused or the object is already dead.
    fn get_layer_surface(
        &self,
        surface: &Self::Surface,
        output: Option<&Self::Output>,
        layer: Layer,
        namespace: String,
        id: id::Id,
    ) -> Option<Self::LayerSurface>;
}

/// Everything a layer surface needs from the wayland connection.
pub trait ShellBackend {
    /// The drawable (`wl_surface`).
    type Surface: Clone;
    /// A physical display (`wl_output`).
    type Output: Clone + PartialEq;
    /// The xdg surface a popup is built from.
    type PopupSurface;
    type Positioner;
    type Popup;
    type LayerSurface: LayerSurfaceProxy<Popup = Self::Popup>;
    type LayerShell: LayerShellFactory<
            Surface = Self::Surface,
            Output = Self::Output,
            LayerSurface = Self::LayerSurface,
        >;

    /// Looks up the layer shell global, `None` if the compositor lacks it.
    fn layer_shell(&self) -> Option<&Self::LayerShell>;

    /// Creates an xdg popup without a parent.
    fn create_popup(
        &self,
        popup_surface: &Self::PopupSurface,
        positioner: &Self::Positioner,
    ) -> Self::Popup;

    fn commit(&self, surface: &Self::Surface);
}
