//! # Give a toolkit window the layer shell role
//!
//! A [`LayerSurface`] presents a toolkit window through `zwlr_layer_shell_v1`
//! instead of as a normal toplevel. It keeps the anchor, exclusive zone,
//! layer, output and size of the window across the life of the protocol
//! object, creates the object when the toolkit maps the window's
//! `wl_surface`, and recreates it when layer or output change.
//!
//! Min example is under
//!
//! ```rust, no_run
//! use std::rc::Rc;
//!
//! use layershellrole::reexport::wayland_client::{
//!     Connection, Dispatch, QueueHandle, delegate_dispatch, delegate_noop,
//!     globals::{GlobalListContents, registry_queue_init},
//!     protocol::{wl_compositor::WlCompositor, wl_registry, wl_surface::WlSurface},
//! };
//! use layershellrole::reexport::{XdgPopup, ZwlrLayerShellV1, ZwlrLayerSurfaceV1};
//! use layershellrole::wayland::{
//!     LayerShellData, LayerSurfaceData, LayerSurfaceHandler, WaylandBackend,
//! };
//! use layershellrole::*;
//!
//! struct Bar;
//!
//! impl ToolkitWindow for Bar {
//!     fn title(&self) -> Option<String> {
//!         Some("bar".to_owned())
//!     }
//!     fn set_decorated(&mut self, _decorated: bool) {}
//!     fn connect_size_allocate(&mut self, _id: id::Id) {}
//!     fn request_close(&mut self) {
//!         std::process::exit(0);
//!     }
//! }
//!
//! struct State {
//!     surfaces: ShellSurfaces<WaylandBackend<State>, Bar>,
//! }
//!
//! impl Dispatch<wl_registry::WlRegistry, GlobalListContents> for State {
//!     fn event(
//!         _state: &mut Self,
//!         _proxy: &wl_registry::WlRegistry,
//!         _event: wl_registry::Event,
//!         _data: &GlobalListContents,
//!         _conn: &Connection,
//!         _qh: &QueueHandle<Self>,
//!     ) {
//!     }
//! }
//!
//! impl LayerSurfaceHandler for State {
//!     fn layer_surface_event(
//!         &mut self,
//!         id: id::Id,
//!         layer_surface: &ZwlrLayerSurfaceV1,
//!         event: LayerSurfaceEvent,
//!     ) {
//!         self.surfaces.dispatch_layer_event(id, layer_surface, event);
//!     }
//! }
//!
//! delegate_noop!(State: WlCompositor);
//! delegate_noop!(State: ignore WlSurface);
//! delegate_noop!(State: ignore XdgPopup);
//! delegate_dispatch!(State: [ZwlrLayerShellV1: LayerShellData] => ());
//! delegate_dispatch!(State: [ZwlrLayerSurfaceV1: LayerSurfaceData] => ());
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let connection = Connection::connect_to_env()?;
//!     let (globals, mut event_queue) = registry_queue_init::<State>(&connection)?;
//!     let qh = event_queue.handle();
//!     let compositor: WlCompositor = globals.bind(&qh, 1..=6, ())?;
//!     let backend = Rc::new(WaylandBackend::bind(&globals, &qh));
//!
//!     let mut bar = LayerSurface::new(backend, Bar);
//!     bar.set_anchor(true, true, false, true);
//!     bar.set_exclusive_zone(32);
//!     bar.size_allocate(0, 32);
//!
//!     let mut state = State {
//!         surfaces: ShellSurfaces::default(),
//!     };
//!     let id = state.surfaces.insert(bar);
//!     let wl_surface = compositor.create_surface(&qh, ());
//!     state.surfaces.map(id, &wl_surface)?;
//!     wl_surface.commit();
//!
//!     loop {
//!         event_queue.blocking_dispatch(&mut state)?;
//!         state.surfaces.flush_commits();
//!     }
//! }
//! ```
//!

pub mod id;
mod layer_surface;
pub mod protocol;
mod registry;
mod role;
mod settings;
#[cfg(test)]
mod test_support;
pub mod wayland;
mod window;

pub use layer_surface::{DEFAULT_NAMESPACE, LayerSurface};
pub use protocol::{LayerShellFactory, LayerSurfaceEvent, LayerSurfaceProxy, ShellBackend};
pub use registry::ShellSurfaces;
pub use role::{RoleBase, ShellSurface, SurfaceRole};
pub use settings::LayerSurfaceSettings;
pub use window::ToolkitWindow;

#[derive(Debug, thiserror::Error)]
pub enum LayerSurfaceError {
    #[error("the compositor does not provide zwlr_layer_shell_v1")]
    CapabilityUnavailable,
    #[error("failed to create the layer surface object")]
    ProtocolObjectCreationFailed,
    #[error("invalid state: {0}")]
    InvalidState(&'static str),
}

pub mod reexport {
    pub use wayland_client;
    pub use wayland_protocols::xdg::shell::client::{
        xdg_popup::XdgPopup, xdg_positioner::XdgPositioner, xdg_surface::XdgSurface,
    };
    pub use wayland_protocols_wlr::layer_shell::v1::client::{
        zwlr_layer_shell_v1::{Layer, ZwlrLayerShellV1},
        zwlr_layer_surface_v1::{Anchor, KeyboardInteractivity, ZwlrLayerSurfaceV1},
    };
}
