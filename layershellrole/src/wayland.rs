//! The layer surface backend on a real wayland connection.
//!
//! The host state `D` routes layer surface events back to its
//! [`crate::ShellSurfaces`] through [`LayerSurfaceHandler`]:
//!
//! ```rust, ignore
//! delegate_dispatch!(State: [ZwlrLayerShellV1: LayerShellData] => ());
//! delegate_dispatch!(State: [ZwlrLayerSurfaceV1: LayerSurfaceData] => ());
//!
//! impl LayerSurfaceHandler for State {
//!     fn layer_surface_event(
//!         &mut self,
//!         id: Id,
//!         layer_surface: &ZwlrLayerSurfaceV1,
//!         event: LayerSurfaceEvent,
//!     ) {
//!         self.surfaces.dispatch_layer_event(id, layer_surface, event);
//!     }
//! }
//! ```

use wayland_client::{
    Connection, Dispatch, Proxy, QueueHandle,
    globals::GlobalList,
    protocol::{wl_output::WlOutput, wl_surface::WlSurface},
};
use wayland_protocols::xdg::shell::client::{
    xdg_popup::XdgPopup, xdg_positioner::XdgPositioner, xdg_surface::XdgSurface,
};
use wayland_protocols_wlr::layer_shell::v1::client::{
    zwlr_layer_shell_v1::{self, Layer, ZwlrLayerShellV1},
    zwlr_layer_surface_v1::{self, Anchor, KeyboardInteractivity, ZwlrLayerSurfaceV1},
};

use crate::id;
use crate::protocol::{LayerShellFactory, LayerSurfaceEvent, LayerSurfaceProxy, ShellBackend};

/// User data of the layer shell global.
#[derive(Debug, Clone, Copy, Default)]
pub struct LayerShellData;

/// User data of a layer surface object: the surface it belongs to.
#[derive(Debug, Clone, Copy)]
pub struct LayerSurfaceData {
    pub id: id::Id,
}

/// Receives the events of every layer surface object.
///
/// `layer_surface` is the object the event arrived on. After a remap it can
/// be an object that was already destroyed.
pub trait LayerSurfaceHandler {
    fn layer_surface_event(
        &mut self,
        id: id::Id,
        layer_surface: &ZwlrLayerSurfaceV1,
        event: LayerSurfaceEvent,
    );
}

impl LayerSurfaceProxy for ZwlrLayerSurfaceV1 {
    type Popup = XdgPopup;

    fn ack_configure(&self, serial: u32) {
        ZwlrLayerSurfaceV1::ack_configure(self, serial);
    }

    fn set_keyboard_interactivity(&self, interactivity: KeyboardInteractivity) {
        ZwlrLayerSurfaceV1::set_keyboard_interactivity(self, interactivity);
    }

    fn set_anchor(&self, anchor: Anchor) {
        ZwlrLayerSurfaceV1::set_anchor(self, anchor);
    }

    fn set_exclusive_zone(&self, zone: i32) {
        ZwlrLayerSurfaceV1::set_exclusive_zone(self, zone);
    }

    fn set_size(&self, width: u32, height: u32) {
        ZwlrLayerSurfaceV1::set_size(self, width, height);
    }

    fn get_popup(&self, popup: &XdgPopup) {
        ZwlrLayerSurfaceV1::get_popup(self, popup);
    }

    fn destroy(&self) {
        ZwlrLayerSurfaceV1::destroy(self);
    }
}

/// The bound `zwlr_layer_shell_v1` global.
#[derive(Debug)]
pub struct WaylandLayerShell<D> {
    layer_shell: ZwlrLayerShellV1,
    qh: QueueHandle<D>,
}

impl<D> WaylandLayerShell<D> {
    pub fn layer_shell(&self) -> &ZwlrLayerShellV1 {
        &self.layer_shell
    }
}

impl<D> LayerShellFactory for WaylandLayerShell<D>
where
    D: Dispatch<ZwlrLayerSurfaceV1, LayerSurfaceData> + 'static,
{
    type Surface = WlSurface;
    type Output = WlOutput;
    type LayerSurface = ZwlrLayerSurfaceV1;

    fn get_layer_surface(
        &self,
        surface: &WlSurface,
        output: Option<&WlOutput>,
        layer: Layer,
        namespace: String,
        id: id::Id,
    ) -> Option<ZwlrLayerSurfaceV1> {
        let layer_surface = self.layer_shell.get_layer_surface(
            surface,
            output,
            layer,
            namespace,
            &self.qh,
            LayerSurfaceData { id },
        );
        // requests on a dead global hand back an inert object
        layer_surface.is_alive().then_some(layer_surface)
    }
}

/// The wayland connection as seen by a layer surface.
#[derive(Debug)]
pub struct WaylandBackend<D> {
    layer_shell: Option<WaylandLayerShell<D>>,
    qh: QueueHandle<D>,
}

impl<D> WaylandBackend<D>
where
    D: Dispatch<ZwlrLayerShellV1, LayerShellData> + 'static,
{
    /// Binds the layer shell from the registry globals. A compositor without
    /// it still yields a backend; mapping on it fails.
    pub fn bind(globals: &GlobalList, qh: &QueueHandle<D>) -> Self {
        let layer_shell = match globals.bind::<ZwlrLayerShellV1, _, _>(qh, 1..=4, LayerShellData)
        {
            Ok(layer_shell) => Some(layer_shell),
            Err(err) => {
                log::warn!("zwlr_layer_shell_v1 is not available: {err}");
                None
            }
        };
        Self::with_layer_shell(layer_shell, qh)
    }
}

impl<D> WaylandBackend<D> {
    /// Wraps a layer shell global the host already bound.
    pub fn with_layer_shell(layer_shell: Option<ZwlrLayerShellV1>, qh: &QueueHandle<D>) -> Self {
        Self {
            layer_shell: layer_shell.map(|layer_shell| WaylandLayerShell {
                layer_shell,
                qh: qh.clone(),
            }),
            qh: qh.clone(),
        }
    }
}

impl<D> ShellBackend for WaylandBackend<D>
where
    D: Dispatch<ZwlrLayerSurfaceV1, LayerSurfaceData> + Dispatch<XdgPopup, ()> + 'static,
{
    type Surface = WlSurface;
    type Output = WlOutput;
    type PopupSurface = XdgSurface;
    type Positioner = XdgPositioner;
    type Popup = XdgPopup;
    type LayerSurface = ZwlrLayerSurfaceV1;
    type LayerShell = WaylandLayerShell<D>;

    fn layer_shell(&self) -> Option<&WaylandLayerShell<D>> {
        self.layer_shell.as_ref()
    }

    fn create_popup(&self, popup_surface: &XdgSurface, positioner: &XdgPositioner) -> XdgPopup {
        // the parent is set by the layer surface, not by xdg_shell
        popup_surface.get_popup(None, positioner, &self.qh, ())
    }

    fn commit(&self, surface: &WlSurface) {
        surface.commit();
    }
}

impl<D> Dispatch<ZwlrLayerShellV1, LayerShellData, D> for ()
where
    D: Dispatch<ZwlrLayerShellV1, LayerShellData>,
{
    fn event(
        _state: &mut D,
        _proxy: &ZwlrLayerShellV1,
        _event: zwlr_layer_shell_v1::Event,
        _data: &LayerShellData,
        _conn: &Connection,
        _qhandle: &QueueHandle<D>,
    ) {
        // No events for the layer shell global
    }
}

impl<D> Dispatch<ZwlrLayerSurfaceV1, LayerSurfaceData, D> for ()
where
    D: Dispatch<ZwlrLayerSurfaceV1, LayerSurfaceData> + LayerSurfaceHandler,
{
    fn event(
        state: &mut D,
        proxy: &ZwlrLayerSurfaceV1,
        event: zwlr_layer_surface_v1::Event,
        data: &LayerSurfaceData,
        _conn: &Connection,
        _qhandle: &QueueHandle<D>,
    ) {
        if let Some(event) = layer_surface_event(event) {
            state.layer_surface_event(data.id, proxy, event);
        }
    }
}

fn layer_surface_event(event: zwlr_layer_surface_v1::Event) -> Option<LayerSurfaceEvent> {
    match event {
        zwlr_layer_surface_v1::Event::Configure {
            serial,
            width,
            height,
        } => Some(LayerSurfaceEvent::Configure {
            serial,
            width,
            height,
        }),
        zwlr_layer_surface_v1::Event::Closed => Some(LayerSurfaceEvent::Closed),
        _ => {
            log::info!("ignore zwlr_layer_surface_v1 event: {event:?}");
            None
        }
    }
}
