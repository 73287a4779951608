//! Recording doubles for the compositor and the toolkit window.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use wayland_protocols_wlr::layer_shell::v1::client::{
    zwlr_layer_shell_v1::Layer,
    zwlr_layer_surface_v1::{Anchor, KeyboardInteractivity},
};

use crate::id;
use crate::protocol::{LayerShellFactory, LayerSurfaceProxy, ShellBackend};
use crate::window::ToolkitWindow;

/// A request sent to the compositor. Drawables, outputs and popup surfaces
/// are plain numbers; layer surface objects are numbered on creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Call {
    GetLayerSurface {
        object: u32,
        surface: u32,
        output: Option<u32>,
        layer: Layer,
        namespace: String,
    },
    AckConfigure {
        object: u32,
        serial: u32,
    },
    SetKeyboardInteractivity {
        object: u32,
        interactivity: KeyboardInteractivity,
    },
    SetAnchor {
        object: u32,
        anchor: Anchor,
    },
    SetExclusiveZone {
        object: u32,
        zone: i32,
    },
    SetSize {
        object: u32,
        width: u32,
        height: u32,
    },
    GetPopup {
        object: u32,
        popup: u32,
    },
    CreatePopup {
        surface: u32,
    },
    Destroy {
        object: u32,
    },
    Commit {
        surface: u32,
    },
}

#[derive(Debug, Default)]
struct Wire {
    calls: RefCell<Vec<Call>>,
    // live layer surface object -> drawable
    live: RefCell<HashMap<u32, u32>>,
    next_object: Cell<u32>,
    refuse: Cell<bool>,
}

impl Wire {
    fn push(&self, call: Call) {
        self.calls.borrow_mut().push(call);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct RecordingPopup {
    pub(crate) surface: u32,
}

#[derive(Debug)]
pub(crate) struct RecordingLayerSurface {
    pub(crate) object: u32,
    wire: Rc<Wire>,
}

impl PartialEq for RecordingLayerSurface {
    fn eq(&self, other: &Self) -> bool {
        self.object == other.object
    }
}

impl LayerSurfaceProxy for RecordingLayerSurface {
    type Popup = RecordingPopup;

    fn ack_configure(&self, serial: u32) {
        self.wire.push(Call::AckConfigure {
            object: self.object,
            serial,
        });
    }

    fn set_keyboard_interactivity(&self, interactivity: KeyboardInteractivity) {
        self.wire.push(Call::SetKeyboardInteractivity {
            object: self.object,
            interactivity,
        });
    }

    fn set_anchor(&self, anchor: Anchor) {
        self.wire.push(Call::SetAnchor {
            object: self.object,
            anchor,
        });
    }

    fn set_exclusive_zone(&self, zone: i32) {
        self.wire.push(Call::SetExclusiveZone {
            object: self.object,
            zone,
        });
    }

    fn set_size(&self, width: u32, height: u32) {
        self.wire.push(Call::SetSize {
            object: self.object,
            width,
            height,
        });
    }

    fn get_popup(&self, popup: &RecordingPopup) {
        self.wire.push(Call::GetPopup {
            object: self.object,
            popup: popup.surface,
        });
    }

    fn destroy(&self) {
        self.wire.live.borrow_mut().remove(&self.object);
        self.wire.push(Call::Destroy {
            object: self.object,
        });
    }
}

#[derive(Debug)]
pub(crate) struct RecordingLayerShell {
    wire: Rc<Wire>,
}

impl LayerShellFactory for RecordingLayerShell {
    type Surface = u32;
    type Output = u32;
    type LayerSurface = RecordingLayerSurface;

    fn get_layer_surface(
        &self,
        surface: &u32,
        output: Option<&u32>,
        layer: Layer,
        namespace: String,
        _id: id::Id,
    ) -> Option<RecordingLayerSurface> {
        let object = self.wire.next_object.get() + 1;
        self.wire.next_object.set(object);
        self.wire.push(Call::GetLayerSurface {
            object,
            surface: *surface,
            output: output.copied(),
            layer,
            namespace,
        });
        if self.wire.refuse.get() {
            return None;
        }
        let mut live = self.wire.live.borrow_mut();
        assert!(
            !live.values().any(|drawable| drawable == surface),
            "two live layer surface objects on drawable {surface}"
        );
        live.insert(object, *surface);
        Some(RecordingLayerSurface {
            object,
            wire: self.wire.clone(),
        })
    }
}

/// A compositor that records every request.
#[derive(Debug)]
pub(crate) struct RecordingBackend {
    wire: Rc<Wire>,
    layer_shell: Option<RecordingLayerShell>,
}

impl RecordingBackend {
    pub(crate) fn new() -> Rc<Self> {
        let wire = Rc::new(Wire::default());
        Rc::new(Self {
            layer_shell: Some(RecordingLayerShell { wire: wire.clone() }),
            wire,
        })
    }

    pub(crate) fn without_layer_shell() -> Rc<Self> {
        Rc::new(Self {
            wire: Rc::new(Wire::default()),
            layer_shell: None,
        })
    }

    /// Makes the layer shell fail to create objects.
    pub(crate) fn refuse_layer_surfaces(&self, refuse: bool) {
        self.wire.refuse.set(refuse);
    }

    pub(crate) fn calls(&self) -> Vec<Call> {
        self.wire.calls.borrow().clone()
    }

    pub(crate) fn clear(&self) {
        self.wire.calls.borrow_mut().clear();
    }

    /// Another handle to layer surface `object`, like the proxy an event
    /// arrives on. It may refer to an object that was already destroyed.
    pub(crate) fn object_handle(&self, object: u32) -> RecordingLayerSurface {
        RecordingLayerSurface {
            object,
            wire: self.wire.clone(),
        }
    }

    pub(crate) fn live_objects(&self) -> usize {
        self.wire.live.borrow().len()
    }
}

impl ShellBackend for RecordingBackend {
    type Surface = u32;
    type Output = u32;
    type PopupSurface = u32;
    type Positioner = ();
    type Popup = RecordingPopup;
    type LayerSurface = RecordingLayerSurface;
    type LayerShell = RecordingLayerShell;

    fn layer_shell(&self) -> Option<&RecordingLayerShell> {
        self.layer_shell.as_ref()
    }

    fn create_popup(&self, popup_surface: &u32, _positioner: &()) -> RecordingPopup {
        self.wire.push(Call::CreatePopup {
            surface: *popup_surface,
        });
        RecordingPopup {
            surface: *popup_surface,
        }
    }

    fn commit(&self, surface: &u32) {
        self.wire.push(Call::Commit { surface: *surface });
    }
}

#[derive(Debug)]
struct WindowState {
    title: Option<String>,
    decorated: bool,
    size_allocate_listener: Option<id::Id>,
    close_requests: usize,
    configure_hints: Vec<(u32, u32)>,
}

/// A toolkit window handle; clones share the same window.
#[derive(Debug, Clone)]
pub(crate) struct RecordingWindow {
    state: Rc<RefCell<WindowState>>,
}

impl RecordingWindow {
    pub(crate) fn new(title: Option<&str>) -> Self {
        Self {
            state: Rc::new(RefCell::new(WindowState {
                title: title.map(str::to_owned),
                decorated: true,
                size_allocate_listener: None,
                close_requests: 0,
                configure_hints: Vec::new(),
            })),
        }
    }

    pub(crate) fn decorated(&self) -> bool {
        self.state.borrow().decorated
    }

    pub(crate) fn size_allocate_listener(&self) -> Option<id::Id> {
        self.state.borrow().size_allocate_listener
    }

    pub(crate) fn close_requests(&self) -> usize {
        self.state.borrow().close_requests
    }

    pub(crate) fn configure_hints(&self) -> Vec<(u32, u32)> {
        self.state.borrow().configure_hints.clone()
    }
}

impl ToolkitWindow for RecordingWindow {
    fn title(&self) -> Option<String> {
        self.state.borrow().title.clone()
    }

    fn set_decorated(&mut self, decorated: bool) {
        self.state.borrow_mut().decorated = decorated;
    }

    fn connect_size_allocate(&mut self, id: id::Id) {
        self.state.borrow_mut().size_allocate_listener = Some(id);
    }

    fn request_close(&mut self) {
        self.state.borrow_mut().close_requests += 1;
    }

    fn configure_hint(&mut self, width: u32, height: u32) {
        self.state.borrow_mut().configure_hints.push((width, height));
    }
}
