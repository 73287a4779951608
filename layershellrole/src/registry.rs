use std::collections::HashMap;

use crate::LayerSurfaceError;
use crate::id;
use crate::layer_surface::LayerSurface;
use crate::protocol::{LayerSurfaceEvent, ShellBackend};
use crate::role::ShellSurface;
use crate::window::ToolkitWindow;

/// The shell surfaces of a process, by id.
///
/// Compositor events and toolkit size allocations only carry the id of the
/// surface they are meant for; this is where they are routed.
pub struct ShellSurfaces<B: ShellBackend, W: ToolkitWindow> {
    surfaces: HashMap<id::Id, ShellSurface<B, W>>,
}

impl<B: ShellBackend, W: ToolkitWindow> Default for ShellSurfaces<B, W> {
    fn default() -> Self {
        Self {
            surfaces: HashMap::new(),
        }
    }
}

impl<B: ShellBackend, W: ToolkitWindow> ShellSurfaces<B, W> {
    pub fn insert(&mut self, surface: impl Into<ShellSurface<B, W>>) -> id::Id {
        let surface = surface.into();
        let id = surface.id();
        self.surfaces.insert(id, surface);
        id
    }

    pub fn get(&self, id: id::Id) -> Option<&ShellSurface<B, W>> {
        self.surfaces.get(&id)
    }

    pub fn get_mut(&mut self, id: id::Id) -> Option<&mut ShellSurface<B, W>> {
        self.surfaces.get_mut(&id)
    }

    pub fn layer_surface(&self, id: id::Id) -> Option<&LayerSurface<B, W>> {
        self.get(id).and_then(ShellSurface::as_layer_surface)
    }

    pub fn layer_surface_mut(&mut self, id: id::Id) -> Option<&mut LayerSurface<B, W>> {
        self.get_mut(id).and_then(ShellSurface::as_layer_surface_mut)
    }

    /// Removes the surface, tearing its role down first.
    pub fn remove(&mut self, id: id::Id) -> Option<ShellSurface<B, W>> {
        let mut surface = self.surfaces.remove(&id)?;
        surface.role_mut().finalize();
        Some(surface)
    }

    pub fn len(&self) -> usize {
        self.surfaces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.surfaces.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ShellSurface<B, W>> {
        self.surfaces.values()
    }

    /// The toolkit shows the window of `id` on `drawable`.
    pub fn map(&mut self, id: id::Id, drawable: &B::Surface) -> Result<(), LayerSurfaceError> {
        let Some(surface) = self.surfaces.get_mut(&id) else {
            log::error!("map called for unknown {id}");
            return Err(LayerSurfaceError::InvalidState("unknown shell surface"));
        };
        surface.role_mut().map(drawable)
    }

    /// The toolkit hides the window of `id`.
    pub fn unmap(&mut self, id: id::Id) {
        if let Some(surface) = self.surfaces.get_mut(&id) {
            surface.role_mut().unmap();
        }
    }

    /// Delivers a size allocation of the window subscribed under `id`.
    pub fn size_allocate(&mut self, id: id::Id, width: u32, height: u32) {
        match self.layer_surface_mut(id) {
            Some(layer) => layer.size_allocate(width, height),
            None => log::debug!("size allocation for unknown {id}"),
        }
    }

    /// Delivers a compositor event that `layer_surface`, created for `id`,
    /// received.
    pub fn dispatch_layer_event(
        &mut self,
        id: id::Id,
        layer_surface: &B::LayerSurface,
        event: LayerSurfaceEvent,
    ) {
        match self.layer_surface_mut(id) {
            Some(layer) => layer.handle_event(layer_surface, event),
            None => log::warn!("{event:?} for unknown {id}"),
        }
    }

    /// Commits every drawable whose role asked for it.
    pub fn flush_commits(&mut self) {
        for surface in self.surfaces.values_mut() {
            surface.role_mut().base_mut().commit_if_needed();
        }
    }
}
