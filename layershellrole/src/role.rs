//! The role a toolkit window's drawable takes on the compositor.
//!
//! A [`ShellSurface`] is what the toolkit keeps for a window: it is mapped
//! when the window's `wl_surface` appears, unmapped when it goes away, and it
//! roots popups. [`SurfaceRole`] is the contract every role implements;
//! [`RoleBase`] is the state all roles share.

use std::rc::Rc;

use crate::LayerSurfaceError;
use crate::id;
use crate::layer_surface::LayerSurface;
use crate::protocol::ShellBackend;
use crate::window::ToolkitWindow;

/// State shared by every role: the surface id, the connection, the window,
/// and the drawable while mapped.
pub struct RoleBase<B: ShellBackend, W> {
    id: id::Id,
    backend: Rc<B>,
    window: W,
    drawable: Option<B::Surface>,
    commit_pending: bool,
}

impl<B: ShellBackend, W> RoleBase<B, W> {
    pub(crate) fn new(backend: Rc<B>, window: W) -> Self {
        Self {
            id: id::Id::unique(),
            backend,
            window,
            drawable: None,
            commit_pending: false,
        }
    }

    pub fn id(&self) -> id::Id {
        self.id
    }

    pub fn backend(&self) -> &Rc<B> {
        &self.backend
    }

    pub fn window(&self) -> &W {
        &self.window
    }

    pub fn window_mut(&mut self) -> &mut W {
        &mut self.window
    }

    /// The drawable the role is mapped to.
    pub fn drawable(&self) -> Option<&B::Surface> {
        self.drawable.as_ref()
    }

    pub fn commit_pending(&self) -> bool {
        self.commit_pending
    }

    pub(crate) fn attach(&mut self, drawable: B::Surface) {
        self.drawable = Some(drawable);
    }

    pub(crate) fn detach(&mut self) {
        self.drawable = None;
        self.commit_pending = false;
    }

    pub(crate) fn request_commit(&mut self) {
        self.commit_pending = true;
    }

    /// Commits the drawable if the role asked for it since the last call.
    /// Returns whether a commit was sent.
    pub fn commit_if_needed(&mut self) -> bool {
        if !std::mem::take(&mut self.commit_pending) {
            return false;
        }
        match &self.drawable {
            Some(drawable) => {
                self.backend.commit(drawable);
                true
            }
            None => false,
        }
    }
}

/// The contract of a surface role.
pub trait SurfaceRole {
    type Backend: ShellBackend;
    type Window: ToolkitWindow;

    fn base(&self) -> &RoleBase<Self::Backend, Self::Window>;
    fn base_mut(&mut self) -> &mut RoleBase<Self::Backend, Self::Window>;

    /// Gives `drawable` this role on the compositor.
    fn map(
        &mut self,
        drawable: &<Self::Backend as ShellBackend>::Surface,
    ) -> Result<(), LayerSurfaceError>;

    /// Drops the role objects. Calling it while unmapped does nothing.
    fn unmap(&mut self);

    /// Creates a popup whose parent is this role.
    fn get_popup(
        &self,
        popup_surface: &<Self::Backend as ShellBackend>::PopupSurface,
        positioner: &<Self::Backend as ShellBackend>::Positioner,
    ) -> Result<<Self::Backend as ShellBackend>::Popup, LayerSurfaceError>;

    /// Tears the role down before it is dropped.
    fn finalize(&mut self) {
        self.unmap();
    }

    /// Recreates the role objects on the same drawable. Does nothing while
    /// unmapped.
    fn remap(&mut self) -> Result<(), LayerSurfaceError> {
        let Some(drawable) = self.base().drawable().cloned() else {
            return Ok(());
        };
        self.unmap();
        self.map(&drawable)?;
        // a fresh role object is only configured after a commit
        self.needs_commit();
        Ok(())
    }

    /// Asks for the drawable to be committed at the next safe point, see
    /// [`RoleBase::commit_if_needed`].
    fn needs_commit(&mut self) {
        self.base_mut().request_commit();
    }
}

/// A toolkit window's custom shell surface, tagged by role.
pub enum ShellSurface<B: ShellBackend, W: ToolkitWindow> {
    Layer(LayerSurface<B, W>),
}

impl<B: ShellBackend, W: ToolkitWindow> ShellSurface<B, W> {
    pub fn id(&self) -> id::Id {
        self.role().base().id()
    }

    pub fn role(&self) -> &dyn SurfaceRole<Backend = B, Window = W> {
        match self {
            Self::Layer(layer) => layer,
        }
    }

    pub fn role_mut(&mut self) -> &mut dyn SurfaceRole<Backend = B, Window = W> {
        match self {
            Self::Layer(layer) => layer,
        }
    }

    /// The layer surface, if this is one.
    ///
    /// Layer is the only role so far, so this is always `Some`; a role added
    /// next to it answers `None`.
    pub fn as_layer_surface(&self) -> Option<&LayerSurface<B, W>> {
        match self {
            Self::Layer(layer) => Some(layer),
        }
    }

    pub fn as_layer_surface_mut(&mut self) -> Option<&mut LayerSurface<B, W>> {
        match self {
            Self::Layer(layer) => Some(layer),
        }
    }
}

impl<B: ShellBackend, W: ToolkitWindow> From<LayerSurface<B, W>> for ShellSurface<B, W> {
    fn from(layer: LayerSurface<B, W>) -> Self {
        Self::Layer(layer)
    }
}

impl<B: ShellBackend, W: ToolkitWindow> std::fmt::Debug for ShellSurface<B, W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Layer(layer) => f.debug_tuple("Layer").field(layer).finish(),
        }
    }
}
