use crate::id;

/// The toolkit window a layer surface presents.
///
/// Implementors are cheap handles: the toolkit owns the window, the layer
/// surface only keeps a reference to it.
pub trait ToolkitWindow {
    /// The window title, used as the layer namespace.
    fn title(&self) -> Option<String>;

    fn set_decorated(&mut self, decorated: bool);

    /// After this call the toolkit delivers every size allocation of the
    /// window to the surface registered under `id`, see
    /// [`crate::ShellSurfaces::size_allocate`].
    fn connect_size_allocate(&mut self, id: id::Id);

    /// The compositor closed the layer surface. The toolkit should hide or
    /// destroy the window.
    fn request_close(&mut self);

    /// The compositor suggested a size in a configure event. This is only a
    /// hint; the size the toolkit allocates stays authoritative.
    fn configure_hint(&mut self, _width: u32, _height: u32) {}
}
