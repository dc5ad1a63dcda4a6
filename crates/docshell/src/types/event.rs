/*! Property-change notifications from the embedded surface. */

/// Observable property changes the embedded surface reports.
///
/// The application subscribes once at window construction and forwards
/// each notification to [`crate::ShellWindow::on_surface_event`]. Handlers
/// run to completion on the UI thread and tolerate repeated delivery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceEvent {
  /// The page title changed. `None` when the page supplies no title.
  TitleChanged(Option<String>),
  /// The surface's URL changed, along with history traversal state.
  UrlChanged {
    url: String,
    can_go_back: bool,
    can_go_forward: bool,
  },
  /// The pointer moved onto a link (`Some`) or off of one (`None`).
  LinkHovered(Option<String>),
}
