use crate::data_types::{IndexWindow, SurfaceLayout};

/// Opaque handle to a drawing surface minted by a [`RenderBackend`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SurfaceRef(pub u64);

/// Rendering seam. The core only knows that surfaces can be created,
/// resized, drawn to and destroyed; how lines are painted lives entirely
/// on the other side of this trait.
///
/// `draw` receives the chart's full axes plus the window to show
/// (`None` = full range) and must be idempotent: repeating a call with
/// identical arguments may repaint but must not accumulate state.
pub trait RenderBackend {
    /// Creates a surface sized to the container's layout box at the
    /// display's pixel density.
    fn create_surface(&mut self, layout: &SurfaceLayout) -> SurfaceRef;

    /// Resizes an existing surface to a new layout box.
    fn resize_surface(&mut self, surface: SurfaceRef, layout: &SurfaceLayout);

    fn draw(
        &mut self,
        surface: SurfaceRef,
        labels: &[String],
        values: &[Option<f64>],
        window: Option<IndexWindow>,
    );

    /// Tears a surface down completely, including any listeners or
    /// overlay elements attached to it. No resource may leak.
    fn destroy(&mut self, surface: SurfaceRef);
}
