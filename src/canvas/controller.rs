//! Canvas controller: tool selection, gesture state, committed shapes.

use log::{debug, warn};

use crate::draw::{color, Color, PrimitiveId, Surface};
use crate::geometry::Point;

use super::draft::ShapeDraft;
use super::events::PointerEvent;
use super::tool::Tool;

/// Owns the drawing interaction state for one canvas.
///
/// The controller routes pointer events to the in-progress [`ShapeDraft`] and
/// records which primitives on the surface are committed shapes. At most one
/// draft exists at a time; drag and release events without a draft, and press
/// events without a selected tool, are silently ignored. All operations run
/// synchronously on the host shell's event thread.
pub struct CanvasController {
    /// Tool used for the next gesture; `None` until the user picks one
    selected_tool: Option<Tool>,
    /// Shape currently being drawn, if a gesture is active
    draft: Option<ShapeDraft>,
    /// Handles of committed shapes, in commit order
    committed: Vec<PrimitiveId>,
    /// Stroke color applied to new shapes
    pub current_color: Color,
    /// Outline thickness in pixels applied to new shapes
    pub current_thickness: f64,
    /// Interior fill applied to new ellipses
    pub ellipse_fill: Color,
    /// Whether the display needs to be repainted
    needs_redraw: bool,
}

impl CanvasController {
    /// Creates a controller with the given drawing defaults and no tool
    /// selected.
    pub fn with_defaults(color: Color, thickness: f64, ellipse_fill: Color) -> Self {
        Self {
            selected_tool: None,
            draft: None,
            committed: Vec::new(),
            current_color: color,
            current_thickness: thickness,
            ellipse_fill,
            needs_redraw: true,
        }
    }

    /// Selects the tool used for subsequent gestures.
    ///
    /// Does not affect a gesture already in progress; the active draft keeps
    /// the tool it was started with.
    pub fn select_tool(&mut self, tool: Tool) {
        debug!("Tool selected: {tool:?}");
        self.selected_tool = Some(tool);
    }

    /// The currently selected tool, if any.
    pub fn selected_tool(&self) -> Option<Tool> {
        self.selected_tool
    }

    /// Returns true while a gesture is drawing a shape.
    pub fn is_drawing(&self) -> bool {
        self.draft.is_some()
    }

    /// Handles of every committed shape, in commit order.
    pub fn committed(&self) -> &[PrimitiveId] {
        &self.committed
    }

    /// Processes a pointer press.
    ///
    /// Starts a draft with the selected tool. Ignored when no tool is
    /// selected, and ignored (with a warning) while a draft already exists,
    /// which cannot happen with well-ordered event delivery.
    pub fn on_pointer_down(&mut self, surface: &mut dyn Surface, point: Point) {
        let Some(tool) = self.selected_tool else {
            return;
        };
        if self.draft.is_some() {
            warn!("Pointer press during an active gesture; ignoring");
            return;
        }

        self.draft = Some(ShapeDraft::begin(
            tool,
            surface,
            point,
            self.current_color,
            self.ellipse_fill,
            self.current_thickness,
        ));
        self.needs_redraw = true;
    }

    /// Processes pointer motion while the button is held.
    ///
    /// Updates the in-progress shape's geometry; a no-op when nothing is in
    /// progress.
    pub fn on_pointer_drag(&mut self, surface: &mut dyn Surface, point: Point) {
        if let Some(draft) = &self.draft {
            draft.update(surface, point);
            self.needs_redraw = true;
        }
    }

    /// Processes a pointer release.
    ///
    /// Applies the release position to the in-progress shape, commits its
    /// primitive, and ends the gesture; a no-op when nothing is in progress.
    pub fn on_pointer_up(&mut self, surface: &mut dyn Surface, point: Point) {
        if let Some(draft) = self.draft.take() {
            debug!("Committing {:?} shape", draft.tool());
            let primitive = draft.finish(surface, point);
            self.committed.push(primitive);
            self.needs_redraw = true;
        }
    }

    /// Dispatches a generic pointer event to the matching operation.
    pub fn handle_pointer_event(&mut self, surface: &mut dyn Surface, event: PointerEvent) {
        match event {
            PointerEvent::Down(point) => self.on_pointer_down(surface, point),
            PointerEvent::Drag(point) => self.on_pointer_drag(surface, point),
            PointerEvent::Up(point) => self.on_pointer_up(surface, point),
        }
    }

    /// Removes every committed shape from the surface and forgets it.
    ///
    /// An in-progress shape is cancelled without being committed. The
    /// selected tool is unaffected.
    pub fn clear(&mut self, surface: &mut dyn Surface) {
        debug!("Clearing {} committed shapes", self.committed.len());
        for primitive in self.committed.drain(..) {
            surface.remove(primitive);
        }
        if let Some(draft) = self.draft.take() {
            draft.cancel(surface);
        }
        self.needs_redraw = true;
    }

    /// Returns whether a repaint is pending and resets the flag.
    pub fn take_needs_redraw(&mut self) -> bool {
        std::mem::take(&mut self.needs_redraw)
    }
}

impl Default for CanvasController {
    fn default() -> Self {
        Self::with_defaults(color::BLACK, 2.0, color::LIGHT_GREEN)
    }
}
