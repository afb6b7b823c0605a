//! Drawing tool selection.

/// Drawing tool selection.
///
/// The active tool determines which shape is drafted when the user presses the
/// pointer on the canvas. Tools are picked from the host shell's shape menu;
/// the set is closed and validated at the UI boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tool {
    /// Single dot at the press position (fixed one-pixel halo)
    Dot,
    /// Straight line - between press and release points
    Line,
    /// Rectangle outline - from corner to corner
    Rect,
    /// Ellipse - drawn outward from its center
    Ellipse,
}

impl Tool {
    /// Every tool, in menu order.
    pub const ALL: [Tool; 4] = [Tool::Dot, Tool::Line, Tool::Rect, Tool::Ellipse];

    /// Human-readable menu label.
    pub fn label(self) -> &'static str {
        match self {
            Tool::Dot => "Dot",
            Tool::Line => "Line",
            Tool::Rect => "Rectangle",
            Tool::Ellipse => "Ellipse",
        }
    }

    /// Parses a tool name as written in the config file.
    ///
    /// Accepts the menu label (case-insensitive) plus the "rect" shorthand.
    pub fn from_name(name: &str) -> Option<Tool> {
        match name.to_lowercase().as_str() {
            "dot" => Some(Tool::Dot),
            "line" => Some(Tool::Line),
            "rect" | "rectangle" => Some(Tool::Rect),
            "ellipse" => Some(Tool::Ellipse),
            _ => None,
        }
    }
}
