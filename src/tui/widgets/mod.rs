//! Dashboard widgets.

pub mod column_picker;
pub mod controls;
pub mod footer;
pub mod help;
pub mod table;

pub use column_picker::render_column_picker;
pub use controls::render_controls;
pub use footer::render_footer;
pub use help::render_help;
pub use table::render_table;

use ratatui::layout::Rect;

/// Centered sub-rect for overlays.
pub(crate) fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    Rect {
        x: area.x + (area.width - w) / 2,
        y: area.y + (area.height - h) / 2,
        width: w,
        height: h,
    }
}
