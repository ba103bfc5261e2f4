#![forbid(unsafe_code)]

//! Text rendering of layouts for tests and logs.
//!
//! ```
//! use ftui_grid::{Columns, GridItem, debug::render_ascii};
//!
//! let items = [GridItem::new("a", 0, 0, 2, 1), GridItem::new("b", 2, 0, 1, 2)];
//! let columns = Columns::new(4).unwrap();
//! assert_eq!(render_ascii(&items, columns), "aab.\n..b.\n");
//! ```

use crate::columns::Columns;
use crate::item::GridItem;

/// Marker for a cell claimed by more than one item.
pub const OVERLAP_CELL: char = '#';
/// Marker for an empty cell.
pub const EMPTY_CELL: char = '.';
/// Most rows a single render draws.
pub const MAX_RENDER_ROWS: u32 = 1024;
/// Most columns a single render draws.
pub const MAX_RENDER_COLUMNS: u32 = 512;

/// Draw `items` on a `columns`-wide grid, one text line per row.
///
/// Each cell shows the first character of the covering item's id. Rows run
/// from the highest top edge to the lowest bottom edge, so a layout sitting
/// far down the grid renders without leading blank rows. Output is cut at
/// [`MAX_RENDER_ROWS`] rows and [`MAX_RENDER_COLUMNS`] columns; cells past
/// the right edge are clipped. An empty layout renders as an empty string.
#[must_use]
pub fn render_ascii(items: &[GridItem], columns: Columns) -> String {
    let Some(top) = items.iter().map(|item| item.y).min() else {
        return String::new();
    };
    let bottom = items.iter().map(GridItem::bottom).max().unwrap_or(top);
    let width = columns.get().min(MAX_RENDER_COLUMNS) as usize;
    let height = bottom.saturating_sub(top).min(MAX_RENDER_ROWS) as usize;
    let Some(area) = width.checked_mul(height) else {
        return String::new();
    };
    let mut cells = vec![None::<char>; area];
    let mut claimed = vec![0u8; area];

    for item in items {
        let glyph = item.id.chars().next().unwrap_or('?');
        let right = (item.right() as usize).min(width);
        let first_row = (item.y - top) as usize;
        let end_row = ((item.bottom() - top) as usize).min(height);
        for row in first_row..end_row {
            for col in (item.x as usize).min(right)..right {
                let idx = row * width + col;
                cells[idx] = Some(glyph);
                claimed[idx] = claimed[idx].saturating_add(1);
            }
        }
    }

    let mut out = String::with_capacity(area + height);
    for row in 0..height {
        for col in 0..width {
            let idx = row * width + col;
            out.push(match (claimed[idx], cells[idx]) {
                (0, _) | (_, None) => EMPTY_CELL,
                (1, Some(glyph)) => glyph,
                _ => OVERLAP_CELL,
            });
        }
        out.push('\n');
    }
    out
}
