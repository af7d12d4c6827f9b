//! Text rendering of the launcher grid.
//!
//! Presentation only: draws the visible page as a character grid with the
//! selection highlighted, plus a status footer. Pixel sizing from the
//! viewport width is computed for the header but the layout itself is
//! character cells.

use vitrine_grid::metrics::{columns_for_viewport, tile_size_px};
use vitrine_grid::{GRID_ROWS, PlacedTile};

use crate::app_state::AppState;

/// Inner width of one rendered cell in characters.
const CELL_W: usize = 14;

/// Resolve a symbolic icon name to a display glyph. Unrecognized names
/// get the unknown glyph.
pub fn icon_glyph(name: &str) -> char {
    match name {
        "Tv" | "Clapperboard" | "Film" => '#',
        "Music" | "Radio" => '~',
        "Newspaper" => '=',
        "Image" => 'o',
        "CloudSun" => '*',
        "Gamepad2" => '+',
        "Settings" => '%',
        "Globe" => '@',
        _ => '?',
    }
}

fn cell_at(cells: &[PlacedTile], row: usize, col: usize) -> Option<&PlacedTile> {
    cells.iter().find(|c| c.row == row && c.col == col)
}

fn format_cell(state: &AppState, cell: Option<&PlacedTile>) -> String {
    let Some(cell) = cell else {
        return " ".repeat(CELL_W + 2);
    };
    if cell.is_placeholder() {
        // Continuation of the tall tile above; not independently
        // selectable.
        return format!(" {:^CELL_W$} ", "|");
    }
    let tile = &state.tiles[cell.id];
    let glyph = icon_glyph(&tile.icon);
    let name: String = tile.name.chars().take(CELL_W - 2).collect();
    let body = format!("{glyph} {name}");
    if state.selection.selected == cell.id {
        format!("[{body:^CELL_W$}]")
    } else {
        format!(" {body:^CELL_W$} ")
    }
}

/// Render the visible page and footer.
pub fn render(state: &AppState) -> String {
    let cols = columns_for_viewport(state.config.viewport_width);
    let px = tile_size_px(
        state.config.viewport_width,
        cols,
        state.config.tile_gap,
        state.config.page_padding,
    );

    let mut out = String::new();
    out.push_str(&format!("-- Vitrine ({cols} cols, {px}px tiles) --\n"));

    match state.current_page() {
        Some(page) => {
            for row in 0..GRID_ROWS {
                for col in 0..cols {
                    out.push_str(&format_cell(state, cell_at(&page.cells, row, col)));
                }
                out.push('\n');
            }
        },
        None => out.push_str("(no applications)\n"),
    }

    let selected = state
        .selected_tile()
        .map(|t| t.name.as_str())
        .unwrap_or("-");
    out.push_str(&format!(
        "Page {} of {}  |  Selected: {}  |  Voice: {}\n",
        state.selection.page + 1,
        state.page_count().max(1),
        selected,
        if state.listener.is_listening() {
            "listening"
        } else {
            "off"
        },
    ));
    if let Some(transcript) = state.listener.last_transcript() {
        out.push_str(&format!("Last command: \"{transcript}\"\n"));
    }
    out
}
