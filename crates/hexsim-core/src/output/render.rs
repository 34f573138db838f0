//! Grid Rendering
//!
//! One character per cell. When several agents share a cell the one added
//! most recently is shown.

use crate::components::agent::Agent;
use crate::components::world::HexGrid;

/// Character for a cell with nobody in it
pub const EMPTY_CELL: char = ' ';

/// Row-major symbol grid. `agents` must be in insertion order; later agents
/// overwrite earlier ones in the same cell.
pub fn render_grid<'a>(
    grid: &HexGrid,
    agents: impl IntoIterator<Item = &'a Agent>,
) -> Vec<Vec<char>> {
    let side = grid.size() as usize;
    let mut cells = vec![vec![EMPTY_CELL; side]; side];

    for agent in agents {
        let at = agent.position();
        if !grid.contains(at) {
            continue;
        }
        cells[at.row() as usize][at.col() as usize] = agent.symbol();
    }
    cells
}

/// Lay rows out as a rhombus: row `r` is shifted right by `r` columns so
/// each cell sits between its two neighbors in the row above.
pub fn render_text(cells: &[Vec<char>]) -> String {
    let mut out = String::new();
    for (r, row) in cells.iter().enumerate() {
        out.push_str(&" ".repeat(r));
        let line: Vec<String> = row.iter().map(char::to_string).collect();
        out.push_str(&line.join(" "));
        out.push('\n');
    }
    out
}
