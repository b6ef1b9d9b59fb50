use crate::{Board, Location};

/// Renders a tour as a box-drawn grid, rows from the top.
///
/// Cells on `path` show their 1-based visit number, cells still
/// unvisited show a dot, and cells outside the shape stay blank.
pub fn render_tour(board: &Board, path: &[Location]) -> String {
    let cell_width = path.len().to_string().len().max(2);
    let inner_width = (cell_width + 1) * board.width() as usize + 1;

    let mut result = String::from("╭");
    for _ in 0..inner_width {
        result += "─";
    }
    result += "╮\n";

    for y in (1..=board.height()).rev() {
        result += "│";
        for x in 1..=board.width() {
            let loc = Location::new(x, y);
            if let Some(step) = path.iter().position(|&visited| visited == loc) {
                result += &format!(" {:>width$}", step + 1, width = cell_width);
            } else if board.is_unvisited(loc) {
                result += &format!(" {:>width$}", "·", width = cell_width);
            } else {
                result += &format!(" {:>width$}", "", width = cell_width);
            }
        }
        result += " │\n";
    }

    result += "╰";
    for _ in 0..inner_width {
        result += "─";
    }
    result += "╯";
    result
}
