//! Text renderer - draws a puzzle back into the double-height offset grid.
//!
//! Walls are not stored in a puzzle, so they are reconstructed: every
//! neighbour of a walkable cell that is not itself walkable becomes a wall,
//! and gaps between the first and last glyph of a line are filled with walls
//! too. The output reads back through
//! [`parse_puzzle_grid`](crate::parser::parse_puzzle_grid) as the same puzzle,
//! up to translation.

use std::collections::{BTreeMap, HashMap};

use crate::error::{HexError, Result};
use crate::parser::Glyph;
use crate::types::{HexCoord, Puzzle, RectCoord};

/// Render a puzzle as grid text, one line per text row, `\n` terminated.
pub fn render_puzzle(puzzle: &Puzzle) -> Result<String> {
    if puzzle.terrain.is_empty() {
        return Err(HexError::Validation {
            message: format!("{} has no terrain to draw", display_id(puzzle)),
            help: None,
        });
    }

    let cells = place_glyphs(puzzle);
    let lines = layout(&cells)?;

    let first_line = lines.keys().next().copied().unwrap_or(0);
    let last_line = lines.keys().next_back().copied().unwrap_or(0);

    let mut rows = Vec::new();
    for line in first_line..=last_line {
        let glyphs = lines.get(&line).ok_or_else(|| HexError::Validation {
            message: format!(
                "{} has terrain separated by an empty line and cannot be drawn",
                display_id(puzzle)
            ),
            help: Some("Check that the terrain is one connected area".to_string()),
        })?;
        rows.push(closed_row(glyphs));
    }

    // Shift left as far as parity allows; the left closing wall may need two
    // columns of room.
    let indent = rows.iter().map(|(start, _)| *start).min().unwrap_or(0);
    let indent = indent - indent % 2;

    let mut text = String::new();
    for (start, glyphs) in rows {
        text.push_str(&" ".repeat((start - indent) as usize));
        let chars: Vec<String> = glyphs.iter().map(|g| g.as_char().to_string()).collect();
        text.push_str(&chars.join(" "));
        text.push('\n');
    }
    Ok(text)
}

fn display_id(puzzle: &Puzzle) -> &str {
    if puzzle.identity.is_empty() {
        "puzzle"
    } else {
        &puzzle.identity
    }
}

/// Glyph for every drawn cell: walkable cells with their overlays, then walls
/// around them.
fn place_glyphs(puzzle: &Puzzle) -> HashMap<HexCoord, Glyph> {
    let mut cells: HashMap<HexCoord, Glyph> = HashMap::new();

    for &coord in &puzzle.terrain {
        cells.insert(coord, Glyph::Floor);
    }
    for &coord in &puzzle.init.goals {
        cells.insert(coord, Glyph::Goal);
    }
    for &coord in &puzzle.init.crates {
        let glyph = match cells.get(&coord) {
            Some(Glyph::Goal) | Some(Glyph::CrateOnGoal) => Glyph::CrateOnGoal,
            _ => Glyph::Crate,
        };
        cells.insert(coord, glyph);
    }
    let player = puzzle.init.player;
    let glyph = match cells.get(&player) {
        Some(Glyph::Goal) | Some(Glyph::CrateOnGoal) => Glyph::PlayerOnGoal,
        _ => Glyph::Player,
    };
    cells.insert(player, glyph);

    let walls: Vec<HexCoord> = cells
        .keys()
        .flat_map(|coord| coord.neighbors())
        .filter(|n| !cells.contains_key(n))
        .collect();
    for wall in walls {
        cells.insert(wall, Glyph::Wall);
    }

    cells
}

/// Map cells to text lines and columns, keeping every column at least 2.
fn layout(cells: &HashMap<HexCoord, Glyph>) -> Result<BTreeMap<u32, BTreeMap<u32, Glyph>>> {
    let min_col = cells.keys().map(|c| c.i() - c.j()).min().unwrap_or(0);
    let min_row = cells
        .keys()
        .map(|c| c.j() + (c.i() - c.j()).div_euclid(2))
        .min()
        .unwrap_or(0);

    // Only even column shifts keep the hex layout; odd ones would swap
    // line parity.
    let mut origin_col = 2 - min_col;
    if origin_col.rem_euclid(2) == 1 {
        origin_col += 1;
    }
    let origin_row = -min_row;

    let mut lines: BTreeMap<u32, BTreeMap<u32, Glyph>> = BTreeMap::new();
    for (&coord, &glyph) in cells {
        let rect = RectCoord::from_hex(coord, origin_col, origin_row).ok_or_else(|| {
            HexError::Validation {
                message: format!("cell {} falls outside the drawing area", coord),
                help: None,
            }
        })?;
        lines
            .entry(rect.text_line())
            .or_default()
            .insert(rect.col, glyph);
    }
    Ok(lines)
}

/// A line's start column and glyphs, closed by walls on both ends and with
/// gaps filled.
///
/// Grid lines must start with a wall, and a floor at the end of a line would
/// be indistinguishable from trailing whitespace.
fn closed_row(glyphs: &BTreeMap<u32, Glyph>) -> (u32, Vec<Glyph>) {
    let (&first, &first_glyph) = match glyphs.iter().next() {
        Some(entry) => entry,
        None => return (0, Vec::new()),
    };
    let (&last, &last_glyph) = match glyphs.iter().next_back() {
        Some(entry) => entry,
        None => return (0, Vec::new()),
    };

    let start = if first_glyph == Glyph::Wall { first } else { first - 2 };
    let end = if last_glyph == Glyph::Wall { last } else { last + 2 };

    let row = (start..=end)
        .step_by(2)
        .map(|col| glyphs.get(&col).copied().unwrap_or(Glyph::Wall))
        .collect();
    (start, row)
}
