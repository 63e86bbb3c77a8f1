//! Measure, grow, and position for grid containers.
//!
//! A grid sizes each column to its widest cell and each row to its tallest,
//! then applies those extents uniformly. Rows may be ragged: a short row
//! leaves its trailing cells empty, and empty cells take part in nothing.

use crate::error::Result;
use crate::geometry::{Point, Side, Size};
use crate::render::TextMeasurer;
use crate::tree::{ElementId, ElementKind, GridMetrics, Tree};

use super::{collapse, move_in_place, resize_in_place};

fn rows_of(tree: &Tree, id: ElementId) -> Vec<Vec<ElementId>> {
    match tree.get(id).map(|e| &e.kind) {
        Some(ElementKind::Grid(data)) => data.rows.clone(),
        _ => Vec::new(),
    }
}

fn metrics_of(tree: &Tree, id: ElementId) -> GridMetrics {
    match tree.get(id).map(|e| &e.kind) {
        Some(ElementKind::Grid(data)) => data.metrics.clone(),
        _ => GridMetrics::default(),
    }
}

fn store_metrics(tree: &mut Tree, id: ElementId, metrics: GridMetrics) {
    if let Some(ElementKind::Grid(data)) = tree.get_mut(id).map(|e| &mut e.kind) {
        data.metrics = metrics;
    }
}

// ---------------------------------------------------------------------------
// Passes
// ---------------------------------------------------------------------------

/// Measure the cells and build the per-axis tables.
///
/// `column_margins` and `row_margins` carry one entry more than there are
/// columns and rows: the outer entries are the grid's own leading and
/// trailing margins (consumed by the parent via margin derivation), the inner
/// entries are the collapsed gaps inside the grid. Only the inner entries
/// contribute to the grid's extent. An inter-row gap considers a column only
/// where both rows actually have the cell.
pub(crate) fn measure(
    tree: &mut Tree,
    id: ElementId,
    measurer: &dyn TextMeasurer,
) -> Result<Size> {
    let rows = rows_of(tree, id);
    for row in &rows {
        for &cell in row {
            super::measure_minimum(tree, cell, measurer)?;
        }
    }

    let ncols = rows.iter().map(Vec::len).max().unwrap_or(0);
    let nrows = rows.len();
    if ncols == 0 {
        store_metrics(tree, id, GridMetrics::default());
        resize_in_place(tree, id, Size::ZERO);
        return Ok(Size::ZERO);
    }

    let column_widths: Vec<i32> = (0..ncols)
        .map(|c| {
            rows.iter()
                .filter_map(|row| row.get(c))
                .map(|&cell| tree.rect(cell).width)
                .max()
                .unwrap_or(0)
        })
        .collect();

    let row_heights: Vec<i32> = rows
        .iter()
        .map(|row| row.iter().map(|&cell| tree.rect(cell).height).max().unwrap_or(0))
        .collect();

    let mut column_margins = vec![0; ncols + 1];
    column_margins[0] = rows
        .iter()
        .filter_map(|row| row.first())
        .map(|&cell| tree.margin(cell, Side::Left))
        .max()
        .unwrap_or(0);
    for c in 1..ncols {
        column_margins[c] = rows
            .iter()
            .filter(|row| row.len() > c)
            .map(|row| {
                collapse(
                    tree.margin(row[c - 1], Side::Right),
                    tree.margin(row[c], Side::Left),
                )
            })
            .max()
            .unwrap_or(0);
    }
    column_margins[ncols] = rows
        .iter()
        .filter_map(|row| row.get(ncols - 1))
        .map(|&cell| tree.margin(cell, Side::Right))
        .max()
        .unwrap_or(0);

    let mut row_margins = vec![0; nrows + 1];
    row_margins[0] = rows
        .first()
        .map(|row| {
            row.iter()
                .map(|&cell| tree.margin(cell, Side::Top))
                .max()
                .unwrap_or(0)
        })
        .unwrap_or(0);
    for r in 1..nrows {
        let shared = rows[r - 1].len().min(rows[r].len());
        row_margins[r] = (0..shared)
            .map(|c| {
                collapse(
                    tree.margin(rows[r - 1][c], Side::Bottom),
                    tree.margin(rows[r][c], Side::Top),
                )
            })
            .max()
            .unwrap_or(0);
    }
    row_margins[nrows] = rows
        .last()
        .map(|row| {
            row.iter()
                .map(|&cell| tree.margin(cell, Side::Bottom))
                .max()
                .unwrap_or(0)
        })
        .unwrap_or(0);

    let width: i32 =
        column_widths.iter().sum::<i32>() + column_margins[1..ncols].iter().sum::<i32>();
    let height: i32 =
        row_heights.iter().sum::<i32>() + row_margins[1..nrows].iter().sum::<i32>();

    store_metrics(
        tree,
        id,
        GridMetrics { column_widths, row_heights, column_margins, row_margins },
    );
    let size = Size::new(width, height);
    resize_in_place(tree, id, size);
    Ok(size)
}

/// Apply the measured column widths and row heights uniformly. Grid cells do
/// not scale with extra space; only the grid's own rect adopts the target.
pub(crate) fn grow(tree: &mut Tree, id: ElementId, target: Size) {
    let rows = rows_of(tree, id);
    let metrics = metrics_of(tree, id);
    for (r, row) in rows.iter().enumerate() {
        for (c, &cell) in row.iter().enumerate() {
            let cell_size = Size::new(
                metrics.column_widths.get(c).copied().unwrap_or(0),
                metrics.row_heights.get(r).copied().unwrap_or(0),
            );
            super::grow_to_fit(tree, cell, cell_size);
        }
    }
    resize_in_place(tree, id, target);
}

/// Place each present cell at its column and row origin; missing trailing
/// cells of short rows are simply skipped.
pub(crate) fn position(tree: &mut Tree, id: ElementId, origin: Point) {
    move_in_place(tree, id, origin);

    let rows = rows_of(tree, id);
    let metrics = metrics_of(tree, id);
    let ncols = metrics.column_widths.len();
    let nrows = metrics.row_heights.len();

    let mut lefts = vec![origin.x; ncols];
    for c in 1..ncols {
        lefts[c] = lefts[c - 1] + metrics.column_widths[c - 1] + metrics.column_margins[c];
    }
    let mut tops = vec![origin.y; nrows];
    for r in 1..nrows {
        tops[r] = tops[r - 1] + metrics.row_heights[r - 1] + metrics.row_margins[r];
    }

    for (r, row) in rows.iter().enumerate() {
        for (c, &cell) in row.iter().enumerate() {
            super::assign_positions(tree, cell, Point::new(lefts[c], tops[r]));
        }
    }
}

// ===========================================================================
// Tests
// ===========================================================================
