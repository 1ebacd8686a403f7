//! # Rendering tableaus
//!
//! Text output of the snapshots published by the simplex method. Rows and columns are labeled
//! with the variable names, and the cell that is pivoted on is highlighted.
//!
//! The renderer only reads snapshots; it has no access to the state of the method.
use std::fmt::Display;
use std::io;
use std::io::Write;

use itertools::Itertools;
use owo_colors::OwoColorize;
use tracing::warn;

use crate::algorithm::simplex::{Observer, Snapshot};
use crate::data::solution::Variable;

/// How to render.
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct RenderOptions {
    /// Highlight the pivot with ANSI colors. Without colors, the pivot value is put in brackets.
    pub color: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { color: true }
    }
}

/// How a single cell is highlighted.
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
enum Highlight {
    None,
    /// In the pivot row or the pivot column.
    Line,
    /// The pivot itself.
    Pivot,
}

/// Render a snapshot as a bordered table.
///
/// The first row holds the column labels, the first column the label of the variable that is basic
/// in each row. The right-hand side column and the objective row are not labeled.
///
/// # Return value
///
/// The table, with a trailing newline.
pub fn render_to_string<F: Display>(snapshot: &Snapshot<'_, F>, options: RenderOptions) -> String {
    let Snapshot { tableau, basis, pivot } = *snapshot;
    let height = tableau.height();

    let label = |j: Option<usize>| j
        .and_then(|j| Variable::of_column(j, height))
        .map_or_else(String::new, |variable| variable.to_string());

    let header = std::iter::once(String::new())
        .chain((0..tableau.width()).map(|j| label(Some(j))))
        .collect::<Vec<_>>();
    let body = tableau.rows()
        .enumerate()
        .map(|(i, row)| {
            std::iter::once((label(basis.get(i)), Highlight::None))
                .chain(row.iter().enumerate().map(|(j, value)| {
                    let highlight = match pivot {
                        Some(cell) if cell.row == i && cell.column == j => Highlight::Pivot,
                        Some(cell) if cell.row == i || cell.column == j => Highlight::Line,
                        _ => Highlight::None,
                    };
                    let text = if highlight == Highlight::Pivot && !options.color {
                        format!("[{}]", value)
                    } else {
                        value.to_string()
                    };
                    (text, highlight)
                }))
                .collect::<Vec<_>>()
        })
        .collect::<Vec<_>>();

    let widths = (0..header.len())
        .map(|k| {
            body.iter()
                .map(|row| row[k].0.chars().count())
                .chain(std::iter::once(header[k].chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect::<Vec<_>>();

    let separator = format!("+{}+", widths.iter().map(|width| "-".repeat(width + 2)).join("+"));
    let line = |cells: Vec<String>| format!("|{}|", cells.iter().map(|cell| format!(" {} ", cell)).join("|"));

    let mut output = String::new();
    output.push_str(&separator);
    output.push('\n');
    output.push_str(&line(header.iter()
        .zip(&widths)
        .map(|(text, &width)| format!("{:^width$}", text, width = width))
        .collect()));
    output.push('\n');
    output.push_str(&separator);
    output.push('\n');
    for row in &body {
        output.push_str(&line(row.iter()
            .zip(&widths)
            .map(|((text, highlight), &width)| {
                // Pad before coloring, escape codes have no width
                let padded = format!("{:^width$}", text, width = width);
                match (highlight, options.color) {
                    (Highlight::Pivot, true) => padded.black().on_yellow().to_string(),
                    (Highlight::Line, true) => padded.black().on_green().to_string(),
                    _ => padded,
                }
            })
            .collect()));
        output.push('\n');
    }
    output.push_str(&separator);
    output.push('\n');

    output
}

/// Writes every snapshot it observes as a table.
///
/// Write errors can't be returned through the `Observer` interface. The first one is kept, and
/// nothing is written after it.
#[derive(Debug)]
pub struct TextRenderer<W> {
    writer: W,
    options: RenderOptions,
    error: Option<io::Error>,
}

impl<W: Write> TextRenderer<W> {
    /// Create a new instance.
    pub fn new(writer: W, options: RenderOptions) -> Self {
        Self { writer, options, error: None }
    }

    /// The first write error that occurred, if any.
    pub fn error(&self) -> Option<&io::Error> {
        self.error.as_ref()
    }

    /// Get the writer back.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<F: Display, W: Write> Observer<F> for TextRenderer<W> {
    fn observe(&mut self, snapshot: Snapshot<'_, F>) {
        if self.error.is_some() {
            return;
        }

        let text = render_to_string(&snapshot, self.options);
        if let Err(error) = writeln!(self.writer, "{}", text).and_then(|()| self.writer.flush()) {
            warn!(%error, "failed to write tableau");
            self.error = Some(error);
        }
    }
}
