// GNU Affero General Public License v3.0 or later (see LICENSE or https://www.gnu.org/licenses/agpl.txt)
//! HTML table flattening
//!
//! Turns a release table into a [`Matrix`] of cell text. Cells with a
//! `rowspan` attribute are copied into every row they span, so a row whose
//! leading cells were supplied by an earlier row still lines up with the
//! [`Column`] positions. Column spans are not handled.

use scraper::{ElementRef, Html, Selector};
use tracing::{debug, warn};

use crate::error::TableError;

/// Well-known column positions of the release table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    Os = 0,
    Type = 1,
    Version = 2,
}

impl Column {
    #[must_use]
    pub fn index(self) -> usize {
        self as usize
    }
}

/// One flattened table row, cells in encounter order
pub type Row = Vec<String>;

/// Rows of cell text, in document order, none of them empty
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Matrix {
    rows: Vec<Row>,
}

impl Matrix {
    #[must_use]
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Cell text at `row`, `column`, if the row is long enough
    #[must_use]
    pub fn cell(&self, row: usize, column: Column) -> Option<&str> {
        self.rows
            .get(row)
            .and_then(|r| r.get(column.index()))
            .map(String::as_str)
    }
}

/// Empty rows are dropped, as `flatten` would
impl From<Vec<Row>> for Matrix {
    fn from(rows: Vec<Row>) -> Self {
        Self {
            rows: rows.into_iter().filter(|r| !r.is_empty()).collect(),
        }
    }
}

fn selector(css: &'static str) -> Result<Selector, TableError> {
    Selector::parse(css).map_err(|e| TableError::Selector {
        css,
        reason: format!("{e:?}"),
    })
}

/// Find the first `table` element carrying `class`
///
/// # Errors
/// Returns [`TableError::NotFound`] if no table has the class
pub fn find_table<'a>(document: &'a Html, class: &str) -> Result<ElementRef<'a>, TableError> {
    let tables = selector("table")?;
    document
        .select(&tables)
        .find(|t| t.value().classes().any(|c| c == class))
        .ok_or_else(|| TableError::NotFound {
            class: class.to_string(),
        })
}

/// Flatten `table` into a [`Matrix`], expanding row spans
///
/// Every `td` is appended to its own row and to each following row it spans,
/// at whatever column is next free there. Spans running past the last row are
/// cut at the table end. Rows left without any cell (for example header rows
/// made of `th`) are dropped.
///
/// # Errors
/// Returns [`TableError::Selector`] if the row or cell selector cannot be built
pub fn flatten(table: ElementRef<'_>) -> Result<Matrix, TableError> {
    let tr = selector("tr")?;
    let td = selector("td")?;

    let rows: Vec<ElementRef<'_>> = table.select(&tr).collect();
    let mut matrix: Vec<Row> = vec![Vec::new(); rows.len()];

    for (i, row) in rows.iter().enumerate() {
        for cell in row.select(&td) {
            let span = match row_span(cell) {
                0 => rows.len() - i,
                n => n,
            };
            let text = cell_text(cell);
            let end = i.saturating_add(span).min(rows.len());
            for target in &mut matrix[i..end] {
                target.push(text.clone());
            }
        }
    }

    let matrix = Matrix::from(matrix);
    debug!("flattened {} table rows into {} rows", rows.len(), matrix.len());
    Ok(matrix)
}

/// Row span of a cell; `0` means "to the last row"
///
/// Anything that is not a non-negative integer, `-1` included, counts as 1.
fn row_span(cell: ElementRef<'_>) -> usize {
    let Some(raw) = cell.value().attr("rowspan") else {
        return 1;
    };
    match raw.trim().parse::<usize>() {
        Ok(n) => n,
        Err(_) => {
            warn!("ignoring malformed rowspan '{raw}'");
            1
        }
    }
}

/// Text content of an element
///
/// Descendant text nodes are joined with a single space, surrounding
/// whitespace is trimmed and inner whitespace runs collapse to one space.
#[must_use]
pub fn cell_text(element: ElementRef<'_>) -> String {
    element
        .text()
        .flat_map(str::split_whitespace)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Parse an HTML page and flatten its release table
///
/// The body is decoded as UTF-8, replacing invalid sequences.
///
/// # Errors
/// Returns [`TableError::NotFound`] if no table has `class` and
/// [`TableError::Empty`] if the table has no data rows
pub fn parse_release_table(body: &[u8], class: &str) -> Result<Matrix, TableError> {
    let html = String::from_utf8_lossy(body);
    let document = Html::parse_document(&html);
    let matrix = flatten(find_table(&document, class)?)?;

    if matrix.is_empty() {
        return Err(TableError::Empty {
            class: class.to_string(),
        });
    }
    Ok(matrix)
}
