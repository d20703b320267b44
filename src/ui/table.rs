//! Sortable text tables for the stat views

use crossterm::style::Stylize;
use std::cmp::{Ordering, Reverse};
use std::io::Write;
use unicode_width::UnicodeWidthStr;

use super::colors::{header_fg, text_fg, title_bg, title_fg};
use crate::data_fetcher::models::TableRecord;
use crate::error::AppError;

const COLUMN_GAP: &str = "  ";

/// Parses a cell as a finite number. A trailing `%` is ignored so
/// percentage columns sort numerically.
pub fn parse_numeric(cell: &str) -> Option<f64> {
    let trimmed = cell.trim();
    let number = trimmed.strip_suffix('%').unwrap_or(trimmed).trim_end();
    number.parse::<f64>().ok().filter(|value| value.is_finite())
}

/// Orders two cells: numerically when both parse as numbers, lexically when
/// neither does. A blank cell counts as 0. A numeric cell orders below a
/// non-numeric one, which keeps the ordering total for mixed columns.
///
/// ```
/// use nhl_stats::ui::table::compare_cells;
/// use std::cmp::Ordering;
///
/// assert_eq!(compare_cells("10", "2"), Ordering::Greater);
/// assert_eq!(compare_cells("9.50%", "10.00%"), Ordering::Less);
/// assert_eq!(compare_cells("abc", "10"), Ordering::Greater);
/// assert_eq!(compare_cells("", "3"), Ordering::Less);
/// ```
pub fn compare_cells(a: &str, b: &str) -> Ordering {
    match (sort_value(a), sort_value(b)) {
        (Some(x), Some(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.cmp(b),
    }
}

fn sort_value(cell: &str) -> Option<f64> {
    if cell.trim().is_empty() {
        Some(0.0)
    } else {
        parse_numeric(cell)
    }
}

/// Cell text ordered by [`compare_cells`]
#[derive(Debug, Clone)]
struct CellKey(String);

impl PartialEq for CellKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for CellKey {}

impl PartialOrd for CellKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CellKey {
    fn cmp(&self, other: &Self) -> Ordering {
        compare_cells(&self.0, &other.0)
    }
}

fn column_index(columns: &[&str], column: &str) -> Result<usize, AppError> {
    columns
        .iter()
        .position(|c| c.eq_ignore_ascii_case(column.trim()))
        .ok_or_else(|| AppError::unknown_column(column))
}

/// Sorts records by the named column, largest first. The sort is stable:
/// rows that compare equal keep their relative order.
pub fn sort_records_by_column_desc<R: TableRecord>(
    records: &mut [R],
    column: &str,
) -> Result<(), AppError> {
    let index = column_index(R::COLUMNS, column)?;
    records.sort_by_cached_key(|record| {
        Reverse(CellKey(
            record.cells().into_iter().nth(index).unwrap_or_default(),
        ))
    });
    Ok(())
}

/// A rectangular table of display strings
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StatsTable {
    title: Option<String>,
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl StatsTable {
    /// Builds a table; short rows are padded with blanks and long rows
    /// truncated to the header count.
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        let width = headers.len();
        let rows = rows
            .into_iter()
            .map(|mut row| {
                row.resize(width, String::new());
                row
            })
            .collect();
        Self {
            title: None,
            headers,
            rows,
        }
    }

    pub fn from_records<R: TableRecord>(records: &[R]) -> Self {
        Self::new(
            R::COLUMNS.iter().map(|c| c.to_string()).collect(),
            records.iter().map(TableRecord::cells).collect(),
        )
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Stable descending sort by the named column (case-insensitive).
    pub fn sort_by_column_desc(&mut self, column: &str) -> Result<(), AppError> {
        let headers: Vec<&str> = self.headers.iter().map(String::as_str).collect();
        let index = column_index(&headers, column)?;
        self.rows
            .sort_by_cached_key(|row| Reverse(CellKey(row[index].clone())));
        Ok(())
    }

    /// Display width of each column, header included.
    pub fn column_widths(&self) -> Vec<usize> {
        self.headers
            .iter()
            .enumerate()
            .map(|(i, header)| {
                self.rows
                    .iter()
                    .map(|row| row[i].width())
                    .chain(std::iter::once(header.width()))
                    .max()
                    .unwrap_or(0)
            })
            .collect()
    }

    /// Renders the table as text, optionally with terminal colors.
    /// Numeric cells are right-aligned.
    pub fn render(&self, styled: bool) -> String {
        let widths = self.column_widths();
        let mut out = String::new();

        if let Some(title) = &self.title {
            if styled {
                let banner = format!(" {title} ").with(title_fg()).on(title_bg()).bold();
                out.push_str(&format!("{banner}"));
            } else {
                out.push_str(title);
            }
            out.push_str("\n\n");
        }

        let header_line = join_padded(&self.headers, &widths, |_| false);
        if styled {
            out.push_str(&format!("{}", header_line.with(header_fg()).bold()));
        } else {
            out.push_str(&header_line);
        }
        out.push('\n');

        let total_width =
            widths.iter().sum::<usize>() + COLUMN_GAP.len() * widths.len().saturating_sub(1);
        out.push_str(&"-".repeat(total_width));
        out.push('\n');

        for row in &self.rows {
            let line = join_padded(row, &widths, |cell| parse_numeric(cell).is_some());
            if styled {
                out.push_str(&format!("{}", line.with(text_fg())));
            } else {
                out.push_str(&line);
            }
            out.push('\n');
        }

        out
    }

    /// Writes the rendered table to `out`.
    pub fn print<W: Write>(&self, out: &mut W, styled: bool) -> Result<(), AppError> {
        crossterm::queue!(out, crossterm::style::Print(self.render(styled)))?;
        out.flush()?;
        Ok(())
    }

    /// Rows as JSON objects keyed by header, in row order.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::Value::Array(
            self.rows
                .iter()
                .map(|row| {
                    let object: serde_json::Map<String, serde_json::Value> = self
                        .headers
                        .iter()
                        .zip(row)
                        .map(|(h, c)| (h.clone(), serde_json::Value::String(c.clone())))
                        .collect();
                    serde_json::Value::Object(object)
                })
                .collect(),
        )
    }
}

fn join_padded<F>(cells: &[String], widths: &[usize], right_align: F) -> String
where
    F: Fn(&str) -> bool,
{
    let last = widths.len().saturating_sub(1);
    cells
        .iter()
        .zip(widths)
        .enumerate()
        .map(|(i, (cell, &width))| {
            let padding = " ".repeat(width.saturating_sub(cell.width()));
            if right_align(cell) {
                format!("{padding}{cell}")
            } else if i == last {
                cell.clone()
            } else {
                format!("{cell}{padding}")
            }
        })
        .collect::<Vec<_>>()
        .join(COLUMN_GAP)
}
