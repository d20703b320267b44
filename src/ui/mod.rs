pub mod colors;
pub mod table;

pub use table::{StatsTable, compare_cells, parse_numeric, sort_records_by_column_desc};
