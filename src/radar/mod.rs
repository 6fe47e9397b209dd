pub mod polygon;
pub mod table;

pub use polygon::{axis_angle, axis_labels, to_polar_polygon, PolarVertex, VERTEX_COUNT};
pub use table::{parse_csv, scores_from_csv, to_csv, to_table, CsvError, TableRow, CSV_HEADER};
