pub mod export;
pub mod formatter;

pub use export::{export_csv, resolve_export_path};
pub use formatter::{
    format_classification, format_polygon, format_profile, format_table, score_bar,
    should_use_colors,
};
