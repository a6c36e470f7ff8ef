pub mod domain;
pub mod error;
pub mod export;
pub mod extract;
pub mod normalize;
pub mod parse;

pub use domain::*;
pub use error::CoreError;
pub use export::{export_csv, export_file_name, export_txt, Dataset, ExportFormat};
pub use extract::extract_numbers;
pub use normalize::normalize_description;
pub use parse::{InputFormat, RawRecord};
