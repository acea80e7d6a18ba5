//! Tab-separated value reading and writing.

mod options;
mod reader;
mod writer;

pub use options::TsvOptions;
pub use reader::{read_tsv, read_tsv_headers, read_tsv_with_options};
pub use writer::{to_tsv, to_tsv_string};
