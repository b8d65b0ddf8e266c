//! Infrastructure layer for sandbox paths and query-string encoding.

pub mod encoding;
pub mod paths;

pub use encoding::{parse_query_string, percent_decode, percent_encode, to_query_string};
pub use paths::{expand_tilde, get_data_dir};
