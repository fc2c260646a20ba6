//! Import/export boundary. The only fallible surface of the crate.

pub mod json;
pub mod table;
pub mod url;

pub use self::json::{
    import_layout, load_layout_file, parse_layout, read_layout_file, to_json, write_json_file,
};
pub use self::table::{key_table_string, write_key_table};
pub use self::url::{import_share_url, parse_share_url, share_url};
