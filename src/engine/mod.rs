//! Copy-on-write mutations of a [`Layout`](crate::model::Layout).
//!
//! Every function takes the current snapshot by reference and returns a new
//! one; callers swap it in. Unknown ids are silent no-ops and out-of-range
//! geometry is clamped, never rejected.

pub mod bulk;
pub mod ids;
pub mod single;

pub use self::bulk::{delete_selected_keys, duplicate_selected_keys, move_selected_keys};
pub use self::ids::{IdMinter, NewKey};
pub use self::single::{
    add_key, delete_key, duplicate_key, update_key_legend, update_key_position, update_key_size,
};
