pub mod key;
pub mod layer;
pub mod layout;

pub use self::key::{Key, KeyStyle, Position, Size};
pub use self::layer::{Layer, Legends};
pub use self::layout::{Layout, LayoutMetadata};
