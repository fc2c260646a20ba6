use crate::consts::{CUSTOM_KEYCODE, ID_SUFFIX_LEN, PLACEHOLDER_LEGEND};
use crate::model::{Key, KeyStyle, Layer, Legends, Position, Size};
use fastrand::Rng;
use typed_builder::TypedBuilder;

/// Mints key ids that never collide with ids already in use.
///
/// Ids look like `<prefix>_<counter><random>`; the counter is monotonic per
/// minter and the random suffix keeps ids distinct across sessions.
#[derive(Debug, Clone)]
pub struct IdMinter {
    rng: Rng,
    counter: u64,
}

impl Default for IdMinter {
    fn default() -> Self {
        Self::new()
    }
}

impl IdMinter {
    pub fn new() -> Self {
        Self {
            rng: Rng::new(),
            counter: 0,
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: Rng::with_seed(seed),
            counter: 0,
        }
    }

    pub fn mint<F>(&mut self, prefix: &str, is_taken: F) -> String
    where
        F: Fn(&str) -> bool,
    {
        loop {
            self.counter += 1;
            let suffix: String = (0..ID_SUFFIX_LEN)
                .map(|_| self.rng.alphanumeric().to_ascii_lowercase())
                .collect();
            let candidate = format!("{}_{}{}", prefix, self.counter, suffix);
            if !is_taken(&candidate) {
                return candidate;
            }
        }
    }
}

/// Template for a key added to a layout. The id is minted on insertion.
#[derive(Debug, Clone, PartialEq, TypedBuilder)]
pub struct NewKey {
    #[builder(default)]
    pub position: Position,
    #[builder(default)]
    pub size: Size,
    #[builder(default = CUSTOM_KEYCODE.to_string(), setter(into))]
    pub keycode: String,
    #[builder(default = Legends::new(PLACEHOLDER_LEGEND, PLACEHOLDER_LEGEND))]
    pub legends: Legends,
    #[builder(default, setter(strip_option))]
    pub style: Option<KeyStyle>,
}

impl Default for NewKey {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl NewKey {
    pub fn with_legend(mut self, layer: Layer, value: impl Into<String>) -> Self {
        self.legends.set(layer, value);
        self
    }

    pub(crate) fn into_key(self, id: String) -> Key {
        Key {
            id,
            position: self.position,
            size: self.size,
            keycode: self.keycode,
            legends: self.legends,
            style: self.style,
        }
    }
}
