use crate::consts::{DEFAULT_CANVAS_PADDING_PX, DEFAULT_UNIT_PX};
use crate::error::{KeymapError, KmResult};
use clap::parser::ValueSource;
use clap::{ArgMatches, Args};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Args, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Pixels per grid unit
    #[arg(long, default_value_t = DEFAULT_UNIT_PX)]
    pub unit_px: f32,

    /// Canvas inner padding subtracted from pointer offsets
    #[arg(long, default_value_t = DEFAULT_CANVAS_PADDING_PX)]
    pub canvas_padding_px: f32,

    /// Start with direct keyboard legend entry enabled
    #[arg(long, default_value_t = true, action = clap::ArgAction::Set)]
    pub direct_input: bool,

    #[arg(long, default_value = "https://keymapcraft.app/")]
    pub share_base_url: String,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            unit_px: DEFAULT_UNIT_PX,
            canvas_padding_px: DEFAULT_CANVAS_PADDING_PX,
            direct_input: true,
            share_base_url: "https://keymapcraft.app/".to_string(),
        }
    }
}

impl EditorConfig {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> KmResult<Self> {
        let content = fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Overlays values typed on the command line; defaults from clap never
    /// replace values loaded from a file.
    pub fn merge_from_cli(&mut self, cli: &EditorConfig, matches: &ArgMatches) {
        macro_rules! update_if_present {
            ($field:ident) => {
                if matches.value_source(stringify!($field)) == Some(ValueSource::CommandLine) {
                    self.$field = cli.$field.clone();
                }
            };
        }

        update_if_present!(unit_px);
        update_if_present!(canvas_padding_px);
        update_if_present!(direct_input);
        update_if_present!(share_base_url);
    }

    pub fn validate(&self) -> KmResult<()> {
        if !(self.unit_px.is_finite() && self.unit_px > 0.0) {
            return Err(KeymapError::Config(format!(
                "unit_px must be a positive number, got {}",
                self.unit_px
            )));
        }
        if !(self.canvas_padding_px.is_finite() && self.canvas_padding_px >= 0.0) {
            return Err(KeymapError::Config(format!(
                "canvas_padding_px must be non-negative, got {}",
                self.canvas_padding_px
            )));
        }
        Ok(())
    }
}
