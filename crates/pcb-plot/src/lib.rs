pub mod attributes;
pub mod controller;
pub mod error;
pub mod filename;
pub mod identity;
pub mod layers;
pub mod types;

pub use controller::{PlotController, Plotter, PlotterFactory};
pub use error::PlotError;
pub use layers::{FilePolarity, Layer};
pub use types::BoardInfo;

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Output format of a plot session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlotFormat {
    Gerber,
    Postscript,
    Pdf,
    Svg,
    Dxf,
    Hpgl,
}

impl PlotFormat {
    /// Default file extension for this format.
    pub fn default_extension(self) -> &'static str {
        match self {
            PlotFormat::Gerber => "gbr",
            PlotFormat::Postscript => "ps",
            PlotFormat::Pdf => "pdf",
            PlotFormat::Svg => "svg",
            PlotFormat::Dxf => "dxf",
            PlotFormat::Hpgl => "plt",
        }
    }
}

/// Plot settings a host application keeps per board. Serializable so it
/// can be persisted alongside the board.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlotOptions {
    /// Where plot files go; a relative path is resolved against the
    /// board file's directory.
    pub output_directory: PathBuf,
    pub format: PlotFormat,
    /// Name Gerber files with the per-layer Protel extensions instead
    /// of the official `.gbr`.
    pub use_protel_extensions: bool,
    /// Emit X2 attributes as X1 structured comments (`G04 #@! ...`) for
    /// consumers that cannot parse them.
    pub use_x1_compatibility: bool,
    pub color_mode: bool,
}

impl Default for PlotOptions {
    fn default() -> Self {
        PlotOptions {
            output_directory: PathBuf::new(),
            format: PlotFormat::Gerber,
            use_protel_extensions: false,
            use_x1_compatibility: false,
            color_mode: true,
        }
    }
}
