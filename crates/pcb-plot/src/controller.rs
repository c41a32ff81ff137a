//! Plot session lifecycle: one controller owns at most one open plot
//! backend at a time.

use std::path::{Path, PathBuf};

use log::{debug, warn};

use crate::error::PlotError;
use crate::filename::{build_plot_filename, ensure_output_dir};
use crate::layers::Layer;
use crate::types::BoardInfo;
use crate::{PlotFormat, PlotOptions};

/// One open plot output stream.
///
/// Implementations wrap a concrete writer (Gerber, PDF, ...); the
/// controller drives them through this trait only and never looks
/// inside.
pub trait Plotter {
    /// Append one raw text line to the file header.
    fn add_line_to_header(&mut self, line: &str);

    /// Render the full graphic content of the bound layer.
    fn plot_layer(&mut self) -> Result<(), PlotError>;

    /// Flush and finalize the output file.
    fn end_plot(&mut self) -> Result<(), PlotError>;

    fn set_color_mode(&mut self, color: bool);

    fn color_mode(&self) -> bool;
}

/// Creates plot backends bound to a target file and layer. This is the
/// seam to the actual rendering machinery, which is not part of this
/// crate.
pub trait PlotterFactory {
    fn start_plot(
        &self,
        board: &BoardInfo,
        options: &PlotOptions,
        layer: Layer,
        path: &Path,
        sheet_desc: &str,
    ) -> Result<Box<dyn Plotter>, PlotError>;
}

/// Drives one plot-file-writing session: open, render, close.
///
/// Not synchronized; a controller instance belongs to one caller at a
/// time.
pub struct PlotController<'a, F: PlotterFactory> {
    board: &'a BoardInfo,
    options: PlotOptions,
    factory: F,
    layer: Option<Layer>,
    plotter: Option<Box<dyn Plotter>>,
    plot_file: Option<PathBuf>,
}

impl<'a, F: PlotterFactory> PlotController<'a, F> {
    pub fn new(board: &'a BoardInfo, options: PlotOptions, factory: F) -> Self {
        PlotController {
            board,
            options,
            factory,
            layer: None,
            plotter: None,
            plot_file: None,
        }
    }

    /// Select the layer the next [`open_plot_file`](Self::open_plot_file)
    /// call will bind to.
    pub fn set_layer(&mut self, layer: Layer) {
        self.layer = Some(layer);
    }

    pub fn layer(&self) -> Option<Layer> {
        self.layer
    }

    pub fn options(&self) -> &PlotOptions {
        &self.options
    }

    pub fn is_open(&self) -> bool {
        self.plotter.is_some()
    }

    /// Path of the currently open plot file.
    pub fn plot_file(&self) -> Option<&Path> {
        self.plot_file.as_deref()
    }

    /// Open a new plot file for the selected layer, closing any previous
    /// one first.
    ///
    /// The extension is the format's default, or the per-layer Protel
    /// extension when plotting Gerber with the legacy-extension option
    /// set. On any failure the controller is left closed and no partial
    /// file stays open.
    pub fn open_plot_file(
        &mut self,
        suffix: &str,
        format: PlotFormat,
        sheet_desc: &str,
    ) -> Result<(), PlotError> {
        // Backends pick their dialect from the stored format, so keep it
        // before anything else happens.
        self.options.format = format;

        self.close_plot();

        let layer = self.layer.ok_or(PlotError::NoLayer)?;

        let out_dir = ensure_output_dir(&self.options.output_directory, &self.board.file_name)?;

        let extension = if format == PlotFormat::Gerber && self.options.use_protel_extensions {
            layer.protel_extension()
        } else {
            format.default_extension().to_string()
        };

        let path = build_plot_filename(&self.board.base_name(), &out_dir, suffix, &extension);

        match self
            .factory
            .start_plot(self.board, &self.options, layer, &path, sheet_desc)
        {
            Ok(plotter) => {
                debug!("opened plot file {}", path.display());
                self.plotter = Some(plotter);
                self.plot_file = Some(path);
                Ok(())
            }
            Err(err) => {
                warn!("failed to open plot file {}: {}", path.display(), err);
                Err(err)
            }
        }
    }

    /// Render the bound layer through the backend.
    pub fn plot_layer(&mut self) -> Result<(), PlotError> {
        match self.plotter.as_mut() {
            Some(plotter) => plotter.plot_layer(),
            None => Err(PlotError::NotOpen),
        }
    }

    /// Finalize and release the backend. Safe to call when already
    /// closed.
    pub fn close_plot(&mut self) {
        if let Some(mut plotter) = self.plotter.take() {
            if let Err(err) = plotter.end_plot() {
                warn!("error finalizing plot file: {err}");
            }
            debug!("closed plot file");
        }
        self.plot_file = None;
    }

    /// No-op when no plot is open.
    pub fn set_color_mode(&mut self, color: bool) {
        if let Some(plotter) = self.plotter.as_mut() {
            plotter.set_color_mode(color);
        }
    }

    /// `false` when no plot is open.
    pub fn color_mode(&self) -> bool {
        self.plotter.as_ref().map(|p| p.color_mode()).unwrap_or(false)
    }
}

impl<F: PlotterFactory> Drop for PlotController<'_, F> {
    fn drop(&mut self) {
        self.close_plot();
    }
}
