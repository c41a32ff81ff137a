use std::path::PathBuf;

/// Read-only facts about a board, everything attribute generation needs
/// to know about it.
#[derive(Debug, Clone)]
pub struct BoardInfo {
    /// Full path of the board file.
    pub file_name: PathBuf,
    /// Number of copper layers in the stackup.
    pub copper_layer_count: u32,
    /// Revision string from the title block, may be empty.
    pub revision: String,
    /// Auxiliary origin in board internal units.
    pub aux_origin: (i32, i32),
    /// Whether plots are registered against the auxiliary origin.
    pub use_aux_origin: bool,
}

impl BoardInfo {
    /// Board file name without directory and extension.
    pub fn base_name(&self) -> String {
        self.file_name
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    /// Board file name without directory, extension kept.
    pub fn full_name(&self) -> String {
        self.file_name
            .file_name()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}
