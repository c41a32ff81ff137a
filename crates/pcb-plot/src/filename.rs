use std::fs;
use std::path::{Path, PathBuf};

use crate::error::PlotError;

/// Characters rejected in file names on the strictest supported
/// platform (DOS/Windows), plus `%` which is special to Gerber.
const FORBIDDEN_CHARS: &[char] = &['\\', '/', ':', '*', '?', '"', '<', '>', '|', '%'];

/// Build the output path for one plot file.
///
/// The directory and extension are set unconditionally; a non-empty
/// suffix is appended to the base name as `-<suffix>`. The suffix is
/// trimmed and its forbidden characters squashed to underscores here
/// rather than at the call site, because this can be reached from
/// scripting contexts that pass arbitrary layer names.
pub fn build_plot_filename(
    base_name: &str,
    output_dir: &Path,
    suffix: &str,
    extension: &str,
) -> PathBuf {
    let suffix: String = suffix
        .trim()
        .chars()
        .map(|c| if FORBIDDEN_CHARS.contains(&c) { '_' } else { c })
        .collect();

    let mut name = Path::new(base_name)
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();

    if !suffix.is_empty() {
        name.push('-');
        name.push_str(&suffix);
    }
    name.push('.');
    name.push_str(extension);

    output_dir.join(name)
}

/// Resolve the plot output directory and make sure it exists.
///
/// A relative directory is taken relative to the directory of
/// `board_file`, so a board-local output folder works regardless of the
/// process working directory.
pub fn ensure_output_dir(output_dir: &Path, board_file: &Path) -> Result<PathBuf, PlotError> {
    let resolved = if output_dir.is_absolute() {
        output_dir.to_path_buf()
    } else {
        board_file
            .parent()
            .unwrap_or_else(|| Path::new("."))
            .join(output_dir)
    };
    fs::create_dir_all(&resolved)?;
    Ok(resolved)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filename_with_suffix() {
        let path = build_plot_filename("board", Path::new("/out"), "  Front/Top:1 ", "gbr");
        assert_eq!(path, PathBuf::from("/out/board-Front_Top_1.gbr"));
    }

    #[test]
    fn test_filename_empty_suffix() {
        let path = build_plot_filename("board", Path::new("/out"), "", "gbr");
        assert_eq!(path, PathBuf::from("/out/board.gbr"));
    }

    #[test]
    fn test_filename_whitespace_only_suffix() {
        let path = build_plot_filename("board", Path::new("/out"), "   ", "gbr");
        assert_eq!(path, PathBuf::from("/out/board.gbr"));
    }

    #[test]
    fn test_filename_replaces_extension() {
        let path = build_plot_filename("board.kicad_pcb", Path::new("/out"), "F_Cu", "gtl");
        assert_eq!(path, PathBuf::from("/out/board-F_Cu.gtl"));
    }

    #[test]
    fn test_filename_percent_is_forbidden() {
        let path = build_plot_filename("board", Path::new("/out"), "100%", "gbr");
        assert_eq!(path, PathBuf::from("/out/board-100_.gbr"));
    }

    #[test]
    fn test_ensure_output_dir_absolute() {
        let tmp = tempfile::tempdir().unwrap();
        let target = tmp.path().join("plots").join("gerber");
        let resolved = ensure_output_dir(&target, Path::new("/nowhere/board.kicad_pcb")).unwrap();
        assert_eq!(resolved, target);
        assert!(target.is_dir());
    }

    #[test]
    fn test_ensure_output_dir_relative_to_board() {
        let tmp = tempfile::tempdir().unwrap();
        let board_file = tmp.path().join("board.kicad_pcb");
        let resolved = ensure_output_dir(Path::new("plots"), &board_file).unwrap();
        assert_eq!(resolved, tmp.path().join("plots"));
        assert!(resolved.is_dir());
    }
}
