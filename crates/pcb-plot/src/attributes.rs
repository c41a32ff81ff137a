//! Gerber X2 file attributes, as defined in the Gerber file format
//! specification revision 2015.06 and later.

use chrono::{DateTime, FixedOffset, Local};

use crate::identity::{project_guid, sanitize_identity_field};
use crate::layers::Layer;
use crate::types::BoardInfo;

/// Stamped into the `%TF.GenerationSoftware` attribute.
const VENDOR: &str = "PcbPlot";
const APPLICATION: &str = "pcb-plot";
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Placeholder revision when the title block carries none.
const NO_REVISION: &str = "rev?";

/// Convert an X2 extended attribute into an X1 structured comment.
///
/// Consumers that cannot parse `%TF...*%` statements still understand
/// `G04` comments; stripping the `%` delimiters and prefixing `G04 #@! `
/// keeps the metadata readable for them. Identity when `compat` is
/// false. Not idempotent when true, so it is applied exactly once per
/// emitted line.
pub fn make_compat_x1(line: &str, compat: bool) -> String {
    if compat {
        format!("G04 #@! {}", line.replace('%', ""))
    } else {
        line.to_string()
    }
}

/// `%TF.CreationDate` with the full ISO 8601 combined date-time.
///
/// strftime writes the zone offset as `+hhmm`; the Gerber spec wants
/// `+hh:mm`, so a colon is inserted before the last two digits.
fn creation_date_line(now: DateTime<FixedOffset>) -> String {
    let mut offset = now.format("%z").to_string();
    if offset.len() > 3 {
        offset.insert(offset.len() - 2, ':');
    }
    format!(
        "%TF.CreationDate,{}{}*%",
        now.format("%Y-%m-%dT%H:%M:%S"),
        offset
    )
}

/// Build the X2 header attributes common to every plot file of a board,
/// in the order the format requires: GenerationSoftware, CreationDate,
/// ProjectId, SameCoordinates.
pub fn build_x2_header(
    board: &BoardInfo,
    compat: bool,
    now: DateTime<FixedOffset>,
) -> Vec<String> {
    let mut lines = Vec::with_capacity(6);

    lines.push(format!(
        "%TF.GenerationSoftware,{},{},{}*%",
        VENDOR, APPLICATION, VERSION
    ));

    lines.push(creation_date_line(now));

    // ProjectId: the board has no GUID of its own, so one is derived
    // from the full board file name. The id is the base name; commas
    // and non-ASCII are not allowed in these fields.
    let guid = project_guid(&board.full_name());
    let id = sanitize_identity_field(&board.base_name());
    let mut rev = sanitize_identity_field(&board.revision);
    if rev.is_empty() {
        rev = NO_REVISION.to_string();
    }
    lines.push(format!("%TF.ProjectId,{},{},{}*%", id, guid, rev));

    // SameCoordinates: files carrying the same key share plot origin
    // and registration. Only the auxiliary origin can shift the
    // coordinates, so the key encodes it when it is in use.
    let registration_id = match board.aux_origin {
        (x, y) if board.use_aux_origin && x != 0 && y != 0 => format!("PX{:x}PY{:x}", x, y),
        _ => "Original".to_string(),
    };
    lines.push(format!("%TF.SameCoordinates,{}*%", registration_id));

    lines
        .iter()
        .map(|line| make_compat_x1(line, compat))
        .collect()
}

/// Full attribute set for one layer's plot file: the common header
/// followed by `%TF.FileFunction` and, for material layers,
/// `%TF.FilePolarity`.
pub fn build_layer_attributes(
    board: &BoardInfo,
    layer: Layer,
    compat: bool,
    now: DateTime<FixedOffset>,
) -> Vec<String> {
    let mut lines = build_x2_header(board, compat, now);

    let function = layer.file_function_attribute(board.copper_layer_count);
    lines.push(make_compat_x1(&function, compat));

    let polarity = layer.file_polarity_attribute();
    if !polarity.is_empty() {
        lines.push(make_compat_x1(&polarity, compat));
    }

    lines
}

/// [`build_layer_attributes`] stamped with the current local time.
pub fn build_layer_attributes_now(board: &BoardInfo, layer: Layer, compat: bool) -> Vec<String> {
    build_layer_attributes(board, layer, compat, Local::now().fixed_offset())
}

/// Push the full attribute set for a layer into a plot backend's header,
/// stamped with the current local time.
pub fn add_layer_attributes(
    plotter: &mut dyn crate::controller::Plotter,
    board: &BoardInfo,
    layer: Layer,
    compat: bool,
) {
    for line in build_layer_attributes_now(board, layer, compat) {
        plotter.add_line_to_header(&line);
    }
}
