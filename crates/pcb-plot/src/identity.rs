//! Project identity fields for the `%TF.ProjectId` attribute.

/// The GUID digests the first bytes of the name; shorter names are
/// padded with this filler byte up to the buffer length.
const GUID_NAME_LEN: usize = 16;
const GUID_FILLER: u8 = b'X';

/// Build a deterministic, RFC4122-shaped project GUID from a name.
///
/// Only the RFC4122 syntax is borrowed (`xxxxxxxx-xxxx-1xxx-9xxx-
/// xxxxxxxxxxxx`, version nibble 1, variant nibble 9): the hex digits
/// are lifted straight from the byte values of `name`, there is no
/// timestamp or node id. Two names sharing their first 16 bytes
/// therefore collide. The exact byte layout is an on-disk contract and
/// must be kept bit-for-bit, not improved.
pub fn project_guid(name: &str) -> String {
    let mut bytes: Vec<u8> = name.bytes().collect();
    if bytes.len() < GUID_NAME_LEN {
        bytes.resize(GUID_NAME_LEN, GUID_FILLER);
    }
    let b = |i: usize| bytes[i] as u32;

    let mut guid = String::with_capacity(36);

    // First field: 8 hex digits from bytes 0..4.
    for i in 0..4 {
        guid.push_str(&format!("{:02x}", b(i)));
    }
    guid.push('-');

    // Second field: 4 hex digits from bytes 4..6.
    for i in 4..6 {
        guid.push_str(&format!("{:02x}", b(i)));
    }

    // Third field: version nibble fixed to 1, then 12 bits straddling
    // bytes 6 and 7.
    guid.push_str("-1");
    let cc = (b(6) << 4 & 0xff0) | (b(7) >> 4 & 0x0f);
    guid.push_str(&format!("{:03x}", cc));

    // Fourth field: variant nibble fixed to 9, then the low nibble of
    // byte 7 and all of byte 8.
    guid.push_str("-9");
    let cc = ((b(7) & 0x0f) << 8) | b(8);
    guid.push_str(&format!("{:03x}", cc));

    // Last field: 12 hex digits from bytes 9..15.
    guid.push('-');
    for i in 9..15 {
        guid.push_str(&format!("{:02x}", b(i)));
    }

    guid
}

/// Make a string safe for a ProjectId field.
///
/// The comma separates fields inside the attribute, and Gerber files
/// accept only printable ASCII; anything else becomes an underscore.
pub fn sanitize_identity_field(text: &str) -> String {
    text.chars()
        .map(|c| {
            if c == ',' || !(' '..='~').contains(&c) {
                '_'
            } else {
                c
            }
        })
        .collect()
}
