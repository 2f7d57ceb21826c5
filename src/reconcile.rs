//! Overlaying per-generation patch files onto the shared base dataset.

use crate::errors::{PatchError, PatchResult};
use schema::{PatchOverlay, SpeciesPatch, SpeciesRecord};
use serde_json::Value;
use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use tracing::{debug, warn};

/// Applies `overlay` to `base` and returns the generation's dataset.
///
/// An empty overlay hands `base` back borrowed. Otherwise every entry whose key
/// parses to the dex number of an existing record replaces that record with its
/// patched copy; all other entries are ignored. Records are never added or
/// removed and `base` itself is never modified. The result is sorted by
/// `dex_no`.
pub fn reconcile<'a>(base: &'a [SpeciesRecord], overlay: &PatchOverlay) -> Cow<'a, [SpeciesRecord]> {
    if overlay.is_empty() {
        return Cow::Borrowed(base);
    }

    let mut by_dex: BTreeMap<u16, SpeciesRecord> =
        base.iter().map(|r| (r.dex_no, r.clone())).collect();

    for (key, patch) in overlay {
        let Some(dex_no) = parse_dex_key(key) else {
            debug!(key = %key, "ignoring patch entry with non-numeric key");
            continue;
        };
        match by_dex.get_mut(&dex_no) {
            Some(record) => *record = patch.apply_to(record),
            None => debug!(dex_no, "ignoring patch entry without a base record"),
        }
    }

    Cow::Owned(by_dex.into_values().collect())
}

/// Parses an overlay key as a dex number.
///
/// Any decimal spelling of an integral number in range is accepted, so `"25"`,
/// `" 25 "` and `"25.0"` all name species 25. Fractions, negatives, zero and
/// non-numeric keys yield `None`.
pub fn parse_dex_key(key: &str) -> Option<u16> {
    let value = key.trim().parse::<f64>().ok()?;
    if !value.is_finite() || value.fract() != 0.0 || value < 1.0 || value > f64::from(u16::MAX) {
        return None;
    }
    Some(value as u16)
}

/// Reads a patch file. A missing file is an empty overlay.
///
/// The file must be a JSON object. Entries are decoded one at a time, and an
/// entry with mistyped fields is dropped with a warning while its siblings are
/// kept.
pub fn read_overlay(path: &Path) -> PatchResult<PatchOverlay> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(err) if err.kind() == ErrorKind::NotFound => return Ok(PatchOverlay::new()),
        Err(source) => {
            return Err(PatchError::Read {
                path: path.to_path_buf(),
                source,
            })
        }
    };
    let entries: BTreeMap<String, Value> =
        serde_json::from_str(&raw).map_err(|source| PatchError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    let mut overlay = PatchOverlay::new();
    for (key, value) in entries {
        match serde_json::from_value::<SpeciesPatch>(value) {
            Ok(patch) => {
                overlay.insert(key, patch);
            }
            Err(err) => warn!(
                path = %path.display(),
                key = %key,
                error = %err,
                "skipping malformed patch entry"
            ),
        }
    }
    Ok(overlay)
}

/// Like [`read_overlay`], but an unreadable or malformed file degrades to an
/// empty overlay with a warning so the run can continue.
pub fn load_overlay(path: &Path) -> PatchOverlay {
    match read_overlay(path) {
        Ok(overlay) => {
            debug!(path = %path.display(), entries = overlay.len(), "loaded patch overlay");
            overlay
        }
        Err(err) => {
            warn!(error = %err, "treating patch file as empty");
            PatchOverlay::new()
        }
    }
}
