//! Font candidate resolution.
//!
//! Text rendering tries an ordered list of font families and uses the first
//! one installed on the system, surfacing a single
//! [`FontUnavailable`](crate::Error::FontUnavailable) error only after every
//! candidate has been exhausted.

use pango::prelude::*;

use crate::error::{Error, Result};

/// Default candidate chain: the primary text font, then its free fallback.
pub const DEFAULT_CANDIDATES: [&str; 2] = ["Arial", "FreeSans"];

/// Returns the first candidate family installed in the pangocairo font map.
///
/// Family names match case-insensitively.
pub(crate) fn resolve(candidates: &[String]) -> Result<String> {
    let font_map = pangocairo::FontMap::default();
    let families = font_map.list_families();

    for candidate in candidates {
        if let Some(family) = families
            .iter()
            .find(|f| f.name().eq_ignore_ascii_case(candidate))
        {
            return Ok(family.name().to_string());
        }
    }

    log::debug!("no usable font among {candidates:?}");
    Err(Error::FontUnavailable {
        candidates: candidates.to_vec(),
    })
}
