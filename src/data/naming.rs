//! Image names encoded in match file names.
//!
//! A pair file `a_b` refers to `a.bmp` and `b.bmp`, a triplet file `a_b_c`
//! to `a.bmp`, `b.bmp` and `c.bmp`. Names are split at the first
//! underscore (and for triplets the first underscore of the remainder), so
//! image base names must not contain underscores themselves.

use crate::data::Arity;
use crate::error::ConfigError;

pub const IMAGE_EXTENSION: &str = "bmp";

pub fn derive_image_names(match_name: &str, arity: Arity) -> Result<Vec<String>, ConfigError> {
    let invalid = || ConfigError::InvalidMatchName {
        name: match_name.to_string(),
        expected: arity.points(),
    };

    let mut stems = Vec::with_capacity(arity.points());
    let mut rest = match_name;
    for _ in 1..arity.points() {
        let (stem, tail) = rest.split_once('_').ok_or_else(invalid)?;
        stems.push(stem);
        rest = tail;
    }
    stems.push(rest);

    if stems.iter().any(|stem| stem.is_empty()) {
        return Err(invalid());
    }

    Ok(stems
        .into_iter()
        .map(|stem| format!("{}.{}", stem, IMAGE_EXTENSION))
        .collect())
}
