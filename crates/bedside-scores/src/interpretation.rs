//! Maps a numeric result to its interpretation band.

use crate::definition::Band;

/// Return the first band, in declaration order, whose closed interval
/// contains `value`.
///
/// `None` means the interpretation is undetermined: the value is still
/// valid, it just sits outside every band. NaN never matches.
pub fn resolve(value: f64, bands: &[Band]) -> Option<&Band> {
    bands.iter().find(|band| band.contains(value))
}
