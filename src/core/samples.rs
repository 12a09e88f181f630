//! Known checksum/plaintext pairs the search is scored against

use thiserror::Error;

/// Errors raised while preparing sample data.
#[derive(Debug, Error)]
pub enum SampleError {
    /// A label contains a character outside the single-byte ASCII range.
    #[error("label {label:?} contains non-ASCII character {character:?}")]
    NonAscii {
        /// The offending label.
        label: String,
        /// The first character that cannot be encoded as a single byte.
        character: char,
    },
}

/// A known (checksum, plaintext) pair.
///
/// The plaintext bytes are encoded once at construction so the sweep's inner
/// loop never touches the string form.
#[derive(Debug, Clone)]
pub struct KnownSample {
    /// The checksum the unknown algorithm is known to produce for `label`.
    pub check: u32,
    /// The plaintext label, exactly as it appears in the source data.
    pub label: String,
    /// ASCII encoding of `label`, one byte per character.
    pub bytes: Vec<u8>,
}

impl KnownSample {
    /// Create a sample, encoding the label as ASCII.
    ///
    /// Fails if any character falls outside the ASCII range; samples are
    /// fixed input data, so this is checked once at startup rather than per
    /// sweep iteration.
    pub fn new(check: u32, label: impl Into<String>) -> Result<Self, SampleError> {
        let label = label.into();
        if let Some(character) = label.chars().find(|c| !c.is_ascii()) {
            return Err(SampleError::NonAscii { label, character });
        }
        let bytes = label.as_bytes().to_vec();
        Ok(Self { check, label, bytes })
    }
}

/// The built-in reference set of known pairs.
///
/// Two labels are lowercased and two are not; that asymmetry is part of the
/// captured input data and is preserved verbatim.
pub fn reference_samples() -> Result<Vec<KnownSample>, SampleError> {
    Ok(vec![
        KnownSample::new(0x56B6_D12E, "stulootbox")?,
        KnownSample::new(0x6760_479E, "stuunlock")?,
        KnownSample::new(0xB48F_1D22, "m_name")?,
        KnownSample::new(0x3446_F580, "m_description")?,
    ])
}
