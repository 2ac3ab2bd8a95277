//! Validated nucleotide sequences.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::errors::AlignError;

/// Symbols accepted in a [`DnaSequence`], after case normalization.
pub const DNA_ALPHABET: &[u8] = b"ACGT";

/// An immutable DNA sequence restricted to the uppercase alphabet A, C, G, T.
///
/// Input is case-insensitive; symbols are normalized to uppercase when the sequence is
/// constructed, so the aligner only ever compares uppercase bytes. Empty sequences are valid.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DnaSequence {
    name: Option<String>,
    bases: Vec<u8>,
}

impl DnaSequence {
    pub fn new(bases: impl AsRef<[u8]>) -> Result<Self, AlignError> {
        let bases = bases.as_ref().to_ascii_uppercase();

        if let Some(position) = bases.iter().position(|b| !DNA_ALPHABET.contains(b)) {
            return Err(AlignError::InvalidSymbol {
                symbol: char::from(bases[position]),
                position,
            });
        }

        Ok(Self { name: None, bases })
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bases
    }

    pub fn len(&self) -> usize {
        self.bases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bases.is_empty()
    }
}

impl AsRef<[u8]> for DnaSequence {
    fn as_ref(&self) -> &[u8] {
        &self.bases
    }
}

impl FromStr for DnaSequence {
    type Err = AlignError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s.trim())
    }
}

impl Display for DnaSequence {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        // Only A, C, G and T can be stored, so every byte is a valid char
        for &b in &self.bases {
            write!(f, "{}", char::from(b))?;
        }

        Ok(())
    }
}
