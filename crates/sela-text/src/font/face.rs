use std::sync::Arc;

use swash::FontRef;

use crate::font::{FontError, Result};

/// Font resource handed to the shaper.
///
/// The bytes are loaded and owned by the embedding application; this type
/// only shares them (`Arc`) and checks on construction that they parse as
/// a font face at `index`.
#[derive(Debug, Clone)]
pub struct FontFace {
    data: Arc<[u8]>,
    index: u32,
}

impl FontFace {
    /// Wrap raw bytes and a face index within the file (for collections).
    pub fn from_bytes(data: Arc<[u8]>, index: u32) -> Result<Self> {
        FontRef::from_index(&data, index as usize).ok_or(FontError::InvalidFont)?;
        Ok(Self { data, index })
    }

    pub fn from_vec(data: Vec<u8>, index: u32) -> Result<Self> {
        Self::from_bytes(Arc::from(data), index)
    }

    /// Convenience for hosts that keep fonts on disk.
    pub fn from_path(path: impl AsRef<std::path::Path>, index: u32) -> Result<Self> {
        let data = std::fs::read(path)?;
        Self::from_vec(data, index)
    }

    /// Raw font bytes, shared with the shaping engine.
    pub fn as_bytes(&self) -> Arc<[u8]> {
        self.data.clone()
    }

    pub fn index(&self) -> u32 {
        self.index
    }
}
