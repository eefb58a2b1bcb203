use std::sync::Arc;

use harfrust::{
    Direction as HbDirection,
    FontRef as HbFontRef,
    Language as HbLanguage,
    Script as HbScript,
    ShaperData,
    ShaperInstance,
    Tag as HbTag,
    UnicodeBuffer as HbUnicodeBuffer,
};

use crate::EngineError;
use crate::font::FontFace;

use super::{Direction, GlyphShaper, Script, Segment};

impl From<Direction> for HbDirection {
    fn from(d: Direction) -> Self {
        match d {
            Direction::LeftToRight => HbDirection::LeftToRight,
            Direction::RightToLeft => HbDirection::RightToLeft,
        }
    }
}

impl Script {
    fn to_harfrust(self) -> Option<HbScript> {
        HbScript::from_iso15924_tag(HbTag::new(self.iso15924()))
    }
}

/// Per-font state, rebuilt whenever a new font is bound.
struct ShaperSession {
    font: Arc<[u8]>,
    index: u32,
    data: ShaperData,
    instance: ShaperInstance,
}

/// [`GlyphShaper`] backed by harfrust (pure-Rust HarfBuzz port).
///
/// The unicode buffer is allocated once and recycled across calls; the
/// font session is created by [`bind`](GlyphShaper::bind).
pub struct HarfrustShaper {
    buffer: Option<HbUnicodeBuffer>,
    session: Option<ShaperSession>,
}

impl HarfrustShaper {
    pub fn new() -> Self {
        Self {
            buffer: Some(HbUnicodeBuffer::new()),
            session: None,
        }
    }
}

impl Default for HarfrustShaper {
    fn default() -> Self {
        Self::new()
    }
}

impl GlyphShaper for HarfrustShaper {
    type Font = FontFace;

    fn bind(&mut self, font: &FontFace) -> Result<(), EngineError> {
        let bytes = font.as_bytes();
        let font_ref = HbFontRef::from_index(&bytes, font.index())
            .map_err(|e| EngineError::BindFailure(e.to_string()))?;
        let data = ShaperData::new(&font_ref);
        let instance =
            ShaperInstance::from_variations(&font_ref, core::iter::empty::<harfrust::Variation>());
        self.session = Some(ShaperSession {
            font: Arc::clone(&bytes),
            index: font.index(),
            data,
            instance,
        });
        log::debug!("harfrust session bound (face index {})", font.index());
        Ok(())
    }

    fn is_bound(&self) -> bool {
        self.session.is_some()
    }

    fn shape(&mut self, text: &[u32], segment: &Segment) -> Result<Vec<u32>, EngineError> {
        let session = self
            .session
            .as_ref()
            .ok_or_else(|| EngineError::Shape("no font bound".into()))?;
        let chars = text
            .iter()
            .map(|&u| char::from_u32(u).ok_or(EngineError::InvalidCodepoint(u)))
            .collect::<Result<Vec<char>, _>>()?;
        let font_ref = HbFontRef::from_index(&session.font, session.index)
            .map_err(|e| EngineError::Shape(e.to_string()))?;

        let mut buffer = self.buffer.take().ok_or(EngineError::AllocationFailure)?;
        buffer.clear();
        buffer.reserve(chars.len());
        for (i, ch) in chars.into_iter().enumerate() {
            buffer.add(ch, i as u32);
        }
        buffer.set_direction(segment.direction.into());
        if let Some(script) = segment.script.to_harfrust() {
            buffer.set_script(script);
        }
        if let Ok(language) = segment.language.parse::<HbLanguage>() {
            buffer.set_language(language);
        }
        // Only fills in what was not set explicitly above.
        buffer.guess_segment_properties();

        let shaper = session
            .data
            .shaper(&font_ref)
            .instance(Some(&session.instance))
            .point_size(None)
            .build();
        let glyph_buffer = shaper.shape(buffer, &[]);
        let glyphs: Vec<u32> = glyph_buffer
            .glyph_infos()
            .iter()
            .map(|info| info.glyph_id)
            .collect();
        self.buffer = Some(glyph_buffer.clear());
        Ok(glyphs)
    }
}
