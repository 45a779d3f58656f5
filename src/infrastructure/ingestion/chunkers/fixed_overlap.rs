//! Fixed-size chunking with overlap and separator-aware cuts

use std::ops::Range;

use crate::domain::ingestion::{chunker::helpers, ChunkingConfig, ChunkingStrategy};
use crate::domain::DomainError;

/// Chunking strategy that walks the text in fixed-size windows
///
/// Each window is cut right after the last occurrence of the highest
/// priority separator it contains, falling back to a hard cut at the window
/// size. Consecutive windows overlap by up to `chunk_overlap` characters.
#[derive(Debug, Clone, Default)]
pub struct FixedOverlapChunker;

impl FixedOverlapChunker {
    /// Create a new fixed-overlap chunker
    pub fn new() -> Self {
        Self
    }

    /// Character ranges of every window over already-trimmed text.
    ///
    /// Ranges are in order, start at 0, end at the text length, and each one
    /// starts no later than the previous one ended.
    pub(crate) fn window_ranges(text: &str, config: &ChunkingConfig) -> Vec<Range<usize>> {
        let offsets: Vec<usize> = text
            .char_indices()
            .map(|(i, _)| i)
            .chain(std::iter::once(text.len()))
            .collect();
        let total = offsets.len() - 1;
        let size = config.chunk_size;
        let overlap = config.chunk_overlap;

        let mut ranges = Vec::new();
        let mut start = 0;

        while start < total {
            let end = start + size;

            if end >= total {
                ranges.push(start..total);
                break;
            }

            let segment = &text[offsets[start]..offsets[end]];

            match Self::find_cut(segment, &config.separators) {
                Some(cut_bytes) => {
                    let absolute = offsets[start] + cut_bytes;
                    let cut = offsets.partition_point(|&offset| offset < absolute);

                    ranges.push(start..cut);
                    start = Self::next_start(start, cut, overlap);
                }
                None => {
                    ranges.push(start..end);
                    start = end - overlap;
                }
            }
        }

        ranges
    }

    /// Byte offset just past the last match of the first separator found
    fn find_cut(segment: &str, separators: &[String]) -> Option<usize> {
        separators
            .iter()
            .filter(|sep| !sep.is_empty())
            .find_map(|sep| segment.rfind(sep.as_str()).map(|pos| pos + sep.len()))
    }

    fn next_start(start: usize, cut: usize, overlap: usize) -> usize {
        let mut next = cut.saturating_sub(overlap);

        if overlap > 0 && next > 0 {
            next = next.min(cut - 1);
        }

        // A cut close to the window start would send the walk backwards
        if next <= start { cut } else { next }
    }
}

impl ChunkingStrategy for FixedOverlapChunker {
    fn chunk(&self, content: &str, config: &ChunkingConfig) -> Result<Vec<String>, DomainError> {
        config.validate()?;

        if let Some(chunks) = helpers::trivial_chunks(content, config.chunk_size) {
            return Ok(chunks);
        }

        let text = content.trim();
        let offsets: Vec<usize> = text
            .char_indices()
            .map(|(i, _)| i)
            .chain(std::iter::once(text.len()))
            .collect();

        let chunks = Self::window_ranges(text, config)
            .into_iter()
            .map(|range| text[offsets[range.start]..offsets[range.end]].trim())
            .filter(|chunk| !chunk.is_empty())
            .map(str::to_string)
            .collect();

        Ok(chunks)
    }

    fn name(&self) -> &'static str {
        "fixed_overlap"
    }
}
