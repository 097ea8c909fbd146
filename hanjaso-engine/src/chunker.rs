//! Codepoint chunking at syllable boundaries
//!
//! A cut is only placed where the segmenter would start a new syllable
//! candidate anyway, so converting chunks independently gives the same
//! result as converting the whole sequence.

use crate::{
    config::ChunkPolicy,
    error::{EngineError, Result},
};
use hanjaso_core::{is_syllable_boundary, Codepoint};
use std::ops::Range;
use tracing::trace;

/// Splits codepoint sequences according to a policy
#[derive(Debug)]
pub struct ChunkManager {
    policy: ChunkPolicy,
}

impl ChunkManager {
    /// Create a new chunk manager
    pub fn new(policy: ChunkPolicy) -> Self {
        Self { policy }
    }

    /// Chunk a sequence, returning index ranges that cover it in order
    pub fn chunk(&self, seq: &[Codepoint]) -> Result<Vec<Range<usize>>> {
        match self.policy {
            ChunkPolicy::Fixed { size } => self.chunk_fixed(seq, size),
            ChunkPolicy::Auto { target_chars } => self.chunk_auto(seq, target_chars),
        }
    }

    fn chunk_fixed(&self, seq: &[Codepoint], size: usize) -> Result<Vec<Range<usize>>> {
        if size == 0 && !seq.is_empty() {
            return Err(EngineError::InvalidChunkBoundary { position: 0 });
        }

        let mut chunks = Vec::new();
        let mut start = 0;

        while start < seq.len() {
            let end = next_cut(seq, start.saturating_add(size));
            trace!(start, end, "chunk");
            chunks.push(start..end);
            start = end;
        }

        Ok(chunks)
    }

    fn chunk_auto(&self, seq: &[Codepoint], target_chars: usize) -> Result<Vec<Range<usize>>> {
        let chunk_count = seq.len().div_ceil(target_chars.max(1)).max(1);
        let chunk_size = seq.len() / chunk_count;

        self.chunk_fixed(seq, chunk_size.max(1))
    }
}

/// First syllable boundary at or after `from`, or the sequence end
fn next_cut(seq: &[Codepoint], from: usize) -> usize {
    let mut pos = from.max(1);
    while pos < seq.len() && !is_syllable_boundary(seq[pos - 1], seq[pos]) {
        pos += 1;
    }
    pos.min(seq.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jaso(text: &str) -> Vec<Codepoint> {
        hanjaso_core::syllables_to_jaso(&text.chars().map(u32::from).collect::<Vec<_>>())
    }

    #[test]
    fn test_chunks_cover_sequence() {
        let seq = jaso("한글 자모를 음절로 바꿉니다");
        let chunks = ChunkManager::new(ChunkPolicy::Fixed { size: 4 })
            .chunk(&seq)
            .unwrap();

        assert_eq!(chunks.first().map(|r| r.start), Some(0));
        assert_eq!(chunks.last().map(|r| r.end), Some(seq.len()));
        for pair in chunks.windows(2) {
            assert_eq!(pair[0].end, pair[1].start);
        }
    }

    #[test]
    fn test_cuts_fall_on_boundaries() {
        let seq = jaso("닭갈비 뷁");
        let chunks = ChunkManager::new(ChunkPolicy::Fixed { size: 2 })
            .chunk(&seq)
            .unwrap();

        for range in chunks.iter().skip(1) {
            assert!(is_syllable_boundary(seq[range.start - 1], seq[range.start]));
        }
    }

    #[test]
    fn test_run_without_boundary_stays_whole() {
        let seq = vec![0x1100; 10];
        let chunks = ChunkManager::new(ChunkPolicy::Fixed { size: 3 })
            .chunk(&seq)
            .unwrap();
        assert_eq!(chunks, vec![0..10]);
    }

    #[test]
    fn test_auto_policy() {
        let seq: Vec<Codepoint> = (0..100).map(|_| 0x20).collect();
        let chunks = ChunkManager::new(ChunkPolicy::Auto { target_chars: 30 })
            .chunk(&seq)
            .unwrap();
        assert_eq!(chunks.len(), 4);
        assert!(chunks.iter().all(|r| r.len() <= 30));
    }

    #[test]
    fn test_empty_and_zero_size() {
        let manager = ChunkManager::new(ChunkPolicy::Fixed { size: 0 });
        assert!(manager.chunk(&[]).unwrap().is_empty());
        assert!(matches!(
            manager.chunk(&[0x20]),
            Err(EngineError::InvalidChunkBoundary { position: 0 })
        ));
    }
}
