use crate::{MorrisCoord, RING_COUNT, RING_SIZE};

/// One square layer of the board. A ring owns no positions — the board keeps
/// the node arena — it only describes the fixed topology of its layer:
/// which intra-ring pairs are adjacent, which triples form mill lines, and
/// which indices carry the radial spoke edges to the neighboring rings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MorrisRing {
    ring: usize,
}

impl MorrisRing {
    /// Line endpoints of the layer.
    pub const CORNERS: [usize; 4] = [0, 2, 5, 7];
    /// Mid-edge indices; these participate in the cross-ring spoke lines.
    pub const MID_EDGES: [usize; 4] = [1, 3, 4, 6];
    /// The four mill lines within one ring.
    pub const LINES: [[usize; 3]; 4] = [[0, 1, 2], [0, 3, 5], [2, 4, 7], [5, 6, 7]];
    /// Intra-ring adjacency, one entry per undirected edge.
    pub const EDGES: [(usize, usize); 8] = [
        (0, 1),
        (1, 2),
        (0, 3),
        (2, 4),
        (3, 5),
        (4, 7),
        (5, 6),
        (6, 7),
    ];

    pub fn new(ring: usize) -> Self {
        assert!(ring < RING_COUNT, "ring index out of range: {}", ring);
        MorrisRing { ring }
    }

    pub fn all() -> [MorrisRing; RING_COUNT] {
        [MorrisRing::new(0), MorrisRing::new(1), MorrisRing::new(2)]
    }

    pub fn ring(&self) -> usize {
        self.ring
    }

    pub fn coord(&self, index: usize) -> MorrisCoord {
        MorrisCoord::new(self.ring, index)
    }

    pub fn coords(&self) -> impl Iterator<Item = MorrisCoord> {
        let ring = self.ring;
        (0..RING_SIZE).map(move |index| MorrisCoord::new(ring, index))
    }

    pub fn mill_lines(&self) -> [[MorrisCoord; 3]; 4] {
        Self::LINES.map(|line| line.map(|index| self.coord(index)))
    }

    pub fn edges(&self) -> [(MorrisCoord, MorrisCoord); 8] {
        Self::EDGES.map(|(a, b)| (self.coord(a), self.coord(b)))
    }

    /// The spoke line through all three rings at one mid-edge index.
    pub fn spoke_line(index: usize) -> [MorrisCoord; 3] {
        assert!(
            Self::MID_EDGES.contains(&index),
            "no spoke at index {}",
            index
        );
        [
            MorrisCoord::new(0, index),
            MorrisCoord::new(1, index),
            MorrisCoord::new(2, index),
        ]
    }
}
