use crate::{
    MorrisCoord, MorrisInvalidMoveError, MorrisInvalidPlaceError, MorrisInvalidSelectError,
    MorrisPlayer, MorrisRing, NODE_COUNT, RING_COUNT,
};

/// An occupancy marker owned by one player. Pieces are created on placement
/// and detached on removal, never reused; ids are issued by the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MorrisPiece {
    pub id: usize,
    pub player: MorrisPlayer,
}

impl MorrisPiece {
    pub fn new(id: usize, player: MorrisPlayer) -> Self {
        MorrisPiece { id, player }
    }
}

/// One position of the board graph: at most one occupant, plus the handles
/// of its neighbors. The occupant lives in the node itself, so the piece and
/// position links cannot go out of sync.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MorrisNode {
    pub coord: MorrisCoord,
    occupant: Option<MorrisPiece>,
    neighbors: Vec<MorrisCoord>,
}

impl MorrisNode {
    fn new(coord: MorrisCoord) -> Self {
        MorrisNode {
            coord,
            occupant: None,
            neighbors: Vec::new(),
        }
    }

    pub fn occupant(&self) -> Option<&MorrisPiece> {
        self.occupant.as_ref()
    }

    pub fn neighbors(&self) -> &[MorrisCoord] {
        &self.neighbors
    }

    pub fn is_empty(&self) -> bool {
        self.occupant.is_none()
    }
}

/// The full 24-position board: three rings over a flat node arena, the
/// adjacency graph between them, and the set of currently recorded mill
/// triples. A recorded triple suppresses re-triggering while the mill stands;
/// it is cleared as soon as one of its positions is vacated, which makes a
/// broken and reformed mill score again.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MorrisBoard {
    rings: [MorrisRing; RING_COUNT],
    nodes: Vec<MorrisNode>,
    mills: Vec<[MorrisCoord; 3]>,
    id_counter: usize,
}

impl MorrisBoard {
    /// Builds the board graph once: every ring wires its own eight intra-ring
    /// edges, then the board wires the four radial spokes between each pair
    /// of adjacent rings. Panics if the resulting graph is malformed; that is
    /// a construction defect, not a player error.
    pub fn new() -> Self {
        let mut board = MorrisBoard {
            rings: MorrisRing::all(),
            nodes: MorrisCoord::iter_board().map(MorrisNode::new).collect(),
            mills: Vec::new(),
            id_counter: 0,
        };
        for ring in board.rings {
            for (a, b) in ring.edges() {
                board.add_edge(a, b);
            }
        }
        for outer in 0..RING_COUNT - 1 {
            for index in MorrisRing::MID_EDGES {
                board.add_edge(
                    MorrisCoord::new(outer, index),
                    MorrisCoord::new(outer + 1, index),
                );
            }
        }
        board.assert_well_formed();
        board
    }

    /// Registers one undirected edge on both endpoints.
    fn add_edge(&mut self, a: MorrisCoord, b: MorrisCoord) {
        assert!(a.is_valid() && b.is_valid() && a != b, "bad edge {}-{}", a, b);
        let node_a = a.get_mut(&mut self.nodes);
        assert!(!node_a.neighbors.contains(&b), "duplicate edge {}-{}", a, b);
        node_a.neighbors.push(b);
        b.get_mut(&mut self.nodes).neighbors.push(a);
    }

    fn assert_well_formed(&self) {
        assert_eq!(self.nodes.len(), NODE_COUNT);
        for node in &self.nodes {
            let expected_degree = if node.coord.is_corner() {
                2
            } else if node.coord.ring == 1 {
                4
            } else {
                3
            };
            assert_eq!(
                node.neighbors.len(),
                expected_degree,
                "degree mismatch at {}",
                node.coord
            );
            for neighbor in &node.neighbors {
                assert!(
                    neighbor.get(&self.nodes).neighbors.contains(&node.coord),
                    "asymmetric edge {}-{}",
                    node.coord,
                    neighbor
                );
            }
        }
    }

    pub fn rings(&self) -> &[MorrisRing; RING_COUNT] {
        &self.rings
    }

    pub fn node(&self, pos: MorrisCoord) -> Option<&MorrisNode> {
        pos.try_get(&self.nodes)
    }

    pub fn occupant(&self, pos: MorrisCoord) -> Option<&MorrisPiece> {
        pos.try_get(&self.nodes)?.occupant.as_ref()
    }

    pub fn neighbors(&self, pos: MorrisCoord) -> &[MorrisCoord] {
        pos.try_get(&self.nodes)
            .map(|node| node.neighbors.as_slice())
            .unwrap_or(&[])
    }

    pub fn is_empty(&self, pos: MorrisCoord) -> bool {
        pos.try_get(&self.nodes)
            .is_some_and(|node| node.occupant.is_none())
    }

    /// Checks if a piece can be placed at the given position.
    pub fn can_place(&self, pos: MorrisCoord) -> Result<(), MorrisInvalidPlaceError> {
        match pos.try_get(&self.nodes) {
            Some(node) if node.occupant.is_none() => Ok(()),
            Some(_) => Err(MorrisInvalidPlaceError::PositionOccupied),
            None => Err(MorrisInvalidPlaceError::InvalidPosition),
        }
    }

    /// Places a new piece without checking the placement. Using this with an
    /// occupied or invalid position corrupts the board state or panics.
    pub fn place_unchecked(&mut self, pos: MorrisCoord, player: MorrisPlayer) {
        let piece = MorrisPiece::new(self.id_counter, player);
        self.id_counter += 1;
        pos.get_mut(&mut self.nodes).occupant = Some(piece);
    }

    pub fn try_place(
        &mut self,
        pos: MorrisCoord,
        player: MorrisPlayer,
    ) -> Result<(), MorrisInvalidPlaceError> {
        self.can_place(pos)?;
        self.place_unchecked(pos, player);
        Ok(())
    }

    /// Checks if the piece on `from` can slide to `to`.
    pub fn can_move(
        &self,
        from: MorrisCoord,
        to: MorrisCoord,
    ) -> Result<(), MorrisInvalidMoveError> {
        let to_node = to
            .try_get(&self.nodes)
            .ok_or(MorrisInvalidMoveError::InvalidPosition)?;
        if to_node.occupant.is_some() {
            return Err(MorrisInvalidMoveError::PositionOccupied);
        }
        let from_node = from
            .try_get(&self.nodes)
            .ok_or(MorrisInvalidMoveError::InvalidPosition)?;
        if from_node.occupant.is_none() {
            return Err(MorrisInvalidMoveError::PositionEmpty);
        }
        if !from_node.neighbors.contains(&to) {
            return Err(MorrisInvalidMoveError::NotAdjacent);
        }
        Ok(())
    }

    /// Relocates the piece on `from` to `to` without checking the move, and
    /// clears every recorded mill through the vacated position.
    pub fn move_unchecked(&mut self, from: MorrisCoord, to: MorrisCoord) {
        self.clear_mills_through(from);
        let piece = from
            .get_mut(&mut self.nodes)
            .occupant
            .take()
            .expect("source position should be occupied");
        to.get_mut(&mut self.nodes).occupant = Some(piece);
    }

    pub fn try_move(
        &mut self,
        from: MorrisCoord,
        to: MorrisCoord,
    ) -> Result<(), MorrisInvalidMoveError> {
        self.can_move(from, to)?;
        self.move_unchecked(from, to);
        Ok(())
    }

    /// Detaches and returns the piece on `pos`, clearing every recorded mill
    /// through the vacated position. Panics if the position is empty.
    pub fn remove_unchecked(&mut self, pos: MorrisCoord) -> MorrisPiece {
        self.clear_mills_through(pos);
        pos.get_mut(&mut self.nodes)
            .occupant
            .take()
            .expect("position should be occupied")
    }

    /// A piece may be selected for moving iff it belongs to the player and
    /// has at least one empty neighbor.
    pub fn can_select(
        &self,
        pos: MorrisCoord,
        player: MorrisPlayer,
    ) -> Result<(), MorrisInvalidSelectError> {
        let node = pos
            .try_get(&self.nodes)
            .ok_or(MorrisInvalidSelectError::InvalidPosition)?;
        let piece = node
            .occupant
            .as_ref()
            .ok_or(MorrisInvalidSelectError::PositionEmpty)?;
        if piece.player != player {
            return Err(MorrisInvalidSelectError::NotOwnPiece);
        }
        if !self.has_empty_neighbor(pos) {
            return Err(MorrisInvalidSelectError::NoEmptyNeighbor);
        }
        Ok(())
    }

    pub fn has_empty_neighbor(&self, pos: MorrisCoord) -> bool {
        self.neighbors(pos)
            .iter()
            .any(|&neighbor| self.is_empty(neighbor))
    }

    /// True iff the player owns at least one piece with an empty neighbor.
    pub fn player_can_move(&self, player: MorrisPlayer) -> bool {
        self.iter_pieces(Some(player))
            .any(|(pos, _)| self.has_empty_neighbor(pos))
    }

    /// Iterates the occupied positions, optionally restricted to one player.
    pub fn iter_pieces(
        &self,
        player: Option<MorrisPlayer>,
    ) -> impl Iterator<Item = (MorrisCoord, &MorrisPiece)> {
        self.nodes.iter().filter_map(move |node| {
            let piece = node.occupant.as_ref()?;
            if player.is_none_or(|p| piece.player == p) {
                Some((node.coord, piece))
            } else {
                None
            }
        })
    }

    pub fn iter_empty(&self) -> impl Iterator<Item = MorrisCoord> {
        self.nodes
            .iter()
            .filter(|node| node.occupant.is_none())
            .map(|node| node.coord)
    }

    pub fn count_pieces(&self, player: MorrisPlayer) -> usize {
        self.iter_pieces(Some(player)).count()
    }

    pub fn recorded_mills(&self) -> &[[MorrisCoord; 3]] {
        &self.mills
    }

    /// Records the triple and reports a new mill iff all three positions are
    /// occupied by the same player and the triple is not already recorded.
    /// A standing, unchanged mill is a no-op.
    pub fn check_line(&mut self, line: [MorrisCoord; 3]) -> bool {
        if line_owner(&self.nodes, &line).is_none() {
            return false;
        }
        if self.mills.contains(&line) {
            return false;
        }
        self.mills.push(line);
        true
    }

    /// Evaluates all four intra-ring lines of one ring. Every line is checked
    /// so that simultaneous mills are each recorded in a single pass.
    pub fn check_ring_mills(&mut self, ring: usize) -> bool {
        let lines = self.rings[ring].mill_lines();
        let mut formed = false;
        for line in lines {
            formed |= self.check_line(line);
        }
        formed
    }

    /// Evaluates the four spoke lines crossing all three rings.
    pub fn check_spoke_mills(&mut self) -> bool {
        let mut formed = false;
        for index in MorrisRing::MID_EDGES {
            formed |= self.check_line(MorrisRing::spoke_line(index));
        }
        formed
    }

    /// Purges stale triples, then evaluates every mill line on the board.
    /// True iff at least one new mill formed. Called after every completed
    /// placement or move.
    pub fn check_new_mills(&mut self) -> bool {
        self.purge_broken_mills();
        let mut formed = false;
        for ring in 0..RING_COUNT {
            formed |= self.check_ring_mills(ring);
        }
        formed |= self.check_spoke_mills();
        formed
    }

    /// Drops recorded triples whose occupancy or ownership changed.
    pub fn purge_broken_mills(&mut self) {
        let nodes = &self.nodes;
        self.mills.retain(|line| line_owner(nodes, line).is_some());
    }

    /// Drops every recorded triple containing the given position.
    pub fn clear_mills_through(&mut self, pos: MorrisCoord) {
        self.mills.retain(|line| !line.contains(&pos));
    }

    /// Discovers if the board state is inconsistent or invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.nodes.len() != NODE_COUNT {
            return Err(format!(
                "node count mismatch: expected {}, got {}",
                NODE_COUNT,
                self.nodes.len()
            ));
        }
        let mut id_set = std::collections::HashSet::new();
        for node in &self.nodes {
            if node.coord.get(&self.nodes).coord != node.coord {
                return Err(format!("arena order broken at {}", node.coord));
            }
            for neighbor in &node.neighbors {
                if !neighbor.get(&self.nodes).neighbors.contains(&node.coord) {
                    return Err(format!("asymmetric edge {}-{}", node.coord, neighbor));
                }
            }
            if let Some(piece) = &node.occupant {
                if !id_set.insert(piece.id) {
                    return Err(format!("duplicate piece id {}", piece.id));
                }
                if piece.id >= self.id_counter {
                    return Err(format!(
                        "piece id {} not below id counter {}",
                        piece.id, self.id_counter
                    ));
                }
            }
        }
        for line in &self.mills {
            if line_owner(&self.nodes, line).is_none() {
                return Err(format!(
                    "recorded mill {}-{}-{} is not uniformly occupied",
                    line[0], line[1], line[2]
                ));
            }
        }
        Ok(())
    }
}

impl Default for MorrisBoard {
    fn default() -> Self {
        Self::new()
    }
}

/// The player occupying the whole line, if any.
fn line_owner(nodes: &[MorrisNode], line: &[MorrisCoord; 3]) -> Option<MorrisPlayer> {
    let first = line[0].try_get(nodes)?.occupant.as_ref()?.player;
    for pos in &line[1..] {
        if pos.try_get(nodes)?.occupant.as_ref()?.player != first {
            return None;
        }
    }
    Some(first)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RING_SIZE;

    fn coord(ring: usize, index: usize) -> MorrisCoord {
        MorrisCoord::new(ring, index)
    }

    #[test]
    fn test_board_has_expected_degrees() {
        let board = MorrisBoard::new();
        let mut degree_counts = [0usize; 5];
        for pos in MorrisCoord::iter_board() {
            degree_counts[board.neighbors(pos).len()] += 1;
        }
        // 12 corners of degree 2, 8 outer/inner mid-edges of degree 3,
        // 4 middle-ring mid-edges of degree 4.
        assert_eq!(degree_counts, [0, 0, 12, 8, 4]);
    }

    #[test]
    fn test_adjacency_is_symmetric() {
        let board = MorrisBoard::new();
        for pos in MorrisCoord::iter_board() {
            for &neighbor in board.neighbors(pos) {
                assert!(
                    board.neighbors(neighbor).contains(&pos),
                    "{} -> {} has no reverse edge",
                    pos,
                    neighbor
                );
            }
        }
    }

    #[test]
    fn test_spokes_link_mid_edges_only() {
        let board = MorrisBoard::new();
        for ring in 0..RING_COUNT {
            for index in 0..RING_SIZE {
                let pos = coord(ring, index);
                let cross_ring = board
                    .neighbors(pos)
                    .iter()
                    .filter(|n| n.ring != ring)
                    .count();
                if pos.is_corner() {
                    assert_eq!(cross_ring, 0);
                } else if ring == 1 {
                    assert_eq!(cross_ring, 2);
                } else {
                    assert_eq!(cross_ring, 1);
                }
            }
        }
    }

    #[test]
    fn test_place_and_remove_keep_occupancy_consistent() {
        let mut board = MorrisBoard::new();
        let pos = coord(0, 0);
        assert!(board.can_place(pos).is_ok());
        board.place_unchecked(pos, MorrisPlayer::White);
        assert_eq!(
            board.can_place(pos),
            Err(MorrisInvalidPlaceError::PositionOccupied)
        );
        let piece = board.remove_unchecked(pos);
        assert_eq!(piece.player, MorrisPlayer::White);
        assert!(board.can_place(pos).is_ok());
        assert_eq!(
            board.can_place(coord(3, 0)),
            Err(MorrisInvalidPlaceError::InvalidPosition)
        );
    }

    #[test]
    fn test_can_move_requires_empty_adjacent_target() {
        let mut board = MorrisBoard::new();
        board.place_unchecked(coord(0, 0), MorrisPlayer::White);
        board.place_unchecked(coord(0, 1), MorrisPlayer::Black);
        assert!(board.can_move(coord(0, 0), coord(0, 3)).is_ok());
        assert_eq!(
            board.can_move(coord(0, 0), coord(0, 1)),
            Err(MorrisInvalidMoveError::PositionOccupied)
        );
        assert_eq!(
            board.can_move(coord(0, 0), coord(0, 2)),
            Err(MorrisInvalidMoveError::NotAdjacent)
        );
        assert_eq!(
            board.can_move(coord(0, 3), coord(0, 5)),
            Err(MorrisInvalidMoveError::PositionEmpty)
        );
        assert_eq!(
            board.can_move(coord(0, 0), coord(5, 5)),
            Err(MorrisInvalidMoveError::InvalidPosition)
        );
    }

    #[test]
    fn test_check_line_does_not_retrigger_standing_mill() {
        let mut board = MorrisBoard::new();
        let line = [coord(0, 0), coord(0, 1), coord(0, 2)];
        for pos in line {
            board.place_unchecked(pos, MorrisPlayer::White);
        }
        assert!(board.check_line(line));
        assert!(!board.check_line(line));
        assert_eq!(board.recorded_mills().len(), 1);
    }

    #[test]
    fn test_check_line_rejects_mixed_and_partial_lines() {
        let mut board = MorrisBoard::new();
        let line = [coord(0, 0), coord(0, 1), coord(0, 2)];
        board.place_unchecked(coord(0, 0), MorrisPlayer::White);
        board.place_unchecked(coord(0, 1), MorrisPlayer::White);
        assert!(!board.check_line(line));
        board.place_unchecked(coord(0, 2), MorrisPlayer::Black);
        assert!(!board.check_line(line));
        assert!(board.recorded_mills().is_empty());
    }

    #[test]
    fn test_double_mill_records_both_lines() {
        let mut board = MorrisBoard::new();
        // o0 completes both [o0,o1,o2] and [o0,o3,o5] at once.
        for index in [1, 2, 3, 5, 0] {
            board.place_unchecked(coord(0, index), MorrisPlayer::White);
        }
        assert!(board.check_new_mills());
        assert_eq!(board.recorded_mills().len(), 2);
        assert!(!board.check_new_mills());
    }

    #[test]
    fn test_spoke_mill_detected() {
        let mut board = MorrisBoard::new();
        for ring in 0..RING_COUNT {
            board.place_unchecked(coord(ring, 4), MorrisPlayer::Black);
        }
        assert!(board.check_new_mills());
        assert_eq!(
            board.recorded_mills(),
            &[[coord(0, 4), coord(1, 4), coord(2, 4)]]
        );
    }

    #[test]
    fn test_broken_and_reformed_mill_scores_again() {
        let mut board = MorrisBoard::new();
        for index in [0, 1, 2] {
            board.place_unchecked(coord(0, index), MorrisPlayer::White);
        }
        assert!(board.check_new_mills());
        board.move_unchecked(coord(0, 1), coord(1, 1));
        assert!(board.recorded_mills().is_empty());
        assert!(!board.check_new_mills());
        board.move_unchecked(coord(1, 1), coord(0, 1));
        assert!(board.check_new_mills());
    }

    #[test]
    fn test_removal_purges_stale_mill() {
        let mut board = MorrisBoard::new();
        for index in [0, 1, 2] {
            board.place_unchecked(coord(0, index), MorrisPlayer::White);
        }
        assert!(board.check_new_mills());
        board.remove_unchecked(coord(0, 1));
        assert!(board.recorded_mills().is_empty());
        // Refilling the gap forms the mill anew.
        board.place_unchecked(coord(0, 1), MorrisPlayer::White);
        assert!(board.check_new_mills());
    }

    #[test]
    fn test_player_can_move_and_selection() {
        let mut board = MorrisBoard::new();
        // White corner boxed in by Black on both neighbors.
        board.place_unchecked(coord(0, 0), MorrisPlayer::White);
        board.place_unchecked(coord(0, 1), MorrisPlayer::Black);
        board.place_unchecked(coord(0, 3), MorrisPlayer::Black);
        assert_eq!(
            board.can_select(coord(0, 0), MorrisPlayer::White),
            Err(MorrisInvalidSelectError::NoEmptyNeighbor)
        );
        assert_eq!(
            board.can_select(coord(0, 1), MorrisPlayer::White),
            Err(MorrisInvalidSelectError::NotOwnPiece)
        );
        assert_eq!(
            board.can_select(coord(0, 2), MorrisPlayer::White),
            Err(MorrisInvalidSelectError::PositionEmpty)
        );
        assert!(!board.player_can_move(MorrisPlayer::White));
        assert!(board.player_can_move(MorrisPlayer::Black));
    }

    #[test]
    fn test_validate_fresh_board() {
        let board = MorrisBoard::new();
        assert!(board.validate().is_ok());
    }
}
