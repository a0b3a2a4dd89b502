//! Per-player bounded undo history.
//!
//! [`UndoService`] owns one ordered history of [`UndoAction`]s per player:
//! append at the tail, pop from the tail (the most recent build is undone
//! first), evict from the head once the capacity is exceeded. An instance is
//! injected wherever it is needed; there is no process-global state.

use std::collections::{HashMap, VecDeque};
use std::time::SystemTime;

use crate::generator::CaptureMap;
use crate::world::VoxelGrid;

/// Default bound on per-player history length.
pub const DEFAULT_UNDO_CAPACITY: usize = 10;

/// Stable identity of the player a history belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlayerId(pub u64);

/// One recorded build: the capture map plus when it was recorded.
#[derive(Debug, Clone)]
pub struct UndoAction {
    states: CaptureMap,
    recorded_at: SystemTime,
}

impl UndoAction {
    pub fn recorded_at(&self) -> SystemTime {
        self.recorded_at
    }

    pub fn voxel_count(&self) -> usize {
        self.states.len()
    }

    /// Write every captured prior state back to the grid. Position order is
    /// irrelevant; each position is restored independently.
    fn restore<G: VoxelGrid + ?Sized>(&self, grid: &mut G) {
        for (pos, block) in &self.states {
            grid.write_voxel(*pos, *block);
        }
    }
}

#[derive(Debug)]
pub struct UndoService {
    capacity: usize,
    histories: HashMap<PlayerId, VecDeque<UndoAction>>,
}

impl Default for UndoService {
    fn default() -> Self {
        Self::new(DEFAULT_UNDO_CAPACITY)
    }
}

impl UndoService {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            histories: HashMap::new(),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Append a build's capture map to the player's history, evicting the
    /// oldest entry if the history is full. Never fails.
    pub fn record_action(&mut self, player: PlayerId, states: CaptureMap) {
        let history = self.histories.entry(player).or_default();
        history.push_back(UndoAction {
            states,
            recorded_at: SystemTime::now(),
        });
        while history.len() > self.capacity {
            history.pop_front();
        }
    }

    /// Reverse the player's most recent recorded build against `grid`.
    /// Returns `false` (and changes nothing) when there is nothing to undo.
    pub fn undo<G: VoxelGrid + ?Sized>(&mut self, player: PlayerId, grid: &mut G) -> bool {
        let Some(history) = self.histories.get_mut(&player) else {
            return false;
        };
        let Some(action) = history.pop_back() else {
            return false;
        };
        action.restore(grid);
        true
    }

    pub fn can_undo(&self, player: PlayerId) -> bool {
        self.histories
            .get(&player)
            .is_some_and(|history| !history.is_empty())
    }

    pub fn history_len(&self, player: PlayerId) -> usize {
        self.histories.get(&player).map_or(0, VecDeque::len)
    }

    /// Drop the player's entire history.
    pub fn clear_history(&mut self, player: PlayerId) {
        self.histories.remove(&player);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::Block;
    use crate::world::{VoxelCoord, VoxelWorld};

    /// Capture map restoring a single marker block at x = `index`.
    fn marker_capture(index: i32) -> CaptureMap {
        let mut states = CaptureMap::new();
        states.insert(VoxelCoord::new(index, 0, 0), Block::Stone);
        states
    }

    #[test]
    fn undo_on_empty_history_is_a_no_op() {
        let mut service = UndoService::default();
        let mut world = VoxelWorld::new();
        assert!(!service.undo(PlayerId(1), &mut world));
        assert!(!service.can_undo(PlayerId(1)));
        assert_eq!(world.occupied_count(), 0);
    }

    #[test]
    fn undo_pops_most_recent_first() {
        let mut service = UndoService::default();
        let player = PlayerId(1);
        service.record_action(player, marker_capture(0));
        service.record_action(player, marker_capture(1));

        let mut world = VoxelWorld::new();
        assert!(service.undo(player, &mut world));
        // The second action restored its marker; the first has not run yet.
        assert_eq!(world.read_voxel(VoxelCoord::new(1, 0, 0)), Block::Stone);
        assert_eq!(world.read_voxel(VoxelCoord::new(0, 0, 0)), Block::Air);
    }

    #[test]
    fn capacity_bound_evicts_the_oldest_action() {
        let mut service = UndoService::default();
        let player = PlayerId(7);
        for i in 0..11 {
            service.record_action(player, marker_capture(i));
        }
        assert_eq!(service.history_len(player), 10);

        // Drain the full history: actions 10 down to 1 restore their
        // markers; action 0 was evicted and never restores.
        let mut world = VoxelWorld::new();
        let mut undone = 0;
        while service.undo(player, &mut world) {
            undone += 1;
        }
        assert_eq!(undone, 10);
        assert!(!service.can_undo(player));
        assert!(!service.undo(player, &mut world));
        assert_eq!(world.read_voxel(VoxelCoord::new(1, 0, 0)), Block::Stone);
        assert_eq!(world.read_voxel(VoxelCoord::new(0, 0, 0)), Block::Air);
    }

    #[test]
    fn histories_are_isolated_per_player() {
        let mut service = UndoService::default();
        service.record_action(PlayerId(1), marker_capture(0));

        assert!(service.can_undo(PlayerId(1)));
        assert!(!service.can_undo(PlayerId(2)));

        let mut world = VoxelWorld::new();
        assert!(!service.undo(PlayerId(2), &mut world));
        assert!(service.can_undo(PlayerId(1)));
    }

    #[test]
    fn clear_history_drops_everything_at_once() {
        let mut service = UndoService::new(5);
        let player = PlayerId(3);
        for i in 0..3 {
            service.record_action(player, marker_capture(i));
        }
        service.clear_history(player);
        assert!(!service.can_undo(player));
        assert_eq!(service.history_len(player), 0);
    }

    #[test]
    fn constructor_capacity_is_honored() {
        let mut service = UndoService::new(2);
        let player = PlayerId(9);
        for i in 0..4 {
            service.record_action(player, marker_capture(i));
        }
        assert_eq!(service.history_len(player), 2);
    }
}
