//! Directional input
//!
//! Key events only touch [`Controls`]. The simulation reads a
//! [`HeldDirections`] snapshot once at the start of each tick, so no input
//! ever lands mid-tick.

use glam::Vec2;

/// One of the four arena directions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Map a host key name (DOM `KeyboardEvent.key` style) to a direction
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowUp" | "w" | "W" => Some(Direction::Up),
            "ArrowDown" | "s" | "S" => Some(Direction::Down),
            "ArrowLeft" | "a" | "A" => Some(Direction::Left),
            "ArrowRight" | "d" | "D" => Some(Direction::Right),
            _ => None,
        }
    }
}

/// Directions held during a tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeldDirections {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl HeldDirections {
    pub fn is_held(&self, dir: Direction) -> bool {
        match dir {
            Direction::Up => self.up,
            Direction::Down => self.down,
            Direction::Left => self.left,
            Direction::Right => self.right,
        }
    }

    fn set(&mut self, dir: Direction, held: bool) {
        match dir {
            Direction::Up => self.up = held,
            Direction::Down => self.down = held,
            Direction::Left => self.left = held,
            Direction::Right => self.right = held,
        }
    }

    /// Per-axis unit step. Down beats Up and Right beats Left when both are held.
    pub fn axis(&self) -> Vec2 {
        let x = if self.right {
            1.0
        } else if self.left {
            -1.0
        } else {
            0.0
        };
        let y = if self.down {
            1.0
        } else if self.up {
            -1.0
        } else {
            0.0
        };
        Vec2::new(x, y)
    }
}

/// Pending input state written by key events between ticks
#[derive(Debug, Clone, Default)]
pub struct Controls {
    held: HeldDirections,
}

impl Controls {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn key_down(&mut self, dir: Direction) {
        self.held.set(dir, true);
    }

    pub fn key_up(&mut self, dir: Direction) {
        self.held.set(dir, false);
    }

    /// Route a raw host key event; unmapped keys are ignored
    pub fn handle_key(&mut self, key: &str, pressed: bool) -> bool {
        match Direction::from_key(key) {
            Some(dir) => {
                self.held.set(dir, pressed);
                true
            }
            None => false,
        }
    }

    /// Release everything (focus loss, session reset)
    pub fn release_all(&mut self) {
        self.held = HeldDirections::default();
    }

    /// State consumed by the next tick
    pub fn snapshot(&self) -> HeldDirections {
        self.held
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_from_subsets() {
        let mut controls = Controls::new();
        assert_eq!(controls.snapshot().axis(), Vec2::ZERO);

        controls.key_down(Direction::Up);
        controls.key_down(Direction::Left);
        assert_eq!(controls.snapshot().axis(), Vec2::new(-1.0, -1.0));

        controls.key_down(Direction::Down);
        controls.key_down(Direction::Right);
        assert_eq!(controls.snapshot().axis(), Vec2::new(1.0, 1.0));

        controls.key_up(Direction::Down);
        controls.key_up(Direction::Right);
        assert_eq!(controls.snapshot().axis(), Vec2::new(-1.0, -1.0));
    }

    #[test]
    fn test_host_keys() {
        let mut controls = Controls::new();
        assert!(controls.handle_key("ArrowDown", true));
        assert!(!controls.handle_key("Enter", true));
        assert!(controls.snapshot().is_held(Direction::Down));

        controls.release_all();
        assert_eq!(controls.snapshot(), HeldDirections::default());
    }
}
