//! Per-seat input flags, written asynchronously by connection tasks
//! and read exactly once per tick by the match loop.

/// Pressed/released flags for one player. Last write wins; there is
/// no debouncing or rate limiting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputFlags {
    pub up: bool,
    pub down: bool,
}

/// The two player-controlled sides of the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

/// Latest known flags for both sides. Shared behind a lock between the
/// connection tasks (writers) and the tick loop (reader), so the loop
/// copies the whole aggregator in one read.
#[derive(Debug, Clone, Copy, Default)]
pub struct InputAggregator {
    left: InputFlags,
    right: InputFlags,
}

impl InputAggregator {
    pub fn set(&mut self, side: Side, flags: InputFlags) {
        match side {
            Side::Left => self.left = flags,
            Side::Right => self.right = flags,
        }
    }

    /// Clears a side when its player disconnects, so a stale held key
    /// cannot keep the paddle moving.
    pub fn reset(&mut self, side: Side) {
        self.set(side, InputFlags::default());
    }

    pub fn flags(&self, side: Side) -> InputFlags {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_released() {
        let inputs = InputAggregator::default();
        assert_eq!(inputs.flags(Side::Left), InputFlags::default());
        assert_eq!(inputs.flags(Side::Right), InputFlags::default());
    }

    #[test]
    fn test_last_write_wins() {
        let mut inputs = InputAggregator::default();

        inputs.set(
            Side::Left,
            InputFlags {
                up: true,
                down: false,
            },
        );
        inputs.set(
            Side::Left,
            InputFlags {
                up: false,
                down: true,
            },
        );

        assert_eq!(
            inputs.flags(Side::Left),
            InputFlags {
                up: false,
                down: true
            }
        );
    }

    #[test]
    fn test_sides_are_independent() {
        let mut inputs = InputAggregator::default();

        inputs.set(
            Side::Right,
            InputFlags {
                up: true,
                down: false,
            },
        );

        assert_eq!(inputs.flags(Side::Left), InputFlags::default());
        assert!(inputs.flags(Side::Right).up);
    }

    #[test]
    fn test_reset_clears_flags() {
        let mut inputs = InputAggregator::default();
        inputs.set(Side::Right, InputFlags { up: true, down: true });

        inputs.reset(Side::Right);

        assert_eq!(inputs.flags(Side::Right), InputFlags::default());
    }
}
