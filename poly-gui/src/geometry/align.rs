//! Placing one rectangle inside another

use super::Rect;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum HorizontalAlignment {
    Left,
    #[default]
    Centre,
    Right,
    Stretch,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum VerticalAlignment {
    Top,
    #[default]
    Centre,
    Bottom,
    Stretch,
}

/// Position `source` inside `target` according to the alignments.
///
/// Only `Stretch` changes the extent; every other mode keeps `source`'s size.
/// Centring halves both extents with integer division. Edges saturate at
/// the `i32` bounds.
pub fn destination_rectangle(
    horizontal: HorizontalAlignment,
    vertical: VerticalAlignment,
    source: Rect,
    target: Rect,
) -> Rect {
    let mut result = Rect::new(0, 0, source.width, source.height);

    match horizontal {
        HorizontalAlignment::Left => result.x = target.x,
        HorizontalAlignment::Right => result.x = target.right().saturating_sub(source.width),
        HorizontalAlignment::Centre => {
            result.x = target.x.saturating_add(target.width / 2).saturating_sub(source.width / 2)
        }
        HorizontalAlignment::Stretch => {
            result.x = target.x;
            result.width = target.width;
        }
    }

    match vertical {
        VerticalAlignment::Top => result.y = target.y,
        VerticalAlignment::Bottom => result.y = target.bottom().saturating_sub(source.height),
        VerticalAlignment::Centre => {
            result.y = target.y.saturating_add(target.height / 2).saturating_sub(source.height / 2)
        }
        VerticalAlignment::Stretch => {
            result.y = target.y;
            result.height = target.height;
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    const TARGET: Rect = Rect::new(90, 45, 20, 10);
    const SOURCE: Rect = Rect::new(0, 0, 16, 12);

    #[test]
    fn test_centre_centre() {
        let r = destination_rectangle(
            HorizontalAlignment::Centre,
            VerticalAlignment::Centre,
            SOURCE,
            TARGET,
        );
        assert_eq!(r, Rect::new(92, 44, 16, 12));
    }

    #[test]
    fn test_left_top() {
        let r = destination_rectangle(
            HorizontalAlignment::Left,
            VerticalAlignment::Top,
            SOURCE,
            TARGET,
        );
        assert_eq!(r, Rect::new(90, 45, 16, 12));
    }

    #[test]
    fn test_right_bottom() {
        let r = destination_rectangle(
            HorizontalAlignment::Right,
            VerticalAlignment::Bottom,
            SOURCE,
            TARGET,
        );
        assert_eq!(r, Rect::new(94, 43, 16, 12));
    }

    #[test]
    fn test_stretch_takes_target_extent() {
        let r = destination_rectangle(
            HorizontalAlignment::Stretch,
            VerticalAlignment::Stretch,
            SOURCE,
            TARGET,
        );
        assert_eq!(r, TARGET);
    }

    #[test]
    fn test_edges_saturate() {
        let far = Rect::new(i32::MAX, i32::MIN, i32::MAX, 10);
        let r = destination_rectangle(
            HorizontalAlignment::Centre,
            VerticalAlignment::Bottom,
            SOURCE,
            far,
        );
        assert_eq!(r, Rect::new(i32::MAX - 8, i32::MIN, 16, 12));

        let r = destination_rectangle(
            HorizontalAlignment::Right,
            VerticalAlignment::Centre,
            Rect::new(0, 0, i32::MIN, 0),
            far,
        );
        assert_eq!(r.x, i32::MAX);
    }
}
