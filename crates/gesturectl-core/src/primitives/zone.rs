//! Screen-zone pointing.
//!
//! The frame is split into thirds along each axis. Horizontal zones are
//! checked before vertical ones, so a point in a corner resolves to
//! left or right.

use gesturectl_common::types::{Action, PixelPoint};

/// Which zones map to an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoneLayout {
    /// Left, right, top, and bottom thirds.
    FourWay,
    /// Left, right, and top thirds; the bottom third stays neutral.
    WithoutDown,
}

/// Classifies a pixel position against the zone grid of a `width` x `height` frame.
#[must_use]
pub fn classify_zone(point: PixelPoint, width: u32, height: u32, layout: ZoneLayout) -> Action {
    let (w, h) = (f64::from(width), f64::from(height));
    let (x, y) = (f64::from(point.x), f64::from(point.y));

    if x < w / 3.0 {
        Action::Left
    } else if x > w * 2.0 / 3.0 {
        Action::Right
    } else if y < h / 3.0 {
        Action::Up
    } else if layout == ZoneLayout::FourWay && y > h * 2.0 / 3.0 {
        Action::Down
    } else {
        Action::Neutral
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const W: u32 = 640;
    const H: u32 = 480;

    fn zone(x: i32, y: i32) -> Action {
        classify_zone(PixelPoint::new(x, y), W, H, ZoneLayout::FourWay)
    }

    #[test]
    fn center_is_neutral() {
        assert_eq!(zone(320, 240), Action::Neutral);
    }

    #[test]
    fn each_third_maps_to_its_direction() {
        assert_eq!(zone(5, 240), Action::Left);
        assert_eq!(zone(630, 240), Action::Right);
        assert_eq!(zone(320, 10), Action::Up);
        assert_eq!(zone(320, 470), Action::Down);
    }

    #[test]
    fn horizontal_zones_win_in_corners() {
        assert_eq!(zone(5, 5), Action::Left);
        assert_eq!(zone(630, 470), Action::Right);
    }

    #[test]
    fn boundaries_are_exclusive() {
        // 640 / 3 = 213.33: 213 is inside the left zone, 214 is not.
        assert_eq!(zone(213, 240), Action::Left);
        assert_eq!(zone(214, 240), Action::Neutral);
        // 480 * 2 / 3 = 320 exactly: only rows below it count as down.
        assert_eq!(zone(320, 320), Action::Neutral);
        assert_eq!(zone(320, 321), Action::Down);
    }

    #[test]
    fn layout_without_down_leaves_bottom_neutral() {
        let action = classify_zone(PixelPoint::new(320, 470), W, H, ZoneLayout::WithoutDown);
        assert_eq!(action, Action::Neutral);
        let action = classify_zone(PixelPoint::new(320, 10), W, H, ZoneLayout::WithoutDown);
        assert_eq!(action, Action::Up);
    }
}
