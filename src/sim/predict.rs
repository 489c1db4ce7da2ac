//! Wall-impact prediction
//!
//! Given a pose inside the arena, which wall does the ray hit first and how
//! far away is it?

use super::state::{Arena, Mover, PredictedEvent, Wall};
use crate::error::SimError;

/// Distance along the current heading to the first wall hit.
///
/// Axis-aligned headings face exactly one wall. Diagonal headings race the
/// x-axis candidate against the y-axis candidate in the heading's quadrant;
/// ties go to the x-axis wall.
pub fn predict_wall_impact(mover: &Mover, arena: &Arena) -> Result<PredictedEvent, SimError> {
    let heading = mover.heading();
    let (x, y) = (mover.pos.x, mover.pos.y);
    let rad = heading.to_radians();

    if heading % 90.0 == 0.0 {
        let event = if heading == 0.0 {
            PredictedEvent {
                distance: arena.width - x,
                wall: Wall::Right,
            }
        } else if heading == 90.0 {
            PredictedEvent {
                distance: arena.height - y,
                wall: Wall::Top,
            }
        } else if heading == 180.0 {
            PredictedEvent {
                distance: x,
                wall: Wall::Left,
            }
        } else {
            PredictedEvent {
                distance: y,
                wall: Wall::Bottom,
            }
        };
        return checked(mover, event);
    }

    let (dx, x_wall, dy, y_wall) = match mover.heading_quadrant() {
        1 => (
            (arena.width - x) / rad.cos(),
            Wall::Right,
            (arena.height - y) / rad.sin(),
            Wall::Top,
        ),
        2 => (
            x / rad.cos().abs(),
            Wall::Left,
            (arena.height - y) / rad.sin(),
            Wall::Top,
        ),
        3 => (
            x / rad.cos().abs(),
            Wall::Left,
            y / rad.sin().abs(),
            Wall::Bottom,
        ),
        _ => (
            (arena.width - x) / rad.cos(),
            Wall::Right,
            y / rad.sin().abs(),
            Wall::Bottom,
        ),
    };

    let event = if dx <= dy {
        PredictedEvent {
            distance: dx,
            wall: x_wall,
        }
    } else {
        PredictedEvent {
            distance: dy,
            wall: y_wall,
        }
    };
    checked(mover, event)
}

fn checked(mover: &Mover, event: PredictedEvent) -> Result<PredictedEvent, SimError> {
    if event.distance < 0.0 {
        return Err(SimError::NegativeDistance {
            id: mover.id,
            wall: event.wall,
            distance: event.distance,
        });
    }
    Ok(event)
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DVec2;
    use proptest::prelude::*;

    fn arena() -> Arena {
        Arena::new(320.0, 360.0)
    }

    fn predict(x: f64, y: f64, heading: f64) -> PredictedEvent {
        let mover = Mover::new(0, DVec2::new(x, y), heading, 1);
        predict_wall_impact(&mover, &arena()).unwrap()
    }

    #[test]
    fn test_axis_aligned_headings() {
        let event = predict(160.0, 180.0, 0.0);
        assert_eq!(event.wall, Wall::Right);
        assert_eq!(event.distance, 160.0);

        let event = predict(160.0, 180.0, 90.0);
        assert_eq!(event.wall, Wall::Top);
        assert_eq!(event.distance, 180.0);

        let event = predict(160.0, 180.0, 180.0);
        assert_eq!(event.wall, Wall::Left);
        assert_eq!(event.distance, 160.0);

        let event = predict(160.0, 180.0, 270.0);
        assert_eq!(event.wall, Wall::Bottom);
        assert_eq!(event.distance, 180.0);
    }

    #[test]
    fn test_quadrant_1_races_right_against_top() {
        // dx = 160/cos45 ~ 226.27 beats dy = 180/sin45 ~ 254.56
        let event = predict(160.0, 180.0, 45.0);
        assert_eq!(event.wall, Wall::Right);
        assert!((event.distance - 160.0 * 2f64.sqrt()).abs() < 1e-9);
    }

    #[test]
    fn test_quadrant_2_races_left_against_top() {
        let event = predict(300.0, 10.0, 135.0);
        assert_eq!(event.wall, Wall::Left);
        assert!((event.distance - 300.0 * 2f64.sqrt()).abs() < 1e-9);
    }

    #[test]
    fn test_quadrant_3_tie_breaks_toward_x_wall() {
        let event = predict(10.0, 10.0, 225.0);
        assert_eq!(event.wall, Wall::Left);
        assert!((event.distance - 10.0 * 2f64.sqrt()).abs() < 1e-9);
    }

    #[test]
    fn test_quadrant_4_races_right_against_bottom() {
        // dy = 10/sin(-45) magnitude beats dx = 310/cos(-45)
        let event = predict(10.0, 10.0, 315.0);
        assert_eq!(event.wall, Wall::Bottom);
        assert!((event.distance - 10.0 * 2f64.sqrt()).abs() < 1e-9);
    }

    #[test]
    fn test_on_wall_heading_parallel_to_it() {
        // Sitting on the left wall, heading straight up
        let event = predict(0.0, 100.0, 90.0);
        assert_eq!(event.wall, Wall::Top);
        assert_eq!(event.distance, 260.0);
    }

    #[test]
    fn test_reprediction_of_unmoved_mover_is_identical() {
        let mover = Mover::new(0, DVec2::new(42.0, 77.0), 123.4, 3);
        let first = predict_wall_impact(&mover, &arena()).unwrap();
        let second = predict_wall_impact(&mover, &arena()).unwrap();
        assert_eq!(first, second);
    }

    proptest! {
        #[test]
        fn prop_distance_non_negative(
            x in 0.0f64..=320.0,
            y in 0.0f64..=360.0,
            heading in 0.0f64..360.0,
        ) {
            let mover = Mover::new(0, DVec2::new(x, y), heading, 1);
            let event = predict_wall_impact(&mover, &arena()).unwrap();
            prop_assert!(event.distance >= 0.0);
        }

        #[test]
        fn prop_impact_point_lies_on_named_wall(
            x in 0.0f64..=320.0,
            y in 0.0f64..=360.0,
            heading in 0.0f64..360.0,
        ) {
            let mover = Mover::new(0, DVec2::new(x, y), heading, 1);
            let arena = arena();
            let event = predict_wall_impact(&mover, &arena).unwrap();
            let hit = mover.pos + mover.direction() * event.distance;
            // Numerical tolerance grows with the distance travelled
            let tol = 1e-9 * event.distance.max(1.0);
            match event.wall {
                Wall::Right => prop_assert!((hit.x - arena.width).abs() <= tol),
                Wall::Top => prop_assert!((hit.y - arena.height).abs() <= tol),
                Wall::Left => prop_assert!(hit.x.abs() <= tol),
                Wall::Bottom => prop_assert!(hit.y.abs() <= tol),
            }
            prop_assert!(hit.x >= -tol && hit.x <= arena.width + tol);
            prop_assert!(hit.y >= -tol && hit.y <= arena.height + tol);
        }
    }
}
