//! Unit tests for nav-core primitives.

#[cfg(test)]
mod ids {
    use crate::{AgentId, VertexId};

    #[test]
    fn index_roundtrip() {
        let id = VertexId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(VertexId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn invalid_sentinels_are_max() {
        assert_eq!(VertexId::INVALID.0, u32::MAX);
        assert_eq!(AgentId::default(), AgentId::INVALID);
    }

    #[test]
    fn display() {
        assert_eq!(AgentId(7).to_string(), "AgentId(7)");
        assert_eq!(VertexId(3).to_string(), "VertexId(3)");
    }
}

#[cfg(test)]
mod geo {
    use crate::Point;

    #[test]
    fn distance_is_euclidean() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(3.0, 4.0);
        assert_eq!(a.distance(b), 5.0);
        assert_eq!(b.distance(a), 5.0);
    }

    #[test]
    fn normalized_unit_length() {
        let v = Point::new(3.0, 4.0).normalized();
        assert!((v.length() - 1.0).abs() < 1e-6);
        assert!((v.x - 0.6).abs() < 1e-6);
    }

    #[test]
    fn normalized_zero_stays_zero() {
        assert_eq!(Point::ZERO.normalized(), Point::ZERO);
        assert_eq!(Point::new(1e-7, 0.0).normalized(), Point::ZERO);
    }

    #[test]
    fn move_towards_partial_step() {
        let p = Point::new(0.0, 0.0).move_towards(Point::new(10.0, 0.0), 2.5);
        assert_eq!(p, Point::new(2.5, 0.0));
    }

    #[test]
    fn move_towards_never_overshoots() {
        let target = Point::new(1.0, 1.0);
        let p = Point::new(0.0, 0.0).move_towards(target, 100.0);
        assert_eq!(p, target, "must land exactly on the target");
    }

    #[test]
    fn move_towards_zero_delta_is_identity() {
        let p = Point::new(2.0, 3.0);
        assert_eq!(p.move_towards(Point::new(9.0, 9.0), 0.0), p);
    }
}

#[cfg(test)]
mod time {
    use crate::{SimClock, SimConfig, Tick};

    #[test]
    fn tick_display_and_order() {
        assert_eq!(Tick(7).to_string(), "T7");
        assert!(Tick::ZERO < Tick(1));
    }

    #[test]
    fn clock_elapsed() {
        let mut clock = SimClock::new(0.5);
        assert_eq!(clock.elapsed_secs(), 0.0);
        clock.advance();
        clock.advance();
        assert_eq!(clock.current_tick, Tick(2));
        assert_eq!(clock.elapsed_secs(), 1.0);
    }

    #[test]
    fn config_end_tick_and_clock() {
        let config = SimConfig { tick_duration_secs: 0.1, total_ticks: 50 };
        assert_eq!(config.end_tick(), Tick(50));
        assert_eq!(config.make_clock().tick_duration_secs, 0.1);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn config_from_json() {
        let config: SimConfig =
            serde_json::from_str(r#"{"tick_duration_secs": 0.5, "total_ticks": 20}"#).unwrap();
        assert_eq!(config.total_ticks, 20);
    }
}

#[cfg(test)]
mod validation {
    use crate::{NavError, check_non_negative, check_radius};

    #[test]
    fn radius_accepts_zero_and_positive() {
        assert_eq!(check_radius(0.0).unwrap(), 0.0);
        assert_eq!(check_radius(1.5).unwrap(), 1.5);
    }

    #[test]
    fn radius_rejects_negative_and_nan() {
        assert!(matches!(check_radius(-0.1), Err(NavError::NegativeRadius(_))));
        assert!(check_radius(f32::NAN).is_err());
        assert!(check_radius(f32::INFINITY).is_err());
    }

    #[test]
    fn parameter_names_reported() {
        let err = check_non_negative("speed", -1.0).unwrap_err();
        assert!(err.to_string().contains("speed"));
    }
}
