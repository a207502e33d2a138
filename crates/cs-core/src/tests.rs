//! Unit tests for cs-core primitives.

#[cfg(test)]
mod ids {
    use crate::{StrategyId, SubjectId};

    #[test]
    fn index_roundtrip() {
        let id = SubjectId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(SubjectId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn invalid_sentinels_are_max() {
        assert_eq!(SubjectId::INVALID.0, u32::MAX);
        assert_eq!(StrategyId::INVALID.0, u16::MAX);
        assert_eq!(StrategyId::default(), StrategyId::INVALID);
    }

    #[test]
    fn standard_strategy_slots() {
        assert_eq!(StrategyId::REGULAR.index(), 0);
        assert_eq!(StrategyId::LOCKDOWN.index(), 1);
    }

    #[test]
    fn display() {
        assert_eq!(SubjectId(7).to_string(), "SubjectId(7)");
    }
}

#[cfg(test)]
mod geo {
    use crate::Vec2;

    #[test]
    fn distance_is_euclidean() {
        let a = Vec2::new(0.0, 0.0);
        let b = Vec2::new(3.0, 4.0);
        assert!((a.distance(b) - 5.0).abs() < 1e-12);
        assert!((b.distance(a) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn angle_follows_atan2() {
        assert!((Vec2::new(0.0, 1.0).angle() - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
        assert!((Vec2::new(-1.0, 0.0).angle() - std::f64::consts::PI).abs() < 1e-12);
        assert_eq!(Vec2::ZERO.angle(), 0.0);
    }

    #[test]
    fn length_and_squared_agree() {
        let v = Vec2::new(-0.6, 0.8);
        assert!((v.length() - 1.0).abs() < 1e-12);
        assert!((v.length_squared() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn add_sub() {
        let v = Vec2::new(1.0, 2.0) + Vec2::new(0.5, -1.0);
        assert_eq!(v, Vec2::new(1.5, 1.0));
        assert_eq!(v - Vec2::new(1.5, 1.0), Vec2::ZERO);
    }
}

#[cfg(test)]
mod time {
    use crate::{SimClock, SimConfig, Tick};

    #[test]
    fn clock_advances_from_zero() {
        let mut clock = SimClock::new(15);
        assert_eq!(clock.current_tick, Tick::ZERO);
        assert_eq!(clock.advance(), Tick(1));
        assert_eq!(clock.advance(), Tick(2));
    }

    #[test]
    fn dt_is_interval_over_ten() {
        let clock = SimClock::new(15);
        assert!((clock.dt() - 1.5).abs() < 1e-12);
        assert_eq!(clock.interval(), std::time::Duration::from_millis(15));
    }

    #[test]
    fn tick_multiples() {
        assert!(Tick(30).is_multiple_of(30));
        assert!(Tick(60).is_multiple_of(30));
        assert!(!Tick(31).is_multiple_of(30));
        assert!(!Tick(30).is_multiple_of(0), "interval 0 disables");
    }

    #[test]
    fn default_config_matches_reference_arena() {
        let cfg = SimConfig::default();
        assert_eq!((cfg.arena_width, cfg.arena_height), (800, 500));
        assert_eq!(cfg.report_interval_ticks, 30);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn empty_arena_rejected() {
        let cfg = SimConfig { arena_width: 0, ..SimConfig::default() };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn zero_report_interval_rejected() {
        let cfg = SimConfig { report_interval_ticks: 0, ..SimConfig::default() };
        assert!(cfg.validate().is_err());
    }
}

#[cfg(test)]
mod rng {
    use crate::SimRng;

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = SimRng::new(12345);
        let mut r2 = SimRng::new(12345);
        for _ in 0..100 {
            let a: f64 = r1.gen_range(0.0..1.0);
            let b: f64 = r2.gen_range(0.0..1.0);
            assert_eq!(a, b);
        }
    }

    #[test]
    fn children_diverge() {
        let mut root = SimRng::new(1);
        let mut a = root.child(0);
        let mut b = root.child(1);
        let x: u64 = a.gen_range(0..u64::MAX);
        let y: u64 = b.gen_range(0..u64::MAX);
        assert_ne!(x, y);
    }

    #[test]
    fn gen_bool_extremes() {
        let mut rng = SimRng::new(0);
        assert!(!rng.gen_bool(0.0));
        assert!(rng.gen_bool(1.0));
    }
}
