//! Unit tests for pd-core primitives.

#[cfg(test)]
mod ids {
    use crate::{LocationId, TrialId};

    #[test]
    fn index_roundtrip() {
        let id = LocationId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(LocationId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn invalid_sentinels_are_max() {
        assert_eq!(LocationId::INVALID.0, u32::MAX);
        assert_eq!(TrialId::INVALID.0, u32::MAX);
        assert_eq!(LocationId::default(), LocationId::INVALID);
    }

    #[test]
    fn display() {
        assert_eq!(LocationId(7).to_string(), "LocationId(7)");
    }
}

#[cfg(test)]
mod turn {
    use crate::Turn;

    #[test]
    fn turn_arithmetic() {
        assert_eq!(Turn(10).next(), Turn(11));
        assert_eq!(Turn::ZERO.count(), 0);
    }

    #[test]
    fn display() {
        assert_eq!(Turn(3).to_string(), "T3");
    }
}

#[cfg(test)]
mod config {
    use crate::RunConfig;

    #[test]
    fn defaults_match_canonical_task() {
        let cfg = RunConfig::default();
        assert_eq!(cfg.parcel_count, 5);
        assert_eq!(cfg.start, "Post Office");
        assert_eq!(cfg.turn_cap, 1_000);
        assert_eq!(cfg.trials, 100);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn zero_turn_cap_rejected() {
        let cfg = RunConfig { turn_cap: 0, ..RunConfig::default() };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn zero_trials_rejected() {
        let cfg = RunConfig { trials: 0, ..RunConfig::default() };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn blank_start_rejected() {
        let cfg = RunConfig { start: "  ".into(), ..RunConfig::default() };
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
            let a: u64 = r1.random();
            let b: u64 = r2.random();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn children_are_reproducible() {
        let mut root1 = SimRng::new(7);
        let mut root2 = SimRng::new(7);
        let mut c1 = root1.child(3);
        let mut c2 = root2.child(3);
        assert_eq!(c1.random::<u64>(), c2.random::<u64>());
    }

    #[test]
    fn sibling_children_differ() {
        let mut root = SimRng::new(1);
        let mut c0 = root.child(0);
        let mut c1 = root.child(1);
        assert_ne!(c0.random::<u64>(), c1.random::<u64>());
    }

    #[test]
    fn gen_range_in_bounds() {
        let mut rng = SimRng::new(0);
        for _ in 0..1000 {
            let v = rng.gen_range(0..14usize);
            assert!(v < 14);
        }
    }

    #[test]
    fn choose_empty_is_none() {
        let mut rng = SimRng::new(0);
        let empty: [u32; 0] = [];
        assert!(rng.choose(&empty).is_none());
        assert_eq!(rng.choose(&[9]), Some(&9));
    }
}
