//! Unit tests for epi-core primitives.

#[cfg(test)]
mod ids {
    use crate::{AgentId, CellId};

    #[test]
    fn index_roundtrip() {
        let id = AgentId::from_index(42);
        assert_eq!(id, AgentId(42));
        assert_eq!(id.index(), 42);
        assert_eq!(CellId::from_index(0).index(), 0);
    }

    #[test]
    fn ordering() {
        assert!(AgentId(0) < AgentId(1));
        assert!(CellId(100) > CellId(99));
    }

    #[test]
    fn display_names_the_kind() {
        assert_eq!(AgentId(7).to_string(), "agent 7");
        assert_eq!(CellId(12).to_string(), "cell 12");
    }
}

#[cfg(test)]
mod time {
    use crate::Tick;

    #[test]
    fn tick_arithmetic() {
        let t = Tick(10);
        assert_eq!(t.offset(3), Tick(13));
        assert_eq!(t.next(), Tick(11));
        assert_eq!(t.offset(5).since(t), 5);
        assert_eq!(Tick::ZERO.since(Tick::ZERO), 0);
    }

    #[test]
    fn interval_matching() {
        assert!(Tick(0).is_on_interval(5));
        assert!(Tick(10).is_on_interval(5));
        assert!(!Tick(11).is_on_interval(5));
        // 0 disables the interval entirely.
        assert!(!Tick(0).is_on_interval(0));
    }
}

#[cfg(test)]
mod disease {
    use crate::DiseaseState;

    #[test]
    fn infectious_states() {
        assert!(!DiseaseState::Susceptible.is_infectious());
        assert!(DiseaseState::Asymptomatic.is_infectious());
        assert!(DiseaseState::Symptomatic.is_infectious());
        assert!(!DiseaseState::Recovered.is_infectious());
    }

    #[test]
    fn successor_chain() {
        assert_eq!(DiseaseState::Susceptible.successor(), None);
        assert_eq!(DiseaseState::Asymptomatic.successor(), Some(DiseaseState::Symptomatic));
        assert_eq!(DiseaseState::Symptomatic.successor(), Some(DiseaseState::Recovered));
        assert_eq!(DiseaseState::Recovered.successor(), None);
    }

    #[test]
    fn ordinals_match_all() {
        for (i, s) in DiseaseState::ALL.iter().enumerate() {
            assert_eq!(s.ordinal(), i);
        }
    }

    #[test]
    fn display_and_glyph() {
        assert_eq!(DiseaseState::Symptomatic.to_string(), "symptomatic");
        assert_eq!(DiseaseState::Symptomatic.glyph(), 'Y');
        assert_eq!(DiseaseState::default(), DiseaseState::Susceptible);
    }
}

#[cfg(test)]
mod topology {
    use crate::{Boundary, Neighborhood};

    #[test]
    fn parse_boundary() {
        assert_eq!("open".parse::<Boundary>().unwrap(), Boundary::Open);
        assert_eq!("Toroidal".parse::<Boundary>().unwrap(), Boundary::Toroidal);
        assert!("mobius".parse::<Boundary>().is_err());
    }

    #[test]
    fn parse_neighborhood() {
        assert_eq!("von-neumann".parse::<Neighborhood>().unwrap(), Neighborhood::VonNeumann);
        assert_eq!("8".parse::<Neighborhood>().unwrap(), Neighborhood::Moore);
        assert!("hex".parse::<Neighborhood>().is_err());
    }

    #[test]
    fn degrees() {
        assert_eq!(Neighborhood::VonNeumann.degree(), 4);
        assert_eq!(Neighborhood::Moore.degree(), 8);
        // Up, right, down, left.
        assert_eq!(Neighborhood::VonNeumann.offsets()[0], (-1, 0));
        assert_eq!(Neighborhood::VonNeumann.offsets()[1], (0, 1));
    }
}

#[cfg(test)]
mod config {
    use crate::{Boundary, EpiConfig, EpiError, Neighborhood};

    #[test]
    fn defaults_match_documented_values() {
        let cfg = EpiConfig::default();
        assert_eq!(cfg.side, 100);
        assert_eq!(cfg.density, 1.0);
        assert_eq!(cfg.steps, 500);
        assert_eq!(cfg.initial_infected, 1);
        assert_eq!(cfg.infection_rate, 0.1);
        assert_eq!(cfg.asymptomatic_ticks, 20);
        assert_eq!(cfg.symptomatic_ticks, 20);
        assert_eq!(cfg.influx, 0.0);
        assert_eq!(cfg.boundary, Boundary::Open);
        assert_eq!(cfg.neighborhood, Neighborhood::VonNeumann);
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.cell_count(), 10_000);
    }

    #[test]
    fn zero_side_rejected() {
        let cfg = EpiConfig { side: 0, ..EpiConfig::default() };
        assert!(matches!(cfg.validate(), Err(EpiError::Config(_))));
    }

    #[test]
    fn oversized_side_rejected() {
        let cfg = EpiConfig { side: 70_000, ..EpiConfig::default() };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn density_out_of_range_rejected() {
        for bad in [-0.1, 1.5, f64::NAN] {
            let cfg = EpiConfig { density: bad, ..EpiConfig::default() };
            assert!(cfg.validate().is_err(), "density {bad} should be rejected");
        }
    }

    #[test]
    fn infection_rate_out_of_range_rejected() {
        let cfg = EpiConfig { infection_rate: 1.01, ..EpiConfig::default() };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn negative_influx_rejected() {
        let cfg = EpiConfig { influx: -1.0, ..EpiConfig::default() };
        assert!(cfg.validate().is_err());
        let cfg = EpiConfig { influx: f64::INFINITY, ..EpiConfig::default() };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn boundary_probabilities_accepted() {
        let cfg = EpiConfig { density: 0.0, infection_rate: 1.0, ..EpiConfig::default() };
        assert!(cfg.validate().is_ok());
    }
}

#[cfg(all(test, feature = "serde"))]
mod config_serde {
    use crate::{Boundary, EpiConfig};

    #[test]
    fn partial_json_takes_defaults() {
        let cfg: EpiConfig =
            serde_json::from_str(r#"{ "side": 10, "boundary": "toroidal" }"#).unwrap();
        assert_eq!(cfg.side, 10);
        assert_eq!(cfg.boundary, Boundary::Toroidal);
        assert_eq!(cfg.steps, 500);
    }
}

#[cfg(test)]
mod rng {
    use crate::{RandomSource, SimRng};

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
    fn gen_bool_extremes() {
        let mut rng = SimRng::new(0);
        for _ in 0..100 {
            assert!(!rng.gen_bool(0.0));
            assert!(rng.gen_bool(1.0));
        }
        // Out-of-range probabilities are clamped rather than panicking.
        assert!(rng.gen_bool(2.0));
        assert!(!rng.gen_bool(-1.0));
    }

    #[test]
    fn gen_index_in_bounds() {
        let mut rng = SimRng::new(3);
        for _ in 0..1000 {
            assert!(rng.gen_index(7) < 7);
        }
    }

    #[test]
    fn sample_indices_distinct_and_clamped() {
        let mut rng = SimRng::new(9);
        let mut picked = rng.sample_indices(10, 4);
        assert_eq!(picked.len(), 4);
        picked.sort_unstable();
        picked.dedup();
        assert_eq!(picked.len(), 4);
        assert!(picked.iter().all(|&i| i < 10));

        let all = rng.sample_indices(3, 50);
        assert_eq!(all.len(), 3);
    }

    #[test]
    fn child_streams_diverge() {
        let mut root = SimRng::new(1);
        let mut a = root.child(0);
        let mut b = root.child(1);
        let x: u64 = a.random();
        let y: u64 = b.random();
        assert_ne!(x, y);
    }
}
