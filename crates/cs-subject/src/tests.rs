//! Unit tests for cs-subject.

use cs_core::StrategyId;

use crate::{HealthState, Subject, IMMUNE_DURATION, INFECTED_DURATION};

fn subject() -> Subject {
    Subject::new(100.0, 50.0, 5, StrategyId::REGULAR).with_velocity(0.6, -0.8)
}

// ── HealthState ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod health_state {
    use super::*;

    #[test]
    fn default_is_susceptible() {
        assert_eq!(HealthState::default(), HealthState::Susceptible);
    }

    #[test]
    fn infection_tick_counts_down() {
        let s = HealthState::Infected { remaining: 3 }.after_infection_tick();
        assert_eq!(s, HealthState::Infected { remaining: 2 });
    }

    #[test]
    fn last_infection_tick_grants_full_immunity() {
        let s = HealthState::Infected { remaining: 1 }.after_infection_tick();
        assert_eq!(s, HealthState::Immune { remaining: IMMUNE_DURATION });
    }

    #[test]
    fn last_immunity_tick_returns_to_susceptible() {
        let s = HealthState::Immune { remaining: 1 }.after_immunity_tick();
        assert_eq!(s, HealthState::Susceptible);
    }

    #[test]
    fn ticks_in_wrong_state_are_noops() {
        assert_eq!(HealthState::Susceptible.after_infection_tick(), HealthState::Susceptible);
        assert_eq!(HealthState::Susceptible.after_immunity_tick(), HealthState::Susceptible);
        let immune = HealthState::immune();
        assert_eq!(immune.after_infection_tick(), immune);
        let infected = HealthState::infected();
        assert_eq!(infected.after_immunity_tick(), infected);
    }

    #[test]
    fn display() {
        assert_eq!(HealthState::Susceptible.to_string(), "susceptible");
        assert_eq!(HealthState::infected().to_string(), "infected");
        assert_eq!(HealthState::immune().to_string(), "immune");
    }
}

// ── Subject ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod subject_health {
    use super::*;

    #[test]
    fn new_subject_is_susceptible() {
        let s = subject();
        assert!(s.is_susceptible());
        assert!(!s.is_infected());
        assert!(!s.is_immune());
    }

    #[test]
    fn infect_sets_full_countdown() {
        let mut s = subject();
        assert!(s.infect(), "susceptible → infected reports a new infection");
        assert_eq!(s.state(), HealthState::Infected { remaining: INFECTED_DURATION });
    }

    #[test]
    fn reinfect_restarts_countdown() {
        let mut s = subject().infected();
        for _ in 0..50 {
            s.advance_infection();
        }
        assert_eq!(s.state(), HealthState::Infected { remaining: INFECTED_DURATION - 50 });
        assert!(!s.infect(), "already infected is not a new infection");
        assert_eq!(s.state(), HealthState::Infected { remaining: INFECTED_DURATION });
    }

    #[test]
    fn infect_on_immune_is_noop() {
        let mut s = subject().infected();
        for _ in 0..INFECTED_DURATION {
            s.advance_infection();
        }
        s.advance_immunity();
        let before = s.state();
        assert!(s.is_immune());
        assert!(!s.infect());
        assert_eq!(s.state(), before);
    }

    #[test]
    fn full_cycle_takes_exact_durations() {
        let mut s = subject().infected();

        for i in 1..INFECTED_DURATION {
            s.advance_infection();
            assert_eq!(
                s.state(),
                HealthState::Infected { remaining: INFECTED_DURATION - i },
                "countdown must drop by one per advance"
            );
        }
        s.advance_infection();
        assert_eq!(s.state(), HealthState::Immune { remaining: IMMUNE_DURATION });

        for _ in 1..IMMUNE_DURATION {
            s.advance_immunity();
            assert!(s.is_immune());
        }
        s.advance_immunity();
        assert!(s.is_susceptible());
    }

    #[test]
    fn exactly_one_state_holds() {
        let mut s = subject().infected();
        for _ in 0..(INFECTED_DURATION + IMMUNE_DURATION + 5) {
            let flags = [s.is_susceptible(), s.is_infected(), s.is_immune()];
            assert_eq!(flags.iter().filter(|&&f| f).count(), 1);
            if s.is_infected() {
                s.advance_infection();
            } else {
                s.advance_immunity();
            }
        }
    }
}

#[cfg(test)]
mod subject_kinematics {
    use cs_movement::{MovementError, StrategyTable};

    use super::*;

    #[test]
    fn angle_and_speed() {
        let s = subject();
        assert!((s.speed() - 1.0).abs() < 1e-12);
        assert!((s.angle() - (-0.8f64).atan2(0.6)).abs() < 1e-12);
    }

    #[test]
    fn regular_move_applies_velocity() {
        let mut s = subject();
        s.move_by(2.0, &StrategyTable::standard()).unwrap();
        assert!((s.x() - 101.2).abs() < 1e-12);
        assert!((s.y() - 48.4).abs() < 1e-12);
        assert_eq!((s.dx(), s.dy()), (0.6, -0.8), "velocity unchanged by move");
    }

    #[test]
    fn lockdown_move_stays_put() {
        let mut s = Subject::new(10.0, 20.0, 5, StrategyId::LOCKDOWN).with_velocity(1.0, 1.0);
        s.move_by(1.5, &StrategyTable::standard()).unwrap();
        assert_eq!((s.x(), s.y()), (10.0, 20.0));
    }

    #[test]
    fn unassigned_strategy_fails_fast() {
        let mut s = Subject::new(10.0, 20.0, 5, StrategyId::INVALID).with_velocity(1.0, 1.0);
        let err = s.move_by(1.0, &StrategyTable::standard()).unwrap_err();
        assert!(matches!(err, MovementError::UnknownStrategy(_)));
        assert_eq!((s.x(), s.y()), (10.0, 20.0));
    }

    #[test]
    fn radius_is_fixed() {
        let mut s = subject();
        s.set_x(1.0);
        s.set_dy(3.0);
        assert_eq!(s.radius(), 5);
    }
}

// ── PopulationBuilder ─────────────────────────────────────────────────────────

#[cfg(test)]
mod population {
    use crate::PopulationBuilder;

    use super::*;

    #[test]
    fn reference_composition() {
        let subjects = PopulationBuilder::new(100, 7).build();
        assert_eq!(subjects.len(), 100);

        let lockdown = subjects.iter().filter(|s| s.strategy() == StrategyId::LOCKDOWN).count();
        assert_eq!(lockdown, 75);
        assert!(subjects[..75].iter().all(|s| s.strategy() == StrategyId::LOCKDOWN));

        let infected: Vec<usize> = subjects
            .iter()
            .enumerate()
            .filter(|(_, s)| s.is_infected())
            .map(|(i, _)| i)
            .collect();
        assert_eq!(infected, vec![99], "only the last subject starts infected");
    }

    #[test]
    fn fractional_lockdown_rounds_up() {
        let b = PopulationBuilder::new(10, 1).lockdown_fraction(0.75);
        assert_eq!(b.lockdown_count(), 8);
        assert_eq!(PopulationBuilder::new(10, 1).lockdown_fraction(2.0).lockdown_count(), 10);
        assert_eq!(PopulationBuilder::new(10, 1).lockdown_fraction(0.0).lockdown_count(), 0);
    }

    #[test]
    fn positions_and_velocities_in_range() {
        let subjects = PopulationBuilder::new(500, 3).arena(300, 200).radius(4).build();
        for s in &subjects {
            assert!((1.0..300.0).contains(&s.x()));
            assert!((1.0..200.0).contains(&s.y()));
            assert!((-1.0..1.0).contains(&s.dx()));
            assert!((-1.0..1.0).contains(&s.dy()));
            assert_eq!(s.radius(), 4);
        }
    }

    #[test]
    fn same_seed_same_population() {
        let a = PopulationBuilder::new(50, 99).build();
        let b = PopulationBuilder::new(50, 99).build();
        assert_eq!(a, b);
        let c = PopulationBuilder::new(50, 100).build();
        assert_ne!(a, c);
    }

    #[test]
    fn infected_count_capped() {
        let subjects = PopulationBuilder::new(3, 0).initially_infected(10).build();
        assert!(subjects.iter().all(|s| s.is_infected()));
    }
}
