//! Property tests over randomized seeds and input sequences

use proptest::prelude::*;

use skyflap::consts::SIM_DT;
use skyflap::sim::{GameEvent, GamePhase, GameState, TickInput, advance, autopilot, integrate};
use skyflap::{EngineConfig, LifeLossPolicy};

/// Start a game, then replay the jump pattern
fn run(config: &EngineConfig, seed: u64, jumps: &[bool]) -> Vec<(GameState, Vec<GameEvent>)> {
    let mut state = GameState::new(config, seed);
    let mut history = Vec::with_capacity(jumps.len() + 1);
    let started = advance(config, &state, &TickInput::jump(), SIM_DT);
    state = started.state.clone();
    history.push((started.state, started.events));
    for &jump in jumps {
        let input = TickInput {
            jump,
            ..Default::default()
        };
        let outcome = advance(config, &state, &input, SIM_DT);
        state = outcome.state.clone();
        history.push((outcome.state, outcome.events));
    }
    history
}

/// Start a game, then let the autopilot steer for `ticks` ticks
fn run_steered(config: &EngineConfig, seed: u64, ticks: usize) -> Vec<(GameState, Vec<GameEvent>)> {
    let state = GameState::new(config, seed);
    let started = advance(config, &state, &TickInput::jump(), SIM_DT);
    let mut history = vec![(started.state, started.events)];
    for _ in 0..ticks {
        let Some((state, _)) = history.last() else {
            break;
        };
        let input = TickInput {
            jump: autopilot::should_jump(state, config, SIM_DT),
            ..Default::default()
        };
        let outcome = advance(config, state, &input, SIM_DT);
        history.push((outcome.state, outcome.events));
    }
    history
}

/// Score rises only through `Scored` events, one per obstacle that flips to passed
fn check_scoring(history: &[(GameState, Vec<GameEvent>)]) -> Result<(), TestCaseError> {
    for pair in history.windows(2) {
        let (prev, _) = &pair[0];
        let (next, events) = &pair[1];
        let scored = events.iter().filter(|e| **e == GameEvent::Scored).count() as u32;
        prop_assert!(next.score >= prev.score);
        prop_assert_eq!(next.score - prev.score, scored);

        let newly_passed = next
            .obstacles
            .iter()
            .filter(|o| o.passed && prev.obstacles.iter().any(|p| p.id == o.id && !p.passed))
            .count() as u32;
        // A lost life clears the field, taking the passed obstacles with it
        if next.lives == prev.lives {
            prop_assert_eq!(newly_passed, scored);
        }
        for o in next.obstacles.iter().filter(|o| !o.passed) {
            prop_assert!(prev.obstacles.iter().all(|p| p.id != o.id || !p.passed));
        }
    }
    Ok(())
}

fn jump_pattern() -> impl Strategy<Value = Vec<bool>> {
    prop::collection::vec(prop::bool::weighted(0.08), 50..600)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn score_only_rises_one_per_scored_event(seed in any::<u64>(), jumps in jump_pattern()) {
        let config = EngineConfig::default();
        check_scoring(&run(&config, seed, &jumps))?;
    }

    #[test]
    fn steered_play_scores(seed in any::<u64>(), ticks in 300usize..700) {
        let config = EngineConfig::default();
        let history = run_steered(&config, seed, ticks);
        check_scoring(&history)?;

        let scored = history
            .iter()
            .flat_map(|(_, events)| events)
            .filter(|e| **e == GameEvent::Scored)
            .count() as u32;
        let Some((last, _)) = history.last() else {
            return Err(TestCaseError::fail("empty history"));
        };
        prop_assert!(last.score > 0);
        prop_assert_eq!(last.score, scored);
        for (state, _) in &history {
            prop_assert!(state.avatar_in_bounds(&config));
        }
    }

    #[test]
    fn lives_drop_by_one_and_over_iff_zero(seed in any::<u64>(), jumps in jump_pattern()) {
        let config = EngineConfig::default();
        let history = run(&config, seed, &jumps);
        for pair in history.windows(2) {
            let (prev, _) = &pair[0];
            let (next, events) = &pair[1];
            prop_assert!(next.lives <= prev.lives);
            prop_assert!(prev.lives - next.lives <= 1);
            let lost = events
                .iter()
                .filter(|e| matches!(e, GameEvent::LifeLost { .. }))
                .count() as u32;
            prop_assert_eq!(prev.lives - next.lives, lost);
            prop_assert_eq!(next.phase == GamePhase::Over, next.lives == 0);
            prop_assert!(next.level >= prev.level);
        }
    }

    #[test]
    fn avatar_never_persists_out_of_bounds(seed in any::<u64>(), jumps in jump_pattern()) {
        let config = EngineConfig::default();
        for (state, _) in run(&config, seed, &jumps) {
            prop_assert!(state.avatar_in_bounds(&config));
        }
    }

    #[test]
    fn boundary_violation_rolls_back(y in 0.0f32..=472.0, velocity in -30.0f32..30.0) {
        let config = EngineConfig {
            life_loss: LifeLossPolicy::KeepPosition,
            ..Default::default()
        };
        let mut state = GameState::new(&config, 1);
        state.phase = GamePhase::Running;
        state.avatar.y = y;
        state.avatar.velocity = velocity;

        let (expected_y, _) = integrate(y, velocity, config.gravity, SIM_DT);
        let next = advance(&config, &state, &TickInput::default(), SIM_DT).state;
        if expected_y < 0.0 || expected_y > 472.0 {
            prop_assert_eq!(next.avatar.y, y);
            prop_assert_eq!(next.lives, 2);
        } else {
            prop_assert_eq!(next.avatar.y, expected_y);
            prop_assert_eq!(next.lives, 3);
        }
    }

    #[test]
    fn replay_is_deterministic(seed in any::<u64>(), jumps in jump_pattern()) {
        let config = EngineConfig::default();
        let a = run(&config, seed, &jumps);
        let b = run(&config, seed, &jumps);
        prop_assert_eq!(a, b);
    }

    #[test]
    fn obstacles_scroll_left_until_removed(seed in any::<u64>(), jumps in jump_pattern()) {
        let config = EngineConfig::default();
        let history = run(&config, seed, &jumps);
        for pair in history.windows(2) {
            let (prev, _) = &pair[0];
            let (next, events) = &pair[1];
            for o in &next.obstacles {
                prop_assert!(o.x > -config.obstacle_width);
            }
            for w in next.obstacles.windows(2) {
                prop_assert!(w[0].x < w[1].x);
                prop_assert!(w[1].x - w[0].x > config.spawn_threshold);
            }
            if next.phase != GamePhase::Running
                || events.iter().any(|e| matches!(e, GameEvent::LifeLost { .. }))
            {
                continue;
            }
            for old in &prev.obstacles {
                match next.obstacles.iter().find(|o| o.id == old.id) {
                    Some(o) => prop_assert!(o.x < old.x),
                    None => prop_assert!(old.x - next.obstacle_speed * SIM_DT <= -config.obstacle_width),
                }
            }
        }
    }
}
