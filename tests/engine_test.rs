//! End-to-end tests: slate in, validated lineups out.

use lineup_optimizer::{
    batch::{run_independent, BatchGenerator, BatchRequest, BatchState, CancelToken, Lineup},
    config::EligibilityConfig,
    model::LineupModel,
    roster::{prepare_pool, Matchup, Player},
    solver::{LineupSolver, MilpSolver, Solution},
    EngineConfig, LineupError, PlayerId, PlayerKey, Position, Result, Slot,
};
use std::collections::{BTreeSet, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};

fn player(id: u64, name: &str, team: &str, position: Position, salary: u32, proj: f64) -> Player {
    Player::new(PlayerId::new(id), name, team, position, salary, proj)
}

fn config() -> EngineConfig {
    EngineConfig {
        eligibility: EligibilityConfig::permissive(),
        ..EngineConfig::default()
    }
}

/// Exactly nine players: one way to fill the nine slots up to permutation.
fn minimal_slate() -> Vec<Player> {
    vec![
        player(1, "Quarterback", "KC", Position::QB, 7000, 20.0),
        player(2, "Back One", "KC", Position::RB, 6000, 14.0),
        player(3, "Back Two", "LV", Position::RB, 5500, 12.0),
        player(4, "Back Three", "LV", Position::RB, 4000, 9.0),
        player(5, "Wideout One", "KC", Position::WR, 6500, 15.0),
        player(6, "Wideout Two", "LV", Position::WR, 5000, 11.0),
        player(7, "Wideout Three", "LV", Position::WR, 4500, 10.0),
        player(8, "Tight End", "KC", Position::TE, 4000, 8.0),
        player(9, "Defense", "LV", Position::DST, 3000, 6.0),
    ]
}

/// Two quarterbacks, otherwise the minimal slate: two distinct lineups exist.
fn two_lineup_slate() -> Vec<Player> {
    let mut slate = minimal_slate();
    slate.push(player(10, "Backup Quarterback", "LV", Position::QB, 5000, 12.0));
    slate
}

fn deep_slate() -> Vec<Player> {
    let kc_lv = Matchup::new("KC", "LV");
    let buf_mia = Matchup::new("BUF", "MIA");
    let rows: Vec<(u64, &str, &str, Position, u32, f64, &Matchup)> = vec![
        (1, "Mahomes", "KC", Position::QB, 8000, 24.0, &kc_lv),
        (2, "Pacheco", "KC", Position::RB, 6000, 15.0, &kc_lv),
        (3, "Rice", "KC", Position::WR, 6500, 16.0, &kc_lv),
        (4, "Kelce", "KC", Position::TE, 7000, 17.0, &kc_lv),
        (5, "Chiefs", "KC", Position::DST, 3000, 8.0, &kc_lv),
        (6, "O'Connell", "LV", Position::QB, 5000, 14.0, &kc_lv),
        (7, "Jacobs", "LV", Position::RB, 6500, 16.0, &kc_lv),
        (8, "Adams", "LV", Position::WR, 8000, 19.0, &kc_lv),
        (9, "Meyers", "LV", Position::WR, 5500, 12.0, &kc_lv),
        (10, "Bowers", "LV", Position::TE, 5000, 11.0, &kc_lv),
        (11, "Raiders", "LV", Position::DST, 2500, 6.0, &kc_lv),
        (12, "Allen", "BUF", Position::QB, 8200, 25.0, &buf_mia),
        (13, "Cook", "BUF", Position::RB, 6800, 17.0, &buf_mia),
        (14, "Diggs", "BUF", Position::WR, 7500, 18.0, &buf_mia),
        (15, "Shakir", "BUF", Position::WR, 4500, 10.0, &buf_mia),
        (16, "Bills", "BUF", Position::DST, 3200, 9.0, &buf_mia),
        (17, "Tagovailoa", "MIA", Position::QB, 6000, 18.0, &buf_mia),
        (18, "Mostert", "MIA", Position::RB, 5500, 13.0, &buf_mia),
        (19, "Hill", "MIA", Position::WR, 8500, 21.0, &buf_mia),
        (20, "Waddle", "MIA", Position::WR, 6500, 14.0, &buf_mia),
        (21, "Smith", "MIA", Position::TE, 3500, 8.0, &buf_mia),
        (22, "Dolphins", "MIA", Position::DST, 2800, 7.0, &buf_mia),
    ];

    rows.into_iter()
        .map(|(id, name, team, pos, salary, proj, game)| {
            player(id, name, team, pos, salary, proj).with_matchup(game.clone())
        })
        .collect()
}

/// Three QBs, four RBs, five WRs, two TEs, two DSTs on two teams.
fn exposure_slate() -> Vec<Player> {
    let mut slate = Vec::new();
    let mut id = 0;
    let mut add = |name: &str, team: &str, position: Position, proj: f64| {
        id += 1;
        slate.push(player(id, name, team, position, 5000, proj));
    };
    add("QB Alpha", "NYJ", Position::QB, 22.0);
    add("QB Bravo", "NE", Position::QB, 19.0);
    add("QB Charlie", "NYJ", Position::QB, 16.0);
    for (i, proj) in [15.0, 13.0, 11.0, 9.0].into_iter().enumerate() {
        add(&format!("RB {i}"), "NE", Position::RB, proj);
    }
    for (i, proj) in [16.0, 14.0, 12.0, 10.0, 8.0].into_iter().enumerate() {
        add(&format!("WR {i}"), "NYJ", Position::WR, proj);
    }
    add("TE Alpha", "NE", Position::TE, 10.0);
    add("TE Bravo", "NYJ", Position::TE, 7.0);
    add("DST Alpha", "NE", Position::DST, 8.0);
    add("DST Bravo", "NYJ", Position::DST, 6.0);
    slate
}

fn assert_lineup_properties(lineups: &[Lineup], config: &EngineConfig) {
    for lineup in lineups {
        assert!(lineup.is_valid(config));
        assert!(lineup.total_salary() <= config.salary_cap);
        assert_eq!(lineup.slots().len(), config.slots.len());

        let slots: Vec<Slot> = lineup.slots().iter().map(|s| s.slot).collect();
        assert_eq!(slots.as_slice(), config.slots.slots());

        let keys = lineup.keys();
        assert_eq!(keys.len(), config.slots.len(), "a player fills two slots");
    }

    let distinct: HashSet<BTreeSet<PlayerKey>> = lineups.iter().map(Lineup::keys).collect();
    assert_eq!(distinct.len(), lineups.len(), "duplicate lineup in batch");
}

#[derive(Default)]
struct CountingSolver {
    calls: AtomicUsize,
}

impl LineupSolver for CountingSolver {
    fn name(&self) -> &'static str {
        "counting"
    }

    fn solve(&self, model: &LineupModel) -> Result<Solution> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        MilpSolver::new().solve(model)
    }
}

#[test]
fn test_single_lineup_fills_every_slot() {
    let config = config();
    let pool = prepare_pool(minimal_slate(), &config);

    let outcome = BatchGenerator::new(&MilpSolver::new(), &config)
        .generate(&BatchRequest::new(pool, 1), &CancelToken::new())
        .unwrap();

    assert_eq!(outcome.state, BatchState::Completed);
    assert_eq!(outcome.produced(), 1);
    assert_eq!(outcome.iterations, 1);

    let lineup = &outcome.lineups[0];
    assert_lineup_properties(&outcome.lineups, &config);
    assert_eq!(lineup.total_salary(), 45_500);
    assert!((lineup.total_projection() - 105.0).abs() < 1e-9);
    assert_eq!(lineup.slots()[0].player.name, "Quarterback");
    assert_eq!(lineup.slots()[8].player.name, "Defense");
}

#[test]
fn test_missing_defense_fails_before_solving() {
    let config = config();
    let slate: Vec<Player> = minimal_slate()
        .into_iter()
        .filter(|p| p.position != Position::DST)
        .collect();
    let pool = prepare_pool(slate, &config);
    let solver = CountingSolver::default();

    let outcome = BatchGenerator::new(&solver, &config)
        .generate(&BatchRequest::new(pool, 1), &CancelToken::new())
        .unwrap();

    assert_eq!(solver.calls.load(Ordering::SeqCst), 0);
    assert_eq!(outcome.state, BatchState::Aborted);
    assert!(matches!(outcome.reason, Some(LineupError::InfeasiblePool { .. })));
}

#[test]
fn test_pool_exhausted_after_two_lineups() {
    let config = config();
    let pool = prepare_pool(two_lineup_slate(), &config);

    let outcome = BatchGenerator::new(&MilpSolver::new(), &config)
        .generate(&BatchRequest::new(pool, 3), &CancelToken::new())
        .unwrap();

    assert_eq!(outcome.state, BatchState::Aborted);
    assert_eq!(outcome.produced(), 2);
    assert_eq!(outcome.reason.as_ref().and_then(LineupError::produced), Some(2));
    assert!(matches!(
        outcome.reason,
        Some(LineupError::IncompleteLineup { produced: 2 })
    ));
    assert_lineup_properties(&outcome.lineups, &config);
    // Better quarterback first
    assert_eq!(outcome.lineups[0].slots()[0].player.name, "Quarterback");
}

#[test]
fn test_quarterback_exposure_ceiling() {
    let mut config = config();
    config.max_exposure.insert(Position::QB, 0.33);
    let pool = prepare_pool(exposure_slate(), &config);

    let outcome = BatchGenerator::new(&MilpSolver::new(), &config)
        .generate(&BatchRequest::new(pool, 9), &CancelToken::new())
        .unwrap();

    assert_eq!(outcome.state, BatchState::Completed);
    assert_eq!(outcome.produced(), 9);
    assert_lineup_properties(&outcome.lineups, &config);

    for qb in ["QB Alpha", "QB Bravo", "QB Charlie"] {
        let appearances = outcome
            .lineups
            .iter()
            .filter(|l| l.players().any(|p| p.name == qb))
            .count();
        assert!(appearances <= 3, "{qb} appears in {appearances} lineups");
    }
}

#[test]
fn test_quarterbacks_run_out_under_exposure_ceiling() {
    let mut config = config();
    config.max_exposure.insert(Position::QB, 0.33);

    let mut slate = Vec::new();
    let mut id = 0;
    let mut add = |position: Position, count: usize, team: &str| {
        for i in 0..count {
            id += 1;
            let name = format!("{position} {i}");
            slate.push(player(id, &name, team, position, 5000, 10.0 + i as f64));
        }
    };
    add(Position::QB, 2, "DEN");
    add(Position::RB, 5, "DEN");
    add(Position::WR, 6, "LAC");
    add(Position::TE, 3, "LAC");
    add(Position::DST, 3, "DEN");
    let pool = prepare_pool(slate, &config);
    let solver = CountingSolver::default();

    let outcome = BatchGenerator::new(&solver, &config)
        .generate(&BatchRequest::new(pool, 9), &CancelToken::new())
        .unwrap();

    // Two quarterbacks at three lineups each
    assert_eq!(outcome.state, BatchState::Aborted);
    assert_eq!(outcome.produced(), 6);
    assert_eq!(solver.calls.load(Ordering::SeqCst), 6);
    assert_eq!(outcome.reason.as_ref().and_then(LineupError::produced), Some(6));
    assert!(matches!(
        outcome.reason,
        Some(LineupError::IncompleteLineup { produced: 6 })
    ));
    assert_lineup_properties(&outcome.lineups, &config);
}

#[test]
fn test_strategy_rules_hold_in_every_lineup() {
    let mut config = config();
    config.salary_cap = 60_000;
    config.strategy.qb_stacking = true;
    config.strategy.anti_stack_rb_qb = true;
    config.strategy.smart_defense = true;
    let pool = prepare_pool(deep_slate(), &config);

    let outcome = BatchGenerator::new(&MilpSolver::new(), &config)
        .generate(&BatchRequest::new(pool, 5), &CancelToken::new())
        .unwrap();

    assert!(outcome.produced() >= 1);
    if outcome.produced() < 5 {
        assert_eq!(outcome.state, BatchState::Aborted);
    } else {
        assert_eq!(outcome.state, BatchState::Completed);
    }
    assert_lineup_properties(&outcome.lineups, &config);

    for lineup in &outcome.lineups {
        let players: Vec<&Player> = lineup.players().collect();
        let qb = players.iter().find(|p| p.position == Position::QB).unwrap();

        assert!(players
            .iter()
            .any(|p| p.team == qb.team && p.position.is_receiver()));
        assert!(!players
            .iter()
            .any(|p| p.team == qb.team && p.position == Position::RB));

        let defense = players.iter().find(|p| p.position == Position::DST).unwrap();
        assert!(!players.iter().any(|p| {
            p.position.is_offensive() && p.opponent.as_deref() == Some(defense.team.as_str())
        }));
    }
}

#[test]
fn test_disabled_player_never_selected() {
    let config = config();
    let pool = prepare_pool(two_lineup_slate(), &config);
    let request = BatchRequest::new(pool, 1).with_disabled([PlayerId::new(1)]);

    let outcome = BatchGenerator::new(&MilpSolver::new(), &config)
        .generate(&request, &CancelToken::new())
        .unwrap();

    assert!(outcome.is_complete());
    assert_eq!(outcome.lineups[0].slots()[0].player.name, "Backup Quarterback");
}

#[test]
fn test_independent_batches_in_parallel() {
    let config = config();
    let requests: Vec<BatchRequest> = (0..4)
        .map(|_| BatchRequest::new(prepare_pool(two_lineup_slate(), &config), 2))
        .collect();

    let results = run_independent(&MilpSolver::new(), &config, &requests);
    assert_eq!(results.len(), 4);

    let first = results[0].as_ref().unwrap();
    for result in &results {
        let outcome = result.as_ref().unwrap();
        assert!(outcome.is_complete());
        assert_eq!(outcome.lineups, first.lineups);
    }
}

#[test]
fn test_invalid_requests() {
    let config = config();
    let pool = prepare_pool(minimal_slate(), &config);
    let solver = MilpSolver::new();
    let mut generator = BatchGenerator::new(&solver, &config);

    for count in [0, 201] {
        let result = generator.generate(&BatchRequest::new(pool.clone(), count), &CancelToken::new());
        assert!(matches!(result, Err(LineupError::InvalidRequest { .. })));
    }
    let result = generator.generate(&BatchRequest::new(Vec::new(), 1), &CancelToken::new());
    assert!(matches!(result, Err(LineupError::InvalidRequest { .. })));
    assert_eq!(generator.state(), BatchState::Idle);
}
