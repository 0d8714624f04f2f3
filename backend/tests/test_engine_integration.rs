//! End-to-end engine runs with a scripted oracle
//!
//! Covers the run loop, stop conditions, error halting, and the headline
//! determinism property: two runs with the same seed and the same oracle
//! script produce byte-identical serialized history.

use pathogen_simulator_core_rs::{
    AttackStrategy, EngineConfig, MutationMode, Network, Node, ScriptedOracle, SimulationEngine,
    StepError, StopReason, Virus, VirusCharacteristics,
};

fn aggressive_virus() -> Virus {
    // attack 10 vs undefended targets: every exploit attempt succeeds
    Virus::new(
        "v",
        "Crimson Worm",
        "worm",
        VirusCharacteristics {
            attack_power: 10.0,
            spread_rate: 5.0,
            stealth: 5.0,
            mutation_rate: 1.0,
            target_hosts: vec!["home_pc".to_string()],
            behavior: "aggressive".to_string(),
        },
    )
}

/// Star: hub "0" infected, leaves "1" and "2".
fn star_network() -> Network {
    let mut network = Network::new("n", "star");
    network.add_node(Node::new("0", "Hub", "home_pc", 0.0));
    network.add_node(Node::new("1", "LeafA", "home_pc", 0.0));
    network.add_node(Node::new("2", "LeafB", "home_pc", 0.0));
    network.connect("0", "1").unwrap();
    network.connect("0", "2").unwrap();
    network.get_node_mut("0").unwrap().infect();
    network
}

/// Chain 0 -- 1 -- 2 -- 3 -- 4, node 0 infected.
fn chain_network() -> Network {
    let mut network = Network::new("n", "chain");
    for i in 0..5 {
        network.add_node(Node::new(i.to_string(), format!("N{}", i), "home_pc", 0.0));
    }
    for i in 0..4 {
        network.connect(&i.to_string(), &(i + 1).to_string()).unwrap();
    }
    network.get_node_mut("0").unwrap().infect();
    network
}

fn config(max_steps: usize, seed: u64) -> EngineConfig {
    EngineConfig {
        max_steps,
        seed: Some(seed.into()),
        mutation_mode: MutationMode::Disabled,
    }
}

#[test]
fn test_single_step_run_stops_on_max_steps() {
    let mut engine =
        SimulationEngine::new(star_network(), aggressive_virus(), config(1, 42)).unwrap();
    engine.attach_oracle(Box::new(ScriptedOracle::new(vec![
        r#"{"source_node": "0", "target_node": "1", "reasoning": "hit a leaf"}"#.to_string(),
    ])));

    let outcome = engine.run();

    assert_eq!(outcome.stop_reason, Some(StopReason::MaxStepsReached));
    assert_eq!(outcome.steps_executed, 1);
    assert!(outcome.halted_on.is_none());
    assert_eq!(engine.current_step(), 1);
    assert!(engine.network().get_node("1").unwrap().is_infected());
    assert!(!engine.network().get_node("2").unwrap().is_infected());

    // step-0 baseline plus one per-step snapshot
    assert_eq!(engine.history().len(), 2);
    assert_eq!(engine.history()[0].stats.infected, 1);
    assert_eq!(engine.history()[1].stats.infected, 2);
}

#[test]
fn test_run_stops_when_all_infected() {
    let mut engine =
        SimulationEngine::new(star_network(), aggressive_virus(), config(50, 42)).unwrap();
    // The oracle keeps proposing leaf "1"; once it is infected the adapter
    // falls back to the remaining leaf.
    engine.attach_oracle(Box::new(ScriptedOracle::repeating(
        r#"{"source_node": "0", "target_node": "1"}"#,
    )));

    let outcome = engine.run();

    assert_eq!(outcome.stop_reason, Some(StopReason::AllInfected));
    assert_eq!(outcome.steps_executed, 2);
    assert!(engine.network().healthy_nodes().is_empty());
}

#[test]
fn test_run_crosses_chain_via_fallback() {
    // A stale oracle that always proposes 0 -> 1 still spreads the full
    // chain: the graph-wide fallback walks the frontier.
    let mut engine =
        SimulationEngine::new(chain_network(), aggressive_virus(), config(50, 7)).unwrap();
    engine.attach_oracle(Box::new(ScriptedOracle::repeating(
        r#"{"source_node": "0", "target_node": "1"}"#,
    )));

    let outcome = engine.run();

    assert_eq!(outcome.stop_reason, Some(StopReason::AllInfected));
    assert_eq!(outcome.steps_executed, 4);
    assert_eq!(engine.network().infected_nodes().len(), 5);
}

#[test]
fn test_run_halts_on_unparseable_reply() {
    let mut engine =
        SimulationEngine::new(star_network(), aggressive_virus(), config(50, 42)).unwrap();
    engine.attach_oracle(Box::new(ScriptedOracle::new(vec![
        "not json at all".to_string(),
    ])));

    let outcome = engine.run();

    assert!(outcome.stop_reason.is_none());
    assert_eq!(outcome.steps_executed, 0);
    let halted = outcome.halted_on.unwrap();
    assert_eq!(halted.code(), "decision_parse_failed");
    match halted {
        StepError::Decision(decision) => {
            assert_eq!(decision.raw_response(), Some("not json at all"));
        }
        other => panic!("unexpected error: {:?}", other),
    }

    // halting is not a step: counter untouched, only the baseline snapshot
    assert_eq!(engine.current_step(), 0);
    assert_eq!(engine.history().len(), 1);
}

#[test]
fn test_run_without_oracle_halts_structured() {
    let mut engine =
        SimulationEngine::new(star_network(), aggressive_virus(), config(50, 42)).unwrap();

    let outcome = engine.run();
    assert_eq!(
        outcome.halted_on.as_ref().map(|e| e.code()),
        Some("no_oracle_attached")
    );
    assert_eq!(outcome.steps_executed, 0);
}

#[test]
fn test_run_on_saturated_graph_reports_saturation_without_oracle_call() {
    // Everything infected already: the stop check fires before any oracle
    // call, so even an exhausted script is never consulted.
    let mut network = star_network();
    network.get_node_mut("1").unwrap().infect();
    network.get_node_mut("2").unwrap().infect();
    let mut engine = SimulationEngine::new(network, aggressive_virus(), config(50, 42)).unwrap();
    engine.attach_oracle(Box::new(ScriptedOracle::new(vec![])));

    let outcome = engine.run();
    assert_eq!(outcome.stop_reason, Some(StopReason::AllInfected));
    assert_eq!(outcome.steps_executed, 0);
}

#[test]
fn test_same_seed_same_script_byte_identical_history() {
    let run = |seed: u64| {
        let mut engine =
            SimulationEngine::new(chain_network(), aggressive_virus(), config(50, seed)).unwrap();
        engine.attach_oracle(Box::new(ScriptedOracle::repeating(
            r#"{"source_node": "0", "target_node": "1"}"#,
        )));
        engine.run();
        (
            serde_json::to_string(engine.history()).unwrap(),
            serde_json::to_string(engine.metrics().attempts()).unwrap(),
            engine.rng_state(),
        )
    };

    let (history_a, metrics_a, rng_a) = run(2024);
    let (history_b, metrics_b, rng_b) = run(2024);
    assert_eq!(history_a, history_b, "history must be byte-identical");
    assert_eq!(metrics_a, metrics_b);
    assert_eq!(rng_a, rng_b);

    let (history_c, _, _) = run(9999);
    // Outcomes here are structurally forced (every attack lands), but the
    // rng state trace differs; assert the run at least completed the same
    // spread rather than requiring divergence.
    assert_eq!(
        serde_json::from_str::<serde_json::Value>(&history_c).unwrap(),
        serde_json::from_str::<serde_json::Value>(&history_a).unwrap()
    );
}

#[test]
fn test_detected_failure_hardens_target() {
    // attack 0 vs defense 0.9 brute force: chance is negative, only the 5%
    // floor succeeds. Scan seeds for a detected failure and check the
    // hardening bookkeeping on it.
    let weak_virus = Virus::new(
        "v",
        "Feeble",
        "worm",
        VirusCharacteristics {
            attack_power: 0.0,
            spread_rate: 1.0,
            stealth: 0.0,
            mutation_rate: 1.0,
            target_hosts: vec!["home_pc".to_string()],
            behavior: "weak".to_string(),
        },
    );

    let mut seen_hardening = false;
    for seed in 1..100u64 {
        let mut network = Network::new("n", "pair");
        network.add_node(Node::new("0", "A", "home_pc", 0.0));
        network.add_node(Node::new("1", "B", "home_pc", 0.9));
        network.connect("0", "1").unwrap();
        network.get_node_mut("0").unwrap().infect();

        let mut engine =
            SimulationEngine::new(network, weak_virus.clone(), config(10, seed)).unwrap();
        let result = engine.step_manual("0", "1", AttackStrategy::BruteForce);
        let attempt = result.attempt.unwrap();

        if !attempt.success && attempt.detected {
            seen_hardening = true;
            // 0.9 + 0.15 caps at 0.99, so the applied boost is 0.09
            assert_eq!(engine.network().get_node("1").unwrap().security_level(), 0.99);
            assert_eq!(engine.metrics().attempts()[0].defense_boost, Some(0.09));
        } else {
            assert_eq!(engine.metrics().attempts()[0].defense_boost, None);
        }
    }
    assert!(seen_hardening, "no detected failure in 99 seeds");
}

#[test]
fn test_oracle_reasoning_surfaces_in_result() {
    let mut engine =
        SimulationEngine::new(star_network(), aggressive_virus(), config(5, 42)).unwrap();
    engine.attach_oracle(Box::new(ScriptedOracle::new(vec![
        r#"{"source_node": "0", "target_node": "2", "reasoning": "leaf B is undefended"}"#
            .to_string(),
    ])));

    let result = engine.step();
    assert!(result.error.is_none());
    assert_eq!(result.reasoning, "leaf B is undefended");
    assert_eq!(result.source_node.as_deref(), Some("0"));
    assert_eq!(result.target_node.as_deref(), Some("2"));
}
