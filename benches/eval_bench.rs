//! Benchmarks for hand evaluation and simulation.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use holdem_odds::cards::{parse_cards, Card};
use holdem_odds::eval::{best_hand, evaluate_hand};
use holdem_odds::sim::SimulationConfig;

fn five_card_benchmark(c: &mut Criterion) {
    let hands: Vec<[Card; 5]> = ["As Ks Qs Js Ts", "2c 2d 2h 9s 9c", "Ah Kd 9c 7s 3h", "5d 4c 3s 2h Ad"]
        .iter()
        .map(|s| {
            let cards = parse_cards(s).unwrap();
            [cards[0], cards[1], cards[2], cards[3], cards[4]]
        })
        .collect();

    c.bench_function("evaluate_5_cards", |b| {
        b.iter(|| {
            for &hand in &hands {
                black_box(evaluate_hand(black_box(hand)));
            }
        })
    });
}

fn seven_card_benchmark(c: &mut Criterion) {
    let pool = parse_cards("As Kd Qh Jc 9s 4d 2c").unwrap();

    c.bench_function("best_of_7_cards", |b| b.iter(|| best_hand(black_box(&pool))));
}

fn simulation_benchmark(c: &mut Criterion) {
    let simulator = SimulationConfig::default()
        .with_players(6)
        .with_hole_cards(parse_cards("Ah Kh").unwrap())
        .with_community(parse_cards("Qh 7d 2c").unwrap())
        .with_trials(10_000)
        .with_threads(1)
        .with_seed(42)
        .build_simulator()
        .unwrap();

    c.bench_function("simulate_10k_trials_6_players", |b| {
        b.iter(|| black_box(simulator.run().wins))
    });
}

criterion_group!(benches, five_card_benchmark, seven_card_benchmark, simulation_benchmark);
criterion_main!(benches);
