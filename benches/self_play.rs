use criterion::{black_box, criterion_group, criterion_main, Criterion};
use la_chouine::core::{GameState, Side};
use la_chouine::rules::announce;
use la_chouine::{Agent, ChouineRules, HeuristicAgent, SelfPlay, SelfPlayConfig, Suit};

fn bench_deal(c: &mut Criterion) {
    let rules = ChouineRules::default();
    let mut state = GameState::new();

    c.bench_function("deal", |b| {
        b.iter(|| {
            rules.new_game(&mut state, black_box(Some(12345)));
        })
    });
}

fn bench_agent_choice(c: &mut Criterion) {
    let rules = ChouineRules::default();
    let mut state = GameState::new();
    rules.new_game(&mut state, Some(12345));
    let agent = HeuristicAgent::default();

    c.bench_function("heuristic_choose", |b| {
        b.iter(|| agent.choose(black_box(&state.view(Side::Human))))
    });
}

fn bench_announcement_detection(c: &mut Criterion) {
    let rules = ChouineRules::default();
    let mut state = GameState::new();
    rules.new_game(&mut state, Some(12345));
    let hand = state.hand(Side::Human).to_vec();
    let trump = state.trump_suit().unwrap_or(Suit::Hearts);

    c.bench_function("detect_announcement", |b| {
        b.iter(|| {
            announce::detect(
                black_box(&hand[1..]),
                black_box(hand[0]),
                trump,
                Default::default(),
                5,
            )
        })
    });
}

fn bench_full_game(c: &mut Criterion) {
    let selfplay = SelfPlay::new(ChouineRules::default(), SelfPlayConfig::new());
    let mut state = GameState::new();
    let mut seed = 0u32;

    c.bench_function("self_play_game", |b| {
        b.iter(|| {
            seed = seed.wrapping_add(1);
            selfplay.play_game(&mut state, 0, black_box(seed))
        })
    });
}

criterion_group!(
    benches,
    bench_deal,
    bench_agent_choice,
    bench_announcement_detection,
    bench_full_game
);
criterion_main!(benches);
