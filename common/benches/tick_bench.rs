use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use common::games::SessionRng;
use common::games::snake::{
    spawn_food_cell, Direction, Point, SnakeSession, SnakeSessionSettings,
};

fn run_session(settings: SnakeSessionSettings, ticks: usize) -> u32 {
    let mut session = SnakeSession::new(settings, SessionRng::new(1234));
    session.start();
    let turns = [Direction::Down, Direction::Left, Direction::Up, Direction::Right];

    for i in 0..ticks {
        if session.is_over() {
            session.restart();
        }
        if i % 4 == 0 {
            session.set_direction_intent(turns[(i / 4) % turns.len()]);
        }
        if i % 50 == 0 {
            session.spawn_rock_tick();
        }
        session.tick();
    }
    session.high_score()
}

fn bench_classic_ticks(c: &mut Criterion) {
    c.bench_function("classic_1000_ticks", |b| {
        b.iter(|| run_session(SnakeSessionSettings::classic(), black_box(1000)))
    });
}

fn bench_google_ticks(c: &mut Criterion) {
    c.bench_function("google_1000_ticks", |b| {
        b.iter(|| run_session(SnakeSessionSettings::google(), black_box(1000)))
    });
}

fn bench_food_spawn_crowded(c: &mut Criterion) {
    let settings = SnakeSessionSettings::classic();
    let mut session = SnakeSession::new(settings.clone(), SessionRng::new(99));
    session.start();
    let state = session.state();
    let rocks: Vec<_> = (0..20)
        .flat_map(|x| (0..15).map(move |y| Point::new(x, y)))
        .filter(|p| !state.snake.occupies(*p))
        .collect();
    let mut rng = SessionRng::new(5);

    c.bench_function("food_spawn_crowded", |b| {
        b.iter(|| {
            spawn_food_cell(
                &mut rng,
                &settings.field_size,
                &state.snake,
                &state.foods,
                black_box(&rocks),
            )
        })
    });
}

criterion_group!(benches, bench_classic_ticks, bench_google_ticks, bench_food_spawn_crowded);
criterion_main!(benches);
