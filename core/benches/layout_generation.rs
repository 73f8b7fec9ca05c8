use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use sweeper_core::*;

fn generate_layouts(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate_layout");

    for (size, mines) in [(9, 10), (16, 40), (30, 180)] {
        let config = GameConfig::new(size, mines).expect("valid benchmark config");
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{size}x{size}/{mines}")),
            &config,
            |b, &config| {
                let mut generator = RandomLayoutGenerator::new(0xDE70);
                b.iter(|| {
                    let layout = generator.generate(black_box(config)).unwrap();
                    black_box(Board::from_layout(&layout))
                });
            },
        );
    }

    group.finish();
}

fn play_full_game(c: &mut Criterion) {
    c.bench_function("clear_default_board", |b| {
        b.iter(|| {
            let mut engine = Sweeper::with_seed(GameConfig::default(), 17).unwrap();
            for index in 0..81 {
                if !engine.cell(index).unwrap().is_mine {
                    black_box(engine.reveal(index).unwrap());
                }
            }
            engine.drain_events().count()
        });
    });
}

criterion_group!(benches, generate_layouts, play_full_game);
criterion_main!(benches);
