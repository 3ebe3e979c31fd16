// Benchmark for the per-frame countdown work
// Measures controller polling, view building and tone synthesis

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use egg_timer::services::alarm::ToneSpec;
use egg_timer::services::timer::{CountdownController, TICK_PERIOD};
use std::time::Instant;

fn bench_full_run(c: &mut Criterion) {
    c.bench_function("advance 600 ticks", |b| {
        b.iter(|| {
            let start = Instant::now();
            let mut controller = CountdownController::new();
            controller.select_preset(600, "hard-boiled");
            controller.start(start);
            for tick in 1..=600u32 {
                black_box(controller.advance(start + TICK_PERIOD * tick));
            }
        })
    });
}

fn bench_view(c: &mut Criterion) {
    let mut controller = CountdownController::new();
    controller.select_preset(420, "medium");
    controller.start(Instant::now());

    c.bench_function("build view", |b| b.iter(|| black_box(controller.view())));
}

fn bench_tone(c: &mut Criterion) {
    let tone = ToneSpec::default();
    c.bench_function("render fallback tone", |b| {
        b.iter(|| black_box(tone.to_wav_bytes()))
    });
}

criterion_group!(benches, bench_full_run, bench_view, bench_tone);
criterion_main!(benches);
