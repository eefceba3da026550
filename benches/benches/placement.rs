// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Rect, Size};
use understory_placement::{Mode, Request, Side, solve};

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
    fn next_f64(&mut self) -> f64 {
        let v = self.next_u64() >> 11;
        (v as f64) / ((1u64 << 53) as f64)
    }
}

const VIEWPORT: Rect = Rect::new(0.0, 0.0, 1920.0, 1080.0);
const SIDES: [Side; 5] = [Side::Top, Side::Bottom, Side::Left, Side::Right, Side::Center];

fn gen_requests(count: usize, mode: Mode, seed: u64) -> Vec<Request> {
    let mut rng = Rng::new(seed);
    (0..count)
        .map(|i| {
            let trigger = Rect::from_origin_size(
                (rng.next_f64() * 1900.0, rng.next_f64() * 1060.0),
                (4.0 + rng.next_f64() * 120.0, 4.0 + rng.next_f64() * 40.0),
            );
            let container = Size::new(40.0 + rng.next_f64() * 400.0, 20.0 + rng.next_f64() * 300.0);
            Request::new(trigger, container, VIEWPORT)
                .with_side(SIDES[i % SIDES.len()])
                .with_mode(mode)
        })
        .collect()
}

fn bench_solve(c: &mut Criterion) {
    let mut group = c.benchmark_group("solve");
    for (name, mode) in [("menu", Mode::Menu), ("modal", Mode::Modal)] {
        let reqs = gen_requests(1024, mode, 0x5eed_0001);
        group.throughput(Throughput::Elements(reqs.len() as u64));
        group.bench_function(format!("random_{}", name), |b| {
            b.iter(|| {
                for r in &reqs {
                    black_box(solve(black_box(r)));
                }
            });
        });
    }

    // Boundary barely taller than the trigger: every anchored side flips and clamps.
    let cramped: Vec<Request> = gen_requests(1024, Mode::Menu, 0x5eed_0002)
        .into_iter()
        .filter(|r| r.preferred != Side::Center)
        .map(|r| r.with_boundary(r.trigger.inflate(0.0, 4.0)))
        .collect();
    group.throughput(Throughput::Elements(cramped.len() as u64));
    group.bench_function("flip_and_clamp", |b| {
        b.iter(|| {
            for r in &cramped {
                black_box(solve(black_box(r)));
            }
        });
    });
    group.finish();
}

criterion_group!(benches, bench_solve);
criterion_main!(benches);
