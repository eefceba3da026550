// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use understory_overlay::{Action, Coordinator, OverlayConfig};

fn populated(n: usize) -> (Coordinator, Vec<String>) {
    let mut coord = Coordinator::new();
    let ids: Vec<String> = (0..n).map(|i| format!("overlay-{i}")).collect();
    for id in &ids {
        coord.register(id.as_str(), OverlayConfig::menu());
        let _ = coord.subscribe(id, |state| {
            black_box(state);
        });
    }
    (coord, ids)
}

fn bench_dispatch(c: &mut Criterion) {
    let mut group = c.benchmark_group("dispatch");
    for &n in &[16_usize, 256] {
        group.throughput(Throughput::Elements((n * 4) as u64));
        group.bench_function(format!("toggle_outside_n{}", n), |b| {
            b.iter_batched(
                || populated(n),
                |(mut coord, ids)| {
                    let bus = coord.bus();
                    for id in &ids {
                        bus.send(id.as_str(), Action::Toggle);
                        bus.send(id.as_str(), Action::Open);
                        bus.send(id.as_str(), Action::Outside);
                        bus.send(id.as_str(), Action::Esc);
                    }
                    black_box(coord.drain());
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.bench_function("unknown_ids_dropped", |b| {
        let (mut coord, _) = populated(64);
        b.iter(|| black_box(coord.dispatch("missing", Action::Open)));
    });
    group.finish();
}

criterion_group!(benches, bench_dispatch);
criterion_main!(benches);
