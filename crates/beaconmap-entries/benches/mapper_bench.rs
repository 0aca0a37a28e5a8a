//! Benchmarks for entry key mapping
//!
//! Measures a full scan cycle at different batch sizes, in both modes.

use beaconmap_entries::{
    index_profiles, BeaconObservation, CorrelationContext, EntryKeyMapper, SavedProfile,
    SecurityProtocol, SelectionMode,
};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

const DESCRIPTORS: [&str; 6] = [
    "[WPA2-PSK-CCMP][ESS]",
    "[RSN-SAE-CCMP][ESS]",
    "[WPA2-PSK-CCMP][RSN-PSK+SAE-CCMP][ESS]",
    "[RSN-OWE_TRANSITION][ESS]",
    "[ESS]",
    "[WPA2-EAP-CCMP][ESS]",
];

/// A synthetic batch: `count` beacons spread over `count / 4` network names.
fn scan_batch(count: usize) -> Vec<BeaconObservation> {
    (0..count)
        .map(|i| {
            BeaconObservation::new(
                format!("net-{}", i / 4),
                Some(DESCRIPTORS[i % DESCRIPTORS.len()]),
                -30 - (i % 60) as i32,
            )
        })
        .collect()
}

fn bench_map(c: &mut Criterion) {
    let mut group = c.benchmark_group("map");

    let profiles = index_profiles(
        (0..64).map(|i| SavedProfile::new(format!("net-{}", i), SecurityProtocol::Sae)),
    );

    for mode in [SelectionMode::Single, SelectionMode::MultiKey] {
        let mapper = EntryKeyMapper::new(mode, CorrelationContext::default());
        for &count in &[16usize, 256, 4096] {
            let batch = scan_batch(count);
            group.throughput(Throughput::Elements(count as u64));
            group.bench_with_input(
                BenchmarkId::new(format!("{:?}", mode), count),
                &batch,
                |b, batch| b.iter(|| mapper.map(black_box(batch), Some(&profiles))),
            );
        }
    }
    group.finish();
}

criterion_group!(benches, bench_map);
criterion_main!(benches);
