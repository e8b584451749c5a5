use atom_masks::{MonomerPair, PairMaskBuilder, PairMode};
use candle_core::{Device, Tensor};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

/// Half-filled rows: the first `max_atoms / 2` slots are real carbon atoms.
fn half_padded(batch: usize, max_atoms: usize, device: &Device) -> Tensor {
    let mut data = vec![0u32; batch * max_atoms];
    for row in data.chunks_mut(max_atoms) {
        for value in row.iter_mut().take(max_atoms / 2) {
            *value = 6;
        }
    }
    Tensor::from_vec(data, (batch, max_atoms), device).expect("numbers")
}

/// Splits the real prefix into two monomers; both index lists are zero-padded.
fn split_monomers(batch: usize, max_atoms: usize, device: &Device) -> (Tensor, Tensor) {
    let half = max_atoms / 2;
    let quarter = half / 2;
    let row_a = (0..half).map(|i| if i < quarter { i as u32 } else { 0 });
    let row_b = (0..half).map(|i| if i < half - quarter { (quarter + i) as u32 } else { 0 });
    let a: Vec<u32> = (0..batch).flat_map(|_| row_a.clone()).collect();
    let b: Vec<u32> = (0..batch).flat_map(|_| row_b.clone()).collect();
    (
        Tensor::from_vec(a, (batch, half), device).expect("monomer A"),
        Tensor::from_vec(b, (batch, half), device).expect("monomer B"),
    )
}

fn bench_pair_masks(c: &mut Criterion) {
    let device = Device::Cpu;
    let batch = 16usize;
    let atom_counts = &[32usize, 128, 512];
    let builder = PairMaskBuilder::default();

    let mut group = c.benchmark_group("pair_mask");
    for &max_atoms in atom_counts {
        let numbers = half_padded(batch, max_atoms, &device);
        let (mon_a, mon_b) = split_monomers(batch, max_atoms, &device);
        group.throughput(Throughput::Elements((batch * max_atoms * max_atoms) as u64));

        for (name, mask_diagonal) in [("masked_diagonal", true), ("unmasked_diagonal", false)] {
            group.bench_with_input(BenchmarkId::new(name, max_atoms), &numbers, |b, numbers| {
                b.iter(|| {
                    let mode = PairMode::WholeMolecule { mask_diagonal };
                    let mask = builder.build(black_box(numbers), mode).expect("pair mask");
                    black_box(mask);
                });
            });
        }

        group.bench_with_input(
            BenchmarkId::new("monomer", max_atoms),
            &(numbers.clone(), mon_a, mon_b),
            |b, (numbers, mon_a, mon_b)| {
                b.iter(|| {
                    let mode = PairMode::MonomerRestricted {
                        mask_diagonal: true,
                        monomers: MonomerPair::new(mon_a, mon_b),
                    };
                    let mask = builder.build(black_box(numbers), mode).expect("monomer mask");
                    black_box(mask);
                });
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_pair_masks);
criterion_main!(benches);
