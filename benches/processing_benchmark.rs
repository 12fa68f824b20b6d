use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use measurement_generator::models::StationList;
use measurement_generator::processors::{estimate_file_size, SamplePool};
use measurement_generator::readers::StationReader;
use measurement_generator::utils::NoProgress;
use measurement_generator::writers::MeasurementWriter;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::io::Cursor;
use std::path::Path;

// Create a reference list shaped like weather_stations.csv
fn create_station_names(count: usize) -> Vec<String> {
    (0..count)
        .map(|i| format!("Test Station {};{:.4}", i, (i as f64) * 0.37 - 45.0))
        .collect()
}

fn create_station_list(count: usize) -> StationList {
    create_station_names(count)
        .into_iter()
        .map(|line| line.split(';').next().unwrap_or_default().to_string())
        .collect()
}

fn benchmark_write_measurements(c: &mut Criterion) {
    let stations = create_station_list(413);
    let estimate = estimate_file_size(&stations, 1).unwrap();

    let mut group = c.benchmark_group("write_measurements");

    for batch_size in [1_000, 10_000, 50_000] {
        let rows = 100_000u64;
        group.throughput(Throughput::Elements(rows));
        group.bench_with_input(
            BenchmarkId::new("batch_size", batch_size),
            &batch_size,
            |b, &batch_size| {
                let writer = MeasurementWriter::new().with_batch_size(batch_size).unwrap();
                b.iter(|| {
                    let mut rng = ChaCha8Rng::seed_from_u64(69_420);
                    writer
                        .write_measurements(
                            &mut std::io::sink(),
                            black_box(&stations),
                            rows,
                            estimate.line_capacity(),
                            &mut rng,
                            &mut NoProgress,
                        )
                        .unwrap()
                })
            },
        );
    }

    group.finish();
}

fn benchmark_sample_pool(c: &mut Criterion) {
    let stations = create_station_list(41_343);

    c.bench_function("sample_pool_10k", |b| {
        b.iter(|| {
            let mut rng = ChaCha8Rng::seed_from_u64(1);
            SamplePool::build(black_box(&stations), 10_000, &mut rng).unwrap()
        })
    });
}

fn benchmark_station_reader(c: &mut Criterion) {
    let mut input = String::from("# Adapted from https://simplemaps.com/data/world-cities\n");
    for line in create_station_names(10_000) {
        input.push_str(&line);
        input.push('\n');
    }

    c.bench_function("read_station_names", |b| {
        b.iter(|| {
            StationReader::new()
                .read_from(Cursor::new(black_box(input.as_bytes())), Path::new("bench"))
                .unwrap()
        })
    });
}

criterion_group!(
    benches,
    benchmark_write_measurements,
    benchmark_sample_pool,
    benchmark_station_reader
);
criterion_main!(benches);
