use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rowbind::CsvReader;

rowbind::csv_record! {
    pub struct Reading {
        pub station: String => "station",
        pub count: i64 => "count",
        pub valid: bool => "valid",
        pub temp: f32 => "temp",
        pub rain: f64 => "rain",
    }
}

/// Named input lists columns out of declaration order
fn generate_named(rows: usize) -> String {
    let mut csv = String::with_capacity(rows * 32);
    csv.push_str("rain,station,temp,count,valid\n");
    for i in 0..rows {
        csv.push_str(&format!(
            "{:.2},ST{:05},{:.1},{},{}\n",
            i as f64 * 0.01,
            i % 1000,
            (i % 40) as f32 - 5.0,
            i,
            i % 2 == 0
        ));
    }
    csv
}

fn generate_ordered(rows: usize) -> String {
    let mut csv = String::with_capacity(rows * 32);
    for i in 0..rows {
        csv.push_str(&format!(
            "ST{:05},{},{},{:.1},{:.2}\n",
            i % 1000,
            i,
            i % 2 == 0,
            (i % 40) as f32 - 5.0,
            i as f64 * 0.01
        ));
    }
    csv
}

fn bench_binding(c: &mut Criterion) {
    let reader = CsvReader::new();
    let mut group = c.benchmark_group("bind");

    for rows in [1_000, 10_000, 100_000] {
        group.throughput(Throughput::Elements(rows as u64));

        let named = generate_named(rows);
        group.bench_with_input(BenchmarkId::new("by_name", rows), &named, |b, input| {
            b.iter(|| {
                let mut out: Vec<Reading> = Vec::with_capacity(rows);
                reader
                    .bind_named::<Reading, _>(black_box(input.as_bytes()), &mut out)
                    .unwrap();
                out
            })
        });

        let ordered = generate_ordered(rows);
        group.bench_with_input(BenchmarkId::new("positional", rows), &ordered, |b, input| {
            b.iter(|| {
                let mut out: Vec<Box<Reading>> = Vec::with_capacity(rows);
                reader
                    .bind_ordered::<Reading, _>(black_box(input.as_bytes()), &mut out)
                    .unwrap();
                out
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_binding);
criterion_main!(benches);
