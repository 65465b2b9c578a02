//! Benchmarks for arithmetic operations

use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use fixed_decimal::{FixedDecimal, DIV_INCR_FRAC};

criterion_main!(arithmetic);

criterion_group!(
    name = arithmetic;
    config = Criterion::default()
                       .sample_size(300)
                       .measurement_time(Duration::from_secs(5));
    targets =
        bench_parse,
        bench_to_string,
        bench_add,
        bench_mul,
        bench_div,
        bench_rem,
        bench_round,
);

/// Deterministic corpus of mixed-width decimal strings.
fn string_corpus() -> Vec<String> {
    let mut rng = oorandom::Rand64::new(0x5EED_CAFE);
    let mut out = Vec::with_capacity(64);
    for _ in 0..64 {
        let mut s = String::new();
        if rng.rand_u64() & 1 == 1 {
            s.push('-');
        }
        // non-zero leading digit keeps divisors usable
        s.push((b'1' + rng.rand_range(0..9) as u8) as char);
        for _ in 0..rng.rand_range(0..18) {
            s.push((b'0' + rng.rand_range(0..10) as u8) as char);
        }
        let frac_digits = rng.rand_range(0..10);
        if frac_digits > 0 {
            s.push('.');
            for _ in 0..frac_digits {
                s.push((b'0' + rng.rand_range(0..10) as u8) as char);
            }
        }
        out.push(s);
    }
    out
}

fn decimal_corpus() -> Vec<FixedDecimal> {
    string_corpus().iter().map(|s| s.parse().unwrap()).collect()
}

fn shuffled_pairs(decs: &[FixedDecimal], seed: u64) -> Vec<(FixedDecimal, FixedDecimal)> {
    let mut pairs = decs
        .iter()
        .enumerate()
        .flat_map(|(i, &x)| decs.iter().skip(i + 1).map(move |&y| (x, y)))
        .collect::<Vec<(FixedDecimal, FixedDecimal)>>();

    let mut rng = oorandom::Rand32::new(seed);
    for i in (1..pairs.len()).rev() {
        let j = rng.rand_u32() as usize % i;
        pairs.swap(i, j);
    }
    pairs
}

fn bench_parse(c: &mut Criterion) {
    let strings = string_corpus();
    c.bench_function("parse", |b| {
        b.iter(|| {
            for s in &strings {
                black_box(s.parse::<FixedDecimal>().unwrap());
            }
        })
    });
}

fn bench_to_string(c: &mut Criterion) {
    let decs = decimal_corpus();
    c.bench_function("to_string", |b| {
        b.iter(|| {
            for d in &decs {
                black_box(d.to_string_with_scale(-1));
            }
        })
    });
}

fn bench_add(c: &mut Criterion) {
    let decs = decimal_corpus();
    let pairs = shuffled_pairs(&decs, 1);
    c.bench_function("add", |b| {
        b.iter(|| {
            let mut dest = FixedDecimal::zero();
            for (x, y) in &pairs {
                x.add_to(y, &mut dest);
                black_box(&dest);
            }
        })
    });
}

fn bench_mul(c: &mut Criterion) {
    let decs = decimal_corpus();
    let pairs = shuffled_pairs(&decs, 2);
    c.bench_function("mul", |b| {
        b.iter(|| {
            let mut dest = FixedDecimal::zero();
            for (x, y) in &pairs {
                x.mul_to(y, &mut dest).unwrap();
                black_box(&dest);
            }
        })
    });
}

fn bench_div(c: &mut Criterion) {
    let decs = decimal_corpus();
    let pairs = shuffled_pairs(&decs, 3);
    c.bench_function("div", |b| {
        b.iter(|| {
            let mut dest = FixedDecimal::zero();
            for (x, y) in &pairs {
                x.div_to(y, &mut dest, DIV_INCR_FRAC).unwrap();
                black_box(&dest);
            }
        })
    });
}

fn bench_rem(c: &mut Criterion) {
    let decs = decimal_corpus();
    let pairs = shuffled_pairs(&decs, 4);
    c.bench_function("rem", |b| {
        b.iter(|| {
            let mut dest = FixedDecimal::zero();
            for (x, y) in &pairs {
                x.rem_to(y, &mut dest).unwrap();
                black_box(&dest);
            }
        })
    });
}

fn bench_round(c: &mut Criterion) {
    let decs = decimal_corpus();
    c.bench_function("round", |b| {
        b.iter(|| {
            let mut dest = FixedDecimal::zero();
            for (i, d) in decs.iter().enumerate() {
                d.round_to(&mut dest, (i % 12) as i32 - 2);
                black_box(&dest);
            }
        })
    });
}
