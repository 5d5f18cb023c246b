use bracefmt::{args, format, Value};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn benchmark_plain_substitution(c: &mut Criterion) {
    let arguments = args!["Alice", 25, 95.5];

    c.bench_function("plain_substitution", |b| {
        b.iter(|| format(black_box("Name: {}, Age: {}, Score: {}"), &arguments))
    });
}

fn benchmark_literal_only(c: &mut Criterion) {
    let mut group = c.benchmark_group("literal_only");

    let short = "short";
    let medium = "This is a medium length template with no placeholders at all";
    let long = "This is a very long template that contains a lot of text and no placeholders, so the scanner should fly through it in a single copy";

    group.bench_function("short_template", |b| {
        b.iter(|| format(black_box(short), &[]))
    });

    group.bench_function("medium_template", |b| {
        b.iter(|| format(black_box(medium), &[]))
    });

    group.bench_function("long_template", |b| b.iter(|| format(black_box(long), &[])));

    group.finish();
}

fn benchmark_many_placeholders(c: &mut Criterion) {
    let mut group = c.benchmark_group("many_placeholders");

    for size in [10, 50, 100, 500].iter() {
        let template: String = (0..*size).map(|_| "{} ").collect();
        let arguments: Vec<Value> = (0..*size).map(Value::from).collect();

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| format(black_box(&template), &arguments))
        });
    }
    group.finish();
}

fn benchmark_explicit_indices(c: &mut Criterion) {
    let arguments = args!["x", "y", "z"];

    c.bench_function("explicit_indices", |b| {
        b.iter(|| format(black_box("{2} {1} {0} {1} {2}"), &arguments))
    });
}

fn benchmark_format_specs(c: &mut Criterion) {
    let mut group = c.benchmark_group("format_specs");

    let integers = args![255u32];
    let floats = args![3.141592653589793];
    let strings = args!["Bob"];

    group.bench_function("zero_padded_hex", |b| {
        b.iter(|| format(black_box("{:08x}"), &integers))
    });

    group.bench_function("fixed_precision", |b| {
        b.iter(|| format(black_box("{:.2f}"), &floats))
    });

    group.bench_function("padded_string", |b| {
        b.iter(|| format(black_box("{:<10}"), &strings))
    });

    group.bench_function("binary_bits", |b| {
        b.iter(|| format(black_box("{:16b}"), &integers))
    });

    group.finish();
}

fn benchmark_escapes(c: &mut Criterion) {
    let arguments = args![1];

    c.bench_function("escaped_braces", |b| {
        b.iter(|| format(black_box("{{{}}} and some {{literal}} text"), &arguments))
    });
}

criterion_group!(
    benches,
    benchmark_plain_substitution,
    benchmark_literal_only,
    benchmark_many_placeholders,
    benchmark_explicit_indices,
    benchmark_format_specs,
    benchmark_escapes
);
criterion_main!(benches);
