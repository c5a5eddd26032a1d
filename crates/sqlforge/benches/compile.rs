use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use sqlforge::{Dialect, Query};

/// Build a query with `n` equality predicates:
/// SELECT * FROM t WHERE col0 = 0 AND col1 = 1 ...
fn build_select(n: usize) -> Query {
    let mut q = Query::new().select(["*"]).from("t");
    for i in 0..n {
        q = q.where_eq(&format!("col{i}"), i as i64);
    }
    q
}

fn bench_to_sql(c: &mut Criterion) {
    let mut group = c.benchmark_group("compile/to_sql");

    for n in [1, 5, 10, 50, 100] {
        let q = build_select(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &q, |b, q| {
            b.iter(|| black_box(q.to_sql(Dialect::PostgreSql).unwrap()));
        });
    }

    group.finish();
}

fn bench_to_sql_params(c: &mut Criterion) {
    let mut group = c.benchmark_group("compile/to_sql_params");

    for n in [1, 5, 10, 50, 100] {
        let q = build_select(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &q, |b, q| {
            b.iter(|| black_box(q.to_sql_params(Dialect::SqlServer).unwrap()));
        });
    }

    group.finish();
}

fn bench_build_and_compile(c: &mut Criterion) {
    let mut group = c.benchmark_group("compile/build_and_compile");

    for n in [1, 5, 10, 50, 100] {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| {
                let q = build_select(n);
                black_box(q.to_sql(Dialect::PostgreSql).unwrap());
            });
        });
    }

    group.finish();
}

fn bench_in_list(c: &mut Criterion) {
    let mut group = c.benchmark_group("compile/in_list");

    for n in [5, 20, 100, 500] {
        let ids: Vec<i64> = (0..n).collect();
        group.bench_with_input(BenchmarkId::from_parameter(n), &ids, |b, ids| {
            b.iter(|| {
                let q = Query::new().from("t").where_in("id", ids.clone());
                black_box(q.to_sql(Dialect::PostgreSql).unwrap());
            });
        });
    }

    group.finish();
}

fn bench_dialect_fanout(c: &mut Criterion) {
    let q = build_select(10).order_by("col0").limit(25).offset(50);
    let mut group = c.benchmark_group("compile/dialect_fanout");

    for dialect in Dialect::ALL {
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{dialect:?}")),
            &dialect,
            |b, &dialect| {
                b.iter(|| black_box(q.to_sql(dialect).unwrap()));
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_to_sql,
    bench_to_sql_params,
    bench_build_and_compile,
    bench_in_list,
    bench_dialect_fanout
);
criterion_main!(benches);
