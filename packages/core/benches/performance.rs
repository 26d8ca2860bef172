//! Performance benchmarks for admin tree operations
//!
//! Run with: `cargo bench -p admin-tree-core`
//!
//! These benchmarks measure the operations run on every keystroke or click:
//! - Search filtering over forests of increasing size
//! - Visible-row flattening with everything expanded
//! - Copy-on-write mutations (insert, delete)
//! - Loading a forest from a JSON file

use admin_tree_core::source::{ForestSource, JsonFileSource};
use admin_tree_core::tree::{
    collect_ids, delete_subtree, filter_forest, insert_child, visible_rows, ExpandState,
};
use admin_tree_core::Node;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use tempfile::TempDir;
use tokio::runtime::Runtime;

/// Generate a forest with `width` children per node, `depth` levels deep
fn generate_forest(width: usize, depth: usize) -> Vec<Node> {
    fn level(prefix: &str, width: usize, depth: usize) -> Vec<Node> {
        if depth == 0 {
            return Vec::new();
        }
        (0..width)
            .map(|i| {
                let id = if prefix.is_empty() {
                    i.to_string()
                } else {
                    format!("{}-{}", prefix, i)
                };
                let label = format!("Department {}", id);
                let children = level(&id, width, depth - 1);
                Node::branch(id.clone(), label, children)
                    .with_secondary(format!("Manager {}", i % 7))
            })
            .collect()
    }
    level("", width, depth)
}

/// Benchmark search filtering
///
/// A selective query (few matches, deep ancestors) and a broad one (most
/// nodes match) bracket the realistic range.
fn bench_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter_forest");

    for (width, depth) in [(5, 4), (8, 4), (10, 4)] {
        let forest = generate_forest(width, depth);
        let size = collect_ids(&forest).len();

        group.bench_with_input(BenchmarkId::new("selective", size), &forest, |b, forest| {
            b.iter(|| black_box(filter_forest(forest, black_box("1-2-3"))))
        });
        group.bench_with_input(BenchmarkId::new("broad", size), &forest, |b, forest| {
            b.iter(|| black_box(filter_forest(forest, black_box("department"))))
        });
    }

    group.finish();
}

/// Benchmark row flattening with every branch expanded
fn bench_visible_rows(c: &mut Criterion) {
    let mut group = c.benchmark_group("visible_rows");

    for (width, depth) in [(5, 4), (10, 4)] {
        let forest = generate_forest(width, depth);
        let ids = collect_ids(&forest);
        let expanded: ExpandState = ids.iter().map(String::as_str).collect();

        group.bench_with_input(
            BenchmarkId::new("all_expanded", ids.len()),
            &(forest, expanded),
            |b, (forest, expanded)| b.iter(|| black_box(visible_rows(forest, expanded).len())),
        );
    }

    group.finish();
}

/// Benchmark copy-on-write mutations on a ~1100 node forest
fn bench_mutations(c: &mut Criterion) {
    let forest = generate_forest(10, 3);

    c.bench_function("insert_child_deep", |b| {
        b.iter(|| {
            black_box(insert_child(
                &forest,
                Some("9-9-9"),
                Node::new("new", "New Department"),
            ))
        })
    });

    c.bench_function("delete_subtree_root", |b| {
        b.iter(|| black_box(delete_subtree(&forest, black_box("5"))))
    });
}

/// Benchmark loading and validating a JSON forest file
fn bench_json_load(c: &mut Criterion) {
    let rt = Runtime::new().unwrap();
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("forest.json");
    let forest = generate_forest(8, 4);
    std::fs::write(&path, serde_json::to_string(&forest).unwrap()).unwrap();

    let source = JsonFileSource::<Node>::new(&path);

    let mut group = c.benchmark_group("json_file_source");
    group.sample_size(20);
    group.bench_function("list_4680_nodes", |b| {
        b.iter(|| rt.block_on(async { black_box(source.list().await.unwrap()) }))
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_filter,
    bench_visible_rows,
    bench_mutations,
    bench_json_load
);
criterion_main!(benches);
