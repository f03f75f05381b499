use std::fs;
use std::path::Path;

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use tempfile::TempDir;

use dirstride_walk::{SearchScope, collect, count};

/// Fixture with `width` directories of `width` files each, three levels deep.
fn build_tree(width: usize) -> TempDir {
    let temp = TempDir::new().unwrap();
    for d in 0..width {
        let dir = temp.path().join(format!("dir{d}"));
        fs::create_dir(&dir).unwrap();
        for f in 0..width {
            fs::write(dir.join(format!("file{f}.txt")), "bench").unwrap();
        }
        let nested = dir.join("nested");
        fs::create_dir(&nested).unwrap();
        for f in 0..width {
            fs::write(nested.join(format!("deep{f}.log")), "bench").unwrap();
        }
    }
    temp
}

fn bench_count_recursive(c: &mut Criterion) {
    let temp = build_tree(16);
    c.bench_function("count_recursive", |b| {
        b.iter(|| {
            let counts = count(
                black_box(temp.path()),
                black_box("*"),
                SearchScope::Recursive,
            )
            .unwrap();
            black_box(counts)
        })
    });
}

fn bench_collect_recursive(c: &mut Criterion) {
    let temp = build_tree(16);
    c.bench_function("collect_recursive", |b| {
        b.iter(|| {
            let records = collect(
                black_box(temp.path()),
                black_box("*"),
                SearchScope::Recursive,
            )
            .unwrap();
            black_box(records)
        })
    });
}

fn bench_collect_glob(c: &mut Criterion) {
    let temp = build_tree(16);
    // `[a-z]*` matches every fixture name, so this measures matcher
    // overhead against the `*` fast path above.
    c.bench_function("collect_glob", |b| {
        b.iter(|| {
            let records = collect(
                black_box(temp.path()),
                black_box("[a-z]*"),
                SearchScope::Recursive,
            )
            .unwrap();
            black_box(records)
        })
    });
}

/// Call-stack recursion over `read_dir`, the baseline the explicit
/// stack replaces.
fn read_dir_tally(dir: &Path) -> (u64, u64) {
    let mut files = 0;
    let mut dirs = 0;
    if let Ok(entries) = fs::read_dir(dir) {
        for entry in entries.flatten() {
            if entry.file_type().map(|t| t.is_dir()).unwrap_or(false) {
                dirs += 1;
                let (f, d) = read_dir_tally(&entry.path());
                files += f;
                dirs += d;
            } else {
                files += 1;
            }
        }
    }
    (files, dirs)
}

fn bench_std_read_dir(c: &mut Criterion) {
    let temp = build_tree(16);
    c.bench_function("std_read_dir_recursive", |b| {
        b.iter(|| black_box(read_dir_tally(black_box(temp.path()))))
    });
}

criterion_group!(
    benches,
    bench_count_recursive,
    bench_collect_recursive,
    bench_collect_glob,
    bench_std_read_dir
);
criterion_main!(benches);
