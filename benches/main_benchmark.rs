use criterion::{Criterion, criterion_group, criterion_main};
use cxforge::descriptor::{self, ProjectDescriptor};
use cxforge::render;
use cxforge::scanner;
use std::hint::black_box;

const MOCK_DESCRIPTOR: &str = r#"{
  "PROJECT_NAME": "benchmark_project",
  "APPS": ["tool", "viewer", "daemon"],
  "EXTERNAL_DEPENDENCIES": [],
  "CLANG_FLAGS": "-Wall -Wextra -O2 -g"
}"#;

fn bench_descriptor_parse(c: &mut Criterion) {
    c.bench_function("parse_descriptor", |b| {
        b.iter(|| {
            let _: ProjectDescriptor = serde_json::from_str(black_box(MOCK_DESCRIPTOR)).unwrap();
        })
    });
}

fn bench_name_validation(c: &mut Criterion) {
    c.bench_function("is_valid_folder_name", |b| {
        b.iter(|| {
            let _ = descriptor::is_valid_folder_name(black_box("my-app_1"));
            let _ = descriptor::is_valid_folder_name(black_box("my app"));
            let _ = descriptor::is_valid_folder_name(black_box("app/sub"));
        })
    });
}

fn bench_render_root(c: &mut Criterion) {
    let config: ProjectDescriptor = serde_json::from_str(MOCK_DESCRIPTOR).unwrap();
    c.bench_function("render_root", |b| {
        b.iter(|| render::render_root(black_box(&config)).unwrap())
    });
}

fn bench_scan_tree(c: &mut Criterion) {
    let temp_dir = std::env::temp_dir().join("cxforge_bench_scan");
    if !temp_dir.exists() {
        std::fs::create_dir_all(temp_dir.join("src/subdir")).unwrap();
        std::fs::write(temp_dir.join("main.cpp"), "int main() { return 0; }").unwrap();
        std::fs::write(temp_dir.join("src/subdir/class.cpp"), "").unwrap();
    }

    c.bench_function("scan_tree_simple", |b| {
        b.iter(|| scanner::find_cpp_files(black_box(&temp_dir)).unwrap())
    });
}

criterion_group!(
    benches,
    bench_descriptor_parse,
    bench_name_validation,
    bench_render_root,
    bench_scan_tree
);
criterion_main!(benches);
