use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use gcode_model::parser::tokenize_line;
use gcode_model::{ParsedLine, parse_line};

/// Generate G-code content of different patterns for benchmarking
fn generate_gcode_content(lines: usize, pattern: &str) -> String {
    let mut content = String::new();

    match pattern {
        "movement_heavy" => {
            for i in 0..lines {
                content.push_str(&format!(
                    "G1 X{:.3} Y{:.3} Z{:.3} E{:.3} F1500\n",
                    (i as f32) * 0.1,
                    (i as f32) * 0.2,
                    (i as f32) * 0.05,
                    (i as f32) * 0.02
                ));
            }
        }
        "comment_heavy" => {
            for i in 0..lines {
                content.push_str(&format!(
                    "G1 X{:.1} Y{:.1} ; Move to position {}, layer {}, segment {}\n",
                    (i as f32) * 0.1,
                    (i as f32) * 0.1,
                    i,
                    i / 100,
                    i % 100
                ));
            }
        }
        "slicer_markers" => {
            for i in 0..lines {
                match i % 4 {
                    0 => content.push_str(&format!(";LAYER:{}\n", i / 4)),
                    1 => content.push_str(";TYPE:WALL-OUTER\n"),
                    2 => content.push_str(&format!(
                        "G1 X{:.3} Y{:.3} E{:.4}\n",
                        i as f32,
                        i as f32,
                        i as f32 * 0.01
                    )),
                    3 => content.push_str("G1 E-0.8 (retract)\n"),
                    _ => unreachable!(),
                }
            }
        }
        _ => {
            for i in 0..lines {
                content.push_str(&format!("G1 X{} Y{}\n", i, i));
            }
        }
    }

    content
}

/// Benchmark parsing single lines with different patterns
fn bench_single_line_parsing(c: &mut Criterion) {
    let test_lines = vec![
        ("simple_move", "G1 X10 Y20"),
        ("complex_move", "G1 X123.456 Y789.012 Z0.3 E2.85714 F1500"),
        ("arc", "G2 X10.5 Y3.25 I-4.2 J1.75 E0.912"),
        ("with_comment", "G1 X10 Y20 ; Move to next position"),
        ("type_marker", ";TYPE:WALL-OUTER"),
        ("layer_marker", ";LAYER:128"),
        ("reset", "G92 E0"),
    ];

    let mut group = c.benchmark_group("single_line_parsing");

    for (name, line) in test_lines {
        group.bench_with_input(BenchmarkId::new("parse_line", name), &line, |b, line| {
            b.iter(|| black_box(parse_line(black_box(line))))
        });
    }

    group.finish();
}

/// Benchmark parsing throughput (bytes per second)
fn bench_parsing_throughput(c: &mut Criterion) {
    let patterns = ["movement_heavy", "comment_heavy", "slicer_markers"];

    let mut group = c.benchmark_group("parsing_throughput");

    for pattern in patterns {
        let content = generate_gcode_content(10_000, pattern);

        group.throughput(Throughput::Bytes(content.len() as u64));
        group.bench_with_input(
            BenchmarkId::new("throughput", pattern),
            &content,
            |b, content| {
                b.iter(|| {
                    let results: Vec<ParsedLine> = content
                        .lines()
                        .map(|line| black_box(parse_line(black_box(line))))
                        .collect();
                    black_box(results)
                })
            },
        );
    }

    group.finish();
}

/// Benchmark tokenization performance separately
fn bench_tokenization(c: &mut Criterion) {
    let test_lines = vec![
        ("simple", "G1 X10 Y20"),
        (
            "complex",
            "G1 X123.456 Y789.012 Z0.3 E2.85714 F1500 ; Complex move",
        ),
        ("paren_comments", "(start) G1 (inner note) X1 Y2 (tail"),
    ];

    let mut group = c.benchmark_group("tokenization");

    for (name, line) in test_lines {
        group.bench_with_input(BenchmarkId::new("tokenize", name), &line, |b, line| {
            b.iter(|| black_box(tokenize_line(black_box(line))))
        });
    }

    group.finish();
}

criterion_group!(
    parsing_benches,
    bench_single_line_parsing,
    bench_parsing_throughput,
    bench_tokenization
);

criterion_main!(parsing_benches);
