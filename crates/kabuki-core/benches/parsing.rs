use criterion::{black_box, criterion_group, criterion_main, Criterion};

use kabuki_core::parser::{parse_quiz_str, QuizFormat};

fn bench_quiz_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("quiz_parsing");

    let small_json = generate_quiz_json(5);
    let large_json = generate_quiz_json(200);
    let small_toml = generate_quiz_toml(5);

    group.bench_function("json_5_questions", |b| {
        b.iter(|| {
            parse_quiz_str(
                black_box(&small_json),
                QuizFormat::Json,
                black_box("bench.json"),
            )
        })
    });

    group.bench_function("json_200_questions", |b| {
        b.iter(|| {
            parse_quiz_str(
                black_box(&large_json),
                QuizFormat::Json,
                black_box("bench.json"),
            )
        })
    });

    group.bench_function("toml_5_questions", |b| {
        b.iter(|| {
            parse_quiz_str(
                black_box(&small_toml),
                QuizFormat::Toml,
                black_box("bench.toml"),
            )
        })
    });

    group.finish();
}

fn generate_quiz_json(n: usize) -> String {
    let questions: Vec<String> = (0..n)
        .map(|i| match i % 3 {
            0 => format!(
                r#"{{"prompt": "Question {i}", "image": "", "type": "single_choice",
                    "choices": ["A", "B", "C", "D"], "answer": "A", "time_limit": 30, "points": 10}}"#
            ),
            1 => format!(
                r#"{{"prompt": "Question {i}", "image": "", "type": "select_two",
                    "choices": ["A", "B", "C", "D"], "answer": ["B", "D"], "time_limit": 30, "points": 20}}"#
            ),
            _ => format!(
                r#"{{"prompt": "Question {i}", "image": "", "type": "free_response",
                    "choices": [], "answer": ["answer {i}", "alt {i}"], "time_limit": 30, "points": 5}}"#
            ),
        })
        .collect();

    format!(
        r#"{{"quiz_id": "bench", "name": "Benchmark", "description": "Generated",
            "image": "", "questions": [{}]}}"#,
        questions.join(",")
    )
}

fn generate_quiz_toml(n: usize) -> String {
    let mut s = String::from(
        r#"quiz_id = "bench"
name = "Benchmark"
description = "Generated"
image = ""
"#,
    );
    for i in 0..n {
        s.push_str(&format!(
            r#"
[[questions]]
prompt = "Question {i}"
image = ""
type = "single_choice"
choices = ["A", "B", "C", "D"]
answer = "A"
time_limit = 30
points = 10
"#
        ));
    }
    s
}

criterion_group!(benches, bench_quiz_parsing);
criterion_main!(benches);
