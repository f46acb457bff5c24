use chrono::Utc;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use uuid::Uuid;

use quizdeck_core::model::{Answer, Question, Questionnaire};
use quizdeck_core::score::score;

fn synthetic(questions: usize, answers: usize) -> (Questionnaire, Vec<Uuid>) {
    let questionnaire = Questionnaire {
        id: Uuid::new_v4(),
        title: "bench".into(),
        questions: (0..questions)
            .map(|qi| Question {
                id: Uuid::new_v4(),
                text: format!("question {qi}"),
                answers: (0..answers)
                    .map(|ai| Answer {
                        id: Uuid::new_v4(),
                        text: format!("answer {ai}"),
                        weight: ai as f64,
                        is_correct: ai == 0,
                    })
                    .collect(),
            })
            .collect(),
        created_at: Utc::now(),
    };
    let selections = questionnaire
        .questions
        .iter()
        .map(|q| q.answers[answers / 2].id)
        .collect();
    (questionnaire, selections)
}

fn bench_score(c: &mut Criterion) {
    let mut group = c.benchmark_group("score");
    for &questions in &[10usize, 100] {
        let (questionnaire, selections) = synthetic(questions, 5);
        group.bench_with_input(
            BenchmarkId::from_parameter(questions),
            &questions,
            |b, _| b.iter(|| score(&questionnaire, &selections)),
        );
    }
    group.finish();
}

criterion_group!(benches, bench_score);
criterion_main!(benches);
