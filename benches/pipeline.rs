// benches/pipeline.rs
use criterion::{criterion_group, criterion_main, Criterion, black_box};

use profile_dash::{
    analytics::Analytics,
    filter::{FilterCriteria, filter_indices},
    model::{Education, Experience, Profile},
    sort::{SortDirection, SortKey, SortSpec, sort_indices},
};

const CITIES: &[&str] = &["New York, NY", "San Francisco, CA", "Berlin", "London", "Remote"];
const COMPANIES: &[&str] = &["Acme", "Globex", "Initech", "Umbrella", "Hooli", "Stark"];
const SKILLS: &[&str] = &["Rust", "Go", "Python", "SQL", "Kubernetes", "React", "ML", "C++"];
const DEGREES: &[&str] = &["BSc", "Bachelor of Arts", "Master of Science", "MBA", "PhD", ""];

/// Deterministic synthetic records; every few fields left empty on purpose.
fn synthetic(n: usize) -> Vec<Profile> {
    (0..n)
        .map(|i| Profile {
            name: (i % 7 != 0).then(|| format!("Person {i:05}")),
            headline: Some(format!("{} engineer", SKILLS[i % SKILLS.len()])),
            location: (i % 11 != 0).then(|| CITIES[i % CITIES.len()].to_string()),
            experience: Some(
                (0..(i % 4))
                    .map(|j| Experience {
                        title: Some("Engineer".into()),
                        company: Some(COMPANIES[(i + j) % COMPANIES.len()].into()),
                        ..Default::default()
                    })
                    .collect(),
            ),
            education: Some(vec![Education {
                degree: Some(DEGREES[i % DEGREES.len()].into()),
                institution: Some(format!("Uni {}", i % 13)),
                ..Default::default()
            }]),
            skills: Some((0..(i % 5)).map(|j| SKILLS[(i * 3 + j) % SKILLS.len()].into()).collect()),
            ..Profile::new(format!("https://linkedin.com/in/person-{i}"))
        })
        .collect()
}

fn bench_pipeline(c: &mut Criterion) {
    let profiles = synthetic(5_000);

    let mut criteria = FilterCriteria::default();
    criteria.set_search("engineer");
    criteria.toggle_skill("Rust");
    criteria.toggle_skill("Go");
    criteria.has_experience = true;

    let spec = SortSpec::new(SortKey::Name, SortDirection::Desc);
    let all: Vec<usize> = (0..profiles.len()).collect();

    c.bench_function("filter_5k", |b| {
        b.iter(|| black_box(filter_indices(black_box(&profiles), black_box(&criteria)).len()))
    });

    c.bench_function("sort_5k", |b| {
        b.iter(|| black_box(sort_indices(black_box(&profiles), black_box(&all), spec).len()))
    });

    c.bench_function("analytics_5k", |b| {
        b.iter(|| black_box(Analytics::compute_owned(black_box(&profiles)).overview.total))
    });

    c.bench_function("filter_sort_analytics_5k", |b| {
        b.iter(|| {
            let ix = filter_indices(&profiles, &criteria);
            let view = sort_indices(&profiles, &ix, spec);
            let subset: Vec<&Profile> = view.iter().map(|&i| &profiles[i]).collect();
            black_box(Analytics::compute(&subset).completeness.average_percent())
        })
    });
}

criterion_group!(benches, bench_pipeline);
criterion_main!(benches);
