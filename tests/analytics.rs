// tests/analytics.rs
use profile_dash::analytics::{
    Analytics, CompletenessCategory, EducationLevel, frequency, share_of_total,
};
use profile_dash::filter::{FilterCriteria, apply};
use profile_dash::model::{Education, Experience, Profile, Project};
use profile_dash::sort::{SortSpec, sorted};

fn with_location(url: &str, loc: &str) -> Profile {
    Profile { location: Some(loc.into()), ..Profile::new(url) }
}

fn degree(d: Option<&str>, inst: &str) -> Education {
    Education { degree: d.map(Into::into), institution: Some(inst.into()), ..Default::default() }
}

#[test]
fn location_frequency_orders_by_count_then_first_seen() {
    let v = vec![
        with_location("u1", "NYC"),
        with_location("u2", "SF"),
        with_location("u3", "NYC"),
        with_location("u4", "LA"),
        with_location("u5", "SF"),
        Profile::new("u6"),
    ];
    let a = Analytics::compute_owned(&v);
    assert_eq!(
        a.top_locations,
        vec![("NYC".to_string(), 2), ("SF".to_string(), 2), ("LA".to_string(), 1)]
    );
}

fn worked_at(url: &str, companies: &[Option<&str>]) -> Profile {
    Profile {
        experience: Some(
            companies
                .iter()
                .map(|c| Experience { company: c.map(Into::into), ..Default::default() })
                .collect(),
        ),
        ..Profile::new(url)
    }
}

#[test]
fn company_counts_sum_to_experience_entries_with_a_company() {
    let v = vec![
        worked_at("u1", &[Some("Acme"), Some("Globex"), Some("Acme")]),
        worked_at("u2", &[None, Some("Initech")]),
        Profile::new("u3"),
        worked_at("u4", &[Some("Globex"), Some("")]),
    ];
    let with_company = v.iter().flat_map(|p| p.companies()).count();
    assert_eq!(with_company, 5);

    let a = Analytics::compute_owned(&v);
    let sum: usize = a.top_companies.iter().map(|(_, n)| n).sum();
    assert_eq!(sum, with_company);
    // repeats inside one record each count
    assert_eq!(a.top_companies[0], ("Acme".to_string(), 2));
    assert_eq!(a.top_companies[1], ("Globex".to_string(), 2));
}

#[test]
fn uncapped_frequency_keeps_every_value() {
    let flat = ["Rust", "Go", "Rust", "Python", "Go"];
    let table = frequency(flat.iter().copied(), None);
    assert_eq!(table.len(), 3);
    assert_eq!(table.iter().map(|(_, n)| n).sum::<usize>(), flat.len());
}

#[test]
fn bob_and_alice_through_sort_filter_and_skills() {
    let bob = Profile {
        name: Some("Bob".into()),
        location: Some("NYC".into()),
        skills: Some(vec!["Go".into()]),
        ..Profile::new("https://linkedin.com/in/bob")
    };
    let alice = Profile {
        name: Some("Alice".into()),
        location: Some("NYC".into()),
        skills: Some(vec!["Rust".into()]),
        ..Profile::new("https://linkedin.com/in/alice")
    };
    let v = vec![bob, alice];

    let by_name: Vec<_> = sorted(&v, SortSpec::default()).into_iter().map(|p| p.display_name()).collect();
    assert_eq!(by_name, ["Alice", "Bob"]);

    let mut c = FilterCriteria::default();
    c.toggle_location("NYC");
    assert_eq!(apply(&v, &c).len(), 2);

    let mut c = FilterCriteria::default();
    c.toggle_skill("Go");
    let go: Vec<_> = apply(&v, &c).into_iter().map(|p| p.display_name()).collect();
    assert_eq!(go, ["Bob"]);

    let mut skills = Analytics::compute_owned(&v).top_skills;
    skills.sort();
    assert_eq!(skills, vec![("Go".to_string(), 1), ("Rust".to_string(), 1)]);
}

#[test]
fn tables_respect_caps() {
    let v: Vec<Profile> = (0..40)
        .map(|i| Profile {
            location: Some(format!("City {i}")),
            skills: Some(vec![format!("S{i}")]),
            experience: Some(vec![Experience { company: Some(format!("Co {i}")), ..Default::default() }]),
            ..Profile::new(format!("u{i}"))
        })
        .collect();
    let a = Analytics::compute_owned(&v);
    assert_eq!(a.top_locations.len(), 10);
    assert_eq!(a.top_companies.len(), 10);
    assert_eq!(a.top_skills.len(), 15);
    // all ties: first seen wins
    assert_eq!(a.top_locations[0].0, "City 0");
}

#[test]
fn companies_flatten_all_experience_and_skip_blank() {
    let p = Profile {
        experience: Some(vec![
            Experience { company: Some("Acme".into()), ..Default::default() },
            Experience { company: None, ..Default::default() },
            Experience { company: Some("".into()), ..Default::default() },
            Experience { company: Some("Acme".into()), ..Default::default() },
        ]),
        ..Profile::new("u")
    };
    let a = Analytics::compute(&[&p]);
    assert_eq!(a.top_companies, vec![("Acme".to_string(), 2)]);
    assert_eq!(a.overview.unique_companies, 1);
}

#[test]
fn education_classification_priority_and_totality() {
    assert_eq!(EducationLevel::classify(Some("PhD in Physics")), EducationLevel::PhdDoctorate);
    assert_eq!(EducationLevel::classify(Some("Doctorate of Education")), EducationLevel::PhdDoctorate);
    assert_eq!(EducationLevel::classify(Some("Master of Science")), EducationLevel::Masters);
    assert_eq!(EducationLevel::classify(Some("MBA")), EducationLevel::Masters);
    assert_eq!(EducationLevel::classify(Some("Bachelor of Arts")), EducationLevel::Bachelors);
    assert_eq!(EducationLevel::classify(Some("BSc")), EducationLevel::Other);
    assert_eq!(EducationLevel::classify(Some("")), EducationLevel::Other);
    assert_eq!(EducationLevel::classify(None), EducationLevel::Other);
    // "phd" outranks "master" when both appear
    assert_eq!(EducationLevel::classify(Some("Master's then PhD")), EducationLevel::PhdDoctorate);
}

#[test]
fn every_education_entry_lands_in_one_bucket() {
    let p1 = Profile {
        education: Some(vec![degree(Some("MSc Master"), "ETH"), degree(Some("Bachelor"), "TUM")]),
        ..Profile::new("a")
    };
    let p2 = Profile {
        education: Some(vec![degree(None, "MIT"), degree(Some("PhD"), "ETH")]),
        ..Profile::new("b")
    };
    let a = Analytics::compute(&[&p1, &p2]);
    let e = a.education_levels;
    assert_eq!(e.total(), 4);
    assert_eq!(e.get(EducationLevel::PhdDoctorate), 1);
    assert_eq!(e.get(EducationLevel::Masters), 1);
    assert_eq!(e.get(EducationLevel::Bachelors), 1);
    assert_eq!(e.get(EducationLevel::Other), 1);
    assert_eq!(a.overview.unique_universities, 3);
}

#[test]
fn completeness_counts_and_average() {
    let full = Profile {
        experience: Some(vec![Experience::default()]),
        education: Some(vec![Education::default()]),
        skills: Some(vec!["Rust".into()]),
        awards: Some(vec![Default::default()]),
        certifications: Some(vec![Default::default()]),
        projects: Some(vec![Project::default()]),
        ..Profile::new("full")
    };
    let half = Profile {
        experience: Some(vec![Experience::default()]),
        education: Some(vec![Education::default()]),
        skills: Some(vec!["Go".into()]),
        awards: Some(vec![]),
        ..Profile::new("half")
    };
    let a = Analytics::compute(&[&full, &half]);
    let c = a.completeness;
    assert_eq!(c.records, 2);
    assert_eq!(c.count(CompletenessCategory::Experience), 2);
    assert_eq!(c.count(CompletenessCategory::Awards), 1);
    assert_eq!(c.percent(CompletenessCategory::Projects), 50.0);
    // (6 + 3) / 12 = 75%
    assert_eq!(c.average_percent(), 75);
}

#[test]
fn category_percent_keeps_one_decimal() {
    let with_skills = Profile { skills: Some(vec!["Go".into()]), ..Profile::new("a") };
    let v = vec![with_skills, Profile::new("b"), Profile::new("c")];
    let c = Analytics::compute_owned(&v).completeness;
    assert_eq!(c.percent(CompletenessCategory::Skills), 33.3);
    assert_eq!(c.percent(CompletenessCategory::Awards), 0.0);
}

#[test]
fn zero_records_yield_empty_tables_and_zero_completeness() {
    let a = Analytics::compute(&[]);
    assert!(a.top_locations.is_empty());
    assert!(a.top_companies.is_empty());
    assert!(a.top_skills.is_empty());
    assert_eq!(a.education_levels.total(), 0);
    assert_eq!(a.completeness.average_percent(), 0);
    assert_eq!(a.overview.total, 0);
    assert_eq!(a.top_location_label(), "N/A");
    assert_eq!(a.top_company_label(), "N/A");
}

#[test]
fn top_location_label_is_city_part() {
    let v = vec![
        with_location("a", "San Francisco, CA"),
        with_location("b", "San Francisco, CA"),
        with_location("c", "Austin, TX"),
    ];
    let a = Analytics::compute_owned(&v);
    assert_eq!(a.top_location_label(), "San Francisco");
    assert_eq!(a.overview.unique_locations, 2);
}

#[test]
fn share_of_total_rounds_to_one_decimal() {
    assert_eq!(share_of_total(2, 3), 66.7);
    assert_eq!(share_of_total(0, 10), 0.0);
    assert_eq!(share_of_total(3, 0), 0.0);
}
