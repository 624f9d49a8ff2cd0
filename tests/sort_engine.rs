// tests/sort_engine.rs
use rstest::rstest;

use profile_dash::model::Profile;
use profile_dash::sort::{SortDirection, SortKey, SortSpec, sort_indices, sorted};

fn p(url: &str, name: Option<&str>, location: Option<&str>, headline: Option<&str>) -> Profile {
    Profile {
        name: name.map(Into::into),
        location: location.map(Into::into),
        headline: headline.map(Into::into),
        ..Profile::new(url)
    }
}

fn sample() -> Vec<Profile> {
    vec![
        p("u0", Some("bob"), Some("NYC"), None),
        p("u1", Some("Alice"), None, Some("Engineer")),
        p("u2", None, Some("Berlin"), Some("analyst")),
        p("u3", Some("carol"), Some("nyc"), Some("Designer")),
    ]
}

fn urls(v: &[&Profile]) -> Vec<String> {
    v.iter().map(|p| p.url.clone()).collect()
}

#[rstest]
#[case(SortKey::Name, SortDirection::Asc, &["u1", "u0", "u3", "u2"])]
#[case(SortKey::Name, SortDirection::Desc, &["u3", "u0", "u1", "u2"])]
#[case(SortKey::Location, SortDirection::Asc, &["u2", "u0", "u3", "u1"])]
#[case(SortKey::Location, SortDirection::Desc, &["u0", "u3", "u2", "u1"])]
#[case(SortKey::Headline, SortDirection::Asc, &["u2", "u3", "u1", "u0"])]
#[case(SortKey::Headline, SortDirection::Desc, &["u1", "u3", "u2", "u0"])]
fn orders_case_insensitively_with_missing_last(
    #[case] key: SortKey,
    #[case] dir: SortDirection,
    #[case] expected: &[&str],
) {
    let v = sample();
    assert_eq!(urls(&sorted(&v, SortSpec::new(key, dir))), expected);
}

#[test]
fn equal_keys_keep_input_order_both_ways() {
    // "NYC" and "nyc" compare equal after lowercasing
    let v = sample();
    for dir in [SortDirection::Asc, SortDirection::Desc] {
        let out = urls(&sorted(&v, SortSpec::new(SortKey::Location, dir)));
        let i0 = out.iter().position(|u| u == "u0").unwrap();
        let i3 = out.iter().position(|u| u == "u3").unwrap();
        assert!(i0 < i3, "{dir:?}: {out:?}");
    }
}

#[test]
fn sorting_is_idempotent() {
    let v = sample();
    let spec = SortSpec::new(SortKey::Headline, SortDirection::Desc);
    let once = sort_indices(&v, &[0, 1, 2, 3], spec);
    let twice = sort_indices(&v, &once, spec);
    assert_eq!(once, twice);
}

#[test]
fn sorts_a_subset_without_touching_input() {
    let v = sample();
    let subset = vec![3, 0, 2];
    let out = sort_indices(&v, &subset, SortSpec::default());
    assert_eq!(out, vec![0, 3, 2]);
    assert_eq!(subset, vec![3, 0, 2]);
}

#[test]
fn empty_input() {
    assert!(sorted(&[], SortSpec::default()).is_empty());
    assert!(sort_indices(&sample(), &[], SortSpec::default()).is_empty());
}
