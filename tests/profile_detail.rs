// tests/profile_detail.rs
use profile_dash::detail::ProfileDetail;
use profile_dash::model::{
    Award, Certification, Education, Experience, Language, Patent, Profile, Project, Publication,
    VolunteerExperience,
};
use profile_dash::store::ProfileStore;

fn everything() -> Profile {
    Profile {
        name: Some("Sarah Chen".into()),
        headline: Some("Staff Engineer".into()),
        location: Some("San Francisco, CA".into()),
        profile_image: Some("https://img.example/sarah.png".into()),
        experience: Some(vec![Experience {
            title: Some("Staff Engineer".into()),
            company: Some("Google".into()),
            duration: Some("2019 - Present".into()),
            description: Some("".into()),
            ..Default::default()
        }]),
        education: Some(vec![Education {
            degree: Some("MS Computer Science".into()),
            institution: Some("Stanford".into()),
            ..Default::default()
        }]),
        skills: Some(vec!["Rust".into(), "".into(), "Go".into()]),
        projects: Some(vec![Project {
            title: Some("Pipeline".into()),
            technologies: Some(vec!["Kafka".into(), "Rust".into()]),
            ..Default::default()
        }]),
        awards: Some(vec![Award { title: Some("Best Paper".into()), issuer: Some("ACM".into()), ..Default::default() }]),
        certifications: Some(vec![Certification {
            name: Some("CKA".into()),
            issuer: Some("CNCF".into()),
            credential_id: Some("X-42".into()),
            ..Default::default()
        }]),
        publications: Some(vec![Publication { title: Some("On Indexes".into()), ..Default::default() }]),
        patents: Some(vec![Patent { title: Some("Sharded cache".into()), patent_number: Some("US123".into()), ..Default::default() }]),
        languages: Some(vec![Language { name: Some("Mandarin".into()), proficiency: Some("Native".into()) }]),
        volunteer_experience: Some(vec![VolunteerExperience {
            role: Some("Mentor".into()),
            organization: Some("Code Club".into()),
            ..Default::default()
        }]),
        ..Profile::new("https://linkedin.com/in/sarah")
    }
}

#[test]
fn every_collection_gets_a_section_in_order() {
    let d = ProfileDetail::from_profile(&everything());
    let titles: Vec<_> = d.sections.iter().map(|s| s.title).collect();
    assert_eq!(
        titles,
        [
            "Experience", "Education", "Skills", "Projects", "Awards", "Certifications",
            "Languages", "Publications", "Patents", "Volunteering",
        ]
    );
    assert_eq!(d.name, "Sarah Chen");
    assert_eq!(d.image.as_deref(), Some("https://img.example/sarah.png"));
}

#[test]
fn entries_keep_only_present_fields() {
    let d = ProfileDetail::from_profile(&everything());

    let job = &d.section("Experience").unwrap().entries[0];
    assert_eq!(job.heading, "Staff Engineer");
    assert_eq!(job.subheading.as_deref(), Some("Google"));
    // blank description dropped
    assert_eq!(job.lines, ["2019 - Present"]);

    let skills = &d.section("Skills").unwrap().entries[0];
    assert_eq!(skills.tags, ["Rust", "Go"]);

    let project = &d.section("Projects").unwrap().entries[0];
    assert_eq!(project.tags, ["Kafka", "Rust"]);

    let cert = &d.section("Certifications").unwrap().entries[0];
    assert_eq!(cert.lines, ["ID: X-42"]);

    let patent = &d.section("Patents").unwrap().entries[0];
    assert_eq!(patent.subheading.as_deref(), Some("No. US123"));
}

#[test]
fn bare_record_has_header_only() {
    let p = Profile {
        awards: Some(vec![]),
        skills: Some(vec!["".into()]),
        ..Profile::new("https://linkedin.com/in/bare")
    };
    let d = ProfileDetail::from_profile(&p);
    assert!(d.sections.is_empty());
    assert_eq!(d.name, "https://linkedin.com/in/bare");
    assert_eq!(d.headline, None);
}

#[test]
fn untitled_entries_still_show() {
    let p = Profile {
        education: Some(vec![Education { institution: Some("MIT".into()), ..Default::default() }]),
        ..Profile::new("u")
    };
    let d = ProfileDetail::from_profile(&p);
    let e = &d.section("Education").unwrap().entries[0];
    assert_eq!(e.heading, "Untitled");
    assert_eq!(e.subheading.as_deref(), Some("MIT"));
}

#[test]
fn store_finds_records_by_url() {
    let s = ProfileStore::with_profiles(vec![everything(), Profile::new("https://linkedin.com/in/b")]);
    assert_eq!(s.find("https://linkedin.com/in/sarah").map(|p| p.display_name()), Some("Sarah Chen"));
    assert!(s.find("https://linkedin.com/in/nobody").is_none());
}
