// src/cli.rs
use std::{env, fs, path::{Path, PathBuf}};

use color_eyre::eyre::{Result, WrapErr, bail, eyre};

use crate::{
    analytics::{Analytics, share_of_total},
    config::{loader, options::ExportFormat, state::AppState},
    core::{net::Backend, presence::text},
    detail::ProfileDetail,
    file,
    filter::FilterCriteria,
    model::{self, Profile},
    sort::{SortDirection, SortKey, SortSpec},
    store::ProfileStore,
    validate,
};

const HELP: &str = "\
Usage: cli [OPTIONS]

Source (default: backend from config):
  --input FILE.json        Read profiles from a JSON file
  --backend URL            Backend base URL (e.g. http://localhost:8000)

Filters (repeatable where noted):
  --search TEXT            Case-insensitive match on URL, headline, location
  --location L             Exact location (repeatable)
  --company C              Any experience at company (repeatable)
  --skill S                Has skill (repeatable)
  --has-experience | --has-education | --has-awards | --has-certifications

Order:
  --sort name|location|headline   (default: name)
  --desc                          Descending

Output:
  --analytics              Print statistics for the filtered set
  -o, --out PATH           Export the view to PATH
  --format csv|tsv         Export format (default from config)
  --include-headers        Write a header row
  -q, --quiet              Don't list records
  --show URL               Print everything on record for one profile, then stop

Bulk add:
  --add URL                Validate and submit a profile URL (repeatable), then re-fetch
";

#[derive(Debug, Default)]
pub struct Params {
    pub input: Option<PathBuf>,
    pub backend: Option<String>,
    pub criteria: FilterCriteria,
    pub sort: SortSpec,
    pub analytics: bool,
    pub out: Option<PathBuf>,
    pub format: Option<ExportFormat>,
    pub include_headers: bool,
    pub quiet: bool,
    pub show: Option<String>,
    pub add: Vec<String>,
}

pub fn run() -> Result<()> {
    let params = parse_args(env::args().skip(1))?;
    let mut state = loader::load().wrap_err("loading configuration")?;
    run_with(params, &mut state)
}

pub fn run_with(params: Params, state: &mut AppState) -> Result<()> {
    if let Some(url) = &params.backend {
        state.options.backend.base_url = url.clone();
        loader::validate(state)?;
    }
    if let Some(fmt) = params.format {
        state.options.export.format = fmt;
    }
    if params.include_headers {
        state.options.export.include_headers = true;
    }
    if let Some(out) = &params.out {
        state.options.export.set_path(&out.to_string_lossy());
    }

    let backend = Backend::new(&state.options.backend);

    if !params.add.is_empty() {
        if params.input.is_some() {
            bail!("--add needs a backend; drop --input");
        }
        let urls = validate::check_urls(params.add.iter().map(String::as_str));
        for bad in &urls.invalid {
            eprintln!("Skipping invalid URL: {bad}");
        }
        let resp = backend.submit_urls(&urls.into_submission()?)?;
        eprintln!("{} ({} URL(s))", resp.message, resp.count);
    }

    let profiles = match &params.input {
        Some(path) => load_file(path)?,
        None => backend
            .fetch_profiles()
            .wrap_err_with(|| eyre!("fetching from {}", state.options.backend.base_url))?,
    };

    let mut store = ProfileStore::with_profiles(profiles);

    if let Some(url) = &params.show {
        let p = store.find(url).ok_or_else(|| eyre!("no profile with URL {url}"))?;
        print_detail(&ProfileDetail::from_profile(p));
        return Ok(());
    }

    store.update_criteria(|c| *c = params.criteria.clone());
    store.set_sort(params.sort);

    let view = store.view();
    if !params.quiet {
        for p in &view {
            println!("{}", record_line(p));
        }
    }
    eprintln!(
        "{} of {} profile(s) ({}% of total)",
        store.filtered_len(),
        store.len(),
        share_of_total(store.filtered_len(), store.len())
    );

    if params.analytics {
        print_analytics(&store.analytics());
    }

    if params.out.is_some() {
        let path = file::write_export(&state.options.export, &view)?;
        eprintln!("Exported {} row(s) → {}", view.len(), path.display());
    }

    Ok(())
}

fn load_file(path: &Path) -> Result<Vec<Profile>> {
    let f = fs::File::open(path).wrap_err_with(|| eyre!("reading {}", path.display()))?;
    Ok(model::read_profiles(f)?)
}

fn print_detail(d: &ProfileDetail) {
    println!("{}", d.name);
    for line in [&d.headline, &d.location].into_iter().flatten() {
        println!("  {line}");
    }
    println!("  {}", d.url);

    for section in &d.sections {
        println!("\n{}:", section.title);
        for e in &section.entries {
            if !e.heading.is_empty() {
                match &e.subheading {
                    Some(sub) => println!("  {} ({sub})", e.heading),
                    None => println!("  {}", e.heading),
                }
            }
            for line in &e.lines {
                println!("      {line}");
            }
            if !e.tags.is_empty() {
                println!("    [{}]", e.tags.join(", "));
            }
        }
    }
}

fn record_line(p: &Profile) -> String {
    let role = p
        .current_role()
        .map(|e| match (text(&e.title), text(&e.company)) {
            (Some(t), Some(c)) => format!("{t} @ {c}"),
            (Some(t), None) => s!(t),
            (None, Some(c)) => s!(c),
            (None, None) => s!(),
        })
        .unwrap_or_default();
    format!(
        "{}\t{}\t{}\t{}",
        p.display_name(),
        p.location().unwrap_or("-"),
        p.headline().unwrap_or("-"),
        role
    )
}

fn print_analytics(a: &Analytics) {
    let o = &a.overview;
    println!();
    println!("Profiles: {}  Locations: {}  Companies: {}  Universities: {}",
        o.total, o.unique_locations, o.unique_companies, o.unique_universities);
    println!("Average completeness: {}%", a.completeness.average_percent());
    println!("Top location: {}  Top company: {}", a.top_location_label(), a.top_company_label());

    for (title, table) in [
        ("Top locations", &a.top_locations),
        ("Top companies", &a.top_companies),
        ("Top skills", &a.top_skills),
    ] {
        println!("\n{title}:");
        for (v, n) in table {
            println!("  {n:>4}  {v}");
        }
    }

    println!("\nEducation levels:");
    for (level, n) in a.education_levels.iter() {
        println!("  {n:>4}  {}", level.label());
    }

    println!("\nCompleteness:");
    for (cat, n) in a.completeness.iter() {
        println!("  {n:>4}  {:<15} {:>5.1}%", cat.label(), a.completeness.percent(cat));
    }
}

pub fn parse_args<I>(args: I) -> Result<Params>
where
    I: IntoIterator<Item = String>,
{
    let mut p = Params::default();
    let mut args = args.into_iter();
    let value = |args: &mut I::IntoIter, flag: &str| {
        args.next().ok_or_else(|| eyre!("Missing value for {flag}"))
    };

    while let Some(a) = args.next() {
        match a.as_str() {
            "--input" => p.input = Some(PathBuf::from(value(&mut args, &a)?)),
            "--backend" => p.backend = Some(value(&mut args, &a)?),
            "--search" => p.criteria.set_search(value(&mut args, &a)?),
            "--location" => p.criteria.toggle_location(&value(&mut args, &a)?),
            "--company" => p.criteria.toggle_company(&value(&mut args, &a)?),
            "--skill" => p.criteria.toggle_skill(&value(&mut args, &a)?),
            "--has-experience" => p.criteria.has_experience = true,
            "--has-education" => p.criteria.has_education = true,
            "--has-awards" => p.criteria.has_awards = true,
            "--has-certifications" => p.criteria.has_certifications = true,
            "--sort" => {
                p.sort.key = value(&mut args, &a)?.parse::<SortKey>().map_err(|e| eyre!(e))?;
            }
            "--desc" => p.sort.direction = SortDirection::Desc,
            "--analytics" => p.analytics = true,
            "-o" | "--out" => p.out = Some(PathBuf::from(value(&mut args, &a)?)),
            "--format" => {
                p.format = Some(value(&mut args, &a)?.parse::<ExportFormat>().map_err(|e| eyre!(e))?);
            }
            "--include-headers" => p.include_headers = true,
            "-q" | "--quiet" => p.quiet = true,
            "--show" => p.show = Some(value(&mut args, &a)?),
            "--add" => p.add.push(value(&mut args, &a)?),
            "-h" | "--help" => {
                eprint!("{HELP}");
                std::process::exit(0);
            }
            _ => bail!("Unknown arg: {a}"),
        }
    }

    if p.input.is_some() && p.backend.is_some() {
        bail!("--input and --backend are mutually exclusive");
    }
    Ok(p)
}
