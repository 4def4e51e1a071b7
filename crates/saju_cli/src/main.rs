use std::path::{Path, PathBuf};

use chrono::{Datelike, NaiveDate};
use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use saju_base::ALL_POSITIONS;
use saju_rs::{
    AnalysisConfig, BirthChart, BirthInput, Chart, ChartWarning, ElementTally, Gender,
    NoLunarConverter, age_on, analyze_name, compare_charts_with, compute_advanced_analysis,
    compute_chart_with, generate_decades, generate_fortune_calendar_on, month_fortunes, today,
};

#[derive(Parser)]
#[command(name = "saju", about = "Four-pillar (saju) calculation CLI")]
struct Cli {
    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,
    /// JSON file with an AnalysisConfig
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum GenderArg {
    Male,
    Female,
}

impl From<GenderArg> for Gender {
    fn from(g: GenderArg) -> Self {
        match g {
            GenderArg::Male => Gender::Male,
            GenderArg::Female => Gender::Female,
        }
    }
}

#[derive(Args)]
struct BirthArgs {
    /// Birth date (YYYY-MM-DD)
    #[arg(long)]
    date: String,
    /// Birth time (HH:MM, 24h)
    #[arg(long, default_value = "12:00")]
    time: String,
    /// Date is on the lunar calendar
    #[arg(long)]
    lunar: bool,
    /// Lunar month is intercalary
    #[arg(long, requires = "lunar")]
    leap: bool,
    #[arg(long, value_enum, default_value_t = GenderArg::Male)]
    gender: GenderArg,
}

#[derive(Subcommand)]
enum Commands {
    /// Four pillars and element balance
    Chart {
        #[command(flatten)]
        birth: BirthArgs,
    },
    /// Life stages, markers and ten gods
    Analysis {
        #[command(flatten)]
        birth: BirthArgs,
    },
    /// Ten-year luck periods
    Decades {
        #[command(flatten)]
        birth: BirthArgs,
        /// Current age (defaults to completed years as of today)
        #[arg(long)]
        age: Option<u32>,
    },
    /// Month, today, tomorrow and this week's fortunes
    Calendar {
        #[command(flatten)]
        birth: BirthArgs,
        /// Anchor date (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        on: Option<String>,
        /// Show all twelve months of this year instead
        #[arg(long, conflicts_with = "on")]
        year: Option<i32>,
    },
    /// Compatibility of two solar birth moments
    Compat {
        /// First birth (YYYY-MM-DD or YYYY-MM-DDTHH:MM)
        first: String,
        /// Second birth (YYYY-MM-DD or YYYY-MM-DDTHH:MM)
        second: String,
    },
    /// Name-stroke numerology
    Name {
        /// Full name, surname first
        name: String,
        /// Birth date to cross-check against (YYYY-MM-DD)
        #[arg(long)]
        date: Option<String>,
        /// Birth time (HH:MM, 24h)
        #[arg(long, default_value = "12:00")]
        time: String,
    },
}

fn fail(msg: impl std::fmt::Display) -> ! {
    eprintln!("{msg}");
    std::process::exit(1);
}

fn parse_date(s: &str) -> Result<(i32, u32, u32), String> {
    let parts: Vec<&str> = s.split('-').collect();
    if parts.len() != 3 {
        return Err(format!("invalid date format: {s} (expected YYYY-MM-DD)"));
    }
    let year: i32 = parts[0].parse().map_err(|e| format!("{e}"))?;
    let month: u32 = parts[1].parse().map_err(|e| format!("{e}"))?;
    let day: u32 = parts[2].parse().map_err(|e| format!("{e}"))?;
    Ok((year, month, day))
}

fn parse_time(s: &str) -> Result<(u32, u32), String> {
    let (h, m) = s
        .split_once(':')
        .ok_or_else(|| format!("invalid time format: {s} (expected HH:MM)"))?;
    let hour: u32 = h.parse().map_err(|e| format!("{e}"))?;
    let minute: u32 = m.parse().map_err(|e| format!("{e}"))?;
    Ok((hour, minute))
}

fn parse_naive(s: &str) -> NaiveDate {
    let (y, m, d) = parse_date(s).unwrap_or_else(|e| fail(e));
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_else(|| fail(format!("invalid date: {s}")))
}

fn load_config(path: Option<&Path>) -> AnalysisConfig {
    let Some(path) = path else {
        return AnalysisConfig::default();
    };
    let text = std::fs::read_to_string(path)
        .unwrap_or_else(|e| fail(format!("Failed to read config {}: {e}", path.display())));
    let config: AnalysisConfig = serde_json::from_str(&text)
        .unwrap_or_else(|e| fail(format!("Failed to parse config {}: {e}", path.display())));
    if let Err(e) = config.validate() {
        fail(e);
    }
    tracing::debug!(path = %path.display(), ?config, "loaded configuration");
    config
}

fn birth_input(args: &BirthArgs) -> BirthInput {
    let (year, month, day) = parse_date(&args.date).unwrap_or_else(|e| fail(e));
    let (hour, minute) = parse_time(&args.time).unwrap_or_else(|e| fail(e));
    let gender = args.gender.into();
    if args.lunar {
        BirthInput::lunar(year, month, day, args.leap, hour, minute, gender)
    } else {
        BirthInput::solar(year, month, day, hour, minute, gender)
    }
}

fn compute(args: &BirthArgs, config: &AnalysisConfig) -> BirthChart {
    let input = birth_input(args);
    let birth = compute_chart_with(input, &NoLunarConverter, config).unwrap_or_else(|e| fail(e));
    for w in &birth.warnings {
        match w {
            ChartWarning::LunarConversionFallback { reason } => {
                eprintln!("warning: lunar date used as solar ({reason})");
            }
        }
    }
    birth
}

/// Solar chart from `YYYY-MM-DD` or `YYYY-MM-DDTHH:MM`.
fn compat_chart(spec: &str, config: &AnalysisConfig) -> Chart {
    let (date, time) = spec.split_once('T').unwrap_or((spec, "12:00"));
    let (year, month, day) = parse_date(date).unwrap_or_else(|e| fail(e));
    let (hour, minute) = parse_time(time).unwrap_or_else(|e| fail(e));
    let input = BirthInput::solar(year, month, day, hour, minute, Gender::Male);
    compute_chart_with(input, &NoLunarConverter, config)
        .unwrap_or_else(|e| fail(e))
        .chart
}

fn print_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(s) => println!("{s}"),
        Err(e) => fail(format!("Failed to serialize output: {e}")),
    }
}

fn print_chart(birth: &BirthChart) {
    let chart = &birth.chart;
    println!(
        "Solar date: {} (year of the {})",
        birth.solar_date,
        chart.year.branch.animal()
    );
    for pos in ALL_POSITIONS {
        let p = chart.pillar(pos);
        println!(
            "{:<6} {} {} ({}, {} {})",
            pos.name(),
            p.hanja(),
            p.hangul(),
            p,
            p.stem.polarity().name(),
            p.element().name()
        );
    }
    let tally = ElementTally::from_chart(chart);
    let counts: Vec<String> = saju_base::ALL_ELEMENTS
        .iter()
        .map(|&e| format!("{} {}", e.name(), tally.count(e)))
        .collect();
    println!("Elements: {}", counts.join(", "));
    let missing: Vec<&str> = tally.missing().iter().map(|e| e.name()).collect();
    if !missing.is_empty() {
        println!("Missing: {}", missing.join(", "));
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref());

    match cli.command {
        Commands::Chart { birth } => {
            let bc = compute(&birth, &config);
            if cli.json {
                print_json(&bc);
            } else {
                print_chart(&bc);
            }
        }

        Commands::Analysis { birth } => {
            let bc = compute(&birth, &config);
            let a = compute_advanced_analysis(&bc.chart);
            if cli.json {
                print_json(&a);
                return;
            }
            println!("Life stages:");
            for (pos, stage) in ALL_POSITIONS.iter().zip(a.life_stages.stages()) {
                println!(
                    "  {:<6} {} {} ({:?})",
                    pos.name(),
                    stage.hanja(),
                    stage.name(),
                    stage.energy()
                );
            }
            println!("Ten gods:");
            let labels = a.ten_gods.labels();
            for (i, pos) in ALL_POSITIONS.iter().enumerate() {
                let (stem, branch) = (labels[2 * i], labels[2 * i + 1]);
                println!(
                    "  {:<6} stem {:<10} {:<20} branch {:<10} {}",
                    pos.name(),
                    stem.name(),
                    stem.english_name(),
                    branch.name(),
                    branch.english_name()
                );
            }
            let dominant: Vec<&str> = a.ten_gods.dominant.iter().map(|g| g.name()).collect();
            println!("  dominant: {}", dominant.join(", "));
            println!(
                "Markers ({} auspicious, {} inauspicious):",
                a.markers.auspicious_count, a.markers.inauspicious_count
            );
            for m in &a.markers.markers {
                let positions: Vec<&str> = m.positions.iter().map(|p| p.name()).collect();
                println!("  {:<14} {}  [{}]", m.kind.name(), m.description, positions.join(", "));
            }
        }

        Commands::Decades { birth, age } => {
            let bc = compute(&birth, &config);
            let age = age.unwrap_or_else(|| age_on(bc.solar_date, today()));
            let cycle = generate_decades(&bc.chart, birth.gender.into(), age);
            if cli.json {
                print_json(&cycle);
                return;
            }
            println!(
                "Direction: {}",
                if cycle.forward { "forward" } else { "backward" }
            );
            for p in &cycle.periods {
                let marker = if cycle.current.is_some_and(|c| c.order == p.order) {
                    "*"
                } else {
                    " "
                };
                println!(
                    "{marker} {:>3}-{:<3} {} {:<9} {:<9} {:<9} {:?}",
                    p.start_age,
                    p.end_age,
                    p.pillar().hanja(),
                    p.life_stage.name(),
                    p.stem_ten_god.name(),
                    p.branch_ten_god.name(),
                    p.energy
                );
            }
        }

        Commands::Calendar { birth, on, year } => {
            let bc = compute(&birth, &config);
            if let Some(year) = year {
                let months = month_fortunes(&bc.chart, year);
                if cli.json {
                    print_json(&months);
                    return;
                }
                for m in &months {
                    println!(
                        "{}-{:02} {} {:<9} {:>3}",
                        m.year,
                        m.month,
                        m.pillar.hanja(),
                        m.level.name(),
                        m.score
                    );
                }
                return;
            }
            let date = on.as_deref().map_or_else(today, parse_naive);
            let cal = generate_fortune_calendar_on(&bc.chart, date).unwrap_or_else(|e| fail(e));
            if cli.json {
                print_json(&cal);
                return;
            }
            let m = cal.current_month;
            println!(
                "Month {}-{:02}: {} {} ({})",
                m.year,
                m.month,
                m.pillar.hanja(),
                m.level.name(),
                m.score
            );
            for d in &cal.this_week {
                let tag = if d.date == cal.today.date {
                    " today"
                } else if d.date == cal.tomorrow.date {
                    " tomorrow"
                } else {
                    ""
                };
                println!(
                    "{} {} {} {:<9} {:>3}{tag}",
                    d.date,
                    d.date.weekday(),
                    d.pillar.hanja(),
                    d.level.name(),
                    d.score
                );
            }
        }

        Commands::Compat { first, second } => {
            let a = compat_chart(&first, &config);
            let b = compat_chart(&second, &config);
            let r = compare_charts_with(&a, &b, &config.compatibility);
            if cli.json {
                print_json(&r);
                return;
            }
            println!("{}  vs  {}", r.chart1, r.chart2);
            println!(
                "Stem {}  Branch {}  Element {}",
                r.stem_score, r.branch_score, r.element_score
            );
            println!("Total {} ({})", r.total, r.tier.name());
            if let Some(adv) = r.advanced {
                println!(
                    "Ten gods {}  Markers {}  Energy {}  Combined {}",
                    adv.ten_gods, adv.markers, adv.energy, adv.combined
                );
            }
            for rel in &r.relationships {
                let sign = if rel.kind.is_positive() { "+" } else { " " };
                println!("  {sign} {:?} {:?}", rel.scope, rel.kind);
            }
            println!("Strengths: {:?}", r.strengths);
            println!("Weaknesses: {:?}", r.weaknesses);
            println!("Advice: {:?}", r.advice);
        }

        Commands::Name { name, date, time } => {
            let chart = date.map(|d| {
                let spec = format!("{d}T{time}");
                compat_chart(&spec, &config)
            });
            let p = analyze_name(&name, chart.as_ref()).unwrap_or_else(|e| fail(e));
            if cli.json {
                print_json(&p);
                return;
            }
            let strokes: Vec<String> = p
                .characters
                .iter()
                .map(|c| format!("{} {}", c.ch, c.strokes))
                .collect();
            println!("{} ({} / {}): {}", p.name, p.surname, p.given, strokes.join(", "));
            for (label, g) in ["Heaven", "Human", "Earth", "Total", "Outer"]
                .iter()
                .zip(p.grids.values())
            {
                println!(
                    "  {:<6} {:>3} {:<5} {:<4} {}",
                    label,
                    g.value,
                    g.element.name(),
                    g.polarity.name(),
                    g.tier.name()
                );
            }
            println!("Score: {}", p.score);
            if let Some(m) = &p.chart_match {
                println!(
                    "Chart: day {} vs name {} -> {:?} ({}){}",
                    m.day_element.name(),
                    m.name_element.name(),
                    m.relation,
                    m.score,
                    if m.fills_missing { ", fills a missing element" } else { "" }
                );
            }
        }
    }
}
