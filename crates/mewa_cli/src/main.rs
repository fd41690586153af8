use chrono::{Datelike, NaiveDate, Utc};
use clap::{Parser, Subcommand};
use log::debug;
use mewa_analysis::{
    EventType, Gender, MewaError, ObstacleAnalysis, Profession, SystemInfo, analyze_obstacles,
    assess_prosperity, full_analysis, render_cycle_table, render_full_analysis, render_prosperity,
};
use mewa_base::{CycleProfile, MewaMethod, MewaTriple, convert_mewas, cycle_tables, derive_profile};

const CURRENT_YEAR_ENV: &str = "MEWA_CURRENT_YEAR";

#[derive(Parser)]
#[command(name = "mewa", about = "Nine-palace mewa calculator", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sixty-year cycle profile of a year
    Profile {
        /// Gregorian year
        #[arg(value_parser = clap::value_parser!(i32).range(1900..=2100))]
        year: i32,
    },
    /// Life/body/power mewas for a cycle name or a year
    Mewa {
        /// Cycle name, e.g. MetalYangHorse or 金阳马
        #[arg(required_unless_present = "year", conflicts_with = "year")]
        name: Option<String>,
        /// Gregorian year instead of a cycle name
        #[arg(long, value_parser = clap::value_parser!(i32).range(1900..=2100))]
        year: Option<i32>,
        /// Derivation method: rotation (default) or offset
        #[arg(long, default_value = "rotation")]
        method: MewaMethod,
    },
    /// Obstacles for a subject in the reference year
    Obstacles {
        #[command(flatten)]
        subject: SubjectArgs,
    },
    /// Full analysis report: profile, mewas and obstacles
    Analyze {
        #[command(flatten)]
        subject: SubjectArgs,
    },
    /// Prosperity of an event at a given date and hour
    Prosperity {
        /// Event type, e.g. Birthday or "Wearing new clothes"
        #[arg(long)]
        event: EventType,
        /// Event date (YYYY-MM-DD)
        #[arg(long)]
        date: NaiveDate,
        /// Hour of day (0-23)
        #[arg(long, value_parser = clap::value_parser!(i32).range(0..=23))]
        hour: i32,
    },
    /// Print the 60-row cycle table
    Cycle,
    /// Engine name, version and accepted inputs
    Info,
}

#[derive(clap::Args)]
struct SubjectArgs {
    /// Birth year
    #[arg(long, value_parser = clap::value_parser!(i32).range(1900..=2100))]
    birth_year: i32,
    /// Reference year (defaults to the current calendar year)
    #[arg(
        long,
        env = "MEWA_CURRENT_YEAR",
        value_parser = clap::value_parser!(i32).range(1900..=2100)
    )]
    current_year: Option<i32>,
    /// Age in years (0-150)
    #[arg(long, value_parser = clap::value_parser!(i32).range(0..=150))]
    age: i32,
    /// male or female
    #[arg(long)]
    gender: Gender,
    /// general, official, monastic, lay_practitioner or sex_worker
    #[arg(long, default_value = "general")]
    profession: Profession,
}

impl SubjectArgs {
    fn current_year(&self) -> i32 {
        self.current_year.unwrap_or_else(|| {
            let year = Utc::now().year();
            debug!("{CURRENT_YEAR_ENV} not set, using {year}");
            year
        })
    }
}

fn print_profile(p: &CycleProfile) {
    println!("Year: {}", p.year);
    println!("Cycle Name: {} ({})", p.cycle_name, p.cycle_name.glyph_name());
    println!("Animal: {} ({})", p.animal.name(), p.animal.glyph());
    println!("Element: {} ({})", p.element.name(), p.element.glyph());
    println!("Polarity: {} ({})", p.polarity.name(), p.polarity.glyph());
    println!("Stem: {}", p.stem.name());
    println!("Rabjung Position: {}", p.cycle_position);
}

fn print_mewas(m: &MewaTriple, method: MewaMethod) {
    println!("Method: {}", method.name());
    for (label, mewa) in [("Life", &m.life), ("Body", &m.body), ("Power", &m.power)] {
        println!(
            "{label:<6} {} {} ({})",
            mewa.number,
            mewa.color.name(),
            mewa.element.name()
        );
    }
}

fn print_obstacles(oa: &ObstacleAnalysis) {
    println!(
        "Year {}: {} - body mewa {}",
        oa.reference_profile.year, oa.reference_profile.cycle_name, oa.reference_mewas.body
    );
    if oa.obstacles.is_empty() {
        println!("No obstacles detected.");
        return;
    }
    for o in &oa.obstacles {
        println!("{} {}: {}", o.kind.code(), o.kind.name(), o.interpretation);
    }
}

fn print_info(info: &SystemInfo) {
    let join = |names: Vec<&str>| names.join(", ");
    println!("{} v{}", info.name, info.version);
    println!(
        "Genders: {}",
        join(info.genders.iter().map(|g| g.key()).collect())
    );
    println!(
        "Professions: {}",
        join(info.professions.iter().map(|p| p.key()).collect())
    );
    println!(
        "Event types: {}",
        join(info.event_types.iter().map(|e| e.name()).collect())
    );
    println!(
        "Obstacles: {}",
        join(info.obstacle_kinds.iter().map(|k| k.code()).collect())
    );
    println!("Years: {}..={}", info.year_range.0, info.year_range.1);
    println!("Ages: {}..={}", info.age_range.0, info.age_range.1);
}

fn run(command: Commands) -> Result<(), MewaError> {
    match command {
        Commands::Profile { year } => print_profile(&derive_profile(year)?),

        Commands::Mewa { name, year, method } => {
            let triple = match (name, year) {
                (Some(name), _) => convert_mewas(&name, method)?,
                (None, Some(year)) => {
                    let profile = derive_profile(year)?;
                    println!("{year}: {}", profile.cycle_name);
                    cycle_tables()?.convert(profile.cycle_name, method)?
                }
                (None, None) => {
                    return Err(MewaError::Configuration("a cycle name or --year is required"));
                }
            };
            print_mewas(&triple, method);
        }

        Commands::Obstacles { subject } => {
            let current_year = subject.current_year();
            let profile = derive_profile(subject.birth_year)?;
            let mewas = cycle_tables()?.convert_by_rotation(profile.cycle_name)?;
            let oa = analyze_obstacles(
                &mewas,
                current_year,
                subject.age,
                subject.gender,
                subject.profession,
            )?;
            print_obstacles(&oa);
        }

        Commands::Analyze { subject } => {
            let analysis = full_analysis(
                subject.birth_year,
                subject.current_year(),
                subject.age,
                subject.gender,
                subject.profession,
            )?;
            println!("{}", render_full_analysis(&analysis));
        }

        Commands::Prosperity { event, date, hour } => {
            println!("{}", render_prosperity(&assess_prosperity(event, date, hour)?));
        }

        Commands::Cycle => println!("{}", render_cycle_table(cycle_tables()?)),

        Commands::Info => print_info(&SystemInfo::current()),
    }
    Ok(())
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
