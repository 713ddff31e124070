use clap::{Args, Parser, Subcommand};
use vaas_ephem::{
    Body, SeriesEphemeris, lahiri_ayanamsha_deg, normalize_360, position_of, sun_equatorial,
};
use vaas_panchang::{
    NakshatraMethod, PanchangConfig, PanchangEngine, PanchangRequest, PanchangResult, Precision,
};
use vaas_time::{CivilTime, civil_to_jd, days_in_month, jd_to_civil, parse_datetime};
use vaas_vedic_base::{
    ABODE_SHLOKA, FORMULA_SHLOKA, FORMULA_TITLE, GeoLocation, Language, RiseSetConfig,
    RiseSetResult, classify, compute_all_events, local_noon_jd_for_date,
};

#[derive(Parser)]
#[command(name = "vaas", about = "Shiv Vaas panchang calculator")]
struct Cli {
    /// Output language: sanskrit or english
    #[arg(long, global = true, default_value = "sanskrit")]
    lang: String,
    /// Position precision: approximate, series or delegated
    #[arg(long, global = true, default_value = "series")]
    precision: String,
    /// Nakshatra/yoga method: day-of-year or moon-longitude
    #[arg(long, global = true, default_value = "day-of-year")]
    nakshatra_method: String,
    /// Log debug output (RUST_LOG overrides)
    #[arg(long, short, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

/// Date and observer shared by the daily commands.
#[derive(Args)]
struct Place {
    /// Local date (YYYY-MM-DD)
    #[arg(long)]
    date: String,
    /// Latitude in degrees, north positive
    #[arg(long, allow_negative_numbers = true)]
    lat: f64,
    /// Longitude in degrees, east positive
    #[arg(long, allow_negative_numbers = true)]
    lon: f64,
    /// UTC offset in hours (default: local mean time)
    #[arg(long, allow_negative_numbers = true)]
    tz: Option<f64>,
    /// Altitude above sea level in meters
    #[arg(long, default_value = "0")]
    alt: f64,
    /// Specific local time (HH:MM) instead of sunrise
    #[arg(long)]
    time: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Tithi at sunrise or at a given local time
    Tithi {
        #[command(flatten)]
        place: Place,
    },
    /// Full daily panchang
    Panchang {
        #[command(flatten)]
        place: Place,
    },
    /// Shiv Vaas for a date
    ShivVaas {
        #[command(flatten)]
        place: Place,
    },
    /// Worship band for a local time
    PujaTime {
        /// Local datetime (YYYY-MM-DD HH:MM)
        #[arg(long)]
        at: String,
    },
    /// Sunrise, sunset and twilight events
    Sunrise {
        #[command(flatten)]
        place: Place,
    },
    /// Sun and Moon positions at a UTC instant
    Position {
        /// UTC datetime (YYYY-MM-DDThh:mm[:ss]Z)
        #[arg(long)]
        at: String,
    },
    /// Convert between UTC datetime and Julian Day
    Jd {
        /// UTC datetime (YYYY-MM-DDThh:mm[:ss]Z)
        #[arg(long, conflicts_with = "jd")]
        at: Option<String>,
        /// Julian Day to convert back
        #[arg(long)]
        jd: Option<f64>,
    },
    /// Shiv Vaas abode for a tithi number
    Classify {
        /// Tithi number 1-30
        tithi: u8,
    },
    /// One line per day for a calendar month
    Month {
        #[arg(long)]
        year: i32,
        #[arg(long)]
        month: u32,
        #[arg(long, allow_negative_numbers = true)]
        lat: f64,
        #[arg(long, allow_negative_numbers = true)]
        lon: f64,
        #[arg(long, allow_negative_numbers = true)]
        tz: Option<f64>,
        #[arg(long, default_value = "0")]
        alt: f64,
    },
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default.into()),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn parse_language(s: &str) -> Language {
    s.parse().unwrap_or_else(|e| {
        eprintln!("{e}");
        eprintln!("Valid: sanskrit (default), english");
        std::process::exit(1);
    })
}

fn parse_config(precision: &str, method: &str) -> PanchangConfig {
    let precision: Precision = precision.parse().unwrap_or_else(|e| {
        eprintln!("{e}");
        eprintln!("Valid: approximate, series (default), delegated");
        std::process::exit(1);
    });
    let method: NakshatraMethod = method.parse().unwrap_or_else(|e| {
        eprintln!("{e}");
        eprintln!("Valid: day-of-year (default), moon-longitude");
        std::process::exit(1);
    });
    PanchangConfig::default()
        .with_precision(precision)
        .with_nakshatra_method(method)
}

fn parse_place(place: &Place) -> PanchangRequest {
    PanchangRequest::parse(
        &place.date,
        place.time.as_deref(),
        place.lat,
        place.lon,
        place.tz,
    )
    .map(|r| r.with_altitude(place.alt))
    .unwrap_or_else(|e| {
        eprintln!("Invalid input: {e}");
        std::process::exit(1);
    })
}

fn parse_instant(s: &str) -> CivilTime {
    parse_datetime(s).unwrap_or_else(|e| {
        eprintln!("{e}");
        std::process::exit(1);
    })
}

fn print_degraded(reasons: &[impl std::fmt::Display]) {
    for r in reasons {
        println!("  Note: {r}");
    }
}

fn hhmm(t: &CivilTime) -> String {
    format!("{:02}:{:02}", t.hour, t.minute)
}

fn print_panchang(p: &PanchangResult) {
    println!("Panchang for {} (reference {})", p.date, p.reference_instant);
    println!(
        "  Tithi:     {} {} ({}), elongation {:.2}°",
        p.tithi.paksha_name, p.tithi.specific_name, p.tithi.tithi.number, p.tithi.tithi.elongation_deg
    );
    println!("  Karana:    {} ({})", p.karana_name, p.karana.number);
    println!(
        "  Nakshatra: {} ({}) [{}]",
        p.nakshatra_name,
        p.nakshatra.number,
        p.nakshatra_method.name()
    );
    println!("  Yoga:      {} ({})", p.yoga_name, p.yoga.number);
    println!("  Vaar:      {}", p.vaar_name);
    println!(
        "  Sunrise {}  Sunset {}  Noon {}  ({:.2} h of daylight)",
        hhmm(&p.rise_set.sunrise),
        hhmm(&p.rise_set.sunset),
        hhmm(&p.rise_set.solar_noon),
        p.rise_set.day_length_hours()
    );
    if let Some(m) = &p.moon_rise_set {
        let show = |t: &Option<CivilTime>| t.as_ref().map_or("--:--".to_string(), hhmm);
        println!("  Moonrise {}  Moonset {}", show(&m.moonrise), show(&m.moonset));
    }
    if let (Some(sun), Some(moon)) = (p.sun_longitude_deg, p.moon_longitude_deg) {
        println!("  Sun {sun:.4}°  Moon {moon:.4}° (tropical)");
    }
    println!("  Rahu Kaal:   {}", p.muhurta.rahu_kaal);
    println!("  Yamaganda:   {}", p.muhurta.yamaganda);
    println!("  Gulika Kaal: {}", p.muhurta.gulika_kaal);
    println!("  Abhijit:     {}", p.muhurta.abhijit);
    println!("  Precision:   {}", p.precision.name());
    print_degraded(&p.degraded);
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let lang = parse_language(&cli.lang);
    let config = parse_config(&cli.precision, &cli.nakshatra_method);
    let engine = PanchangEngine::new(config);

    match cli.command {
        Commands::Tithi { place } => {
            let req = parse_place(&place);
            let t = engine.compute_tithi(&req.date, &req.location, lang, req.instant);
            let d = &t.value;
            println!("Tithi: {} (number {})", d.specific_name, d.tithi.number);
            println!(
                "  Paksha: {}  Tithi in paksha: {}",
                d.paksha_name, d.tithi.tithi_in_paksha
            );
            println!(
                "  Elongation: {:.4}°  ({:.0}% elapsed)",
                d.tithi.elongation_deg,
                d.tithi.fraction_elapsed() * 100.0
            );
            if let Some(r) = &t.degraded {
                println!("  Note: {r}");
            }
        }

        Commands::Panchang { place } => {
            let req = parse_place(&place);
            let p = engine.compute_panchang(&req.date, &req.location, lang, req.instant);
            print_panchang(&p);
        }

        Commands::ShivVaas { place } => {
            let req = parse_place(&place);
            let s = engine.compute_shiv_vaas(&req.date, &req.location, lang, req.instant);
            println!("Shiv Vaas: {} - {}", s.index, s.name);
            println!("  {}: {}", FORMULA_TITLE.get(lang), s.formula);
            println!("  Tithi: {} {} ({})", s.tithi.paksha_name, s.tithi.specific_name, s.tithi.tithi.number);
            println!("  {}", s.auspiciousness.label().get(lang));
            println!("  Significance: {}", s.significance);
            println!("  Result: {}", s.result);
            println!("  Recommended: {}", s.recommended.join(", "));
            println!("  Avoid: {}", s.avoid.join(", "));
            println!("  {}", s.shastric_statement);
            println!("  Valid: {} to {}", s.valid_from, s.valid_until);
            for o in &s.observances {
                println!("  Observance: {} - {}", o.name_in(lang), o.significance().get(lang));
            }
            println!();
            println!("  {FORMULA_SHLOKA}");
            println!("  {ABODE_SHLOKA}");
            print_degraded(&s.degraded);
        }

        Commands::PujaTime { at } => {
            let instant = parse_instant(&at);
            let p = engine.puja_time_for(&instant, lang);
            println!("{}: {}", p.label, p.significance);
        }

        Commands::Sunrise { place } => {
            let req = parse_place(&place);
            let loc: GeoLocation = req.location;
            let rs_config = RiseSetConfig::default();
            let jd_noon = local_noon_jd_for_date(&req.date, &loc);
            let events = compute_all_events(&SeriesEphemeris, &loc, jd_noon, &rs_config)
                .unwrap_or_else(|e| {
                    eprintln!("Error: {e}");
                    std::process::exit(1);
                });

            println!(
                "Rise/Set events for {} at {:.4}°N, {:.4}°E (UTC{:+}):\n",
                place.date, loc.latitude_deg, loc.longitude_deg, loc.utc_offset_hours
            );
            for result in &events {
                match result {
                    RiseSetResult::Event { jd_ut, event } => {
                        println!("  {:20} {}", event.name(), loc.jd_to_local(*jd_ut));
                    }
                    RiseSetResult::NeverRises => println!("  Sun never rises (polar night)"),
                    RiseSetResult::NeverSets => println!("  Sun never sets (midnight sun)"),
                }
            }
        }

        Commands::Position { at } => {
            let utc = parse_instant(&at);
            let jd = civil_to_jd(&utc);
            let aya = lahiri_ayanamsha_deg(jd);
            println!("JD {jd:.6}  Lahiri ayanamsha {aya:.4}°");
            for body in [Body::Sun, Body::Moon] {
                let p = position_of(body, jd);
                println!(
                    "  {:5} lon {:9.4}°  sidereal {:9.4}°  lat {:+.4}°  dist {:.6}",
                    body.name(),
                    p.longitude_deg,
                    normalize_360(p.longitude_deg - aya),
                    p.latitude_deg,
                    p.distance
                );
            }
            let eq = sun_equatorial(jd);
            println!(
                "  Sun RA {:.4}°  Dec {:+.4}°",
                eq.ra_rad.to_degrees(),
                eq.dec_rad.to_degrees()
            );
        }

        Commands::Jd { at, jd } => match (at, jd) {
            (Some(at), _) => println!("{:.6}", civil_to_jd(&parse_instant(&at))),
            (None, Some(jd)) => println!("{}", jd_to_civil(jd)),
            (None, None) => {
                eprintln!("Pass --at or --jd");
                std::process::exit(1);
            }
        },

        Commands::Classify { tithi } => {
            if !(1..=30).contains(&tithi) {
                eprintln!("Invalid tithi: {tithi} (1-30)");
                std::process::exit(1);
            }
            let c = classify(tithi);
            let info = c.info();
            println!("{} - {}", c.index, info.name.get(lang));
            println!("  {}", c.formula);
            println!("  {}", c.auspiciousness.label().get(lang));
            println!("  {}", info.result.get(lang));
        }

        Commands::Month {
            year,
            month,
            lat,
            lon,
            tz,
            alt,
        } => {
            if !(1..=12).contains(&month) {
                eprintln!("Invalid month: {month} (1-12)");
                std::process::exit(1);
            }
            let date = format!("{year:04}-{month:02}-01");
            let req = PanchangRequest::parse(&date, None, lat, lon, tz)
                .map(|r| r.with_altitude(alt))
                .unwrap_or_else(|e| {
                    eprintln!("Invalid input: {e}");
                    std::process::exit(1);
                });
            let days = engine.panchang_for_range(
                &req.date,
                days_in_month(year, month),
                &req.location,
                lang,
            );
            for p in &days {
                let s = classify(p.tithi.tithi.number);
                println!(
                    "{:04}-{:02}-{:02} {:10} {} {:>2} {:24} {:16} SV {} {}{}",
                    p.date.year,
                    p.date.month,
                    p.date.day,
                    p.vaar_name,
                    hhmm(&p.rise_set.sunrise),
                    p.tithi.tithi.number,
                    p.tithi.specific_name,
                    p.nakshatra_name,
                    s.index,
                    s.abode.name_in(lang),
                    if p.degraded.is_empty() { "" } else { " *" }
                );
            }
        }
    }
}
