use anyhow::{Context, Result};
use clap::{ArgAction, Args, Parser, Subcommand};
use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;
use wtw_core::{Clock, Conditions, Observation, Resolver, Wind};
use wtw_remote::{RemoteResolver, WeatherFetcher};
use wtw_table::{AnswerTable, TableResolver};

mod config;
mod state;

use config::{Config, Mode};

#[derive(Parser, Debug)]
#[command(
    name = "wtw",
    version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("WTW_BUILD_SHA"), ")"),
    about = "What to wear for a run, given the conditions",
    args_conflicts_with_subcommands = true
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    #[command(flatten)]
    run: RunArgs,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Manage ~/.wtw/config.toml
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Write the default config file if none exists
    Init,
    /// Print the effective configuration
    Show,
    /// Print the config file path
    Path,
}

#[derive(Args, Debug)]
struct RunArgs {
    /// Get current conditions for location; overrides --temp, --conditions and --wind
    #[arg(long)]
    location: Option<String>,

    /// m (male) or f (female)
    #[arg(long, default_value = "m")]
    gender: String,

    /// Temperature (°F)
    #[arg(long, default_value_t = 60, allow_negative_numbers = true)]
    temp: i32,

    /// c (clear), pc (partly cloudy), o (overcast), r (heavy rain), lr (light rain) or s (snowing)
    #[arg(long, default_value = "c")]
    conditions: String,

    /// nw (no wind), lw (light wind), hw (heavy wind)
    #[arg(long, default_value = "nw")]
    wind: String,

    /// dawn, day, dusk, night or current
    #[arg(long, default_value = "current")]
    time: String,

    /// n (easy run), lr (long run), h (hard workout) or r (race)
    #[arg(long, default_value = "n")]
    intensity: String,

    /// c (cool), ib (in between) or w (warm)
    #[arg(long, default_value = "ib")]
    feel: String,

    /// Resolver to use (default from config: table)
    #[arg(long, value_enum)]
    mode: Option<Mode>,

    /// Gzip JSON answer table to use instead of the embedded one
    #[arg(long)]
    table: Option<PathBuf>,

    /// IANA timezone used to resolve --time current (or "local")
    #[arg(long)]
    timezone: Option<String>,

    /// Print conditions before answer (-vv also enables debug logs)
    #[arg(short, action = ArgAction::Count)]
    verbose: u8,
}

impl RunArgs {
    fn observation(&self) -> Observation {
        Observation {
            gender: self.gender.clone(),
            temperature: self.temp,
            conditions: Conditions::Token(self.conditions.clone()),
            wind: Wind::Token(self.wind.clone()),
            time: self.time.clone(),
            intensity: self.intensity.clone(),
            feel: self.feel.clone(),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.run.verbose);

    match cli.command {
        Some(Command::Config { command }) => match command {
            ConfigCommand::Init => config::init_config()?,
            ConfigCommand::Show => config::show_config(&config::load_config()?)?,
            ConfigCommand::Path => println!("{}", config::config_path()?.display()),
        },
        None => {
            let cfg = config::load_config()?;
            run(&cli.run, &cfg, &mut std::io::stdout().lock()).await?;
        }
    }

    Ok(())
}

/// Logs go to stderr; stdout carries only the answer.
fn init_tracing(verbose: u8) {
    let fallback = if verbose > 1 { "debug" } else { "warn" };
    let filter = std::env::var("WTW_LOG")
        .ok()
        .and_then(|v| EnvFilter::try_new(v).ok())
        .or_else(|| EnvFilter::try_from_default_env().ok())
        .unwrap_or_else(|| EnvFilter::new(fallback));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}

/// Resolve `current`, enrich from the weather provider, bucket, then
/// resolve. Answer lines (and the `-v` line) go to `out`.
async fn run(args: &RunArgs, cfg: &Config, out: &mut impl Write) -> Result<()> {
    let mode = args.mode.unwrap_or(cfg.resolver.mode);
    let resolver = build_resolver(mode, args, cfg)?;
    info!(resolver = resolver.name(), "resolver ready");

    let mut obs = args.observation();
    obs.resolve_time(&clock(args, cfg)?)?;

    if let Some(location) = weather_location(args, cfg) {
        WeatherFetcher::new(cfg.weather.provider_url.clone())
            .enrich(location, &mut obs)
            .await?;
    }

    let key = obs.normalize()?;

    if args.verbose > 0 {
        writeln!(out, "{}", key.command_line())?;
    }

    let answer = resolver.resolve(&key).await?;
    for item in &answer {
        writeln!(out, "{item}")?;
    }

    Ok(())
}

/// `--timezone` wins over `clock.timezone`.
fn clock(args: &RunArgs, cfg: &Config) -> Result<Clock> {
    let tz = args.timezone.as_deref().unwrap_or(&cfg.clock.timezone);
    Ok(Clock::from_timezone(tz)?)
}

/// `--location` wins over `weather.default_location`; an empty value skips
/// the weather lookup entirely.
fn weather_location<'a>(args: &'a RunArgs, cfg: &'a Config) -> Option<&'a str> {
    args.location
        .as_deref()
        .or(cfg.weather.default_location.as_deref())
        .filter(|l| !l.is_empty())
}

/// The table is decoded here, before any network call, so a bad snapshot
/// fails the run up front.
fn build_resolver(mode: Mode, args: &RunArgs, cfg: &Config) -> Result<Box<dyn Resolver>> {
    match mode {
        Mode::Table => {
            let table = match args.table.as_ref().or(cfg.resolver.table_path.as_ref()) {
                Some(path) => Arc::new(AnswerTable::load_path(path)?),
                None => AnswerTable::embedded().context("embedded answer table")?,
            };
            Ok(Box::new(TableResolver::new(table)))
        }
        Mode::Remote => Ok(Box::new(RemoteResolver::new(
            cfg.resolver.advice_url.clone(),
            cfg.resolver.query_style,
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(argv: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("wtw").chain(argv.iter().copied())).unwrap()
    }

    #[test]
    fn test_defaults_match_original_tool() {
        let cli = parse(&[]);
        assert!(cli.command.is_none());
        let obs = cli.run.observation();
        assert_eq!(obs, Observation::default());
        assert_eq!(cli.run.verbose, 0);
    }

    #[test]
    fn test_negative_temperature_flag() {
        let cli = parse(&["--temp", "-7", "--time", "night"]);
        let key = cli.run.observation().normalize().unwrap();
        assert_eq!(key.temperature, "-5");
    }

    #[test]
    fn test_verbosity_counts() {
        assert_eq!(parse(&["-v"]).run.verbose, 1);
        assert_eq!(parse(&["-vv"]).run.verbose, 2);
    }

    #[test]
    fn test_mode_flag() {
        assert_eq!(parse(&["--mode", "remote"]).run.mode, Some(Mode::Remote));
        assert!(Cli::try_parse_from(["wtw", "--mode", "psychic"]).is_err());
    }

    #[test]
    fn test_config_subcommand() {
        let cli = parse(&["config", "show"]);
        assert!(matches!(
            cli.command,
            Some(Command::Config {
                command: ConfigCommand::Show
            })
        ));
    }

    /// Reachable by nobody; any weather call made with it fails.
    const DEAD_PROVIDER: &str = "http://127.0.0.1:1/";

    fn snapshot_copy(name: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "wtw-cli-{}-{name}.json.gz",
            std::process::id()
        ));
        std::fs::write(
            &path,
            include_bytes!("../../wtw-table/assets/answers.json.gz"),
        )
        .unwrap();
        path
    }

    async fn run_to_string(args: &RunArgs, cfg: &Config) -> Result<String> {
        let mut out = Vec::new();
        run(args, cfg, &mut out).await?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[tokio::test]
    async fn test_verbose_line_precedes_answer_and_shows_bucketed_temp() {
        let cli = parse(&["--time", "day", "--temp", "62", "-v"]);
        let out = run_to_string(&cli.run, &Config::default()).await.unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(
            lines[0],
            "wtw -gender m -temp 60 -conditions c -wind nw -time day -intensity n -feel ib"
        );
        assert_eq!(lines[1..], ["Shorts", "Short-sleeve shirt", "Sunglasses"]);
    }

    #[tokio::test]
    async fn test_quiet_run_prints_only_items() {
        let cli = parse(&["--time", "day"]);
        let out = run_to_string(&cli.run, &Config::default()).await.unwrap();
        assert_eq!(out, "Shorts\nShort-sleeve shirt\nSunglasses\n");
    }

    #[tokio::test]
    async fn test_table_flag_overrides_config_table_path() {
        let mut cfg = Config::default();
        cfg.resolver.table_path = Some(PathBuf::from("/nonexistent/answers.json.gz"));

        let without_flag = parse(&["--time", "day"]);
        assert!(run_to_string(&without_flag.run, &cfg).await.is_err());

        let path = snapshot_copy("table-flag");
        let path_arg = path.display().to_string();
        let with_flag = parse(&["--time", "day", "--table", &path_arg]);
        let out = run_to_string(&with_flag.run, &cfg).await;
        std::fs::remove_file(&path).unwrap();
        assert!(out.unwrap().starts_with("Shorts\n"));
    }

    #[tokio::test]
    async fn test_default_location_triggers_weather_lookup() {
        let mut cfg = Config::default();
        cfg.weather.default_location = Some("Portsmouth, NH".to_string());
        cfg.weather.provider_url = DEAD_PROVIDER.to_string();

        let cli = parse(&["--time", "day"]);
        let err = run_to_string(&cli.run, &cfg).await.unwrap_err();
        assert!(
            matches!(
                err.downcast_ref::<wtw_core::WtwError>(),
                Some(wtw_core::WtwError::WeatherFetch(_))
            ),
            "{err:?}"
        );
    }

    #[tokio::test]
    async fn test_empty_location_flag_skips_weather() {
        let mut cfg = Config::default();
        cfg.weather.default_location = Some("Portsmouth, NH".to_string());
        cfg.weather.provider_url = DEAD_PROVIDER.to_string();

        let cli = parse(&["--time", "day", "--location", ""]);
        assert_eq!(weather_location(&cli.run, &cfg), None);
        let out = run_to_string(&cli.run, &cfg).await.unwrap();
        assert!(out.starts_with("Shorts\n"));
    }

    #[test]
    fn test_location_flag_overrides_default_location() {
        let mut cfg = Config::default();
        cfg.weather.default_location = Some("Portsmouth, NH".to_string());
        let cli = parse(&["--location", "Boulder, CO"]);
        assert_eq!(weather_location(&cli.run, &cfg), Some("Boulder, CO"));
        assert_eq!(weather_location(&parse(&[]).run, &cfg), Some("Portsmouth, NH"));
    }

    #[test]
    fn test_timezone_flag_overrides_config() {
        let mut cfg = Config::default();
        cfg.clock.timezone = "Mars/Olympus_Mons".to_string();

        let err = clock(&parse(&[]).run, &cfg).unwrap_err();
        assert!(err.to_string().contains("Mars/Olympus_Mons"));

        let cli = parse(&["--timezone", "Asia/Tokyo"]);
        assert_eq!(
            clock(&cli.run, &cfg).unwrap(),
            Clock::from_timezone("Asia/Tokyo").unwrap()
        );
    }

    #[tokio::test]
    async fn test_embedded_table_answers_default_day_run() {
        let cli = parse(&["--time", "day"]);
        let resolver = build_resolver(Mode::Table, &cli.run, &Config::default()).unwrap();
        let key = cli.run.observation().normalize().unwrap();
        let answer = resolver.resolve(&key).await.unwrap();
        assert!(!answer.is_empty());
    }

    #[tokio::test]
    async fn test_table_mode_does_not_validate() {
        let cli = parse(&["--time", "day", "--gender", "x"]);
        let resolver = build_resolver(Mode::Table, &cli.run, &Config::default()).unwrap();
        let key = cli.run.observation().normalize().unwrap();
        let err = resolver.resolve(&key).await.unwrap_err();
        assert!(matches!(err, wtw_core::WtwError::NotFound(_)));
    }
}
