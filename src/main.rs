//! Main entry point for the series-heatmap CLI application.

use chrono::{Local, NaiveDate};
use clap::Parser;
use crossterm::{
    event::Event,
    execute,
    style::{Color as TermColor, Stylize},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::{debug, info, warn};
use ratatui::{backend::CrosstermBackend, Terminal};
use series_heatmap::binge::format_finish_date;
use series_heatmap::config::Config;
use series_heatmap::highlights::{season_highlights, series_highlights};
use series_heatmap::links::series_links;
use series_heatmap::stats::format_runtime;
use series_heatmap::tui::{draw, poll_event, tui_log_level, Action, App};
use series_heatmap::{
    build_episode_matrix, classify_rating, compute_aggregate_stats, load_series_file,
    BingeParameters, SeasonFilter, SeriesData,
};
use std::io::{self, stdout};
use std::path::PathBuf;
use std::time::Duration;

/// Command-line arguments for the series-heatmap application.
#[derive(Parser, Debug)]
#[command(
    name = "series-heatmap",
    version,
    about = "Episode rating heatmaps and binge-watching projections",
    long_about = "Show a season x episode rating heatmap for a TV series, with runtime stats and a projected finish date for a viewing schedule."
)]
struct Args {
    /// Series data file (JSON, as delivered by the metadata provider)
    file: PathBuf,

    /// Second series to compare against
    #[arg(short, long)]
    compare: Option<PathBuf>,

    /// Hours watched per day (overrides config)
    #[arg(short = 'H', long)]
    hours_per_day: Option<f64>,

    /// Days watched per week (overrides config)
    #[arg(short, long)]
    days_per_week: Option<f64>,

    /// First viewing day as YYYY-MM-DD (defaults to today)
    #[arg(short, long)]
    start: Option<NaiveDate>,

    /// Seasons to count for the finish date: "all" or a season number
    #[arg(long, default_value = "all")]
    season: SeasonFilter,

    /// Print stats and the finish date instead of opening the TUI
    #[arg(long)]
    summary: bool,

    /// Mark each season's best and worst episode
    #[arg(short, long)]
    best_worst: bool,

    /// Log verbosity level: 0=error, 1=warn, 2=info, 3=debug, 4=trace
    #[arg(short, long, default_value_t = 1)]
    log: u8,
}

/// Initialize the terminal for TUI rendering.
fn init_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    execute!(stdout(), EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout());
    Terminal::new(backend)
}

/// Restore the terminal to its original state.
fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(stdout(), LeaveAlternateScreen)?;
    Ok(())
}

/// Print a colored heatmap, the stats, and the binge projection to stdout.
fn print_summary(series: &SeriesData, params: &BingeParameters, show_best_worst: bool) {
    println!("{}", series.to_display().bold());
    if let Some(description) = &series.description {
        println!("{}", description);
    }
    println!();

    let matrix = build_episode_matrix(series);
    let highlights = if show_best_worst {
        season_highlights(&matrix)
    } else {
        Vec::new()
    };

    print!("     ");
    for n in 1..=matrix.width() {
        print!("{:^5}", n);
    }
    println!();

    for (row_idx, row) in matrix.rows.iter().enumerate() {
        print!("{:<5}", format!("S{}", row.season_number));
        for (col, cell) in row.cells.iter().enumerate() {
            match cell {
                Some(episode) => {
                    let fill = classify_rating(episode.rating).fill_color;
                    let marker = match highlights.get(row_idx) {
                        Some(h) if h.best == Some(col) => '▲',
                        Some(h) if h.worst == Some(col) => '▼',
                        _ => ' ',
                    };
                    let text = format!("{:>4.1}{}", episode.rating, marker);
                    print!(
                        "{}",
                        text.with(TermColor::Black).on(TermColor::Rgb {
                            r: fill.r,
                            g: fill.g,
                            b: fill.b,
                        })
                    );
                }
                None => print!("{}", "  ·  ".dark_grey()),
            }
        }
        println!();
    }
    println!();

    let stats = compute_aggregate_stats(series, SeasonFilter::All);
    println!("Rating:        {} / 10", stats.rating_display());
    println!("Total Time:    {}", stats.runtime_display());
    println!("Avg Ep Length: {} min", stats.average_runtime_minutes);
    let overall = series_highlights(&matrix);
    if let (Some(best), Some(worst)) = (overall.best, overall.worst) {
        println!("Best:          {}", best.to_display().green());
        println!("Worst:         {}", worst.to_display().red());
    }
    println!();

    match params.plan(series) {
        Ok(Some(plan)) => println!(
            "{} ({}): you will finish on {}",
            params.season_filter,
            format_runtime(plan.total_runtime_minutes),
            format_finish_date(plan.finish_date).bold()
        ),
        Ok(None) => println!("{}: nothing to watch", params.season_filter),
        Err(e) => println!("{}", e.to_string().red()),
    }
    println!();

    for link in series_links(series) {
        println!("{:<16}{}", link.name, link.url);
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Initialize logging
    let log_level = match args.log {
        0 => log::LevelFilter::Error,
        1 => log::LevelFilter::Warn,
        2 => log::LevelFilter::Info,
        3 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };

    env_logger::Builder::new()
        .filter_level(log_level)
        .format_timestamp(None)
        .format_target(false)
        .init();

    debug!("Log level set to {:?}", log_level);

    // Load config
    let config = Config::load().unwrap_or_else(|e| {
        warn!("Failed to load config: {}. Using defaults.", e);
        Config::new()
    });

    // Merge config with CLI args
    let config = Config {
        hours_per_day: args.hours_per_day.unwrap_or(config.hours_per_day),
        days_per_week: args.days_per_week.unwrap_or(config.days_per_week),
        show_highlights: args.best_worst || config.show_highlights,
    };
    let start_date = args.start.unwrap_or_else(|| Local::now().date_naive());

    let mut series = vec![load_series_file(&args.file)?];
    if let Some(path) = &args.compare {
        series.push(load_series_file(path)?);
    }
    info!(
        "Loaded {} series: {}",
        series.len(),
        series
            .iter()
            .map(|s| s.title.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    );

    if args.summary {
        let params = BingeParameters {
            hours_per_day: config.hours_per_day,
            days_per_week: config.days_per_week,
            start_date,
            season_filter: args.season,
        };
        for (i, s) in series.iter().enumerate() {
            if i > 0 {
                println!("{}", "─".repeat(40));
            }
            print_summary(s, &params, config.show_highlights);
        }
        return Ok(());
    }

    let mut app = App::new(series, &config, start_date);
    app.season_filter = args.season;

    log::set_max_level(tui_log_level(log_level));
    let mut terminal = init_terminal()?;
    let result = run_app(&mut terminal, &mut app);
    restore_terminal()?;
    log::set_max_level(log_level);

    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|f| draw(f, app))?;

        if let Some(Event::Key(key)) = poll_event(Duration::from_millis(100))? {
            match app.handle_input(key) {
                Action::Quit => break,
                Action::Link(url) => {
                    info!("Episode link: {}", url);
                    app.set_status(&url);
                }
                Action::None => {}
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
