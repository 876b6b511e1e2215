use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use reflection_journal_config::Config;
use reflection_journal_engine::{
    FileLastSubmission, SubmissionValidator, find_references, load_journal,
};
use std::{
    env,
    io::{Stdout, stdout},
    path::PathBuf,
    process,
};

mod app;
mod check;
mod settings;
mod ui;

use app::{Action, App};
use check::CheckArgs;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = env::args().collect();
    let program = args.first().map(String::as_str).unwrap_or("reflection-journal");

    if args.get(1).map(String::as_str) == Some("check") {
        return run_check(program, &args[2..]);
    }

    // Determine journal path from CLI args or config file
    let config_path = Config::config_path();
    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: Failed to load config file: {e}");
            process::exit(1);
        }
    };

    let journal_path = match (args.len(), &config) {
        (2, _) => PathBuf::from(&args[1]),
        (1, Some(config)) => config.journal_path.clone(),
        (1, None) => {
            eprintln!("Error: No journal path provided and no config file found");
            eprintln!("Usage: {program} <journal.toml>");
            eprintln!("Or create a config file at {}", config_path.display());
            process::exit(1);
        }
        _ => {
            eprintln!("Usage: {program} [journal.toml]");
            eprintln!("       {program} {}", check::USAGE);
            process::exit(1);
        }
    };

    let journal = match load_journal(&journal_path) {
        Ok(journal) => journal,
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    };
    let lookup = config
        .as_ref()
        .map(|c| settings::scripture_lookup(&c.scripture))
        .unwrap_or_default();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(&journal, lookup);

    // Main loop
    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{err:?}");
    }

    Ok(())
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
            && app.handle_key(key.code) == Action::Quit
        {
            return Ok(());
        }
    }
}

fn run_check(program: &str, args: &[String]) -> Result<()> {
    let args = match CheckArgs::parse(args) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!("Usage: {program} {}", check::USAGE);
            process::exit(1);
        }
    };

    let config = Config::load()?;
    let Some(journal_path) = args
        .journal
        .clone()
        .or_else(|| config.as_ref().map(|c| c.journal_path.clone()))
    else {
        eprintln!("Error: No journal path given with --journal and no config file found");
        process::exit(1);
    };

    let journal = load_journal(&journal_path)?;
    let validator = SubmissionValidator::new(
        config
            .as_ref()
            .map(|c| settings::validation_rules(&c.comments))
            .unwrap_or_default(),
    );
    let state_dir = config
        .as_ref()
        .map(Config::state_dir)
        .unwrap_or_else(Config::config_dir);
    let mut store = FileLastSubmission::in_dir(&state_dir);

    match check::check(&args, &journal, &validator, &mut store)? {
        Ok(comment) => {
            let lookup = config
                .as_ref()
                .map(|c| settings::scripture_lookup(&c.scripture))
                .unwrap_or_default();
            println!("Accepted, awaiting approval.");
            println!("entry_id: {}", comment.entry_id);
            println!(
                "display_name: {}",
                comment.display_name.as_deref().unwrap_or("(anonymous)")
            );
            println!("body: {}", comment.body);
            for reference in find_references(&comment.body) {
                println!("  {} -> {}", reference.text, reference.lookup_url(&lookup));
            }
            Ok(())
        }
        Err(rejection) => {
            eprintln!("{rejection}");
            process::exit(2);
        }
    }
}
