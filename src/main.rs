use chrono::Local;
use std::io;
use std::process::ExitCode;
use wordterm::cli::{Cli, CliInterface, parse_cli};
use wordterm::error::AppError;
use wordterm::game_state::{GameInterface, GameSession, game_loop};
use wordterm::logging::{LogDestination, init_logging};
use wordterm::share::ShareStyle;
use wordterm::tui::{Theme, TuiInterface};
use wordterm::wordbank::WordStore;

fn main() -> ExitCode {
    let cli = parse_cli();

    let destination = LogDestination::select(cli.log_file.as_deref(), cli.plain);
    if let Err(e) = init_logging(destination) {
        eprintln!("Failed to set up logging: {e}");
    }

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), AppError> {
    let words = match &cli.words_path {
        Some(path) => WordStore::from_file(path)?,
        None => WordStore::embedded()?,
    };
    log::info!(
        "Loaded {} target words, {} valid guesses",
        words.target_count(),
        words.word_count()
    );

    let session = match cli.day {
        Some(day) => GameSession::for_day(&words, day),
        None => GameSession::for_date(&words, Local::now().date_naive()),
    };
    let mut session = session.with_scoring_rule(cli.scoring_rule());
    log::info!("Playing day {}", session.day_index());

    let style = ShareStyle::default();
    let mut interface: Box<dyn GameInterface> = if cli.plain {
        Box::new(CliInterface::new(io::stdin().lock()))
    } else {
        Box::new(TuiInterface::new(Theme::default())?)
    };

    let outcome = game_loop(&mut session, interface.as_mut(), &style);
    log::info!("Session ended: {outcome}");

    // Leaving the alternate screen wipes the board, so keep the share text
    drop(interface);
    if !cli.plain && outcome.is_terminal() {
        print!("{}", session.share_summary(&style));
    }
    Ok(())
}
