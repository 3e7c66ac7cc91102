use boggle_solver::cli::{CliInterface, parse_cli};
use boggle_solver::logging::init_logger;
use boggle_solver::tui::TuiInterface;
use boggle_solver::{DictionarySource, LexiconIndex, game_loop, load_dictionary};
use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = parse_cli();
    init_logger(cli.debug, cli.tui);

    let config = match cli.game_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Invalid board: {e}");
            return ExitCode::FAILURE;
        }
    };

    let (words, source) = match load_dictionary(cli.dictionary_path.as_deref()) {
        Ok(loaded) => loaded,
        Err(e) => {
            let path = cli.dictionary_path.unwrap_or_default();
            eprintln!("Failed to load dictionary from '{}': {e}", path.display());
            return ExitCode::FAILURE;
        }
    };
    let lexicon = LexiconIndex::from_words(&words);
    match &source {
        DictionarySource::File(path) => {
            log::info!("Loaded {} words from {}", lexicon.len(), path.display());
        }
        DictionarySource::Embedded => {
            log::info!("Loaded {} words from the built-in dictionary", lexicon.len());
        }
    }

    let mut rng = cli.rng();
    if cli.tui {
        match TuiInterface::new() {
            Ok(mut interface) => game_loop(&lexicon, &config, &mut rng, &mut interface),
            Err(e) => {
                eprintln!("Failed to start the terminal UI: {e}");
                return ExitCode::FAILURE;
            }
        }
    } else {
        println!("Loaded {} words.", lexicon.len());
        let mut interface = CliInterface::new(io::stdin().lock());
        game_loop(&lexicon, &config, &mut rng, &mut interface);
    }
    ExitCode::SUCCESS
}
