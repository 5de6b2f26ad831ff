//! Phonetic Drill - CLI
//!
//! Phonetic alphabet spelling drill with TUI and line-based modes.
//! Answers can be typed or spoken through an external speech-to-text command.

use anyhow::{Result, anyhow};
use clap::{Parser, Subcommand};
use log::{LevelFilter, warn};
use phonetic_drill::{
    commands::{DrillConfig, check_response, run_drill, spell_word},
    core::Dictionary,
    input::{Acquirer, CommandRecognizer, TypedInput},
    output::{print_alphabet, print_feedback, print_session_summary, print_spelling},
    wordlists::{BUILTIN_ALPHABET, BUILTIN_WORDS, RandomWords, load_alphabet, load_word_source},
};
use std::process::ExitCode;

#[derive(Parser)]
#[command(
    name = "phonetic_drill",
    about = "Learn to spell words with the phonetic alphabet (Alfa, Bravo, Charlie...)",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Alphabet: 'nato' (default, built in) or path to a CSV file (letter,word[,alt...])
    #[arg(short, long, global = true, default_value = BUILTIN_ALPHABET)]
    alphabet: String,

    /// Word list: 'default' (built in) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = BUILTIN_WORDS)]
    words: String,

    /// Seed for the word order (random if omitted)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Speech-to-text command that records one answer and prints the transcript.
    /// Split on whitespace; quotes are not interpreted, so wrap complex commands in a script
    #[arg(long, global = true)]
    voice_cmd: Option<String>,

    /// Log level (off, error, warn, info, debug, trace); RUST_LOG overrides
    #[arg(long, global = true, default_value = "warn")]
    log_level: LevelFilter,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI drill (default)
    Play,

    /// Line-based drill (supports voice answers via --voice-cmd)
    Drill {
        /// Stop after this many graded rounds
        #[arg(short = 'n', long)]
        rounds: Option<usize>,

        /// Accept voice transcripts without asking for confirmation
        #[arg(long)]
        no_confirm: bool,
    },

    /// Show the phonetic spelling of a word
    Spell {
        /// The word to spell
        word: String,
    },

    /// Grade one response for a word (exit code 1 if incorrect)
    Check {
        /// The target word
        word: String,

        /// The code-words given as the answer
        #[arg(required = true, num_args = 1..)]
        response: Vec<String>,
    },

    /// List the loaded phonetic alphabet
    Alphabet,
}

fn init_logging(level: LevelFilter) {
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(cli.log_level);

    // Dictionary errors are fatal at startup
    let dictionary = load_alphabet(&cli.alphabet)?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => {
            if cli.voice_cmd.is_some() {
                warn!("--voice-cmd is ignored in play mode; use 'drill' for spoken answers");
            }
            let words = load_word_source(&cli.words, cli.seed, &dictionary)?;
            run_play_command(&dictionary, words)?;
        }
        Commands::Drill { rounds, no_confirm } => {
            let mut words = load_word_source(&cli.words, cli.seed, &dictionary)?;
            run_drill_command(
                &dictionary,
                &mut words,
                cli.voice_cmd.as_deref(),
                rounds,
                no_confirm,
            )?;
        }
        Commands::Spell { word } => print_spelling(&spell_word(&word, &dictionary)),
        Commands::Check { word, response } => {
            let feedback = check_response(&word, &response.join(" "), &dictionary);
            print_feedback(&feedback);
            if !feedback.correct {
                return Ok(ExitCode::FAILURE);
            }
        }
        Commands::Alphabet => print_alphabet(&dictionary),
    }

    Ok(ExitCode::SUCCESS)
}

fn run_play_command(dictionary: &Dictionary, words: RandomWords) -> Result<()> {
    use phonetic_drill::interactive::{App, run_tui};

    let app = App::new(dictionary, words);
    let stats = run_tui(app)?;
    print_session_summary(&stats);
    Ok(())
}

fn run_drill_command(
    dictionary: &Dictionary,
    words: &mut RandomWords,
    voice_cmd: Option<&str>,
    rounds: Option<usize>,
    no_confirm: bool,
) -> Result<()> {
    let typed = TypedInput::stdio();
    let mut acquirer = match voice_cmd {
        Some(command_line) => {
            let recognizer = CommandRecognizer::parse(command_line)
                .ok_or_else(|| anyhow!("--voice-cmd must name a program"))?;
            Acquirer::with_voice(Box::new(recognizer), typed).confirm_voice(!no_confirm)
        }
        None => Acquirer::typed(typed),
    };

    let config = DrillConfig { max_rounds: rounds };
    let stats = run_drill(dictionary, words, &mut acquirer, &config)?;
    print_session_summary(&stats);
    Ok(())
}
