use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use psyscreen::config::Config;
use psyscreen::fingerprint::{self, Signature};
use psyscreen::instrument::{self, Instrument, Locale};
use psyscreen::output;
use psyscreen::results::{self, ResultRecord};
use psyscreen::scoring::{self, Aggregation};
use psyscreen::session::{self, Console, Outcome, SessionError};

const EXIT_SUCCESS: i32 = 0;
const EXIT_INPUT: i32 = 2;
const EXIT_IO: i32 = 3;
const EXIT_CONFIG: i32 = 4;

#[derive(Args, Debug)]
struct RunArgs {
    /// Use the built-in demo scores instead of asking the questions
    #[arg(long)]
    demo: bool,

    /// Do not write the JSON result file
    #[arg(long)]
    no_save: bool,

    /// Where to write the JSON result (defaults to <results_dir>/my_<name>_results.json)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Big Five personality assessment (40 questions)
    Personality(RunArgs),
    /// Narcissistic traits screening (42 questions)
    Narcissism(RunArgs),
    /// Bipolar disorder risk screening (46 questions)
    Bipolar(RunArgs),
    /// Triagem de mitomania, em português (56 perguntas)
    Mythomania(RunArgs),
    /// Detect COH-PIAH: find the text closest to a reference signature
    Fingerprint {
        /// Text files to compare, one text per file (read from stdin if none)
        files: Vec<PathBuf>,

        /// Reference signature as six comma-separated values: wal,ttr,hlr,sal,sac,pal
        #[arg(long, allow_hyphen_values = true)]
        reference: Option<Signature>,
    },
    /// Re-render a saved result file
    Show {
        /// Path to a JSON result
        file: PathBuf,
    },
    /// List the available questionnaires
    List,
    /// Create a config file interactively
    Init,
}

#[derive(Parser, Debug)]
#[command(name = "psyscreen")]
#[command(
    about = "Self-report screening questionnaires and a text fingerprint comparator",
    long_about = None
)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/psyscreen/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn session_exit_code(error: &SessionError) -> i32 {
    match error {
        SessionError::Io(_) => EXIT_IO,
        SessionError::EndOfInput | SessionError::Score(_) => EXIT_INPUT,
    }
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // The wizard must work even when the existing config is broken
    if let Commands::Init = cli.command {
        let mut console = Console::stdio();
        match psyscreen::config::init::run_init_wizard(&mut console, cli.config) {
            Ok(_) => std::process::exit(EXIT_SUCCESS),
            Err(e) => {
                eprintln!("Init failed: {:#}", e);
                let code = e
                    .downcast_ref::<SessionError>()
                    .map(session_exit_code)
                    .unwrap_or(EXIT_IO);
                std::process::exit(code);
            }
        }
    }

    // Load config
    let config = match psyscreen::config::load_config(cli.config) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    // Validate weights and reference at startup
    if let Err(errors) = config.validate() {
        eprintln!("Config errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        std::process::exit(EXIT_CONFIG);
    }

    let use_colors = output::should_use_colors(config.color);

    match cli.command {
        Commands::Personality(args) => {
            run_questionnaire(&instrument::personality::INSTRUMENT, args, &config, use_colors)
        }
        Commands::Narcissism(args) => {
            run_questionnaire(&instrument::narcissism::INSTRUMENT, args, &config, use_colors)
        }
        Commands::Bipolar(args) => {
            run_questionnaire(&instrument::bipolar::INSTRUMENT, args, &config, use_colors)
        }
        Commands::Mythomania(args) => {
            run_questionnaire(&instrument::mythomania::INSTRUMENT, args, &config, use_colors)
        }
        Commands::Fingerprint { files, reference } => {
            run_fingerprint(files, reference, &config, use_colors)
        }
        Commands::Show { file } => show_result(file, &config, use_colors),
        Commands::List => {
            println!("{}", output::format_instrument_list(&instrument::ALL, use_colors));
        }
        Commands::Init => {}
    }

    std::process::exit(EXIT_SUCCESS);
}

fn run_questionnaire(
    instrument: &'static Instrument,
    args: RunArgs,
    config: &Config,
    use_colors: bool,
) {
    let aggregation = Aggregation::resolve(instrument, &config.weights);
    debug!(instrument = instrument.key, ?aggregation, "aggregation resolved");

    let sheet = if args.demo {
        match scoring::demo_sheet(instrument, &aggregation) {
            Ok(sheet) => sheet,
            Err(e) => {
                eprintln!("Demo data error: {}", e);
                std::process::exit(EXIT_CONFIG);
            }
        }
    } else {
        let mut console = Console::stdio();
        match session::administer(instrument, &aggregation, &mut console) {
            Ok(Outcome::Completed(sheet)) => sheet,
            // The session already printed its closing message
            Ok(Outcome::Cancelled(_)) | Ok(Outcome::Aborted(_)) => {
                std::process::exit(EXIT_SUCCESS)
            }
            Err(e) => {
                eprintln!("Input error: {}", e);
                std::process::exit(session_exit_code(&e));
            }
        }
    };

    debug!(instrument = instrument.key, overall = sheet.overall, "scored");
    println!();
    println!("{}", output::format_result(instrument, &sheet, use_colors));

    // An explicit --output wins over save_results: false
    let should_save = !args.no_save && (args.output.is_some() || config.save_results);
    if !should_save {
        debug!("result not saved");
        return;
    }

    let path = args.output.unwrap_or_else(|| {
        results::default_result_path(&config.results_dir(), instrument.key, args.demo)
    });
    let record = ResultRecord::new(instrument, &sheet, args.demo);
    if let Err(e) = results::save_result(&path, &record) {
        eprintln!("Failed to save results: {:#}", e);
        std::process::exit(EXIT_IO);
    }

    println!();
    match instrument.locale {
        Locale::En => println!("Results saved to {}", path.display()),
        Locale::Pt => println!("Resultados salvos em {}", path.display()),
    }
}

fn run_fingerprint(
    files: Vec<PathBuf>,
    reference: Option<Signature>,
    config: &Config,
    use_colors: bool,
) {
    let mut console = Console::stdio();

    let reference = match reference.or_else(|| config.reference()) {
        Some(reference) => reference,
        None => match fingerprint::read_reference(&mut console) {
            Ok(reference) => reference,
            Err(e) => {
                eprintln!("Input error: {}", e);
                std::process::exit(session_exit_code(&e));
            }
        },
    };
    debug!(%reference, "reference signature");

    let texts = if files.is_empty() {
        match fingerprint::read_texts(&mut console) {
            Ok(texts) => texts,
            Err(e) => {
                eprintln!("Input error: {}", e);
                std::process::exit(session_exit_code(&e));
            }
        }
    } else {
        match fingerprint::load_texts(&files) {
            Ok(texts) => texts,
            Err(e) => {
                eprintln!("{:#}", e);
                std::process::exit(EXIT_IO);
            }
        }
    };

    let evaluation = match fingerprint::evaluate(&texts, &reference) {
        Ok(evaluation) => evaluation,
        Err(e) => {
            eprintln!("Fingerprint error: {}", e);
            std::process::exit(EXIT_INPUT);
        }
    };

    println!();
    println!("{}", output::format_signature_table(&evaluation, use_colors));
    println!();
    println!("{}", output::format_verdict(&evaluation));
}

fn show_result(file: PathBuf, config: &Config, use_colors: bool) {
    let record = match results::load_result(&file) {
        Ok(record) => record,
        Err(e) => {
            eprintln!("{:#}", e);
            std::process::exit(EXIT_IO);
        }
    };

    let Some(instrument) = instrument::find(&record.instrument) else {
        eprintln!("Unknown instrument in result file: {}", record.instrument);
        std::process::exit(EXIT_IO);
    };

    let aggregation = Aggregation::resolve(instrument, &config.weights);
    let sheet = match scoring::sheet_from_scores(instrument, &record.scores, &aggregation) {
        Ok(sheet) => sheet,
        Err(e) => {
            eprintln!("Invalid result file {}: {}", file.display(), e);
            std::process::exit(EXIT_IO);
        }
    };

    let demo = if record.demo { " (demo)" } else { "" };
    println!(
        "{} {} - {}{}",
        record.assessment_type,
        record.version,
        record.timestamp.format("%Y-%m-%d %H:%M UTC"),
        demo
    );
    println!();
    println!("{}", output::format_result(instrument, &sheet, use_colors));
}
