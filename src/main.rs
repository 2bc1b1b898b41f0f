use anyhow::Result;
use clap::Parser;
use mindbloom::app::App;
use mindbloom::cli::Cli;
use mindbloom::styles::init_theme;
use mindbloom::utils::{get_config_path, get_log_dir};
use mindbloom::Config;

/// Set up panic hook to restore terminal state on panic
fn setup_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = crossterm::terminal::disable_raw_mode();
        let _ = crossterm::execute!(std::io::stdout(), crossterm::terminal::LeaveAlternateScreen);
        original_hook(panic_info);
    }));
}

fn main() -> Result<()> {
    setup_panic_hook();

    let cli = Cli::parse();

    let mut config = Config::load_or_create(&get_config_path())?;
    cli.apply(&mut config);
    init_theme(config.theme_type());

    let log_dir = get_log_dir();
    std::fs::create_dir_all(&log_dir)?;
    let log_file = log_dir.join("mindbloom.log");

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let file_appender = tracing_appender::rolling::never(&log_dir, "mindbloom.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(non_blocking)
        .with_ansi(false)
        .init();

    eprintln!("Logs are being written to: {:?}", log_file);

    let mut app = App::new(config, cli.screen)?;
    let result = app.run();

    drop(guard);

    result
}
