use app_plan_metrics::azure::{default_credential, ArmClient, MetricsClient, PlansClient};
use app_plan_metrics::config;
use app_plan_metrics::error::AppError;
use app_plan_metrics::run_cli;
use colored::Colorize;
use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Root};

#[tokio::main]
async fn main() {
    // Do as little as possible in main.rs as it can't contain any tests
    init_logging();
    dotenv::dotenv().ok();
    log::info!("#Start main()");

    let mut stdout = std::io::stdout();
    let result = run_cli(
        std::env::args_os(),
        || {
            let arm = ArmClient::new(default_credential())?;
            Ok((PlansClient::new(arm.clone()), MetricsClient::new(arm)))
        },
        &mut stdout,
    )
    .await;

    match result {
        Ok(()) => log::info!("#End main()"),
        // clap prints help/version/usage itself and picks the exit code
        Err(AppError::Argument(e)) => e.exit(),
        Err(e) => {
            log::error!("{e}");
            eprintln!("{} {e}", "ERROR".on_red());
            std::process::exit(1);
        }
    }
}

/// log4rs.yml when present, plain stderr at warn otherwise.
fn init_logging() {
    if log4rs::init_file(config::LOG4RS_FILE, Default::default()).is_ok() {
        return;
    }
    let stderr = ConsoleAppender::builder().target(Target::Stderr).build();
    let fallback = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(LevelFilter::Warn));
    match fallback {
        Ok(cfg) => {
            if let Err(e) = log4rs::init_config(cfg) {
                eprintln!("Error initializing log4rs: {e}");
            }
        }
        Err(e) => eprintln!("Error initializing log4rs: {e}"),
    }
}
