//! Command line arguments.

use crate::error::AppError;
use clap::Parser;
use std::ffi::OsString;

/// List the App Service plans of a subscription with their 7-day CPU and
/// memory averages, lowest memory first.
#[derive(Parser, Debug)]
#[command(name = "app-plan-metrics", version)]
pub struct Cli {
    /// Azure subscription ID, eg: 43c71976-32e8-403f-bf1d-885b0e3598b6
    pub subscription_id: String,
}

/// Parse `args` (program name first).
pub fn parse_args<I, T>(args: I) -> Result<Cli, AppError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    Ok(Cli::try_parse_from(args)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn test_parse_args() {
        let cli = parse_args(["app-plan-metrics", "43c71976-32e8-403f-bf1d-885b0e3598b6"])
            .expect("valid args");
        assert_eq!(cli.subscription_id, "43c71976-32e8-403f-bf1d-885b0e3598b6");
    }

    #[test]
    fn test_parse_args_missing_subscription() {
        match parse_args(["app-plan-metrics"]) {
            Err(AppError::Argument(e)) => {
                assert_eq!(e.kind(), ErrorKind::MissingRequiredArgument)
            }
            other => panic!("expected argument error, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_args_extra_argument() {
        assert!(matches!(
            parse_args(["app-plan-metrics", "sub", "extra"]),
            Err(AppError::Argument(_))
        ));
    }
}
