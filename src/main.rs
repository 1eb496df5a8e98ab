//! aws-env - export AWS SSM parameters as environment variables
//!
//! Prints `export NAME='VALUE'` (or dotenv) lines for every parameter under
//! the path in AWS_ENV_PATH, for use as `eval $(aws-env)`.

use aws_env::cli::{startup, Startup};
use aws_env::commands::run_export;
use aws_env::config::ENV_PATH_VAR;
use aws_env::error::{AppError, ServiceError, StoreError};

fn main() {
    // The gate is checked before the flags are validated
    let startup = match startup(std::env::args_os(), |key| std::env::var(key).ok()) {
        Ok(startup) => startup,
        Err(e) => e.exit(),
    };

    // Initialize logging
    aws_env::logging::init(startup.verbose());

    let Startup::Run { cli, path } = startup else {
        log::warn!("aws-env running locally, without {}", ENV_PATH_VAR);
        return;
    };

    let result = cli
        .to_config(&path)
        .map_err(AppError::from)
        .and_then(|config| run_export(&config));

    if let Err(e) = result {
        log::error!("{}", e);
        print_error(&e);
        std::process::exit(1);
    }
}

fn print_error(err: &AppError) {
    eprintln!("Error: {}", err);

    // Print helpful hints for common errors
    let store_err = match err {
        AppError::Store(e) | AppError::Service(ServiceError::Store(e)) => Some(e),
        _ => None,
    };

    if let Some(StoreError::RequestFailed { message, .. }) = store_err {
        if message.contains("credentials") || message.contains("Credentials") {
            eprintln!();
            eprintln!("Hint: No usable AWS credentials were found.");
            eprintln!("      Set AWS_PROFILE or AWS_ACCESS_KEY_ID/AWS_SECRET_ACCESS_KEY.");
        } else if message.contains("region") {
            eprintln!();
            eprintln!("Hint: Set AWS_REGION or pass --region.");
        } else if message.contains("AccessDenied") {
            eprintln!();
            eprintln!("Hint: The caller needs ssm:GetParametersByPath (and kms:Decrypt");
            eprintln!("      for SecureString values) on the path.");
        }
    }
}
