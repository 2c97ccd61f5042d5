use std::process::ExitCode;

use tracing::error;
use tracing_subscriber::EnvFilter;

use qrv1m::QRBuilder;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let data = std::env::args().nth(1).unwrap_or_else(|| "Hello".to_string());

    match QRBuilder::new(data.as_bytes()).build() {
        Ok(qr) => {
            println!("{}", qr.to_str(1));
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!(%err, "Failed to generate QR");
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
