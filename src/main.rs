use std::io::{self, Write};
use std::process::ExitCode;

use detective_quest::{Explorer, mansion, run};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn print_banner(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "========================================")?;
    writeln!(out, "   BEM-VINDO(A) AO DETECTIVE QUEST")?;
    writeln!(out, "     Exploração do Mapa da Mansão")?;
    writeln!(out, "========================================")?;
    writeln!(out)
}

fn explore() -> detective_quest::error::Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut input = stdin.lock();
    let mut output = stdout.lock();

    print_banner(&mut output)?;

    let hall = mansion();
    let outcome = run(Explorer::new(&hall), &mut input, &mut output)?;
    tracing::debug!(room = outcome.room, reason = ?outcome.reason, "explorer returned");

    writeln!(output)?;
    writeln!(output, "Programa finalizado com sucesso.")?;
    output.flush()?;
    Ok(())
}

fn main() -> ExitCode {
    // Logs go to stderr; stdout carries the game.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "detective_quest=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    match explore() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "exploration aborted");
            eprintln!("Erro: {e}");
            ExitCode::FAILURE
        }
    }
}
