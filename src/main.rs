use std::process::ExitCode;

use factura_fixture::invoice;

fn main() -> ExitCode {
    env_logger::init();
    match invoice::generate(invoice::DEFAULT_OUTPUT) {
        Ok(()) => {
            println!("✅ PDF de prueba creado: {}", invoice::DEFAULT_OUTPUT);
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!(
                "error: no se pudo crear {}: {}",
                invoice::DEFAULT_OUTPUT,
                err,
            );
            ExitCode::FAILURE
        }
    }
}
