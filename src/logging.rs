use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Inicializa el logging a consola con el filtro configurado.
/// Un filtro inválido cae a `info`.
pub fn init_logging(filter: &str) {
    let env_filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_target(false))
        .init();
}
