use std::any::Any;
use std::backtrace::Backtrace;
use std::panic::Location;

use axum::response::Response;
use tracing::error;

use crate::views::error_page::generic_error_response;

/// Handler para `CatchPanicLayer`: devuelve un 500 genérico sin filtrar
/// información interna. La ubicación y el backtrace los registra el hook
/// instalado con `install_panic_hook`.
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    error!("💥 Pánico atendiendo request: {}", panic_message(&*err));
    generic_error_response()
}

/// Reemplaza el hook por defecto: cada pánico queda en el log con mensaje,
/// archivo:línea:columna y backtrace completo
pub fn install_panic_hook() {
    std::panic::set_hook(Box::new(|info| {
        let report = describe_panic(info.payload(), info.location());
        let backtrace = Backtrace::force_capture();
        error!("💥 Pánico: {}\n{}", report, backtrace);
    }));
}

pub fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else if let Some(message) = payload.downcast_ref::<&str>() {
        message.to_string()
    } else {
        "pánico sin mensaje".to_string()
    }
}

fn describe_panic(payload: &(dyn Any + Send), location: Option<&Location<'_>>) -> String {
    match location {
        Some(at) => format!(
            "{} en {}:{}:{}",
            panic_message(payload),
            at.file(),
            at.line(),
            at.column()
        ),
        None => format!("{} en ubicación desconocida", panic_message(payload)),
    }
}
