use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter used when `RUST_LOG` is unset. Verbose raises this crate to debug,
/// on top of a configured directive when there is one.
fn default_directive(verbose: bool, directive: Option<&str>) -> String {
    match (directive, verbose) {
        (Some(directive), true) => format!("{},course_registry=debug", directive),
        (Some(directive), false) => directive.to_string(),
        (None, true) => "course_registry=debug,info".to_string(),
        (None, false) => "course_registry=info".to_string(),
    }
}

fn build_filter(verbose: bool, directive: Option<&str>) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose, directive)))
}

// Logs go to stderr; stdout belongs to the menu.
pub fn init_cli_logger(verbose: bool, directive: Option<&str>) {
    tracing_subscriber::registry()
        .with(build_filter(verbose, directive))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}

pub fn init_json_logger(verbose: bool, directive: Option<&str>) {
    tracing_subscriber::registry()
        .with(build_filter(verbose, directive))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .json(),
        )
        .init();
}
