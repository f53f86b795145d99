use tracing_subscriber::EnvFilter;

/// Workspace crates whose events the default filter lets through.
const CRATE_TARGETS: &[&str] = &[
    "atropos",
    "atropos_calendar",
    "atropos_growth",
    "atropos_overlap",
    "atropos_session",
    "atropos_sode",
];

/// Sets up the tracing subscriber from the `-v` count.
///
/// No flag logs warnings only; `-v`, `-vv` and `-vvv` raise the level to
/// info, debug and trace. A `RUST_LOG` environment variable, when present,
/// takes precedence over the flag.
pub fn init(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let directives = CRATE_TARGETS
        .iter()
        .map(|target| format!("{target}={level}"))
        .collect::<Vec<_>>()
        .join(",");

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directives));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
