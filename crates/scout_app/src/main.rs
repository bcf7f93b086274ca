mod app;
mod commands;
mod effects;
mod logging;
mod render;
mod url_store;

fn main() -> anyhow::Result<()> {
    logging::initialize(logging::LogDestination::File);

    // The first argument is the deep link: a query string such as
    // "?q=react&minStars=50&sort=forks".
    let initial = std::env::args().nth(1).unwrap_or_default();
    app::run_app(&initial)
}
