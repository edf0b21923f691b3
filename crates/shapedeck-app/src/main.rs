//! Main application entry point (native).

fn main() {
    env_logger::init();
    log::info!("Starting ShapeDeck");

    if let Err(e) = shapedeck_app::App::run() {
        log::error!("Event loop error: {}", e);
        std::process::exit(1);
    }
}
