//! Native preview entry point.

#[cfg(all(feature = "native", not(target_arch = "wasm32")))]
fn main() {
    use clap::Parser;

    env_logger::init();
    log::info!("Starting LongPress preview");

    let args = longpress_app::PreviewArgs::parse();
    if let Err(e) = longpress_app::preview::run(&args) {
        log::error!("{e}");
        eprintln!("longpress-preview: {e}");
        std::process::exit(1);
    }
}

#[cfg(not(all(feature = "native", not(target_arch = "wasm32"))))]
fn main() {
    panic!("Native feature not enabled. Use `cargo run --features native`");
}
