//! `navcam` viewer binary: loads options (optional path argument) and runs the viewer.

use std::path::Path;

use navcam::options::Options;
use navcam::Viewer;

fn main() {
    env_logger::init();

    let options = match std::env::args().nth(1) {
        Some(path) => match Options::load(Path::new(&path)) {
            Ok(opts) => opts,
            Err(e) => {
                log::error!("{e}");
                std::process::exit(1);
            }
        },
        None => Options::default(),
    };

    log::info!("default keys: W/S/A/D move, Q/E or drag to pan, G/H edit blocks, R reset");

    if let Err(e) = Viewer::builder().with_options(options).build().run() {
        log::error!("{e}");
        std::process::exit(1);
    }
}
