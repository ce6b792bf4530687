#![forbid(unsafe_code)]

//! frankenform demo binary entry point.

use std::io;

use fform_demo::app::DemoApp;
use fform_demo::{cli, logging};

fn main() {
    let opts = cli::Opts::parse();

    if let Err(e) = logging::init(opts.log.as_deref()) {
        eprintln!("Failed to initialize logging: {e}");
    }

    let mut app = match DemoApp::from_opts(&opts) {
        Ok(app) => app,
        Err(e) => {
            eprintln!("Failed to initialize: {e}");
            std::process::exit(1);
        }
    };

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    if let Err(e) = app.run(stdin.lock(), &mut stdout) {
        eprintln!("Runtime error: {e}");
        std::process::exit(1);
    }
}
