use std::path::PathBuf;

const DEFAULT_MAX_STEPS: u64 = 1_000_000;

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let image_path: PathBuf = args.next().map(PathBuf::from).unwrap_or_else(|| {
        eprintln!("Usage: pocketboy <image_path> [max_steps]");
        std::process::exit(2);
    });
    let max_steps: u64 = match args.next() {
        Some(arg) => arg.parse().unwrap_or_else(|_| {
            eprintln!("Invalid step budget '{arg}'; expected an integer.");
            std::process::exit(2);
        }),
        None => DEFAULT_MAX_STEPS,
    };

    let image = std::fs::read(&image_path).unwrap_or_else(|err| {
        eprintln!("Failed to read image '{}': {err}", image_path.display());
        std::process::exit(1);
    });

    log::info!(
        "running '{}' ({} bytes, budget {max_steps} instructions)",
        image_path.display(),
        image.len()
    );

    if let Err(err) = pocketboy::run(&image, max_steps) {
        eprintln!("pocketboy: {err:#}");
        std::process::exit(1);
    }
}
