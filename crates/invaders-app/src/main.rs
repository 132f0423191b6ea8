use std::process;

use invaders_app::cli::{parse_args, usage};
use invaders_app::config::AppConfig;
use invaders_app::surface::JsonLinesSurface;
use invaders_app::{game_loop, input};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let options = match parse_args(&args) {
        Ok(Some(options)) => options,
        Ok(None) => {
            eprintln!("{}", usage());
            return;
        }
        Err(msg) => {
            log::error!("{msg}");
            eprintln!("{}", usage());
            process::exit(1);
        }
    };

    let mut config = match &options.config {
        Some(path) => match AppConfig::load_from_file(path) {
            Ok(config) => config,
            Err(e) => {
                log::error!("failed to load {}: {e}", path.display());
                process::exit(1);
            }
        },
        None => AppConfig::default(),
    };
    if let Some(ticks) = options.ticks {
        config.max_ticks = Some(ticks);
    }
    if options.unpaced {
        config.paced = false;
    }

    let surface = JsonLinesSurface::new(std::io::stdout());
    let (cmd_tx, handle) = game_loop::spawn_game_loop(config, surface);
    input::spawn_stdin_reader(cmd_tx);

    match handle.join() {
        Ok(Ok(ticks)) => log::info!("stopped after {ticks} ticks"),
        Ok(Err(e)) => {
            log::error!("{e}");
            process::exit(1);
        }
        Err(_) => {
            log::error!("game loop panicked");
            process::exit(1);
        }
    }
}
