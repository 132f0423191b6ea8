//! Command-line parsing for the `invaders` binary.

use std::path::PathBuf;

/// Parsed command-line options.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliOptions {
    pub config: Option<PathBuf>,
    pub ticks: Option<u64>,
    pub unpaced: bool,
}

/// Parse arguments (without the program name). `Ok(None)` means help was
/// requested.
pub fn parse_args(args: &[String]) -> Result<Option<CliOptions>, String> {
    let mut options = CliOptions::default();
    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--config" => {
                i += 1;
                let path = args.get(i).ok_or("--config requires a path")?;
                options.config = Some(PathBuf::from(path));
            }
            "--ticks" => {
                i += 1;
                let value = args.get(i).ok_or("--ticks requires a count")?;
                let ticks = value
                    .parse()
                    .map_err(|_| format!("invalid tick count: {value}"))?;
                options.ticks = Some(ticks);
            }
            "--unpaced" => options.unpaced = true,
            "help" | "--help" | "-h" => return Ok(None),
            other => return Err(format!("Unknown argument: {other}")),
        }
        i += 1;
    }
    Ok(Some(options))
}

pub fn usage() -> &'static str {
    "invaders: headless 3D invaders simulation\n\
     \n\
     Reads input events as JSON lines on stdin and writes one snapshot per\n\
     tick as a JSON line on stdout. Logs go to stderr (RUST_LOG).\n\
     \n\
       --config <path>   JSON config file (optional)\n\
       --ticks <N>       Stop after N ticks\n\
       --unpaced         Run as fast as possible instead of at tick_rate\n\
     \n\
     Input lines:\n\
     \n\
       {\"type\":\"LeftDown\"} {\"type\":\"LeftUp\"} {\"type\":\"RightDown\"} {\"type\":\"RightUp\"}\n\
       {\"type\":\"Fire\"} {\"type\":\"Reset\"}\n\
       {\"type\":\"PointerHit\",\"target\":\"2-1\"}\n\
       {\"type\":\"PointerRay\",\"origin\":[0,5,10],\"direction\":[0,0,-1]}\n\
       {\"key\":\"Space\",\"pressed\":true,\"repeat\":false}\n"
}
