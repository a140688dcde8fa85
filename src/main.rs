use balagray::crawler::StartDepth;
use balagray::driver::{self, RunConfig};
use balagray::metrics::OptMode;
use std::path::PathBuf;
use std::time::Duration;

fn main() {
    let mut cfg = RunConfig::default();
    let mut code: Option<u64> = None;
    let mut validate_path: Option<String> = None;
    let mut data_path: Option<String> = None;

    let args: Vec<String> = std::env::args().collect();
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--all" => {
                code = None;
                i += 1;
            }
            "--code" => {
                let v = args.get(i + 1).unwrap_or_else(|| usage_and_exit(2));
                let hex = v.trim_start_matches("0x").trim_start_matches("0X");
                code = Some(u64::from_str_radix(hex, 16).unwrap_or_else(|_| usage_and_exit(2)));
                i += 2;
            }
            "--timeout" => {
                let v = args.get(i + 1).unwrap_or_else(|| usage_and_exit(2));
                let millis: u64 = v.parse().unwrap_or_else(|_| usage_and_exit(2));
                cfg.timeout = Duration::from_millis(millis);
                i += 2;
            }
            "--mode" => {
                let v = args.get(i + 1).unwrap_or_else(|| usage_and_exit(2));
                cfg.crawl.opt_mode = match v.as_str() {
                    "maxspan" => OptMode::MaxSpan,
                    "stddev" | "stddev-tiebreak" => OptMode::StdDevTiebreak,
                    "stddev-only" => OptMode::StdDevOnly,
                    _ => usage_and_exit(2),
                };
                i += 2;
            }
            "--start-depth" => {
                let v = args.get(i + 1).unwrap_or_else(|| usage_and_exit(2));
                cfg.crawl.start_depth = match v.as_str() {
                    "1" => StartDepth::One,
                    "2" => StartDepth::Two,
                    _ => usage_and_exit(2),
                };
                i += 2;
            }
            "--prune-imbalance" => {
                let v = args.get(i + 1).unwrap_or_else(|| usage_and_exit(2));
                cfg.crawl.prune_imbalance = v.parse().unwrap_or_else(|_| usage_and_exit(2));
                i += 2;
            }
            "--prune-maxtrans" => {
                let v = args.get(i + 1).unwrap_or_else(|| usage_and_exit(2));
                cfg.crawl.prune_max_trans = v.parse().unwrap_or_else(|_| usage_and_exit(2));
                i += 2;
            }
            "--no-prune" => {
                cfg.crawl.prune_imbalance = u32::MAX;
                cfg.crawl.prune_max_trans = u32::MAX;
                i += 1;
            }
            "--no-wrap-predict" => {
                cfg.crawl.wrap_predict = false;
                i += 1;
            }
            "--no-overrides" => {
                cfg.apply_set_overrides = false;
                i += 1;
            }
            "--out" => {
                let v = args.get(i + 1).unwrap_or_else(|| usage_and_exit(2));
                cfg.out_dir = PathBuf::from(v);
                i += 2;
            }
            "--validate" => {
                let v = args.get(i + 1).unwrap_or_else(|| usage_and_exit(2));
                validate_path = Some(v.clone());
                i += 2;
            }
            "--from-data" => {
                let v = args.get(i + 1).unwrap_or_else(|| usage_and_exit(2));
                data_path = Some(v.clone());
                i += 2;
            }
            "--help" | "-h" => usage_and_exit(0),
            _ => usage_and_exit(2),
        }
    }

    if let Some(path) = validate_path {
        validate_and_exit(&path, cfg.crawl.opt_mode.tracks_std_dev());
    }

    if let Some(path) = data_path {
        match driver::export_saved(&path, &cfg) {
            Ok(winners) => {
                println!("{} winners exported", winners.len());
                return;
            }
            Err(e) => {
                eprintln!("{e}");
                std::process::exit(1);
            }
        }
    }

    let result = match code {
        Some(code) => driver::search_with_timeout(code, &cfg).map(|outcome| {
            let w = &outcome.winner;
            println!(
                "set {:X}: balance = {}, maxtrans = {}, maxspan = {}, stddev = {}, proven = {}",
                w.set_code, w.imbalance, w.max_trans, w.max_span, w.std_dev, w.proven
            );
        }),
        None => driver::run_all(&cfg).map(|winners| {
            println!("{} sets searched", winners.len());
        }),
    };
    if let Err(e) = result {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn validate_and_exit(path: &str, track_std_dev: bool) -> ! {
    match balagray::winner::load_winner_list(path, track_std_dev) {
        Ok(winners) => match balagray::validate::validate_winner_list(&winners) {
            Ok(()) => {
                println!("Validation OK: {} winners.", winners.len());
                std::process::exit(0);
            }
            Err(e) => {
                eprintln!("Validation FAILED: {e}");
                std::process::exit(1);
            }
        },
        Err(e) => {
            eprintln!("can't read winner list '{path}': {e}");
            std::process::exit(1);
        }
    }
}

fn usage_and_exit(code: i32) -> ! {
    eprintln!(
        "Usage:\n  balagray [--code HEX | --all] [options]\n  balagray --validate FILE [--mode MODE]\n\nOptions:\n  --code HEX               Search a single set code (hex, e.g. 234)\n  --all                    Search the whole interval-set catalog (default)\n  --timeout MILLIS          Base wall-clock cap per set (default: 30000)\n  --mode MODE               maxspan | stddev-tiebreak | stddev-only (default: stddev-tiebreak)\n  --start-depth 1|2         Crawl start depth (default: 2)\n  --prune-imbalance N       Imbalance pruning ceiling (default: 3)\n  --prune-maxtrans N        Max-transition pruning ceiling (default: off)\n  --no-prune                Disable both pruning ceilings\n  --no-wrap-predict         Disable wrap prediction\n  --no-overrides            Ignore the per-set pruning/timeout overrides\n  --out DIR                 Output directory (default: current)\n  --from-data FILE          Re-emit the exports from a saved winner list\n  --validate FILE           Validate a saved winner list and exit\n"
    );
    std::process::exit(code)
}
