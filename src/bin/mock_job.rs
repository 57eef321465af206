//! Mock behavior runner: a process-contract stub a host job-invocation
//! system runs to test its own subprocess handling (exit-status inspection,
//! blocking reads with timeout, stdout capture).
//!
//! One keyword argument selects the behavior:
//! no args → no-op, `error` → fault exit, `success` → exit 0,
//! `sleep <ms>` → pause then exit 0, `print <text>` → echo then exit 0.
//! Anything else exits with the same fault code as `error`.

use merge_job::utils::error::exit;
use std::env;
use std::thread;
use std::time::Duration;

fn run(args: &[String]) -> i32 {
    match args.first().map(String::as_str) {
        None => exit::SUCCESS,
        Some("error") => exit::FAULT,
        Some("success") => exit::SUCCESS,
        Some("sleep") => match args.get(1).and_then(|raw| raw.parse::<f64>().ok()) {
            // fractional milliseconds allowed, negatives are malformed
            Some(ms) if ms.is_finite() && ms >= 0.0 => {
                thread::sleep(Duration::from_secs_f64(ms / 1000.0));
                exit::SUCCESS
            }
            _ => exit::FAULT,
        },
        Some("print") => match args.get(1) {
            Some(text) => {
                println!("{text}");
                exit::SUCCESS
            }
            None => exit::FAULT,
        },
        Some(_) => exit::FAULT,
    }
}

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();
    std::process::exit(run(&args));
}
