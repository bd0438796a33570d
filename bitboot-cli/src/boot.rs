//! Cosmetic boot narration.
//!
//! Every "stage" here is console output plus an artificial delay.
//! Nothing is initialized, probed or mounted; the whole sequence
//! exists to set the scene before the logic unit prompt.

use colored::*;

use crate::config::Config;

struct BootStage {
    label: &'static str,
    details: &'static [&'static str],
    base_ms: u64,
}

const STAGES: &[BootStage] = &[
    BootStage {
        label: "firmware self-test",
        details: &[
            "cpu0 online",
            "memory map verified, all blocks clean",
            "rtc synchronized",
        ],
        base_ms: 120,
    },
    BootStage {
        label: "stage-1 loader",
        details: &["reading boot sector", "jumping to 0x7C00"],
        base_ms: 90,
    },
    BootStage {
        label: "kernel",
        details: &[
            "decompressing image",
            "interrupt table armed",
            "scheduler idle loop parked",
        ],
        base_ms: 150,
    },
    BootStage {
        label: "device drivers",
        details: &["tty0 attached", "kbd0 attached", "null0 attached"],
        base_ms: 110,
    },
    BootStage {
        label: "system services",
        details: &[
            "mounting virtual filesystems",
            "entropy pool topped up",
            "logic unit calibrated",
        ],
        base_ms: 100,
    },
];

const BAR_WIDTH: usize = 24;

pub fn run(config: &Config) {
    banner();
    for (done, stage) in STAGES.iter().enumerate() {
        println!("{} {}", "::".blue().bold(), stage.label.bold());
        tracing::info!(stage = stage.label, "boot stage starting");
        for detail in stage.details {
            sleep(config, stage.base_ms);
            println!("  [{}] {}", "  OK  ".green().bold(), detail);
        }
        println!(
            "  [{}] {:>3}%",
            render_bar(done + 1, STAGES.len()),
            (done + 1) * 100 / STAGES.len()
        );
    }
    sleep(config, 200);
    println!();
    println!("{}", "boot sequence complete, logic unit ready".green().bold());
    tracing::info!("boot sequence complete");
    println!();
}

pub fn shutdown(config: &Config) {
    sleep(config, 150);
    println!();
    println!("{}", "system halted.".dimmed());
    tracing::info!("system halted");
}

fn banner() {
    println!("{}", format!("bitboot v{}", env!("CARGO_PKG_VERSION")).cyan().bold());
    println!("{}", "simulated boot sequence for a lesson in bitwise logic".dimmed());
    println!();
}

/// Fixed-width `=====>` progress bar, full at `done == total`.
fn render_bar(done: usize, total: usize) -> String {
    let filled = (done * BAR_WIDTH / total).min(BAR_WIDTH);
    let mut bar = String::with_capacity(BAR_WIDTH);
    if filled > 0 {
        bar.push_str(&"=".repeat(filled - 1));
        bar.push(if filled == BAR_WIDTH { '=' } else { '>' });
    }
    bar.push_str(&" ".repeat(BAR_WIDTH - filled));
    bar
}

fn sleep(config: &Config, base_ms: u64) {
    if let Some(delay) = config.delay(base_ms) {
        std::thread::sleep(delay);
    }
}
