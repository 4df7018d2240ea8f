use clap::{Parser, Subcommand};
use colored::Colorize;

use lumi_unit::TestRunner;

#[derive(Parser)]
#[command(name = "lumi-unit")]
#[command(author = "NL Team")]
#[command(version = "0.1.0")]
#[command(about = "Minimal unit-test harness demo driver", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the sample tests, or a named subset
    Run {
        /// Names of sample tests to run (all when omitted)
        names: Vec<String>,
    },

    /// List the sample tests
    List,
}

type SampleTest = fn(&mut TestRunner);

/// The driver enumerates its tests explicitly; there is no discovery.
const SAMPLE_TESTS: &[(&str, SampleTest)] = &[
    ("arithmetic", arithmetic),
    ("strings", strings),
    ("sub_timing", sub_timing),
];

fn arithmetic(t: &mut TestRunner) {
    t.check(2 + 2 == 4, "2 + 2 == 4");
    t.check(10 % 3 == 1, "10 % 3 == 1");
    t.check_msg(
        i32::MAX.checked_add(1).is_none(),
        "checked_add on i32::MAX reports overflow",
    );
}

fn strings(t: &mut TestRunner) {
    let greeting = format!("{} {}", "hello", "world");
    t.check(greeting.len() == 11, "greeting.len() == 11");
    t.check(
        greeting.starts_with("hello"),
        "greeting.starts_with(\"hello\")",
    );
}

fn sub_timing(t: &mut TestRunner) {
    // Times only the lookup, not the table construction
    let table: Vec<u64> = (0..1000).map(|n| n * n).collect();
    t.tick();
    let hit = table.binary_search(&250_000).is_ok();
    t.tock();
    t.check(hit, "table.binary_search(&250_000).is_ok()");
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::List => {
            for (name, _) in SAMPLE_TESTS {
                println!("{}", name);
            }
        }
        Commands::Run { names } => {
            let selected: Vec<(&str, SampleTest)> = SAMPLE_TESTS
                .iter()
                .copied()
                .filter(|(name, _)| names.is_empty() || names.iter().any(|n| n == name))
                .collect();

            if selected.is_empty() {
                eprintln!("{} No sample test matches {:?}", "✗".red(), names);
                std::process::exit(2);
            }

            let mut runner = TestRunner::new();
            let mut failed = 0;
            for (name, test) in selected {
                if !runner.run(name, test).is_passed() {
                    failed += 1;
                }
            }

            if failed > 0 {
                std::process::exit(1);
            }
        }
    }
}
