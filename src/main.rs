use clap::Parser;
use las_processor::cli::{args::Args, commands};
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    // Create async runtime and run the main command logic
    let runtime = tokio::runtime::Runtime::new().unwrap_or_else(|e| {
        eprintln!("Failed to create async runtime: {}", e);
        process::exit(1);
    });

    match runtime.block_on(commands::run(args)) {
        Ok(()) => {
            process::exit(0);
        }
        Err(error) => {
            eprintln!("Error: {}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("LAS Processor - Well-Log File Toolkit");
    println!("=====================================");
    println!();
    println!("Parse Log ASCII Standard (LAS) well-log files: inspect header metadata,");
    println!("summarise curve data, export structured JSON, and scan whole directories.");
    println!();
    println!("USAGE:");
    println!("    las-processor <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    inspect     Report well summary, metadata, curves, and row counts");
    println!("    stats       Compute per-curve statistics over an optional depth range");
    println!("    export      Export a parsed LAS file as structured JSON");
    println!("    scan        Parse every LAS file below a directory");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Inspect a well log, including skipped-line diagnostics:");
    println!("    las-processor inspect well_01.las --warnings");
    println!();
    println!("    # Statistics for two curves between 8600 and 8700 feet:");
    println!("    las-processor stats well_01.las --curves GR.GAPI,RHOB.G/CC \\");
    println!("                        --start-depth 8600 --stop-depth 8700");
    println!();
    println!("    # Export to JSON:");
    println!("    las-processor export well_01.las -o well_01.json --pretty");
    println!();
    println!("    # Scan a directory of logs with 4 workers:");
    println!("    las-processor scan ./logs -j 4");
    println!();
    println!("For detailed help on any command, use:");
    println!("    las-processor <COMMAND> --help");
}
