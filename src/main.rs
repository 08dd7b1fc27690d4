//! DGA CLI - Command-line interface
//!
//! Commands:
//!   form     - Interactive form (default)
//!   eval     - Evaluate one sample
//!   rules    - Print the fault decision table
//!   schema   - Print JSON schema for output types
//!   config   - Check or show configuration

mod cli;

use cli::*;
use dga::*;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (command, rest) = cli::util::resolve_command(&args);

    let config = if cli::util::uses_config(command) {
        match configured(command, rest) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error: {}", e);
                return ExitCode::from(1);
            }
        }
    } else {
        logging::init(&DgaConfig::default().log);
        DgaConfig::default()
    };

    let result = match command {
        "form" => cmd_form(&config),
        "eval" => cmd_eval(rest, &config),
        "rules" => cmd_rules(&config),
        "config" => cmd_config(rest, &config),
        "schema" => cmd_schema(rest),
        "version" | "--version" | "-v" => {
            println!("dga {}", VERSION);
            Ok(())
        }
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        cmd => {
            eprintln!("Unknown command: {}", cmd);
            print_usage();
            Err(Error::Usage("Unknown command".into()))
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(1)
        }
    }
}

/// Load configuration and start logging from it
fn configured(command: &str, rest: &[String]) -> Result<DgaConfig> {
    match cli::util::load_config(rest) {
        Ok(config) => {
            logging::init(&config.log);
            tracing::debug!(command, output = ?config.output, "starting");
            Ok(config)
        }
        Err(e) => {
            logging::init(&DgaConfig::default().log);
            Err(e)
        }
    }
}

fn print_usage() {
    println!(
        r#"
DGA - Dissolved Gas Analysis

USAGE:
    dga [COMMAND] [OPTIONS]
    dga [OPTIONS]                     Same as `dga form [OPTIONS]`

COMMANDS:
    form                              Interactive form (default)
    eval <ch4> <c2h6> <c2h4> <c2h2> <co> <co2>
                                      Evaluate one sample (ppm)
    rules                             Print the fault decision table
    schema [result|config|list]       Print JSON schema for output type
    config <check|show>               Validate or print configuration
    version                           Print version

OPTIONS:
    --ch4 <v> ... --co2 <v>           Named gas values for eval
    --json                            JSON output (eval, form, rules)
    --explain                         Show the rule that fired
    --config <file>                   Config file (default: ./dga.yaml)

ENVIRONMENT:
    RUST_LOG                          Log filter, overrides the config `log` key

EXAMPLES:
    dga eval 90 0 0 0 0 0
    dga eval --ch4 0 --c2h6 40 --c2h4 0 --c2h2 0 --co 0 --co2 0 --json
    dga rules
    dga schema result
"#
    );
}
