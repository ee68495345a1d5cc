use foldlist::errors::FoldlistResult;
use std::env;
use std::path::PathBuf;
use std::process;

fn main() -> FoldlistResult<()> {
    let data_path = parse_args();
    foldlist::app::run(data_path)?;
    Ok(())
}

fn parse_args() -> Option<PathBuf> {
    let args: Vec<String> = env::args().skip(1).collect();
    let mut data_path = None;

    for arg in &args {
        match arg.as_str() {
            "-h" | "--help" => {
                print_help();
                process::exit(0);
            }
            "-V" | "--version" => {
                println!("foldlist {}", env!("CARGO_PKG_VERSION"));
                process::exit(0);
            }
            arg if arg.starts_with('-') => {
                eprintln!("error: unknown option '{}'", arg);
                print_help();
                process::exit(1);
            }
            arg => {
                if data_path.is_some() {
                    eprintln!("error: more than one data file given");
                    process::exit(1);
                }
                data_path = Some(PathBuf::from(arg));
            }
        }
    }

    data_path
}

fn print_help() {
    println!("foldlist - A collapsible, section-grouped list viewer");
    println!();
    println!("USAGE:");
    println!("    foldlist [FILE]");
    println!();
    println!("ARGS:");
    println!("    <FILE>        TOML data file with sections and items");
    println!("                  (built-in sample data when omitted)");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help    Print help information");
    println!("    -V, --version Print version information");
}
