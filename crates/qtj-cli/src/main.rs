use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "qtj-cli",
    about = "Pack a directory of query files into one line-indexed JSON document",
    version
)]
struct Cli {
    /// Directory containing query files named like q1.txt
    queries_dir: PathBuf,
    /// Output file name; .json is appended when missing
    output_name: String,
}

fn main() {
    let cli = Cli::parse();
    let doc = qtj_core::pack_dir(&cli.queries_dir).unwrap_or_else(|e| {
        eprintln!("error: {}", e);
        std::process::exit(2);
    });
    let mut output_name = cli.output_name;
    if !output_name.ends_with(".json") {
        output_name.push_str(".json");
    }
    let dest = PathBuf::from(output_name);
    qtj_core::write_document(&dest, &doc).unwrap_or_else(|e| {
        eprintln!("error writing {}: {}", dest.display(), e);
        std::process::exit(3);
    });
}
