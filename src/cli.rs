use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "plainquiz", version, about = "Terminal multiple-choice quiz runner")]
pub struct Cli {
    /// Question file: blank-line separated blocks of prompt, answer, options
    #[arg(default_value = "questions.txt")]
    pub path: String,

    /// Seed the shuffles for a reproducible run
    #[arg(long, value_name = "n")]
    pub seed: Option<u64>,

    /// Keep questions and options in file order
    #[arg(long)]
    pub no_shuffle: bool,

    /// Show a summary of the question file without starting a session
    #[arg(long)]
    pub status: bool,

    /// Write the parsed questions to a YAML file and exit
    #[arg(long, value_name = "path")]
    pub export: Option<String>,
}
