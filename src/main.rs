use clap::Parser;
use clap::error::ErrorKind;
use playtest_requester::{AppError, RequestOptions};

#[derive(Parser)]
#[command(name = "playtest")]
#[command(version)]
#[command(
    about = "Request an automated playtest from the Claude API and record the response",
    long_about = None
)]
struct Cli {
    /// Test type label (overrides TEST_TYPE)
    #[arg(short = 't', long)]
    test_type: Option<String>,
    /// Print the assembled prompt without calling the API
    #[arg(long)]
    prompt_preview: bool,
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        Err(e) => {
            println!("❌ {}", e);
            std::process::exit(1);
        }
    };

    let result: Result<(), AppError> = if cli.prompt_preview {
        playtest_requester::preview_prompt(cli.test_type).map(|prompt| {
            println!("{}", prompt.as_str());
        })
    } else {
        playtest_requester::request_playtest(RequestOptions { test_type: cli.test_type })
            .map(|_| ())
    };

    if let Err(e) = result {
        println!("❌ {}", e);
        std::process::exit(e.exit_code());
    }
}
