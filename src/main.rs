use clap::Parser;
use clap::builder::NonEmptyStringValueParser;
use dotenv::dotenv;
use tgsend::run_send;

/// Send notifications via Telegram
#[derive(Parser, Debug)]
#[command(name = "tg", version, about, long_about = None)]
struct Args {
    /// Telegram chat ID
    #[arg(value_parser = NonEmptyStringValueParser::new())]
    chat_id: String,

    /// Message text to send
    #[arg(value_parser = NonEmptyStringValueParser::new())]
    text: String,

    /// API request timeout in seconds
    #[arg(long, default_value_t = 10, value_parser = clap::value_parser!(u64).range(1..))]
    timeout: u64,
}

#[tokio::main]
async fn main() {
    // Load environment variables from `.env` file into std::env (optional)
    dotenv().ok();

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            // --help and --version land here too; only real parse errors are failures
            let code = if e.use_stderr() { 1 } else { 0 };
            let _ = e.print();
            std::process::exit(code);
        }
    };

    match run_send(&args.chat_id, &args.text, args.timeout).await {
        Ok(true) => std::process::exit(0),
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}
