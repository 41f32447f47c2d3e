use clap::Parser;
use daily_factoid::{Client, MonthDay};
use std::error::Error;

#[derive(Debug, Parser)]
#[command(
    name = "daily-factoid",
    about = "Print an on-this-day historical factoid for a calendar date"
)]
struct Cli {
    /// Date to look up, e.g. "April 21", "Apr 21" or "04/21"; defaults to today
    #[arg(long, value_parser = parse_month_day)]
    date: Option<MonthDay>,
}

fn parse_month_day(raw: &str) -> Result<MonthDay, String> {
    MonthDay::parse(raw).map_err(|e| e.to_string())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let cli = Cli::parse();
    let date = cli.date.unwrap_or_else(MonthDay::today);

    let client = Client::new()?;
    let factoid = client.factoid(date).await?;
    println!("{factoid}");

    Ok(())
}
