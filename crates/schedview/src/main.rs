use anyhow::{bail, Context, Result};
use schedview::client::SchedulerClient;
use schedview::config::{ErrorDisplay, SchedulerConfig};
use schedview::view::{enroll_in_section, CourseView};
use std::io::{self, BufRead, Write};
use tracing::warn;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::WARN)
        .init();

    let (course_name, base_url) = parse_args()?;

    let mut config = SchedulerConfig::default();
    if let Some(base_url) = base_url {
        config.base_url = base_url;
    }
    let client = SchedulerClient::with_config(config).context("failed to build client")?;

    let mut view = CourseView::new(&course_name, ErrorDisplay::Banner);
    if let Err(e) = view.refresh(&client).await {
        warn!("initial refresh failed: {e}");
    }

    let stdin = io::stdin();
    loop {
        print!("{}", view.render());
        print!("section id to enroll (blank to quit): ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim();
        if line.is_empty() {
            break;
        }

        let Ok(section_id) = line.parse::<i64>() else {
            eprintln!("not a section id: {line}");
            continue;
        };
        let Some(section) = view.find_section(section_id).cloned() else {
            eprintln!("no section {section_id} in {course_name}");
            continue;
        };

        let mut refresh_needed = false;
        match enroll_in_section(&client, &section, || refresh_needed = true).await {
            Ok(report) => println!("\n{}\n", report.message),
            Err(e) => eprintln!("enroll request failed: {e}"),
        }

        if refresh_needed {
            if let Err(e) = view.refresh(&client).await {
                warn!("refresh after enroll failed: {e}");
            }
        }
    }

    Ok(())
}

fn parse_args() -> Result<(String, Option<String>)> {
    let mut course_name: Option<String> = None;
    let mut base_url: Option<String> = None;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--base-url" {
            base_url = Some(args.next().context("--base-url requires a value")?);
        } else if course_name.is_none() {
            course_name = Some(arg);
        } else {
            bail!("unexpected argument: {arg}");
        }
    }

    let course_name = course_name.context("usage: schedview <course-name> [--base-url <url>]")?;
    Ok((course_name, base_url))
}
