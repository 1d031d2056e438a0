#[macro_use] extern crate log;
use anyhow::Context;

use tier_slider::match_type::{format_match_type, match_type_icon};
use tier_slider::tier_range::{format_range, request_body, TierRange};

fn parse_handle(arg: Option<String>, name: &str) -> anyhow::Result<i32> {
    let arg = arg.with_context(|| format!("missing {} slider position", name))?;
    arg.parse::<i32>()
        .with_context(|| format!("{} slider position '{}' is not an integer", name, arg))
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let min_index = parse_handle(args.next(), "min")?;
    let max_index = parse_handle(args.next(), "max")?;

    let range = TierRange::from_handles(min_index, max_index);
    if !range.is_ordered() {
        warn!("min handle {} sits above max handle {}", min_index, max_index);
    }
    let (min, max) = range.records();
    debug!("{:#?} {:#?}", min, max);

    match std::env::var("MATCH_TYPE") {
        Ok(match_type) => println!(
            "{} {} {}",
            match_type_icon(&match_type),
            format_match_type(&match_type),
            format_range(Some(&min), Some(&max))
        ),
        Err(_) => println!("{}", format_range(Some(&min), Some(&max))),
    }
    println!("{}", serde_json::to_string_pretty(&request_body(&min, &max))?);

    info!("Done.");
    Ok(())
}
