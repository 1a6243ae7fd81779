mod cli;
mod tables;

use clap::{Parser, crate_version};
use serde::Serialize;
use touprice::{Catalog, CoverageGap, HourlyPrice, TierHours, prelude::*};

use crate::{
    cli::{Args, Command, ShowArgs},
    tables::{
        build_gaps_table,
        build_hours_table,
        build_regions_table,
        build_slots_table,
        build_summary_table,
    },
};

fn main() -> Result {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt().without_time().compact().with_writer(std::io::stderr).init();
    info!(version = crate_version!(), "starting…");

    let args = Args::parse();
    let catalog = args.catalog.load()?;
    let gaps = catalog.audit();
    for gap in &gaps {
        debug!(region = %gap.region, month = gap.month, start = %gap.start, end = %gap.end, "uncovered");
    }
    if !gaps.is_empty() {
        warn!(n_gaps = gaps.len(), "some days are not fully covered, see `audit`");
    }

    match args.command {
        Command::Audit => {
            println!("{}", build_gaps_table(&gaps));
            check_coverage(&gaps, args.catalog.strict)?;
        }
        Command::Regions => {
            check_coverage(&gaps, args.catalog.strict)?;
            println!("{}", build_regions_table(&catalog));
        }
        Command::Show(show_args) => {
            check_coverage(&gaps, args.catalog.strict)?;
            show(&catalog, &show_args)?;
        }
    }

    info!("done!");
    Ok(())
}

fn check_coverage(gaps: &[CoverageGap], strict: bool) -> Result {
    ensure!(!strict || gaps.is_empty(), "the catalog has {} uncovered time ranges", gaps.len());
    Ok(())
}

#[derive(Serialize)]
struct Report<'a> {
    region: &'a str,
    month: u32,
    note: Option<&'a str>,
    hours: &'a [HourlyPrice],
    totals: TierHours,
}

fn show(catalog: &Catalog, args: &ShowArgs) -> Result {
    let region = catalog.region(&args.region).with_context(|| {
        format!("unknown region `{}`, run `regions` to list the known ones", args.region)
    })?;
    if !region.uses_time_of_use_pricing() {
        println!("{}: {}", region.name(), region.note_or_default().unwrap_or_default());
        return Ok(());
    }

    let month = args.month();
    let record = region
        .month(month)
        .with_context(|| format!("`{}` has no schedule for month {month}", region.name()))?;
    info!(region = region.name(), month = record.display_name(), n_slots = record.slots().len(), "resolved");

    let hours = record.classify_hours();
    let totals = record.tier_hours();
    if args.json {
        let report =
            Report { region: region.name(), month, note: region.note(), hours: &hours, totals };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{} {}", region.name(), record.display_name());
    if let Some(note) = region.note() {
        println!("{note}");
    }
    println!("{}", build_summary_table(&totals));
    println!("{}", build_hours_table(&hours));
    println!("{}", build_slots_table(record));
    Ok(())
}
