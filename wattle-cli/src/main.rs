#![doc = include_str!("../../README.md")]

mod cli;
mod core;
mod prelude;
mod tables;

use clap::{Parser, crate_version};

use crate::{
    cli::{Args, Command},
    core::{estimate::Estimate, report::UsageReport},
    prelude::*,
    tables::{
        build_appliance_table,
        build_bill_table,
        build_billing_summary_table,
        build_breakdown_table,
        build_comparison_table,
        build_house_size_table,
        build_schedule_table,
        build_usage_table,
    },
};

fn main() -> Result {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt().without_time().compact().init();
    info!(version = crate_version!(), "starting…");

    match Args::parse().command {
        Command::Estimate(args) => {
            let schedule = args.tariff.load()?;
            let estimate = Estimate::new(args.house_size, args.inventory.to_inventory());
            info!(daily = %estimate.daily, "estimated");
            let report = UsageReport::new(args.house_size, estimate, &schedule);
            if args.json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("{}", build_usage_table(&report));
                println!("{}", build_breakdown_table(&report.breakdown));
                println!("{}", build_bill_table(&report.monthly_bill));
                println!("{}", build_billing_summary_table(&report));
                println!("{}", build_comparison_table(&report));
            }
        }
        Command::Tariff(args) => {
            let schedule = args.load()?;
            println!("{}", build_schedule_table(&schedule));
        }
        Command::Appliances => {
            println!("{}", build_appliance_table());
        }
        Command::Sizes => {
            println!("{}", build_house_size_table());
        }
    }

    info!("done!");
    Ok(())
}
