use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::{
    core::{
        profile::{HouseSize, Inventory},
        tariff::TariffSchedule,
    },
    prelude::*,
};

#[derive(Parser)]
#[command(author, version, about, propagate_version = true)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Main command: estimate the household usage and the tiered bill.
    Estimate(Box<EstimateArgs>),

    /// Print the active tariff schedule, validating it on the way.
    Tariff(TariffArgs),

    /// Print the appliance draw reference.
    Appliances,

    /// Print the house size reference.
    Sizes,
}

#[derive(Parser)]
pub struct EstimateArgs {
    /// House size category.
    #[clap(long = "house-size", env = "HOUSE_SIZE", value_enum)]
    pub house_size: HouseSize,

    #[clap(flatten)]
    pub inventory: InventoryArgs,

    #[clap(flatten)]
    pub tariff: TariffArgs,

    /// Print the report as JSON instead of tables.
    #[clap(long)]
    pub json: bool,
}

/// Owned appliance counts. Only the air conditioner and television counts
/// multiply the draw; for the rest any positive count switches a fixed
/// single-unit draw on.
#[derive(Parser)]
pub struct InventoryArgs {
    /// Owned washing machines.
    #[clap(long = "washing-machines", default_value_t = 0)]
    pub washing_machines: u32,

    /// Owned refrigerators.
    #[clap(long = "refrigerators", default_value_t = 0)]
    pub refrigerators: u32,

    /// Owned air conditioners, each adding its full draw.
    #[clap(
        long = "air-conditioners",
        default_value_t = 0,
        value_parser = clap::value_parser!(u32).range(0..=10),
    )]
    pub air_conditioners: u32,

    /// Owned televisions, each adding its full draw.
    #[clap(
        long = "televisions",
        default_value_t = 0,
        value_parser = clap::value_parser!(u32).range(0..=5),
    )]
    pub televisions: u32,

    /// Owned microwaves.
    #[clap(long = "microwaves", default_value_t = 0)]
    pub microwaves: u32,

    /// Owned dishwashers.
    #[clap(long = "dishwashers", default_value_t = 0)]
    pub dishwashers: u32,

    /// Owned water heaters.
    #[clap(long = "water-heaters", default_value_t = 0)]
    pub water_heaters: u32,
}

impl InventoryArgs {
    pub fn to_inventory(&self) -> Inventory {
        Inventory::builder()
            .washing_machines(self.washing_machines)
            .refrigerators(self.refrigerators)
            .air_conditioners(self.air_conditioners)
            .televisions(self.televisions)
            .microwaves(self.microwaves)
            .dishwashers(self.dishwashers)
            .water_heaters(self.water_heaters)
            .build()
    }
}

#[derive(Parser)]
pub struct TariffArgs {
    /// TOML file with the `[[slab]]` tariff bands; defaults to the built-in
    /// illustrative schedule.
    #[clap(long = "tariff-file", env = "TARIFF_FILE")]
    pub tariff_file: Option<PathBuf>,
}

impl TariffArgs {
    pub fn load(&self) -> Result<TariffSchedule> {
        match &self.tariff_file {
            Some(path) => TariffSchedule::read_from(path),
            None => Ok(TariffSchedule::default()),
        }
    }
}
