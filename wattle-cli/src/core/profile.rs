use bon::Builder;
use clap::ValueEnum;
use serde::Serialize;
use wattle_quantities::energy::KilowattHours;

/// Daily draw of one light point (kWh).
const LIGHT_DAILY_DRAW: f64 = 0.04;

/// Daily draw of one ceiling fan (kWh).
const FAN_DAILY_DRAW: f64 = 0.08;

/// House size category, in bedroom-hall-kitchen terms.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, ValueEnum, derive_more::Display)]
pub enum HouseSize {
    #[display("1BHK")]
    #[serde(rename = "1BHK")]
    #[value(name = "1bhk")]
    OneBhk,

    #[display("2BHK")]
    #[serde(rename = "2BHK")]
    #[value(name = "2bhk")]
    TwoBhk,

    #[display("3BHK")]
    #[serde(rename = "3BHK")]
    #[value(name = "3bhk")]
    ThreeBhk,

    #[display("4BHK")]
    #[serde(rename = "4BHK")]
    #[value(name = "4bhk")]
    FourBhk,

    #[display("5BHK+")]
    #[serde(rename = "5BHK+")]
    #[value(name = "5bhk+")]
    FiveBhkPlus,
}

impl HouseSize {
    pub const ALL: [Self; 5] =
        [Self::OneBhk, Self::TwoBhk, Self::ThreeBhk, Self::FourBhk, Self::FiveBhkPlus];

    /// Rooms implied by the category: one light and one fan per room.
    pub const fn rooms(self) -> u32 {
        match self {
            Self::OneBhk => 2,
            Self::TwoBhk => 3,
            Self::ThreeBhk => 4,
            Self::FourBhk => 5,
            Self::FiveBhkPlus => 6,
        }
    }

    /// Daily draw of the lighting and air circulation fixtures.
    pub fn base_load(self) -> KilowattHours {
        KilowattHours::from(f64::from(self.rooms()) * (LIGHT_DAILY_DRAW + FAN_DAILY_DRAW))
    }

    /// Typical daily usage of a household of this size, for comparison.
    pub fn typical_daily_usage(self) -> KilowattHours {
        KilowattHours::from(match self {
            Self::OneBhk => 4.5,
            Self::TwoBhk => 6.8,
            Self::ThreeBhk => 9.2,
            Self::FourBhk => 11.5,
            Self::FiveBhkPlus => 14.0,
        })
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, derive_more::Display)]
pub enum Appliance {
    #[display("Washing machine")]
    WashingMachine,

    #[display("Refrigerator")]
    Refrigerator,

    #[display("Air conditioner")]
    AirConditioner,

    #[display("Television")]
    Television,

    #[display("Microwave")]
    Microwave,

    #[display("Dishwasher")]
    Dishwasher,

    #[display("Water heater")]
    WaterHeater,
}

impl Appliance {
    pub const ALL: [Self; 7] = [
        Self::WashingMachine,
        Self::Refrigerator,
        Self::AirConditioner,
        Self::Television,
        Self::Microwave,
        Self::Dishwasher,
        Self::WaterHeater,
    ];

    /// Draw of a single unit over a day of typical use.
    pub fn daily_draw(self) -> KilowattHours {
        KilowattHours::from(match self {
            Self::WashingMachine => 0.5,
            Self::Refrigerator => 1.2,
            Self::AirConditioner => 2.4,
            Self::Television => 0.15,
            Self::Microwave => 0.2,
            Self::Dishwasher => 0.8,
            Self::WaterHeater => 1.5,
        })
    }

    /// Whether the owned count multiplies the draw.
    ///
    /// For every other kind any positive count contributes a single unit's
    /// draw: the count merely gates the appliance on.
    pub const fn scales_with_count(self) -> bool {
        matches!(self, Self::AirConditioner | Self::Television)
    }
}

/// Owned appliance counts.
///
/// Counts are kept for every kind, although only the air conditioner and
/// television counts actually multiply the draw — see
/// [`Appliance::scales_with_count`].
#[derive(Builder, Clone, Copy, Debug, Default)]
pub struct Inventory {
    #[builder(default)]
    pub washing_machines: u32,

    #[builder(default)]
    pub refrigerators: u32,

    #[builder(default)]
    pub air_conditioners: u32,

    #[builder(default)]
    pub televisions: u32,

    #[builder(default)]
    pub microwaves: u32,

    #[builder(default)]
    pub dishwashers: u32,

    #[builder(default)]
    pub water_heaters: u32,
}

impl Inventory {
    pub const fn count(&self, appliance: Appliance) -> u32 {
        match appliance {
            Appliance::WashingMachine => self.washing_machines,
            Appliance::Refrigerator => self.refrigerators,
            Appliance::AirConditioner => self.air_conditioners,
            Appliance::Television => self.televisions,
            Appliance::Microwave => self.microwaves,
            Appliance::Dishwasher => self.dishwashers,
            Appliance::WaterHeater => self.water_heaters,
        }
    }

    /// Iterate all appliance kinds with their owned counts.
    pub fn counts(self) -> impl Iterator<Item = (Appliance, u32)> {
        Appliance::ALL.into_iter().map(move |appliance| (appliance, self.count(appliance)))
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn test_base_load() {
        for (size, expected) in
            HouseSize::ALL.into_iter().zip([0.24, 0.36, 0.48, 0.60, 0.72])
        {
            assert_abs_diff_eq!(size.base_load().0.into_inner(), expected, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_count_scaling_kinds() {
        let scaling: Vec<_> =
            Appliance::ALL.into_iter().filter(|kind| kind.scales_with_count()).collect();
        assert_eq!(scaling, [Appliance::AirConditioner, Appliance::Television]);
    }

    #[test]
    fn test_builder_defaults_to_empty() {
        let inventory = Inventory::builder().refrigerators(1).build();
        assert_eq!(inventory.count(Appliance::Refrigerator), 1);
        assert_eq!(inventory.count(Appliance::Television), 0);
    }
}
