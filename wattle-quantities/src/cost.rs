use std::{
    fmt::{Debug, Display, Formatter},
    ops::Div,
};

use crate::{Quantity, energy::KilowattHours, rate::KilowattHourRate};

pub type Cost = Quantity<0, 1>;

impl Display for Cost {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "₹{:.2}", self.0)
    }
}

impl Debug for Cost {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "₹{:.2}", self.0)
    }
}

impl Div<KilowattHours> for Cost {
    type Output = KilowattHourRate;

    fn div(self, rhs: KilowattHours) -> Self::Output {
        Quantity(self.0 / rhs.0)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn test_average_rate() {
        let rate = Cost::from(758.6) / KilowattHours::from(190.8);
        assert_abs_diff_eq!(rate.0.into_inner(), 3.976, epsilon = 0.001);
    }

    #[test]
    fn test_display() {
        assert_eq!(Cost::from(758.6).to_string(), "₹758.60");
    }
}
