#![allow(missing_docs)]

//! This module defines the quantity types used throughout the planner.

macro_rules! unit_struct {
    ($name:ident) => {
        /// Represents a type of quantity.
        #[derive(
            Debug,
            Clone,
            Copy,
            Default,
            PartialEq,
            PartialOrd,
            derive_more::Add,
            derive_more::Sub,
            derive_more::AddAssign,
            derive_more::Display,
        )]
        pub struct $name(pub f64);

        impl $name {
            /// Creates a new instance of the unit type from a f64 value.
            pub fn from(val: f64) -> Self {
                Self(val)
            }

            /// Returns the value of the unit type as a f64.
            pub fn value(self) -> f64 {
                self.0
            }

            /// Returns the smaller of the two quantities.
            pub fn min(self, other: Self) -> Self {
                Self(self.0.min(other.0))
            }

            /// Returns the larger of the two quantities.
            pub fn max(self, other: Self) -> Self {
                Self(self.0.max(other.0))
            }
        }
    };
}

macro_rules! impl_mul {
    ($Lhs:ty, $Rhs:ty, $Out:ty) => {
        impl std::ops::Mul<$Rhs> for $Lhs {
            type Output = $Out;
            fn mul(self, rhs: $Rhs) -> $Out {
                <$Out>::from(self.0 * rhs.0)
            }
        }
        impl std::ops::Mul<$Lhs> for $Rhs {
            type Output = $Out;
            fn mul(self, lhs: $Lhs) -> $Out {
                <$Out>::from(self.0 * lhs.0)
            }
        }
    };
}

// Base quantities
unit_struct!(Units);
unit_struct!(Money);

// Derived quantities
unit_struct!(MoneyPerUnit);

// Multiplication rules
impl_mul!(MoneyPerUnit, Units, Money);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_min_max() {
        assert_eq!(Units(2.0).min(Units(3.0)), Units(2.0));
        assert_eq!(Units(2.0).max(Units(3.0)), Units(3.0));
        assert_eq!(Units(-1.0).max(Units(0.0)), Units(0.0));
    }

    #[test]
    fn test_unit_cost_times_quantity() {
        assert_eq!(MoneyPerUnit(8.0) * Units(1200.0), Money(9600.0));
        assert_eq!(Units(1200.0) * MoneyPerUnit(8.0), Money(9600.0));
    }
}
