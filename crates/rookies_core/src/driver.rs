//! Drivers and the car number lookup.

use std::collections::BTreeMap;

/// A registered championship driver.
///
/// # Examples
///
/// ```
/// use rookies_core::Driver;
///
/// let driver = Driver::new("Jane", "Doe", "jane.doe", 7);
/// assert_eq!(driver.full_name(), "Jane Doe");
/// assert_eq!(*driver.car_number(), 7);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_getters::Getters)]
pub struct Driver {
    /// Given name as registered on SimGrid
    first_name: String,
    /// Family name as registered on SimGrid
    last_name: String,
    /// Discord username as linked on SimGrid
    discord_handle: String,
    /// Race number, the driver's identity within a championship
    car_number: u32,
}

impl Driver {
    /// Create a driver.
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        discord_handle: impl Into<String>,
        car_number: u32,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            discord_handle: discord_handle.into(),
            car_number,
        }
    }

    /// "First Last".
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Car number to driver mapping for one championship.
///
/// Built once per run from the league API and never modified afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DriverLookup {
    drivers: BTreeMap<u32, Driver>,
}

impl DriverLookup {
    /// Index drivers by car number. A later driver with the same number
    /// replaces an earlier one.
    pub fn new(drivers: impl IntoIterator<Item = Driver>) -> Self {
        let drivers = drivers
            .into_iter()
            .map(|driver| (driver.car_number, driver))
            .collect();
        Self { drivers }
    }

    /// Driver racing with `car_number`, if any.
    pub fn get(&self, car_number: u32) -> Option<&Driver> {
        self.drivers.get(&car_number)
    }

    /// Number of drivers.
    pub fn len(&self) -> usize {
        self.drivers.len()
    }

    /// True when no drivers are registered.
    pub fn is_empty(&self) -> bool {
        self.drivers.is_empty()
    }

    /// Drivers in ascending car number order.
    pub fn iter(&self) -> impl Iterator<Item = &Driver> {
        self.drivers.values()
    }
}

