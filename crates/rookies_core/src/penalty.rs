//! Penalty categories, resolution and carry-over consolidation.

use crate::{Driver, DriverLookup};
use rookies_config::PenaltyNumbers;
use rookies_error::{PenaltyError, PenaltyErrorKind};
use std::collections::BTreeSet;
use tracing::{debug, error, instrument};

/// A list of penalties a round can carry, in display order.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
)]
pub enum PenaltyCategory {
    /// Excluded from race 1 qualifying
    #[strum(to_string = "Quali Bans R1")]
    QualiBansR1,
    /// Starts race 1 from pit lane
    #[strum(to_string = "Pit Starts R1")]
    PitStartsR1,
    /// Excluded from race 2 qualifying
    #[strum(to_string = "Quali Bans R2")]
    QualiBansR2,
    /// Starts race 2 from pit lane
    #[strum(to_string = "Pit Starts R2")]
    PitStartsR2,
}

impl PenaltyCategory {
    /// Every category in display order.
    pub const ALL: [PenaltyCategory; 4] = [
        PenaltyCategory::QualiBansR1,
        PenaltyCategory::PitStartsR1,
        PenaltyCategory::QualiBansR2,
        PenaltyCategory::PitStartsR2,
    ];

    /// Heading used in briefing documents, e.g. "Race 1 Pit Starts".
    pub fn heading(&self) -> &'static str {
        match self {
            Self::QualiBansR1 => "Race 1 Quali Bans",
            Self::PitStartsR1 => "Race 1 Pit Starts",
            Self::QualiBansR2 => "Race 2 Quali Bans",
            Self::PitStartsR2 => "Race 2 Pit Starts",
        }
    }

    /// This category's car numbers within `numbers`.
    pub fn numbers<'a>(&self, numbers: &'a PenaltyNumbers) -> &'a [u32] {
        match self {
            Self::QualiBansR1 => &numbers.quali_bans_r1,
            Self::PitStartsR1 => &numbers.pit_starts_r1,
            Self::QualiBansR2 => &numbers.quali_bans_r2,
            Self::PitStartsR2 => &numbers.pit_starts_r2,
        }
    }

    /// Mutable access to this category's car numbers within `numbers`.
    pub fn numbers_mut<'a>(&self, numbers: &'a mut PenaltyNumbers) -> &'a mut Vec<u32> {
        match self {
            Self::QualiBansR1 => &mut numbers.quali_bans_r1,
            Self::PitStartsR1 => &mut numbers.pit_starts_r1,
            Self::QualiBansR2 => &mut numbers.quali_bans_r2,
            Self::PitStartsR2 => &mut numbers.pit_starts_r2,
        }
    }
}

/// Drivers serving one category of penalty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryPenalties {
    /// Handed out at the previous round
    pub new: Vec<Driver>,
    /// Outstanding from earlier rounds
    pub carried_over: Vec<Driver>,
}

impl CategoryPenalties {
    /// True when nobody is serving this penalty.
    pub fn is_empty(&self) -> bool {
        self.new.is_empty() && self.carried_over.is_empty()
    }

    /// Carried over drivers first, then new ones, each tagged with whether it
    /// was carried over.
    pub fn entries(&self) -> impl Iterator<Item = (&Driver, bool)> {
        self.carried_over
            .iter()
            .map(|driver| (driver, true))
            .chain(self.new.iter().map(|driver| (driver, false)))
    }

    /// Car numbers that carry into the next round.
    pub fn consolidated(&self) -> Vec<u32> {
        unique_car_numbers(&self.new, &self.carried_over)
    }
}

/// Resolved penalties for every category.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Penalties {
    quali_bans_r1: CategoryPenalties,
    pit_starts_r1: CategoryPenalties,
    quali_bans_r2: CategoryPenalties,
    pit_starts_r2: CategoryPenalties,
}

impl Penalties {
    /// Resolve configured car numbers against the roster.
    ///
    /// # Errors
    ///
    /// - [`PenaltyErrorKind::UnknownCarNumber`] if a number is not in `lookup`
    /// - [`PenaltyErrorKind::DuplicatePenalty`] if a car is both new and
    ///   carried over within one category
    #[instrument(skip_all, fields(drivers = lookup.len()))]
    pub fn build(
        lookup: &DriverLookup,
        new: &PenaltyNumbers,
        carried_over: &PenaltyNumbers,
    ) -> Result<Self, PenaltyError> {
        let mut penalties = Penalties::default();
        for category in PenaltyCategory::ALL {
            let new_numbers = category.numbers(new);
            let carried_numbers = category.numbers(carried_over);

            if let Some(car_number) = new_numbers
                .iter()
                .find(|number| carried_numbers.contains(*number))
            {
                error!(car_number, %category, "Car penalised as both new and carried over");
                return Err(PenaltyError::new(PenaltyErrorKind::DuplicatePenalty {
                    car_number: *car_number,
                    category: category.to_string(),
                }));
            }

            let entry = penalties.category_mut(category);
            entry.new = resolve_drivers(lookup, new_numbers)?;
            entry.carried_over = resolve_drivers(lookup, carried_numbers)?;
            debug!(
                %category,
                new = entry.new.len(),
                carried_over = entry.carried_over.len(),
                "Resolved penalties"
            );
        }
        Ok(penalties)
    }

    /// Drivers serving `category`.
    pub fn category(&self, category: PenaltyCategory) -> &CategoryPenalties {
        match category {
            PenaltyCategory::QualiBansR1 => &self.quali_bans_r1,
            PenaltyCategory::PitStartsR1 => &self.pit_starts_r1,
            PenaltyCategory::QualiBansR2 => &self.quali_bans_r2,
            PenaltyCategory::PitStartsR2 => &self.pit_starts_r2,
        }
    }

    /// Mutable access to the drivers serving `category`.
    pub fn category_mut(&mut self, category: PenaltyCategory) -> &mut CategoryPenalties {
        match category {
            PenaltyCategory::QualiBansR1 => &mut self.quali_bans_r1,
            PenaltyCategory::PitStartsR1 => &mut self.pit_starts_r1,
            PenaltyCategory::QualiBansR2 => &mut self.quali_bans_r2,
            PenaltyCategory::PitStartsR2 => &mut self.pit_starts_r2,
        }
    }

    /// Categories paired with their drivers, in display order.
    pub fn iter(&self) -> impl Iterator<Item = (PenaltyCategory, &CategoryPenalties)> {
        PenaltyCategory::ALL
            .into_iter()
            .map(move |category| (category, self.category(category)))
    }

    /// Carried over penalties for the next round: per category, every car
    /// serving a new or carried over penalty, once.
    pub fn consolidate(&self) -> PenaltyNumbers {
        let mut numbers = PenaltyNumbers::default();
        for (category, entry) in self.iter() {
            *category.numbers_mut(&mut numbers) = entry.consolidated();
        }
        numbers
    }
}

fn resolve_drivers(lookup: &DriverLookup, car_numbers: &[u32]) -> Result<Vec<Driver>, PenaltyError> {
    car_numbers
        .iter()
        .map(|&car_number| {
            lookup.get(car_number).cloned().ok_or_else(|| {
                error!(car_number, "Car number not registered in championship");
                PenaltyError::new(PenaltyErrorKind::UnknownCarNumber(car_number))
            })
        })
        .collect()
}

/// Union of two driver lists by car number, ascending.
///
/// Commutative and idempotent: argument order and repeated drivers do not
/// change the result.
///
/// ```
/// use rookies_core::{Driver, unique_car_numbers};
///
/// let a = vec![Driver::new("A", "A", "a", 9), Driver::new("B", "B", "b", 3)];
/// let b = vec![Driver::new("B", "B", "b", 3)];
/// assert_eq!(unique_car_numbers(&a, &b), vec![3, 9]);
/// ```
pub fn unique_car_numbers(a: &[Driver], b: &[Driver]) -> Vec<u32> {
    a.iter()
        .chain(b)
        .map(|driver| *driver.car_number())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
