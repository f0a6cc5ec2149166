//! Tests for penalty resolution and carry-over consolidation.

use rookies_config::PenaltyNumbers;
use rookies_core::{Driver, DriverLookup, Penalties, PenaltyCategory, unique_car_numbers};
use rookies_error::PenaltyErrorKind;

fn roster() -> DriverLookup {
    DriverLookup::new(vec![
        Driver::new("Ayrton", "Senna", "ayrton", 12),
        Driver::new("Alain", "Prost", "alain.prost", 1),
        Driver::new("Nigel", "Mansell", "red5", 5),
        Driver::new("Nelson", "Piquet", "nelsonp", 6),
        Driver::new("Gerhard", "Berger", "gerhard", 28),
    ])
}

fn driver(lookup: &DriverLookup, number: u32) -> Driver {
    lookup.get(number).cloned().unwrap()
}

#[test]
fn test_driver_lookup_by_car_number() {
    let lookup = roster();
    assert_eq!(lookup.len(), 5);
    assert!(!lookup.is_empty());
    assert_eq!(lookup.get(5).unwrap().full_name(), "Nigel Mansell");
    assert!(lookup.get(27).is_none());

    let numbers: Vec<u32> = lookup.iter().map(|d| *d.car_number()).collect();
    assert_eq!(numbers, vec![1, 5, 6, 12, 28]);
}

#[test]
fn test_build_resolves_every_category() {
    let lookup = roster();
    let new = PenaltyNumbers {
        quali_bans_r1: vec![12],
        pit_starts_r1: vec![],
        quali_bans_r2: vec![5, 6],
        pit_starts_r2: vec![28],
    };
    let carried = PenaltyNumbers {
        pit_starts_r1: vec![1],
        ..Default::default()
    };

    let penalties = Penalties::build(&lookup, &new, &carried).unwrap();

    let r1_quali = penalties.category(PenaltyCategory::QualiBansR1);
    assert_eq!(r1_quali.new, vec![driver(&lookup, 12)]);
    assert!(r1_quali.carried_over.is_empty());

    let r1_pit = penalties.category(PenaltyCategory::PitStartsR1);
    assert!(r1_pit.new.is_empty());
    assert_eq!(r1_pit.carried_over, vec![driver(&lookup, 1)]);

    let r2_quali = penalties.category(PenaltyCategory::QualiBansR2);
    assert_eq!(r2_quali.new.len(), 2);
    assert_eq!(*r2_quali.new[0].car_number(), 5);
    assert_eq!(*r2_quali.new[1].car_number(), 6);
}

#[test]
fn test_build_fails_on_unknown_car_number() {
    let lookup = roster();
    let new = PenaltyNumbers {
        pit_starts_r2: vec![5, 99],
        ..Default::default()
    };

    let err = Penalties::build(&lookup, &new, &PenaltyNumbers::default()).unwrap_err();
    assert_eq!(err.kind, PenaltyErrorKind::UnknownCarNumber(99));
    assert!(err.to_string().contains("Could not find driver 99"));
}

#[test]
fn test_build_fails_on_unknown_carried_over_number() {
    let lookup = roster();
    let carried = PenaltyNumbers {
        quali_bans_r1: vec![404],
        ..Default::default()
    };

    let err = Penalties::build(&lookup, &PenaltyNumbers::default(), &carried).unwrap_err();
    assert_eq!(err.kind, PenaltyErrorKind::UnknownCarNumber(404));
}

#[test]
fn test_build_rejects_new_and_carried_over_in_same_category() {
    let lookup = roster();
    let new = PenaltyNumbers {
        pit_starts_r1: vec![6],
        ..Default::default()
    };
    let carried = PenaltyNumbers {
        pit_starts_r1: vec![6],
        ..Default::default()
    };

    let err = Penalties::build(&lookup, &new, &carried).unwrap_err();
    assert_eq!(
        err.kind,
        PenaltyErrorKind::DuplicatePenalty {
            car_number: 6,
            category: "Pit Starts R1".to_string(),
        }
    );
}

#[test]
fn test_same_car_in_different_categories_is_allowed() {
    let lookup = roster();
    let new = PenaltyNumbers {
        quali_bans_r1: vec![6],
        ..Default::default()
    };
    let carried = PenaltyNumbers {
        pit_starts_r2: vec![6],
        ..Default::default()
    };

    assert!(Penalties::build(&lookup, &new, &carried).is_ok());
}

#[test]
fn test_entries_list_carried_over_first() {
    let lookup = roster();
    let new = PenaltyNumbers {
        quali_bans_r2: vec![12],
        ..Default::default()
    };
    let carried = PenaltyNumbers {
        quali_bans_r2: vec![28],
        ..Default::default()
    };
    let penalties = Penalties::build(&lookup, &new, &carried).unwrap();

    let entries: Vec<(u32, bool)> = penalties
        .category(PenaltyCategory::QualiBansR2)
        .entries()
        .map(|(d, carried)| (*d.car_number(), carried))
        .collect();
    assert_eq!(entries, vec![(28, true), (12, false)]);
}

#[test]
fn test_consolidate_unions_new_and_carried_over() {
    let lookup = roster();
    let new = PenaltyNumbers {
        quali_bans_r1: vec![12, 5],
        pit_starts_r2: vec![28],
        ..Default::default()
    };
    let carried = PenaltyNumbers {
        quali_bans_r1: vec![1],
        pit_starts_r1: vec![6],
        ..Default::default()
    };
    let penalties = Penalties::build(&lookup, &new, &carried).unwrap();

    let next = penalties.consolidate();
    assert_eq!(next.quali_bans_r1, vec![1, 5, 12]);
    assert_eq!(next.pit_starts_r1, vec![6]);
    assert!(next.quali_bans_r2.is_empty());
    assert_eq!(next.pit_starts_r2, vec![28]);
}

#[test]
fn test_consolidate_of_nothing_is_empty() {
    assert!(Penalties::default().consolidate().is_empty());
}

#[test]
fn test_unique_car_numbers_is_commutative() {
    let lookup = roster();
    let a = vec![driver(&lookup, 28), driver(&lookup, 5), driver(&lookup, 12)];
    let b = vec![driver(&lookup, 1), driver(&lookup, 5)];

    assert_eq!(unique_car_numbers(&a, &b), unique_car_numbers(&b, &a));
    assert_eq!(unique_car_numbers(&a, &b), vec![1, 5, 12, 28]);
}

#[test]
fn test_unique_car_numbers_is_idempotent() {
    let lookup = roster();
    let a = vec![driver(&lookup, 6), driver(&lookup, 6), driver(&lookup, 1)];

    let once = unique_car_numbers(&a, &[]);
    assert_eq!(once, vec![1, 6]);
    assert_eq!(unique_car_numbers(&a, &a), once);

    let as_drivers: Vec<Driver> = once.iter().map(|&n| driver(&lookup, n)).collect();
    assert_eq!(unique_car_numbers(&as_drivers, &a), once);
}

#[test]
fn test_category_titles() {
    assert_eq!(PenaltyCategory::QualiBansR1.to_string(), "Quali Bans R1");
    assert_eq!(PenaltyCategory::PitStartsR2.to_string(), "Pit Starts R2");
    assert_eq!(PenaltyCategory::PitStartsR1.heading(), "Race 1 Pit Starts");
    assert_eq!(PenaltyCategory::QualiBansR2.heading(), "Race 2 Quali Bans");
    assert_eq!(PenaltyCategory::ALL.len(), 4);
}
