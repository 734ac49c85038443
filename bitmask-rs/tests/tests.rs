mod common;

use bitmask_rs::{flag_set, Binding, FlagEnum, FlagSet, FlagSetError};
use common::{test_logger, Colors, Desc};

#[test]
fn test_eq() {
    test_logger();
    assert_eq!(FlagSet::new(), FlagSet::new());
    assert_eq!(flag_set![Desc::SMALL], flag_set![Desc::SMALL]);
    assert_eq!(
        flag_set![Desc::ROUND, Desc::SMALL],
        flag_set![Desc::SMALL, Desc::ROUND]
    );

    assert_ne!(flag_set![Desc::SMALL], flag_set![Desc::SMALL, Desc::ROUND]);
    assert_ne!(flag_set![Desc::SMALL], flag_set![Desc::ROUND]);
    assert_ne!(flag_set![Desc::SMALL], FlagSet::new());
    assert_ne!(flag_set![Desc::SMALL], Desc::SMALL.flag());

    // Equality never fails, whatever the other side is.
    assert!(!FlagSet::new().equals(Desc::ROUND));
    assert!(!FlagSet::new().equals("Hello World!"));
    assert!(!FlagSet::new().equals(0));
    assert!(!flag_set![Desc::SMALL].equals(&flag_set![Colors::TEAL]));
    assert!(!FlagSet::of::<Desc>().equals(&FlagSet::of::<Colors>()));
    assert!(FlagSet::new().equals(&FlagSet::of::<Colors>()));
}

#[test]
fn test_debug() {
    insta::assert_snapshot!(
        format!("{:?}", flag_set![Desc::ROUND, Desc::FUNKY]),
        @"FlagSet(Desc, Desc.ROUND, Desc.FUNKY)"
    );
    insta::assert_snapshot!(format!("{:?}", FlagSet::of::<Colors>()), @"FlagSet(Colors)");
    insta::assert_snapshot!(format!("{:?}", FlagSet::new()), @"FlagSet()");
}

#[test]
fn test_add() {
    test_logger();
    let mut mask = flag_set![Desc::SMALL, Desc::FUNKY];
    mask.add(Desc::ROUND).unwrap();
    assert_eq!(mask, flag_set![Desc::SMALL, Desc::FUNKY, Desc::ROUND]);

    let mut mask = FlagSet::new();
    assert!(!mask.is_bound());
    mask.add(Desc::ROUND).unwrap();
    mask.add(Desc::ROUND).unwrap();
    assert_eq!(mask, flag_set![Desc::ROUND]);
    assert_eq!(mask.binding(), Binding::Bound(Desc::enumeration()));

    assert!(matches!(
        mask.add(Colors::PINK),
        Err(FlagSetError::TypeConflict {
            expected: "Desc",
            found: "Colors"
        })
    ));
    assert!(matches!(
        mask.add(1),
        Err(FlagSetError::UnsupportedOperand { .. })
    ));
    assert_eq!(mask, flag_set![Desc::ROUND]);
}

#[test]
fn test_add_operator() {
    let mask = flag_set![Desc::SMALL, Desc::FUNKY];
    let all = flag_set![Desc::SMALL, Desc::FUNKY, Desc::ROUND];
    assert_eq!((&mask + Desc::ROUND).unwrap(), all);
    assert_eq!((Desc::ROUND + &mask).unwrap(), all);
    assert_eq!((Desc::SMALL + &mask).unwrap(), mask);
    assert_eq!((FlagSet::new() + Desc::ROUND).unwrap(), flag_set![Desc::ROUND]);

    assert_eq!(
        (flag_set![Desc::SMALL] + &flag_set![Desc::FUNKY, Desc::ROUND]).unwrap(),
        all
    );
    assert_eq!(
        (flag_set![Desc::FUNKY, Desc::ROUND] + &flag_set![Desc::SMALL]).unwrap(),
        all
    );

    let empty = (FlagSet::new() + &FlagSet::new()).unwrap();
    assert_eq!(empty, FlagSet::new());
    assert!(!empty.is_bound());
}

#[test]
fn test_or_operator() {
    let mask = flag_set![Desc::SMALL, Desc::FUNKY];
    let all = flag_set![Desc::SMALL, Desc::FUNKY, Desc::ROUND];
    assert_eq!((&mask | Desc::ROUND).unwrap(), all);
    assert_eq!((Desc::ROUND | &mask).unwrap(), all);
    assert_eq!((Desc::SMALL | mask).unwrap(), mask);
    assert_eq!((FlagSet::new() | Desc::ROUND).unwrap(), flag_set![Desc::ROUND]);
    assert_eq!((FlagSet::new() | &FlagSet::new()).unwrap(), FlagSet::new());
}

#[test]
fn test_union_update() {
    let mut mask = FlagSet::new();
    mask.union_update(Desc::FUNKY).unwrap();
    assert_eq!(mask, flag_set![Desc::FUNKY]);
    mask.union_update(Desc::ROUND).unwrap();
    assert_eq!(mask, flag_set![Desc::FUNKY, Desc::ROUND]);

    let mut mask = FlagSet::new();
    mask.union_update(&flag_set![Desc::FUNKY, Desc::ROUND]).unwrap();
    assert_eq!(mask, flag_set![Desc::FUNKY, Desc::ROUND]);
}

#[test]
fn test_and_operator() {
    let mask = flag_set![Desc::SMALL, Desc::FUNKY];
    assert_eq!((&mask & Desc::SMALL).unwrap(), flag_set![Desc::SMALL]);
    assert_eq!((Desc::SMALL & &mask).unwrap(), flag_set![Desc::SMALL]);
    assert_eq!((Desc::ROUND & &mask).unwrap(), FlagSet::new());
    assert_eq!((FlagSet::new() & Desc::ROUND).unwrap(), FlagSet::new());

    assert_eq!(
        (flag_set![Desc::FUNKY, Desc::SONAR] & &flag_set![Desc::SMALL, Desc::SONAR]).unwrap(),
        flag_set![Desc::SONAR]
    );
    assert_eq!(
        (flag_set![Desc::FUNKY, Desc::ROUND] & &flag_set![Desc::SMALL]).unwrap(),
        FlagSet::of::<Desc>()
    );
    assert_eq!((FlagSet::new() & &FlagSet::new()).unwrap(), FlagSet::new());
}

#[test]
fn test_intersection_update() {
    let mut mask = flag_set![Desc::SMALL, Desc::FUNKY];
    mask.intersection_update(Desc::FUNKY).unwrap();
    assert_eq!(mask, flag_set![Desc::FUNKY]);
    mask.intersection_update(Desc::SMALL).unwrap();
    assert_eq!(mask, FlagSet::new());
    assert!(mask.is_bound());
}

#[test]
fn test_remove() {
    let mut mask = flag_set![Desc::SMALL, Desc::FUNKY];
    mask.remove(Desc::SMALL).unwrap();
    assert_eq!(mask, flag_set![Desc::FUNKY]);
    match mask.remove(Desc::SMALL) {
        Err(FlagSetError::NotFound(flag)) => assert_eq!(flag, "Desc.SMALL"),
        other => panic!("expected not found, got {other:?}"),
    }

    let mut empty = FlagSet::new();
    assert!(matches!(
        empty.remove(Desc::SMALL),
        Err(FlagSetError::NotFound(_))
    ));
    // A failed removal doesn't bind the set.
    assert!(!empty.is_bound());
}

#[test]
fn test_add_then_remove_restores() {
    let original = flag_set![Desc::SMALL, Desc::SONAR];
    let mut mask = original;
    mask.add(Desc::ROUND).unwrap();
    mask.remove(Desc::ROUND).unwrap();
    assert_eq!(mask, original);
}

#[test]
fn test_add_method_with_add_trait_in_scope() {
    use std::ops::Add;

    let mut mask = flag_set![Desc::SMALL];
    // Method syntax picks the operator here, which leaves `mask` alone.
    let sum = mask.add(Desc::ROUND).unwrap();
    assert_eq!(mask, flag_set![Desc::SMALL]);
    assert_eq!(sum, flag_set![Desc::SMALL, Desc::ROUND]);

    FlagSet::add(&mut mask, Desc::ROUND).unwrap();
    assert_eq!(mask, sum);
}

#[test]
fn test_discard() {
    let mut mask = flag_set![Desc::SMALL, Desc::FUNKY];
    mask.discard(Desc::SMALL).unwrap();
    assert_eq!(mask, flag_set![Desc::FUNKY]);
    mask.discard(Desc::SMALL).unwrap();
    assert_eq!(mask, flag_set![Desc::FUNKY]);

    let mut empty = FlagSet::new();
    empty.discard(Desc::SMALL).unwrap();
    assert_eq!(empty, FlagSet::new());
    assert!(empty.is_bound());

    match empty.discard(&flag_set![Desc::SMALL]) {
        Err(err @ FlagSetError::UnsupportedOperand { .. }) => {
            insta::assert_snapshot!(
                err.to_string(),
                @"Unsupported operand: can only apply Desc (got flag set FlagSet(Desc, Desc.SMALL))"
            );
        }
        other => panic!("expected an unsupported operand, got {other:?}"),
    }
    assert!(matches!(
        empty.discard(Colors::TEAL),
        Err(FlagSetError::TypeConflict { .. })
    ));
}

#[test]
fn test_subtract() {
    assert_eq!(
        (flag_set![Desc::SMALL, Desc::FUNKY] - Desc::SMALL).unwrap(),
        flag_set![Desc::FUNKY]
    );
    assert_eq!(
        (flag_set![Desc::FUNKY, Desc::SMALL] - Desc::SMALL).unwrap(),
        flag_set![Desc::FUNKY]
    );

    assert_eq!(
        (flag_set![Desc::SMALL, Desc::FUNKY, Desc::ROUND] - &flag_set![Desc::SMALL, Desc::ROUND])
            .unwrap(),
        flag_set![Desc::FUNKY]
    );
    assert_eq!(
        (flag_set![Desc::FUNKY, Desc::SMALL] - &flag_set![Desc::SMALL, Desc::FUNKY]).unwrap(),
        FlagSet::new()
    );

    // Not commutative.
    let a = flag_set![Desc::SMALL, Desc::ROUND];
    let b = flag_set![Desc::ROUND, Desc::FUNKY];
    assert_eq!((&a - &b).unwrap(), flag_set![Desc::SMALL]);
    assert_eq!((&b - &a).unwrap(), flag_set![Desc::FUNKY]);
}

#[test]
fn test_difference_update() {
    let mut mask = flag_set![Desc::SMALL, Desc::FUNKY];
    mask.difference_update(Desc::SMALL).unwrap();
    assert_eq!(mask, flag_set![Desc::FUNKY]);
}

#[test]
fn test_xor_operator() {
    let mask = flag_set![Desc::SMALL, Desc::FUNKY];
    assert_eq!(
        (&mask ^ Desc::ROUND).unwrap(),
        flag_set![Desc::SMALL, Desc::FUNKY, Desc::ROUND]
    );
    assert_eq!(
        (Desc::ROUND ^ &mask).unwrap(),
        flag_set![Desc::SMALL, Desc::FUNKY, Desc::ROUND]
    );
    assert_eq!((Desc::SMALL ^ &mask).unwrap(), flag_set![Desc::FUNKY]);
    assert_eq!((FlagSet::new() ^ Desc::ROUND).unwrap(), flag_set![Desc::ROUND]);

    assert_eq!(
        (flag_set![Desc::SMALL] ^ &flag_set![Desc::FUNKY, Desc::ROUND]).unwrap(),
        flag_set![Desc::SMALL, Desc::FUNKY, Desc::ROUND]
    );
    assert_eq!(
        (flag_set![Desc::FUNKY, Desc::ROUND] ^ &flag_set![Desc::FUNKY, Desc::ROUND]).unwrap(),
        FlagSet::new()
    );
    assert_eq!((FlagSet::new() ^ &FlagSet::new()).unwrap(), FlagSet::new());
}

#[test]
fn test_symmetric_difference_update() {
    let mut mask = FlagSet::new();
    mask.symmetric_difference_update(Desc::FUNKY).unwrap();
    assert_eq!(mask, flag_set![Desc::FUNKY]);
    mask.symmetric_difference_update(Desc::ROUND).unwrap();
    assert_eq!(mask, flag_set![Desc::FUNKY, Desc::ROUND]);
    mask.symmetric_difference_update(Desc::ROUND).unwrap();
    assert_eq!(mask, flag_set![Desc::FUNKY]);

    let mut mask = flag_set![Desc::ROUND];
    mask.symmetric_difference_update(&flag_set![Desc::ROUND, Desc::FUNKY])
        .unwrap();
    assert_eq!(mask, flag_set![Desc::FUNKY]);
}

#[test]
fn test_commutative() {
    let a = flag_set![Desc::SMALL, Desc::ROUND];
    let b = flag_set![Desc::ROUND, Desc::SONAR];
    assert_eq!((&a + &b).unwrap(), (&b + &a).unwrap());
    assert_eq!((&a & &b).unwrap(), (&b & &a).unwrap());
    assert_eq!((&a ^ &b).unwrap(), (&b ^ &a).unwrap());

    assert_eq!((&a + &b).unwrap().value(), 0b10011);
    assert_eq!((&a & &b).unwrap().value(), 0b00010);
    assert_eq!((&a ^ &b).unwrap().value(), 0b10001);
}

#[test]
fn test_type_conflict() {
    test_logger();
    let desc = flag_set![Desc::SMALL];
    let colors = flag_set![Colors::TEAL];
    assert!(matches!(
        &desc + &colors,
        Err(FlagSetError::TypeConflict { .. })
    ));
    assert!(matches!(
        &desc ^ Colors::PINK,
        Err(FlagSetError::TypeConflict { .. })
    ));

    // Empty sets keep their binding.
    let empty_colors = FlagSet::of::<Colors>();
    match &desc - &empty_colors {
        Err(err) => {
            insta::assert_snapshot!(
                err.to_string(),
                @"Type conflict: expected Desc flags, got Colors"
            );
        }
        Ok(set) => panic!("expected a type conflict, got {set:?}"),
    }

    match &desc + 1 {
        Err(err @ FlagSetError::UnsupportedOperand { .. }) => {
            insta::assert_snapshot!(
                err.to_string(),
                @"Unsupported operand: can only apply FlagSet or Desc (got integer 1)"
            );
        }
        other => panic!("expected an unsupported operand, got {other:?}"),
    }
    assert!(matches!(
        FlagSet::new() & "SMALL",
        Err(FlagSetError::UnsupportedOperand { .. })
    ));
}

#[test]
fn test_value() {
    let mut mask = flag_set![Desc::SMALL, Desc::FUNKY];
    assert_eq!(mask.value(), 5);
    mask.add(Desc::ROUND).unwrap();
    assert_eq!(mask.value(), 7);

    assert_eq!(FlagSet::new().value(), 0);

    mask.set_value(0).unwrap();
    assert_eq!(mask, FlagSet::new());
    mask.set_value(1).unwrap();
    assert_eq!(mask, flag_set![Desc::SMALL]);

    for err in [
        mask.set_value(2.5).unwrap_err(),
        mask.set_value(-1).unwrap_err(),
        mask.set_value(true).unwrap_err(),
        mask.set_value(1i128 << 64).unwrap_err(),
    ] {
        assert!(
            matches!(err, FlagSetError::InvalidValue(_)),
            "unexpected {err:?}"
        );
    }
    assert_eq!(mask, flag_set![Desc::SMALL]);
}

#[test]
fn test_value_round_trip() {
    let mask = flag_set![Desc::ROUND, Desc::SONAR];
    let mut rebuilt = FlagSet::of::<Desc>();
    rebuilt.set_value(u64::from(&mask)).unwrap();
    assert_eq!(rebuilt, mask);
    assert_eq!(rebuilt.to_string(), "ROUND|SONAR");
}

#[test]
fn test_contains() {
    let mask = flag_set![Desc::SMALL, Desc::FUNKY];
    let empty = FlagSet::new();

    assert!(mask.contains(Desc::FUNKY).unwrap());
    assert!(mask.contains(Desc::SMALL).unwrap());
    assert!(!mask.contains(Desc::ROUND).unwrap());
    assert!(!empty.contains(Desc::ROUND).unwrap());

    assert!(mask.contains(&mask).unwrap());
    assert!(mask.contains(&flag_set![Desc::SMALL, Desc::FUNKY]).unwrap());
    assert!(!mask
        .contains(&flag_set![Desc::SMALL, Desc::FUNKY, Desc::ROUND])
        .unwrap());
    assert!(flag_set![Desc::SMALL, Desc::FUNKY, Desc::ROUND]
        .contains(&mask)
        .unwrap());
    assert!(mask.contains(&flag_set![Desc::FUNKY]).unwrap());
    assert!(mask.contains(&FlagSet::new()).unwrap());

    match mask.contains(1) {
        Err(err) => {
            insta::assert_snapshot!(
                err.to_string(),
                @"Unsupported operand: can only apply FlagSet or Desc (got integer 1)"
            );
        }
        Ok(found) => panic!("expected an unsupported operand, got {found}"),
    }
    assert!(matches!(
        mask.contains(Colors::TEAL),
        Err(FlagSetError::TypeConflict { .. })
    ));
}

#[test]
fn test_iter() {
    let mask = flag_set![Desc::FUNKY, Desc::SMALL];
    let names: Vec<_> = mask.iter().map(|flag| flag.name()).collect();
    assert_eq!(names, ["SMALL", "FUNKY"]);

    // Iterating again starts over.
    assert_eq!(mask.iter().count(), 2);
    assert_eq!(mask.len(), 2);

    let members: Vec<Desc> = mask.members().unwrap().collect();
    assert_eq!(members, [Desc::SMALL, Desc::FUNKY]);
    assert!(mask.members::<Colors>().is_err());

    assert_eq!(FlagSet::new().iter().count(), 0);
    assert!(FlagSet::new().is_empty());
}

#[test]
fn test_unnamed_bits() {
    let mut raw = FlagSet::new();
    raw.set_value(5).unwrap();
    assert_eq!(raw.value(), 5);
    assert_eq!(raw.len(), 0);
    assert!(raw.is_empty());
    assert_eq!(raw.to_string(), "0");
    insta::assert_snapshot!(format!("{raw:?}"), @"FlagSet(0x5)");

    let mut stray = flag_set![Desc::SMALL];
    stray.set_value(0b10_0001).unwrap();
    assert_eq!(stray.len(), 1);
    assert!(!stray.is_empty());
    assert_eq!(stray.to_string(), "SMALL");
    insta::assert_snapshot!(format!("{stray:?}"), @"FlagSet(Desc, Desc.SMALL, 0x20)");
}

#[test]
fn test_from_flags() {
    let mask = FlagSet::from_flags([Desc::FUNKY, Desc::SMALL]).unwrap();
    assert_eq!(mask, flag_set![Desc::SMALL, Desc::FUNKY]);

    let erased = [Desc::SMALL.flag(), Colors::TEAL.flag()];
    assert!(matches!(
        FlagSet::from_flags(erased),
        Err(FlagSetError::TypeConflict { .. })
    ));

    let collected: FlagSet = [Desc::ROUND, Desc::SONAR].into_iter().collect();
    assert_eq!(collected.value(), 18);
    assert_eq!(FlagSet::from(Desc::SONAR), flag_set![Desc::SONAR]);
}

#[test]
fn test_str() {
    let mut mask = flag_set![Desc::SMALL, Desc::FUNKY];
    insta::assert_snapshot!(mask.to_string(), @"SMALL|FUNKY");
    mask.add(Desc::ROUND).unwrap();
    insta::assert_snapshot!(mask.to_string(), @"SMALL|ROUND|FUNKY");
    assert_eq!(flag_set![Desc::ROUND].to_string(), "ROUND");
    assert_eq!(FlagSet::new().to_string(), "0");
    assert_eq!(FlagSet::of::<Desc>().to_string(), "0");

    assert_eq!(mask.display_with(", ", "none").to_string(), "SMALL, ROUND, FUNKY");
    assert_eq!(FlagSet::new().display_with(", ", "none").to_string(), "none");
}

#[test]
fn test_int() {
    let mut mask = flag_set![Desc::SMALL, Desc::FUNKY];
    assert_eq!(u64::from(&mask), mask.value());
    mask.set_value(4).unwrap();
    assert_eq!(u64::from(mask), 4);
    assert!(flag_set![Desc::SMALL] < flag_set![Desc::ROUND]);
    assert_eq!(
        flag_set![Desc::SMALL].partial_cmp(&flag_set![Colors::TEAL]),
        None
    );
}

#[test]
fn test_hex() {
    assert_eq!(flag_set![Desc::SMALL].to_hex(), "0x1");
    assert_eq!(FlagSet::new().to_hex(), "0x0");
    assert_eq!(flag_set![Desc::SONAR].to_hex(), "0x10");
    assert_eq!(format!("{:#X}", flag_set![Desc::SONAR, Desc::FUNKY]), "0x14");
    assert_eq!(format!("{:o}", flag_set![Desc::SONAR]), "20");
    assert_eq!(format!("{:08b}", flag_set![Desc::SONAR]), "00010000");
}

#[cfg(feature = "record")]
#[test]
fn test_record_round_trip() {
    use bitmask_rs::record::{
        enumeration_registry::EnumerationRegistry, flag_set_record::FlagSetRecord,
    };

    test_logger();
    let registry = EnumerationRegistry::new().with::<Desc>().with::<Colors>();
    assert_eq!(registry.len(), 2);

    for set in [
        flag_set![Desc::SMALL, Desc::SONAR],
        flag_set![Colors::PINK],
        FlagSet::of::<Colors>(),
        FlagSet::new(),
    ] {
        let record = FlagSetRecord::from(&set);
        let token = record.to_token().unwrap();
        let restored = FlagSetRecord::from_token(&token)
            .unwrap()
            .restore(&registry)
            .unwrap();
        assert_eq!(restored.binding(), set.binding());
        assert_eq!(restored.value(), set.value());

        let digest = FlagSetRecord::from_digest(&record.to_digest()).unwrap();
        assert_eq!(digest, record);
    }
}
