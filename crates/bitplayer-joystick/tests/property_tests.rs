//! Property-based tests for the direction classifier: dead zone, mirror
//! symmetry and boundary continuity.

#[cfg(test)]
mod property_tests {
    use bitplayer_joystick::{
        Direction, DirectionClassifier, JoystickConfig, classify, classify_with_dead_zone,
        is_at_position,
    };
    use proptest::prelude::*;

    fn any_direction() -> impl Strategy<Value = Direction> {
        proptest::sample::select(Direction::ALL.to_vec())
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(500))]

        // --- Dead zone: everything within d0 is Center ---

        #[test]
        fn inside_dead_zone_is_center(x in -250i32..=250, y in -250i32..=250) {
            prop_assume!(x * x + y * y <= 250 * 250);
            prop_assert_eq!(classify(x, y), Direction::Center);
        }

        #[test]
        fn inside_custom_dead_zone_is_center(
            (dead_zone, x, y) in (1i32..=1000).prop_flat_map(|dz| (Just(dz), -dz..=dz, -dz..=dz)),
        ) {
            // the square around the circle rejects only its corners
            let dz = i64::from(dead_zone);
            prop_assume!(i64::from(x).pow(2) + i64::from(y).pow(2) <= dz * dz);
            let dead_zone = dead_zone.unsigned_abs();
            prop_assert_eq!(classify_with_dead_zone(x, y, dead_zone), Direction::Center);
        }

        // --- Off-axis samples outside the dead zone always get a direction ---

        #[test]
        fn off_axis_outside_dead_zone_is_directional(
            x in -2000i32..=2000,
            y in -2000i32..=2000,
        ) {
            prop_assume!(x != 0 && y != 0);
            prop_assume!(x * x + y * y >= 251 * 251);
            prop_assert_ne!(classify(x, y), Direction::Center);
        }

        // --- Axis samples fall through to Center at any magnitude ---

        #[test]
        fn axis_samples_are_center(v in any::<i32>()) {
            prop_assert_eq!(classify(v, 0), Direction::Center);
            prop_assert_eq!(classify(0, v), Direction::Center);
        }

        // --- Symmetry: the upper half mirrors exactly ---

        #[test]
        fn upper_half_mirrors(x in 1i32..=5000, y in 1i32..=5000) {
            prop_assert_eq!(classify(-x, y), classify(x, y).mirror_horizontal());
        }

        #[test]
        fn lower_diagonal_mirrors(k in 1i32..=100_000) {
            prop_assert_eq!(classify(-k, -k), classify(k, -k).mirror_horizontal());
        }

        // --- Continuity: growing magnitude leaves Center exactly once ---

        #[test]
        fn leaves_center_exactly_once(a in -20i32..=20, b in -20i32..=20) {
            prop_assume!(a != 0 && b != 0);
            let centered: Vec<bool> = (1..=400)
                .map(|k| classify(k * a, k * b).is_center())
                .collect();
            let transitions = centered.windows(2).filter(|w| w.first() != w.get(1)).count();
            prop_assert_eq!(transitions, 1);
            prop_assert_eq!(centered.first(), Some(&true));
            prop_assert_eq!(centered.last(), Some(&false));
        }

        #[test]
        fn direction_is_stable_when_scaled(a in 1i32..=20, b in 1i32..=20) {
            // thresholds grow with the radius, so the band depends on angle only
            let far = classify(a * 1000, b * 1000);
            let farther = classify(a * 2000, b * 2000);
            prop_assert_eq!(far, farther);
        }

        // --- Predicate ---

        #[test]
        fn is_at_position_is_reflexive(x in any::<i32>(), y in any::<i32>()) {
            let current = classify(x, y);
            prop_assert!(is_at_position(current, current));
        }

        #[test]
        fn is_at_position_matches_exactly_one(x in -600i32..=600, y in -600i32..=600) {
            let current = classify(x, y);
            let matches = Direction::ALL
                .iter()
                .filter(|&&target| is_at_position(current, target))
                .count();
            prop_assert_eq!(matches, 1);
        }

        #[test]
        fn is_at_position_is_equality(a in any_direction(), b in any_direction()) {
            prop_assert_eq!(is_at_position(a, b), a == b);
        }

        // --- Raw classification agrees with offset classification ---

        #[test]
        fn raw_matches_offset(
            raw_x in 0u16..=1023,
            raw_y in 0u16..=1023,
            center_x in 0u16..=1023,
            center_y in 0u16..=1023,
        ) {
            let config = JoystickConfig::default().with_center(center_x, center_y);
            let classifier = DirectionClassifier::new(config)
                .map_err(|e| TestCaseError::fail(e.to_string()))?;
            let (x, y) = config.offset(raw_x, raw_y);
            prop_assert_eq!(classifier.classify_raw(raw_x, raw_y), classify(x, y));
        }
    }
}
