//! Mappings refuse scales outside of the range they support.

use expo_mapping::{
    BucketBoundary, ConstantsTable, ExponentMapping, LogarithmMapping, LookupTableMapping, Mapping, MappingConfiguration,
    MappingError, MappingStrategy, MAX_SCALE, MIN_SCALE,
};
use proptest::prelude::*;

fn is_invalid_scale<T>(result: Result<T, MappingError>, expected_scale: i32) -> bool {
    matches!(result, Err(MappingError::InvalidScale { scale, .. }) if scale == expected_scale)
}

#[test]
fn test_supported_scales() {
    for scale in MIN_SCALE..=MAX_SCALE {
        assert!(Mapping::new(scale).is_ok());
        assert_eq!(ExponentMapping::new(scale).is_ok(), scale <= 0);
        assert_eq!(LogarithmMapping::new(scale).is_ok(), scale > 0);
        assert_eq!(LookupTableMapping::new(scale).is_ok(), scale > 0);
        assert_eq!(ConstantsTable::for_scale(scale).is_ok(), scale > 0);
    }
}

#[test]
fn test_error_messages() {
    let error = Mapping::new(21).unwrap_err();
    assert_eq!(error.to_string(), "Scale 21 is outside of the permitted range [-10, 20].");

    let error = LogarithmMapping::new(0).unwrap_err();
    assert_eq!(error.to_string(), "Scale 0 is outside of the permitted range [1, 20].");
}

proptest! {
    #[test]
    fn property_test_out_of_range_scales(scale in prop_oneof![i32::MIN..MIN_SCALE, MAX_SCALE + 1..=i32::MAX]) {
        prop_assert!(is_invalid_scale(Mapping::new(scale), scale));
        prop_assert!(is_invalid_scale(ExponentMapping::new(scale), scale));
        prop_assert!(is_invalid_scale(LogarithmMapping::new(scale), scale));
        prop_assert!(is_invalid_scale(LookupTableMapping::new(scale), scale));
        prop_assert!(is_invalid_scale(ConstantsTable::for_scale(scale), scale));

        let config = MappingConfiguration::new(scale)
            .with_strategy(MappingStrategy::Logarithm)
            .with_boundary(BucketBoundary::UpperInclusive);
        prop_assert!(is_invalid_scale(config.build(), scale));
    }
}
