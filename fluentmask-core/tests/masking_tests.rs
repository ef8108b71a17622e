// fluentmask-core/tests/masking_tests.rs
//! End-to-end behaviour of the built-in masks through the public API.

use fluentmask_core::masks::{self, formats, EIN, PHONE, SSN};
use fluentmask_core::{Characters, MaskEngine, MaskExt, MaskPipeline};

fn builtins() -> Vec<&'static MaskPipeline> {
    vec![&*SSN, &*EIN, &*PHONE, &*formats::SSN]
}

#[test]
fn test_blank_input_returns_empty_string_for_every_builtin() {
    for mask in builtins() {
        assert_eq!(mask.mask(""), "", "mask '{}'", mask.name());
        assert_eq!(mask.mask("   "), "", "mask '{}'", mask.name());
        assert_eq!(mask.mask("\t\r\n"), "", "mask '{}'", mask.name());
        assert_eq!(None::<&str>.mask(mask), "", "mask '{}'", mask.name());
    }
}

#[test_log::test]
fn test_returns_ssn_mask() {
    assert_eq!("123456789".mask(&*SSN), "###-##-6789");
}

#[test]
fn test_returns_ssn_mask_with_provided_character() {
    assert_eq!("123456789".mask(&SSN.with_mask_character('*')), "***-**-6789");
}

#[test]
fn test_returns_formatted_ssn_without_changing_characters() {
    assert_eq!("123456789".mask(&*formats::SSN), "123-45-6789");
}

#[test]
fn test_returns_ein_mask() {
    assert_eq!("123456789".mask(&*EIN), "##-###6789");
}

#[test]
fn test_formats_long_phone() {
    assert_eq!("1234567890".mask(&*PHONE), "(123) 456-7890");
}

#[test]
fn test_formats_short_phone() {
    assert_eq!("4567890".mask(&*PHONE), "456-7890");
}

#[test_log::test]
fn test_remasking_masked_ssn_returns_it_unchanged() {
    let masked = SSN.mask("123456789");
    // Only "6789" survives the digit filter, so the length check fails.
    assert_eq!(SSN.mask(&masked), masked);
    assert_eq!(EIN.mask(&EIN.mask("123456789")), "##-###6789");
}

#[test]
fn test_reformatting_formatted_ssn_is_stable() {
    // All nine digits survive the filter, so the value is reformatted identically.
    let formatted = formats::SSN.mask("123456789");
    assert_eq!(formats::SSN.mask(&formatted), formatted);
}

#[test]
fn test_wrong_digit_count_returns_original_unfiltered_input() {
    for input in ["12-34-5678", "ssn: 1234-56789-0", "abc", "123 45 678"] {
        assert_eq!(SSN.mask(input), input);
        assert_eq!(EIN.mask(input), input);
    }
}

#[test]
fn test_separators_and_noise_are_filtered_before_masking() {
    assert_eq!(SSN.mask("SSN 123-45-6789"), "###-##-6789");
    assert_eq!(EIN.mask(" 12-3456789 "), "##-###6789");
    assert_eq!(PHONE.mask("tel: 456.7890"), "456-7890");
}

#[test]
fn test_custom_pipeline_filters_are_order_sensitive() {
    let strip_then_take = MaskPipeline::builder("strip-then-take")
        .filter_characters(Characters::Letters)
        .filter(|s: &str| s.chars().take(3).collect())
        .build();
    let take_then_strip = MaskPipeline::builder("take-then-strip")
        .filter(|s: &str| s.chars().take(3).collect())
        .filter_characters(Characters::Letters)
        .build();

    assert_eq!(strip_then_take.mask("a1b2c3d4"), "abc");
    assert_eq!(take_then_strip.mask("a1b2c3d4"), "ab");
}

#[test]
fn test_shared_builtins_mask_concurrently() {
    let handles: Vec<_> = (0..8)
        .map(|i| {
            std::thread::spawn(move || {
                let input = format!("12345{:04}", i);
                (i, SSN.mask(&input), masks::EIN.mask(&input))
            })
        })
        .collect();

    for handle in handles {
        let (i, ssn, ein) = handle.join().unwrap();
        assert_eq!(ssn, format!("###-##-{:04}", i));
        assert_eq!(ein, format!("##-###{:04}", i));
    }
}

#[test]
fn test_engines_are_usable_as_trait_objects() {
    let engines: Vec<&dyn MaskEngine> = vec![&*SSN, &*PHONE];
    let out: Vec<String> = engines.iter().map(|e| e.mask("1234567890")).collect();
    assert_eq!(out, vec!["1234567890".to_string(), "(123) 456-7890".to_string()]);
}
