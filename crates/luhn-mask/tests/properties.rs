//! Property tests for the masking engine.

use luhn_mask::{MaskConfig, StreamMasker, mask_bytes};
use proptest::prelude::*;

/// Log-like byte soup, weighted so candidate digit runs show up often.
fn input_strategy() -> impl Strategy<Value = Vec<u8>> {
    let byte = prop_oneof![
        4 => (0u8..10).prop_map(|d| d + b'0'),
        1 => Just(b' '),
        1 => Just(b'-'),
        2 => b'a'..=b'z',
        1 => Just(b'\n'),
    ];
    prop::collection::vec(byte, 0..256)
}

/// Text whose digit runs are all too short to qualify.
fn short_run_strategy() -> impl Strategy<Value = Vec<u8>> {
    let block = prop_oneof![
        (1usize..=13).prop_flat_map(|len| {
            prop::collection::vec((0u8..10).prop_map(|d| d + b'0'), len)
        }),
        prop::collection::vec(b'a'..=b'z', 1..8),
    ];
    prop::collection::vec(block, 0..24).prop_map(|blocks| {
        let mut out = Vec::new();
        for block in blocks {
            out.extend_from_slice(&block);
            out.push(b'.');
        }
        out
    })
}

proptest! {
    #[test]
    fn output_has_input_length(input in input_strategy()) {
        prop_assert_eq!(mask_bytes(&input).len(), input.len());
    }

    #[test]
    fn only_digits_change_and_only_to_the_mask(input in input_strategy()) {
        let masked = mask_bytes(&input);
        for (raw, out) in input.iter().zip(&masked) {
            prop_assert!(
                out == raw || (raw.is_ascii_digit() && *out == b'X'),
                "byte {raw:#04x} became {out:#04x}"
            );
        }
    }

    #[test]
    fn masking_is_idempotent(input in input_strategy()) {
        let once = mask_bytes(&input);
        prop_assert_eq!(mask_bytes(&once), once.clone());
    }

    #[test]
    fn chunking_never_changes_the_output(
        input in input_strategy(),
        sizes in prop::collection::vec(1usize..17, 0..64),
    ) {
        let whole = mask_bytes(&input);

        let mut masker = StreamMasker::new(MaskConfig::default()).unwrap();
        let mut streamed = Vec::new();
        let mut rest = &input[..];
        for size in sizes {
            if rest.is_empty() {
                break;
            }
            let (chunk, tail) = rest.split_at(size.min(rest.len()));
            rest = tail;
            streamed.extend_from_slice(&masker.process(chunk).unwrap());
        }
        streamed.extend_from_slice(&masker.process(rest).unwrap());
        streamed.extend_from_slice(&masker.finish());

        prop_assert_eq!(streamed, whole);
    }

    #[test]
    fn short_runs_pass_through_untouched(input in short_run_strategy()) {
        prop_assert_eq!(mask_bytes(&input), input.clone());
    }

    #[test]
    fn emitted_prefix_is_final(
        input in input_strategy(),
        split in 0usize..256,
    ) {
        // whatever a chunk boundary lets through must already match the
        // whole-buffer result for those positions
        let split = split.min(input.len());
        let whole = mask_bytes(&input);

        let mut masker = StreamMasker::new(MaskConfig::default()).unwrap();
        let emitted = masker.process(&input[..split]).unwrap();
        prop_assert_eq!(&emitted[..], &whole[..emitted.len()]);
    }
}
