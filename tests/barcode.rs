use barcoder::{
    BarcodeError, Base64Codec, BatchOptions, RenderConfig, Symbology, code128_values, encode,
    encode_batch, encode_to_image, from_inline_image, max_length, supported_characters,
    validate_value,
};
use pretty_assertions::assert_eq;

#[test]
fn encoding_twice_is_byte_identical() {
    let cfg = RenderConfig::default();
    for sym in Symbology::ALL {
        let a = encode_to_image(sym, "REPEAT-1", &cfg).unwrap();
        let b = encode_to_image(sym, "REPEAT-1", &cfg).unwrap();
        assert_eq!(a, b);
    }
}

#[test]
fn valid_values_always_encode() {
    let cfg = RenderConfig::default();
    for sym in Symbology::ALL {
        let all: String = supported_characters(sym).into_iter().collect();
        for chunk in all.as_bytes().chunks(max_length(sym)) {
            let value = std::str::from_utf8(chunk).unwrap();
            if validate_value(sym, value).is_ok() {
                assert!(encode_to_image(sym, value, &cfg).is_ok(), "{sym} {value:?}");
            }
        }
    }
}

#[test]
fn code128_value_sequence_for_single_letter() {
    assert_eq!(code128_values("A").unwrap(), vec![104, 33, 34, 106]);
}

#[test]
fn code39_lowercase_matches_uppercase() {
    let cfg = RenderConfig::default();
    let lower = encode(Symbology::Code39, "abc", &cfg).unwrap();
    let upper = encode(Symbology::Code39, "ABC", &cfg).unwrap();
    assert_eq!(lower.segments, upper.segments);
    assert_eq!(lower.normalized_value, "ABC");
    let image = encode_to_image(Symbology::Code39, "abc", &cfg).unwrap();
    assert_eq!(image.value, "ABC");
}

#[test]
fn length_boundaries_for_both_symbologies() {
    for sym in Symbology::ALL {
        let max = max_length(sym);
        assert!(validate_value(sym, &"1".repeat(max)).is_ok());
        assert_eq!(
            validate_value(sym, &"1".repeat(max + 1)),
            Err(BarcodeError::TooLong {
                max,
                actual: max + 1
            })
        );
    }
}

#[test]
fn error_messages_are_user_facing() {
    assert_eq!(
        validate_value(Symbology::Code39, "  ").unwrap_err().to_string(),
        "content must not be empty."
    );
    assert_eq!(
        validate_value(Symbology::Code39, &"A".repeat(33))
            .unwrap_err()
            .to_string(),
        "length must be under 32 characters."
    );
}

#[test]
fn image_embeds_svg_with_viewbox() {
    let out = encode_to_image(Symbology::Code128, "Hi", &RenderConfig::default()).unwrap();
    let svg = from_inline_image(&out.image, &Base64Codec).unwrap();
    assert!(svg.contains(r#"xmlns="http://www.w3.org/2000/svg""#));
    assert!(svg.contains(&format!(r#"viewBox="0 0 {} {}""#, out.width, out.height)));
}

#[test]
fn batch_isolates_failures_and_keeps_order() {
    let result = encode_batch(
        Symbology::Code39,
        "OK1\n@@@\nOK2",
        &RenderConfig::default(),
        BatchOptions::default(),
    );
    let values: Vec<_> = result.codes.iter().map(|c| c.value.clone()).collect();
    assert_eq!(values, vec!["OK1".to_string(), "OK2".to_string()]);
    assert_eq!(result.errors.len(), 1);
    assert!(result.errors[0].starts_with("Line 2: "));
}

#[test]
fn batch_skips_blank_lines() {
    let result = encode_batch(
        Symbology::Code128,
        "A\n\nB",
        &RenderConfig::default(),
        BatchOptions::default(),
    );
    assert_eq!(result.codes.len(), 2);
    assert!(result.errors.is_empty());
}

#[test]
fn batch_error_suppression_depends_on_option() {
    let cfg = RenderConfig::default();
    let quiet = encode_batch(Symbology::Code39, "@@@", &cfg, BatchOptions::default());
    assert!(quiet.codes.is_empty());
    assert!(quiet.errors.is_empty());

    let loud = encode_batch(
        Symbology::Code39,
        "@@@",
        &cfg,
        BatchOptions {
            include_errors_with_results: true,
        },
    );
    assert!(loud.codes.is_empty());
    assert_eq!(
        loud.errors,
        vec!["Line 1: unsupported character: '@' (U+0040)".to_string()]
    );
}

#[test]
fn batch_result_serializes_camel_case() {
    let result = encode_batch(
        Symbology::Code128,
        "x",
        &RenderConfig::default(),
        BatchOptions::default(),
    );
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["codes"][0]["suggestedFileName"], "x.svg");
    assert_eq!(json["codes"][0]["value"], "x");
    assert!(json["errors"].as_array().unwrap().is_empty());
}

#[test]
fn oversized_render_config_is_clamped_not_overflowed() {
    let cfg = RenderConfig::default()
        .with_module_width(500_000_000)
        .with_quiet_zone_modules(u32::MAX)
        .with_height(u32::MAX);
    for sym in Symbology::ALL {
        let symbol = encode(sym, "A", &cfg).unwrap();
        let widths: u32 = symbol.segments.iter().map(|s| s.width).sum();
        let quiet = symbol.segments[0].x;
        assert_eq!(symbol.total_width, widths + 2 * quiet);
        for pair in symbol.segments.windows(2) {
            assert_eq!(pair[1].x, pair[0].x + pair[0].width);
        }
        let out = encode_to_image(sym, "A", &cfg).unwrap();
        assert_eq!(out.width, symbol.total_width);
        assert_eq!(out.height, 2000);
    }
}

#[test]
fn batch_line_numbers_ignore_blank_lines() {
    let result = encode_batch(
        Symbology::Code39,
        "A\n\n@",
        &RenderConfig::default(),
        BatchOptions {
            include_errors_with_results: true,
        },
    );
    assert_eq!(
        result.errors,
        vec!["Line 2: unsupported character: '@' (U+0040)".to_string()]
    );
}

#[test]
fn png_renders_with_the_symbols_own_colors() {
    let cfg = RenderConfig::default().with_colors("#FF0000", "#00FF00");
    let symbol = encode(Symbology::Code128, "A", &cfg).unwrap();
    let img = barcoder::render_png(&symbol).unwrap();
    assert_eq!(img.get_pixel(0, 0).0, [0xff, 0, 0, 0xff]);
    let first_bar = symbol.segments[0];
    assert_eq!(img.get_pixel(first_bar.x, 0).0, [0, 0xff, 0, 0xff]);
}
