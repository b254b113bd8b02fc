// End-to-end scenarios through the public API.

use colmerge_sdk::*;

fn colors(red: Option<f64>, blue: Option<f64>, green: Option<f64>) -> Series {
    Series::from_pairs([
        ("red", Value::from(red)),
        ("blue", Value::from(blue)),
        ("green", Value::from(green)),
    ])
    .unwrap()
}

fn floats(values: &[Option<f64>]) -> Series {
    Series::from_values(values.iter().map(|v| Value::from(*v)).collect())
}

// ---------------------------------------------------------------------------
// Coalescing
// ---------------------------------------------------------------------------

#[test]
fn coalesce_four_sources() {
    let s1 = colors(None, Some(222.2), None);
    let s2 = colors(Some(777.7), None, None);
    let s3 = colors(Some(777.7), Some(222.2), None);
    let s4 = colors(Some(777.7), None, Some(111.1));

    let merged = coalesce(vec![s1, s2, s3, s4], RemainingNulls::default()).unwrap();
    assert_eq!(merged.series, colors(Some(777.7), Some(222.2), Some(111.1)));
}

#[test]
fn coalesce_remaining_nulls() {
    let s1 = colors(None, Some(222.2), None);
    let s2 = colors(Some(777.7), None, None);
    let s3 = colors(Some(777.7), Some(222.2), None);
    let three = vec![s1, s2, s3.clone()];

    let err = coalesce_str(three.clone(), "raise").unwrap_err();
    assert!(err.is_unresolved());

    let merged = coalesce_str(three.clone(), "ignore").unwrap();
    assert_eq!(merged.series, s3);
    assert!(!merged.has_advisories());

    let merged = coalesce_str(three, "warn").unwrap();
    assert_eq!(merged.series, s3);
    assert_eq!(merged.advisories.len(), 1);
}

// ---------------------------------------------------------------------------
// Comparison
// ---------------------------------------------------------------------------

#[test]
fn compare_three_policies() {
    let a = floats(&[Some(1.0), Some(2.0), Some(3.0)]);
    let b = floats(&[Some(1.0), None, Some(3.0)]);
    let pair = vec![a, b];

    assert_eq!(compare_all_str(pair.clone(), "all").unwrap().values(), &[true, false, true]);
    assert_eq!(compare_all_str(pair.clone(), "any").unwrap().values(), &[true, true, true]);
    assert_eq!(compare_all_str(pair, "none").unwrap().values(), &[true, false, true]);
}

#[test]
fn compare_reduced() {
    let a = floats(&[Some(1.0), None]);
    let b = floats(&[Some(1.0), None]);
    assert!(compare_all_reduced(vec![a.clone(), b.clone()], NullPolicy::All).unwrap());
    assert!(!compare_all_reduced(vec![a, b], NullPolicy::None).unwrap());
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[test]
fn empty_input() {
    let err = compare_all(Vec::<SequenceInput>::new(), NullPolicy::Any).unwrap_err();
    assert!(matches!(err, CompareError::Align(AlignError::EmptyInput)));

    let err = coalesce(Vec::<SequenceInput>::new(), RemainingNulls::Raise).unwrap_err();
    assert!(matches!(err, CoalesceError::Align(AlignError::EmptyInput)));

    let err = Reconciler::default().reconcile(Vec::<Series>::new()).unwrap_err();
    assert!(matches!(err, SdkError::Compare(CompareError::Align(AlignError::EmptyInput))));
}

#[test]
fn invalid_options_name_the_value() {
    let a = floats(&[Some(1.0)]);

    let err = compare_all_str(vec![a.clone(), a.clone()], "foobar").unwrap_err();
    assert!(err.is_invalid_argument());
    assert!(err.to_string().contains("'foobar'"));

    let err = coalesce_str(vec![a], "sometimes").unwrap_err();
    assert!(err.is_invalid_argument());
    assert!(err.to_string().contains("'sometimes'"));
}

#[test]
fn shape_mismatch() {
    let input = vec![floats(&[Some(1.0)]), floats(&[Some(1.0), Some(2.0)])];
    let err = compare_all(input, NullPolicy::Any).unwrap_err();
    assert!(matches!(err, CompareError::Align(ref e) if e.is_shape_mismatch()));
}

#[test]
fn unsupported_element() {
    let input = vec![
        SequenceInput::List(vec![Value::Int(1)]),
        SequenceInput::mapping([("a", 1i64)]),
    ];
    let err = compare_all(input, NullPolicy::Any).unwrap_err();
    assert!(matches!(
        err,
        CompareError::Align(AlignError::UnsupportedElementType {
            kind: SequenceKind::Mapping,
            ..
        })
    ));
}

// ---------------------------------------------------------------------------
// Frames and configuration
// ---------------------------------------------------------------------------

#[test]
fn frame_reconcile_with_toml_config() {
    let frame = Frame::from_columns(vec![
        ("crm", vec![Value::from("Ada"), Value::Null, Value::from("Grace")]),
        ("billing", vec![Value::Null, Value::from("Alan"), Value::from("Grace")]),
    ])
    .unwrap();

    let text = "null_policy = \"any\"\nremaining_nulls = \"raise\"";
    let config = ReconcileConfig::from_toml_str(text).unwrap();
    let merged = Reconciler::new(config).reconcile(frame).unwrap();
    assert_eq!(
        merged.series.values(),
        &[Value::from("Ada"), Value::from("Alan"), Value::from("Grace")]
    );
    assert_eq!(merged.filled_from, vec![Some(0), Some(1), Some(0)]);
}
