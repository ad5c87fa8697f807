mod common;

#[cfg(test)]
mod tests {
    use std::collections::{BTreeMap, HashMap};
    use std::rc::Rc;
    use std::sync::{mpsc, Arc};

    use compressor_core::canonical::{canonicalize, Canonicalizer};
    use compressor_core::{CanonicalError, Complex, Record, ShapeKind, StructuralErrorPolicy, Value};

    use crate::common::{init_logger, init_test_cases};

    fn bytes(v: impl Into<Value>) -> Vec<u8> {
        canonicalize(&v.into()).expect("canonicalize should succeed")
    }

    fn text(v: impl Into<Value>) -> String {
        String::from_utf8(bytes(v)).expect("canonical form should be utf-8 here")
    }

    // --- Table ---

    #[test]
    fn base_cases_match_expected_outcome() {
        init_logger();
        for tt in init_test_cases() {
            let result = canonicalize(&tt.arg);
            assert_eq!(result.is_err(), tt.want_err, "{}: {:?}", tt.name, result);
        }
    }

    // --- Scalars ---

    #[test]
    fn text_is_raw_utf8() {
        assert_eq!(bytes("test"), vec![0x74, 0x65, 0x73, 0x74]);
        assert_eq!(bytes("héllo ✓"), "héllo ✓".as_bytes());
        assert_eq!(bytes('x'), b"x");
        assert_eq!(bytes(""), b"");
    }

    #[test]
    fn integers_are_minimal_decimal() {
        assert_eq!(text(123), "123");
        assert_eq!(text(-42i8), "-42");
        assert_eq!(text(0u64), "0");
        assert_eq!(text(i64::MIN), "-9223372036854775808");
        assert_eq!(text(u64::MAX), "18446744073709551615");
        assert_eq!(text(u128::MAX), "340282366920938463463374607431768211455");
    }

    #[test]
    fn floats_are_shortest_round_trip() {
        assert_eq!(text(3.1), "3.1");
        assert_eq!(text(3.1f32), "3.1");
        assert_eq!(text(2.0), "2");
        assert_eq!(text(1e6), "1e+06");
        assert_eq!(text(0.1 + 0.2), "0.30000000000000004");
        assert_eq!(text(f64::NAN), "NaN");
        assert_eq!(text(f64::NEG_INFINITY), "-Inf");
    }

    #[test]
    fn complex_and_bool() {
        assert_eq!(text(Complex::new(3.1, 1.0)), "(3.1+1i)");
        assert_eq!(text(Complex::new(-1.5, -0.25)), "(-1.5-0.25i)");
        assert_eq!(text(true), "true");
        assert_eq!(text(false), "false");
    }

    // --- Bytes ---

    #[test]
    fn byte_sequence_passes_through() {
        let input = b"Hello world".to_vec();
        assert_eq!(bytes(input.clone()), input);

        let binary: Vec<u8> = (0..=255).collect();
        assert_eq!(bytes(binary.clone()), binary);
        assert_eq!(bytes(&[0xdeu8, 0xad, 0xbe, 0xef]), vec![0xde, 0xad, 0xbe, 0xef]);
    }

    // --- Composites ---

    #[test]
    fn mapping_uses_structural_encoding() {
        assert_eq!(text(Value::mapping([("test", 123)])), r#"{"test":123}"#);

        let mut hm = HashMap::new();
        hm.insert("b".to_string(), 2);
        hm.insert("a".to_string(), 1);
        assert_eq!(text(hm), r#"{"a":1,"b":2}"#);

        let bt: BTreeMap<&str, Value> = [("k", Value::null())].into_iter().collect();
        assert_eq!(text(bt), r#"{"k":null}"#);
    }

    #[test]
    fn sequence_uses_structural_encoding() {
        let v = Value::sequence(vec![Value::from(123), Value::from(12.23), Value::from("test")]);
        assert_eq!(text(v), r#"[123,12.23,"test"]"#);
        assert_eq!(text(Value::Sequence(vec![])), "[]");
    }

    #[test]
    fn record_fields_in_declaration_order() {
        let user = Record::new("user").field("Name", "Bob").field("Age", 25);
        assert_eq!(text(user), r#"{"Name":"Bob","Age":25}"#);
    }

    #[test]
    fn json_values_convert() {
        let v: Value = serde_json::json!({"test": 123, "list": [1, -2, 2.5]}).into();
        assert_eq!(text(v), r#"{"list":[1,-2,2.5],"test":123}"#);
    }

    // --- Indirection ---

    #[test]
    fn indirection_is_transparent() {
        let cases: Vec<Value> = vec![
            "test".into(),
            123.into(),
            3.1.into(),
            b"raw".to_vec().into(),
            Value::mapping([("test", 123)]),
        ];
        for v in cases {
            let direct = canonicalize(&v).unwrap();
            let pointed = canonicalize(&Value::pointer(v.clone())).unwrap();
            assert_eq!(direct, pointed, "shape {}", v.shape());
        }

        assert_eq!(bytes(Some(5)), b"5");
        assert_eq!(bytes(Box::new("boxed")), b"boxed");
        assert_eq!(bytes(Rc::new(7u8)), b"7");
        assert_eq!(bytes(Arc::new(true)), b"true");
    }

    #[test]
    fn multi_level_indirection_is_followed() {
        let v = Value::pointer(Value::pointer(Value::pointer("deep")));
        assert_eq!(canonicalize(&v).unwrap(), b"deep");
    }

    #[test]
    fn null_indirection_fails() {
        assert_eq!(canonicalize(&Value::null()), Err(CanonicalError::NullIndirection));
        assert_eq!(canonicalize(&None::<String>.into()), Err(CanonicalError::NullIndirection));

        let nested = Value::pointer(Value::pointer(Value::null()));
        assert_eq!(canonicalize(&nested), Err(CanonicalError::NullIndirection));
    }

    #[test]
    fn depth_limit_is_enforced() {
        let mut v = Value::from("leaf");
        for _ in 0..10 {
            v = Value::pointer(v);
        }

        let tight = Canonicalizer::new(Some(9), None);
        assert_eq!(tight.canonicalize(&v), Err(CanonicalError::TooDeep { max_depth: 9 }));

        let exact = Canonicalizer::new(Some(10), None);
        assert_eq!(exact.canonicalize(&v).unwrap(), b"leaf");
    }

    fn chain(len: usize) -> Value {
        let mut v = Value::from(1);
        for _ in 0..len {
            v = Value::pointer(v);
        }
        v
    }

    #[test]
    fn depth_limit_applies_inside_composites() {
        let tight = Canonicalizer::new(Some(4), None);
        let strict = Canonicalizer::new(Some(4), Some(StructuralErrorPolicy::Strict));
        let in_seq = Value::sequence(vec![chain(10)]);
        let in_map = Value::mapping([("k", chain(10))]);
        let in_record = Value::Record(Record::new("Holder").field("inner", chain(10)));

        for v in [&in_seq, &in_map, &in_record] {
            assert_eq!(tight.canonicalize(v), Err(CanonicalError::TooDeep { max_depth: 4 }));
            assert_eq!(strict.canonicalize(v), Err(CanonicalError::TooDeep { max_depth: 4 }));
        }

        let roomy = Canonicalizer::new(Some(10), None);
        assert_eq!(roomy.canonicalize(&in_seq).unwrap(), b"[1]");
        assert_eq!(roomy.canonicalize(&in_map).unwrap(), br#"{"k":1}"#);
    }

    #[test]
    fn outer_indirections_count_toward_nested_depth() {
        let v = Value::pointer(Value::pointer(Value::sequence(vec![chain(3)])));
        assert_eq!(
            Canonicalizer::new(Some(4), None).canonicalize(&v),
            Err(CanonicalError::TooDeep { max_depth: 4 })
        );
        assert_eq!(Canonicalizer::new(Some(5), None).canonicalize(&v).unwrap(), b"[1]");
    }

    #[test]
    fn long_nested_chain_fails_without_overflow() {
        let v = Value::sequence(vec![Value::from("ok"), chain(2000)]);
        assert_eq!(canonicalize(&v), Err(CanonicalError::TooDeep { max_depth: 1024 }));
    }

    // --- Unsupported ---

    #[test]
    fn channels_and_functions_are_rejected() {
        let (tx, rx) = mpsc::channel::<u8>();
        let (ctx, crx) = crossbeam::channel::bounded::<String>(1);

        for v in [Value::from(tx), Value::from(rx), Value::from(ctx), Value::from(crx)] {
            assert_eq!(v.shape(), ShapeKind::Unsupported);
            assert_eq!(
                canonicalize(&v),
                Err(CanonicalError::UnsupportedShape { shape: "chan".into() })
            );
        }

        assert_eq!(
            canonicalize(&Value::function()),
            Err(CanonicalError::UnsupportedShape { shape: "func".into() })
        );
        assert!(matches!(
            canonicalize(&Value::opaque::<std::fs::File>()),
            Err(CanonicalError::UnsupportedShape { shape }) if shape.contains("File")
        ));
    }

    #[test]
    fn error_message_names_the_shape() {
        let err = canonicalize(&Value::unsafe_pointer()).unwrap_err();
        assert_eq!(err.to_string(), "cannot canonicalize value, unsupported shape unsafe pointer");
    }

    // --- Structural error policy ---

    #[test]
    fn lenient_policy_swallows_structural_errors() {
        init_logger();
        let (tx, _rx) = mpsc::channel::<u8>();
        let broken = Value::mapping([("c", Value::from(tx))]);
        assert_eq!(canonicalize(&broken).unwrap(), Vec::<u8>::new());

        let nan_list = Value::sequence(vec![f64::NAN]);
        assert_eq!(canonicalize(&nan_list).unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn strict_policy_surfaces_structural_errors() {
        let strict = Canonicalizer::new(None, Some(StructuralErrorPolicy::Strict));
        let broken = Value::mapping([("z", Complex::new(1.0, 2.0))]);

        match strict.canonicalize(&broken) {
            Err(CanonicalError::Structural { shape, msg }) => {
                assert_eq!(shape, ShapeKind::KeyedMapping);
                assert!(msg.contains("complex"), "{msg}");
            }
            other => panic!("expected structural error, got {other:?}"),
        }

        assert_eq!(strict.canonicalize(&Value::mapping([("ok", 1)])).unwrap(), br#"{"ok":1}"#);
    }

    // --- Determinism ---

    #[test]
    fn canonicalization_is_deterministic() {
        for tt in init_test_cases().into_iter().filter(|tt| !tt.want_err) {
            let a = canonicalize(&tt.arg).unwrap();
            let b = canonicalize(&tt.arg).unwrap();
            assert_eq!(a, b, "{}", tt.name);
        }
    }
}
