//! Conversions between mappings and serde_json values.

use base64::Engine;
use beanmap_core::naming;
use beanmap_core::{Bean, Mapping, Value, ValueKind};

use crate::{BeanType, Error};

/// Convert an attribute value to serde_json::Value.
pub fn value_to_json(value: Value) -> serde_json::Value {
    match value {
        Value::Null => serde_json::Value::Null,
        Value::Bool(b) => serde_json::Value::Bool(b),
        Value::Integer(i) => serde_json::Value::Number(i.into()),
        Value::Float(f) => serde_json::Number::from_f64(f)
            .map(serde_json::Value::Number)
            .unwrap_or(serde_json::Value::Null),
        Value::String(s) => serde_json::Value::String(s),
        Value::Bytes(b) => {
            // JSON doesn't have bytes, so we base64 encode
            let encoded = base64::engine::general_purpose::STANDARD.encode(&b);
            serde_json::Value::String(encoded)
        }
    }
}

/// Convert a serde_json::Value to an attribute value.
///
/// Arrays and objects are rejected: attributes are flat.
pub fn json_to_value(json: serde_json::Value) -> Result<Value, Error> {
    match json {
        serde_json::Value::Null => Ok(Value::Null),
        serde_json::Value::Bool(b) => Ok(Value::Bool(b)),
        serde_json::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Ok(Value::Integer(i))
            } else if let Some(f) = n.as_f64() {
                Ok(Value::Float(f))
            } else {
                // Fallback for very large numbers
                Ok(Value::String(n.to_string()))
            }
        }
        serde_json::Value::String(s) => Ok(Value::String(s)),
        serde_json::Value::Array(_) => Err(Error::invalid_mapping("arrays are not attributes")),
        serde_json::Value::Object(_) => {
            Err(Error::invalid_mapping("nested objects are not attributes"))
        }
    }
}

/// Convert a mapping to a JSON object.
pub fn mapping_to_json(mapping: Mapping) -> serde_json::Value {
    serde_json::Value::Object(
        mapping
            .into_iter()
            .map(|(k, v)| (k, value_to_json(v)))
            .collect(),
    )
}

/// Convert a JSON object to a mapping.
///
/// JSON has no bytes, so `Value::Bytes` written by [`mapping_to_json`] comes
/// back as a base64 `Value::String`. Use [`json_to_mapping_for`] to restore
/// bytes for a known record type.
pub fn json_to_mapping(json: serde_json::Value) -> Result<Mapping, Error> {
    let serde_json::Value::Object(map) = json else {
        return Err(Error::invalid_mapping("expected a JSON object"));
    };
    map.into_iter()
        .map(|(k, v)| -> Result<(String, Value), Error> {
            let value = json_to_value(v).map_err(|e| match e {
                Error::InvalidMapping { message } => {
                    Error::invalid_mapping(format!("{}: {}", k, message))
                }
                other => other,
            })?;
            Ok((k, value))
        })
        .collect()
}

/// Convert a JSON object to a mapping for the record type `ty` describes.
///
/// Like [`json_to_mapping`], except that a string bound for a key whose
/// writers take bytes and not strings is base64-decoded into `Value::Bytes`.
pub fn json_to_mapping_for<T: Bean>(
    ty: &BeanType<T>,
    json: serde_json::Value,
) -> Result<Mapping, Error> {
    let mut mapping = json_to_mapping(json)?;
    for (key, value) in mapping.iter_mut() {
        let Value::String(encoded) = value else {
            continue;
        };
        if !takes_bytes(ty, key) {
            continue;
        }
        let bytes = base64::engine::general_purpose::STANDARD
            .decode(encoded.as_str())
            .map_err(|e| Error::invalid_mapping(format!("{}: invalid base64: {}", key, e)))?;
        *value = Value::Bytes(bytes);
    }
    Ok(mapping)
}

fn takes_bytes<T: Bean>(ty: &BeanType<T>, key: &str) -> bool {
    let writers = ty.writers(&naming::setter_name(key));
    writers.iter().any(|w| w.param.kind == ValueKind::Bytes)
        && !writers.iter().any(|w| w.param.kind == ValueKind::String)
}

#[cfg(test)]
mod tests {
    use super::*;
    use beanmap_core::{Constructor, Method};
    use collection_literals::btree;

    #[derive(Debug, Default, PartialEq)]
    struct Attachment {
        name: String,
        data: Vec<u8>,
    }

    impl Bean for Attachment {
        fn methods() -> Vec<Method<Self>> {
            vec![
                Method::reader("getName", |a: &Attachment| a.name.clone()),
                Method::writer("setName", |a: &mut Attachment, name: String| a.name = name),
                Method::reader("getData", |a: &Attachment| a.data.clone()),
                Method::writer("setData", |a: &mut Attachment, data: Vec<u8>| a.data = data),
            ]
        }

        fn constructor() -> Option<Constructor<Self>> {
            Some(Constructor::default_ctor())
        }
    }

    #[test]
    fn value_to_json_scalars() {
        assert_eq!(value_to_json(Value::Null), serde_json::Value::Null);
        assert_eq!(value_to_json(Value::Bool(true)), serde_json::json!(true));
        assert_eq!(value_to_json(Value::Integer(12345)), serde_json::json!(12345));
        assert_eq!(
            value_to_json(Value::from("hello world")),
            serde_json::json!("hello world")
        );
    }

    #[test]
    fn value_to_json_float() {
        let json = value_to_json(Value::Float(1.23456));
        if let serde_json::Value::Number(n) = json {
            assert!((n.as_f64().unwrap() - 1.23456).abs() < 0.00001);
        } else {
            panic!("expected number");
        }
    }

    #[test]
    fn value_to_json_nan_becomes_null() {
        assert_eq!(value_to_json(Value::Float(f64::NAN)), serde_json::Value::Null);
    }

    #[test]
    fn value_to_json_bytes() {
        let json = value_to_json(Value::Bytes(vec![1, 2, 3, 4]));

        // Should be base64 encoded
        if let serde_json::Value::String(s) = json {
            let decoded = base64::engine::general_purpose::STANDARD
                .decode(&s)
                .unwrap();
            assert_eq!(decoded, vec![1, 2, 3, 4]);
        } else {
            panic!("expected string");
        }
    }

    #[test]
    fn json_to_value_numbers() {
        assert_eq!(
            json_to_value(serde_json::json!(42)).unwrap(),
            Value::Integer(42)
        );
        assert_eq!(
            json_to_value(serde_json::json!(-100)).unwrap(),
            Value::Integer(-100)
        );
        match json_to_value(serde_json::json!(2.75)).unwrap() {
            Value::Float(f) => assert!((f - 2.75).abs() < 0.001),
            other => panic!("expected float, got {:?}", other),
        }
        // beyond i64 but representable as u64
        match json_to_value(serde_json::json!(u64::MAX)).unwrap() {
            Value::Float(_) => {}
            other => panic!("expected float, got {:?}", other),
        }
    }

    #[test]
    fn json_to_value_rejects_containers() {
        assert!(json_to_value(serde_json::json!([1, 2])).is_err());
        assert!(json_to_value(serde_json::json!({"a": 1})).is_err());
    }

    #[test]
    fn mapping_to_json_object() {
        let mapping = btree! {
            "id".to_string() => Value::Integer(100),
            "name".to_string() => Value::from("ABC"),
            "longName".to_string() => Value::Bool(false),
        };
        assert_eq!(
            mapping_to_json(mapping),
            serde_json::json!({"id": 100, "name": "ABC", "longName": false})
        );
    }

    #[test]
    fn json_to_mapping_object() {
        let mapping = json_to_mapping(serde_json::json!({"id": 123, "name": "ABCDEFG"})).unwrap();
        assert_eq!(
            mapping,
            btree! {
                "id".to_string() => Value::Integer(123),
                "name".to_string() => Value::from("ABCDEFG"),
            }
        );
    }

    #[test]
    fn json_to_mapping_rejects_non_objects() {
        let err = json_to_mapping(serde_json::json!([1])).unwrap_err();
        assert_eq!(err.to_string(), "invalid mapping: expected a JSON object");
    }

    #[test]
    fn json_to_mapping_names_nested_key() {
        let err = json_to_mapping(serde_json::json!({"tags": ["a"]})).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid mapping: tags: arrays are not attributes"
        );
    }

    #[test]
    fn json_to_mapping_for_restores_bytes() {
        let ty = BeanType::<Attachment>::new();
        let mapping = json_to_mapping_for(
            &ty,
            serde_json::json!({"name": "AQID", "data": "AQID", "extra": "AQID"}),
        )
        .unwrap();
        assert_eq!(
            mapping,
            btree! {
                "name".to_string() => Value::from("AQID"),
                "data".to_string() => Value::Bytes(vec![1, 2, 3]),
                "extra".to_string() => Value::from("AQID"),
            }
        );
    }

    #[test]
    fn json_to_mapping_for_rejects_bad_base64() {
        let ty = BeanType::<Attachment>::new();
        let err = json_to_mapping_for(&ty, serde_json::json!({"data": "not base64!"}))
            .unwrap_err();
        assert!(err.to_string().starts_with("invalid mapping: data: invalid base64"));
    }

    #[test]
    fn bytes_survive_json_transport() {
        let ty = BeanType::<Attachment>::new();
        let attachment = Attachment {
            name: "blob".to_string(),
            data: vec![0, 255, 7],
        };
        let json = mapping_to_json(ty.encode(&attachment));
        assert_eq!(json, serde_json::json!({"name": "blob", "data": "AP8H"}));

        let decoded = ty.decode(json_to_mapping_for(&ty, json).unwrap()).unwrap();
        assert_eq!(decoded, attachment);
    }
}
