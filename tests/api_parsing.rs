use ecodash::Error;
use ecodash::api::decode_envelope;
use ecodash::models::{Meta, RawPoint};

#[test]
fn parse_sample_envelope() {
    let sample = r#"
    [
      {"page":1,"pages":1,"per_page":"2","total":2},
      [
        {
          "indicator":{"id":"NY.GDP.MKTP.CD","value":"GDP (current US$)"},
          "country":{"id":"IN","value":"India"},
          "countryiso3code":"IND",
          "date":"2022",
          "value":3416645826413.21,
          "unit":"",
          "obs_status":null,
          "decimal":0
        },
        {
          "indicator":{"id":"NY.GDP.MKTP.CD","value":"GDP (current US$)"},
          "country":{"id":"IN","value":"India"},
          "countryiso3code":"IND",
          "date":"2023",
          "value":null,
          "unit":"",
          "obs_status":null,
          "decimal":0
        }
      ]
    ]
    "#;

    let v: serde_json::Value = serde_json::from_str(sample).unwrap();
    let arr = v.as_array().unwrap();
    let meta: Meta = serde_json::from_value(arr[0].clone()).unwrap();
    assert_eq!(meta.page, 1);
    assert_eq!(meta.per_page, 2);
    assert_eq!(meta.total, 2);

    let points = decode_envelope(&v).unwrap();
    assert_eq!(points.len(), 2);
    assert_eq!(points[0].countryiso3code, "IND");
    assert_eq!(points[0].year(), 2022);
    assert_eq!(points[0].value, Some(3416645826413.21));
    assert_eq!(points[1].value, None);
}

#[test]
fn meta_accepts_numeric_per_page() {
    let meta: Meta =
        serde_json::from_value(serde_json::json!({"page":1,"pages":3,"per_page":50,"total":130}))
            .unwrap();
    assert_eq!(meta.per_page, 50);
    assert_eq!(meta.pages, 3);
}

#[test]
fn meta_rejects_unparseable_per_page() {
    let r: Result<Meta, _> = serde_json::from_value(
        serde_json::json!({"page":1,"pages":1,"per_page":"many","total":0}),
    );
    assert!(r.is_err());
}

#[test]
fn error_object_envelope_is_empty_result() {
    // Bad codes come back under HTTP 200 as a one-element envelope whose
    // head carries a message array.
    let sample = r#"
    [
      {"message":[{"id":"120","key":"Invalid value","value":"The provided parameter value is not valid"}]}
    ]
    "#;
    let v: serde_json::Value = serde_json::from_str(sample).unwrap();
    assert!(matches!(decode_envelope(&v), Err(Error::EmptyResult)));
}

#[test]
fn missing_record_list_is_empty_result() {
    let v = serde_json::json!([{"page":1,"pages":0,"per_page":"10","total":0}, null]);
    assert!(matches!(decode_envelope(&v), Err(Error::EmptyResult)));

    let v = serde_json::json!([{"page":1,"pages":0,"per_page":"10","total":0}]);
    assert!(matches!(decode_envelope(&v), Err(Error::EmptyResult)));
}

#[test]
fn non_array_payload_is_decode_error() {
    let v = serde_json::json!({"unexpected":"object"});
    assert!(matches!(decode_envelope(&v), Err(Error::Decode(_))));
}

#[test]
fn unparseable_year_collapses_to_zero() {
    let p: RawPoint = serde_json::from_value(serde_json::json!({
        "indicator":{"id":"SP.POP.TOTL","value":"Population, total"},
        "country":{"id":"IN","value":"India"},
        "countryiso3code":"IND",
        "date":"2020M06",
        "value":1.0,
        "unit":"",
        "obs_status":null,
        "decimal":0
    }))
    .unwrap();
    assert_eq!(p.year(), 0);
}
