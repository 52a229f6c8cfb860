use serde::{Deserialize, Serialize};

#[cfg(feature = "entity-conversions")]
mod conv;

/// A restaurant as stored in the data file and
/// delivered by `GET /api/restaurants`.
///
/// Deserialization is lenient: a field that is missing, `null` or
/// of an unexpected type falls back to its default, so a single
/// incomplete record never spoils the whole collection.
#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
#[serde(rename_all = "camelCase")]
pub struct Restaurant {
    #[serde(default, deserialize_with = "lenient::string")]
    pub id              : String,
    #[serde(default, deserialize_with = "lenient::boolean")]
    pub visited         : bool,
    #[serde(default, deserialize_with = "lenient::string")]
    pub name            : String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub address         : String,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "lenient::opt_string")]
    pub google_maps_url : Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "lenient::opt_string")]
    pub place_id        : Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_strings")]
    pub opening_hours   : Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "lenient::opt_string")]
    pub comments        : Option<String>,
    #[serde(default, deserialize_with = "lenient::coordinates")]
    pub coordinates     : Coordinates,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "lenient::opt_string")]
    pub last_updated    : Option<String>,
}

/// `{ "lat": 0, "lng": 0 }` means "no coordinates".
#[derive(Serialize, Deserialize, Default)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, Copy, PartialEq))]
pub struct Coordinates {
    #[serde(default, deserialize_with = "lenient::number")]
    pub lat: f64,
    #[serde(default, deserialize_with = "lenient::number")]
    pub lng: f64,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct PlaceDetails {
    pub message: String,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, thiserror::Error))]
#[cfg_attr(feature = "extra-derive", error("{message} ({http_status})"))]
pub struct Error {
    pub http_status: u16,
    pub message: String,
}

mod lenient {
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    use super::Coordinates;

    fn scalar_to_string(value: Value) -> Option<String> {
        match value {
            Value::String(s) => Some(s),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            _ => None,
        }
    }

    pub fn string<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
        opt_string(d).map(Option::unwrap_or_default)
    }

    pub fn opt_string<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
        Value::deserialize(d).map(scalar_to_string)
    }

    pub fn opt_strings<'de, D: Deserializer<'de>>(
        d: D,
    ) -> Result<Option<Vec<String>>, D::Error> {
        let strings = match Value::deserialize(d)? {
            Value::Array(values) => Some(values.into_iter().filter_map(scalar_to_string).collect()),
            _ => None,
        };
        Ok(strings)
    }

    pub fn boolean<'de, D: Deserializer<'de>>(d: D) -> Result<bool, D::Error> {
        let visited = match Value::deserialize(d)? {
            Value::Bool(b) => b,
            Value::String(s) => s.trim().eq_ignore_ascii_case("true"),
            _ => false,
        };
        Ok(visited)
    }

    pub fn number<'de, D: Deserializer<'de>>(d: D) -> Result<f64, D::Error> {
        let number = match Value::deserialize(d)? {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        };
        Ok(number.filter(|n| n.is_finite()).unwrap_or_default())
    }

    pub fn coordinates<'de, D: Deserializer<'de>>(d: D) -> Result<Coordinates, D::Error> {
        let coordinates = match Value::deserialize(d)? {
            value @ Value::Object(_) => Coordinates::deserialize(value).unwrap_or_default(),
            _ => Coordinates::default(),
        };
        Ok(coordinates)
    }
}

#[cfg(all(test, feature = "extra-derive"))]
mod tests {
    use super::*;

    #[test]
    fn deserialize_complete_record() {
        let json = r#"{
          "id": "abc",
          "visited": true,
          "name": "Can Paixano",
          "address": "Carrer de la Reina Cristina, 7, Barcelona",
          "googleMapsUrl": "https://maps.example/abc",
          "placeId": "ChIJ123",
          "openingHours": ["Mo-Sa 09:00-22:30"],
          "comments": "Cava!",
          "coordinates": { "lat": 41.3818, "lng": 2.1832 },
          "lastUpdated": "2024-06-01T12:00:00.000Z"
        }"#;
        let r: Restaurant = serde_json::from_str(json).unwrap();
        assert_eq!("abc", r.id);
        assert!(r.visited);
        assert_eq!(Some("ChIJ123"), r.place_id.as_deref());
        assert_eq!(Some(vec!["Mo-Sa 09:00-22:30".to_string()]), r.opening_hours);
        assert_eq!(41.3818, r.coordinates.lat);
        assert_eq!(Some("2024-06-01T12:00:00.000Z"), r.last_updated.as_deref());
    }

    #[test]
    fn deserialize_incomplete_record() {
        let json = r#"{ "name": null, "comments": null, "coordinates": null }"#;
        let r: Restaurant = serde_json::from_str(json).unwrap();
        assert_eq!("", r.id);
        assert_eq!("", r.name);
        assert!(!r.visited);
        assert_eq!(None, r.comments);
        assert_eq!(Coordinates::default(), r.coordinates);
        assert_eq!(None, r.opening_hours);
    }

    #[test]
    fn serialize_camel_case_keys() {
        let r = Restaurant {
            id: "1".into(),
            visited: false,
            name: "x".into(),
            address: "y".into(),
            google_maps_url: Some("u".into()),
            place_id: None,
            opening_hours: None,
            comments: None,
            coordinates: Coordinates { lat: 1.0, lng: 2.0 },
            last_updated: Some("2024-01-01T00:00:00Z".into()),
        };
        let json = serde_json::to_value(&r).unwrap();
        assert_eq!(json["googleMapsUrl"], "u");
        assert_eq!(json["lastUpdated"], "2024-01-01T00:00:00Z");
        assert_eq!(json["coordinates"]["lng"], 2.0);
        assert!(json.get("placeId").is_none());
        assert!(json.get("comments").is_none());
        assert!(json["openingHours"].is_null());
    }

    #[test]
    fn deserialize_wrong_typed_fields() {
        let json = r#"{
          "id": 17,
          "visited": "TRUE",
          "name": ["not", "a", "name"],
          "comments": 42,
          "openingHours": "Mo-Fr 9-17",
          "coordinates": { "lat": "41.38", "lng": "east" },
          "lastUpdated": false
        }"#;
        let r: Restaurant = serde_json::from_str(json).unwrap();
        assert_eq!("17", r.id);
        assert!(r.visited);
        assert_eq!("", r.name);
        assert_eq!(Some("42"), r.comments.as_deref());
        assert_eq!(None, r.opening_hours);
        assert_eq!(41.38, r.coordinates.lat);
        assert_eq!(0.0, r.coordinates.lng);
        assert_eq!(Some("false"), r.last_updated.as_deref());

        let r: Restaurant = serde_json::from_str(r#"{ "coordinates": "41.38,2.17" }"#).unwrap();
        assert_eq!(Coordinates::default(), r.coordinates);
    }
}
