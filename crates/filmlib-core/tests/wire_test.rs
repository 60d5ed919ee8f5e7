//! Wire mapping tests for filmlib-core

use chrono::NaiveDate;
use filmlib_core::*;
use pretty_assertions::assert_eq;

fn sample_film() -> Film {
    Film {
        id: 7,
        title: "La Grande Bellezza".to_string(),
        favorite: false,
        date: NaiveDate::from_ymd_opt(2023, 5, 1),
        rating: Some(5),
        user: 2,
    }
}

mod round_trip {
    use super::*;

    #[test]
    fn test_wire_film_round_trip() {
        let wire = WireFilm {
            id: 7,
            title: "La Grande Bellezza".to_string(),
            favorite: false,
            watchdate: NaiveDate::from_ymd_opt(2023, 5, 1),
            rating: Some(5),
            user: 2,
        };

        let json = serde_json::to_string(&wire).unwrap();
        let parsed: WireFilm = serde_json::from_str(&json).unwrap();

        assert_eq!(wire, parsed);
    }

    #[test]
    fn test_wire_to_domain_and_back() {
        let wire = WireFilm {
            id: 7,
            title: "La Grande Bellezza".to_string(),
            favorite: false,
            watchdate: NaiveDate::from_ymd_opt(2023, 5, 1),
            rating: Some(5),
            user: 2,
        };

        let film = Film::from(wire.clone());
        assert_eq!(film, sample_film());
        assert_eq!(WireFilm::from(&film), wire);
    }

    #[test]
    fn test_absent_date_round_trips_as_absent() {
        let json = r#"{"id":3,"title":"Shrek","favorite":false,"user":1}"#;
        let wire: WireFilm = serde_json::from_str(json).unwrap();
        assert_eq!(wire.watchdate, None);
        assert_eq!(wire.rating, None);

        let film = Film::from(wire);
        assert_eq!(film.date, None);

        let body = serde_json::to_value(NewFilmBody::from(&film)).unwrap();
        assert!(body.get("watchdate").is_none());
        assert!(body.get("rating").is_none());
    }

    #[test]
    fn test_null_date_decodes_as_absent() {
        let json = r#"{"id":3,"title":"Shrek","favorite":false,"watchdate":null,"rating":null,"user":1}"#;
        let wire: WireFilm = serde_json::from_str(json).unwrap();
        assert_eq!(wire.watchdate, None);
        assert_eq!(wire.rating, None);
    }

    #[test]
    fn test_date_string_parses_to_calendar_date() {
        let json = r#"{"id":3,"title":"Star Wars","favorite":true,"watchdate":"2023-05-01","rating":4,"user":1}"#;
        let wire: WireFilm = serde_json::from_str(json).unwrap();
        assert_eq!(wire.watchdate, NaiveDate::from_ymd_opt(2023, 5, 1));
    }
}

mod write_direction {
    use super::*;

    #[test]
    fn test_create_body_spells_date_watchdate() {
        let body = serde_json::to_value(NewFilmBody::from(&sample_film())).unwrap();

        assert_eq!(body["watchdate"], "2023-05-01");
        assert!(body.get("date").is_none());
        assert_eq!(body["user"], 2);
    }

    #[test]
    fn test_edit_body_spells_date_date_and_omits_user() {
        let body = serde_json::to_value(EditFilmBody::from(&sample_film())).unwrap();

        assert_eq!(body["date"], "2023-05-01");
        assert!(body.get("watchdate").is_none());
        assert!(body.get("user").is_none());
    }

    #[test]
    fn test_rating_body_shape() {
        let body = serde_json::to_value(RatingBody { id: 7, rating: 3 }).unwrap();
        assert_eq!(body, serde_json::json!({"id": 7, "rating": 3}));
    }

    #[test]
    fn test_credentials_serialize_as_given() {
        let creds = Credentials::new("harry", "pony");
        let json = serde_json::to_value(&creds).unwrap();
        assert_eq!(json, serde_json::json!({"username": "harry", "password": "pony"}));
    }
}
