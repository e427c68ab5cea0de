use super::*;
use crate::foundation::core::EYELID_SIZE;

#[test]
fn curves_are_normalized_around_center() {
    assert_eq!(happy_upper(EYELID_CENTER), 30.0);
    assert_eq!(happy_upper(0), 50.0);
    assert_eq!(happy_lower(EYELID_CENTER), 225.0);
    assert_eq!(happy_lower(0), 210.0);
    assert_eq!(scared_lower(EYELID_CENTER), 225.0);
    assert_eq!(surprised_upper(0), 25.0);
}

#[test]
fn angry_upper_keeps_its_lopsided_v() {
    // Left edge: t = -1 -> 80 + 50 + 20; right edge: t = +1 -> 80 + 50 - 20.
    assert_eq!(angry_upper(0), 150.0);
    assert_eq!(angry_upper(EYELID_CENTER), 80.0);
    let right = angry_upper(EYELID_SIZE - 1);
    assert!(right < 110.0 && right > 105.0, "right edge was {right}");
}

#[test]
fn love_borrows_happy_lids() {
    for role in LidRole::BOTH {
        let love = Mood::Love.curve(role);
        let happy = Mood::Happy.curve(role);
        for x in [0, 17, EYELID_CENTER, EYELID_SIZE - 1] {
            assert_eq!(love(x), happy(x));
        }
    }
}

#[test]
fn every_mood_role_pair_is_distinct_from_its_sibling() {
    for mood in Mood::ALL {
        let upper = mood.curve(LidRole::Upper);
        let lower = mood.curve(LidRole::Lower);
        assert!(
            upper(EYELID_CENTER) < lower(EYELID_CENTER),
            "{mood}: upper lid must sit above lower lid at the center"
        );
    }
}

#[test]
fn mood_names_parse_case_insensitively() {
    assert_eq!("Sleepy".parse::<Mood>().unwrap(), Mood::Sleepy);
    assert_eq!(" love ".parse::<Mood>().unwrap(), Mood::Love);
    for mood in Mood::ALL {
        assert_eq!(mood.name().parse::<Mood>().unwrap(), mood);
    }
}

#[test]
fn unknown_mood_is_a_validation_error() {
    let err = "crazy".parse::<Mood>().unwrap_err();
    assert!(matches!(err, EyeError::Validation(_)));
    assert!(err.to_string().contains("crazy"));
}

#[test]
fn only_love_has_an_iris() {
    let with_iris: Vec<Mood> = Mood::ALL.into_iter().filter(|m| m.has_iris()).collect();
    assert_eq!(with_iris, vec![Mood::Love]);
}

#[test]
fn serde_uses_lowercase_names() {
    let json = serde_json::to_string(&(Mood::Suspicious, LidRole::Lower)).unwrap();
    assert_eq!(json, r#"["suspicious","lower"]"#);
}
