use home_fit::listing::{load_houses, BuyerProfile, House, PriorityMode};
use home_fit::scoring::{score, Dimension, ScoreError};
use rust_decimal::Decimal;
use std::env;

fn profile(max_price: i64) -> BuyerProfile {
    BuyerProfile::new(
        Decimal::from(max_price),
        3,
        Decimal::new(20, 1),
        PriorityMode::Balanced,
    )
}

fn forbes_ave() -> House {
    House {
        address1: Some("2464 Forbes Ave".to_string()),
        address2: Some("Santa Clara, CA 95050".to_string()),
        avm_value: Some(1_900_000),
        beds: Some(3),
        baths_total: Some(Decimal::new(20, 1)),
        crime_index: Some(33),
        schools_json: Some(r#"[{"schoolRating":"A"},{"schoolRating":"B+"}]"#.to_string()),
        ..Default::default()
    }
}

#[test]
fn house_within_budget_scores_93() {
    let result = score(&profile(2_000_000), &forbes_ave()).unwrap();

    let dims: Vec<u8> = result.dimensions.iter().map(|d| d.score).collect();
    assert_eq!(dims, vec![90, 100, 100, 83]);
    assert_eq!(result.total_score, 93);
    assert!(result.summary.contains("this property is a match for you"));
}

#[test]
fn halving_the_budget_drops_total_to_78() {
    let result = score(&profile(1_000_000), &forbes_ave()).unwrap();

    assert_eq!(result.dimension(Dimension::Price), 30);
    assert_eq!(result.total_score, 78);
}

#[test]
fn missing_inputs_fail_without_partial_result() {
    let mut house = forbes_ave();
    house.crime_index = None;
    assert_eq!(
        score(&profile(2_000_000), &house).unwrap_err(),
        ScoreError::MissingField("crimeIndex")
    );

    let mut house = forbes_ave();
    house.schools_json = None;
    let err = score(&profile(2_000_000), &house).unwrap_err();
    assert_eq!(err.field(), "schoolsJson");
    assert!(matches!(err, ScoreError::InvalidValue { .. }));
}

#[test]
fn houses_loaded_from_json_score_like_the_collaborator_payload() {
    let path = env::temp_dir().join("home_fit_it_houses.json");
    std::fs::write(
        &path,
        r#"[
            {
                "address1": "2464 Forbes Ave",
                "address2": "Santa Clara, CA 95050",
                "avmValue": 1900000,
                "beds": 3,
                "bathsTotal": 2.0,
                "crimeIndex": 33,
                "schoolsJson": "[{\"schoolRating\":\"A\"},{\"schoolRating\":\"B+\"}]"
            },
            {
                "address1": "77 Cramped Ct",
                "avmValue": 1500000,
                "beds": 1,
                "bathsTotal": 1.0,
                "crimeIndex": 60,
                "schoolsJson": "[\"A\"]"
            }
        ]"#,
    )
    .unwrap();

    let houses = load_houses(&path).unwrap();
    let results: Vec<_> = houses
        .iter()
        .map(|house| score(&profile(2_000_000), house).unwrap())
        .collect();

    assert_eq!(results[0].total_score, 93);
    // two bedrooms short: space 0, capped at 40
    assert_eq!(results[1].dimension(Dimension::Space), 0);
    assert_eq!(results[1].total_score, 40);
    assert!(results[1].capped);

    let _ = std::fs::remove_file(&path);
}
