//! End-to-end evaluation scenarios through the public API

use dga::*;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
#[case::normal([0.0; 6], 0.0, 0.0, 0.0, "Normal Fault code: F5")]
#[case::sparking([90.0, 0.0, 0.0, 0.0, 0.0, 0.0], 90.0, 90.0, 0.0, "Sparking Fault code: F2")]
#[case::local_overheating([0.0, 40.0, 0.0, 0.0, 0.0, 0.0], 80.0, 80.0, 0.0, "Local overheating Fault code: F1")]
#[case::arcing_corona([0.0, 0.0, 0.0, 500.0, 0.0, 0.0], 2000.0, 2000.0, 0.0, "Arcing,Corona Fault code: F3 AND F4")]
#[case::severe_ethylene([0.0, 0.0, 101.0, 0.0, 0.0, 0.0], 303.0, 303.0, 0.0, "Severe Overheating or Arcing Fault code: F3")]
#[case::severe_co([0.0, 0.0, 0.0, 0.0, 1001.0, 0.0], 0.0, -2002.0, 2002.0, "Severe Overheating or Arcing Fault code: F3")]
fn scenario(
    #[case] gases: [f64; 6],
    #[case] total: f64,
    #[case] hydrogen: f64,
    #[case] oxygen: f64,
    #[case] fault: &'static str,
) {
    let [ch4, c2h6, c2h4, c2h2, co, co2] = gases;
    let result = evaluate(ch4, c2h6, c2h4, c2h2, co, co2);

    assert_eq!(result.get("Total Hydrocarbons"), Some(ResultValue::Number(total)));
    assert_eq!(result.get("Hydrogen"), Some(ResultValue::Number(hydrogen)));
    assert_eq!(result.get("Oxygen"), Some(ResultValue::Number(oxygen)));
    assert_eq!(result.get("Fault Type"), Some(ResultValue::Text(fault)));
}

#[test]
fn inputs_are_echoed_in_order() {
    let result = evaluate(1.5, 2.5, 3.5, 4.5, 5.5, 6.5);
    let echoed: Vec<_> = result.entries()[..6]
        .iter()
        .map(|(k, v)| (k.to_string(), *v))
        .collect();
    let expected: Vec<_> = Gas::ALL
        .iter()
        .zip([1.5, 2.5, 3.5, 4.5, 5.5, 6.5])
        .map(|(g, v)| (g.key().to_string(), ResultValue::Number(v)))
        .collect();
    assert_eq!(echoed, expected);
}

#[test]
fn co2_limit_is_exclusive() {
    let at = evaluate(0.0, 0.0, 0.0, 0.0, 0.0, 15000.0);
    let above = evaluate(0.0, 0.0, 0.0, 0.0, 0.0, 15000.0001);
    assert_eq!(at.fault_type, FaultType::Normal);
    assert_eq!(above.fault_type, FaultType::SevereOverheating);
}

#[test]
fn hydrogen_decides_before_anything_else() {
    // ethylene alone would be R2; enough of it pushes hydrogen over R1
    let result = evaluate(0.0, 0.0, 400.0, 0.0, 0.0, 0.0);
    assert_eq!(result.hydrogen, 1200.0);
    assert_eq!(result.fault_type, FaultType::ArcingCorona);
    assert_eq!(result.matched_rule(), "R1");
}

#[test]
fn large_and_odd_inputs_do_not_panic() {
    for v in [f64::MAX, f64::MIN, f64::INFINITY, f64::NEG_INFINITY, f64::NAN, -0.0] {
        let result = evaluate(v, v, v, v, v, v);
        assert!(FaultType::ALL.contains(&result.fault_type));
        assert_eq!(result.to_report().lines().count(), 10);
    }
}

#[test]
fn reading_round_trip() {
    let reading = GasReading::new(10.0, 20.0, 30.0, 40.0, 50.0, 60.0);
    assert_eq!(reading.evaluate().reading(), reading);
    assert_eq!(
        reading.evaluate(),
        evaluate(10.0, 20.0, 30.0, 40.0, 50.0, 60.0)
    );
}

#[test]
fn report_matches_original_layout() {
    let report = evaluate(0.0, 0.0, 0.0, 500.0, 0.0, 0.0).to_report();
    let expected = [
        "CH4: 0.0",
        "C2H6: 0.0",
        "C2H4: 0.0",
        "C2H2: 500.0",
        "CO: 0.0",
        "CO2: 0.0",
        "Total Hydrocarbons: 2000.0",
        "Hydrogen: 2000.0",
        "Oxygen: 0.0",
        "Fault Type: Arcing,Corona Fault code: F3 AND F4",
    ]
    .join("\n");
    assert_eq!(report, expected);
}
