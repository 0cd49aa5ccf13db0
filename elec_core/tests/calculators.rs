//! End-to-end checks through the dispatch layer, using the worked
//! examples of each calculator.

use elec_core::calculations::ohms_law::OhmsLawMode;
use elec_core::calculations::{
    BandColor, BatteryInput, BillInput, MotorInput, OhmsLawInput, PumpInput, ResistorInput, SolarInput,
    Tolerance, VoltageDropInput, WiringInput,
};
use elec_core::forms::fields_for;
use elec_core::{evaluate, CalcError, CalculatorInput, CalculatorKind, FieldValues, HubSettings};

fn run(input: CalculatorInput) -> elec_core::CalculatorReport {
    evaluate(&input, &HubSettings::default()).unwrap()
}

fn assert_close(actual: Option<f64>, expected: f64, tol: f64) {
    let actual = actual.expect("field present");
    assert!((actual - expected).abs() < tol, "expected {expected}, got {actual}");
}

#[test]
fn resistor_zero_ohm_display() {
    let report = run(CalculatorInput::Resistor(ResistorInput {
        first_band: BandColor::Black,
        second_band: BandColor::Black,
        multiplier_band: BandColor::Brown,
        tolerance: Tolerance::Ten,
    }));
    assert_eq!(report.headline, "Resistance = 0.00 Ω ±10");
}

#[test]
fn resistor_white_multiplier_in_megaohms() {
    let report = run(CalculatorInput::Resistor(ResistorInput {
        first_band: BandColor::Red,
        second_band: BandColor::Red,
        multiplier_band: BandColor::White,
        tolerance: Tolerance::Five,
    }));
    assert!(report.headline.contains("MΩ"));
}

#[test]
fn ohms_law_examples() {
    let r1 = run(CalculatorInput::OhmsLaw(OhmsLawInput::dc(10.0, 2.0, 0.0, 0.0)));
    assert_close(r1.value("resistance_ohm"), 5.0, 1e-9);
    assert_close(r1.value("power_w"), 20.0, 1e-9);
    assert_eq!(r1.chart.as_ref().map(Vec::len), Some(10));

    let r2 = run(CalculatorInput::OhmsLaw(OhmsLawInput::dc(12.0, 0.0, 4.0, 0.0)));
    assert_close(r2.value("current_a"), 3.0, 1e-9);
    assert_close(r2.value("power_w"), 36.0, 1e-9);

    let r4 = run(CalculatorInput::OhmsLaw(OhmsLawInput::dc(10.0, 0.0, 0.0, 100.0)));
    assert_close(r4.value("current_a"), 10.0, 1e-9);
    assert_close(r4.value("resistance_ohm"), 1.0, 1e-9);

    let single = run(CalculatorInput::OhmsLaw(OhmsLawInput::ac(OhmsLawMode::AcSinglePhase, 230.0, 10.0, 0.8)));
    assert_close(single.value("power_w"), 1840.0, 1e-9);
    assert_close(single.value("resistance_ohm"), 23.0, 1e-9);

    let three = run(CalculatorInput::OhmsLaw(OhmsLawInput::ac(OhmsLawMode::AcThreePhase, 400.0, 10.0, 0.9)));
    assert_close(three.value("power_w"), 6235.38, 0.01);
    assert_close(three.value("resistance_ohm"), 40.0, 1e-9);
}

#[test]
fn ohms_law_all_zero_is_insufficient() {
    let err = evaluate(&CalculatorInput::OhmsLaw(OhmsLawInput::default()), &HubSettings::default()).unwrap_err();
    assert!(matches!(err, CalcError::InsufficientInput { .. }));
    assert!(err.to_string().starts_with("Insufficient or invalid input"));
}

#[test]
fn sizing_examples() {
    let bill = run(CalculatorInput::Bill(BillInput::default()));
    assert_close(bill.value("units_kwh"), 180.0, 1e-9);
    assert_close(bill.value("bill_amount"), 1260.0, 1e-9);

    let solar = run(CalculatorInput::Solar(SolarInput::default()));
    assert_eq!(solar.value("panels"), Some(7.0));
    assert_eq!(solar.value("batteries"), Some(5.0));

    let wiring = run(CalculatorInput::Wiring(WiringInput::default()));
    assert_close(wiring.value("current_a"), 4.3478, 1e-3);
    assert_eq!(wiring.value("mcb_rating_a"), Some(6.0));
    assert_eq!(wiring.value("wire_size_mm2"), Some(1.5));

    let drop = run(CalculatorInput::VoltageDrop(VoltageDropInput::default()));
    assert_close(drop.value("drop_v"), 0.5667, 1e-4);
    assert_close(drop.value("drop_percent"), 0.246, 1e-3);

    let pump = run(CalculatorInput::Pump(PumpInput { depth_ft: 80.0, flow_lpm: 50.0 }));
    assert_eq!(pump.value("required_hp"), Some(1.0));

    let battery = run(CalculatorInput::Battery(BatteryInput::default()));
    assert_close(battery.value("backup_hours"), 4.0, 1e-9);

    let motor = run(CalculatorInput::Motor(MotorInput::default()));
    assert_close(motor.value("rating_kva"), 6.25, 1e-9);
}

#[test]
fn battery_zero_load_is_rejected() {
    let input = CalculatorInput::Battery(BatteryInput { capacity_wh: 2000.0, load_w: 0.0 });
    let err = evaluate(&input, &HubSettings::default()).unwrap_err();
    assert_eq!(err.error_code(), "INVALID_INPUT");
}

#[test]
fn every_calculator_is_idempotent() {
    let inputs = [
        CalculatorInput::Resistor(ResistorInput::default()),
        CalculatorInput::OhmsLaw(OhmsLawInput::dc(0.0, 2.0, 0.0, 8.0)),
        CalculatorInput::Bill(BillInput::default()),
        CalculatorInput::Solar(SolarInput::default()),
        CalculatorInput::Pump(PumpInput::default()),
        CalculatorInput::Wiring(WiringInput::default()),
        CalculatorInput::VoltageDrop(VoltageDropInput::default()),
        CalculatorInput::Battery(BatteryInput::default()),
        CalculatorInput::Motor(MotorInput::default()),
    ];
    for input in &inputs {
        assert_eq!(run(input.clone()), run(input.clone()), "{:?}", input.kind());
    }
}

#[test]
fn form_defaults_match_input_defaults() {
    let values = |kind| FieldValues::defaults_for(kind);
    assert_eq!(BillInput::from_values(&values(CalculatorKind::Bill)).unwrap(), BillInput::default());
    assert_eq!(SolarInput::from_values(&values(CalculatorKind::Solar)).unwrap(), SolarInput::default());
    assert_eq!(PumpInput::from_values(&values(CalculatorKind::Pump)).unwrap(), PumpInput::default());
    assert_eq!(WiringInput::from_values(&values(CalculatorKind::Wiring)).unwrap(), WiringInput::default());
    assert_eq!(
        VoltageDropInput::from_values(&values(CalculatorKind::VoltageDrop)).unwrap(),
        VoltageDropInput::default()
    );
    assert_eq!(BatteryInput::from_values(&values(CalculatorKind::Battery)).unwrap(), BatteryInput::default());
    assert_eq!(MotorInput::from_values(&values(CalculatorKind::Motor)).unwrap(), MotorInput::default());
    assert_eq!(
        OhmsLawInput::from_values(OhmsLawMode::Dc, &values(CalculatorKind::OhmsLaw)),
        OhmsLawInput::default()
    );
}

#[test]
fn report_json_shape() {
    let report = run(CalculatorInput::Battery(BatteryInput::default()));
    let json: serde_json::Value = serde_json::to_value(&report).unwrap();
    assert_eq!(json["calculator"], "battery");
    assert_eq!(json["fields"][0]["quantity"]["unit"], "Hour");
    assert!(json["chart"].is_null());
}

#[test]
fn field_keys_are_unique() {
    for kind in CalculatorKind::ALL {
        let fields = fields_for(kind);
        for (i, a) in fields.iter().enumerate() {
            assert!(fields[i + 1..].iter().all(|b| b.key != a.key), "{kind:?} repeats {}", a.key);
        }
    }
}
