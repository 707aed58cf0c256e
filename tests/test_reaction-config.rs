use reaction_config::{parse_string, EventPolicy, Settings};

#[test]
fn empty_input_keeps_defaults() {
    let settings = parse_string(String::new()).unwrap();
    assert_eq!(settings, Settings::default());
}


#[test]
fn defaults_match_the_stock_sandbox() {
    let settings = Settings::default();
    assert_eq!(settings.window.width, 800);
    assert_eq!(settings.window.height, 600);
    assert_eq!(settings.gravity, (0.0, -10.0));
    assert_eq!(settings.events_per_frame, EventPolicy::Single);
    assert!(!settings.continuous_thrust);
    assert_eq!(settings.pixels_per_unit, 20.0);
}


#[test]
fn parses_every_section() {
    let settings = parse_string(String::from("
    window:
        width: 1280
        height: 720

    physics:
        gravity: [0.0, -1.0]

    input:
        events_per_frame: drain
        continuous_thrust: true

    render:
        pixels_per_unit: 32.0
    ")).unwrap();

    assert_eq!(settings.window.width, 1280);
    assert_eq!(settings.window.height, 720);
    assert_eq!(settings.gravity, (0.0, -1.0));
    assert_eq!(settings.events_per_frame, EventPolicy::Drain);
    assert!(settings.continuous_thrust);
    assert_eq!(settings.pixels_per_unit, 32.0);
}


#[test]
fn partial_config_keeps_remaining_defaults() {
    let settings = parse_string(String::from("
    input:
        events_per_frame: drain
    ")).unwrap();

    assert_eq!(settings.events_per_frame, EventPolicy::Drain);
    assert_eq!(settings.window.width, 800);
    assert_eq!(settings.gravity, (0.0, -10.0));
    assert!(!settings.continuous_thrust);
}


#[test]
fn gravity_must_be_two_numbers() {
    let res = parse_string(String::from("
    physics:
        gravity: [0.0]
    "));
    let err = res.unwrap_err();
    assert!(
        format!("{}", err).contains("The type of the field"),
        "unexpected error: {}",
        err
    );
}


#[test]
fn events_per_frame_rejects_unknown_policies() {
    let res = parse_string(String::from("
    input:
        events_per_frame: sometimes
    "));
    assert!(res.is_err());
}


#[test]
fn unknown_fields_are_rejected() {
    let res = parse_string(String::from("
    window:
        depth: 3
    "));
    let err = res.unwrap_err();
    assert!(
        format!("{}", err).contains("is not a recognized setting"),
        "unexpected error: {}",
        err
    );
}


#[test]
fn unknown_sections_are_rejected() {
    let res = parse_string(String::from("
    audio:
        volume: 11
    "));
    assert!(res.is_err());
}


#[test]
fn malformed_yaml_is_an_error() {
    let res = parse_string(String::from("window: ["));
    assert!(res.is_err());
}
