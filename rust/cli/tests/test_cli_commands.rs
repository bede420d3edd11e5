use serial_test::serial;

fn run_cli(args: &[&str]) -> (i32, String, String) {
    let mut out = Vec::new();
    let mut err = Vec::new();
    let code = twentyone_cli::run(args.to_vec(), &mut out, &mut err);
    (
        code,
        String::from_utf8(out).unwrap(),
        String::from_utf8(err).unwrap(),
    )
}

#[test]
fn deal_with_seed_exits_zero_and_prints_table() {
    let (code, out, _err) = run_cli(&["twentyone", "deal", "--seed", "42"]);
    assert_eq!(code, 0);
    assert!(out.contains("Player:"));
    assert!(out.contains("House:"));
    assert!(out.contains("Deck remaining: 48"));
}

#[test]
fn deal_is_deterministic_for_a_seed() {
    let (_, a, _) = run_cli(&["twentyone", "deal", "--seed", "7"]);
    let (_, b, _) = run_cli(&["twentyone", "deal", "--seed", "7"]);
    assert_eq!(a, b);
}

#[test]
#[serial]
fn cfg_prints_resolved_configuration_as_json() {
    let (code, out, _err) = run_cli(&["twentyone", "cfg"]);
    assert_eq!(code, 0);
    let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert!(parsed.get("pacing_ms").is_some());
}

#[test]
fn unknown_command_exits_two_with_usage() {
    let (code, _out, err) = run_cli(&["twentyone", "poker"]);
    assert_eq!(code, 2);
    assert!(err.contains("Usage: twentyone <command>"));
    assert!(err.contains("play"));
}

#[test]
fn help_prints_to_stdout_and_exits_zero() {
    let (code, out, _err) = run_cli(&["twentyone", "--help"]);
    assert_eq!(code, 0);
    assert!(out.contains("twentyone"));
    assert!(out.contains("play"));
}

#[test]
fn missing_command_exits_two() {
    let (code, _out, _err) = run_cli(&["twentyone"]);
    assert_eq!(code, 2);
}
