use crate::helpers::cli_runner::CliRunner;

#[test]
fn show_three_prints_popup_and_explanation() {
    let cli = CliRunner::new().expect("init");
    let res = cli.run(&["show", "3"]);
    assert_eq!(res.exit_code, 0, "stderr: {}", res.stderr);
    let lines: Vec<&str> = res.stdout.lines().collect();
    assert_eq!(lines[0], "3 × 9 =");
    assert_eq!(lines[1], "27");
    assert_eq!(
        lines[2],
        "Fingers 1-2 (2 fingers) represent the tens digit, and fingers 4-10 (7 fingers) represent the ones digit"
    );
    assert_eq!(
        lines[3],
        "2 fingers to the left (tens), 7 fingers to the right (ones)"
    );
    assert!(res.stdout.contains("[3]"));
}

#[test]
fn show_boundaries() {
    let cli = CliRunner::new().expect("init");
    let one = cli.run(&["show", "1"]);
    assert!(one.stdout.starts_with("1 × 9 =\n9\n"));
    assert!(one.stdout.contains("0 fingers to the left (tens), 9 fingers to the right (ones)"));

    let ten = cli.run(&["show", "10"]);
    assert!(ten.stdout.starts_with("10 × 9 =\n90\n"));
    assert!(ten.stdout.contains("9 fingers to the left (tens), 0 fingers to the right (ones)"));
}

#[test]
fn show_json_serializes_the_outcome() {
    let cli = CliRunner::new().expect("init");
    let res = cli.run(&["show", "7", "--json"]);
    assert_eq!(res.exit_code, 0);
    let v: serde_json::Value = serde_json::from_str(&res.stdout).expect("valid json");
    assert_eq!(v["result"]["multiplicand"], 9);
    assert_eq!(v["result"]["multiplier"], 7);
    assert_eq!(v["result"]["product"], 63);
    assert_eq!(v["finger"]["hand"], "right");
    assert_eq!(v["explanation"]["fingers_to_left"], 6);
    assert_eq!(v["explanation"]["fingers_to_right"], 3);
}

#[test]
fn out_of_range_and_fractional_fingers_are_rejected() {
    let cli = CliRunner::new().expect("init");
    for bad in ["0", "11", "-2", "2.5", "two", "1e1", "+3"] {
        let res = cli.run(&["show", bad]);
        assert_eq!(res.exit_code, 2, "{} should fail", bad);
        assert!(res.stdout.is_empty());
        assert!(
            res.stderr.contains("Error: Invalid finger number"),
            "stderr for {}: {}",
            bad,
            res.stderr
        );
    }
}

#[test]
fn integral_decimal_is_accepted() {
    let cli = CliRunner::new().expect("init");
    let res = cli.run(&["show", "4.0"]);
    assert_eq!(res.exit_code, 0);
    assert!(res.stdout.starts_with("4 × 9 =\n36\n"));
}

#[test]
fn missing_command_is_a_usage_error() {
    let cli = CliRunner::new().expect("init");
    let res = cli.run(&[]);
    assert_eq!(res.exit_code, 2);
    assert!(res.stderr.contains("Usage"));
}
