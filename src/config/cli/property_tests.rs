//! Property-based tests for CLI argument parsing

use super::*;
use proptest::prelude::*;

// Strategy for CSV paths
fn data_path_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z][a-zA-Z0-9_/-]{0,20}\\.csv"
}

// Strategy for config paths
fn config_path_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z][a-zA-Z0-9_-]{0,20}\\.(yaml|yml)"
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_score_command_parses(data in data_path_strategy()) {
        let cli = parse_args(["rsrc", "score", &data]);
        prop_assert!(cli.is_ok());
        match cli.unwrap().command {
            Command::Score(args) => {
                prop_assert_eq!(args.data.to_str().unwrap(), &data);
            }
            _ => prop_assert!(false, "Expected Score command"),
        }
    }

    #[test]
    fn prop_score_config_parses(data in data_path_strategy(), config in config_path_strategy()) {
        let cli = parse_args(["rsrc", "score", &data, "--config", &config]).unwrap();
        match cli.command {
            Command::Score(args) => {
                let config_path = args.config.unwrap();
                prop_assert_eq!(config_path.to_str().unwrap(), &config);
            }
            _ => prop_assert!(false, "Expected Score command"),
        }
    }

    #[test]
    fn prop_current_year_roundtrips(year in 1950i32..2200) {
        let year_str = year.to_string();
        let cli = parse_args(["rsrc", "score", "--current-year", &year_str]).unwrap();
        match cli.command {
            Command::Score(args) => prop_assert_eq!(args.current_year, Some(year)),
            _ => prop_assert!(false, "Expected Score command"),
        }
    }

    #[test]
    fn prop_top_roundtrips(top in 0usize..10_000) {
        let top_str = top.to_string();
        let cli = parse_args(["rsrc", "score", "--top", &top_str]).unwrap();
        match cli.command {
            Command::Score(args) => prop_assert_eq!(args.top, Some(top)),
            _ => prop_assert!(false, "Expected Score command"),
        }
    }

    #[test]
    fn prop_power_interval_parses(interval in 0.01f64..60.0, duration in 0.0f64..3600.0) {
        let interval_str = interval.to_string();
        let duration_str = duration.to_string();
        let cli = parse_args(["rsrc", "power", "--interval", &interval_str, "--duration", &duration_str]).unwrap();
        match cli.command {
            Command::Power(args) => {
                prop_assert!((args.interval - interval).abs() < 1e-9);
                prop_assert!((args.duration - duration).abs() < 1e-9);
            }
            _ => prop_assert!(false, "Expected Power command"),
        }
    }

    #[test]
    fn prop_unknown_subcommand_rejected(name in "[a-z]{3,10}") {
        prop_assume!(!["score", "power", "config", "help"].contains(&name.as_str()));
        prop_assert!(parse_args(["rsrc", &name]).is_err());
    }
}
