use std::env;

use serial_test::serial;
use tinge::{ColorChoice, Signals};

fn clear_env() {
    env::remove_var("NO_COLOR");
    env::remove_var("FORCE_COLOR");
}

#[test]
#[serial]
fn test_disable_and_reenable() {
    tinge::set_enabled(false);
    let text = tinge::red().render(&["This should not be colored"], &[]);
    assert_eq!(text, "This should not be colored");

    tinge::set_enabled(true);
    let text = tinge::green().render(&["Colored again"], &[]);
    assert_eq!(text, "\x1b[32mColored again\x1b[0m");
}

#[test]
#[serial]
fn test_no_color_wins_over_force_color() {
    clear_env();
    env::set_var("NO_COLOR", "anything");
    env::set_var("FORCE_COLOR", "1");

    assert!(!tinge::probe());
    tinge::set_enabled(None);
    assert!(!tinge::is_enabled());

    clear_env();
    tinge::set_enabled(true);
}

#[test]
#[serial]
fn test_empty_no_color_does_not_disable() {
    clear_env();
    env::set_var("NO_COLOR", "");
    env::set_var("FORCE_COLOR", "1");

    assert!(tinge::probe());

    clear_env();
}

#[test]
#[serial]
fn test_force_color_values() {
    clear_env();
    for value in ["1", "true", "2", "yes"] {
        env::set_var("FORCE_COLOR", value);
        assert!(tinge::probe(), "FORCE_COLOR={value}");
    }
    clear_env();
}

#[test]
fn test_force_color_off_even_on_terminal() {
    for value in ["0", "false"] {
        let signals = Signals {
            no_color: None,
            force_color: Some(value.to_string()),
            is_terminal: true,
        };
        assert!(!signals.color_enabled(), "FORCE_COLOR={value}");

        let piped = Signals {
            is_terminal: false,
            ..signals
        };
        assert!(!piped.color_enabled(), "FORCE_COLOR={value}");
    }
}

#[test]
#[serial]
fn test_color_choice_from_config() {
    #[derive(serde::Deserialize)]
    struct Config {
        color: ColorChoice,
    }

    let config: Config = serde_json::from_str(r#"{ "color": "never" }"#).unwrap();
    tinge::set_color_choice(config.color);
    assert!(!tinge::is_enabled());
    assert_eq!(tinge::bold().render(&["x"], &[]), "x");

    tinge::set_color_choice(ColorChoice::Always);
    assert!(tinge::is_enabled());
}
