// Config loading tests: baked-in defaults plus an optional file layer

use std::io::Write;

use speechpad::{Config, SpeechConfig};

#[test]
fn test_missing_file_falls_back_to_defaults() {
    let cfg = Config::load("definitely/not/a/real/config").unwrap();

    assert_eq!(cfg.service.name, "speechpad");
    assert_eq!(cfg.service.http.bind, "127.0.0.1");
    assert_eq!(cfg.service.http.port, 8080);
    assert_eq!(cfg.speech.locale, "en-US");
    assert!(cfg.speech.continuous);
    assert!(cfg.speech.interim_results);
}

#[test]
fn test_file_overrides_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("speechpad.toml");

    let mut file = std::fs::File::create(&path).unwrap();
    writeln!(
        file,
        r#"
[service.http]
port = 9000

[speech]
locale = "de-DE"
continuous = false
"#
    )
    .unwrap();

    let base = dir.path().join("speechpad");
    let cfg = Config::load(base.to_str().unwrap()).unwrap();

    assert_eq!(cfg.service.http.port, 9000);
    assert_eq!(cfg.speech.locale, "de-DE");
    assert!(!cfg.speech.continuous);

    // Untouched keys keep their defaults
    assert_eq!(cfg.service.name, "speechpad");
    assert_eq!(cfg.service.http.bind, "127.0.0.1");
    assert!(cfg.speech.interim_results);
}

#[test]
fn test_speech_config_default() {
    let speech = SpeechConfig::default();

    assert_eq!(speech.locale, "en-US");
    assert!(speech.continuous);
    assert!(speech.interim_results);
}
