//! Tests for configuration module.

use super::*;

#[test_log::test]
fn test_vcard_config_defaults() {
    tracing::debug!("Testing vCard config defaults");

    let config = VcardConfig::default();

    assert!(config.emit_role);
    assert!(config.uppercase_types);
    assert!(config.photo_dir.is_none());
}

#[test]
fn test_server_bind_addr() {
    let config = ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 8699,
    };

    assert_eq!(config.bind_addr(), "127.0.0.1:8699");
}

#[test]
fn test_settings_structure() {
    let settings = Settings {
        server: ServerConfig {
            host: "0.0.0.0".to_string(),
            port: 9000,
        },
        logging: LoggingConfig {
            level: "info".to_string(),
        },
        vcard: VcardConfig {
            emit_role: false,
            uppercase_types: true,
            photo_dir: Some("/srv/photos".to_string()),
        },
    };

    let cloned = settings.clone();
    assert_eq!(cloned.server.port, 9000);
    assert_eq!(cloned.vcard.photo_dir.as_deref(), Some("/srv/photos"));
    assert!(!cloned.vcard.emit_role);
}

#[test]
fn test_settings_debug() {
    let settings = Settings {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 8699,
        },
        logging: LoggingConfig {
            level: "debug".to_string(),
        },
        vcard: VcardConfig::default(),
    };

    let debug_str = format!("{settings:?}");
    assert!(debug_str.contains("Settings"));
    assert!(debug_str.contains("server"));
    assert!(debug_str.contains("vcard"));
}

#[test]
fn test_load_uses_defaults() {
    let settings = Settings::load().expect("defaults should deserialize");

    assert!(!settings.server.host.is_empty());
    assert!(!settings.logging.level.is_empty());
}
