#[cfg(test)]
mod tests {
    use crate::config::*;
    use crate::error::CliError;
    use serial_test::serial;
    use std::fs;
    use tempfile::TempDir;

    fn clear_env() {
        unsafe {
            std::env::remove_var("XCODE_PAGES_DOXYGEN");
            std::env::remove_var("XCODE_PAGES_HAVE_DOT");
        }
    }

    #[test]
    #[serial]
    fn test_defaults_without_file() {
        clear_env();
        let temp = TempDir::new().unwrap();
        let settings = load(temp.path(), None).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    #[serial]
    fn test_file_overrides_defaults() {
        clear_env();
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join(SETTINGS_FILE),
            r#"
doxygen = "/opt/homebrew/bin/doxygen"
number_separator = "&nbsp;"
have_dot = true
"#,
        )
        .unwrap();

        let settings = load(temp.path(), None).unwrap();
        assert_eq!(settings.doxygen, "/opt/homebrew/bin/doxygen");
        assert_eq!(settings.number_separator, "&nbsp;");
        assert_eq!(settings.have_dot, Some(true));
        assert_eq!(settings.make, "make");
    }

    #[test]
    #[serial]
    fn test_env_overrides_file() {
        clear_env();
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(SETTINGS_FILE), "doxygen = \"from-file\"\n").unwrap();

        unsafe {
            std::env::set_var("XCODE_PAGES_DOXYGEN", "from-env");
            std::env::set_var("XCODE_PAGES_HAVE_DOT", "false");
        }
        let settings = load(temp.path(), None);
        clear_env();

        let settings = settings.unwrap();
        assert_eq!(settings.doxygen, "from-env");
        assert_eq!(settings.have_dot, Some(false));
    }

    #[test]
    #[serial]
    fn test_explicit_file_must_exist() {
        clear_env();
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("custom.toml");

        let err = load(temp.path(), Some(&missing)).unwrap_err();
        assert!(matches!(err, CliError::Config(ConfigError::NotFound(_))));
    }

    #[test]
    #[serial]
    fn test_unknown_key_is_rejected() {
        clear_env();
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(SETTINGS_FILE), "doxygne = \"typo\"\n").unwrap();

        let err = load(temp.path(), None).unwrap_err();
        assert!(matches!(err, CliError::Config(ConfigError::Invalid(_))));
    }
}
