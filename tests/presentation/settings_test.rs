use vocsplit::presentation::{ConverterProvider, Settings};

#[test]
fn given_no_sources_when_defaulting_then_service_settings_are_usable() {
    let settings = Settings::default();

    assert_eq!(settings.server.port, 5000);
    assert_eq!(settings.storage.artifact_dir, "cloned_audio_files");
    assert!(settings.storage.retention_secs.is_none());
    assert_eq!(settings.segmentation.resolution_ms, 1);
    assert_eq!(settings.conversion.provider, ConverterProvider::Command);
    assert_eq!(settings.limits.max_upload_bytes(), 512 * 1024 * 1024);
}

#[test]
fn given_default_command_args_when_inspecting_then_every_file_placeholder_is_present() {
    let args = Settings::default().conversion.args.join(" ");

    for placeholder in ["{input}", "{output}", "{model}", "{index}", "{index_rate}"] {
        assert!(args.contains(placeholder), "missing {}", placeholder);
    }
}

#[test]
fn given_partial_toml_when_deserializing_then_missing_sections_use_defaults() {
    let settings: Settings = config::Config::builder()
        .add_source(config::File::from_str(
            r#"
            [storage]
            retention_secs = 86400

            [conversion]
            provider = "passthrough"
            "#,
            config::FileFormat::Toml,
        ))
        .build()
        .unwrap()
        .try_deserialize()
        .unwrap();

    assert_eq!(settings.storage.retention_secs, Some(86_400));
    assert_eq!(settings.storage.sweep_interval_secs, 3600);
    assert_eq!(settings.conversion.provider, ConverterProvider::Passthrough);
    assert_eq!(settings.conversion.program, "python");
    assert_eq!(settings.server.host, "0.0.0.0");
}
