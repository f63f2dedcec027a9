#[cfg(test)]
mod tests {
    use super::super::*;

    #[test]
    fn test_defaults_when_sections_missing() {
        let config = Config::from_toml_str("").unwrap();
        assert_eq!(config.database.path, "./data");
        assert_eq!(config.database.collection, "posts");
        assert_eq!(config.ingestion.input_dir, "./corpus");
        assert_eq!(config.ingestion.record_types, vec![RecordType::Neel, RecordType::Curie]);
    }

    #[test]
    fn test_parse_full_config() {
        let config = Config::from_toml_str(
            r#"
            [database]
            path = "/var/lib/magdb"
            collection = "magnetism"

            [ingestion]
            input_dir = "/srv/articles"
            record_types = ["curie"]
            "#,
        )
        .unwrap();
        assert_eq!(config.database.path, "/var/lib/magdb");
        assert_eq!(config.database.collection, "magnetism");
        assert_eq!(config.ingestion.record_types, vec![RecordType::Curie]);
    }

    #[test]
    fn test_empty_record_types_rejected() {
        let err = Config::from_toml_str("[ingestion]\nrecord_types = []\n").unwrap_err();
        assert!(matches!(err, MagdbError::Config(_)));
    }

    #[test]
    fn test_unknown_record_type_rejected() {
        let err = Config::from_toml_str("[ingestion]\nrecord_types = [\"weiss\"]\n").unwrap_err();
        assert!(matches!(err, MagdbError::ConfigParse(_)));
    }

    #[test]
    fn test_explicit_missing_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        let err = Config::load(Some(missing.to_str().unwrap())).unwrap_err();
        assert!(matches!(err, MagdbError::Config(_)));
    }

    #[test]
    fn test_load_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("magdb.toml");
        std::fs::write(&path, "[database]\ncollection = \"test_posts\"\n").unwrap();
        let config = Config::load(Some(path.to_str().unwrap())).unwrap();
        assert_eq!(config.database.collection, "test_posts");
        assert_eq!(config.database.path, "./data");
    }
}
