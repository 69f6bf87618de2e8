/// Tests for config module
#[cfg(test)]
mod tests {
    use crate::config::{ReportConfig, load_config};
    use std::io::Write;
    use std::path::PathBuf;

    const FULL: &str = r#"
root = "/src/cp2k"
arch = "Linux-x86-64-gfortran"
version = "sopt"
nproc = 4
nproc_mpi = 2
mpi_prefix = "mpirun -np 2"
refdir = "/qa/ref-abc"
tstdir = "/qa/tst-def"
select_dirs = ["QS", "FIST"]
select_paths_inp = ["QS/h2o.inp"]
faster_than = 10.0
"#;

    #[test]
    fn test_parse_full_config() {
        let config = ReportConfig::from_toml(FULL).expect("Should parse");
        assert_eq!(config.nproc, 4);
        assert_eq!(config.nproc_mpi, Some(2));
        assert_eq!(config.mpi_prefix.as_deref(), Some("mpirun -np 2"));
        assert_eq!(config.mpi_suffix, None);
        assert_eq!(config.select_dirs, vec!["QS", "FIST"]);
        assert_eq!(config.faster_than, Some(10.0));
        assert_eq!(config.slower_than, None);
        assert_eq!(config.tstdir, PathBuf::from("/qa/tst-def"));
    }

    #[test]
    fn test_defaults() {
        let config = ReportConfig::from_toml(
            "root = \"/r\"\narch = \"a\"\nversion = \"v\"\nrefdir = \"/ref\"\ntstdir = \"/tst\"\n",
        )
        .expect("Should parse");
        assert_eq!(config.nproc, 1);
        assert!(config.select_dirs.is_empty());
        assert!(config.mpi_prefix.is_none());
    }

    #[test]
    fn test_missing_required_field() {
        let err = ReportConfig::from_toml("root = \"/r\"\narch = \"a\"\n").unwrap_err();
        assert!(err.contains("version") || err.contains("missing"), "unexpected error: {}", err);
    }

    #[test]
    fn test_rejects_zero_nproc() {
        let mut config = ReportConfig::new("/r", "/ref", "/tst");
        config.nproc = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_negative_threshold() {
        let mut config = ReportConfig::new("/r", "/ref", "/tst");
        config.slower_than = Some(-1.0);
        let err = config.validate().unwrap_err();
        assert!(err.contains("slower_than"));
    }

    #[test]
    fn test_overrides() {
        let config = ReportConfig::new("/r", "/ref", "/tst").with_overrides(None, Some(PathBuf::from("/elsewhere")));
        assert_eq!(config.refdir, PathBuf::from("/ref"));
        assert_eq!(config.tstdir, PathBuf::from("/elsewhere"));
    }

    #[test]
    fn test_load_config_file() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(FULL.as_bytes()).expect("write config");
        let config = load_config(file.path()).expect("Should load");
        assert_eq!(config.arch, "Linux-x86-64-gfortran");

        let err = load_config(&PathBuf::from("/nonexistent/regtest.toml")).unwrap_err();
        assert!(err.contains("Failed to read config"));
    }
}
