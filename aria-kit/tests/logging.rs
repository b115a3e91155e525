use aria_kit::LoggerError;
use aria_kit::logging::init_file_logger;
use log::LevelFilter;

#[test]
fn test_file_logger_installs_once() {
    let path = std::env::temp_dir().join(format!("aria-kit-{}.log", std::process::id()));

    init_file_logger(&path, LevelFilter::Debug).unwrap();
    log::debug!("[test] logger ready");

    let second = path.with_extension("second.log");
    let err = init_file_logger(&second, LevelFilter::Debug).unwrap_err();
    assert!(matches!(err, LoggerError::SetLogger(_)));

    let contents = std::fs::read_to_string(&path).unwrap();
    assert!(contents.contains("logger ready"));
    let _ = std::fs::remove_file(&path);
    let _ = std::fs::remove_file(&second);
}

#[test]
fn test_unwritable_path_is_io_error() {
    let err = init_file_logger("/nonexistent-dir/aria.log", LevelFilter::Info).unwrap_err();
    assert!(matches!(err, LoggerError::Io(_)));
}
