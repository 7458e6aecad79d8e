use match_visualizer::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::{tempdir, TempDir};

struct Layout {
    _root: TempDir,
    equi: PathBuf,
    model: PathBuf,
}

fn layout() -> Layout {
    let root = tempdir().unwrap();
    let equi = root.path().join("equi");
    let model = root.path().join("model");
    fs::create_dir_all(&equi).unwrap();
    fs::create_dir_all(&model).unwrap();
    Layout { _root: root, equi, model }
}

fn config_text(equi: &Path, model: &Path, extra: &str) -> String {
    format!(
        "# visualization settings\nPATH_TO_EQUI = {}\nPATH_TO_MODEL = {}\n{}",
        equi.display(),
        model.display(),
        extra
    )
}

#[test]
fn test_pair_mode() {
    let l = layout();
    let settings = ConfigSettings::parse(&config_text(&l.equi, &l.model, "FILE_MATCHES2 = imgA_imgB\n")).unwrap();
    let config = settings.into_config().unwrap();

    assert_eq!(config.mode, MatchMode::Pairs("imgA_imgB".to_string()));
    assert_eq!(config.match_file_path(), l.model.join("output").join("2_matches").join("imgA_imgB"));
    assert_eq!(
        config.image_paths().unwrap(),
        vec![l.equi.join("imgA.bmp"), l.equi.join("imgB.bmp")]
    );
}

#[test]
fn test_keys_are_case_insensitive_and_values_trimmed() {
    let l = layout();
    let text = format!(
        "\t path_to_equi\t=\t{} \n  Path_To_Model = {}\n\n   # FILE_MATCHES2 = ignored_pair\nfile_matches3 =  a_b_c  \n",
        l.equi.display(),
        l.model.display()
    );
    let config = ConfigSettings::parse(&text).unwrap().into_config().unwrap();

    assert_eq!(config.path_to_equi, l.equi);
    assert_eq!(config.path_to_model, l.model);
    assert_eq!(config.mode, MatchMode::Triplets("a_b_c".to_string()));
    assert_eq!(config.mode.arity(), Arity::Triplet);
}

#[test]
fn test_unknown_keys_are_ignored() {
    let l = layout();
    let text = config_text(&l.equi, &l.model, "SOMETHING_ELSE = 3\njust words\nFILE_MATCHES2 = a_b\n");
    assert!(ConfigSettings::parse(&text).unwrap().into_config().is_ok());
}

#[test]
fn test_missing_model_keeps_default_but_config_is_incomplete() {
    let l = layout();
    let text = format!("PATH_TO_EQUI = {}\n", l.equi.display());

    let settings = ConfigSettings::parse(&text).unwrap();
    assert_eq!(settings.path_to_equi, l.equi);
    assert_eq!(settings.path_to_model, PathBuf::from("./"));
    assert!(settings.file_2_matches.is_none());
    assert!(matches!(settings.into_config(), Err(ConfigError::NoMatchFile)));
}

#[test]
fn test_empty_value_is_an_error() {
    let l = layout();
    let text = config_text(&l.equi, &l.model, "FILE_MATCHES2 =   \n");
    assert!(matches!(
        ConfigSettings::parse(&text),
        Err(ConfigError::EmptyValue("FILE_MATCHES2"))
    ));

    assert!(matches!(
        ConfigSettings::parse("PATH_TO_MODEL =\n"),
        Err(ConfigError::EmptyValue("PATH_TO_MODEL"))
    ));
}

#[test]
fn test_nonexistent_directory() {
    let l = layout();
    let missing = l.equi.join("does-not-exist");
    let text = format!("PATH_TO_EQUI = {}\n", missing.display());

    match ConfigSettings::parse(&text) {
        Err(ConfigError::PathNotFound { key, path }) => {
            assert_eq!(key, "PATH_TO_EQUI");
            assert_eq!(path, missing);
        }
        other => panic!("expected missing path error, got {other:?}"),
    }
}

#[test]
fn test_errors_follow_file_order() {
    let l = layout();
    // the empty match setting comes before the bad directory
    let text = format!(
        "FILE_MATCHES3 =\nPATH_TO_EQUI = {}\n",
        l.equi.join("missing").display()
    );
    assert!(matches!(
        ConfigSettings::parse(&text),
        Err(ConfigError::EmptyValue("FILE_MATCHES3"))
    ));
}

#[test]
fn test_both_match_files_conflict() {
    let l = layout();
    let text = config_text(&l.equi, &l.model, "FILE_MATCHES2 = a_b\nFILE_MATCHES3 = a_b_c\n");
    assert!(matches!(
        ConfigSettings::parse(&text).unwrap().into_config(),
        Err(ConfigError::ConflictingMatchFiles)
    ));
}

#[test]
fn test_load_from_file() {
    let l = layout();
    let cfg_path = l.model.join("config.txt");
    fs::write(&cfg_path, config_text(&l.equi, &l.model, "FILE_MATCHES2 = left_right\r\n")).unwrap();

    let config = Config::load_from_file(&cfg_path).unwrap();
    assert_eq!(config.mode.file_name(), "left_right");
}

#[test]
fn test_missing_config_file() {
    let l = layout();
    let err = Config::load_from_file(l.model.join("absent.txt")).unwrap_err();
    assert!(matches!(err, ConfigError::Open { .. }));
    assert!(err.to_string().contains("absent.txt"));
}

#[test]
fn test_underscore_free_names_required() {
    let l = layout();
    let text = config_text(&l.equi, &l.model, "FILE_MATCHES3 = onlyone_two\n");
    let config = ConfigSettings::parse(&text).unwrap().into_config().unwrap();
    assert!(matches!(
        config.image_paths(),
        Err(ConfigError::InvalidMatchName { expected: 3, .. })
    ));
}
