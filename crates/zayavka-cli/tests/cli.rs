use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::{tempdir, TempDir};

const APPLICATION: &str = concat!(
    r"Заявка ИГО 05.03.24\n",
    r"1. Марка цемента: ЦЕМ I 42,5Н\n",
    r"2. Кол-во: 70 т\n",
    r"4. Покупатель: ООО СтройКом\n",
    r"5. Грузополучатель: АО Бетон\n",
);

fn setup() -> TempDir {
    let temp = tempdir().unwrap();
    let dictionary = temp.path().join("dictionary");
    fs::create_dir_all(&dictionary).unwrap();
    fs::write(dictionary.join("managers.csv"), "login,manager\nИГО,Игорь Хабаров\n").unwrap();
    fs::write(
        dictionary.join("unload_addresses.csv"),
        "name,place,address\nБетон,Тула,\"Тула, Заводской пр. 5\"\n",
    )
    .unwrap();
    temp
}

#[allow(deprecated)]
fn zayavka(root: &Path) -> Command {
    let mut cmd = Command::cargo_bin("zayavka").expect("binary");
    cmd.current_dir(root)
        .env("XDG_CONFIG_HOME", root.join("config"))
        .env("HOME", root);
    cmd
}

fn register_rows(root: &Path) -> Vec<String> {
    fs::read_to_string(root.join("appl_register.csv"))
        .unwrap()
        .lines()
        .skip(1)
        .map(str::to_string)
        .collect()
}

#[test]
fn process_appends_replicated_rows() {
    let temp = setup();
    let root = temp.path();

    zayavka(root)
        .args(["process", APPLICATION])
        .assert()
        .success()
        .stdout(predicate::str::contains("Игорь Хабаров"))
        .stdout(predicate::str::contains("Appended 2 row(s)"));

    let rows = register_rows(root);
    assert_eq!(rows.len(), 2);
    assert!(rows[0].starts_with("1,Игорь Хабаров,05.03.2024,доставка,\"ЦЕМ I 42,5Н\""));
    assert!(rows[1].starts_with("2,"));

    let errors = fs::read_to_string(root.join("appl_register_errors.csv")).unwrap();
    assert_eq!(errors.trim(), "Ошибка,Заявка");
}

#[test]
fn process_numbers_after_existing_rows() {
    let temp = setup();
    let root = temp.path();

    zayavka(root).args(["process", APPLICATION]).assert().success();
    zayavka(root)
        .args(["process", r"Заявка ИГО самовывоз\n"])
        .assert()
        .success();

    let rows = register_rows(root);
    assert_eq!(rows.len(), 3);
    assert!(rows[2].starts_with("3,Игорь Хабаров,,самовывоз"));
}

#[test]
fn dry_run_does_not_write_register() {
    let temp = setup();
    let root = temp.path();

    zayavka(root)
        .args(["process", "--dry-run", "--format", "json", APPLICATION])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"Менеджер\": \"Игорь Хабаров\""))
        .stdout(predicate::str::contains("Dry run"));

    assert!(!root.join("appl_register.csv").exists());
}

#[test]
fn process_reads_file_with_real_line_breaks() {
    let temp = setup();
    let root = temp.path();
    let input = root.join("application.txt");
    fs::write(
        &input,
        "Заявка ИГО\n2. Кол-во: 90 куб\n4. Покупатель: ООО СтройКом\n",
    )
    .unwrap();

    zayavka(root)
        .args(["process", "--dry-run", "--format", "csv", "--file"])
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("ООО СтройКом"))
        .stdout(predicate::str::contains(",40,90,"));
}

#[test]
fn process_logs_extractor_faults() {
    let temp = setup();
    let root = temp.path();
    fs::write(
        root.join("dictionary/managers.csv"),
        "login,manager\n,Никто\n",
    )
    .unwrap();

    zayavka(root)
        .args(["process", APPLICATION])
        .assert()
        .success()
        .stderr(predicate::str::contains("1 extraction error(s)"));

    let errors = fs::read_to_string(root.join("appl_register_errors.csv")).unwrap();
    assert!(errors.contains("error in manager"));
    assert_eq!(register_rows(root).len(), 2);
}

#[test]
fn missing_input_file_fails() {
    let temp = setup();

    zayavka(temp.path())
        .args(["process", "--file", "absent.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Input file not found"));
}

#[test]
fn config_set_then_get() {
    let temp = setup();
    let root = temp.path();

    zayavka(root)
        .args(["config", "set", "pipeline.ton_capacity", "30"])
        .assert()
        .success();

    zayavka(root)
        .args(["config", "get", "pipeline.ton_capacity"])
        .assert()
        .success()
        .stdout(predicate::str::diff("30\n"));

    zayavka(root)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("zayavka/config.json"))
        .stdout(predicate::str::contains("exists"));
}

#[test]
fn config_rejects_unknown_key() {
    let temp = setup();

    zayavka(temp.path())
        .args(["config", "set", "pipeline.truck_size", "30"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration key not found"));
}
