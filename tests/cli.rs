use assert_cmd::Command;
use predicates::{prelude::PredicateBooleanExt, str::contains};
use tempfile::TempDir;

const BIN_NAME: &str = "gastos";

fn gastos(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin(BIN_NAME).expect("binary exists");
    cmd.env("GASTOS_DATA_DIR", dir.path()).env_remove("RUST_LOG");
    cmd
}

fn add(dir: &TempDir, amount: &str, category: &str, date: &str) -> String {
    let output = gastos(dir)
        .args(["add", amount, "-c", category, "--date", date, "-d", "test"])
        .output()
        .expect("add runs");
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).expect("utf-8 output");
    stdout
        .trim_start_matches("Added ")
        .split(':')
        .next()
        .expect("id in output")
        .to_string()
}

#[test]
fn cli_add_and_list() {
    let dir = TempDir::new().unwrap();
    let id = add(&dir, "1500", "comida", "2026-01-05");
    assert!(id.starts_with("exp-"));

    gastos(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(contains(id.as_str()).and(contains("COMIDA")).and(contains("$ 1.500")));
}

#[test]
fn cli_summary_for_range() {
    let dir = TempDir::new().unwrap();
    add(&dir, "1500", "comida", "2026-01-05");
    add(&dir, "300", "ocio", "2026-01-06");

    gastos(&dir)
        .args(["summary", "--from", "2026-01-05", "--to", "2026-01-05"])
        .assert()
        .success()
        .stdout(contains("Total: $ 1.500 (1 expense)").and(contains("LOLO")));

    gastos(&dir)
        .args(["summary", "--from", "2026-01-10", "--to", "2026-01-01"])
        .assert()
        .success()
        .stdout(contains("Total: $ 0 (0 expenses)"));
}

#[test]
fn cli_rejects_invalid_input() {
    let dir = TempDir::new().unwrap();

    gastos(&dir)
        .args(["add", "abc", "--date", "2026-01-05"])
        .assert()
        .failure();

    gastos(&dir)
        .args(["add", "0", "--date", "2026-01-05"])
        .assert()
        .failure();

    gastos(&dir)
        .args(["add", "10", "-c", "food", "--date", "2026-01-05"])
        .assert()
        .failure();

    gastos(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(contains("No expenses found."));
}

#[test]
fn cli_remove_expense() {
    let dir = TempDir::new().unwrap();
    let id = add(&dir, "42", "casa", "2026-01-02");

    gastos(&dir)
        .args(["remove", &id])
        .assert()
        .success()
        .stdout(contains("Removed"));

    gastos(&dir)
        .args(["remove", &id])
        .assert()
        .failure()
        .stderr(contains("Expense not found"));
}

#[test]
fn cli_clear_requires_confirmation() {
    let dir = TempDir::new().unwrap();
    add(&dir, "10", "casa", "2026-01-02");

    gastos(&dir)
        .arg("clear")
        .assert()
        .success()
        .stdout(contains("Re-run with --yes"));

    gastos(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(contains("CASA"));

    gastos(&dir)
        .args(["clear", "--yes"])
        .assert()
        .success()
        .stdout(contains("Cleared 1 expense."));

    gastos(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(contains("No expenses found."));
}

#[test]
fn cli_snapshot_round_trip() {
    let dir = TempDir::new().unwrap();
    add(&dir, "1500", "comida", "2026-01-05");
    add(&dir, "300", "ocio", "2026-01-06");

    gastos(&dir)
        .args(["snapshot", "save", "Enero 2026"])
        .assert()
        .success()
        .stdout(contains("Saved snapshot \"Enero 2026\" with 2 expenses."));

    gastos(&dir).args(["clear", "--yes"]).assert().success();

    gastos(&dir)
        .args(["snapshot", "list"])
        .assert()
        .success()
        .stdout(contains("Enero 2026").and(contains("$ 1.800")));

    gastos(&dir)
        .args(["snapshot", "load", "Enero 2026", "--yes"])
        .assert()
        .success()
        .stdout(contains("Loaded snapshot \"Enero 2026\" (2 expenses)."));

    gastos(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(contains("COMIDA").and(contains("OCIO")));
}

#[test]
fn cli_load_missing_snapshot_fails() {
    let dir = TempDir::new().unwrap();
    add(&dir, "10", "casa", "2026-01-02");

    gastos(&dir)
        .args(["snapshot", "load", "Nonexistent", "--yes"])
        .assert()
        .failure()
        .stderr(contains("Snapshot not found: Nonexistent"));

    gastos(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(contains("CASA"));
}

#[test]
fn cli_export_and_import() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("out");
    add(&dir, "1500", "comida", "2026-01-05");

    gastos(&dir)
        .args(["export", "csv", "-o"])
        .arg(&out)
        .assert()
        .success();
    let csv = std::fs::read_to_string(out.join("gastos_export.csv")).unwrap();
    assert_eq!(csv, "date,category,amount,desc\n\"2026-01-05\",\"COMIDA\",\"1500\",\"test\"");

    gastos(&dir)
        .args(["export", "json", "-o"])
        .arg(&out)
        .assert()
        .success();

    gastos(&dir)
        .args(["export", "summary", "--from", "2026-01-01", "--to", "2026-01-31", "-o"])
        .arg(&out)
        .assert()
        .success()
        .stdout(contains("resumen_gastos_2026-01-01_a_2026-01-31.xlsx"));
    assert!(out
        .join("resumen_gastos_2026-01-01_a_2026-01-31_Detalle.csv")
        .exists());

    gastos(&dir).args(["clear", "--yes"]).assert().success();

    gastos(&dir)
        .arg("import")
        .arg(out.join("gastos_export.json"))
        .arg("--yes")
        .assert()
        .success()
        .stdout(contains("Imported 1 expense"));

    gastos(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(contains("COMIDA"));
}

#[test]
fn cli_config_shows_paths() {
    let dir = TempDir::new().unwrap();

    gastos(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(contains("Data directory").and(contains("Default category: comida")));
}

#[test]
fn cli_show_expense() {
    let dir = TempDir::new().unwrap();
    let id = add(&dir, "1.500", "ocio", "2026-01-06");

    gastos(&dir)
        .args(["show", &id])
        .assert()
        .success()
        .stdout(contains("Amount:      $ 1.500").and(contains("Category:    OCIO")));

    gastos(&dir)
        .args(["show", "exp-zzzzzzzz"])
        .assert()
        .failure()
        .stderr(contains("Expense not found"));
}

#[test]
fn cli_config_persists_changes() {
    let dir = TempDir::new().unwrap();

    gastos(&dir)
        .args(["config", "--default-category", "ocio", "--currency", "ARS"])
        .assert()
        .success()
        .stdout(contains("Settings saved"));

    gastos(&dir)
        .args(["add", "20", "--date", "2026-01-02"])
        .assert()
        .success()
        .stdout(contains("OCIO").and(contains("ARS 20")));

    gastos(&dir)
        .args(["config", "--default-category", "viajes"])
        .assert()
        .failure();
}
