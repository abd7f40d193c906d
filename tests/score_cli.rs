// End-to-end scoring scenarios driven through the binary: template
// generation, both questionnaire tracks, config-driven strictness and
// weightage, and portfolio sweeps.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn esgrisk() -> Command {
    Command::cargo_bin("esgrisk").expect("binary should exist")
}

fn write_workbook(dir: &Path, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).expect("workbook should write");
    path
}

#[test]
fn all_no_pre_screening_answers_score_zero_and_go() {
    let dir = TempDir::new().expect("temp dir should be created");
    let mut content = String::from("company = \"Clean Co\"\ntrack = \"pre-screening\"\n");
    for id in ["E.1", "E.2", "E.3", "E.4", "E.5", "E.6", "E.7", "E.8"] {
        content.push_str(&format!("\n[[responses]]\nquestion = \"{id}\"\nlabel = \"No\"\n"));
    }
    let path = write_workbook(dir.path(), "clean.toml", &content);

    esgrisk()
        .arg("score")
        .arg(&path)
        .assert()
        .code(0)
        .stdout(predicate::str::contains("Total score: 0"))
        .stdout(predicate::str::contains("Decision: Go"))
        .stdout(predicate::str::contains("Proceed with investment process"));
}

#[test]
fn any_yes_on_the_exclusion_screen_is_no_go() {
    let dir = TempDir::new().expect("temp dir should be created");
    let path = write_workbook(
        dir.path(),
        "exposed.toml",
        r#"
company = "Exposed Co"
track = "pre-screening"

[[responses]]
question = "E.2"
label = "Yes"
remarks = "defence subsidiary"
"#,
    );

    esgrisk()
        .arg("score")
        .arg(&path)
        .assert()
        .code(2)
        .stdout(predicate::str::contains("Decision: No-Go"))
        .stdout(predicate::str::contains(
            "Decline the investment opportunity due to high ESG risks",
        ));
}

#[test]
fn weight_overrides_can_land_in_the_caution_band() {
    let dir = TempDir::new().expect("temp dir should be created");
    fs::write(
        dir.path().join("esg.toml"),
        r#"
[screening.weights]
"E.1" = 0.8
"#,
    )
    .expect("config should write");
    let path = write_workbook(
        dir.path(),
        "tobacco.toml",
        r#"
track = "pre-screening"

[[responses]]
question = "E.1"
label = "Yes"
"#,
    );

    esgrisk()
        .arg("score")
        .arg(&path)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Total score: 0.8"))
        .stdout(predicate::str::contains(
            "Decision: Caution - Detailed ESDD Required",
        ));
}

#[test]
fn generated_pre_screening_template_defaults_to_full_exposure() {
    let dir = TempDir::new().expect("temp dir should be created");
    let path = dir.path().join("screen.toml");

    esgrisk()
        .args(["template", path.to_str().expect("utf-8 path")])
        .args(["--track", "pre-screening"])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("template file:"));

    // The default label is the first resolved option, which on the
    // exclusion screen is Yes; an unedited template must gate No-Go.
    esgrisk().arg("score").arg(&path).assert().code(2);
}

#[test]
fn high_risk_categorization_workbook_lands_in_category_a() {
    let dir = TempDir::new().expect("temp dir should be created");
    let path = write_workbook(
        dir.path(),
        "heavy.toml",
        r#"
company = "Heavy Industries"
track = "categorization"

[[responses]]
section = "social"
question = "3.4"
label = "Past media stories"

[[responses]]
section = "social"
question = "3.6"
label = "Fatality in last three years"

[[responses]]
section = "environmental"
question = "4.2"
label = "Expired or never obtained"

[[responses]]
section = "environmental"
question = "4.4"
label = "Discharged untreated"

[[responses]]
section = "environmental"
question = "4.14"
label = "Required but not obtained"

[[responses]]
section = "impact"
question = "5.6"
label = "Known adverse use"
"#,
    );

    esgrisk()
        .arg("score")
        .arg(&path)
        .assert()
        .code(2)
        .stdout(predicate::str::contains("Total score: 30"))
        .stdout(predicate::str::contains("Category: A - High Risk"));
}

#[test]
fn favorable_answers_pull_the_total_below_the_medium_band() {
    let dir = TempDir::new().expect("temp dir should be created");
    let path = write_workbook(
        dir.path(),
        "mixed.toml",
        r#"
track = "categorization"

[[responses]]
section = "social"
question = "3.4"
label = "Past media stories"

[[responses]]
section = "social"
question = "3.5"
label = "Suspected incidents"

[[responses]]
section = "environmental"
question = "4.6"
label = "Open dumping or burning"

[[responses]]
section = "environmental"
question = "4.13"
label = "Yes"

[[responses]]
section = "esg"
question = "2.1"
label = "Yes"
"#,
    );

    // 5 + 5 + 5 - 1 - 1 = 13 stays below the medium band.
    esgrisk()
        .arg("score")
        .arg(&path)
        .assert()
        .code(0)
        .stdout(predicate::str::contains("Total score: 13"))
        .stdout(predicate::str::contains("Category: C - Low Risk"));
}

#[test]
fn json_report_is_machine_readable() {
    let dir = TempDir::new().expect("temp dir should be created");
    let path = write_workbook(
        dir.path(),
        "acme.toml",
        r#"
company = "Acme"
track = "categorization"

[[responses]]
section = "policy"
question = "1.1"
label = "Yes"
"#,
    );

    esgrisk()
        .arg("score")
        .arg(&path)
        .args(["--format", "json"])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("\"total_score\""))
        .stdout(predicate::str::contains("\"catalog_fingerprint\""))
        .stdout(predicate::str::contains("\"categorization\""));
}

#[test]
fn validate_warns_on_unrecognized_labels() {
    let dir = TempDir::new().expect("temp dir should be created");
    let path = write_workbook(
        dir.path(),
        "typo.toml",
        r#"
track = "categorization"

[[responses]]
section = "social"
question = "3.4"
label = "No dues issues"
"#,
    );

    esgrisk()
        .arg("validate")
        .arg(&path)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("labels.unrecognized"))
        .stdout(predicate::str::contains("responses.missing"));
}

#[test]
fn validate_blocks_unrecognized_labels_under_strict_config() {
    let dir = TempDir::new().expect("temp dir should be created");
    fs::write(
        dir.path().join("esg.toml"),
        "[validation]\nstrict_labels = true\n",
    )
    .expect("config should write");
    let path = write_workbook(
        dir.path(),
        "typo.toml",
        r#"
track = "pre-screening"

[[responses]]
question = "E.1"
label = "Never"
"#,
    );

    esgrisk()
        .arg("validate")
        .arg(&path)
        .assert()
        .code(2)
        .stdout(predicate::str::contains("[BLOCKING] labels.unrecognized"));
}

#[test]
fn strict_config_rejects_bad_labels_at_score_time() {
    let dir = TempDir::new().expect("temp dir should be created");
    fs::write(
        dir.path().join("esg.toml"),
        "[validation]\nstrict_labels = true\n",
    )
    .expect("config should write");
    let path = write_workbook(
        dir.path(),
        "typo.toml",
        r#"
track = "categorization"

[[responses]]
section = "policy"
question = "1.1"
label = "Perhaps"
"#,
    );

    esgrisk()
        .arg("score")
        .arg(&path)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("not a valid response option"));
}

#[test]
fn portfolio_ranks_workbooks_worst_first() {
    let dir = TempDir::new().expect("temp dir should be created");
    write_workbook(
        dir.path(),
        "clean.toml",
        r#"
company = "Clean Co"
track = "pre-screening"

[[responses]]
question = "E.1"
label = "No"
"#,
    );
    write_workbook(
        dir.path(),
        "exposed.toml",
        r#"
company = "Exposed Co"
track = "pre-screening"

[[responses]]
question = "E.3"
label = "Yes"
"#,
    );

    let assert = esgrisk()
        .arg("portfolio")
        .arg(dir.path())
        .assert()
        .code(0)
        .stdout(predicate::str::contains("portfolio: 2 workbook(s)"));
    let output = String::from_utf8(assert.get_output().stdout.clone())
        .expect("stdout should be utf-8");
    let exposed = output.find("Exposed Co").expect("exposed entry listed");
    let clean = output.find("Clean Co").expect("clean entry listed");
    assert!(exposed < clean, "worst total must rank first");
}
