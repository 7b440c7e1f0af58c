use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;
use serde_json::{Value, json};

use crate::CliTest;

fn stdout_json(output: &std::process::Output) -> Result<Value> {
    Ok(serde_json::from_slice(&output.stdout)?)
}

#[test]
fn test_generate_summary() -> Result<()> {
    let test = CliTest::with_file(
        "org/capatect/test/resources.properties",
        "button.label=Save\nperson.lastname=Doe\nperson.firstname=John\n",
    )?;
    test.write_file(
        "org/capatect/test/resources_nl_NL.properties",
        "button.label=Opslaan\nperson.lastname=Jansen\nperson.firstname=Jan\n",
    )?;
    test.write_file("labels.properties", "title=Title\n")?;

    assert_cmd_snapshot!(test.generate_command(), @r"
    success: true
    exit_code: 0
    ----- stdout -----
      Labels                    (default): 1  1 key
      OrgCapatectTestResources  (default): 3, nl_NL: 3  3 keys
    ✓ Generated 2 bundles from 3 files

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_generate_empty_project() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.generate_command().output()?;

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "✓ Generated 0 bundles from 0 files\n"
    );

    Ok(())
}

#[test]
fn test_generate_json_model() -> Result<()> {
    let test = CliTest::with_file(
        "org/capatect/test/resources.properties",
        "button.label=Save\nperson.firstname=John\n",
    )?;
    test.write_file(
        "org/capatect/test/resources_nl_NL.properties",
        "button.label=Opslaan\n",
    )?;

    let output = test
        .generate_command()
        .args(["--json", "--alias", "org.capatect.test=test"])
        .output()?;

    assert!(output.status.success());
    assert_eq!(
        stdout_json(&output)?,
        json!({
            "rootName": "R",
            "rootPackage": "",
            "bundles": [{
                "name": "TestResources",
                "package": "test",
                "locales": {
                    "": ["BUTTON_LABEL", "PERSON_FIRSTNAME"],
                    "nl_NL": ["BUTTON_LABEL"]
                },
                "keys": [
                    { "identifier": "BUTTON_LABEL", "original": "button.label" },
                    { "identifier": "PERSON_FIRSTNAME", "original": "person.firstname" }
                ]
            }]
        })
    );

    Ok(())
}

#[test]
fn test_validate_reports_every_invalid_bundle() -> Result<()> {
    let test = CliTest::with_file("a/labels.properties", "x=1\ny=2\nz=3\n")?;
    test.write_file("a/labels_en_US.properties", "x=1\ny=2\n")?;
    test.write_file("b/labels.properties", "x=1\n")?;
    test.write_file("b/labels_de.properties", "x=1\ny=2\n")?;
    test.write_file("c/labels.properties", "x=1\n")?;
    test.write_file("c/labels_fr.properties", "y=1\n")?;

    assert_cmd_snapshot!(test.generate_command().arg("--validate"), @r"
    success: false
    exit_code: 1
    ----- stdout -----
    error: locales of `ALabels` define different numbers of keys  locale-key-count
      --> bundle ALabels
       = note: (default): 3 key(s)
       = note: en_US: 2 key(s)

    error: locales of `BLabels` define different numbers of keys  locale-key-count
      --> bundle BLabels
       = note: (default): 1 key(s)
       = note: de: 2 key(s)

    ✘ 2 problems (2 errors, 0 warnings)

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_unbalanced_locales_pass_without_validation() -> Result<()> {
    let test = CliTest::with_file("labels.properties", "x=1\ny=2\n")?;
    test.write_file("labels_en.properties", "x=1\n")?;

    let output = test.generate_command().output()?;
    assert!(output.status.success());

    Ok(())
}

#[test]
fn test_validate_from_config_file() -> Result<()> {
    let test = CliTest::with_file(".resgenrc.json", r#"{ "validateLocales": true }"#)?;
    test.write_file("labels.properties", "x=1\ny=2\n")?;
    test.write_file("labels_en.properties", "x=1\n")?;

    let output = test.generate_command().output()?;
    assert_eq!(output.status.code(), Some(1));

    Ok(())
}

#[test]
fn test_duplicate_keys_across_aliased_packages_is_error() -> Result<()> {
    let test = CliTest::with_file(
        ".resgenrc.json",
        r#"{ "aliases": { "web": "shop", "admin": "shop" } }"#,
    )?;
    test.write_file("admin/labels.properties", "title=Admin\n")?;
    test.write_file("web/labels.properties", "title=Web\n")?;

    let output = test.generate_command().output()?;

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("ShopLabels"), "stderr: {stderr}");
    assert!(stderr.contains("TITLE"), "stderr: {stderr}");

    Ok(())
}

#[test]
fn test_aliased_packages_merge() -> Result<()> {
    let test = CliTest::with_file("admin/labels.properties", "menu=Menu\n")?;
    test.write_file("web/labels.properties", "title=Web\n")?;

    let output = test
        .generate_command()
        .args(["--json", "--alias", "web=shop", "--alias", "admin=shop"])
        .output()?;

    assert!(output.status.success());
    let model = stdout_json(&output)?;
    assert_eq!(model["bundles"].as_array().map(Vec::len), Some(1));
    assert_eq!(model["bundles"][0]["name"], "ShopLabels");
    assert_eq!(model["bundles"][0]["locales"][""], json!(["MENU", "TITLE"]));

    Ok(())
}

#[test]
fn test_key_collision_is_warning() -> Result<()> {
    let test = CliTest::with_file("labels.properties", "a.b=1\na-b=2\n")?;

    let output = test.generate_command().output()?;

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("warning: `a.b` and `a-b` both become `A_B`"));
    assert!(stdout.contains("✘ 1 problem (0 errors, 1 warning)"));
    assert!(stdout.contains("✓ Generated 1 bundle from 1 file"));

    Ok(())
}

#[test]
fn test_source_root_and_include_flags() -> Result<()> {
    let test = CliTest::with_file(
        "src/main/resources/app/labels.xml",
        r#"<?xml version="1.0" encoding="UTF-8"?>
<!DOCTYPE properties SYSTEM "http://java.sun.com/dtd/properties.dtd">
<properties>
  <comment>labels</comment>
  <entry key="ok">OK</entry>
</properties>
"#,
    )?;
    test.write_file("src/main/resources/app/labels.properties", "cancel=Cancel\n")?;

    let output = test
        .generate_command()
        .args([
            "--json",
            "--source-root",
            "src/main/resources",
            "--include",
            "**/*.xml",
            "--root-name",
            "com.example.Messages",
        ])
        .output()?;

    assert!(output.status.success());
    let model = stdout_json(&output)?;
    assert_eq!(model["rootName"], "Messages");
    assert_eq!(model["rootPackage"], "com.example");
    assert_eq!(model["bundles"][0]["name"], "AppLabels");
    assert_eq!(model["bundles"][0]["locales"][""], json!(["OK"]));

    Ok(())
}

#[test]
fn test_file_name_flag() -> Result<()> {
    let test = CliTest::with_file("a/Messages.properties", "x=1\n")?;
    test.write_file("a/labels.properties", "y=1\n")?;

    let output = test
        .generate_command()
        .args(["--json", "--file-name", "messages.PROPERTIES"])
        .output()?;

    assert!(output.status.success());
    let model = stdout_json(&output)?;
    assert_eq!(model["bundles"].as_array().map(Vec::len), Some(1));
    assert_eq!(model["bundles"][0]["name"], "AMessages");

    Ok(())
}

#[test]
fn test_output_file() -> Result<()> {
    let test = CliTest::with_file("labels.properties", "title=T\n")?;

    let output = test
        .generate_command()
        .args(["--output", "target/model.json"])
        .output()?;

    assert!(output.status.success());
    let written: Value = serde_json::from_str(&test.read_file("target/model.json")?)?;
    assert_eq!(written["bundles"][0]["name"], "Labels");

    Ok(())
}

#[test]
fn test_missing_source_root_is_error() -> Result<()> {
    let test = CliTest::new()?;

    let output = test
        .generate_command()
        .args(["--source-root", "does-not-exist"])
        .output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("does-not-exist"));

    Ok(())
}

#[test]
fn test_malformed_unicode_escape_is_error() -> Result<()> {
    let test = CliTest::with_file("labels.properties", "bad\\u12=x\n")?;

    let output = test.generate_command().output()?;

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("labels.properties"), "stderr: {stderr}");

    Ok(())
}

#[test]
fn test_verbose_logs_to_stderr() -> Result<()> {
    let test = CliTest::with_file("labels.properties", "title=T\n")?;

    let output = test.generate_command().arg("-v").output()?;

    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("no .resgenrc.json found"), "stderr: {stderr}");
    assert!(stderr.contains("Scanning"), "stderr: {stderr}");
    assert!(stderr.contains("labels.properties"), "stderr: {stderr}");

    Ok(())
}
