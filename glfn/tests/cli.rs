use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use std::process::Command;
use tempfile::TempDir;

fn cmd() -> assert_cmd::Command {
    assert_cmd::Command::from(Command::new(env!("CARGO_BIN_EXE_glfn")))
}

fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../glfn_generator/tests/fixtures").join(name)
}

fn generate_into(dir: &TempDir) -> (PathBuf, PathBuf) {
    let header = dir.path().join("include").join("gl_functions.h");
    let source = dir.path().join("src").join("get_gl_functions.cc");

    cmd()
        .arg("generate")
        .arg(fixture_path("registry.xml"))
        .arg("--declaration")
        .arg(&header)
        .arg("--initializer")
        .arg(&source)
        .assert()
        .success();

    (header, source)
}

// -- generate --

#[test]
fn generate_writes_both_sources() {
    let dir = TempDir::new().unwrap();
    let (header, source) = generate_into(&dir);

    assert_eq!(fs::read_to_string(header).unwrap(), fs::read_to_string(fixture_path("gl_functions.h")).unwrap());
    assert_eq!(fs::read_to_string(source).unwrap(), fs::read_to_string(fixture_path("get_gl_functions.cc")).unwrap());
}

#[test]
fn generate_requires_a_destination() {
    cmd()
        .arg("generate")
        .arg(fixture_path("registry.xml"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("--declaration or --initializer"));
}

#[test]
fn generate_leaves_no_files_behind_on_error() {
    let dir = TempDir::new().unwrap();
    let registry = dir.path().join("gl.xml");
    fs::write(&registry, "<registry><commands/><commands/></registry>").unwrap();
    let header = dir.path().join("gl_functions.h");

    cmd()
        .arg("generate")
        .arg(&registry)
        .arg("--declaration")
        .arg(&header)
        .assert()
        .failure()
        .stderr(predicate::str::contains("more than one <commands> section"));

    assert!(!header.exists());
}

#[test]
fn strict_mode_rejects_undefined_commands() {
    let dir = TempDir::new().unwrap();
    let registry = dir.path().join("gl.xml");
    fs::write(
        &registry,
        r#"<registry><commands/><feature api="gles2"><require><command name="glFlush"/></require></feature></registry>"#,
    )
    .unwrap();

    cmd()
        .arg("print")
        .arg(&registry)
        .assert()
        .success()
        .stdout(predicate::str::contains("glFlush").not());

    cmd()
        .arg("print")
        .arg(&registry)
        .arg("--strict")
        .assert()
        .failure()
        .stderr(predicate::str::contains("glFlush"));
}

// -- check --

#[test]
fn check_accepts_fresh_sources() {
    let dir = TempDir::new().unwrap();
    let (header, source) = generate_into(&dir);

    cmd()
        .arg("check")
        .arg(fixture_path("registry.xml"))
        .arg("--declaration")
        .arg(&header)
        .arg("--initializer")
        .arg(&source)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn check_names_the_outdated_source() {
    let dir = TempDir::new().unwrap();
    let (header, source) = generate_into(&dir);
    let edited = fs::read_to_string(&header).unwrap().replacen("glActiveTexture_;", "glActiveTexture;", 1);
    fs::write(&header, &edited).unwrap();

    cmd()
        .arg("check")
        .arg(fixture_path("registry.xml"))
        .arg("--declaration")
        .arg(&header)
        .arg("--initializer")
        .arg(&source)
        .assert()
        .code(1)
        .stdout(predicate::str::contains(format!("Header file {} needs to be re-generated", header.display())))
        .stdout(predicate::str::contains("Source file").not());

    // check never rewrites anything
    assert_eq!(fs::read_to_string(&header).unwrap(), edited);
}

// -- print --

#[test]
fn print_writes_the_initializer_to_stdout() {
    let expected = fs::read_to_string(fixture_path("get_gl_functions.cc")).unwrap();

    cmd()
        .arg("print")
        .arg(fixture_path("registry.xml"))
        .arg("--kind")
        .arg("initializer")
        .assert()
        .success()
        .stdout(predicate::str::diff(expected));
}

#[test]
fn print_honors_naming_options() {
    cmd()
        .arg("print")
        .arg(fixture_path("registry.xml"))
        .args(["--profile", "gl", "--namespace", "gfx", "--struct-name", "Table", "--field-suffix", "Fn"])
        .assert()
        .success()
        .stdout(predicate::str::contains("namespace gfx {\n\nstruct Table {\n"))
        .stdout(predicate::str::contains("  std::function<void(GLenum)> glBeginFn;\n"));
}

#[test]
fn print_rejects_unknown_kinds() {
    cmd()
        .arg("print")
        .arg(fixture_path("registry.xml"))
        .arg("--kind")
        .arg("header")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown output kind"));
}

#[test]
fn malformed_registry_fails() {
    let dir = TempDir::new().unwrap();
    let registry = dir.path().join("gl.xml");
    fs::write(&registry, "<registry><commands>").unwrap();

    cmd()
        .arg("print")
        .arg(&registry)
        .assert()
        .failure()
        .stderr(predicate::str::contains("malformed registry"));
}
