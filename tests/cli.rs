use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn cmd(bin: &str, cwd: &Path) -> Command {
    let mut cmd = Command::cargo_bin(bin).unwrap();
    cmd.current_dir(cwd)
        .env_remove("CI")
        .env_remove("NO_SETUP")
        .env_remove("DEBUG")
        .env_remove("WP_BUILD_TOOLS_SCRIPTS_DIR");
    cmd
}

fn project(content: &str) -> TempDir {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("package.json"), content).unwrap();
    temp
}

fn read_manifest(dir: &Path) -> String {
    fs::read_to_string(dir.join("package.json")).unwrap()
}

#[test]
fn setup_force_backs_up_existing_release() {
    let temp = project(r#"{"name":"x","scripts":{"release":"custom-script.sh"}}"#);

    cmd("wp-build-tools", temp.path())
        .args(["setup", "--force"])
        .assert()
        .success()
        .stdout(predicate::str::contains("package.json updated successfully"));

    assert_eq!(
        read_manifest(temp.path()),
        "{\n  \"name\": \"x\",\n  \"scripts\": {\n    \"release\": \"wp-release\",\n    \"release-backup\": \"custom-script.sh\"\n  }\n}\n"
    );
}

#[test]
fn setup_without_tty_proceeds_without_prompt() {
    let temp = project(r#"{"name":"x"}"#);

    cmd("wp-build-tools", temp.path())
        .arg("setup")
        .assert()
        .success()
        .stdout(predicate::str::contains("Proceed with setup?").not());

    assert!(read_manifest(temp.path()).contains("\"release\": \"wp-release\""));
}

#[test]
fn setup_twice_is_idempotent() {
    let temp = project(r#"{"name":"x","scripts":{"release":"custom-script.sh"}}"#);

    cmd("wp-build-tools", temp.path())
        .args(["setup", "-f"])
        .assert()
        .success();
    let first = read_manifest(temp.path());

    cmd("wp-build-tools", temp.path())
        .args(["setup", "-f"])
        .assert()
        .success()
        .stdout(predicate::str::contains("already configured correctly"));

    assert_eq!(read_manifest(temp.path()), first);
}

#[test]
fn setup_quiet_when_already_configured() {
    let temp = project(r#"{"scripts":{"release":"wp-release"}}"#);

    cmd("wp-build-tools", temp.path())
        .args(["setup", "--quiet"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn setup_from_subdirectory_finds_root() {
    let temp = project(r#"{"name":"x"}"#);
    let nested = temp.path().join("assets/js");
    fs::create_dir_all(&nested).unwrap();

    cmd("wp-build-tools", &nested)
        .args(["setup", "-f", "-q"])
        .assert()
        .success();

    assert!(read_manifest(temp.path()).contains("wp-release"));
    assert!(!nested.join("package.json").exists());
}

#[test]
fn setup_malformed_manifest_fails() {
    let temp = project("{ \"name\": ");

    cmd("wp-build-tools", temp.path())
        .args(["setup", "--force"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Error parsing package.json"));

    assert_eq!(read_manifest(temp.path()), "{ \"name\": ");
}

#[test]
fn setup_without_manifest_fails() {
    let temp = TempDir::new().unwrap();
    if temp
        .path()
        .ancestors()
        .any(|dir| dir.join("package.json").is_file())
    {
        // 测试机器的临时目录上层存在 package.json，无法构造该场景
        return;
    }

    cmd("wp-build-tools", temp.path())
        .arg("setup")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("No package.json found"));
}

#[test]
fn postinstall_skips_in_ci() {
    let temp = project(r#"{"name":"x"}"#);

    cmd("wp-build-tools", temp.path())
        .arg("postinstall")
        .env("CI", "true")
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn postinstall_prints_pointer_without_writing() {
    let temp = project(r#"{"name":"x","scripts":{"release":"old.sh"}}"#);
    let original = read_manifest(temp.path());

    cmd("wp-build-tools", temp.path())
        .arg("postinstall")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Run: npx @dream-encode/wp-build-tools setup",
        ));

    assert_eq!(read_manifest(temp.path()), original);
}

#[test]
fn postinstall_swallows_malformed_manifest() {
    let temp = project("not json at all");

    cmd("wp-build-tools", temp.path())
        .arg("postinstall")
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn postinstall_debug_echoes_swallowed_error() {
    let temp = project("not json at all");

    cmd("wp-build-tools", temp.path())
        .arg("postinstall")
        .env("DEBUG", "1")
        .assert()
        .success()
        .stderr(predicate::str::contains("wp-build-tools postinstall error"));
}

#[test]
fn postinstall_skips_self_install() {
    let temp = project(r#"{"name":"@dream-encode/wp-build-tools","scripts":{"release":"./bin/release.sh"}}"#);
    let original = read_manifest(temp.path());

    cmd("wp-build-tools", temp.path())
        .args(["postinstall", "--force"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    assert_eq!(read_manifest(temp.path()), original);
}

#[cfg(unix)]
#[test]
fn release_forwards_args_env_and_exit_code() {
    let scripts = TempDir::new().unwrap();
    let work = TempDir::new().unwrap();
    fs::write(
        scripts.path().join("release.sh"),
        "echo \"args=$* yarn=$WP_RELEASE_VIA_YARN py=$PYTHONIOENCODING pwd=$(pwd)\"\nexit 7\n",
    )
    .unwrap();

    cmd("wp-release", work.path())
        .args(["minor", "--dry-run"])
        .env("WP_BUILD_TOOLS_SCRIPTS_DIR", scripts.path())
        .env("npm_config_user_agent", "yarn/1.22.19")
        .assert()
        .code(7)
        .stdout(predicate::str::contains("args=minor --dry-run yarn=1 py=utf-8"))
        .stdout(predicate::str::contains(
            work.path().file_name().unwrap().to_str().unwrap(),
        ));
}

#[cfg(unix)]
#[test]
fn zip_subcommand_forwards_args() {
    let scripts = TempDir::new().unwrap();
    fs::write(scripts.path().join("zip.sh"), "echo \"zip:$*\"\n").unwrap();

    cmd("wp-build-tools", scripts.path())
        .args(["zip", "--no-vendor", "extra"])
        .env("WP_BUILD_TOOLS_SCRIPTS_DIR", scripts.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("zip:--no-vendor extra"));

    cmd("wp-zip", scripts.path())
        .arg("-v")
        .env("WP_BUILD_TOOLS_SCRIPTS_DIR", scripts.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("zip:-v"));
}

#[cfg(unix)]
#[test]
fn help_flag_is_forwarded_to_scripts() {
    let scripts = TempDir::new().unwrap();
    fs::write(scripts.path().join("zip.sh"), "echo \"zip:$*\"\n").unwrap();
    fs::write(scripts.path().join("release.sh"), "echo \"release:$*\"\n").unwrap();

    cmd("wp-build-tools", scripts.path())
        .args(["zip", "--help"])
        .env("WP_BUILD_TOOLS_SCRIPTS_DIR", scripts.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("zip:--help"));

    cmd("wp-build-tools", scripts.path())
        .args(["release", "-h"])
        .env("WP_BUILD_TOOLS_SCRIPTS_DIR", scripts.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("release:-h"));
}

#[cfg(unix)]
#[test]
fn non_utf8_args_reach_the_script() {
    use std::ffi::OsString;
    use std::os::unix::ffi::OsStringExt;

    let scripts = TempDir::new().unwrap();
    let marker = scripts.path().join("arg.bin");
    fs::write(
        scripts.path().join("zip.sh"),
        format!("printf '%s' \"$1\" > '{}'\n", marker.display()),
    )
    .unwrap();
    let raw = vec![b'd', b'i', b'r', 0xff];

    cmd("wp-zip", scripts.path())
        .arg(OsString::from_vec(raw.clone()))
        .env("WP_BUILD_TOOLS_SCRIPTS_DIR", scripts.path())
        .assert()
        .success();

    assert_eq!(fs::read(&marker).unwrap(), raw);
}

#[test]
fn postinstall_unknown_flag_does_not_fail_install() {
    let temp = project(r#"{"name":"x"}"#);

    cmd("wp-build-tools", temp.path())
        .args(["postinstall", "--bogus"])
        .assert()
        .success()
        .stderr(predicate::str::is_empty());

    cmd("wp-build-tools", temp.path())
        .args(["postinstall", "--bogus"])
        .env("DEBUG", "1")
        .assert()
        .success()
        .stderr(predicate::str::contains("--bogus"));
}

#[test]
fn setup_unknown_flag_is_a_usage_error() {
    let temp = project(r#"{"name":"x"}"#);

    cmd("wp-build-tools", temp.path())
        .args(["setup", "--bogus"])
        .assert()
        .code(2);
}

#[test]
fn missing_script_fails() {
    let scripts = TempDir::new().unwrap();

    cmd("wp-build-tools", scripts.path())
        .arg("release-test")
        .env("WP_BUILD_TOOLS_SCRIPTS_DIR", scripts.path())
        .assert()
        .failure();
}
