use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

fn spit() -> Command {
    Command::cargo_bin("spit").expect("binary builds")
}

#[test]
fn empty_source_prints_a_single_no_files_line() {
    let td = tempdir().unwrap();
    fs::create_dir_all(td.path().join("patching-tool/patches")).unwrap();

    spit()
        .current_dir(td.path())
        .arg("-l")
        .assert()
        .success()
        .stdout(predicate::eq("No files found in patching-tool/patches\n"));

    // Listing is read-only: the spit folder must not get created.
    assert!(!td.path().join("patching-tool/spit").exists());
}

#[test]
fn listing_is_sorted_with_markers() {
    let td = tempdir().unwrap();
    let patches = td.path().join("patching-tool/patches");
    fs::create_dir_all(&patches).unwrap();
    fs::write(patches.join("portal-45-nav.patch"), b"x").unwrap();
    fs::write(patches.join("de-6-a.patch"), b"x").unwrap();

    spit()
        .current_dir(td.path())
        .arg("-l")
        .assert()
        .success()
        .stdout(predicate::eq(
            "Listing files in patching-tool/patches:\n>> de-6-a.patch\n>> portal-45-nav.patch\n",
        ));
}

#[test]
fn lr_lists_the_spit_folder_and_equals_l_r() {
    let td = tempdir().unwrap();
    fs::create_dir_all(td.path().join("patching-tool/patches")).unwrap();
    let spit_dir = td.path().join("patching-tool/spit");
    fs::create_dir_all(&spit_dir).unwrap();
    fs::write(spit_dir.join("hotfix-7-a.patch"), b"x").unwrap();

    let bundled = spit()
        .current_dir(td.path())
        .arg("-lr")
        .assert()
        .success()
        .stdout(predicate::str::contains("patching-tool/spit"))
        .stdout(predicate::str::contains(">> hotfix-7-a.patch"))
        .get_output()
        .stdout
        .clone();

    let separate = spit()
        .current_dir(td.path())
        .args(["-l", "-r"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    assert_eq!(bundled, separate, "-lr and -l -r must print the same listing");
}

#[test]
fn listing_a_missing_folder_is_fatal() {
    let td = tempdir().unwrap();

    spit()
        .current_dir(td.path())
        .arg("-l")
        .assert()
        .failure()
        .stderr(predicate::str::contains("read directory"));
}
