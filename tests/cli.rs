use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/input_data").join(name)
}

/// Fresh working directory per test, so default output files do not collide
fn work_dir(name: &str) -> PathBuf {
    let dir = Path::new(env!("CARGO_TARGET_TMPDIR")).join("cli").join(name);
    if dir.exists() {
        fs::remove_dir_all(&dir).unwrap();
    }
    fs::create_dir_all(&dir).unwrap();

    dir
}

fn run_in(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_turtlealign"))
        .args(args)
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

fn assert_fails_with(name: &str, args: &[&str], message: &str) {
    let dir = work_dir(name);
    let output = run_in(&dir, args);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(!output.status.success(), "{args:?} should fail");
    assert!(stderr.contains(message), "{args:?}: expected {message:?} in stderr:\n{stderr}");
    assert!(!dir.join("alignment_output.txt").exists());
}

#[test]
fn test_default_output_file() {
    let dir = work_dir("default_output");
    let seq1 = fixture("sequence1.fasta");
    let seq2 = fixture("sequence2.fasta");

    let output = run_in(&dir, &[seq1.to_str().unwrap(), seq2.to_str().unwrap()]);
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));

    let written = fs::read_to_string(dir.join("alignment_output.txt")).unwrap();
    assert_eq!(written, "TGAATTCAGTTA\n|| | || |  |\nTGGA-TC-G--A\n");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Alignment score: 5"));
}

#[test]
fn test_stdout_output() {
    let dir = work_dir("stdout_output");
    let output = run_in(&dir, &["-o", "-", "attag", "AATTA"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.lines().count(), 3);
    assert!(!dir.join("alignment_output.txt").exists());
}

#[test]
fn test_invalid_gap_penalty() {
    assert_fails_with("bad_gap", &["-g", "5", "ATTAG", "AATTA"], "gap penalty must");
    assert_fails_with("bad_gap_minus_one", &["-g", "-1", "ATTAG", "AATTA"], "gap penalty must");
}

#[test]
fn test_invalid_match_score() {
    assert_fails_with("bad_match", &["-m", "-5", "ATTAG", "AATTA"], "match must be");
}

#[test]
fn test_invalid_mismatch_score() {
    assert_fails_with("bad_mismatch", &["-n", "4", "ATTAG", "AATTA"], "mismatch penalty must be");
}

#[test]
fn test_invalid_dna() {
    assert_fails_with("bad_dna", &["ATTAG", "AFATTA"], "Invalid characters in DNA");
}

#[test]
fn test_score_overflow() {
    assert_fails_with("overflow", &["-g", "-1000000000", "AAAA", "A"], "score overflow");
}
