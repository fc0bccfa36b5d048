use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

fn bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_iqdiff-cli"))
}

fn write(dir: &Path, name: &str, body: &str) -> PathBuf {
    let p = dir.join(name);
    fs::write(&p, body).expect("write fixture");
    p
}

fn run_ok(cmd: &mut Command) -> Output {
    let out = cmd.output().expect("spawn command");
    assert!(
        out.status.success(),
        "command failed: status={:?}\nstdout:\n{}\nstderr:\n{}",
        out.status.code(),
        String::from_utf8_lossy(&out.stdout),
        String::from_utf8_lossy(&out.stderr)
    );
    out
}

fn compare_cmd(dir: &Path, num: &str) -> Command {
    let mut cmd = bin();
    cmd.arg("compare")
        .arg("--device-i")
        .arg(dir.join("fir_i_out.txt"))
        .arg("--device-q")
        .arg(dir.join("fir_q_out.txt"))
        .arg("--ref-i")
        .arg(dir.join("matlab_i_out.txt"))
        .arg("--ref-q")
        .arg(dir.join("matlab_q_out.txt"))
        .args(["--num", num]);
    cmd
}

#[test]
fn compare_prints_summed_deviation() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "fir_i_out.txt", "0400000\n0600000\n0200000\n");
    write(dir.path(), "fir_q_out.txt", "0000000\n1C00000\n0000000\n");
    write(dir.path(), "matlab_i_out.txt", "1.0\n1.5\n1.0\n");
    write(dir.path(), "matlab_q_out.txt", "0\n-1\n0.25\n");

    let out = run_ok(&mut compare_cmd(dir.path(), "3"));
    assert_eq!(String::from_utf8_lossy(&out.stdout).trim(), "0.75");

    let decoded = fs::read_to_string(dir.path().join("fir_q_out_float.txt")).unwrap();
    assert_eq!(decoded, "0.000000\n-1.000000\n0.000000\n");
}

#[test]
fn compare_length_mismatch_still_succeeds() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "fir_i_out.txt", "0400000\n0600000\n0200000\n");
    write(dir.path(), "fir_q_out.txt", "0200000\n");
    write(dir.path(), "matlab_i_out.txt", "9\n9\n9\n9\n");
    write(dir.path(), "matlab_q_out.txt", "0\n");

    let out = run_ok(&mut compare_cmd(dir.path(), "1"));
    assert_eq!(String::from_utf8_lossy(&out.stdout).trim(), "0.5");
    assert!(String::from_utf8_lossy(&out.stderr).contains("lengths differ"));
}

#[test]
fn compare_fails_when_num_exceeds_samples() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "fir_i_out.txt", "0400000\n");
    write(dir.path(), "fir_q_out.txt", "0400000\n");
    write(dir.path(), "matlab_i_out.txt", "1\n");
    write(dir.path(), "matlab_q_out.txt", "1\n");

    let out = compare_cmd(dir.path(), "2").output().expect("spawn command");
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("exceeds sequence length"));
}

#[test]
fn compare_fails_on_missing_reference() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "fir_i_out.txt", "0400000\n");
    write(dir.path(), "fir_q_out.txt", "0400000\n");

    let out = compare_cmd(dir.path(), "1").output().expect("spawn command");
    assert!(!out.status.success());
}

#[test]
fn decode_prints_output_paths() {
    let dir = tempfile::tempdir().unwrap();
    let i = write(dir.path(), "a.txt", "1FFFFFF\n");
    let q = write(dir.path(), "b.txt", "0200000\n");

    let out = run_ok(bin().arg("decode").arg("--i").arg(&i).arg("--q").arg(&q));
    let stdout = String::from_utf8_lossy(&out.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].ends_with("a_float.txt"));
    assert!(lines[1].ends_with("b_float.txt"));

    assert_eq!(
        fs::read_to_string(dir.path().join("a_float.txt")).unwrap(),
        "-0.000000\n"
    );
}

#[test]
fn hex2float_decodes_each_token() {
    let out = run_ok(bin().args(["hex2float", "0000000", "1C00000", "0A00000"]));
    assert_eq!(
        String::from_utf8_lossy(&out.stdout),
        "0.000000\n-1.000000\n0.500000\n"
    );

    let bad = bin().args(["hex2float", "XYZ"]).output().expect("spawn command");
    assert!(!bad.status.success());
}
