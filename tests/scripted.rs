use std::io::Write;
use std::process::{Command, Stdio};

use anyhow::{Context, Result};

fn run_script(script: &str) -> Result<(String, String, i32)> {
    let mut child = Command::new(env!("CARGO_BIN_EXE_dsh"))
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .context("spawn shell")?;
    {
        let stdin = child.stdin.as_mut().context("stdin")?;
        stdin.write_all(script.as_bytes()).context("write")?;
    }
    let output = child.wait_with_output().context("wait")?;
    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(1);
    Ok((stdout, stderr, code))
}

#[test]
fn scripted_single_command() -> Result<()> {
    let (out, err, code) = run_script("cmd arg1 arg2\nexit\n")?;
    assert!(err.is_empty(), "stderr: {err}");
    assert!(out.contains("PARSED COMMAND LINE - TOTAL COMMANDS 1"));
    assert!(out.contains("<1> cmd [arg1 arg2]"));
    assert!(out.contains("exiting..."));
    assert_eq!(code, 0);
    Ok(())
}

#[test]
fn scripted_pipeline_display() -> Result<()> {
    let (out, err, _) = run_script("ls | grep txt | wc -l\nexit\n")?;
    assert!(err.is_empty(), "stderr: {err}");
    assert!(out.contains("PARSED COMMAND LINE - TOTAL COMMANDS 3"));
    assert!(out.contains("<1> ls"));
    assert!(out.contains("<2> grep [txt]"));
    assert!(out.contains("<3> wc [-l]"));
    Ok(())
}

#[test]
fn scripted_quoting() -> Result<()> {
    let (out, err, _) = run_script("echo \"hello world\"\nexit\n")?;
    assert!(err.is_empty(), "stderr: {err}");
    assert!(out.contains("<1> echo [hello world]"));
    Ok(())
}

#[test]
fn scripted_blank_line_warns() -> Result<()> {
    let (out, _, code) = run_script("   \nexit\n")?;
    assert!(out.contains("warning: no commands provided"));
    assert_eq!(code, 0);
    Ok(())
}

#[test]
fn scripted_pipe_limit() -> Result<()> {
    let (out, err, code) = run_script("c1|c2|c3|c4|c5|c6|c7|c8|c9\nexit\n")?;
    assert!(err.contains("piping limited to 8 commands"), "stderr: {err}");
    assert!(!out.contains("PARSED COMMAND LINE"));
    assert_eq!(code, 0);
    Ok(())
}

#[test]
fn scripted_overlong_line_rejected() -> Result<()> {
    // One byte over the limit: rejected with a message, never truncated
    // and parsed.
    let script = format!("{}\nexit\n", "a".repeat(dsh::MAX_LINE_LEN + 1));
    let (out, err, code) = run_script(&script)?;
    assert!(
        err.contains("command line exceeds 1024 bytes"),
        "stderr: {err}"
    );
    assert!(!out.contains("PARSED COMMAND LINE"));
    assert!(out.contains("exiting..."));
    assert_eq!(code, 0);
    Ok(())
}

#[test]
fn scripted_eof_exits_cleanly() -> Result<()> {
    let (_, err, code) = run_script("")?;
    assert!(err.is_empty(), "stderr: {err}");
    assert_eq!(code, 0);
    Ok(())
}
