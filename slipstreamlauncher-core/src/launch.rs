use crate::settings::AppSettings;
use std::io;
use std::path::Path;
use std::process::{Command, Stdio};
use tracing::debug;

fn split_args_quoted(src: &str) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    let mut cur = String::new();
    let mut in_quotes = false;
    let mut quote_char: char = '\0';
    let mut escape = false;
    let mut quoted_token = false;
    for ch in src.chars() {
        if escape {
            cur.push(ch);
            escape = false;
            continue;
        }
        match ch {
            '\\' => { escape = true; }
            '"' | '\'' => {
                if in_quotes {
                    if ch == quote_char { in_quotes = false; } else { cur.push(ch); }
                } else {
                    in_quotes = true; quote_char = ch; quoted_token = true;
                }
            }
            c if c.is_whitespace() && !in_quotes => {
                if !cur.is_empty() || quoted_token { out.push(std::mem::take(&mut cur)); }
                quoted_token = false;
            }
            _ => cur.push(ch),
        }
    }
    if !cur.is_empty() || quoted_token { out.push(cur); }
    out
}

pub fn build_launch_args(settings: &AppSettings) -> Vec<String> {
    settings
        .custom_launch_options
        .as_deref()
        .map(split_args_quoted)
        .unwrap_or_default()
}

/// Starts `exe` from its own folder without keeping a handle on the child.
pub fn launch_executable(exe: &Path, settings: &AppSettings) -> io::Result<()> {
    let args = build_launch_args(settings);
    let mut cmd = Command::new(exe);
    cmd.args(&args)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null());
    if let Some(dir) = exe.parent() { cmd.current_dir(dir); }

    #[cfg(windows)]
    {
        use std::os::windows::process::CommandExt;
        use windows::Win32::System::Threading::{CREATE_NEW_PROCESS_GROUP, CREATE_NO_WINDOW};
        cmd.creation_flags(CREATE_NO_WINDOW.0 | CREATE_NEW_PROCESS_GROUP.0);
    }

    debug!("Spawning {:?}", cmd);
    let child = cmd.spawn()?;
    debug!("Started pid {}", child.id());
    Ok(())
}
