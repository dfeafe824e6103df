// SPDX-License-Identifier: MPL-2.0
//! Opening web links in the user's default browser.

use crate::error::{Error, Result};
use std::process::{Command, Stdio};

/// Platform command that hands `url` to the default browser.
fn opener(url: &str) -> Command {
    let mut command = if cfg!(target_os = "windows") {
        let mut command = Command::new("cmd");
        command.args(["/C", "start", ""]);
        command
    } else if cfg!(target_os = "macos") {
        Command::new("open")
    } else {
        Command::new("xdg-open")
    };
    command.arg(url);
    command
}

/// Opens `url` and waits for the opener to hand it off.
///
/// Only `http` and `https` links are accepted.
pub fn open_url(url: &str) -> Result<()> {
    let url = url.trim();
    if !(url.starts_with("https://") || url.starts_with("http://")) {
        return Err(Error::Launch(format!("not a web link: '{url}'")));
    }

    let mut command = opener(url);
    let program = command.get_program().to_string_lossy().into_owned();
    let status = command
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map_err(|e| Error::Launch(format!("failed to launch '{program}': {e}")))?;

    if status.success() {
        Ok(())
    } else {
        Err(Error::Launch(format!("'{program}' exited with {status}")))
    }
}
